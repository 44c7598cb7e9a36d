use lazy_static::lazy_static;
use log::{debug, error, info};
use regex::Regex;
use std::num::ParseIntError;
use thiserror::Error;

use crate::codec;
use crate::constants::PIXEL_COUNT;
use crate::grid::PixelGrid;

lazy_static! {
    // First uint16_t array declaration in the input; everything between
    // the braces is the array body
    static ref ARRAY_DECL: Regex =
        Regex::new(r"const\s+uint16_t\s+\w+\[\]\s*=\s*\{([^}]+)\}").unwrap();
    static ref HEX_TOKEN: Regex = Regex::new(r"0x[0-9A-Fa-f]+").unwrap();
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no array declaration found")]
    MissingDeclaration,
    #[error("expected {expected} values, found {found}")]
    ValueCount { expected: usize, found: usize },
    #[error("invalid hex value {value}")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses exported declaration text back into a fresh grid.
///
/// The scan is shape-tolerant but count-strict: any surrounding text is
/// ignored, the first `const uint16_t <name>[] = { ... }` declaration
/// wins, and every `0x...` token inside its braces is harvested - but
/// exactly 256 of them must be present.
///
/// # Errors
/// - `LoadError::MissingDeclaration` if no array declaration matches.
/// - `LoadError::ValueCount` if the brace body does not hold exactly
///   256 hex tokens.
/// - `LoadError::InvalidValue` if a harvested token does not fit in a
///   `u16` (the token shape itself is guaranteed by the scan).
pub fn load(text: &str) -> Result<PixelGrid, LoadError> {
    let body = ARRAY_DECL
        .captures(text)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| {
            error!("No uint16_t array declaration found in input");
            LoadError::MissingDeclaration
        })?
        .as_str();
    debug!("Array body located ({} bytes)", body.len());

    let tokens: Vec<&str> = HEX_TOKEN.find_iter(body).map(|m| m.as_str()).collect();
    if tokens.len() != PIXEL_COUNT {
        error!("Expected {} values, found {}", PIXEL_COUNT, tokens.len());
        return Err(LoadError::ValueCount {
            expected: PIXEL_COUNT,
            found: tokens.len(),
        });
    }

    let mut grid = PixelGrid::new();
    for (cell, token) in grid.cells_mut().iter_mut().zip(&tokens) {
        let word = u16::from_str_radix(&token[2..], 16).map_err(|source| {
            error!("Hex value {} does not fit in a uint16_t", token);
            LoadError::InvalidValue {
                value: token.to_string(),
                source,
            }
        })?;
        *cell = codec::decode(word);
    }

    info!("Loaded {} pixels from declaration", PIXEL_COUNT);
    Ok(grid)
}
