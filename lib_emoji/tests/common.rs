use lib_emoji::constants::GRID_SIZE;
use lib_emoji::{PixelGrid, Rgb};

// Colors on the RGB565 quantization lattice, so an export/load cycle
// reproduces them exactly
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const GRAY: Rgb = Rgb::new(132, 134, 132);

/// A recognizable 16x16 face: red border, yellow fill, blue eyes,
/// green mouth, one gray beauty mark.
pub fn smiley_grid() -> PixelGrid {
    let mut grid = PixelGrid::new();

    for i in 0..GRID_SIZE {
        grid.set_pixel(0, i, RED).unwrap();
        grid.set_pixel(GRID_SIZE - 1, i, RED).unwrap();
        grid.set_pixel(i, 0, RED).unwrap();
        grid.set_pixel(i, GRID_SIZE - 1, RED).unwrap();
    }

    for row in 1..GRID_SIZE - 1 {
        for col in 1..GRID_SIZE - 1 {
            grid.set_pixel(row, col, YELLOW).unwrap();
        }
    }

    grid.set_pixel(5, 5, BLUE).unwrap();
    grid.set_pixel(5, 10, BLUE).unwrap();
    for col in 5..=10 {
        grid.set_pixel(10, col, GREEN).unwrap();
    }
    grid.set_pixel(12, 3, GRAY).unwrap();

    grid
}

/// A declaration holding `count` copies of `word`, for count-strict
/// parser tests.
pub fn declaration_with_values(count: usize, word: &str) -> String {
    format!(
        "const uint16_t EMOJI_TEST[] = {{\n    {}\n}};",
        vec![word; count].join(", ")
    )
}
