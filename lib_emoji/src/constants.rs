/// Edge length of the emoji canvas, in pixels.
pub const GRID_SIZE: usize = 16;

/// Total cell count of the canvas.
pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;

pub const FORMAT_NAME: &str = "Emoji array";
pub const FILE_EXTENSIONS: &[&str] = &["txt", "h"];
