use log::{debug, error, info};
use thiserror::Error;

use super::format::{sanitize_identifier, IDENT_PREFIX, WORD_TYPE};
use crate::codec;
use crate::constants::GRID_SIZE;
use crate::grid::PixelGrid;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Display name is empty")]
    EmptyName,
}

/// Renders a grid as a C array declaration ready for a firmware header.
///
/// # Parameters
/// - `grid`: The canvas to serialize.
/// - `display_name`: The human-chosen name; echoed verbatim in the
///   header comment and sanitized into the array identifier.
///
/// # Returns
/// The full declaration text: a `// <name> (16x16 pixels)` comment,
/// then `const uint16_t EMOJI_<IDENT>[] = { ... };` with one line of
/// 16 zero-padded `0xXXXX` words per grid row.
///
/// # Errors
/// - Returns `ExportError::EmptyName` if `display_name` is empty.
pub fn export(grid: &PixelGrid, display_name: &str) -> Result<String, ExportError> {
    if display_name.is_empty() {
        error!("Refusing to export with an empty display name");
        return Err(ExportError::EmptyName);
    }

    let ident = sanitize_identifier(display_name);
    info!("Exporting grid as {}{}", IDENT_PREFIX, ident);

    let mut lines = Vec::with_capacity(GRID_SIZE + 3);
    lines.push(format!(
        "// {} ({}x{} pixels)",
        display_name, GRID_SIZE, GRID_SIZE
    ));
    lines.push(format!(
        "const {} {}{}[] = {{",
        WORD_TYPE, IDENT_PREFIX, ident
    ));

    for (row_index, row) in grid.rows().enumerate() {
        let mut line = String::from("    ");
        for (col, &cell) in row.iter().enumerate() {
            line.push_str(&format!("0x{:04X}", codec::encode(cell)));
            if col < GRID_SIZE - 1 {
                line.push_str(", ");
            }
        }
        // Rows are comma-separated; the final row is not
        if row_index < GRID_SIZE - 1 {
            line.push(',');
        }
        lines.push(line);
    }

    lines.push("};".to_string());
    debug!("Export produced {} lines", lines.len());

    Ok(lines.join("\n"))
}
