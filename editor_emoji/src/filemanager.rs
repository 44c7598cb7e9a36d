use lib_emoji::constants::{FILE_EXTENSIONS, FORMAT_NAME};
use lib_emoji::text::decoder::LoadError;
use lib_emoji::text::encoder::ExportError;
use lib_emoji::text::format::sanitize_name;
use lib_emoji::{export, load, PixelGrid};
use log::info;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File dialog was canceled")]
    DialogCanceled,

    #[error("Invalid file path")]
    InvalidPath,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Emoji parse error: {0}")]
    LoadFailed(#[from] LoadError),

    #[error("Emoji export error: {0}")]
    ExportFailed(#[from] ExportError),
}

/// Picks an exported declaration file and parses it into a fresh grid.
/// A failure here leaves the editor's live grid untouched; the caller
/// swaps the returned grid in only on success.
pub fn open_emoji() -> Result<PixelGrid, FileError> {
    let path = rfd::FileDialog::new()
        .add_filter(FORMAT_NAME, FILE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
        .ok_or(FileError::DialogCanceled)?;

    let content = read_file(&path)?;
    Ok(load(&content)?)
}

/// Serializes the grid under `display_name` and writes it where the
/// user chooses, suggesting `<name>_emoji.txt` as the file name.
pub fn save_emoji(grid: &PixelGrid, display_name: &str) -> Result<String, FileError> {
    // Serialize before opening the dialog: export failures must never
    // leave an artifact behind
    let text = export(grid, display_name)?;

    let suggested = format!("{}_emoji.txt", sanitize_name(display_name));
    let path = rfd::FileDialog::new()
        .set_file_name(&suggested)
        .save_file()
        .ok_or(FileError::DialogCanceled)?;

    let path_str = path.to_str().ok_or(FileError::InvalidPath)?;
    let mut file = File::create(path_str)?;
    file.write_all(text.as_bytes())?;
    info!("Emoji saved to {}", path_str);

    Ok(path_str.to_string())
}

fn read_file(path: &PathBuf) -> Result<String, io::Error> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}
