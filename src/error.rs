use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 6 hex digits, found {0}")]
    Length(usize),
    #[error("invalid hex digits '{0}'")]
    Digit(String),
}

#[derive(Error, Debug)]
pub enum PlaceholderError {
    #[error("invalid placeholder color, {0}")]
    ColorError(#[from] ColorError),
    #[error("output directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("output path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot access output directory\n{0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to save image\n{0}")]
    ImageSaveError(#[from] image::ImageError),
    #[error("canvas buffer does not match its dimensions")]
    CanvasSize,
}
