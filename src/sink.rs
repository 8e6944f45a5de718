use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use super::error::*;

/// Destination for finished placeholder images.
pub trait ImageSink {
    /// Stores `img` under `filename` and returns where it went.
    fn write(&mut self, filename: &str, img: &RgbImage) -> Result<PathBuf, PlaceholderError>;
}

/// Writes PNG files into an existing directory, overwriting old ones.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    /// Like [`DirectorySink::new`], but fails up front if `dir` is not an
    /// existing directory. The directory is never created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PlaceholderError> {
        let dir = dir.into();
        let meta = match std::fs::metadata(&dir) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PlaceholderError::MissingDirectory(dir))
            }
            Err(e) => return Err(e.into()),
        };
        if !meta.is_dir() {
            return Err(PlaceholderError::NotADirectory(dir))
        }
        Ok(DirectorySink::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageSink for DirectorySink {
    fn write(&mut self, filename: &str, img: &RgbImage) -> Result<PathBuf, PlaceholderError> {
        let path = self.dir.join(filename);
        log::debug!("encoding {}x{} PNG to '{}'", img.width(), img.height(), path.display());
        img.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }
}

/// Keeps images in memory, in write order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub images: Vec<(String, RgbImage)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<&RgbImage> {
        self.images.iter()
            .find(|(name, _)| name == filename)
            .map(|(_, img)| img)
    }
}

impl ImageSink for MemorySink {
    fn write(&mut self, filename: &str, img: &RgbImage) -> Result<PathBuf, PlaceholderError> {
        self.images.push((filename.to_string(), img.clone()));
        Ok(PathBuf::from(filename))
    }
}
