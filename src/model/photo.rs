use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Extensions accepted for gallery photos.
const GALLERY_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Where an attached photo came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    /// A direct capture. Its filename is synthesized at submit time.
    Capture,
    /// A file picked from the gallery. Its own filename is kept.
    Gallery,
}

/// A photo attached to an inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub filename: String,
    pub content: Bytes,
    pub source: PhotoSource,
}

/// Errors raised while attaching photos.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("cannot read photo {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported photo type (png, jpg, jpeg only): {}", .0.display())]
    UnsupportedType(PathBuf),
}

/// Filename given to a direct capture taken at `at`.
pub fn capture_filename(at: NaiveDateTime) -> String {
    format!("foto_camera_{}.jpg", at.format("%Y%m%d_%H%M%S"))
}

/// Reads a direct capture from `path`, naming it after `at`.
pub fn load_capture(path: &Path, at: NaiveDateTime) -> Result<Photo, PhotoError> {
    let content = read(path)?;
    Ok(Photo {
        filename: capture_filename(at),
        content,
        source: PhotoSource::Capture,
    })
}

/// Reads a gallery photo from `path`, keeping its file name.
pub fn load_gallery(path: &Path) -> Result<Photo, PhotoError> {
    let extension_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| GALLERY_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
    let filename = path.file_name().and_then(|n| n.to_str());
    let (true, Some(filename)) = (extension_ok, filename) else {
        return Err(PhotoError::UnsupportedType(path.to_path_buf()));
    };
    let filename = filename.to_string();
    let content = read(path)?;
    Ok(Photo {
        filename,
        content,
        source: PhotoSource::Gallery,
    })
}

/// Splits a `;`-separated list of gallery paths, ignoring blank entries.
pub fn split_gallery_paths(input: &str) -> Vec<PathBuf> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn read(path: &Path) -> Result<Bytes, PhotoError> {
    fs::read(path).map(Bytes::from).map_err(|source| PhotoError::Read {
        path: path.to_path_buf(),
        source,
    })
}
