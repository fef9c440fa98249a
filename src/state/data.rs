//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the file pickers, the analysis pipeline and the UI layer.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::analysis::AnalysisError;

/// The image types the AI service accepts inline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
    Webp,
}

impl ImageMime {
    /// Extensions offered in the file picker
    pub const EXTENSIONS: [&'static str; 4] = ["jpg", "jpeg", "png", "webp"];

    /// MIME type string as sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
            ImageMime::Webp => "image/webp",
        }
    }

    /// Declared type of a file, from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageMime::Jpeg),
            "png" => Some(ImageMime::Png),
            "webp" => Some(ImageMime::Webp),
            _ => None,
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The image currently chosen for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    /// Full path to the file on disk
    pub path: PathBuf,
    /// Filename only (e.g., "panel_A3.png")
    pub name: String,
    /// Type declared by the file extension
    pub mime: ImageMime,
}

impl SelectedImage {
    /// Accept a file from the picker or a drop.
    ///
    /// Both paths go through here, so the type check is the same for each.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, AnalysisError> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let mime = ImageMime::from_path(&path)
            .ok_or_else(|| AnalysisError::UnsupportedImage(name.clone()))?;

        Ok(SelectedImage { path, name, mime })
    }
}

/// Text returned by the model for one request
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Model output, untouched
    pub text: String,
    /// When the response arrived
    pub completed_at: DateTime<Local>,
}

impl Analysis {
    pub fn new(text: String) -> Self {
        Self {
            text,
            completed_at: Local::now(),
        }
    }
}
