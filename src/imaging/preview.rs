//! On-screen preview of the selected image

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// The handle points at the file on disk and is decoded lazily by the renderer.
/// Replacing or dropping a `Preview` releases the decoded image.
#[derive(Debug)]
pub struct Preview {
    handle: Handle,
    source: PathBuf,
}

impl Preview {
    /// Create a preview for a file; nothing is read until it is drawn
    pub fn from_path(path: &Path) -> Self {
        Self {
            handle: Handle::from_path(path),
            source: path.to_path_buf(),
        }
    }

    /// Handle for the image widget
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Drop for Preview {
    fn drop(&mut self) {
        log::debug!("Released preview of {}", self.source().display());
    }
}
