use super::data::{Analysis, SelectedImage};
use crate::analysis::AnalysisError;
use crate::imaging::Preview;

/// Where the inspection currently stands. Exactly one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// No image yet
    Idle,
    /// Image selected, nothing run on it yet
    Ready,
    /// A request is in flight
    Loading,
    Success(Analysis),
    Failure(AnalysisError),
}

/// Handed out when an analysis starts; the matching completion must bring the id back
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub id: u64,
    pub image: SelectedImage,
}

/// State of the single inspection view: the active image, its preview and the status.
///
/// All transitions go through the methods below so the UI can't get into
/// combinations like "loading with a stale result on screen".
#[derive(Debug)]
pub struct Inspection {
    image: Option<SelectedImage>,
    preview: Option<Preview>,
    status: Status,
    /// Id of the request whose result we are waiting for
    pending: Option<u64>,
    next_ticket: u64,
}

impl Default for Inspection {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspection {
    pub fn new() -> Self {
        Self {
            image: None,
            preview: None,
            status: Status::Idle,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    /// The analyze button is live only with an image and nothing in flight
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && !self.is_loading()
    }

    pub fn result(&self) -> Option<&Analysis> {
        match &self.status {
            Status::Success(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.status {
            Status::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Make `image` the active one. Works from any state and always lands in `Ready`.
    ///
    /// A request still in flight for the previous image is abandoned: its
    /// completion will be discarded.
    pub fn select_image(&mut self, image: SelectedImage, preview: Preview) {
        if let Some(id) = self.pending.take() {
            log::info!("Abandoning analysis #{} for the previous image", id);
        }
        log::info!("🖼️  Selected {} ({})", image.name, image.mime);

        // Dropping the old preview releases it
        self.preview = Some(preview);
        self.image = Some(image);
        self.status = Status::Ready;
    }

    /// A file was offered but can't be used. The current image, if any, stays.
    pub fn reject_image(&mut self, err: AnalysisError) {
        if self.is_loading() {
            log::warn!("Ignoring rejected file while analysis is running: {}", err);
            return;
        }
        log::warn!("⚠️  Rejected file: {}", err);
        self.status = Status::Failure(err);
    }

    /// Start an analysis of the active image.
    ///
    /// Without an image this becomes a validation failure and `None` is
    /// returned, so no request is made. While loading it does nothing.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.is_loading() {
            log::warn!("Analysis already running, ignoring request");
            return None;
        }

        let Some(image) = self.image.clone() else {
            self.status = Status::Failure(AnalysisError::NoImageSelected);
            return None;
        };

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(id);
        self.status = Status::Loading;

        log::info!("⏳ Starting analysis #{} of {}", id, image.name);

        Some(AnalysisTicket { id, image })
    }

    /// Record the outcome of request `id`.
    ///
    /// Returns false (and changes nothing) when `id` is not the request being
    /// waited on.
    pub fn complete(&mut self, id: u64, result: Result<String, AnalysisError>) -> bool {
        if self.pending != Some(id) {
            log::info!("Discarding result of stale analysis #{}", id);
            return false;
        }
        self.pending = None;

        self.status = match result {
            Ok(text) => {
                log::info!("✅ Analysis #{} complete ({} chars)", id, text.len());
                Status::Success(Analysis::new(text))
            }
            Err(err) => {
                log::error!("Analysis #{} failed: {}", id, err);
                Status::Failure(err)
            }
        };
        true
    }

    /// Release the preview and forget the image (window closing)
    pub fn teardown(&mut self) {
        self.preview = None;
        self.image = None;
        self.pending = None;
        self.status = Status::Idle;
    }
}
