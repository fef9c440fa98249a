use thiserror::Error;

/// Everything that can go wrong between pressing "Analyze" and getting text back.
///
/// The set is closed: the view matches on it to pick a localized message, so
/// variants carry plain strings and the type stays `Clone` for iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Analyze was triggered with no image selected
    #[error("no image selected")]
    NoImageSelected,

    /// The file is not one of the accepted image types
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    /// The image file could not be read or encoded
    #[error("{0}")]
    Read(String),

    /// Transport failure or error reported by the AI service
    #[error("{0}")]
    AnalysisFailed(String),

    /// Anything that is not one of the above (e.g. a crashed worker)
    #[error("unknown error")]
    Unknown,
}

impl AnalysisError {
    /// Underlying detail to show after the generic message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            AnalysisError::Read(message) | AnalysisError::AnalysisFailed(message) => {
                Some(message.as_str())
            }
            AnalysisError::UnsupportedImage(name) => Some(name.as_str()),
            AnalysisError::NoImageSelected | AnalysisError::Unknown => None,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::AnalysisFailed(format!("request to AI service failed: {}", err))
    }
}
