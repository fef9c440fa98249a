//! Thermal image analysis
//!
//! - `client.rs` - `Analyzer` trait and the Gemini implementation
//! - `gemini.rs` - request/response wire types
//! - `prompt.rs` - the fixed instruction sent with every image
//! - `error.rs` - the closed set of failures the UI knows how to show

pub mod client;
pub mod error;
pub mod gemini;
pub mod prompt;

use std::sync::Arc;

pub use client::{AnalysisConfig, Analyzer, GeminiClient};
pub use error::AnalysisError;

use crate::imaging::encode_file;
use crate::state::data::SelectedImage;

/// Encode the image, then ask the analyzer about it
pub async fn run(analyzer: Arc<dyn Analyzer>, image: SelectedImage) -> Result<String, AnalysisError> {
    let part = encode_file(&image).await?;
    analyzer.analyze(part).await
}


#[cfg(test)]
mod tests {
    use super::testing::MockAnalyzer;
    use super::*;

    #[tokio::test]
    async fn test_run_encodes_before_analyzing() {
        let path = std::env::temp_dir().join(format!("thermal-run-{}.png", std::process::id()));
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
        let mock = MockAnalyzer::replying("- Normal");

        let text = run(mock.clone(), SelectedImage::from_path(&path).unwrap()).await.unwrap();

        assert_eq!(text, "- Normal");
        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].mime_type, "image/png");
        assert_eq!(calls[0].data, "iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn test_run_stops_on_read_error() {
        let mock = MockAnalyzer::replying("unused");

        let err = run(mock.clone(), SelectedImage::from_path("/nonexistent/x.jpg").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Read(_)));
        assert_eq!(mock.call_count(), 0);
    }
}
