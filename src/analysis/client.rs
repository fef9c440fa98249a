//! Analysis client
//!
//! `Analyzer` is the seam between the UI and the AI service. The app holds an
//! `Arc<dyn Analyzer>`; `GeminiClient` is the real implementation and tests
//! plug in their own.

use async_trait::async_trait;

use super::error::AnalysisError;
use super::gemini::{GenerateContentRequest, GenerateContentResponse};
use super::prompt::ANALYSIS_PROMPT;
use crate::imaging::EncodedImagePart;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Something that turns an encoded thermal image into a written analysis
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// One request, resolved or failed as a whole
    async fn analyze(&self, image: EncodedImagePart) -> Result<String, AnalysisError>;
}

/// Connection details for the Gemini API
#[derive(Clone)]
pub struct AnalysisConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

// Keep the key out of logs
impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Google Gemini `generateContent` client
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: AnalysisConfig,
}

impl GeminiClient {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Endpoint for a single, non-streaming generation
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl Analyzer for GeminiClient {
    async fn analyze(&self, image: EncodedImagePart) -> Result<String, AnalysisError> {
        let body = GenerateContentRequest::prompt_with_image(ANALYSIS_PROMPT, image);

        log::info!("🔥 Sending thermal image to {}", self.config.model);

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            log::error!("Gemini API error (HTTP {}): {}", status, body);
            return Err(AnalysisError::AnalysisFailed(format!(
                "Gemini API error (HTTP {}): {}",
                status.as_u16(),
                body
            )));
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            AnalysisError::AnalysisFailed(format!("unreadable response from Gemini API: {}", e))
        })?;

        if let Some(reason) = envelope.block_reason() {
            return Err(AnalysisError::AnalysisFailed(format!(
                "Gemini API refused the image ({})",
                reason
            )));
        }

        envelope.text().ok_or_else(|| {
            let finish = envelope
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("no candidates");
            AnalysisError::AnalysisFailed(format!("Gemini API returned no text ({})", finish))
        })
    }
}
