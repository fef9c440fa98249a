//! Startup configuration
//!
//! Settings come from an optional JSON file and can be overridden by
//! environment variables. The API key only ever comes from the environment.
//!
//! The settings file lives in the user's config directory:
//! - Linux: ~/.config/thermal-inspector/settings.json
//! - macOS: ~/Library/Application Support/thermal-inspector/settings.json
//! - Windows: %APPDATA%\thermal-inspector\settings.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analysis::client::{DEFAULT_MODEL, GEMINI_API_BASE};
use crate::analysis::AnalysisConfig;
use crate::ui::strings::Locale;

/// Variables checked for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

const MODEL_VAR: &str = "THERMAL_INSPECTOR_MODEL";
const API_BASE_VAR: &str = "THERMAL_INSPECTOR_API_BASE";
const LOCALE_VAR: &str = "THERMAL_INSPECTOR_LOCALE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is not set (set GEMINI_API_KEY or API_KEY)")]
    MissingCredential,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// User-editable settings (everything except the key)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Gemini model id
    pub model: String,
    /// API root, without the `/models/...` part
    pub api_base_url: String,
    /// Language of the interface
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: GEMINI_API_BASE.to_string(),
            locale: Locale::default(),
        }
    }
}

impl Settings {
    /// Parse from JSON string (settings file contents)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply environment overrides
    fn apply_env(&mut self, env: &impl Fn(&str) -> Option<String>) {
        if let Some(model) = non_empty(env(MODEL_VAR)) {
            self.model = model;
        }
        if let Some(base) = non_empty(env(API_BASE_VAR)) {
            self.api_base_url = base;
        }
        if let Some(locale) = non_empty(env(LOCALE_VAR)) {
            match Locale::from_code(&locale) {
                Some(locale) => self.locale = locale,
                None => log::warn!("Unknown locale {:?} in {}, keeping {:?}", locale, LOCALE_VAR, self.locale),
            }
        }
    }
}

/// Everything the application needs to start
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load from the settings file (if any) and the process environment.
    ///
    /// A missing API key is fatal: the app cannot do anything without it.
    pub fn load() -> Result<Self, ConfigError> {
        let settings_path = Self::settings_path();
        let contents = match &settings_path {
            Some(path) => read_optional(path)?,
            None => None,
        };
        let path = settings_path.unwrap_or_default();
        Self::from_sources(contents.as_deref(), &path, |name| std::env::var(name).ok())
    }

    /// Build from settings file contents and an environment lookup
    pub fn from_sources(
        settings_json: Option<&str>,
        settings_path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = match settings_json {
            Some(json) => Settings::from_json(json).map_err(|source| ConfigError::Parse {
                path: settings_path.to_path_buf(),
                source,
            })?,
            None => Settings::default(),
        };
        settings.apply_env(&env);

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| non_empty(env(name)))
            .ok_or(ConfigError::MissingCredential)?;

        let analysis = AnalysisConfig {
            api_key,
            model: settings.model.clone(),
            base_url: settings.api_base_url.clone(),
        };

        Ok(Config { settings, analysis })
    }

    /// Where the settings file would be, if the platform has a config directory
    pub fn settings_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("thermal-inspector");
        path.push("settings.json");
        Some(path)
    }
}

/// File contents, or `None` if the file does not exist
fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            log::info!("📁 Loaded settings from {}", path.display());
            Ok(Some(contents))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_key() {
        let config = Config::from_sources(None, Path::new(""), env_from(&[("GEMINI_API_KEY", "abc")])).unwrap();

        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.analysis.api_key, "abc");
        assert_eq!(config.analysis.model, "gemini-2.5-flash");
        assert_eq!(config.analysis.base_url, GEMINI_API_BASE);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = Config::from_sources(None, Path::new(""), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential));

        let err = Config::from_sources(None, Path::new(""), env_from(&[("API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential));
    }

    #[test]
    fn test_key_fallback_order() {
        let config = Config::from_sources(None, Path::new(""), env_from(&[("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.analysis.api_key, "legacy");

        let config = Config::from_sources(
            None,
            Path::new(""),
            env_from(&[("API_KEY", "legacy"), ("GEMINI_API_KEY", "preferred")]),
        )
        .unwrap();
        assert_eq!(config.analysis.api_key, "preferred");
    }

    #[test]
    fn test_settings_file_and_env_overrides() {
        let json = r#"{ "model": "gemini-2.5-pro", "locale": "th" }"#;
        let env = env_from(&[
            ("API_KEY", "k"),
            ("THERMAL_INSPECTOR_API_BASE", "http://localhost:8080/v1beta"),
        ]);

        let config = Config::from_sources(Some(json), Path::new("settings.json"), env).unwrap();

        assert_eq!(config.settings.model, "gemini-2.5-pro");
        assert_eq!(config.settings.locale, Locale::Thai);
        assert_eq!(config.analysis.base_url, "http://localhost:8080/v1beta");

        let env = env_from(&[("API_KEY", "k"), ("THERMAL_INSPECTOR_MODEL", "gemini-2.0-flash")]);
        let config = Config::from_sources(Some(json), Path::new("settings.json"), env).unwrap();
        assert_eq!(config.analysis.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_bad_settings_file() {
        let err = Config::from_sources(Some("{ not json"), Path::new("settings.json"), env_from(&[("API_KEY", "k")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }

    #[test]
    fn test_unknown_locale_keeps_default() {
        let env = env_from(&[("API_KEY", "k"), ("THERMAL_INSPECTOR_LOCALE", "xx")]);
        let config = Config::from_sources(None, Path::new(""), env).unwrap();
        assert_eq!(config.settings.locale, Locale::English);
    }
}
