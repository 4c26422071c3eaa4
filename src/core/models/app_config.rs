use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub tesseract_path: PathBuf,
    pub gemini_model: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_tts_base_url")]
    pub tts_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(skip)]
    pub gemini_api_key: Option<String>,
}

fn default_gemini_base_url() -> String {
    global_constants::DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_tts_base_url() -> String {
    global_constants::DEFAULT_TTS_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    global_constants::DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tesseract_path: PathBuf::from(global_constants::DEFAULT_TESSERACT_PATH),
            gemini_model: global_constants::DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: default_gemini_base_url(),
            tts_base_url: default_tts_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            theme_mode: ThemeMode::default(),
            gemini_api_key: None,
        }
    }
}

impl AppConfig {
    /// Reads the settings file (writing defaults on first run) and then applies
    /// environment overrides. Called once at process start.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        let mut config = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .with_context(|| format!("Failed to read {:?}", settings_path))?;
            let config: AppConfig = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {:?}", settings_path))?;
            log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            config
        } else {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_config = Self::default();
            default_config.save()?;
            default_config
        };

        config.apply_environment_overrides(|key| std::env::var(key).ok());
        config.log_summary();
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn apply_environment_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = non_empty(global_constants::ENV_TESSERACT_CMD) {
            log::debug!("[SETTINGS] Tesseract path overridden from environment");
            self.tesseract_path = PathBuf::from(path);
        }

        if let Some(model) = non_empty(global_constants::ENV_GEMINI_MODEL) {
            log::debug!("[SETTINGS] Gemini model overridden from environment");
            self.gemini_model = model;
        }

        self.gemini_api_key = non_empty(global_constants::ENV_GEMINI_API_KEY)
            .or_else(|| non_empty(global_constants::ENV_GOOGLE_API_KEY));
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    fn log_summary(&self) {
        log::debug!("[SETTINGS] Tesseract path: {:?}", self.tesseract_path);
        log::debug!("[SETTINGS] Gemini model: {}", self.gemini_model);
        log::debug!("[SETTINGS] Request timeout: {}s", self.request_timeout_secs);

        if self.gemini_api_key.is_none() {
            log::warn!(
                "[SETTINGS] No API key in {} or {}, scene description will fail",
                global_constants::ENV_GEMINI_API_KEY,
                global_constants::ENV_GOOGLE_API_KEY
            );
        }
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = AppConfig::default();

        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(
            config.tesseract_path,
            PathBuf::from(global_constants::DEFAULT_TESSERACT_PATH)
        );
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.theme_mode, ThemeMode::Dark);
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let config = AppConfig {
            gemini_api_key: Some("secret-key".to_string()),
            ..AppConfig::default()
        };

        let serialized = serde_json::to_string(&config).unwrap();

        assert!(!serialized.contains("secret-key"));
        assert!(!serialized.contains("gemini_api_key"));
    }

    #[test]
    fn test_deserialization_fills_missing_optional_fields() {
        let json = r#"{
            "tesseract_path": "/usr/local/bin/tesseract",
            "gemini_model": "gemini-1.5-flash"
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.tesseract_path, PathBuf::from("/usr/local/bin/tesseract"));
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.gemini_base_url, global_constants::DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_environment_overrides_path_model_and_key() {
        let mut config = AppConfig::default();

        config.apply_environment_overrides(lookup_from(&[
            ("TESSERACT_CMD", "/opt/tesseract/bin/tesseract"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_API_KEY", "abc123"),
        ]));

        assert_eq!(
            config.tesseract_path,
            PathBuf::from("/opt/tesseract/bin/tesseract")
        );
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_google_api_key_used_when_gemini_key_missing() {
        let mut config = AppConfig::default();

        config.apply_environment_overrides(lookup_from(&[
            ("GEMINI_API_KEY", "  "),
            ("GOOGLE_API_KEY", "fallback"),
        ]));

        assert_eq!(config.gemini_api_key.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_request_timeout_is_at_least_one_second() {
        let config = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_file_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original = AppConfig {
            tesseract_path: PathBuf::from("C:/Tesseract/tesseract.exe"),
            theme_mode: ThemeMode::Light,
            request_timeout_secs: 15,
            ..AppConfig::default()
        };

        let test_file = temp_dir.path().join("settings.json");
        std::fs::write(&test_file, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded: AppConfig =
            serde_json::from_str(&std::fs::read_to_string(&test_file).unwrap()).unwrap();

        assert_eq!(loaded.tesseract_path, original.tesseract_path);
        assert_eq!(loaded.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.request_timeout_secs, 15);
    }
}
