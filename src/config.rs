use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const API_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini: GeminiSettings,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub quiz_reveal_delay: Duration,
}

/// Everything needed to reach the provider apart from the key itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeminiSettings {
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to
    /// defaults for everything except the API key.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GeminiSettings::default();

        Self {
            gemini_api_key: SecretString::from(lookup("GEMINI_API_KEY").unwrap_or_default()),
            gemini: GeminiSettings {
                model: lookup("GEMINI_MODEL").unwrap_or(defaults.model),
                base_url: lookup("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
                timeout: lookup("GEMINI_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
            },
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            quiz_reveal_delay: lookup("QUIZ_REVEAL_DELAY_MS")
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(1000)),
        }
    }

    /// The server refuses to start without a real provider key.
    pub fn validate(&self) -> AppResult<()> {
        let key = self.gemini_api_key.expose_secret().trim();

        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY is not set or is still a placeholder in your .env file."
                    .to_string(),
            ));
        }

        if self.gemini.model.trim().is_empty() {
            return Err(AppError::ConfigError("GEMINI_MODEL must not be empty".to_string()));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test-gemini-key".to_string()),
            gemini: GeminiSettings::default(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            quiz_reveal_delay: Duration::from_millis(1000),
        }
    }
}
