//! UI timing and endpoint configuration.
//!
//! Every field has a default; the server may override any subset by embedding
//! a JSON blob in `<script type="application/json" id="ui-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_MESSAGE_DISMISS_MS: u32 = 5000;
pub const DEFAULT_MESSAGE_FADE_MS: u32 = 300;
pub const DEFAULT_STATS_POLL_MS: u32 = 30_000;
pub const DEFAULT_SIDEBAR_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_STATS_ENDPOINT: &str = "/api/stats";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(feature = "hydrate")]
const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub message_dismiss_ms: u32,
    pub message_fade_ms: u32,
    pub stats_poll_ms: u32,
    pub sidebar_breakpoint_px: f64,
    pub stats_endpoint: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_dismiss_ms: DEFAULT_MESSAGE_DISMISS_MS,
            message_fade_ms: DEFAULT_MESSAGE_FADE_MS,
            stats_poll_ms: DEFAULT_STATS_POLL_MS,
            sidebar_breakpoint_px: DEFAULT_SIDEBAR_BREAKPOINT_PX,
            stats_endpoint: DEFAULT_STATS_ENDPOINT.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse an override blob. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the blob is not valid JSON or names an
    /// unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.log_level()?;
        Ok(config)
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] if the level name is not recognised.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Read the page's config blob, falling back to defaults when it is
    /// absent or invalid.
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) => Self::from_json_or_default(&raw),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Parse `raw`, logging and returning defaults on error.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring ui config: {e}");
                Self::default()
            }
        }
    }
}
