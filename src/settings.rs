//! Runtime settings
//!
//! Read from LocalStorage on the web and from the `CANVAS_PONG_SETTINGS`
//! environment variable natively. Both hold the same JSON document; anything
//! missing or malformed falls back to the defaults.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

/// LocalStorage key
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "canvas_pong_settings";

/// Environment variable consulted by the native build
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_ENV: &str = "CANVAS_PONG_SETTINGS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log filter: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
    /// Fixed serve seed for replaying a session; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON, falling back to defaults when it's malformed
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed settings ({}), using defaults", e);
            Self::default()
        })
    }

    /// Effective log level (unknown names mean `Info`)
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Seed for this session: the pinned one, or `fallback`
    pub fn session_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        stored.map(|json| Self::from_json(&json)).unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        std::env::var(SETTINGS_ENV)
            .map(|json| Self::from_json(&json))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"seed": 42}"#);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"seed": "abc"}"#), Settings::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let settings = Settings::from_json(r#"{"log_level": "warn", "volume": 0.5}"#);
        assert_eq!(settings.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_level_filter() {
        let mut settings = Settings::default();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
        settings.log_level = "DEBUG".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
        settings.log_level = "chatty".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_session_seed() {
        assert_eq!(Settings::default().session_seed(9), 9);
        assert_eq!(Settings::from_json(r#"{"seed": 3}"#).session_seed(9), 3);
    }
}
