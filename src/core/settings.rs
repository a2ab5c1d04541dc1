use std::{
    env,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::{
    catalog::DEFAULT_BASE_URL,
    core::http::DEFAULT_TIMEOUT,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog_base_url: String,
    pub request_timeout_secs: u64,
    pub search_debounce_ms: u64,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            search_debounce_ms: 300,
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Saved settings, then environment overrides on top.
    pub fn load() -> Self {
        let mut settings = load_json_or_default::<Settings>(SETTINGS_FILE);
        settings.apply_overrides(|key| env::var(key).ok());
        settings
    }

    pub fn save(&self) {
        if let Err(e) = save_json(self, SETTINGS_FILE) {
            warn!("Failed to save settings: {}", e);
        }
    }

    /// Writes the theme choice back without baking environment overrides
    /// into the saved file.
    pub fn persist_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;

        let mut saved = load_json_or_default::<Settings>(SETTINGS_FILE);
        saved.dark_mode = dark_mode;
        saved.save();
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CATALOG_BASE_URL") {
            let url = url.trim();
            if url.starts_with("http://") || url.starts_with("https://") {
                info!("CATALOG_BASE_URL set, using {}", url);
                self.catalog_base_url = url.to_string();
            } else {
                warn!("Invalid CATALOG_BASE_URL value: {}", url);
            }
        }

        if let Some(secs) = parse_positive(&lookup, "CATALOG_TIMEOUT_SECS") {
            self.request_timeout_secs = secs;
        }

        if let Some(ms) = parse_positive(&lookup, "SEARCH_DEBOUNCE_MS") {
            self.search_debounce_ms = ms;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.request_timeout_secs)
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => {
            info!("{key} set, using {value}");
            Some(value)
        }
        _ => {
            warn!("Invalid {key} value: {raw}");
            None
        }
    }
}
