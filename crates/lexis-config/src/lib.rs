use std::env;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::chart::ChartConfig;
use self::history::HistoryConfig;

pub mod api;
pub mod chart;
pub mod history;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub history: HistoryConfig,
    pub chart: ChartConfig,
}

impl Config {
    /// Defaults with overrides from the process environment
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Override fields from environment-style variables.
    /// Unparsable numeric values are ignored.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("WORDS_API_KEY") {
            self.api.api_key = key;
        }

        if let Some(url) = var("WORDS_API_URL") {
            self.api.url = url;
        }

        if let Some(host) = var("WORDS_API_HOST") {
            self.api.host = host;
        }

        if let Some(timeout) = var("TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.api.timeout_seconds = timeout;
        }

        if let Some(max_size) = var("MAX_HISTORY").and_then(|v| v.parse().ok()) {
            self.history.max_size = max_size;
        }
    }
}
