use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://wordsapiv1.p.rapidapi.com".to_string()
}

fn default_host() -> String {
    "wordsapiv1.p.rapidapi.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the WordsAPI service
    #[serde(default = "default_url")]
    pub url: String,
    /// Value sent as `X-RapidAPI-Host`
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            host: default_host(),
            api_key: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

