mod wire;
mod wordsapi;

pub use wordsapi::WordsApiClient;

use lexis_types::SearchResult;

/// Word lookup provider interface
#[async_trait::async_trait]
pub trait WordLookup: Send + Sync {
    /// Fetch definitions and frequency for a word.
    /// An unknown word is `Ok` with empty results, not an error.
    async fn lookup(&self, word: &str) -> Result<SearchResult, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error")]
    Authentication,
}
