use std::time::Duration;

use async_trait::async_trait;
use lexis_config::api::ApiConfig;
use lexis_types::SearchResult;
use reqwest::{StatusCode, Url};

use crate::wire::WordResponse;
use crate::{LookupError, ProviderMetadata, WordLookup};

#[derive(Clone)]
pub struct WordsApiClient {
    client: reqwest::Client,
    base_url: Url,
    host: String,
    api_key: String,
}

impl WordsApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let base_url = Url::parse(&config.url)
            .map_err(|e| LookupError::Api(format!("Invalid API url '{}': {}", config.url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(LookupError::Api(format!(
                "Invalid API url '{}': not a base url",
                config.url
            )));
        }

        Ok(Self {
            client,
            base_url,
            host: config.host.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// `{base}/words/{word}` with the word percent-encoded as one segment
    pub fn word_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("words").push(word);
        }
        url
    }
}

#[async_trait]
impl WordLookup for WordsApiClient {
    async fn lookup(&self, word: &str) -> Result<SearchResult, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::Authentication);
        }

        let url = self.word_url(word);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!("'{}' not found", word);
            return Ok(SearchResult::not_found(word));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LookupError::Authentication);
        }

        if !status.is_success() {
            return Err(LookupError::Api(format!("HTTP {}", status)));
        }

        let body = response.bytes().await?;
        let parsed: WordResponse = serde_json::from_slice(&body)?;

        Ok(parsed.into_search_result(word))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "WordsAPI".to_string(),
            requires_api_key: true,
        }
    }
}
