//! DaData Suggestion Adapter
//!
//! Implements `SuggestionApi` by POSTing JSON to the DaData address
//! suggestion endpoint.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::SuggestConfig;
use crate::domain::{invariant_query_valid, Candidate, SuggestError, SuggestQuery, SuggestionResponse};
use crate::ports::SuggestionApi;

/// HTTP client for the DaData suggestion service.
///
/// One request per call; no retries and no caching.
#[derive(Clone)]
pub struct DaDataClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl DaDataClient {
    /// Create a new client from configuration.
    pub fn new(config: &SuggestConfig) -> Result<Self, SuggestError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()?;

        if !config.has_token() {
            warn!("[tp-01] No DaData API token configured, requests will be rejected");
        }

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionApi for DaDataClient {
    async fn suggest(&self, query: SuggestQuery) -> Result<Vec<Candidate>, SuggestError> {
        invariant_query_valid(&query)?;

        debug!(
            "[tp-01] Suggest {:?} (count={}, bounds={:?}..{:?}, filters={})",
            query.query,
            query.count,
            query.from_bound.map(|b| b.value),
            query.to_bound.map(|b| b.value),
            query.locations.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Token {}", self.api_token))
            .json(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(SuggestError::Remote {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let parsed: SuggestionResponse =
            serde_json::from_slice(&body).map_err(|e| SuggestError::Decode(e.to_string()))?;

        debug!(
            "[tp-01] {} candidates for {:?}",
            parsed.suggestions.len(),
            query.query
        );

        Ok(parsed.suggestions)
    }
}
