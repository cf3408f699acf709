//! # Inbound Ports
//!
//! API trait defining what the suggestion client can do.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    invariant_query_valid, Candidate, DetailLevel, ScopeAnchor, SuggestError, SuggestQuery,
    LEVEL_SUGGESTION_COUNT,
};

/// Address suggestion API - inbound port.
///
/// Only [`SuggestionApi::suggest`] talks to the network. The per-level
/// helpers are parameterizations of it.
#[async_trait]
pub trait SuggestionApi: Send + Sync {
    /// Issue one scoped query and return candidates in service order.
    async fn suggest(&self, query: SuggestQuery) -> Result<Vec<Candidate>, SuggestError>;

    /// Region-level candidates.
    async fn suggest_regions(&self, text: &str) -> Result<Vec<Candidate>, SuggestError> {
        let query = SuggestQuery::new(text)
            .with_level(DetailLevel::Region)
            .with_count(LEVEL_SUGGESTION_COUNT);
        self.suggest(query).await
    }

    /// City-level candidates, scoped to a region when one is resolved.
    async fn suggest_cities(
        &self,
        text: &str,
        scope: Option<&ScopeAnchor>,
    ) -> Result<Vec<Candidate>, SuggestError> {
        let mut query = SuggestQuery::new(text)
            .with_level(DetailLevel::City)
            .with_count(LEVEL_SUGGESTION_COUNT);
        if let Some(anchor) = scope {
            query = query.with_anchor(anchor);
        }
        self.suggest(query).await
    }

    /// Street-level candidates, scoped to a city or settlement when one is
    /// resolved.
    async fn suggest_streets(
        &self,
        text: &str,
        scope: Option<&ScopeAnchor>,
    ) -> Result<Vec<Candidate>, SuggestError> {
        let mut query = SuggestQuery::new(text)
            .with_level(DetailLevel::Street)
            .with_count(LEVEL_SUGGESTION_COUNT);
        if let Some(anchor) = scope {
            query = query.with_anchor(anchor);
        }
        self.suggest(query).await
    }

    /// House-level candidates.
    ///
    /// House lookups need the full address context in the text itself; no
    /// ancestor filter is applied.
    async fn suggest_houses(&self, text: &str) -> Result<Vec<Candidate>, SuggestError> {
        let query = SuggestQuery::new(text)
            .with_level(DetailLevel::House)
            .with_count(LEVEL_SUGGESTION_COUNT);
        self.suggest(query).await
    }
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// In-memory suggestion service.
///
/// Answers by exact query text, records every query it receives, and can
/// hold individual answers back to simulate slow responses.
#[derive(Clone, Default)]
pub struct MockSuggestionService {
    responses: Arc<Mutex<HashMap<String, Result<Vec<Candidate>, SuggestError>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<SuggestQuery>>>,
}

impl MockSuggestionService {
    /// Create an empty mock; unknown queries yield no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `text` with the given candidates.
    pub fn respond(&self, text: &str, candidates: Vec<Candidate>) {
        self.responses.lock().insert(text.to_string(), Ok(candidates));
    }

    /// Answer `text` with an error.
    pub fn fail(&self, text: &str, error: SuggestError) {
        self.responses.lock().insert(text.to_string(), Err(error));
    }

    /// Delay the answer to `text`.
    pub fn delay(&self, text: &str, delay: Duration) {
        self.delays.lock().insert(text.to_string(), delay);
    }

    /// Every query received so far, in arrival order.
    pub fn calls(&self) -> Vec<SuggestQuery> {
        self.calls.lock().clone()
    }

    /// Number of queries received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl SuggestionApi for MockSuggestionService {
    async fn suggest(&self, query: SuggestQuery) -> Result<Vec<Candidate>, SuggestError> {
        invariant_query_valid(&query)?;
        self.calls.lock().push(query.clone());

        let delay = self.delays.lock().get(&query.query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let answer = self.responses.lock().get(&query.query).cloned();
        match answer {
            Some(Ok(mut candidates)) => {
                candidates.truncate(query.count);
                Ok(candidates)
            }
            Some(Err(err)) => Err(err),
            None => Ok(Vec::new()),
        }
    }
}
