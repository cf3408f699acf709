//! # Resolver Configuration

use crate::domain::MIN_QUERY_CHARS;
use serde::{Deserialize, Serialize};
use std::env;
use tp_01_address_suggest::LEVEL_SUGGESTION_COUNT;

/// Cascading resolver configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Shortest trimmed text, in characters, that triggers a fetch.
    pub min_query_chars: usize,

    /// Most candidates handed to the presentation surface per field.
    pub max_candidates: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
            max_candidates: LEVEL_SUGGESTION_COUNT,
        }
    }
}

impl ResolverConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TP_MIN_QUERY_CHARS`: Query length gate (default: 2)
    /// - `TP_MAX_CANDIDATES`: Displayed candidate cap (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            min_query_chars: env::var("TP_MIN_QUERY_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.min_query_chars),

            max_candidates: env::var("TP_MAX_CANDIDATES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_candidates),
        }
    }

    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
            max_candidates: 5,
        }
    }
}
