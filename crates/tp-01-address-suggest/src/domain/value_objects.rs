//! # Domain Value Objects
//!
//! Query building blocks sent to the suggestion service.

use super::invariants::DEFAULT_SUGGESTION_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative granularity of a suggestion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Federal subject (oblast, republic, federal city).
    Region,
    /// Municipal district inside a region.
    Area,
    /// City.
    City,
    /// Settlement outside a city.
    Settlement,
    /// Street.
    Street,
    /// House.
    House,
}

impl DetailLevel {
    /// Wire name used in bounds.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Region => "region",
            DetailLevel::Area => "area",
            DetailLevel::City => "city",
            DetailLevel::Settlement => "settlement",
            DetailLevel::Street => "street",
            DetailLevel::House => "house",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One end of a detail-level restriction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bound {
    /// Level name.
    pub value: DetailLevel,
}

/// Ancestor filter restricting results to one administrative entity.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationFilter {
    /// Restrict to a region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_fias_id: Option<String>,
    /// Restrict to a city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_fias_id: Option<String>,
    /// Restrict to an area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_fias_id: Option<String>,
    /// Restrict to a settlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_fias_id: Option<String>,
}

/// Resolved identifier of an accepted candidate, used to scope the next
/// query in a cascade.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeAnchor {
    /// Level the identifier belongs to.
    pub level: DetailLevel,
    /// FIAS identifier.
    pub fias_id: String,
}

impl ScopeAnchor {
    /// Create a new anchor.
    pub fn new(level: DetailLevel, fias_id: impl Into<String>) -> Self {
        Self {
            level,
            fias_id: fias_id.into(),
        }
    }

    /// Location filter for this anchor.
    ///
    /// Streets and houses cannot scope a query, so they yield `None`.
    pub fn to_location(&self) -> Option<LocationFilter> {
        let id = Some(self.fias_id.clone());
        let filter = match self.level {
            DetailLevel::Region => LocationFilter {
                region_fias_id: id,
                ..Default::default()
            },
            DetailLevel::Area => LocationFilter {
                area_fias_id: id,
                ..Default::default()
            },
            DetailLevel::City => LocationFilter {
                city_fias_id: id,
                ..Default::default()
            },
            DetailLevel::Settlement => LocationFilter {
                settlement_fias_id: id,
                ..Default::default()
            },
            DetailLevel::Street | DetailLevel::House => return None,
        };
        Some(filter)
    }
}

/// Request body of one suggestion call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestQuery {
    /// Free-text query.
    pub query: String,
    /// Maximum number of candidates.
    pub count: usize,
    /// Coarsest level allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_bound: Option<Bound>,
    /// Finest level allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_bound: Option<Bound>,
    /// Ancestor filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<LocationFilter>,
    /// Strip the filtered ancestors from the display text.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub restrict_value: bool,
}

impl SuggestQuery {
    /// Unbounded query with the default result cap.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: DEFAULT_SUGGESTION_COUNT,
            from_bound: None,
            to_bound: None,
            locations: Vec::new(),
            restrict_value: false,
        }
    }

    /// Restrict results to the range `from..=to`.
    pub fn with_bounds(mut self, from: DetailLevel, to: DetailLevel) -> Self {
        self.from_bound = Some(Bound { value: from });
        self.to_bound = Some(Bound { value: to });
        self
    }

    /// Restrict results to exactly one level.
    pub fn with_level(self, level: DetailLevel) -> Self {
        self.with_bounds(level, level)
    }

    /// Set the result cap.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Add a region filter.
    pub fn with_region_filter(self, region_fias_id: impl Into<String>) -> Self {
        self.with_anchor(&ScopeAnchor::new(DetailLevel::Region, region_fias_id))
    }

    /// Add a city filter.
    pub fn with_city_filter(self, city_fias_id: impl Into<String>) -> Self {
        self.with_anchor(&ScopeAnchor::new(DetailLevel::City, city_fias_id))
    }

    /// Add a settlement filter.
    pub fn with_settlement_filter(self, settlement_fias_id: impl Into<String>) -> Self {
        self.with_anchor(&ScopeAnchor::new(DetailLevel::Settlement, settlement_fias_id))
    }

    /// Add the filter matching an anchor, if it can scope a query.
    pub fn with_anchor(mut self, anchor: &ScopeAnchor) -> Self {
        if let Some(location) = anchor.to_location() {
            self.locations.push(location);
        }
        self
    }

    /// Set the `restrict_value` flag.
    pub fn with_restrict_value(mut self, restrict: bool) -> Self {
        self.restrict_value = restrict;
        self
    }
}
