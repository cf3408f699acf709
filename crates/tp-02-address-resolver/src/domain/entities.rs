//! # Domain Entities
//!
//! The four cascading fields and their per-field state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tp_01_address_suggest::{Candidate, DetailLevel, ScopeAnchor};

use super::errors::ResolverError;

/// One field of the cascade, in chain order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressField {
    /// Federal subject.
    Region,
    /// City or settlement.
    City,
    /// Street.
    Street,
    /// House.
    House,
}

impl AddressField {
    /// All fields, coarsest first.
    pub const ALL: [AddressField; 4] = [
        AddressField::Region,
        AddressField::City,
        AddressField::Street,
        AddressField::House,
    ];

    /// Position in the chain.
    pub fn index(self) -> usize {
        match self {
            AddressField::Region => 0,
            AddressField::City => 1,
            AddressField::Street => 2,
            AddressField::House => 3,
        }
    }

    /// Detail level the field's queries are bounded to.
    pub fn level(self) -> DetailLevel {
        match self {
            AddressField::Region => DetailLevel::Region,
            AddressField::City => DetailLevel::City,
            AddressField::Street => DetailLevel::Street,
            AddressField::House => DetailLevel::House,
        }
    }

    /// Field directly before this one.
    pub fn parent(self) -> Option<AddressField> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Every field after this one.
    pub fn descendants(self) -> &'static [AddressField] {
        &Self::ALL[self.index() + 1..]
    }

    /// Human-readable name used in logs.
    pub fn label(self) -> &'static str {
        match self {
            AddressField::Region => "Region",
            AddressField::City => "City",
            AddressField::Street => "Street",
            AddressField::House => "House",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AddressField {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "region" | "subject" => Ok(AddressField::Region),
            "city" => Ok(AddressField::City),
            "street" => Ok(AddressField::Street),
            "house" => Ok(AddressField::House),
            other => Err(ResolverError::UnknownField(other.to_string())),
        }
    }
}

/// Lifecycle of one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    /// No candidates on display.
    #[default]
    Empty,
    /// A fetch for the current text is in flight.
    Querying,
    /// Candidates for the current text are on display.
    Populated,
    /// A candidate was accepted.
    Resolved,
}

/// Current state of one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSlot {
    /// Displayed text.
    pub text: String,
    /// Lifecycle state.
    pub state: FieldState,
    /// Identifier recorded when a candidate was accepted.
    pub anchor: Option<ScopeAnchor>,
    /// Candidates on display.
    pub candidates: Vec<Candidate>,
    /// Tag of the latest issued request; outcomes with another tag are stale.
    pub request_seq: u64,
}

impl FieldSlot {
    /// Drop displayed candidates and invalidate any request in flight.
    pub fn invalidate(&mut self) {
        self.candidates.clear();
        self.request_seq += 1;
    }

    /// Return the field to a blank, unresolved state.
    pub fn clear(&mut self) {
        self.invalidate();
        self.text.clear();
        self.anchor = None;
        self.state = FieldState::Empty;
    }

    /// True when the field shows a resolved anchor.
    pub fn is_resolved(&self) -> bool {
        self.state == FieldState::Resolved
    }
}
