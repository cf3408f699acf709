//! # Domain Value Objects
//!
//! Messages and inputs that flow through the resolver.

use tp_01_address_suggest::{Candidate, ScopeAnchor, SuggestError, SuggestionApi};

use super::entities::AddressField;

/// Result of one background fetch, tagged with the request it answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Field the fetch was issued for.
    pub field: AddressField,
    /// Request tag at issue time.
    pub seq: u64,
    /// Candidates or the client error.
    pub result: Result<Vec<Candidate>, SuggestError>,
}

/// Inputs outside the cascade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualInputs {
    /// Building or block.
    pub building: String,
    /// Apartment.
    pub apartment: String,
}

/// What one field asks the suggestion client for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldQuery {
    /// Field being queried.
    pub field: AddressField,
    /// Free text sent to the service.
    pub text: String,
    /// Ancestor the query is scoped to.
    pub scope: Option<ScopeAnchor>,
}

impl FieldQuery {
    /// Run the query through the per-level helper of the client.
    pub async fn execute<S>(&self, api: &S) -> Result<Vec<Candidate>, SuggestError>
    where
        S: SuggestionApi + ?Sized,
    {
        match self.field {
            AddressField::Region => api.suggest_regions(&self.text).await,
            AddressField::City => api.suggest_cities(&self.text, self.scope.as_ref()).await,
            AddressField::Street => api.suggest_streets(&self.text, self.scope.as_ref()).await,
            AddressField::House => api.suggest_houses(&self.text).await,
        }
    }
}
