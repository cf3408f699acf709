//! # Inbound Ports
//!
//! API trait defining what the address form can do.

use async_trait::async_trait;
use shared_types::AddressFields;

use crate::domain::{AddressField, FetchOutcome, ResolverError};

/// Address form API - inbound port.
///
/// The presentation layer feeds user events in through this trait. Every
/// method is called by the single owner of the form.
#[async_trait]
pub trait AddressFormApi: Send {
    /// The user edited `field`.
    ///
    /// Returns true when a background fetch was issued.
    fn text_changed(&mut self, field: AddressField, text: &str) -> bool;

    /// The user accepted the candidate at `index` on `field`.
    fn candidate_chosen(&mut self, field: AddressField, index: usize) -> Result<(), ResolverError>;

    /// The user edited the manual building input.
    fn set_building(&mut self, text: &str);

    /// The user edited the manual apartment input.
    fn set_apartment(&mut self, text: &str);

    /// Apply a finished fetch. Returns false when the outcome was stale.
    fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool;

    /// Wait for the next fetch to finish and apply it.
    ///
    /// Returns `None` when no fetch is in flight.
    async fn next_outcome(&mut self) -> Option<bool>;

    /// Apply every fetch in flight. Returns how many outcomes were applied.
    async fn settle(&mut self) -> usize;

    /// Official-format address line composed from the current state.
    fn compose_full_address(&self) -> String;

    /// Label text for the full-address display.
    fn full_address_label(&self) -> String;

    /// Field values handed to the persistence layer.
    fn address_fields(&self) -> AddressFields;

    /// Clear every field, the selection and the manual inputs.
    fn reset(&mut self);
}
