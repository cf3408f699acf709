//! # Cascading Resolver Service
//!
//! Owns the four field slots, the selected candidate and the manual inputs.
//!
//! ## Request Sequencing
//!
//! Each text change bumps the field's `request_seq` and tags the spawned
//! fetch with it. Outcomes come back over an mpsc channel and are applied
//! only when their tag still matches, so a slow answer to an earlier text
//! can never overwrite the answer to the latest one.

use async_trait::async_trait;
use shared_types::AddressFields;
use std::sync::Arc;
use tokio::sync::mpsc;
use tp_01_address_suggest::{Candidate, SuggestionApi};
use tracing::{debug, info, warn};

use crate::algorithms::{self, clear_descendants, field_query, FieldTexts};
use crate::config::ResolverConfig;
use crate::domain::{
    invariant_query_long_enough, AddressField, FetchOutcome, FieldQuery, FieldSlot, FieldState,
    ManualInputs, ResolverError,
};
use crate::ports::{AddressFormApi, PresentationSurface};

/// Cascading Resolver - drives the region → city → street → house chain.
///
/// Must be used from within a tokio runtime: text changes spawn their
/// fetches with [`tokio::spawn`].
pub struct CascadingResolver<S, P>
where
    S: SuggestionApi + 'static,
    P: PresentationSurface,
{
    /// Configuration.
    config: ResolverConfig,
    /// Suggestion client shared with fetch tasks.
    service: Arc<S>,
    /// Presentation surface.
    surface: P,
    /// Field slots in chain order.
    fields: [FieldSlot; 4],
    /// Most recently accepted candidate.
    selected: Option<Candidate>,
    /// Building and apartment inputs.
    manual: ManualInputs,
    /// Sender cloned into every fetch task.
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    /// Finished fetches.
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// Fetches spawned but not yet received.
    pending: usize,
}

impl<S, P> CascadingResolver<S, P>
where
    S: SuggestionApi + 'static,
    P: PresentationSurface,
{
    /// Create a resolver with every field empty.
    pub fn new(service: Arc<S>, surface: P, config: ResolverConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            config,
            service,
            surface,
            fields: Default::default(),
            selected: None,
            manual: ManualInputs::default(),
            outcome_tx,
            outcome_rx,
            pending: 0,
        }
    }

    /// Current state of one field.
    pub fn field(&self, field: AddressField) -> &FieldSlot {
        &self.fields[field.index()]
    }

    /// Most recently accepted candidate.
    pub fn selected_address(&self) -> Option<&Candidate> {
        self.selected.as_ref()
    }

    /// Manual building and apartment inputs.
    pub fn manual_inputs(&self) -> &ManualInputs {
        &self.manual
    }

    /// Fetches issued but not yet received.
    pub fn pending_fetches(&self) -> usize {
        self.pending
    }

    /// Configuration in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The presentation surface.
    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Mutable access to the presentation surface.
    pub fn surface_mut(&mut self) -> &mut P {
        &mut self.surface
    }

    /// Wait for the next finished fetch without applying it.
    ///
    /// Returns `None` immediately when nothing is in flight. Cancel safe,
    /// so it can sit in a `tokio::select!` next to input handling.
    pub async fn recv_outcome(&mut self) -> Option<FetchOutcome> {
        if self.pending == 0 {
            return None;
        }
        let outcome = self.outcome_rx.recv().await?;
        self.pending -= 1;
        Some(outcome)
    }

    fn spawn_fetch(&mut self, query: FieldQuery, seq: u64) {
        let service = Arc::clone(&self.service);
        let tx = self.outcome_tx.clone();
        debug!(
            "[tp-02] Fetching {} suggestions for {:?} (seq {})",
            query.field, query.text, seq
        );

        tokio::spawn(async move {
            let result = query.execute(service.as_ref()).await;
            // The receiver lives as long as the resolver; a send error only
            // means the form was dropped.
            let _ = tx.send(FetchOutcome {
                field: query.field,
                seq,
                result,
            });
        });
        self.pending += 1;
    }

    fn clear_presentation(&mut self, field: AddressField) {
        self.surface.set_candidates(field, &[]);
        self.surface.hide_suggestions(field);
    }
}

#[async_trait]
impl<S, P> AddressFormApi for CascadingResolver<S, P>
where
    S: SuggestionApi + 'static,
    P: PresentationSurface,
{
    fn text_changed(&mut self, field: AddressField, text: &str) -> bool {
        let slot = &mut self.fields[field.index()];
        slot.text = text.to_string();
        slot.anchor = None;
        slot.invalidate();

        if !invariant_query_long_enough(text, self.config.min_query_chars) {
            slot.state = FieldState::Empty;
            self.clear_presentation(field);
            return false;
        }

        slot.state = FieldState::Querying;
        let seq = slot.request_seq;
        let query = field_query(field, &self.fields);
        self.spawn_fetch(query, seq);
        true
    }

    fn candidate_chosen(&mut self, field: AddressField, index: usize) -> Result<(), ResolverError> {
        let slot = &mut self.fields[field.index()];
        if slot.candidates.is_empty() {
            return Err(ResolverError::NoCandidates { field });
        }
        let candidate = slot.candidates.get(index).cloned().ok_or(
            ResolverError::CandidateOutOfRange {
                field,
                index,
                available: slot.candidates.len(),
            },
        )?;

        self.surface.hide_suggestions(field);
        slot.text = candidate.value.clone();
        slot.anchor = candidate.anchor_at(field.level());
        slot.invalidate();
        slot.state = FieldState::Resolved;
        self.surface.set_field_text(field, &candidate.value);

        for cleared in clear_descendants(&mut self.fields, field) {
            self.surface.set_field_text(cleared, "");
            self.clear_presentation(cleared);
        }

        info!("[tp-02] {} selected: {}", field, candidate.value);
        self.selected = Some(candidate);
        Ok(())
    }

    fn set_building(&mut self, text: &str) {
        self.manual.building = text.to_string();
    }

    fn set_apartment(&mut self, text: &str) {
        self.manual.apartment = text.to_string();
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        let field = outcome.field;
        let slot = &mut self.fields[field.index()];
        if outcome.seq != slot.request_seq {
            debug!(
                "[tp-02] Discarding stale {} suggestions (seq {}, current {})",
                field, outcome.seq, slot.request_seq
            );
            return false;
        }

        match outcome.result {
            Ok(mut candidates) if !candidates.is_empty() => {
                candidates.truncate(self.config.max_candidates);
                slot.candidates = candidates;
                slot.state = FieldState::Populated;
                self.surface.set_candidates(field, &slot.candidates);
                self.surface.show_suggestions(field);
            }
            Ok(_) => {
                slot.candidates.clear();
                slot.state = FieldState::Empty;
                self.clear_presentation(field);
            }
            Err(err) => {
                warn!("[tp-02] {} suggestions failed: {}", field, err);
                slot.candidates.clear();
                slot.state = FieldState::Empty;
                self.clear_presentation(field);
            }
        }
        true
    }

    async fn next_outcome(&mut self) -> Option<bool> {
        let outcome = self.recv_outcome().await?;
        Some(self.apply_outcome(outcome))
    }

    async fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(current) = self.next_outcome().await {
            if current {
                applied += 1;
            }
        }
        applied
    }

    fn compose_full_address(&self) -> String {
        algorithms::compose_full_address(
            self.selected.as_ref().map(|candidate| &candidate.data),
            &FieldTexts::from_slots(&self.fields),
            &self.manual,
        )
    }

    fn full_address_label(&self) -> String {
        algorithms::full_address_label(&self.compose_full_address())
    }

    fn address_fields(&self) -> AddressFields {
        let text = |field: AddressField| self.fields[field.index()].text.trim().to_string();
        AddressFields {
            subject: text(AddressField::Region),
            city: text(AddressField::City),
            street: text(AddressField::Street),
            house: text(AddressField::House),
            building: self.manual.building.trim().to_string(),
            apartment: self.manual.apartment.trim().to_string(),
        }
    }

    fn reset(&mut self) {
        for field in AddressField::ALL {
            self.fields[field.index()].clear();
            self.surface.set_field_text(field, "");
            self.clear_presentation(field);
        }
        self.selected = None;
        self.manual = ManualInputs::default();
        debug!("[tp-02] Form reset");
    }
}
