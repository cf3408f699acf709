//! # Outbound Ports
//!
//! The presentation surface the resolver drives.

use parking_lot::Mutex;
use std::sync::Arc;
use tp_01_address_suggest::Candidate;

use crate::domain::AddressField;

/// Presentation surface - outbound port.
///
/// Owned by the UI layer. The resolver only asks it to render state; it
/// never reads anything back.
pub trait PresentationSurface: Send {
    /// Render the candidate list for `field`.
    fn set_candidates(&mut self, field: AddressField, candidates: &[Candidate]);

    /// Show the suggestion list for `field`.
    fn show_suggestions(&mut self, field: AddressField);

    /// Hide the suggestion list for `field`.
    fn hide_suggestions(&mut self, field: AddressField);

    /// Replace the displayed text of `field`.
    fn set_field_text(&mut self, field: AddressField, text: &str);
}

// =============================================================================
// Implementations for Testing
// =============================================================================

/// Surface that renders nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl PresentationSurface for NullSurface {
    fn set_candidates(&mut self, _field: AddressField, _candidates: &[Candidate]) {}
    fn show_suggestions(&mut self, _field: AddressField) {}
    fn hide_suggestions(&mut self, _field: AddressField) {}
    fn set_field_text(&mut self, _field: AddressField, _text: &str) {}
}

/// One call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Candidate list rendered, by display value.
    Candidates {
        /// Target field
        field: AddressField,
        /// Display values in order
        values: Vec<String>,
    },
    /// Suggestion list shown.
    Shown(AddressField),
    /// Suggestion list hidden.
    Hidden(AddressField),
    /// Field text replaced.
    Text {
        /// Target field
        field: AddressField,
        /// New text
        text: String,
    },
}

/// Surface that records every call.
///
/// Clones share the same log, so a test can keep one handle while the
/// resolver owns another.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded event, oldest first.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().clone()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Whether the suggestion list of `field` is currently shown.
    pub fn is_visible(&self, field: AddressField) -> bool {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                SurfaceEvent::Shown(f) if *f == field => Some(true),
                SurfaceEvent::Hidden(f) if *f == field => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Display values most recently rendered for `field`.
    pub fn last_candidates(&self, field: AddressField) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                SurfaceEvent::Candidates { field: f, values } if *f == field => Some(values.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Text most recently written to `field`, if any.
    pub fn last_text(&self, field: AddressField) -> Option<String> {
        self.events.lock().iter().rev().find_map(|event| match event {
            SurfaceEvent::Text { field: f, text } if *f == field => Some(text.clone()),
            _ => None,
        })
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().push(event);
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_candidates(&mut self, field: AddressField, candidates: &[Candidate]) {
        self.record(SurfaceEvent::Candidates {
            field,
            values: candidates.iter().map(|c| c.value.clone()).collect(),
        });
    }

    fn show_suggestions(&mut self, field: AddressField) {
        self.record(SurfaceEvent::Shown(field));
    }

    fn hide_suggestions(&mut self, field: AddressField) {
        self.record(SurfaceEvent::Hidden(field));
    }

    fn set_field_text(&mut self, field: AddressField, text: &str) {
        self.record(SurfaceEvent::Text {
            field,
            text: text.to_string(),
        });
    }
}
