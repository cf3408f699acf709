//! Presentation surface that prints to the terminal.

use std::io::{self, Stdout, Write};
use tp_01_address_suggest::Candidate;
use tp_02_address_resolver::{AddressField, PresentationSurface};
use tracing::warn;

/// Prints candidate lists when they are shown and field texts when the
/// form replaces them.
pub struct TerminalSurface<W: Write + Send = Stdout> {
    out: W,
    candidates: [Vec<String>; 4],
}

impl TerminalSurface<Stdout> {
    /// Surface writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    /// Surface writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            candidates: Default::default(),
        }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("[tp-runtime] Terminal write failed: {}", e);
        }
    }
}

impl<W: Write + Send> PresentationSurface for TerminalSurface<W> {
    fn set_candidates(&mut self, field: AddressField, candidates: &[Candidate]) {
        self.candidates[field.index()] = candidates.iter().map(|c| c.value.clone()).collect();
    }

    fn show_suggestions(&mut self, field: AddressField) {
        let mut listing = format!("{} suggestions:", field);
        for (i, value) in self.candidates[field.index()].iter().enumerate() {
            listing.push_str(&format!("\n  {:>2}. {}", i + 1, value));
        }
        self.emit(&listing);
    }

    fn hide_suggestions(&mut self, _field: AddressField) {}

    fn set_field_text(&mut self, field: AddressField, text: &str) {
        if !text.is_empty() {
            self.emit(&format!("{} = {}", field, text));
        }
    }
}
