//! The interactive toggle-event driver.
//!
//! A [`SelectionSession`] owns a [`Matcher`], the live [`Selection`], and a
//! [`RenderSink`]. Everything runs synchronously on the caller's thread: the
//! match is resolved inside the same call that handles the toggle, and there
//! is no shared mutable state beyond the selection the session owns.

use std::sync::Arc;

use tracing::debug;

use crate::engine::Matcher;
use crate::render::RenderSink;
use crate::selection::{Selection, SelectionPhase, ToggleEffect};
use crate::types::{MatchError, MatchOutcome};

/// What a single toggle event did, and what (if anything) it resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleReport {
    /// Effect of the toggle on the selection.
    pub effect: ToggleEffect,
    /// Outcome of the match attempt, present only when this toggle moved the
    /// selection into `Ready`.
    pub outcome: Option<MatchOutcome>,
}

/// Event-driven wrapper binding a matcher to a rendering collaborator.
pub struct SelectionSession {
    matcher: Matcher,
    selection: Selection,
    sink: Arc<dyn RenderSink>,
    last_outcome: Option<MatchOutcome>,
}

impl SelectionSession {
    /// A fresh session over `matcher`, rendering into `sink`.
    ///
    /// The selection bound is taken from the matcher's required overlap, so a
    /// match attempt is due exactly when the selection fills up.
    pub fn new(matcher: Matcher, sink: Arc<dyn RenderSink>) -> Self {
        let capacity = matcher.config().required_overlap;
        Self {
            matcher,
            selection: Selection::new(capacity),
            sink,
            last_outcome: None,
        }
    }

    /// Handle one user toggle of `symbol`.
    ///
    /// Entering `Ready` runs exactly one match and renders its outcome; any
    /// resulting state below `Ready` clears the display. A toggle rejected at
    /// capacity changes nothing and leaves the display untouched.
    pub fn toggle(&mut self, symbol: &str) -> Result<ToggleReport, MatchError> {
        let effect = self.selection.toggle(symbol);
        debug!(symbol, ?effect, selected = self.selection.len(), "toggle");

        if effect == ToggleEffect::AtCapacity {
            return Ok(ToggleReport {
                effect,
                outcome: None,
            });
        }

        match self.selection.phase() {
            SelectionPhase::Ready => {
                let outcome = self.matcher.find_match(&self.selection)?;
                match &outcome {
                    MatchOutcome::Match { symbols, .. } => self.sink.show_match(symbols),
                    MatchOutcome::NoMatch => self.sink.show_no_match(),
                }
                self.last_outcome = Some(outcome.clone());
                Ok(ToggleReport {
                    effect,
                    outcome: Some(outcome),
                })
            }
            _ => {
                self.sink.clear();
                self.last_outcome = None;
                Ok(ToggleReport {
                    effect,
                    outcome: None,
                })
            }
        }
    }

    /// The live selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Outcome currently on display, if the selection is `Ready`.
    pub fn last_outcome(&self) -> Option<&MatchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Deselect everything and clear the display.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.sink.clear();
        self.last_outcome = None;
    }
}
