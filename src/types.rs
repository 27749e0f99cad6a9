//! Result and error types for the matching layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of comparing a full selection against the catalog.
///
/// "No group matched" is a normal, expected outcome: it is reported as a
/// distinguished variant, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The earliest catalog group fully covered by the selection.
    Match {
        /// Position of the winning group in catalog order.
        group_index: usize,
        /// The overlapping members, in the group's original relative order.
        symbols: Vec<String>,
    },
    /// No catalog group contains every selected symbol.
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match { .. })
    }

    /// Collapse to the coarse kind used by metrics recorders.
    pub fn kind(&self) -> MatchOutcomeKind {
        match self {
            MatchOutcome::Match { .. } => MatchOutcomeKind::Match,
            MatchOutcome::NoMatch => MatchOutcomeKind::NoMatch,
        }
    }
}

/// Coarse outcome kind for observability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcomeKind {
    Match,
    NoMatch,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// Invalid matcher configuration or a catalog/config mismatch.
    #[error("invalid matcher config: {0}")]
    InvalidConfig(String),
    /// The selection does not hold exactly the required number of symbols.
    /// The session layer only invokes the matcher at `Ready`, so seeing this
    /// error means a caller bypassed the phase machine.
    #[error("selection holds {have} symbols but a match requires exactly {need}")]
    SelectionIncomplete { have: usize, need: usize },
}
