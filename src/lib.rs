//! # Symbol-group matching (`symmatch`)
//!
//! ## Purpose
//!
//! `symmatch` decides which candidate group of symbols, if any, is fully
//! covered by a user's bounded selection. The catalog of candidate groups is
//! immutable configuration data built once at startup; the matching operation
//! itself is a pure function of the catalog and the selection; and the
//! interactive toggle flow that governs *when* a match is attempted is an
//! explicit state machine that can be driven and tested without any UI.
//!
//! In a typical embedding you will:
//! - Build a [`Catalog`] from the built-in table or a YAML [`EngineConfig`],
//!   and wrap it in a [`Matcher`].
//! - Feed user toggle events through a [`SelectionSession`], which invokes the
//!   matcher exactly once each time the selection becomes full and forwards
//!   the outcome to your [`RenderSink`].
//!
//! ## Core Types
//!
//! - [`Catalog`] / [`CandidateGroup`]: the fixed, validated candidate table.
//! - [`MatcherConfig`]: the required-overlap knob (4 in the observed
//!   configuration).
//! - [`Matcher`]: first-match-in-catalog-order resolution over the catalog.
//! - [`MatchOutcome`]: a matched group's symbols in group order, or `NoMatch`.
//! - [`Selection`] / [`SelectionPhase`]: the bounded toggle-set and its
//!   `Idle → Selecting → Ready` phases.
//! - [`SelectionSession`]: synchronous toggle-event driver wiring a matcher
//!   to a rendering collaborator.
//!
//! ## Example Usage
//!
//! ```
//! use symmatch::{Matcher, Selection};
//!
//! let matcher = Matcher::with_builtin_catalog();
//! let mut selection = Selection::new(matcher.config().required_overlap);
//! for symbol in ["n", "ball", "anger", "v"] {
//!     selection.toggle(symbol);
//! }
//!
//! let outcome = matcher.find_match(&selection).expect("selection is full");
//! assert!(outcome.is_match());
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-invocation latency and outcome kinds. This is typically done
//! once during startup so all [`Matcher`] values share the same backend.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod render;
pub mod selection;
pub mod session;
pub mod types;

pub use crate::catalog::{BUILTIN_GROUPS, CandidateGroup, Catalog, CatalogError};
pub use crate::config::{ConfigLoadError, EngineConfig};
pub use crate::engine::{Matcher, MatcherConfig};
pub use crate::metrics::{MatchMetrics, set_match_metrics};
pub use crate::render::RenderSink;
pub use crate::selection::{Selection, SelectionPhase, ToggleEffect};
pub use crate::session::{SelectionSession, ToggleReport};
pub use crate::types::{MatchError, MatchOutcome, MatchOutcomeKind};
