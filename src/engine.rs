//! First-match resolution over the catalog.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::metrics::metrics_recorder;
use crate::selection::Selection;
use crate::types::{MatchError, MatchOutcome};

#[cfg(test)]
mod tests;

/// Configuration for the matching engine.
///
/// `MatcherConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs or loaded from external files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Number of selected symbols a group must fully contain to match. This
    /// is also the selection bound: a match is attempted only at exactly this
    /// many members.
    #[serde(default = "MatcherConfig::default_required_overlap")]
    pub required_overlap: usize,
}

impl MatcherConfig {
    pub(crate) fn default_required_overlap() -> usize {
        4
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.required_overlap == 0 {
            return Err(MatchError::InvalidConfig(
                "required_overlap must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            required_overlap: Self::default_required_overlap(),
        }
    }
}

/// Matcher for resolving a full selection against the catalog.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Catalog,
    config: MatcherConfig,
}

impl Matcher {
    /// Construct a matcher from a validated catalog and explicit config.
    ///
    /// Fails fast when the config is invalid or when any catalog group is too
    /// short to ever satisfy the required overlap.
    pub fn new(catalog: Catalog, config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        if catalog.min_group_len() < config.required_overlap {
            return Err(MatchError::InvalidConfig(format!(
                "catalog contains a group with {} members; every group needs at least {}",
                catalog.min_group_len(),
                config.required_overlap,
            )));
        }
        Ok(Self { catalog, config })
    }

    /// Convenience constructor over the built-in catalog with defaults.
    pub fn with_builtin_catalog() -> Self {
        // The builtin table is 6x6 and the default overlap is 4, so the
        // checks in `new` hold by construction.
        Self {
            catalog: Catalog::builtin(),
            config: MatcherConfig::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Resolve a full selection to the earliest fully-covered catalog group.
    ///
    /// Pure with respect to its inputs: neither the catalog nor the selection
    /// is mutated, and identical inputs always produce identical outcomes.
    /// Scans the catalog in order and returns on the first group whose
    /// overlap with the selection has exactly `required_overlap` members;
    /// the overlap is reported in the group's original relative order.
    pub fn find_match(&self, selection: &Selection) -> Result<MatchOutcome, MatchError> {
        let need = self.config.required_overlap;
        let have = selection.len();
        if have != need {
            return Err(MatchError::SelectionIncomplete { have, need });
        }

        let start = Instant::now();
        let outcome = self.scan(selection);
        let latency = start.elapsed();

        debug!(outcome = ?outcome.kind(), ?latency, "match resolved");
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(outcome.kind(), latency, have);
        }

        Ok(outcome)
    }

    fn scan(&self, selection: &Selection) -> MatchOutcome {
        for (group_index, group) in self.catalog.groups().iter().enumerate() {
            let overlap = group.overlap_with(selection);
            if overlap.len() == self.config.required_overlap {
                return MatchOutcome::Match {
                    group_index,
                    symbols: overlap,
                };
            }
        }
        MatchOutcome::NoMatch
    }
}
