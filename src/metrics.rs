// Metrics hooks for the matching layer.
//
// Callers install a global `MatchMetrics` implementation via
// [`set_match_metrics`]; `Matcher` then reports latency and outcome for each
// call to `find_match`. Instrumentation stays decoupled from any specific
// metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchOutcomeKind;

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a single match resolution.
    ///
    /// `outcome` is the coarse result kind, `latency` is the wall-clock
    /// duration of the catalog scan, and `selection_len` is the number of
    /// symbols the resolved selection held.
    fn record_match(&self, outcome: MatchOutcomeKind, latency: Duration, selection_len: usize);
}

fn metrics_slot() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_slot()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Typically called once during startup so every [`Matcher`](crate::Matcher)
/// shares the same backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let slot = metrics_slot();
    let mut guard = slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
