use super::*;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::metrics::{MatchMetrics, set_match_metrics};
use crate::types::MatchOutcomeKind;

fn full_selection(symbols: [&str; 4]) -> Selection {
    let mut selection = Selection::new(4);
    for symbol in symbols {
        selection.toggle(symbol);
    }
    selection
}

#[test]
fn subset_of_first_group_matches_in_group_order() -> Result<(), MatchError> {
    let matcher = Matcher::with_builtin_catalog();
    // Toggled in an order that differs from the group's own.
    let selection = full_selection(["v", "anger", "ball", "n"]);

    let outcome = matcher.find_match(&selection)?;
    assert_eq!(
        outcome,
        MatchOutcome::Match {
            group_index: 0,
            symbols: vec!["n".into(), "ball".into(), "anger".into(), "v".into()],
        }
    );
    Ok(())
}

#[test]
fn subset_of_second_group_matches() -> Result<(), MatchError> {
    let matcher = Matcher::with_builtin_catalog();
    let selection = full_selection(["mount", "angel", "a", "plus"]);

    let outcome = matcher.find_match(&selection)?;
    assert_eq!(
        outcome,
        MatchOutcome::Match {
            group_index: 1,
            symbols: vec!["mount".into(), "angel".into(), "a".into(), "plus".into()],
        }
    );
    Ok(())
}

#[test]
fn cross_group_selection_yields_no_match() -> Result<(), MatchError> {
    let matcher = Matcher::with_builtin_catalog();
    let selection = full_selection(["n", "ball", "mount", "v"]);

    assert_eq!(matcher.find_match(&selection)?, MatchOutcome::NoMatch);
    Ok(())
}

#[test]
fn unknown_symbols_yield_no_match() -> Result<(), MatchError> {
    let matcher = Matcher::with_builtin_catalog();
    let selection = full_selection(["bogus", "ball", "anger", "v"]);

    assert_eq!(matcher.find_match(&selection)?, MatchOutcome::NoMatch);
    Ok(())
}

#[test]
fn first_match_in_catalog_order_wins() -> Result<(), MatchError> {
    // Synthetic catalog where one selection fully covers two groups; the
    // earlier group must win, and repeated calls must agree.
    let catalog = Catalog::new(vec![
        vec!["a", "b", "c", "d", "e", "f"],
        vec!["d", "c", "b", "a", "g", "h"],
    ])
    .expect("catalog should validate");
    let matcher = Matcher::new(catalog, MatcherConfig::default())?;
    let selection = full_selection(["a", "b", "c", "d"]);

    let first = matcher.find_match(&selection)?;
    assert_eq!(
        first,
        MatchOutcome::Match {
            group_index: 0,
            symbols: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        }
    );
    for _ in 0..8 {
        assert_eq!(matcher.find_match(&selection)?, first);
    }
    Ok(())
}

#[test]
fn find_match_leaves_inputs_unchanged() -> Result<(), MatchError> {
    let matcher = Matcher::with_builtin_catalog();
    let selection = full_selection(["n", "ball", "anger", "v"]);

    let catalog_before = matcher.catalog().clone();
    let selection_before = selection.clone();
    matcher.find_match(&selection)?;

    assert_eq!(matcher.catalog(), &catalog_before);
    assert_eq!(selection, selection_before);
    Ok(())
}

#[test]
fn partial_selection_rejected() {
    let matcher = Matcher::with_builtin_catalog();
    let mut selection = Selection::new(4);
    for symbol in ["n", "ball", "anger"] {
        selection.toggle(symbol);
    }

    let err = matcher
        .find_match(&selection)
        .expect_err("three symbols should not be matchable");
    assert_eq!(err, MatchError::SelectionIncomplete { have: 3, need: 4 });
}

#[test]
fn zero_required_overlap_rejected() {
    let cfg = MatcherConfig {
        required_overlap: 0,
    };
    let err = Matcher::new(Catalog::builtin(), cfg).expect_err("config should be invalid");
    match err {
        MatchError::InvalidConfig(msg) => assert!(msg.contains("required_overlap")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_group_rejected_at_construction() {
    let catalog = Catalog::new(vec![vec!["a", "b", "c", "d"], vec!["e", "f", "g"]])
        .expect("catalog data itself is well-formed");
    let err = Matcher::new(catalog, MatcherConfig::default())
        .expect_err("three-member group cannot satisfy an overlap of four");
    match err {
        MatchError::InvalidConfig(msg) => assert!(msg.contains("3 members")),
        other => panic!("unexpected error: {other}"),
    }
}

struct RecordingMetrics {
    events: Arc<RwLock<Vec<(MatchOutcomeKind, usize)>>>,
}

impl RecordingMetrics {
    fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn snapshot(&self) -> Vec<(MatchOutcomeKind, usize)> {
        self.events.read().unwrap().clone()
    }
}

impl MatchMetrics for RecordingMetrics {
    fn record_match(&self, outcome: MatchOutcomeKind, _latency: Duration, selection_len: usize) {
        self.events.write().unwrap().push((outcome, selection_len));
    }
}

#[test]
fn metrics_recorder_observes_matches() -> Result<(), MatchError> {
    let matcher = Matcher::with_builtin_catalog();
    let metrics = Arc::new(RecordingMetrics::new());
    set_match_metrics(Some(metrics.clone()));

    let outcome = matcher.find_match(&full_selection(["n", "ball", "anger", "v"]))?;
    assert!(outcome.is_match());

    let events = metrics.snapshot();
    assert!(
        events
            .iter()
            .any(|(kind, len)| *kind == MatchOutcomeKind::Match && *len == 4)
    );

    set_match_metrics(None);
    Ok(())
}
