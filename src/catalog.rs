//! The catalog of candidate symbol groups.
//!
//! A [`Catalog`] is process-wide read-only state: it is built once at startup
//! (from [`BUILTIN_GROUPS`] or an external [`EngineConfig`](crate::config::EngineConfig)),
//! validated eagerly, and never mutated afterwards. Data-authoring mistakes
//! (duplicate members inside a group, blank symbols, an empty table) are
//! rejected here rather than left to skew overlap counts at match time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::selection::Selection;

/// The six-group table observed in the original configuration.
///
/// Group order is the tie-break when more than one group could satisfy a
/// selection; member order within a group is the order matched symbols are
/// reported in.
pub const BUILTIN_GROUPS: [[&str; 6]; 6] = [
    ["n", "ball", "anger", "v", "x", "vslice"],
    ["mount", "vslice", "angel", "a", "plus", "n"],
    ["a", "vslice", "plus", "angel", "mount", "n"],
    ["angel", "v", "anger", "x", "vslice", "ball"],
    ["n", "scissors", "anger", "ball", "x", "vslice"],
    ["v", "scissors", "x", "ball", "vslice", "angel"],
];

/// An ordered, fixed-length sequence of symbolic identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CandidateGroup {
    symbols: Vec<String>,
}

impl CandidateGroup {
    /// Members of this group, in their defined order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Number of members in this group.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The subsequence of this group's members that are present in
    /// `selection`, preserving the group's internal order. Matching is by
    /// identifier value, not position.
    pub fn overlap_with(&self, selection: &Selection) -> Vec<String> {
        self.symbols
            .iter()
            .filter(|symbol| selection.contains(symbol))
            .cloned()
            .collect()
    }
}

impl From<Vec<String>> for CandidateGroup {
    fn from(symbols: Vec<String>) -> Self {
        Self { symbols }
    }
}

/// Errors raised while constructing a [`Catalog`].
///
/// These are data-authoring failures and are intended to be surfaced during
/// startup rather than at match time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    /// The catalog holds no groups at all.
    #[error("catalog must contain at least one candidate group")]
    Empty,
    /// A group lists the same symbol twice. Duplicates would inflate the
    /// overlap count at match time, so they are rejected up front.
    #[error("group {group_index} lists symbol \"{symbol}\" more than once")]
    DuplicateMember { group_index: usize, symbol: String },
    /// A group member is empty or whitespace-only.
    #[error("group {group_index} contains a blank symbol")]
    BlankSymbol { group_index: usize },
}

/// The full, immutable collection of candidate groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    groups: Vec<CandidateGroup>,
}

impl Catalog {
    /// Build a catalog from raw group data, validating it eagerly.
    pub fn new<G, S>(groups: G) -> Result<Self, CatalogError>
    where
        G: IntoIterator<Item = Vec<S>>,
        S: Into<String>,
    {
        let groups: Vec<CandidateGroup> = groups
            .into_iter()
            .map(|symbols| CandidateGroup {
                symbols: symbols.into_iter().map(Into::into).collect(),
            })
            .collect();

        if groups.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (group_index, group) in groups.iter().enumerate() {
            for (pos, symbol) in group.symbols.iter().enumerate() {
                if symbol.trim().is_empty() {
                    return Err(CatalogError::BlankSymbol { group_index });
                }
                if group.symbols[..pos].contains(symbol) {
                    return Err(CatalogError::DuplicateMember {
                        group_index,
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        info!(groups = groups.len(), "catalog constructed");
        Ok(Self { groups })
    }

    /// The catalog observed in the original configuration.
    pub fn builtin() -> Self {
        // The builtin table is known-good, so this constructor stays
        // infallible.
        Self {
            groups: BUILTIN_GROUPS
                .iter()
                .map(|group| CandidateGroup {
                    symbols: group.iter().map(|s| (*s).to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Candidate groups in their defined order.
    pub fn groups(&self) -> &[CandidateGroup] {
        &self.groups
    }

    /// Number of candidate groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Length of the shortest group, used to cross-check the matcher's
    /// required overlap at construction time.
    pub fn min_group_len(&self) -> usize {
        self.groups
            .iter()
            .map(CandidateGroup::len)
            .min()
            .unwrap_or(0)
    }
}
