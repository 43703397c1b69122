// Copyright 2025 the Floret Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension data as supplied by the host.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// One chart dimension: a named score plus tooltip metadata.
///
/// The widget only reads dimensions; editing them is the host's business.
/// Scores are clamped into the configured range on ingestion, so a
/// `Dimension` built directly with an oversized score is still safe to
/// hand over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    /// Identifier, also used for order-independent score lookup.
    pub name: String,
    /// Score in `[0, max_score]`.
    pub score: u8,
    /// Human-readable description shown in the tooltip body.
    pub description: String,
    /// Ordered pass/fail analysis flags, shown in the tooltip footer.
    pub checks: Vec<bool>,
}

impl Dimension {
    /// A dimension with the given name and score and empty metadata.
    pub fn new(name: impl Into<String>, score: u8) -> Self {
        Self {
            name: name.into(),
            score,
            description: String::new(),
            checks: Vec::new(),
        }
    }

    /// Sets the tooltip description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the analysis check flags.
    pub fn with_checks(mut self, checks: impl Into<Vec<bool>>) -> Self {
        self.checks = checks.into();
        self
    }

    /// How many analysis checks passed.
    pub fn checks_passed(&self) -> usize {
        self.checks.iter().filter(|passed| **passed).count()
    }
}

/// Collects scores for `order` out of unordered dimension data.
///
/// Each name in `order` is looked up among `data` by dimension name; names
/// with no matching dimension score 0. This is the defensive seam for
/// hosts that assemble dimensions from loosely structured sources: a
/// missing or misspelled entry degrades to an empty sector instead of an
/// error.
pub fn scores_by_name(data: &[Dimension], order: &[&str]) -> SmallVec<[f64; 8]> {
    let by_name: HashMap<&str, u8> = data
        .iter()
        .map(|dimension| (dimension.name.as_str(), dimension.score))
        .collect();

    order
        .iter()
        .map(|name| by_name.get(name).copied().map_or(0.0, f64::from))
        .collect()
}
