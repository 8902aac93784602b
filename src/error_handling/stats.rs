//! Probe statistics tracking.
//!
//! This module provides thread-safe counters for which probe supplied the
//! icon and how resolutions ended.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ResolutionOutcome;
use crate::models::IconKind;

/// Thread-safe resolution statistics tracker.
///
/// Uses atomic counters so it can be shared across concurrent resolutions
/// through an `Arc`. Every `IconKind` and `ResolutionOutcome` is initialized
/// to zero on creation.
pub struct ProbeStats {
    winners: HashMap<IconKind, AtomicUsize>,
    outcomes: HashMap<ResolutionOutcome, AtomicUsize>,
}

impl ProbeStats {
    pub fn new() -> Self {
        let winners = IconKind::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();
        let outcomes = ResolutionOutcome::iter()
            .map(|outcome| (outcome, AtomicUsize::new(0)))
            .collect();

        ProbeStats { winners, outcomes }
    }

    /// Records a resolution won by `kind`.
    pub fn record_winner(&self, kind: IconKind) {
        if let Some(counter) = self.winners.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment winner counter for {:?} which is not in the map. \
                 This indicates a bug in ProbeStats initialization.",
                kind
            );
        }
        self.record_outcome(ResolutionOutcome::Resolved);
    }

    pub fn record_outcome(&self, outcome: ResolutionOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment outcome counter for {:?} which is not in the map. \
                 This indicates a bug in ProbeStats initialization.",
                outcome
            );
        }
    }

    /// Number of resolutions won by `kind`.
    pub fn get_winner_count(&self, kind: IconKind) -> usize {
        self.winners
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn get_outcome_count(&self, outcome: ResolutionOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total resolutions recorded, whatever the outcome.
    pub fn total(&self) -> usize {
        ResolutionOutcome::iter()
            .map(|o| self.get_outcome_count(o))
            .sum()
    }
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}
