//! Statistics printing.

use strum::IntoEnumIterator;

use crate::error_handling::{ProbeStats, ResolutionOutcome};
use crate::models::IconKind;

/// Prints a summary of how resolutions ended and which probes won.
///
/// Written to stderr so it never mixes with result lines on stdout.
pub fn print_probe_statistics(stats: &ProbeStats) {
    eprintln!("Resolved {} site(s):", stats.total());
    for outcome in ResolutionOutcome::iter() {
        eprintln!("  {}: {}", outcome, stats.get_outcome_count(outcome));
    }

    let resolved = stats.get_outcome_count(ResolutionOutcome::Resolved);
    if resolved == 0 {
        return;
    }

    eprintln!("Winning probe:");
    for kind in IconKind::iter() {
        let count = stats.get_winner_count(kind);
        if count > 0 {
            eprintln!("  {}: {}", kind, count);
        }
    }
}
