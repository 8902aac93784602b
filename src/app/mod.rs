//! Main application modules.
//!
//! This module provides site input collection, result formatting and
//! statistics printing used by the CLI binary.

pub mod input;
pub mod output;
pub mod statistics;

// Re-export public API
pub use input::{collect_sites, normalize_site};
pub use output::format_result;
pub use statistics::print_probe_statistics;
