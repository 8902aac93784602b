//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT, HTTP_CLIENT_TIMEOUT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result output format for the CLI.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<site>\t<icon>` per line
    Plain,
    /// One JSON object per line
    Json,
}

/// Resolver configuration.
///
/// Parsed from the command line by the binary, but it can also be
/// constructed programmatically through its `Default` impl.
///
/// # Examples
///
/// ```no_run
/// use favicon_resolver::Config;
///
/// let config = Config {
///     sites: vec!["https://www.rust-lang.org".to_string()],
///     timeout_ms: 2_000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "favicon_resolver",
    version,
    about = "Resolves the best available favicon for one or more sites"
)]
pub struct Config {
    /// Site URLs to resolve (e.g. https://github.com)
    pub sites: Vec<String>,

    /// File to read site URLs from (one per line, `#` starts a comment)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = HTTP_CLIENT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of sites resolved concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Result output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print probe statistics after all sites are resolved
    #[arg(long)]
    pub show_stats: bool,
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            file: None,
            timeout_ms: HTTP_CLIENT_TIMEOUT.as_millis() as u64,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            output: OutputFormat::Plain,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            show_stats: false,
        }
    }
}
