//! Command-line argument definition and processing.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Settings;
use crate::state::SortMode;

/// Shelfwatch - store inventory monitor with Japanese/English output
#[derive(Parser, Debug)]
#[command(name = "shelfwatch")]
#[command(version)]
#[command(about = "Polls a store inventory feed and prints stock levels, forecasts and alerts", long_about = None)]
pub struct Args {
    /// Inventory endpoint URL (overrides settings.conf)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Poll interval in milliseconds (at least 100)
    #[arg(short = 'i', long, value_parser = clap::value_parser!(u64).range(100..))]
    pub interval_ms: Option<u64>,

    /// Display language: ja, en or auto
    #[arg(long)]
    pub lang: Option<String>,

    /// Product order: fixed_position or priority
    #[arg(long, value_parser = parse_sort_mode)]
    pub sort: Option<SortMode>,

    /// Refresh once, print the dashboard and exit
    #[arg(long)]
    pub once: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file to use instead of ~/.config/shelfwatch/settings.conf
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// What: Parse a `--sort` value.
///
/// # Errors
/// - Returns `Err` naming the accepted values when `s` is not a known mode
fn parse_sort_mode(s: &str) -> Result<SortMode, String> {
    SortMode::from_config_key(s)
        .ok_or_else(|| format!("unknown sort mode '{s}' (expected fixed_position or priority)"))
}

/// What: Apply command-line overrides on top of loaded settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from file or defaults.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Only flags that were given override; everything else keeps the file value.
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint.clone_from(endpoint);
    }
    if let Some(ms) = args.interval_ms {
        settings.poll_interval = Duration::from_millis(ms);
    }
    if let Some(lang) = &args.lang {
        settings.language.clone_from(lang);
    }
    if let Some(sort) = args.sort {
        settings.sort_mode = sort;
    }
    if args.verbose {
        settings.log_refreshes = true;
    }
}
