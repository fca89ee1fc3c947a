use std::path::Path;
use std::time::Duration;

use crate::config::parsing::{parse_bool, parse_key_value, skip_comment_or_empty};
use crate::sources::ProductBaseline;
use crate::state::SortMode;

/// Shortest accepted poll interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Inventory endpoint URL.
    pub endpoint: String,
    /// Time between refreshes.
    pub poll_interval: Duration,
    /// Upper bound for one feed request.
    pub request_timeout: Duration,
    /// Language setting as written: a language code, or `auto` to detect.
    pub language: String,
    /// Initial product ordering.
    pub sort_mode: SortMode,
    /// Log each applied refresh at info level instead of debug.
    pub log_refreshes: bool,
    /// Values for stock fields the feed omits.
    pub baseline: ProductBaseline,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/inventory".to_string(),
            poll_interval: Duration::from_secs(1),
            request_timeout: Duration::from_secs(10),
            language: "ja".to_string(),
            sort_mode: SortMode::FixedPosition,
            log_refreshes: false,
            baseline: ProductBaseline::default(),
        }
    }
}

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys count as `_`.
/// - Unknown keys are ignored; invalid values are logged and leave the default.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, val)) = parse_key_value(line) else {
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        let applied = match key.as_str() {
            "endpoint" | "inventory_url" | "api_url" => {
                if val.is_empty() {
                    false
                } else {
                    settings.endpoint = val.clone();
                    true
                }
            }
            "poll_interval_ms" | "refresh_interval_ms" => val
                .parse::<u64>()
                .ok()
                .map(Duration::from_millis)
                .filter(|d| *d >= MIN_POLL_INTERVAL)
                .map(|d| settings.poll_interval = d)
                .is_some(),
            "request_timeout_secs" | "timeout_secs" => val
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .map(|s| settings.request_timeout = Duration::from_secs(s))
                .is_some(),
            "language" | "locale" | "lang" => {
                settings.language = val.clone();
                true
            }
            "sort_mode" | "sort" => SortMode::from_config_key(&val)
                .map(|m| settings.sort_mode = m)
                .is_some(),
            "fixed_position" => parse_bool(&val)
                .map(|fixed| {
                    settings.sort_mode = if fixed {
                        SortMode::FixedPosition
                    } else {
                        SortMode::Priority
                    };
                })
                .is_some(),
            "log_refreshes" => parse_bool(&val)
                .map(|b| settings.log_refreshes = b)
                .is_some(),
            "baseline_in_store_backroom" => val
                .parse::<u32>()
                .ok()
                .map(|v| settings.baseline.in_store_backroom = v)
                .is_some(),
            "baseline_in_delivery" => val
                .parse::<u32>()
                .ok()
                .map(|v| settings.baseline.in_delivery = v)
                .is_some(),
            "baseline_minimum_threshold" => val
                .parse::<u32>()
                .ok()
                .map(|v| settings.baseline.minimum_threshold = v)
                .is_some(),
            "baseline_sales_per_hour" => val
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite() && *r >= 0.0)
                .map(|r| settings.baseline.sales_per_hour = r)
                .is_some(),
            _ => true,
        };
        if !applied {
            tracing::warn!(key = %key, value = %val, "ignoring invalid settings value");
        }
    }
}

/// What: Load settings from a file, or defaults when there is none.
///
/// Inputs:
/// - `explicit`: Path given on the command line, if any
///
/// Output:
/// - Parsed `Settings`
///
/// # Errors
/// - Returns `Err` only when an explicitly given file cannot be read
///
/// Details:
/// - Without `explicit`, the standard locations are searched; a missing or
///   unreadable file there falls back to defaults
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, String> {
    let mut settings = Settings::default();
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {e}", path.display()))?;
        parse_settings(&content, &mut settings);
        tracing::info!(path = %path.display(), "settings loaded");
        return Ok(settings);
    }
    match crate::config::paths::resolve_settings_config_path() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(content) => {
                parse_settings(&content, &mut settings);
                tracing::info!(path = %path.display(), "settings loaded");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "settings unreadable; using defaults");
            }
        },
        None => tracing::debug!("no settings.conf found; using defaults"),
    }
    Ok(settings)
}
