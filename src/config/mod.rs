//! Settings file, config directories and the line parser they share.

pub mod parsing;
pub mod paths;
pub mod settings;

pub use paths::{config_dir, logs_dir, resolve_settings_config_path};
pub use settings::{MIN_POLL_INTERVAL, Settings, load_settings, parse_settings};
