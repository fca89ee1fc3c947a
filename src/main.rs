//! Shelfwatch binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use shelfwatch::{app, args, config};

/// Log timestamp in local time: `YYYY-MM-DD-T HH:MM:SS`.
struct ShelfwatchTimer;

impl tracing_subscriber::fmt::time::FormatTime for ShelfwatchTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/shelfwatch/logs/shelfwatch.log`, or stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = config::logs_dir();
    log_path.push("shelfwatch.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ShelfwatchTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr, so startup is never blocked on the log file
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ShelfwatchTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let mut settings = match config::load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "settings could not be loaded");
            eprintln!("shelfwatch: {e}");
            return ExitCode::FAILURE;
        }
    };
    args::apply_overrides(&args, &mut settings);

    let code = match app::run(settings, args.once).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Application error");
            eprintln!("shelfwatch: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Shelfwatch exited");
    code
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives a `YYYY-MM-DD-T HH:MM:SS` timestamp
    #[test]
    fn shelfwatch_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::ShelfwatchTimer;
        let _ = t.format_time(&mut writer);
        assert_eq!(buf.len(), "2024-01-01-T 00:00:00".len());
        assert!(buf.contains("-T "));
    }
}
