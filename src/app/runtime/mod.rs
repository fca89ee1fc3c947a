use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::select;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::i18n::{Locale, resolve_language};
use crate::sources::{HttpInventoryFeed, InventoryFeed};
use crate::state::{ApplyEffect, DashboardState, RefreshOutcome};
use crate::ui::dashboard_lines;

pub mod workers;

use workers::inventory::{refresh_once, spawn_inventory_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Command typed on stdin while the dashboard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Refresh now.
    Refresh,
    /// Switch between fixed-position and priority order.
    ToggleSort,
    /// Switch between Japanese and English.
    ToggleLanguage,
    /// Leave.
    Quit,
}

impl Command {
    /// Parse one input line; an empty line refreshes.
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" | "refresh" => Some(Self::Refresh),
            "s" | "sort" => Some(Self::ToggleSort),
            "l" | "lang" | "language" => Some(Self::ToggleLanguage),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Print the dashboard to stdout.
fn print_dashboard(state: &DashboardState, locale: &Locale) {
    println!();
    for line in dashboard_lines(state, locale) {
        println!("{line}");
    }
}

/// What: Log an applied outcome at the level chosen in settings.
fn log_effect(effect: &ApplyEffect, seq: u64, verbose: bool) {
    if let ApplyEffect::Replaced(count) = effect {
        if verbose {
            tracing::info!(seq, products = count, "inventory updated");
        } else {
            tracing::debug!(seq, products = count, "inventory updated");
        }
    }
}

/// What: Run the dashboard end-to-end: build the feed, poll it, and print every update.
///
/// Inputs:
/// - `settings`: Effective settings (file plus command-line overrides)
/// - `once`: Perform a single refresh, print it and return
///
/// Output:
/// - `Ok(())` on Ctrl-C, `quit`, or after a successful single refresh
///
/// # Errors
/// - Returns `Err` when the HTTP client cannot be built
/// - With `once`, returns `Err` when the refresh fails
///
/// Details:
/// - Stdin commands: empty line or `r` refreshes, `s` toggles the sort mode,
///   `l` toggles the language, `q` quits
/// - Refresh failures keep the last known data on screen
pub async fn run(settings: Settings, once: bool) -> Result<()> {
    let language = resolve_language(&settings.language);
    let mut locale = Locale::load(language);
    let mut state = DashboardState::new(language, settings.sort_mode);
    let feed: Arc<dyn InventoryFeed> = Arc::new(HttpInventoryFeed::new(
        settings.endpoint.clone(),
        settings.request_timeout,
    )?);
    tracing::info!(
        endpoint = %settings.endpoint,
        language = language.locale_code(),
        sort = settings.sort_mode.as_config_key(),
        "shelfwatch starting"
    );

    if once {
        let outcome = refresh_once(feed.as_ref(), &settings.baseline, 1).await;
        let failure = outcome.result.as_ref().err().cloned();
        state.apply(outcome);
        print_dashboard(&state, &locale);
        return failure.map_or(Ok(()), |e| Err(e.into()));
    }

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<RefreshOutcome>();
    let poller = spawn_inventory_worker(
        Arc::clone(&feed),
        settings.baseline,
        settings.poll_interval,
        outcome_tx,
    );
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        select! {
            _ = &mut ctrl_c => {
                tracing::info!("interrupt received; shutting down");
                break;
            }
            maybe = outcome_rx.recv() => {
                let Some(outcome) = maybe else { break };
                let seq = outcome.seq;
                let effect = state.apply(outcome);
                log_effect(&effect, seq, settings.log_refreshes);
                if effect != ApplyEffect::Stale {
                    print_dashboard(&state, &locale);
                }
            }
            line = stdin.next_line(), if stdin_open => {
                match line {
                    Ok(Some(text)) => match Command::parse(&text) {
                        Some(Command::Refresh) => poller.refresh_now(),
                        Some(Command::ToggleSort) => {
                            state.sort_mode = state.sort_mode.toggled();
                            tracing::info!(sort = state.sort_mode.as_config_key(), "sort mode changed");
                            print_dashboard(&state, &locale);
                        }
                        Some(Command::ToggleLanguage) => {
                            state.language = state.language.toggled();
                            locale = Locale::load(state.language);
                            tracing::info!(language = state.language.locale_code(), "language changed");
                            print_dashboard(&state, &locale);
                        }
                        Some(Command::Quit) => break,
                        None => tracing::debug!(input = %text, "unrecognized command"),
                    },
                    Ok(None) => stdin_open = false,
                    Err(e) => {
                        tracing::warn!(error = %e, "stdin unreadable; commands disabled");
                        stdin_open = false;
                    }
                }
            }
        }
    }

    poller.stop().await;
    Ok(())
}
