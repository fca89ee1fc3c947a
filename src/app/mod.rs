//! Shelfwatch application module: the run loop and its background worker.

/// Runtime loop and background workers.
mod runtime;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
pub use runtime::workers::inventory::{PollerHandle, refresh_once, spawn_inventory_worker};
