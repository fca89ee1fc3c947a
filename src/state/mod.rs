//! Dashboard state and the value types it is made of.

pub mod dashboard;
pub mod types;

pub use dashboard::{ApplyEffect, DashboardState, RefreshOutcome};
pub use types::{Product, SortMode};
