//! Dashboard state owned by the runtime loop.

use chrono::{DateTime, Utc};

use crate::i18n::{Collator, Language};
use crate::logic::{InventorySummary, sorted_products, summarize};
use crate::state::{Product, SortMode};

/// Result of one refresh attempt, as sent by the refresh worker.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// Position of the attempt in worker order, starting at 1.
    pub seq: u64,
    /// When the attempt finished.
    pub finished_at: DateTime<Utc>,
    /// New collection, or the reason the attempt failed.
    pub result: Result<Vec<Product>, String>,
}

/// What applying an outcome did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyEffect {
    /// The collection was replaced with this many products.
    Replaced(usize),
    /// The attempt failed; the previous collection stays.
    KeptPrevious,
    /// The outcome predates one already applied and was ignored.
    Stale,
}

/// Everything the dashboard shows, replaced or updated only through [`DashboardState::apply`].
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Current collection in feed order.
    pub products: Vec<Product>,
    /// True until the first refresh outcome arrives.
    pub loading: bool,
    /// Active language.
    pub language: Language,
    /// Active ordering.
    pub sort_mode: SortMode,
    /// Error of the most recent failed refresh, cleared by the next success.
    pub last_error: Option<String>,
    /// When the collection was last replaced.
    pub last_success: Option<DateTime<Utc>>,
    /// Sequence number of the newest applied outcome.
    applied_seq: u64,
}

impl DashboardState {
    /// What: Empty state waiting for its first refresh.
    #[must_use]
    pub fn new(language: Language, sort_mode: SortMode) -> Self {
        Self {
            loading: true,
            language,
            sort_mode,
            ..Self::default()
        }
    }

    /// What: Apply a refresh outcome.
    ///
    /// Inputs:
    /// - `outcome`: Result of one refresh attempt
    ///
    /// Output:
    /// - `ApplyEffect` describing the change
    ///
    /// Details:
    /// - Success replaces the whole collection; products missing from the response disappear
    /// - Failure keeps the previous collection and records the error
    /// - Either kind ends the initial loading state
    /// - Outcomes older than the newest applied one are ignored
    pub fn apply(&mut self, outcome: RefreshOutcome) -> ApplyEffect {
        if outcome.seq <= self.applied_seq {
            tracing::debug!(
                seq = outcome.seq,
                applied = self.applied_seq,
                "ignoring stale refresh outcome"
            );
            return ApplyEffect::Stale;
        }
        self.applied_seq = outcome.seq;
        self.loading = false;
        match outcome.result {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                self.last_error = None;
                self.last_success = Some(outcome.finished_at);
                ApplyEffect::Replaced(count)
            }
            Err(e) => {
                tracing::warn!(
                    seq = outcome.seq,
                    error = %e,
                    kept = self.products.len(),
                    "refresh failed; keeping previous inventory"
                );
                self.last_error = Some(e);
                ApplyEffect::KeptPrevious
            }
        }
    }

    /// Products in display order for the active sort mode and language.
    #[must_use]
    pub fn ordered_products(&self) -> Vec<Product> {
        sorted_products(
            &self.products,
            self.sort_mode,
            &Collator::for_language(self.language),
        )
    }

    /// Header totals of the current collection.
    #[must_use]
    pub fn summary(&self) -> InventorySummary {
        summarize(&self.products)
    }

    /// Whether the shown data may be out of date because the last refresh failed.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.last_error.is_some()
    }
}
