//! Pure stock logic: per-product metrics, display ordering and header totals.

pub mod metrics;
pub mod sort;
pub mod summary;

pub use metrics::{AlertBadge, ForecastLevel, StockFlags, StockMetrics, derive_metrics};
pub use sort::{priority_cmp, sorted_products};
pub use summary::{InventorySummary, summarize};
