//! Inventory feed access.
//!
//! The refresh worker only sees the [`InventoryFeed`] trait; the production
//! implementation is [`HttpInventoryFeed`].

use futures::future::BoxFuture;

mod inventory;

pub use inventory::{
    HttpInventoryFeed, InventoryRecord, ProductBaseline, product_from_record, records_to_products,
};

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A source of inventory records.
pub trait InventoryFeed: Send + Sync {
    /// What: Fetch the complete current record list.
    ///
    /// Output:
    /// - `Ok(records)` for a well-formed response
    /// - `Err` when the source is unreachable or the response is malformed
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<InventoryRecord>>>;

    /// Short description for log lines (e.g. the endpoint URL).
    fn describe(&self) -> String {
        "inventory feed".to_string()
    }
}
