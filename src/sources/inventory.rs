//! Inventory feed records, their conversion into products, and the HTTP feed.

use std::time::Duration;

use chrono::DateTime;
use futures::future::BoxFuture;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::sources::{InventoryFeed, Result};
use crate::state::Product;

/// One record of the inventory endpoint.
///
/// Only the first six fields are guaranteed by the feed. The stock fields the
/// feed may omit are filled from [`ProductBaseline`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Numeric product id.
    pub product_id: u64,
    /// Japanese name.
    pub name_ja: String,
    /// English name.
    pub name_en: String,
    /// Category label.
    pub category: String,
    /// Units on display.
    pub shown_in_store: u32,
    /// Last change, milliseconds since the Unix epoch.
    pub updated_at: i64,
    /// Units in the backroom, when the feed reports them.
    #[serde(default)]
    pub in_store_backroom: Option<u32>,
    /// Units in transit, when the feed reports them.
    #[serde(default)]
    pub in_delivery: Option<u32>,
    /// Low-stock trigger, when the feed reports it.
    #[serde(default)]
    pub minimum_threshold: Option<u32>,
    /// Sales rate, when the feed reports it.
    #[serde(default)]
    pub sales_per_hour: Option<f64>,
}

impl InventoryRecord {
    /// Whether any baseline-backed field is missing from this record.
    #[must_use]
    pub const fn relies_on_baseline(&self) -> bool {
        self.in_store_backroom.is_none()
            || self.in_delivery.is_none()
            || self.minimum_threshold.is_none()
            || self.sales_per_hour.is_none()
    }
}

/// Values used for stock fields the feed does not report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductBaseline {
    /// Backroom units.
    pub in_store_backroom: u32,
    /// In-transit units.
    pub in_delivery: u32,
    /// Low-stock trigger.
    pub minimum_threshold: u32,
    /// Sales rate in units per hour.
    pub sales_per_hour: f64,
}

impl Default for ProductBaseline {
    fn default() -> Self {
        Self {
            in_store_backroom: 80,
            in_delivery: 50,
            minimum_threshold: 10,
            sales_per_hour: 12.0,
        }
    }
}

/// What: Build a product by overlaying a record onto the baseline.
///
/// Inputs:
/// - `record`: Record from the feed
/// - `baseline`: Values for fields the record omits
///
/// Output:
/// - `Ok(Product)`; fields present in the record always win
///
/// # Errors
/// - Returns `Err` when the category is blank
/// - Returns `Err` when `updatedAt` is outside the representable range
/// - Returns `Err` when the sales rate is negative or not finite
pub fn product_from_record(
    record: &InventoryRecord,
    baseline: &ProductBaseline,
) -> std::result::Result<Product, String> {
    if record.category.trim().is_empty() {
        return Err(format!("product {} has an empty category", record.product_id));
    }
    let last_updated = DateTime::from_timestamp_millis(record.updated_at).ok_or_else(|| {
        format!(
            "product {} has an out-of-range timestamp {}",
            record.product_id, record.updated_at
        )
    })?;
    let sales_per_hour = record.sales_per_hour.unwrap_or(baseline.sales_per_hour);
    if !sales_per_hour.is_finite() || sales_per_hour < 0.0 {
        return Err(format!(
            "product {} has an invalid sales rate {sales_per_hour}",
            record.product_id
        ));
    }

    Ok(Product {
        id: record.product_id.to_string(),
        product_id: record.product_id,
        name_ja: record.name_ja.clone(),
        name_en: record.name_en.clone(),
        category: record.category.clone(),
        shown_on_display: record.shown_in_store,
        in_store_backroom: record
            .in_store_backroom
            .unwrap_or(baseline.in_store_backroom),
        in_delivery: record.in_delivery.unwrap_or(baseline.in_delivery),
        minimum_threshold: record
            .minimum_threshold
            .unwrap_or(baseline.minimum_threshold),
        sales_per_hour,
        last_updated,
    })
}

/// What: Convert a whole response into the new product collection.
///
/// Inputs:
/// - `records`: Records in feed order (duplicates kept)
/// - `baseline`: Values for omitted fields
///
/// Output:
/// - `Ok(products)` in feed order
///
/// # Errors
/// - Returns `Err` for the first malformed record; the whole response is rejected
///
/// Details:
/// - Logs at debug level how many records were completed from the baseline
pub fn records_to_products(
    records: &[InventoryRecord],
    baseline: &ProductBaseline,
) -> std::result::Result<Vec<Product>, String> {
    let products = records
        .iter()
        .map(|record| product_from_record(record, baseline))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let filled = records.iter().filter(|r| r.relies_on_baseline()).count();
    if filled > 0 {
        debug!(
            filled,
            total = records.len(),
            "feed omitted stock fields; baseline values used"
        );
    }
    Ok(products)
}

/// Inventory feed served over HTTP as a JSON array.
pub struct HttpInventoryFeed {
    /// Client with connect and request timeouts.
    client: reqwest::Client,
    /// Endpoint URL.
    url: String,
}

impl HttpInventoryFeed {
    /// What: Create a feed for `url`.
    ///
    /// Inputs:
    /// - `url`: Endpoint returning the record array
    /// - `timeout`: Upper bound for one request, connect included
    ///
    /// # Errors
    /// - Returns `Err` when the HTTP client cannot be built (e.g. TLS backend failure)
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(format!("shelfwatch/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl InventoryFeed for HttpInventoryFeed {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<InventoryRecord>>> {
        Box::pin(async move {
            let resp = self.client.get(&self.url).send().await?;
            let status = resp.status();
            let body = resp.text().await?;
            if !status.is_success() {
                let preview: String = body.chars().take(200).collect();
                warn!(
                    status = status.as_u16(),
                    preview = preview,
                    "inventory feed returned non-success status"
                );
                return Err(format!("inventory feed status {status}").into());
            }
            let records: Vec<InventoryRecord> = serde_json::from_str(&body)?;
            debug!(
                status = status.as_u16(),
                bytes = body.len(),
                records = records.len(),
                "fetched inventory feed"
            );
            Ok(records)
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
