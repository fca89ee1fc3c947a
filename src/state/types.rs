//! Core value types shared by the sorter, the metrics deriver and the runtime.

use chrono::{DateTime, Utc};

/// A single product as seen on the dashboard for one refresh cycle.
///
/// Products are plain values: every successful refresh replaces the whole
/// collection instead of patching individual entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// String form of the numeric product id, used as the render key.
    pub id: String,
    /// Numeric product id as delivered by the feed.
    pub product_id: u64,
    /// Japanese display name.
    pub name_ja: String,
    /// English display name.
    pub name_en: String,
    /// Category label used as the stable sort key.
    pub category: String,
    /// Units currently on display to customers.
    pub shown_on_display: u32,
    /// Units held in the backroom of the store.
    pub in_store_backroom: u32,
    /// Units in transit to the store.
    pub in_delivery: u32,
    /// Per-product low-stock trigger level.
    pub minimum_threshold: u32,
    /// Estimated consumption rate in units per hour.
    pub sales_per_hour: f64,
    /// Timestamp of the last known state change.
    pub last_updated: DateTime<Utc>,
}

/// Ordering applied to the product list before it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Products stay in place: ordered by category only.
    #[default]
    FixedPosition,
    /// Most urgent products first (critical shortage, empty display, low display).
    Priority,
}

impl SortMode {
    /// Return the string key used in settings files for this sort mode.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::FixedPosition => "fixed_position",
            Self::Priority => "priority",
        }
    }

    /// Parse a sort mode from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fixed_position" | "fixed" | "category" => Some(Self::FixedPosition),
            "priority" | "urgency" => Some(Self::Priority),
            _ => None,
        }
    }

    /// The other mode; backs the fixed-position switch.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::FixedPosition => Self::Priority,
            Self::Priority => Self::FixedPosition,
        }
    }
}
