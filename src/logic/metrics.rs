//! Per-product derived figures: proportions, depletion forecast and alert flags.

use crate::state::Product;

/// Projection horizons, in hours, of the sales forecast.
pub const FORECAST_HOURS: [u32; 3] = [1, 2, 3];

/// Horizon of the critical-shortage check, in hours.
pub const CRITICAL_HORIZON_HOURS: f64 = 3.0;

/// Projected display stock below this many units is flagged as running low.
pub const FORECAST_LOW_UNITS: f64 = 5.0;

/// Only depletion within this many hours is worth an "empty in" hint.
pub const EMPTY_HINT_MAX_HOURS: f64 = 4.0;

/// Alert flags of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct StockFlags {
    /// Display stock is below the minimum threshold.
    pub low_display: bool,
    /// Backroom stock is below the minimum threshold.
    pub low_backroom: bool,
    /// Both display and backroom are below the threshold.
    pub critical_both_low: bool,
    /// Three hours of sales exceed display plus backroom stock.
    pub critical_shortage: bool,
    /// Nothing is in transit.
    pub no_delivery: bool,
}

/// The single alert badge shown for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertBadge {
    /// Projected three-hour demand exceeds local stock.
    CriticalShortage,
    /// Display and backroom are both below threshold.
    CriticalBothLow,
    /// Display is below threshold.
    LowDisplay,
}

impl AlertBadge {
    /// Translation key of the badge text.
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::CriticalShortage => "alert.critical",
            Self::CriticalBothLow => "alert.lowStore",
            Self::LowDisplay => "alert.lowDisplay",
        }
    }
}

impl StockFlags {
    /// What: Pick the badge to show when several flags are set.
    ///
    /// Output:
    /// - `CriticalShortage` over `CriticalBothLow` over `LowDisplay`; `None` when all are clear
    ///
    /// Details:
    /// - `no_delivery` is not part of the precedence; it is shown alongside any badge
    #[must_use]
    pub const fn badge(&self) -> Option<AlertBadge> {
        if self.critical_shortage {
            Some(AlertBadge::CriticalShortage)
        } else if self.critical_both_low {
            Some(AlertBadge::CriticalBothLow)
        } else if self.low_display {
            Some(AlertBadge::LowDisplay)
        } else {
            None
        }
    }
}

/// Severity of one forecast cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastLevel {
    /// Display projected empty (zero or below).
    Out,
    /// Fewer than [`FORECAST_LOW_UNITS`] units projected.
    Low,
    /// Comfortable.
    Healthy,
}

impl ForecastLevel {
    /// What: Classify a projected display count.
    #[must_use]
    pub fn of(remaining: f64) -> Self {
        if remaining <= 0.0 {
            Self::Out
        } else if remaining < FORECAST_LOW_UNITS {
            Self::Low
        } else {
            Self::Healthy
        }
    }
}

/// Everything derived from one product's raw counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockMetrics {
    /// Display + backroom + in transit.
    pub total: u64,
    /// Share of `total` on display, in percent.
    pub shown_pct: f64,
    /// Share of `total` in the backroom, in percent.
    pub backroom_pct: f64,
    /// Share of `total` in transit, in percent.
    pub delivery_pct: f64,
    /// Projected display stock after 1, 2 and 3 hours; negative means a stock-out.
    pub remaining: [f64; 3],
    /// Hours until the display runs empty.
    ///
    /// `Some(0.0)` when the display is already empty, `None` when stock is on
    /// display but nothing sells (no projected stock-out).
    pub hours_until_empty: Option<f64>,
    /// Alert flags.
    pub flags: StockFlags,
}

/// What: Projected display stock after `hours` of sales.
///
/// Inputs:
/// - `shown_on_display`: Units on display now
/// - `sales_per_hour`: Consumption rate
/// - `hours`: Horizon
///
/// Output:
/// - `shown_on_display - sales_per_hour * hours`; may be negative
#[must_use]
pub fn remaining_after_hours(shown_on_display: u32, sales_per_hour: f64, hours: u32) -> f64 {
    f64::from(shown_on_display) - sales_per_hour * f64::from(hours)
}

/// What: Whether projected three-hour demand exceeds display plus backroom stock.
///
/// Details:
/// - Strict comparison: demand equal to stock is not critical
/// - In-transit units are not counted as available
#[must_use]
pub fn is_critical_shortage(shown_on_display: u32, in_store_backroom: u32, sales_per_hour: f64) -> bool {
    let available = f64::from(shown_on_display) + f64::from(in_store_backroom);
    sales_per_hour * CRITICAL_HORIZON_HOURS > available
}

/// `part` as a percentage of `total`, 0 when `total` is 0.
#[allow(clippy::cast_precision_loss)]
fn percent_of(part: u32, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(part) * 100.0 / total as f64
    }
}

impl StockMetrics {
    /// What: Derive metrics from raw counters.
    ///
    /// Inputs:
    /// - `shown_on_display`, `in_store_backroom`, `in_delivery`: Stock counters
    /// - `sales_per_hour`: Consumption rate (expected >= 0)
    /// - `minimum_threshold`: Low-stock trigger level
    ///
    /// Output:
    /// - `StockMetrics`; never NaN for non-negative, finite rates
    #[must_use]
    pub fn from_counters(
        shown_on_display: u32,
        in_store_backroom: u32,
        in_delivery: u32,
        sales_per_hour: f64,
        minimum_threshold: u32,
    ) -> Self {
        let total =
            u64::from(shown_on_display) + u64::from(in_store_backroom) + u64::from(in_delivery);
        let remaining =
            FORECAST_HOURS.map(|h| remaining_after_hours(shown_on_display, sales_per_hour, h));

        let hours_until_empty = if shown_on_display == 0 {
            Some(0.0)
        } else if sales_per_hour > 0.0 {
            Some(f64::from(shown_on_display) / sales_per_hour)
        } else {
            None
        };

        let low_display = shown_on_display < minimum_threshold;
        let low_backroom = in_store_backroom < minimum_threshold;
        let flags = StockFlags {
            low_display,
            low_backroom,
            critical_both_low: low_display && low_backroom,
            critical_shortage: is_critical_shortage(
                shown_on_display,
                in_store_backroom,
                sales_per_hour,
            ),
            no_delivery: in_delivery == 0,
        };

        Self {
            total,
            shown_pct: percent_of(shown_on_display, total),
            backroom_pct: percent_of(in_store_backroom, total),
            delivery_pct: percent_of(in_delivery, total),
            remaining,
            hours_until_empty,
            flags,
        }
    }

    /// Forecast severity per horizon, aligned with [`FORECAST_HOURS`].
    #[must_use]
    pub fn forecast_levels(&self) -> [ForecastLevel; 3] {
        self.remaining.map(ForecastLevel::of)
    }

    /// What: Hours until empty, when close enough to warn about.
    ///
    /// Output:
    /// - `Some(hours)` when `0 < hours < 4`; `None` otherwise
    #[must_use]
    pub fn empties_soon(&self) -> Option<f64> {
        self.hours_until_empty
            .filter(|h| *h > 0.0 && *h < EMPTY_HINT_MAX_HOURS)
    }
}

/// What: Derive all metrics of a product.
#[must_use]
pub fn derive_metrics(product: &Product) -> StockMetrics {
    StockMetrics::from_counters(
        product.shown_on_display,
        product.in_store_backroom,
        product.in_delivery,
        product.sales_per_hour,
        product.minimum_threshold,
    )
}
