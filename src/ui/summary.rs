//! Header figures of the dashboard.

use crate::i18n::{Locale, format_count};
use crate::logic::InventorySummary;

/// One header figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    /// Localized title.
    pub title: String,
    /// Grouped value.
    pub value: String,
    /// Localized subtitle.
    pub subtitle: String,
}

/// The four header figures in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    /// Units across all locations.
    pub total_units: SummaryCard,
    /// Products below threshold.
    pub low_stock: SummaryCard,
    /// Units in transit.
    pub in_delivery: SummaryCard,
    /// Units on display.
    pub on_display: SummaryCard,
}

impl SummaryCards {
    /// What: Localize the header figures.
    ///
    /// Details:
    /// - The low-stock subtitle uses the singular form for exactly one product
    #[must_use]
    pub fn build(summary: &InventorySummary, locale: &Locale) -> Self {
        let card = |key: &str, value: u64| SummaryCard {
            title: locale.t(&format!("metrics.{key}")),
            value: format_count(value),
            subtitle: locale.t(&format!("metrics.{key}.subtitle")),
        };
        let low = summary.low_stock_count;
        let low_subtitle = if low == 1 {
            locale.t("metrics.lowStock.subtitle.single")
        } else {
            locale.t_fmt("metrics.lowStock.subtitle.multiple", &[&low])
        };
        Self {
            total_units: card("totalUnits", summary.total_units),
            low_stock: SummaryCard {
                title: locale.t("metrics.lowStock"),
                value: format_count(u64::try_from(low).unwrap_or(u64::MAX)),
                subtitle: low_subtitle,
            },
            in_delivery: card("inDelivery", summary.in_delivery_units),
            on_display: card("onDisplay", summary.on_display_units),
        }
    }

    /// Cards in display order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &SummaryCard> {
        [
            &self.total_units,
            &self.low_stock,
            &self.in_delivery,
            &self.on_display,
        ]
        .into_iter()
    }

    /// What: Single-line plain-text form for terminal output.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.iter()
            .map(|c| format!("{}: {}", c.title, c.value))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
