//! Localized view-model of one product card.

use crate::i18n::{Language, Locale, format_count, format_hours, format_rate};
use crate::logic::metrics::FORECAST_HOURS;
use crate::logic::{ForecastLevel, derive_metrics};
use crate::state::Product;

/// One cell of the sales forecast row.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCell {
    /// Horizon label, e.g. `2 hours` or `2時間`.
    pub horizon: String,
    /// Projected display stock, or the localized "out" marker.
    pub value: String,
    /// Severity used to pick the cell's styling.
    pub level: ForecastLevel,
}

/// Everything a product card shows, already localized.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Product id.
    pub id: String,
    /// Name in the active language.
    pub name: String,
    /// Localized category label.
    pub category: String,
    /// Display count, grouped.
    pub shown: String,
    /// Backroom count, grouped.
    pub storage: String,
    /// In-transit count, grouped.
    pub delivery: String,
    /// Shares of display, backroom and transit in the stock bar, in percent.
    pub bar: [f64; 3],
    /// Sales rate with unit, e.g. `12/hr`.
    pub rate: String,
    /// Forecast after 1, 2 and 3 hours.
    pub forecast: [ForecastCell; 3],
    /// "Empty in N hours" hint when depletion is near.
    pub empty_hint: Option<String>,
    /// Text of the alert badge, if any.
    pub badge: Option<String>,
    /// "No delivery scheduled" notice.
    pub no_delivery: Option<String>,
    /// Last update in store time.
    pub last_updated: String,
}

/// Localized horizon label.
fn horizon_label(locale: &Locale, hours: u32) -> String {
    let unit = if hours == 1 {
        locale.t("product.hour")
    } else {
        locale.t("product.hours")
    };
    match locale.language() {
        Language::Ja => format!("{hours}{unit}"),
        Language::En => format!("{hours} {unit}"),
    }
}

impl ProductCard {
    /// What: Build the card of `product` for `locale`.
    ///
    /// Details:
    /// - Forecast values are rounded to whole units, halves up; stock-outs show the "out" marker
    #[must_use]
    pub fn build(product: &Product, locale: &Locale) -> Self {
        let metrics = derive_metrics(product);
        let levels = metrics.forecast_levels();
        let forecast = std::array::from_fn(|i| ForecastCell {
            horizon: horizon_label(locale, FORECAST_HOURS[i]),
            value: match levels[i] {
                ForecastLevel::Out => locale.t("product.out"),
                ForecastLevel::Low | ForecastLevel::Healthy => {
                    metrics.remaining[i].round().to_string()
                }
            },
            level: levels[i],
        });

        Self {
            id: product.id.clone(),
            name: locale.product_name(product).to_string(),
            category: locale.category_label(&product.category),
            shown: format_count(u64::from(product.shown_on_display)),
            storage: format_count(u64::from(product.in_store_backroom)),
            delivery: format_count(u64::from(product.in_delivery)),
            bar: [metrics.shown_pct, metrics.backroom_pct, metrics.delivery_pct],
            rate: format!(
                "{}{}",
                format_rate(product.sales_per_hour),
                locale.t("product.perHour")
            ),
            forecast,
            empty_hint: metrics
                .empties_soon()
                .map(|h| locale.t_fmt("product.emptyIn", &[&format_hours(h)])),
            badge: metrics.flags.badge().map(|b| locale.t(b.translation_key())),
            no_delivery: metrics
                .flags
                .no_delivery
                .then(|| locale.t("alert.noDelivery")),
            last_updated: locale.format_datetime(product.last_updated),
        }
    }

    /// What: Single-line plain-text form for terminal output.
    #[must_use]
    pub fn to_line(&self) -> String {
        let forecast = self
            .forecast
            .iter()
            .map(|c| format!("{} {}", c.horizon, c.value))
            .collect::<Vec<_>>()
            .join(" / ");
        let mut line = format!(
            "[{}] {} ({}) {}/{}/{} {} | {}",
            self.id,
            self.name,
            self.category,
            self.shown,
            self.storage,
            self.delivery,
            self.rate,
            forecast
        );
        for note in [&self.badge, &self.empty_hint, &self.no_delivery]
            .into_iter()
            .flatten()
        {
            line.push_str(" | ");
            line.push_str(note);
        }
        line
    }
}
