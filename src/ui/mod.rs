//! Localized view-models of the dashboard and their plain-text form.

pub mod card;
pub mod summary;

pub use card::{ForecastCell, ProductCard};
pub use summary::{SummaryCard, SummaryCards};

use crate::i18n::Locale;
use crate::state::{DashboardState, SortMode};

/// What: Text lines of the whole dashboard.
///
/// Inputs:
/// - `state`: Current dashboard state
/// - `locale`: Locale matching `state.language`
///
/// Output:
/// - Title, sort mode, summary, then one line per product in display order
///
/// Details:
/// - While loading only the title and the loading notice are produced
/// - After a failed refresh a stale notice precedes the last known data
#[must_use]
pub fn dashboard_lines(state: &DashboardState, locale: &Locale) -> Vec<String> {
    let mut lines = vec![format!(
        "{} - {}",
        locale.t("app.title"),
        locale.t("inventory.title")
    )];
    if state.loading {
        lines.push(locale.t("inventory.loading"));
        return lines;
    }
    let sort_note = match state.sort_mode {
        SortMode::FixedPosition => "settings.fixedPosition.enabled",
        SortMode::Priority => "settings.fixedPosition.disabled",
    };
    lines.push(format!(
        "{}: {}",
        locale.t("settings.fixedPosition"),
        locale.t(sort_note)
    ));
    if state.is_stale() {
        lines.push(locale.t("inventory.stale"));
    }
    lines.push(SummaryCards::build(&state.summary(), locale).to_line());
    lines.extend(
        state
            .ordered_products()
            .iter()
            .map(|p| ProductCard::build(p, locale).to_line()),
    );
    if let Some(ts) = state.last_success {
        lines.push(format!(
            "{}: {}",
            locale.t("product.lastUpdated"),
            locale.format_datetime(ts)
        ));
    }
    lines
}
