//! Display order through the public API, in both languages.

use chrono::{TimeZone, Utc};
use shelfwatch::i18n::{Collator, Language};
use shelfwatch::logic::sorted_products;
use shelfwatch::state::{Product, SortMode};

fn product(id: &str, category: &str, shown: u32, backroom: u32, rate: f64) -> Product {
    Product {
        id: id.to_string(),
        product_id: 0,
        name_ja: id.to_string(),
        name_en: id.to_string(),
        category: category.to_string(),
        shown_on_display: shown,
        in_store_backroom: backroom,
        in_delivery: 20,
        minimum_threshold: 10,
        sales_per_hour: rate,
        last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
/// What: Switching modes reorders the same collection; ties keep the order they arrive in
fn ordering_toggle_between_modes() {
    let products = vec![
        product("water", "Beverages", 40, 80, 2.0),
        product("chips", "Snacks", 0, 80, 2.0),
        product("bento", "Food", 4, 2, 5.0),
        product("tea", "Beverages", 8, 80, 2.0),
    ];
    let collator = Collator::for_language(Language::En);

    let fixed = sorted_products(&products, SortMode::FixedPosition, &collator);
    assert_eq!(ids(&fixed), ["water", "tea", "bento", "chips"]);

    let priority = sorted_products(&products, SortMode::Priority, &collator);
    assert_eq!(ids(&priority), ["bento", "chips", "tea", "water"]);

    let back = sorted_products(&priority, SortMode::Priority.toggled(), &collator);
    assert_eq!(ids(&back), ["tea", "water", "bento", "chips"]);
}

#[test]
/// What: Japanese ordering follows the kana reading whatever the script
fn ordering_japanese_categories() {
    let products = vec![
        product("b", "のみもの", 40, 80, 1.0),
        product("a", "おかし", 40, 80, 1.0),
        product("c", "カップめん", 40, 80, 1.0),
    ];
    let collator = Collator::for_language(Language::Ja);
    let fixed = sorted_products(&products, SortMode::FixedPosition, &collator);
    assert_eq!(ids(&fixed), ["a", "c", "b"]);
}

#[test]
/// What: Accented category labels sort with their base letter in both modes
fn ordering_accented_categories() {
    let products = vec![
        product("frozen", "Frozen", 40, 80, 1.0),
        product("eclairs", "Éclairs", 40, 80, 1.0),
        product("dairy", "Dairy", 40, 80, 1.0),
    ];
    let collator = Collator::for_language(Language::En);
    let fixed = sorted_products(&products, SortMode::FixedPosition, &collator);
    assert_eq!(ids(&fixed), ["dairy", "eclairs", "frozen"]);
    let priority = sorted_products(&products, SortMode::Priority, &collator);
    assert_eq!(ids(&priority), ["dairy", "eclairs", "frozen"]);
}
