//! Poll worker feeding a dashboard state through failures and recoveries.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use shelfwatch::app::spawn_inventory_worker;
use shelfwatch::i18n::{Language, Locale};
use shelfwatch::sources::{InventoryFeed, InventoryRecord, ProductBaseline, Result};
use shelfwatch::state::{ApplyEffect, DashboardState, SortMode};
use shelfwatch::ui::dashboard_lines;
use tokio::sync::mpsc;

/// Feed that plays back responses in order, then repeats the last one.
struct ReplayFeed {
    responses: Mutex<Vec<std::result::Result<Vec<InventoryRecord>, String>>>,
}

impl InventoryFeed for ReplayFeed {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<InventoryRecord>>> {
        let next = {
            let mut responses = self.responses.lock().expect("responses lock");
            if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses[0].clone()
            }
        };
        Box::pin(async move { next.map_err(Into::into) })
    }

    fn describe(&self) -> String {
        "replay feed".to_string()
    }
}

fn record(id: u64, category: &str, shown: u32) -> InventoryRecord {
    InventoryRecord {
        product_id: id,
        name_ja: format!("商品{id}"),
        name_en: format!("Item {id}"),
        category: category.to_string(),
        shown_in_store: shown,
        updated_at: 1_700_000_000_000,
        in_store_backroom: Some(40),
        in_delivery: Some(0),
        minimum_threshold: Some(10),
        sales_per_hour: Some(2.0),
    }
}

#[tokio::test]
/// What: Failures keep the last collection; successes replace it wholesale
///
/// - Input: fail, succeed with 2 products, fail, succeed with 1 product
/// - Output: empty-but-loaded, 2 products, same 2 products marked stale, 1 product
async fn refresh_cycle_retains_previous_collection_on_failure() {
    let feed = Arc::new(ReplayFeed {
        responses: Mutex::new(vec![
            Err("connection refused".to_string()),
            Ok(vec![record(1, "Food", 20), record(2, "Snacks", 0)]),
            Err("HTTP 503".to_string()),
            Ok(vec![record(3, "Frozen", 7)]),
        ]),
    });
    let (tx, mut rx) = mpsc::unbounded_channel();
    let poller = spawn_inventory_worker(
        feed,
        ProductBaseline::default(),
        Duration::from_millis(15),
        tx,
    );
    let mut state = DashboardState::new(Language::En, SortMode::Priority);

    assert_eq!(state.apply(rx.recv().await.expect("worker outcome")), ApplyEffect::KeptPrevious);
    assert!(!state.loading);
    assert!(state.products.is_empty());
    assert_eq!(state.last_error.as_deref(), Some("connection refused"));

    assert_eq!(state.apply(rx.recv().await.expect("worker outcome")), ApplyEffect::Replaced(2));
    let first_ids: Vec<String> = state.products.iter().map(|p| p.id.clone()).collect();
    assert_eq!(first_ids, ["1", "2"]);
    assert!(!state.is_stale());

    assert_eq!(state.apply(rx.recv().await.expect("worker outcome")), ApplyEffect::KeptPrevious);
    assert_eq!(state.products.len(), 2);
    assert!(state.is_stale());
    let lines = dashboard_lines(&state, &Locale::builtin(Language::En));
    assert!(lines.contains(&"Feed unreachable, showing last known data".to_string()));

    assert_eq!(state.apply(rx.recv().await.expect("worker outcome")), ApplyEffect::Replaced(1));
    assert_eq!(state.products[0].id, "3");
    assert_eq!(state.summary().low_stock_count, 1);

    poller.stop().await;
}

#[tokio::test]
/// What: Records without stock fields are completed from a custom baseline
async fn refresh_cycle_uses_configured_baseline() {
    let mut sparse = record(9, "Beverages", 4);
    sparse.in_store_backroom = None;
    sparse.sales_per_hour = None;
    let feed = Arc::new(ReplayFeed {
        responses: Mutex::new(vec![Ok(vec![sparse])]),
    });
    let baseline = ProductBaseline {
        in_store_backroom: 7,
        in_delivery: 1,
        minimum_threshold: 2,
        sales_per_hour: 0.5,
    };
    let (tx, mut rx) = mpsc::unbounded_channel();
    let poller = spawn_inventory_worker(feed, baseline, Duration::from_secs(60), tx);
    let outcome = rx.recv().await.expect("initial outcome");
    poller.stop().await;

    let products = outcome.result.expect("valid records");
    assert_eq!(products[0].in_store_backroom, 7);
    // Supplied fields win over the baseline.
    assert_eq!(products[0].in_delivery, 0);
    assert_eq!(products[0].minimum_threshold, 10);
    assert!((products[0].sales_per_hour - 0.5).abs() < f64::EPSILON);
}
