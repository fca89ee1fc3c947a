//! HTTP feed against a local one-shot server.

use std::time::Duration;

use shelfwatch::config::Settings;
use shelfwatch::sources::{HttpInventoryFeed, InventoryFeed, ProductBaseline, records_to_products};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TWO_RECORDS: &str = r#"[
  {"productId":1,"nameJa":"緑茶","nameEn":"Green Tea","category":"Beverages","shownInStore":12,"updatedAt":1700000000000},
  {"productId":2,"nameJa":"おにぎり","nameEn":"Rice Ball","category":"Food","shownInStore":0,"updatedAt":1700000000000,"salesPerHour":4}
]"#;

/// What: Serve `status` + `body` to every connection; returns the endpoint URL.
async fn serve(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}/inventory")
}

fn feed(url: &str) -> HttpInventoryFeed {
    HttpInventoryFeed::new(url, Duration::from_secs(5)).expect("http client")
}

#[tokio::test]
/// What: A well-formed response decodes and converts in feed order
async fn http_feed_decodes_records() {
    let url = serve("200 OK", TWO_RECORDS).await;
    let feed = feed(&url);
    assert_eq!(feed.describe(), url);

    let records = feed.fetch().await.expect("fetch succeeds");
    assert_eq!(records.len(), 2);
    let products =
        records_to_products(&records, &ProductBaseline::default()).expect("valid records");
    assert_eq!(products[0].name_en, "Green Tea");
    assert_eq!(products[0].in_store_backroom, 80);
    assert_eq!(products[1].shown_on_display, 0);
    assert!((products[1].sales_per_hour - 4.0).abs() < f64::EPSILON);
}

#[tokio::test]
/// What: Non-success statuses, malformed bodies and refused connections fail
async fn http_feed_failures() {
    let unavailable = serve("503 Service Unavailable", "maintenance").await;
    assert!(feed(&unavailable).fetch().await.is_err());

    let garbage = serve("200 OK", "{\"not\":\"an array\"}").await;
    assert!(feed(&garbage).fetch().await.is_err());

    let negative = serve(
        "200 OK",
        r#"[{"productId":1,"nameJa":"a","nameEn":"b","category":"Food","shownInStore":-3,"updatedAt":0}]"#,
    )
    .await;
    assert!(feed(&negative).fetch().await.is_err());

    let closed = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{addr}/inventory")
    };
    assert!(feed(&closed).fetch().await.is_err());
}

#[tokio::test]
/// What: Single-refresh mode succeeds against a healthy feed and fails against a broken one
async fn run_once_reports_refresh_result() {
    let healthy = Settings {
        endpoint: serve("200 OK", TWO_RECORDS).await,
        language: "en".to_string(),
        ..Settings::default()
    };
    assert!(shelfwatch::app::run(healthy, true).await.is_ok());

    let broken = Settings {
        endpoint: serve("500 Internal Server Error", "oops").await,
        ..Settings::default()
    };
    assert!(shelfwatch::app::run(broken, true).await.is_err());
}
