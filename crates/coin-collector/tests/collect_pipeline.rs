//! 수집 파이프라인 통합 테스트 (CoinGecko 응답은 mockito로 대체).

use std::fs;
use std::path::PathBuf;

use coin_collector::config::{ApiConfig, HistoryConfig};
use coin_collector::coingecko::CoinGeckoClient;
use coin_collector::modules::run_collection;
use coin_collector::{CollectorConfig, CollectorError};
use coin_core::{read_series, Coin, DatasetDescriptor};
use mockito::{Matcher, Server, ServerGuard};
use rust_decimal_macros::dec;

const QUOTE_BODY: &str = r#"{
    "bitcoin": {
        "usd": 67187.33,
        "usd_market_cap": 1325000000000.5,
        "usd_24h_vol": 31260929299.1,
        "usd_24h_change": -1.25,
        "last_updated_at": 1709251200
    }
}"#;

const HISTORY_BODY: &str = r#"{
    "prices": [[1704067200000, 42265.187], [1704153600000, 44167.333], [1704240000000, 44957.97]],
    "market_caps": [[1704067200000, 827600123456.4], [1704153600000, 865000000000.6], [1704240000000, 880000000000]],
    "total_volumes": [[1704067200000, 14120000001.2], [1704153600000, 18000000000], [1704240000000, 25000000000.5]]
}"#;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("coin-collector-test-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn test_config(server: &ServerGuard, root: PathBuf) -> CollectorConfig {
    CollectorConfig {
        api: ApiConfig {
            base_url: server.url(),
            timeout_secs: 5,
            request_delay_ms: 0,
        },
        coin: Coin::bitcoin(),
        history: HistoryConfig { days: 3 },
        data_root: root,
        validate_package: false,
    }
}

fn quote_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("ids".into(), "bitcoin".into()),
        Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
        Matcher::UrlEncoded("include_market_cap".into(), "true".into()),
        Matcher::UrlEncoded("include_24hr_vol".into(), "true".into()),
        Matcher::UrlEncoded("include_24hr_change".into(), "true".into()),
        Matcher::UrlEncoded("include_last_updated_at".into(), "true".into()),
    ])
}

fn history_query(days: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("vs_currency".into(), "usd".into()),
        Matcher::UrlEncoded("days".into(), days.to_string()),
        Matcher::UrlEncoded("interval".into(), "daily".into()),
    ])
}

async fn mock_json(
    server: &mut ServerGuard,
    path: &str,
    status: usize,
    body: &str,
) -> mockito::Mock {
    mock_json_matching(server, path, Matcher::Any, status, body).await
}

async fn mock_json_matching(
    server: &mut ServerGuard,
    path: &str,
    query: Matcher,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("GET", path)
        .match_query(query)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_successful_run_writes_all_artifacts() {
    let mut server = Server::new_async().await;
    let quote =
        mock_json_matching(&mut server, "/simple/price", quote_query(), 200, QUOTE_BODY).await;
    let history = mock_json_matching(
        &mut server,
        "/coins/bitcoin/market_chart",
        history_query(3),
        200,
        HISTORY_BODY,
    )
    .await;

    let root = scratch_dir();
    let config = test_config(&server, root.clone());

    let stats = run_collection(&config).await.unwrap();

    quote.assert_async().await;
    history.assert_async().await;
    assert_eq!(stats.requests, 2);
    assert_eq!(stats.rows_written, 3);
    assert_eq!(stats.rows_dropped, 0);
    assert_eq!(stats.descriptor_bytes, 300);

    // 원시 파일 두 개
    let mut raw_files: Vec<String> = fs::read_dir(root.join("data/raw"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    raw_files.sort();
    assert_eq!(raw_files.len(), 2);
    assert!(raw_files[0].starts_with("current_price_"));
    assert!(raw_files[1].starts_with("historical_data_"));

    let stamp = stats.run_stamp.clone().unwrap();
    let raw_quote: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(root.join(format!("data/raw/current_price_{}.json", stamp))).unwrap(),
    )
    .unwrap();
    assert_eq!(raw_quote["usd"], serde_json::json!(67187.33));
    let keys: Vec<&str> = raw_quote.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["usd", "usd_market_cap", "usd_24h_vol", "usd_24h_change", "last_updated_at"]
    );

    // 정규화 CSV
    let series = read_series(&root.join("data/processed/bitcoin_prices.csv")).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.first().unwrap().price, dec!(42265.19));
    assert_eq!(series.first().unwrap().market_cap, 827_600_123_456);
    assert_eq!(series.last().unwrap().volume, 25_000_000_000);

    // 디스크립터
    let descriptor: DatasetDescriptor =
        serde_json::from_str(&fs::read_to_string(root.join("datapackage.json")).unwrap()).unwrap();
    assert_eq!(descriptor.name, "bitcoin-price-data");
    assert_eq!(descriptor.resources.len(), 1);
    assert_eq!(descriptor.resources[0].path, "data/processed/bitcoin_prices.csv");
    assert_eq!(descriptor.resources[0].bytes, 300);

    fs::remove_dir_all(&root).ok();
}

#[tokio::test]
async fn test_quote_rate_limited_writes_nothing() {
    let mut server = Server::new_async().await;
    let _quote = mock_json(&mut server, "/simple/price", 429, r#"{"error":"rate limited"}"#).await;

    let root = scratch_dir();
    let config = test_config(&server, root.clone());

    let err = run_collection(&config).await.unwrap_err();

    match err {
        CollectorError::Api { status, endpoint, .. } => {
            assert_eq!(status, 429);
            assert_eq!(endpoint, "/simple/price");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!root.join("data").exists());
    assert!(!root.join("datapackage.json").exists());

    fs::remove_dir_all(&root).ok();
}

#[tokio::test]
async fn test_history_server_error_writes_nothing() {
    let mut server = Server::new_async().await;
    let _quote = mock_json(&mut server, "/simple/price", 200, QUOTE_BODY).await;
    let _history = mock_json(&mut server, "/coins/bitcoin/market_chart", 500, "internal error").await;

    let root = scratch_dir();
    let config = test_config(&server, root.clone());

    let err = run_collection(&config).await.unwrap_err();

    assert!(err.is_api_error());
    assert!(!root.join("data").exists());

    fs::remove_dir_all(&root).ok();
}

#[tokio::test]
async fn test_quote_without_coin_key_is_parse_error() {
    let mut server = Server::new_async().await;
    let _quote = mock_json(&mut server, "/simple/price", 200, r#"{"ethereum": {"usd": 3000}}"#).await;

    let config = test_config(&server, scratch_dir());
    let client = CoinGeckoClient::new(&config.api, "bitcoin").unwrap();

    let err = client.fetch_current_quote().await.unwrap_err();

    assert!(matches!(err, CollectorError::Parse(_)));
    fs::remove_dir_all(&config.data_root).ok();
}

#[tokio::test]
async fn test_history_accepts_numeric_strings() {
    let mut server = Server::new_async().await;
    let _history = mock_json(
        &mut server,
        "/coins/bitcoin/market_chart",
        200,
        r#"{"prices": [[0, "100"]], "market_caps": [[0, "1000"]], "total_volumes": [[0, "10"]]}"#,
    )
    .await;

    let config = test_config(&server, scratch_dir());
    let client = CoinGeckoClient::new(&config.api, "bitcoin").unwrap();

    let snapshot = client.fetch_historical_series(1).await.unwrap();

    assert_eq!(snapshot.chart.prices.len(), 1);
    assert_eq!(snapshot.chart.prices[0].1, dec!(100));
    assert_eq!(snapshot.raw["prices"][0][1], "100");
    fs::remove_dir_all(&config.data_root).ok();
}

#[tokio::test]
async fn test_history_request_uses_daily_interval() {
    let mut server = Server::new_async().await;
    let history = mock_json_matching(
        &mut server,
        "/coins/bitcoin/market_chart",
        history_query(30),
        200,
        HISTORY_BODY,
    )
    .await;

    let config = test_config(&server, scratch_dir());
    let client = CoinGeckoClient::new(&config.api, "bitcoin").unwrap();

    let snapshot = client.fetch_historical_series(30).await.unwrap();

    history.assert_async().await;
    assert_eq!(snapshot.chart.prices.len(), 3);
    fs::remove_dir_all(&config.data_root).ok();
}
