//! 리포트 파이프라인 통합 테스트.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use coin_core::{write_series, Coin, PricePoint, PriceSeries};
use coin_report::{load_processed, run_report, ReportConfig, ReportError};
use rust_decimal_macros::dec;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("coin-report-test-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_for(root: &PathBuf) -> ReportConfig {
    ReportConfig {
        coin: Coin::bitcoin(),
        data_root: root.clone(),
        output_dir: root.join("visualizations"),
    }
}

fn write_sample(config: &ReportConfig) {
    let day = |d: u32| {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    };
    let series = PriceSeries::new(vec![
        PricePoint::from_datetime(day(1), dec!(42265.19), 827_600_123_456, 14_120_000_001),
        PricePoint::from_datetime(day(2), dec!(44167.33), 865_000_000_000, 18_000_000_000),
        PricePoint::from_datetime(day(3), dec!(42848.18), 840_000_000_000, 25_000_000_000),
    ])
    .unwrap();

    let layout = config.layout();
    fs::create_dir_all(layout.processed_dir()).unwrap();
    write_series(&layout.processed_csv(), &series).unwrap();
}

#[test]
fn test_report_writes_three_files() {
    let root = scratch_dir();
    let config = config_for(&root);
    write_sample(&config);

    let artifacts = run_report(&config).unwrap();

    assert_eq!(
        artifacts.report,
        root.join("visualizations").join("bitcoin_report.html")
    );
    for path in artifacts.paths() {
        assert!(path.exists(), "missing {}", path.display());
    }

    let report = fs::read_to_string(&artifacts.report).unwrap();
    assert!(report.contains("<title>Bitcoin Price Report</title>"));
    assert!(report.contains("<h3>$42,848.18</h3>"));
    assert!(report.contains("<h3>$44,167.33</h3>"));
    assert!(report.contains("<h3>$42,265.19</h3>"));
    assert!(report.contains("<h3>$43,093.57</h3>"));
    assert!(report.contains("<h3>$1,902.14</h3>"));
    assert!(report.contains("Plotly.newPlot('price-chart'"));

    let volume = fs::read_to_string(&artifacts.volume_chart).unwrap();
    assert!(volume.contains("Bitcoin 24h Trading Volume"));
    assert!(volume.contains("\"lightblue\""));

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_missing_csv_creates_no_artifacts() {
    let root = scratch_dir();
    let config = config_for(&root);

    let err = run_report(&config).unwrap_err();

    match err {
        ReportError::DataNotFound(path) => {
            assert_eq!(path, root.join("data/processed/bitcoin_prices.csv"));
        }
        other => panic!("expected DataNotFound, got {other:?}"),
    }
    assert!(!config.output_dir.exists());

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_header_only_csv_is_empty_dataset() {
    let root = scratch_dir();
    let config = config_for(&root);
    let layout = config.layout();
    fs::create_dir_all(layout.processed_dir()).unwrap();
    fs::write(
        layout.processed_csv(),
        "date,datetime,price,market_cap,volume\n",
    )
    .unwrap();

    assert!(load_processed(&layout).unwrap().is_empty());
    assert!(matches!(run_report(&config), Err(ReportError::EmptyDataset)));
    assert!(!config.output_dir.exists());

    fs::remove_dir_all(&root).ok();
}
