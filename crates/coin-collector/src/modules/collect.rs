//! 수집 실행 드라이버.
//!
//! 현재 시세 → 대기 → 과거 시세 → 원시 저장 → 정규화 → CSV 저장
//! → 디스크립터 → (선택) 검증 순서로 실행합니다. 어느 단계든 실패하면
//! 나머지 단계는 실행되지 않습니다.

use std::time::Instant;

use chrono::Utc;
use coin_core::format_usd;

use super::descriptor::{build_descriptor, validate_descriptor, ValidationOutcome};
use super::normalize::{normalize, unmatched_timestamps};
use super::persist::{persist_processed, persist_raw, run_stamp};
use crate::coingecko::CoinGeckoClient;
use crate::{CollectionStats, CollectorConfig, Result};

/// 전체 수집 실행
pub async fn run_collection(config: &CollectorConfig) -> Result<CollectionStats> {
    let start = Instant::now();
    let mut stats = CollectionStats::new();
    let layout = config.layout();
    let client = CoinGeckoClient::new(&config.api, config.coin.id.clone())?;

    tracing::info!(coin = %config.coin.id, days = config.history.days, "수집 시작");

    // 1. 현재 시세
    println!("📡 Fetching current {} price...", config.coin);
    let quote = client.fetch_current_quote().await?;
    stats.requests += 1;
    println!("💰 Current price: {}", format_usd(quote.quote.usd, 2));

    // 2. API 예의상 대기
    tokio::time::sleep(config.api.request_delay()).await;

    // 3. 과거 시세
    println!(
        "📡 Fetching {} days of historical data...",
        config.history.days
    );
    let history = client.fetch_historical_series(config.history.days).await?;
    stats.requests += 1;
    stats.raw_points = history.chart.prices.len();

    // 4. 원시 데이터 저장
    let collected_at = Utc::now().naive_utc();
    let stamp = run_stamp(collected_at);
    let raw = persist_raw(&layout, &stamp, &quote.raw, &history.raw)?;
    stats.raw_files = 2;
    stats.run_stamp = Some(raw.stamp.clone());

    // 5. 정규화 및 CSV 저장
    let series = normalize(&history.chart)?;
    stats.rows_dropped = unmatched_timestamps(&history.chart);
    let csv_path = persist_processed(&layout, &series)?;
    stats.rows_written = series.len();
    println!("💾 Saved {} records to {}", series.len(), csv_path.display());

    // 6. 디스크립터
    let descriptor = build_descriptor(&layout, &config.coin, &csv_path, collected_at)?;
    stats.descriptor_bytes = descriptor.resource_bytes().unwrap_or_default();
    println!("📋 Data package descriptor: {}", layout.descriptor_path().display());

    // 7. 검증 (실패해도 계속)
    if config.validate_package {
        report_validation(validate_descriptor(&layout.descriptor_path()));
    }

    println!("\n✅ Collection complete");
    println!("   Records: {}", series.len());
    if let Some(latest) = series.last() {
        println!("   Latest price: {}", format_usd(latest.price, 2));
    }
    if let Some((from, to)) = series.date_range() {
        println!("   Date range: {} to {}", from, to);
    }

    stats.elapsed = start.elapsed();
    Ok(stats)
}

fn report_validation(outcome: ValidationOutcome) {
    match outcome {
        ValidationOutcome::Valid => {
            tracing::info!("데이터 패키지 검증 통과");
            println!("✅ Data package is valid");
        }
        ValidationOutcome::Warnings(report) => {
            tracing::warn!(report = %report, "데이터 패키지 검증 경고");
            println!("⚠️  Validation warnings:\n{}", report);
        }
        ValidationOutcome::ToolMissing => {
            tracing::debug!("frictionless 미설치, 검증 생략");
            println!("⚠️  frictionless not installed, skipping validation");
        }
        ValidationOutcome::Failed(reason) => {
            println!("⚠️  Validation could not run: {}", reason);
        }
    }
}
