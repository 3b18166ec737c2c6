//! 리포트 실행 드라이버.

use chrono::Utc;
use coin_core::{read_series, DatasetLayout, PriceSeries};

use crate::charts::{render_price_chart, render_volume_chart};
use crate::report::{render_report, ReportArtifacts};
use crate::stats::compute_stats;
use crate::{ReportConfig, Result};

/// 정규화 CSV 로드
///
/// 파일이 없으면 [`crate::ReportError::DataNotFound`]를 반환합니다.
pub fn load_processed(layout: &DatasetLayout) -> Result<PriceSeries> {
    let path = layout.processed_csv();
    let series = read_series(&path)?;
    tracing::info!(path = %path.display(), rows = series.len(), "정규화 데이터 로드 완료");
    Ok(series)
}

/// 전체 리포트 생성
///
/// CSV 로드와 통계 계산이 성공한 뒤에만 출력 디렉토리를 만듭니다.
pub fn run_report(config: &ReportConfig) -> Result<ReportArtifacts> {
    let coin = &config.coin;
    println!("📊 Creating {} Price Visualizations...", coin);

    let series = load_processed(&config.layout())?;

    println!("📈 Creating price chart...");
    let price_chart = render_price_chart(coin, &series);

    println!("📊 Creating volume chart...");
    let volume_chart = render_volume_chart(coin, &series);

    println!("📋 Calculating statistics...");
    let stats = compute_stats(&series)?;

    println!("📄 Creating HTML report...");
    let artifacts = render_report(
        &config.output_dir,
        coin,
        &price_chart,
        &volume_chart,
        &stats,
        Utc::now(),
    )?;

    println!("✅ Visualizations created successfully!");
    println!("📁 Available files:");
    let [report, price, volume] = artifacts.paths();
    println!("   - {} (Main report)", report.display());
    println!("   - {}", price.display());
    println!("   - {}", volume.display());

    println!("\n📊 {} Statistics:", coin);
    for entry in stats.entries() {
        println!("   {}: {}", entry.label, entry.value);
    }

    Ok(artifacts)
}
