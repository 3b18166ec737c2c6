//! HTML 리포트 렌더링.

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use chrono::{DateTime, Utc};
use coin_core::Coin;
use tracing::info;

use crate::charts::Figure;
use crate::stats::{StatEntry, SummaryStats};
use crate::Result;

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    coin_name: &'a str,
    generated_on: String,
    stats: Vec<StatEntry>,
    price_json: String,
    volume_json: String,
}

#[derive(Template)]
#[template(path = "chart.html")]
struct ChartTemplate<'a> {
    title: &'a str,
    figure_json: String,
}

/// 생성된 리포트 파일 경로
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub report: PathBuf,
    pub price_chart: PathBuf,
    pub volume_chart: PathBuf,
}

impl ReportArtifacts {
    fn new(output_dir: &Path, coin: &Coin) -> Self {
        Self {
            report: output_dir.join(format!("{}_report.html", coin.id)),
            price_chart: output_dir.join(format!("{}_price_chart.html", coin.id)),
            volume_chart: output_dir.join(format!("{}_volume_chart.html", coin.id)),
        }
    }

    /// 메인 리포트를 먼저 두는 순서
    pub fn paths(&self) -> [&Path; 3] {
        [&self.report, &self.price_chart, &self.volume_chart]
    }
}

/// 전체 리포트와 단독 차트 두 개를 `output_dir`에 기록
///
/// 기존 파일은 덮어씁니다.
pub fn render_report(
    output_dir: &Path,
    coin: &Coin,
    price_chart: &Figure,
    volume_chart: &Figure,
    stats: &SummaryStats,
    generated_at: DateTime<Utc>,
) -> Result<ReportArtifacts> {
    fs::create_dir_all(output_dir)?;
    let artifacts = ReportArtifacts::new(output_dir, coin);

    let report = ReportTemplate {
        coin_name: &coin.name,
        generated_on: generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        stats: stats.entries(),
        price_json: price_chart.to_json()?,
        volume_json: volume_chart.to_json()?,
    };
    fs::write(&artifacts.report, report.render()?)?;

    write_chart(&artifacts.price_chart, price_chart)?;
    write_chart(&artifacts.volume_chart, volume_chart)?;

    info!(dir = %output_dir.display(), "리포트 생성 완료");

    Ok(artifacts)
}

fn write_chart(path: &Path, figure: &Figure) -> Result<()> {
    let page = ChartTemplate {
        title: figure.title(),
        figure_json: figure.to_json()?,
    };
    fs::write(path, page.render()?)?;
    Ok(())
}
