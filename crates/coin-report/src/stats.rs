//! 요약 통계.

use coin_core::{format_usd, PriceSeries};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{ReportError, Result};

/// 가격 요약 통계
///
/// 평균은 `Decimal`로 정확히 계산하며 표시할 때만 소수 둘째 자리로 반올림합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// 마지막 행의 가격
    pub current: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub mean: Decimal,
    /// `max - min`
    pub range: Decimal,
}

/// 표시용 라벨/값 쌍
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: &'static str,
    pub value: String,
}

/// 시계열 전체에 대한 요약 통계 계산
pub fn compute_stats(series: &PriceSeries) -> Result<SummaryStats> {
    let current = series.last().ok_or(ReportError::EmptyDataset)?.price;

    let mut min = current;
    let mut max = current;
    let mut sum = Decimal::ZERO;
    for price in series.prices() {
        min = min.min(price);
        max = max.max(price);
        sum += price;
    }
    let mean = sum / Decimal::from(series.len());

    Ok(SummaryStats {
        current,
        min,
        max,
        mean,
        range: max - min,
    })
}

impl SummaryStats {
    /// 리포트와 콘솔에 출력되는 순서대로 정렬된 항목
    pub fn entries(&self) -> Vec<StatEntry> {
        vec![
            StatEntry {
                label: "Current Price",
                value: format_usd(self.current, 2),
            },
            StatEntry {
                label: "Year High",
                value: format_usd(self.max, 2),
            },
            StatEntry {
                label: "Year Low",
                value: format_usd(self.min, 2),
            },
            StatEntry {
                label: "Average Price",
                value: format_usd(self.mean, 2),
            },
            StatEntry {
                label: "Price Range",
                value: format_usd(self.range, 2),
            },
        ]
    }
}
