//! 과거 시세 정규화 모듈.
//!
//! 가격, 시가총액, 거래량 세 시계열을 타임스탬프 기준으로 내부 조인합니다.
//! 세 시계열 중 하나라도 빠진 타임스탬프는 결과에서 조용히 제외됩니다.

use std::collections::{BTreeMap, BTreeSet};

use coin_core::{PricePoint, PriceSeries};
use rust_decimal::Decimal;

use crate::coingecko::{MarketChart, RawPoint};
use crate::Result;

/// 타임스탬프 → 값 맵. 같은 타임스탬프가 반복되면 첫 값을 유지합니다.
fn index_by_timestamp(points: &[RawPoint]) -> BTreeMap<i64, Decimal> {
    let mut map = BTreeMap::new();
    for RawPoint(ts, value) in points {
        map.entry(*ts).or_insert(*value);
    }
    map
}

/// 원시 시세를 정규화된 시계열로 변환
pub fn normalize(chart: &MarketChart) -> Result<PriceSeries> {
    let prices = index_by_timestamp(&chart.prices);
    let market_caps = index_by_timestamp(&chart.market_caps);
    let volumes = index_by_timestamp(&chart.total_volumes);

    let mut points = Vec::with_capacity(prices.len());
    for (ts, price) in &prices {
        let (Some(market_cap), Some(volume)) = (market_caps.get(ts), volumes.get(ts)) else {
            continue;
        };
        points.push(PricePoint::from_raw(*ts, *price, *market_cap, *volume)?);
    }

    let dropped = unmatched_timestamps(chart);
    if dropped > 0 {
        tracing::debug!(dropped, "타임스탬프 불일치 포인트 제외");
    }

    Ok(PriceSeries::new(points)?)
}

/// 세 시계열 모두에 존재하지는 않는 고유 타임스탬프 수
pub fn unmatched_timestamps(chart: &MarketChart) -> usize {
    let collect = |points: &[RawPoint]| points.iter().map(|p| p.0).collect::<BTreeSet<_>>();
    let prices = collect(&chart.prices);
    let market_caps = collect(&chart.market_caps);
    let volumes = collect(&chart.total_volumes);

    let all: BTreeSet<i64> = prices
        .iter()
        .chain(market_caps.iter())
        .chain(volumes.iter())
        .copied()
        .collect();

    all.into_iter()
        .filter(|ts| !(prices.contains(ts) && market_caps.contains(ts) && volumes.contains(ts)))
        .count()
}
