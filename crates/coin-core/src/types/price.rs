//! 일별 가격 관측치와 시계열.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// 가격 소수점 자릿수 (USD 센트 단위).
pub const PRICE_DECIMALS: u32 = 2;

/// 타임스탬프가 찍힌 단일 관측치.
///
/// 가격은 소수점 2자리, 시가총액과 거래량은 정수로 반올림된 상태로 보관합니다.
/// 반올림은 은행원 반올림(half-to-even)입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 관측 시각 (epoch 밀리초, UTC)
    pub timestamp: i64,
    /// 관측 날짜 (UTC)
    pub date: NaiveDate,
    /// 관측 시각 (UTC)
    pub datetime: NaiveDateTime,
    /// 가격 (USD)
    pub price: Decimal,
    /// 시가총액 (USD)
    pub market_cap: i64,
    /// 24시간 거래량 (USD)
    pub volume: i64,
}

impl PricePoint {
    /// 원시 API 값으로부터 관측치를 생성합니다.
    pub fn from_raw(
        timestamp: i64,
        price: Decimal,
        market_cap: Decimal,
        volume: Decimal,
    ) -> CoreResult<Self> {
        let datetime = DateTime::from_timestamp_millis(timestamp)
            .ok_or_else(|| CoreError::InvalidRecord(format!("timestamp out of range: {}", timestamp)))?
            .naive_utc();

        Ok(Self {
            timestamp,
            date: datetime.date(),
            datetime,
            price: price.round_dp(PRICE_DECIMALS),
            market_cap: round_to_i64(market_cap, "market_cap")?,
            volume: round_to_i64(volume, "volume")?,
        })
    }

    /// 이미 정규화된 값으로부터 관측치를 생성합니다 (CSV 재적재용).
    pub fn from_datetime(
        datetime: NaiveDateTime,
        price: Decimal,
        market_cap: i64,
        volume: i64,
    ) -> Self {
        Self {
            timestamp: datetime.and_utc().timestamp_millis(),
            date: datetime.date(),
            datetime,
            price,
            market_cap,
            volume,
        }
    }
}

fn round_to_i64(value: Decimal, field: &str) -> CoreResult<i64> {
    value
        .round()
        .to_i64()
        .ok_or_else(|| CoreError::InvalidRecord(format!("{} does not fit in i64: {}", field, value)))
}

/// 타임스탬프 오름차순으로 정렬된 가격 시계열.
///
/// 타임스탬프는 엄격하게 증가하며 중복이 없습니다.
/// 날짜 단위 중복은 막지 않습니다. 일별 `market_chart` 응답은 보통 마지막
/// 자정 포인트와 같은 날짜의 현재 시각 포인트로 끝나므로 한 날짜에 두 행이
/// 생길 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// 관측치 목록으로 시계열을 생성합니다.
    ///
    /// 타임스탬프가 엄격하게 증가하지 않으면 에러를 반환합니다.
    pub fn new(points: Vec<PricePoint>) -> CoreResult<Self> {
        if let Some(pair) = points
            .windows(2)
            .find(|pair| pair[0].timestamp >= pair[1].timestamp)
        {
            return Err(CoreError::InvalidRecord(format!(
                "timestamps must be strictly increasing: {} then {}",
                pair[0].datetime, pair[1].datetime
            )));
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// 가격 열.
    pub fn prices(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// 첫 관측일과 마지막 관측일.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date, self.last()?.date))
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
