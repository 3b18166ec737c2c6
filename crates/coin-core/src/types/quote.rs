//! 현재 시세 스냅샷.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `simple/price` 엔드포인트가 돌려주는 코인 하나의 현재 시세.
///
/// `usd` 외의 필드는 요청 파라미터에 따라 빠질 수 있어 선택적입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentQuote {
    /// 현재 가격 (USD)
    pub usd: Decimal,
    /// 시가총액 (USD)
    #[serde(default)]
    pub usd_market_cap: Option<Decimal>,
    /// 24시간 거래량 (USD)
    #[serde(default)]
    pub usd_24h_vol: Option<Decimal>,
    /// 24시간 변동률 (%)
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
    /// 마지막 갱신 시각 (epoch 초)
    #[serde(default)]
    pub last_updated_at: Option<i64>,
}

impl CurrentQuote {
    /// 마지막 갱신 시각을 UTC 시각으로 변환합니다.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
