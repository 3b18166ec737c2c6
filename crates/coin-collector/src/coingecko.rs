//! CoinGecko v3 REST 클라이언트.
//!
//! 사용하는 엔드포인트:
//! - `GET /simple/price` : 현재 시세
//! - `GET /coins/{id}/market_chart` : 일별 과거 시세
//!
//! 재시도는 하지 않습니다. 성공이 아닌 상태 코드는 즉시
//! [`CollectorError::Api`]로 반환되어 실행 전체가 중단됩니다.

use coin_core::CurrentQuote;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::{CollectorError, Result};

const USER_AGENT: &str = concat!("coin-collector/", env!("CARGO_PKG_VERSION"));

/// `[timestamp_ms, value]` 쌍.
///
/// 값은 JSON 숫자 또는 숫자 문자열 모두 허용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawPoint(pub i64, pub Decimal);

/// `market_chart` 응답 (세 개의 병렬 시계열).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<RawPoint>,
    pub market_caps: Vec<RawPoint>,
    pub total_volumes: Vec<RawPoint>,
}

/// 파싱된 현재 시세와 원본 JSON.
#[derive(Debug, Clone)]
pub struct QuoteSnapshot {
    pub quote: CurrentQuote,
    /// 코인 키 아래의 원본 객체
    pub raw: Value,
}

/// 파싱된 과거 시세와 원본 JSON.
#[derive(Debug, Clone)]
pub struct HistorySnapshot {
    pub chart: MarketChart,
    /// 응답 본문 전체
    pub raw: Value,
}

/// CoinGecko API 클라이언트
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
    coin_id: String,
}

impl CoinGeckoClient {
    /// 새 클라이언트 생성
    pub fn new(config: &ApiConfig, coin_id: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            coin_id: coin_id.into(),
        })
    }

    /// 현재 시세 조회
    pub async fn fetch_current_quote(&self) -> Result<QuoteSnapshot> {
        let body = self
            .get_json(
                "/simple/price",
                &[
                    ("ids", self.coin_id.as_str()),
                    ("vs_currencies", "usd"),
                    ("include_market_cap", "true"),
                    ("include_24hr_vol", "true"),
                    ("include_24hr_change", "true"),
                    ("include_last_updated_at", "true"),
                ],
            )
            .await?;

        let raw = body.get(&self.coin_id).cloned().ok_or_else(|| {
            CollectorError::Parse(format!("quote response has no '{}' entry", self.coin_id))
        })?;
        let quote: CurrentQuote = serde_json::from_value(raw.clone())
            .map_err(|e| CollectorError::Parse(format!("invalid quote: {}", e)))?;

        Ok(QuoteSnapshot { quote, raw })
    }

    /// `days`일치 일별 과거 시세 조회
    pub async fn fetch_historical_series(&self, days: u32) -> Result<HistorySnapshot> {
        let endpoint = format!("/coins/{}/market_chart", self.coin_id);
        let days = days.to_string();
        let raw = self
            .get_json(
                &endpoint,
                &[
                    ("vs_currency", "usd"),
                    ("days", days.as_str()),
                    ("interval", "daily"),
                ],
            )
            .await?;

        let chart: MarketChart = serde_json::from_value(raw.clone())
            .map_err(|e| CollectorError::Parse(format!("invalid market chart: {}", e)))?;

        debug!(
            prices = chart.prices.len(),
            market_caps = chart.market_caps.len(),
            total_volumes = chart.total_volumes.len(),
            "market chart parsed"
        );

        Ok(HistorySnapshot { chart, raw })
    }

    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CollectorError::Api {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
