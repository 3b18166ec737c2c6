//! 데이터셋 디스크립터 (Frictionless Data Package).
//!
//! 정규화된 CSV의 스키마와 출처, 라이선스를 기술하는 메타데이터 문서입니다.
//! 수집 실행마다 새로 생성되며 이전 실행의 상태를 참조하지 않습니다.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Coin;

/// 행당 예상 바이트 수 (`bytes` 필드 추정용).
pub const APPROX_BYTES_PER_ROW: u64 = 100;

const PACKAGE_VERSION: &str = "1.0.0";
const SOURCE_URL: &str = "https://api.coingecko.com/api/v3";

/// Data Package 문서.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub name: String,
    pub title: String,
    pub description: String,
    pub version: String,
    /// 생성 시각 (ISO-8601, UTC, `Z` 접미사)
    pub created: String,
    pub contributors: Vec<Contributor>,
    pub licenses: Vec<License>,
    pub sources: Vec<Source>,
    pub keywords: Vec<String>,
    pub resources: Vec<DescriptorResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub title: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub path: String,
    pub description: String,
}

/// CSV 리소스 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorResource {
    pub name: String,
    /// 데이터셋 루트 기준 상대 경로 (`/` 구분자)
    pub path: String,
    pub title: String,
    pub description: String,
    pub format: String,
    pub mediatype: String,
    pub encoding: String,
    /// 예상 크기 (행 수 × [`APPROX_BYTES_PER_ROW`])
    pub bytes: u64,
    pub schema: DescriptorSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSchema {
    pub fields: Vec<DescriptorField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub title: String,
    pub description: String,
}

impl DescriptorField {
    fn new(name: &str, field_type: &str, title: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl DatasetDescriptor {
    /// 정규화된 CSV를 기술하는 디스크립터를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `coin` - 수집 대상 코인
    /// * `resource_path` - 데이터셋 루트 기준 CSV 상대 경로
    /// * `row_count` - CSV 데이터 행 수 (헤더 제외)
    /// * `created` - 생성 시각 (UTC)
    pub fn for_price_csv(
        coin: &Coin,
        resource_path: impl Into<String>,
        row_count: usize,
        created: NaiveDateTime,
    ) -> Self {
        let name = &coin.name;

        Self {
            name: format!("{}-price-data", coin.id),
            title: format!("{} Price Data", name),
            description: format!(
                "Daily {} price, market capitalization, and trading volume data from CoinGecko API",
                name
            ),
            version: PACKAGE_VERSION.to_string(),
            created: created.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            contributors: vec![Contributor {
                title: "Coin Data Team (Data Package Creator)".to_string(),
                roles: vec!["creator".to_string(), "maintainer".to_string()],
            }],
            licenses: vec![License {
                name: "CC-BY-4.0".to_string(),
                title: "Creative Commons Attribution 4.0 International".to_string(),
                path: "https://creativecommons.org/licenses/by/4.0/".to_string(),
            }],
            sources: vec![Source {
                title: "CoinGecko API".to_string(),
                path: SOURCE_URL.to_string(),
                description: "Free cryptocurrency price API".to_string(),
            }],
            keywords: vec![
                coin.id.clone(),
                "cryptocurrency".to_string(),
                "price".to_string(),
                "market-data".to_string(),
                "financial".to_string(),
            ],
            resources: vec![DescriptorResource {
                name: format!("{}-prices", coin.id),
                path: resource_path.into(),
                title: format!("{} Daily Prices", name),
                description: format!("Daily {} price, market cap, and volume data", name),
                format: "csv".to_string(),
                mediatype: "text/csv".to_string(),
                encoding: "utf-8".to_string(),
                bytes: row_count as u64 * APPROX_BYTES_PER_ROW,
                schema: DescriptorSchema {
                    fields: vec![
                        DescriptorField::new(
                            "date",
                            "date",
                            "Date",
                            "Date of price data (YYYY-MM-DD)",
                        ),
                        DescriptorField::new(
                            "datetime",
                            "datetime",
                            "DateTime",
                            "Full timestamp of price data",
                        ),
                        DescriptorField::new(
                            "price",
                            "number",
                            "Price (USD)",
                            &format!("{} price in US Dollars", name),
                        ),
                        DescriptorField::new(
                            "market_cap",
                            "integer",
                            "Market Capitalization",
                            "Total market capitalization in USD",
                        ),
                        DescriptorField::new(
                            "volume",
                            "integer",
                            "24h Trading Volume",
                            "24-hour trading volume in USD",
                        ),
                    ],
                },
            }],
        }
    }

    /// 첫 번째 리소스의 예상 크기.
    pub fn resource_bytes(&self) -> Option<u64> {
        self.resources.first().map(|r| r.bytes)
    }
}
