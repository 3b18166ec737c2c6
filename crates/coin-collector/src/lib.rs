//! CoinGecko 시세 수집기.
//!
//! 한 번의 실행으로 다음 산출물을 만듭니다:
//! - 원시 API 응답 JSON (`data/raw/`, 실행마다 새 파일)
//! - 정규화 일별 시세 CSV (`data/processed/{coin}_prices.csv`)
//! - 데이터 패키지 디스크립터 (`datapackage.json`)

pub mod coingecko;
pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use stats::CollectionStats;
