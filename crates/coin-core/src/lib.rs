//! # Coin Core
//!
//! 가격 데이터 수집기와 리포터가 공유하는 핵심 타입을 제공합니다.
//!
//! - 가격 시계열 및 현재 시세 도메인 타입
//! - 데이터셋 디스크립터 (Frictionless Data Package)
//! - 정규화된 CSV 파일 읽기/쓰기
//! - 디스크 레이아웃 (`data/raw`, `data/processed`, `datapackage.json`)
//! - 통화 포맷팅
//! - 로깅 인프라

pub mod dataset;
pub mod error;
pub mod format;
pub mod layout;
pub mod logging;
pub mod types;

pub use dataset::{read_series, write_series};
pub use error::{CoreError, CoreResult};
pub use format::format_usd;
pub use layout::DatasetLayout;
pub use logging::{init_logging, init_logging_from_env, LogConfig, LogFormat};
pub use types::*;
