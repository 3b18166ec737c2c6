//! 정규화 시세 CSV 기반 리포트 생성기.
//!
//! 수집기가 만든 `data/processed/{coin}_prices.csv`를 읽어 다음을 생성합니다:
//! - 요약 통계 (현재가, 최고/최저가, 평균, 범위)
//! - Plotly 가격/거래량 차트 (단독 HTML)
//! - 통계와 두 차트를 담은 HTML 리포트

pub mod charts;
pub mod config;
pub mod error;
pub mod report;
pub mod run;
pub mod stats;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use report::ReportArtifacts;
pub use run::{load_processed, run_report};
pub use stats::{compute_stats, SummaryStats};
