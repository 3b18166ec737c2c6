//! 에러 타입 정의.

use coin_core::CoreError;
use thiserror::Error;

/// Collector 에러 타입
#[derive(Debug, Error)]
pub enum CollectorError {
    /// 업스트림 API가 성공이 아닌 상태 코드를 반환
    #[error("API error from {endpoint}: HTTP {status}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// 네트워크/HTTP 클라이언트 에러
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 응답 구조가 예상과 다름
    #[error("Response parse error: {0}")]
    Parse(String),

    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),

    /// 파일 입출력 에러
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 직렬화 에러
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 데이터셋 에러
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CollectorError {
    /// API 상태 코드 에러인지 확인
    pub fn is_api_error(&self) -> bool {
        matches!(self, CollectorError::Api { .. })
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
