//! 에러 타입 정의.

use std::path::PathBuf;

use coin_core::CoreError;
use thiserror::Error;

/// Report 에러 타입
#[derive(Debug, Error)]
pub enum ReportError {
    /// 정규화 CSV가 없음 (수집기를 먼저 실행해야 함)
    #[error("price data not found at {}", .0.display())]
    DataNotFound(PathBuf),

    /// CSV에 데이터 행이 없음
    #[error("price data is empty")]
    EmptyDataset,

    /// 템플릿 렌더링 에러
    #[error("Template render error: {0}")]
    Render(#[from] askama::Error),

    /// 파일 입출력 에러
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 직렬화 에러
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 데이터셋 에러
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for ReportError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DataNotFound(path) => ReportError::DataNotFound(path),
            other => ReportError::Core(other),
        }
    }
}

impl ReportError {
    /// 입력 데이터 부재 에러인지 확인
    pub fn is_data_not_found(&self) -> bool {
        matches!(self, ReportError::DataNotFound(_))
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, ReportError>;
