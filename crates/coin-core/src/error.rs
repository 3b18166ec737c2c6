//! 데이터셋 공통 에러 타입.

use std::path::PathBuf;

use thiserror::Error;

/// 데이터셋 읽기/쓰기 중 발생하는 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 기대한 로컬 데이터 파일이 없음
    #[error("Data file not found: {}", .0.display())]
    DataNotFound(PathBuf),

    /// 파일 입출력 에러
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 인코딩/디코딩 에러
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON 직렬화 에러
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 잘못된 레코드 (파싱 실패, 타임스탬프 순서 위반 등)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl CoreError {
    /// 데이터 파일 부재 에러인지 확인합니다.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::DataNotFound(_))
    }
}

/// 코어 작업용 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;
