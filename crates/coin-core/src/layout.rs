//! 디스크 레이아웃.
//!
//! ```text
//! {root}/
//! ├── datapackage.json
//! └── data/
//!     ├── raw/current_price_{stamp}.json
//!     ├── raw/historical_data_{stamp}.json
//!     └── processed/{coin}_prices.csv
//! ```

use std::path::{Path, PathBuf};

/// 수집기와 리포터가 공유하는 파일 경로 규칙.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    root: PathBuf,
    coin_id: String,
}

impl DatasetLayout {
    pub const DESCRIPTOR_FILE: &'static str = "datapackage.json";

    pub fn new(root: impl Into<PathBuf>, coin_id: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            coin_id: coin_id.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    /// 원시 API 응답 디렉토리.
    pub fn raw_dir(&self) -> PathBuf {
        self.root.join("data").join("raw")
    }

    /// 정규화 CSV 디렉토리.
    pub fn processed_dir(&self) -> PathBuf {
        self.root.join("data").join("processed")
    }

    /// 정규화 CSV 파일명.
    pub fn processed_file_name(&self) -> String {
        format!("{}_prices.csv", self.coin_id)
    }

    /// 정규화 CSV 경로.
    pub fn processed_csv(&self) -> PathBuf {
        self.processed_dir().join(self.processed_file_name())
    }

    /// 디스크립터에 기록되는 CSV 상대 경로 (플랫폼과 무관하게 `/` 사용).
    pub fn processed_csv_relative(&self) -> String {
        format!("data/processed/{}", self.processed_file_name())
    }

    /// 디스크립터 경로.
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(Self::DESCRIPTOR_FILE)
    }

    /// 현재 시세 원시 파일 경로.
    pub fn raw_quote_path(&self, stamp: &str) -> PathBuf {
        self.raw_dir().join(format!("current_price_{}.json", stamp))
    }

    /// 과거 시세 원시 파일 경로.
    pub fn raw_history_path(&self, stamp: &str) -> PathBuf {
        self.raw_dir().join(format!("historical_data_{}.json", stamp))
    }
}
