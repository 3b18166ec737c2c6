//! 환경변수 기반 설정 모듈.

use std::path::PathBuf;

use coin_core::{Coin, DatasetLayout};

/// 리포트 기본 출력 디렉토리
pub const DEFAULT_OUTPUT_DIR: &str = "visualizations";

/// Report 설정
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 리포트 대상 코인
    pub coin: Coin,
    /// 데이터셋 루트 디렉토리 (수집기와 동일)
    pub data_root: PathBuf,
    /// HTML 산출물 디렉토리
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            coin: Coin::bitcoin(),
            data_root: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ReportConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            coin: Coin::new(
                env_var_string("COIN_ID", &defaults.coin.id),
                env_var_string("COIN_NAME", &defaults.coin.name),
            ),
            data_root: env_var_path("DATA_ROOT", defaults.data_root),
            output_dir: env_var_path("REPORT_OUTPUT_DIR", defaults.output_dir),
        }
    }

    /// 디스크 레이아웃
    pub fn layout(&self) -> DatasetLayout {
        DatasetLayout::new(self.data_root.clone(), self.coin.id.clone())
    }
}

/// 환경변수에서 비어 있지 않은 문자열 조회
fn env_var_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_var_path(key: &str, default: PathBuf) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}
