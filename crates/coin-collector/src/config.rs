//! 환경변수 기반 설정 모듈.

use std::path::PathBuf;
use std::time::Duration;

use coin_core::{Coin, DatasetLayout};

use crate::{CollectorError, Result};

/// CoinGecko 공개 API 기본 주소
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// API 설정
    pub api: ApiConfig,
    /// 수집 대상 코인
    pub coin: Coin,
    /// 과거 시세 수집 설정
    pub history: HistoryConfig,
    /// 데이터셋 루트 디렉토리 (`data/`와 `datapackage.json`이 생성되는 곳)
    pub data_root: PathBuf,
    /// 수집 후 `frictionless validate` 실행 여부
    pub validate_package: bool,
}

/// API 설정
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API 기본 URL (끝의 `/` 제외)
    pub base_url: String,
    /// HTTP 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// 두 요청 사이 대기 시간 (밀리초)
    pub request_delay_ms: u64,
}

/// 과거 시세 수집 설정
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// 수집 일수
    pub days: u32,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            coin: Coin::bitcoin(),
            history: HistoryConfig { days: 365 },
            data_root: PathBuf::from("."),
            validate_package: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            request_delay_ms: 1000,
        }
    }
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    ///
    /// 검증은 CLI 인자를 덮어쓴 뒤 [`CollectorConfig::validate`]로 합니다.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            api: ApiConfig {
                base_url: env_var_string("COINGECKO_BASE_URL", &defaults.api.base_url),
                timeout_secs: env_var_parse("HTTP_TIMEOUT_SECS", defaults.api.timeout_secs),
                request_delay_ms: env_var_parse(
                    "REQUEST_DELAY_MS",
                    defaults.api.request_delay_ms,
                ),
            },
            coin: Coin::new(
                env_var_string("COIN_ID", &defaults.coin.id),
                env_var_string("COIN_NAME", &defaults.coin.name),
            ),
            history: HistoryConfig {
                days: env_var_parse("HISTORY_DAYS", defaults.history.days),
            },
            data_root: std::env::var("DATA_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_root),
            validate_package: env_var_bool("VALIDATE_PACKAGE", defaults.validate_package),
        }
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CollectorError::Config("API base URL is empty".to_string()));
        }
        if self.coin.id.trim().is_empty() {
            return Err(CollectorError::Config("coin id is empty".to_string()));
        }
        if self.history.days == 0 {
            return Err(CollectorError::Config(
                "history days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// 디스크 레이아웃
    pub fn layout(&self) -> DatasetLayout {
        DatasetLayout::new(self.data_root.clone(), self.coin.id.clone())
    }
}

impl ApiConfig {
    /// 요청 타임아웃을 Duration으로 반환
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 요청 간 딜레이를 Duration으로 반환
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// 환경변수에서 bool 값 파싱
fn env_var_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(default)
}

/// 환경변수에서 비어 있지 않은 문자열 조회
fn env_var_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
