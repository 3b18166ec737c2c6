//! 수집 대상 코인 식별 정보.

use serde::{Deserialize, Serialize};

/// 수집 대상 코인.
///
/// `id`는 CoinGecko 코인 ID이며 파일명과 디스크립터 이름에 쓰입니다.
/// `name`은 차트 제목과 리포트 등 사람이 읽는 곳에 쓰입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// CoinGecko 코인 ID (예: "bitcoin")
    pub id: String,
    /// 표시 이름 (예: "Bitcoin")
    pub name: String,
}

impl Coin {
    /// 새 코인 정보를 생성합니다.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// 비트코인.
    pub fn bitcoin() -> Self {
        Self::new("bitcoin", "Bitcoin")
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::bitcoin()
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
