//! 수집 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 수집 실행 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    /// API 요청 횟수
    pub requests: usize,
    /// 저장된 원시 JSON 파일 수
    pub raw_files: usize,
    /// 가격 원시 포인트 수
    pub raw_points: usize,
    /// CSV에 기록된 행 수
    pub rows_written: usize,
    /// 타임스탬프 불일치로 제외된 포인트 수
    pub rows_dropped: usize,
    /// 디스크립터에 기록된 예상 바이트
    pub descriptor_bytes: u64,
    /// 원시 파일 실행 스탬프 (YYYYMMDD_HHMMSS)
    pub run_stamp: Option<String>,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CollectionStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 조인 유지율 계산 (%)
    pub fn retention_rate(&self) -> f64 {
        if self.raw_points == 0 {
            0.0
        } else {
            (self.rows_written as f64 / self.raw_points as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            requests = self.requests,
            raw_files = self.raw_files,
            raw_points = self.raw_points,
            rows_written = self.rows_written,
            rows_dropped = self.rows_dropped,
            descriptor_bytes = self.descriptor_bytes,
            run_stamp = self.run_stamp.as_deref().unwrap_or("-"),
            retention_rate = format!("{:.1}%", self.retention_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_rate() {
        let mut stats = CollectionStats::new();
        assert_eq!(stats.retention_rate(), 0.0);

        stats.raw_points = 4;
        stats.rows_written = 3;
        assert!((stats.retention_rate() - 75.0).abs() < f64::EPSILON);
    }
}
