//! 원시/정규화 데이터 저장 모듈.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use coin_core::{write_series, DatasetLayout, PriceSeries};
use serde_json::Value;
use tracing::info;

use crate::Result;

/// 원시 파일명에 쓰이는 실행 스탬프 형식
pub const RUN_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// 저장된 원시 파일 경로
#[derive(Debug, Clone)]
pub struct RawArtifacts {
    pub stamp: String,
    pub quote_path: PathBuf,
    pub history_path: PathBuf,
}

/// 수집 시각으로 실행 스탬프 생성
pub fn run_stamp(collected_at: NaiveDateTime) -> String {
    collected_at.format(RUN_STAMP_FORMAT).to_string()
}

/// 원시 API 응답을 그대로 저장
///
/// 같은 스탬프의 파일이 이미 있으면 덮어쓰지 않고 에러를 반환합니다.
pub fn persist_raw(
    layout: &DatasetLayout,
    stamp: &str,
    quote: &Value,
    history: &Value,
) -> Result<RawArtifacts> {
    fs::create_dir_all(layout.raw_dir())?;

    let quote_path = layout.raw_quote_path(stamp);
    let history_path = layout.raw_history_path(stamp);

    write_json_new(&quote_path, quote)?;
    write_json_new(&history_path, history)?;

    info!(stamp = stamp, dir = %layout.raw_dir().display(), "원시 데이터 저장 완료");

    Ok(RawArtifacts {
        stamp: stamp.to_string(),
        quote_path,
        history_path,
    })
}

/// 정규화 시계열을 CSV로 저장 (기존 파일 덮어쓰기)
pub fn persist_processed(layout: &DatasetLayout, series: &PriceSeries) -> Result<PathBuf> {
    fs::create_dir_all(layout.processed_dir())?;

    let path = layout.processed_csv();
    write_series(&path, series)?;

    info!(path = %path.display(), rows = series.len(), "정규화 데이터 저장 완료");

    Ok(path)
}

fn write_json_new(path: &Path, value: &Value) -> Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_run_stamp_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(run_stamp(at), "20240301_090507");
    }

    fn scratch_layout() -> DatasetLayout {
        let root = std::env::temp_dir().join(format!("coin-persist-{}", uuid::Uuid::new_v4()));
        DatasetLayout::new(root, "bitcoin")
    }

    #[test]
    fn test_raw_quote_keeps_response_key_order() {
        let layout = scratch_layout();
        let quote: Value =
            serde_json::from_str(r#"{"usd":1,"last_updated_at":2,"usd_market_cap":3}"#).unwrap();
        let history: Value =
            serde_json::from_str(r#"{"prices":[],"market_caps":[],"total_volumes":[]}"#).unwrap();

        let raw = persist_raw(&layout, "20240301_090507", &quote, &history).unwrap();

        let text = fs::read_to_string(&raw.quote_path).unwrap();
        let usd = text.find("\"usd\"").unwrap();
        let updated = text.find("\"last_updated_at\"").unwrap();
        let cap = text.find("\"usd_market_cap\"").unwrap();
        assert!(usd < updated && updated < cap, "key order changed: {}", text);

        let text = fs::read_to_string(&raw.history_path).unwrap();
        assert!(text.find("\"prices\"").unwrap() < text.find("\"total_volumes\"").unwrap());

        fs::remove_dir_all(layout.root()).ok();
    }

    #[test]
    fn test_raw_files_never_overwritten() {
        let layout = scratch_layout();
        let value = serde_json::json!({"usd": 1});

        persist_raw(&layout, "20240301_090507", &value, &value).unwrap();
        let second = persist_raw(&layout, "20240301_090507", &value, &value);

        assert!(matches!(second, Err(crate::CollectorError::Io(_))));
        fs::remove_dir_all(layout.root()).ok();
    }
}
