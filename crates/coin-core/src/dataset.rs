//! 정규화된 가격 CSV 읽기/쓰기.
//!
//! 컬럼: `date`, `datetime`, `price`, `market_cap`, `volume`.
//! 수집기가 쓰고 리포터가 읽는 유일한 데이터 경로입니다.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{PricePoint, PriceSeries};

/// CSV 헤더. 데이터 행이 없어도 항상 기록됩니다.
pub const CSV_HEADER: [&str; 5] = ["date", "datetime", "price", "market_cap", "volume"];

/// `datetime` 컬럼 형식. 소수 초는 0이 아닐 때만 기록됩니다.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// CSV 한 행.
#[derive(Debug, Serialize, Deserialize)]
struct PriceRecord {
    date: NaiveDate,
    datetime: String,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    market_cap: i64,
    volume: i64,
}

impl From<&PricePoint> for PriceRecord {
    fn from(point: &PricePoint) -> Self {
        Self {
            date: point.date,
            datetime: point.datetime.format(DATETIME_FORMAT).to_string(),
            price: point.price,
            market_cap: point.market_cap,
            volume: point.volume,
        }
    }
}

impl TryFrom<PriceRecord> for PricePoint {
    type Error = CoreError;

    fn try_from(record: PriceRecord) -> CoreResult<Self> {
        let datetime = NaiveDateTime::parse_from_str(&record.datetime, DATETIME_FORMAT)
            .map_err(|e| {
                CoreError::InvalidRecord(format!("invalid datetime '{}': {}", record.datetime, e))
            })?;

        if datetime.date() != record.date {
            return Err(CoreError::InvalidRecord(format!(
                "date {} does not match datetime {}",
                record.date, record.datetime
            )));
        }

        Ok(PricePoint::from_datetime(
            datetime,
            record.price,
            record.market_cap,
            record.volume,
        ))
    }
}

/// 시계열 전체를 CSV로 씁니다. 기존 파일은 덮어씁니다.
///
/// 상위 디렉토리는 호출자가 준비해야 합니다.
pub fn write_series(path: &Path, series: &PriceSeries) -> CoreResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for point in series {
        writer.serialize(PriceRecord::from(point))?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = series.len(), "CSV written");

    Ok(())
}

/// CSV를 읽어 시계열로 복원합니다.
///
/// 파일이 없으면 [`CoreError::DataNotFound`]를 반환합니다.
pub fn read_series(path: &Path) -> CoreResult<PriceSeries> {
    if !path.exists() {
        return Err(CoreError::DataNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut points = Vec::new();

    for record in reader.deserialize::<PriceRecord>() {
        points.push(PricePoint::try_from(record?)?);
    }

    debug!(path = %path.display(), rows = points.len(), "CSV loaded");

    PriceSeries::new(points)
}
