//! 데이터 패키지 디스크립터 생성 및 검증 모듈.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::process::Command;

use chrono::NaiveDateTime;
use coin_core::{read_series, Coin, DatasetDescriptor, DatasetLayout};
use tracing::{info, warn};

use crate::Result;

/// `frictionless validate` 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// 검증 통과
    Valid,
    /// 검증 도구가 경고/오류를 보고함
    Warnings(String),
    /// 검증 도구가 설치되어 있지 않음
    ToolMissing,
    /// 검증 도구 실행 실패
    Failed(String),
}

/// CSV를 다시 읽어 디스크립터를 생성하고 `datapackage.json`에 저장 (덮어쓰기)
pub fn build_descriptor(
    layout: &DatasetLayout,
    coin: &Coin,
    csv_path: &Path,
    created: NaiveDateTime,
) -> Result<DatasetDescriptor> {
    let rows = read_series(csv_path)?.len();
    let descriptor =
        DatasetDescriptor::for_price_csv(coin, layout.processed_csv_relative(), rows, created);

    let path = layout.descriptor_path();
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, &descriptor)?;
    writer.flush()?;

    info!(path = %path.display(), rows, "디스크립터 저장 완료");

    Ok(descriptor)
}

/// 외부 `frictionless` 도구로 디스크립터 검증
///
/// 결과와 관계없이 실행을 중단시키지 않습니다.
pub fn validate_descriptor(path: &Path) -> ValidationOutcome {
    let output = match Command::new("frictionless")
        .arg("validate")
        .arg(path)
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound => return ValidationOutcome::ToolMissing,
        Err(e) => {
            warn!(error = %e, "frictionless 실행 실패");
            return ValidationOutcome::Failed(e.to_string());
        }
    };

    if output.status.success() {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Warnings(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
