//! Coin price report CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use coin_core::{init_logging, Coin, LogConfig};
use coin_report::{run_report, ReportConfig, ReportError};

#[derive(Parser)]
#[command(name = "coin-report")]
#[command(about = "Render price statistics, charts and an HTML report", long_about = None)]
#[command(version)]
struct Cli {
    /// 데이터셋 루트 디렉토리
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// HTML 출력 디렉토리
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// CoinGecko 코인 ID (예: bitcoin)
    #[arg(long)]
    coin_id: Option<String>,

    /// 표시용 코인 이름 (예: Bitcoin)
    #[arg(long)]
    coin_name: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// CLI 인자로 환경변수 설정을 덮어씀
    fn apply(self, mut config: ReportConfig) -> ReportConfig {
        if self.coin_id.is_some() || self.coin_name.is_some() {
            config.coin = Coin::new(
                self.coin_id.unwrap_or(config.coin.id),
                self.coin_name.unwrap_or(config.coin.name),
            );
        }
        if let Some(root) = self.data_root {
            config.data_root = root;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig::new(format!(
        "coin_report={0},coin_core={0}",
        cli.log_level
    ))
    .with_env_format();
    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = cli.apply(ReportConfig::from_env());

    match run_report(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(ReportError::DataNotFound(path)) => {
            eprintln!(
                "❌ Error: {} price data not found at {}. Run the collector first.",
                config.coin,
                path.display()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "리포트 생성 실패");
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
