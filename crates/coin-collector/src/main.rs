//! Coin price collector CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use coin_collector::{modules, CollectorConfig};
use coin_core::{init_logging, Coin, LogConfig};

#[derive(Parser)]
#[command(name = "coin-collector")]
#[command(about = "Collect daily coin prices from CoinGecko", long_about = None)]
#[command(version)]
struct Cli {
    /// 수집할 과거 일수
    #[arg(long)]
    days: Option<u32>,

    /// CoinGecko 코인 ID (예: bitcoin)
    #[arg(long)]
    coin_id: Option<String>,

    /// 표시용 코인 이름 (예: Bitcoin)
    #[arg(long)]
    coin_name: Option<String>,

    /// 데이터셋 루트 디렉토리
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// API 기본 URL
    #[arg(long)]
    base_url: Option<String>,

    /// 두 요청 사이 대기 시간 (밀리초)
    #[arg(long)]
    request_delay_ms: Option<u64>,

    /// frictionless 검증 생략
    #[arg(long)]
    skip_validate: bool,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// CLI 인자로 환경변수 설정을 덮어씀
    fn apply(self, mut config: CollectorConfig) -> CollectorConfig {
        if let Some(days) = self.days {
            config.history.days = days;
        }
        if self.coin_id.is_some() || self.coin_name.is_some() {
            config.coin = Coin::new(
                self.coin_id.unwrap_or(config.coin.id),
                self.coin_name.unwrap_or(config.coin.name),
            );
        }
        if let Some(root) = self.data_root {
            config.data_root = root;
        }
        if let Some(url) = self.base_url {
            config.api.base_url = url;
        }
        if let Some(delay) = self.request_delay_ms {
            config.api.request_delay_ms = delay;
        }
        if self.skip_validate {
            config.validate_package = false;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig::new(format!(
        "coin_collector={0},coin_core={0}",
        cli.log_level
    ))
    .with_env_format();
    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::info!("Coin Collector 시작");

    let config = cli.apply(CollectorConfig::from_env());
    if let Err(e) = config.validate() {
        eprintln!("❌ Error: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::debug!(
        base_url = %config.api.base_url,
        coin = %config.coin.id,
        data_root = %config.data_root.display(),
        "설정 로드 완료"
    );

    match modules::run_collection(&config).await {
        Ok(stats) => {
            stats.log_summary("시세 수집");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "수집 실패");
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
