use attendance_cli::utils::{logger, validation::Validate};
use attendance_cli::{CliConfig, DatasetLoader, HttpFetcher, Shell};
use clap::Parser;
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting attendance-cli");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 啟動時一次性抓取並建立模型，失敗即終止
    let loader = DatasetLoader::new(HttpFetcher::new(config));
    let course = match loader.load().await {
        Ok(course) => course,
        Err(e) => {
            tracing::error!("❌ Failed to load attendance dataset: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(course, stdin.lock(), stdout.lock());
    shell.run()?;

    tracing::info!("✅ Session ended");
    Ok(())
}
