use clap::Parser;
use emoji_fetch::core::ConfigProvider;
use emoji_fetch::utils::error::ErrorSeverity;
use emoji_fetch::utils::{logger, validation::Validate};
use emoji_fetch::{CliConfig, EmojiPipeline, FetchEngine, FileConfig, LocalSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting emoji-fetch CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            // 指定 TOML 配置檔時改用檔案配置
            let file_config = match FileConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 建議: {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };

            let monitor_enabled = file_config.monitoring_enabled() || cli.monitor;
            run_pipeline(file_config, monitor_enabled).await;
        }
        None => {
            let monitor_enabled = cli.monitor;
            run_pipeline(cli, monitor_enabled).await;
        }
    }

    Ok(())
}

async fn run_pipeline<C>(config: C, monitor_enabled: bool)
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let sink = LocalSink::new(config.output_path().map(str::to_string));
    let count = config.record_count();
    let pipeline = EmojiPipeline::new(sink, config);
    let engine = FetchEngine::new_with_monitoring(pipeline, monitor_enabled);

    // 每次執行都是獨立請求，不快取前一次的結果
    for run in 1..=count {
        if count > 1 {
            tracing::info!("🔁 Fetch {}/{}", run, count);
        }

        match engine.run().await {
            Ok(destination) => {
                tracing::info!("✅ Emoji record delivered to: {}", destination);
            }
            Err(e) => {
                tracing::error!(
                    "❌ Fetch failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 建議: {}", e.recovery_suggestion());

                let exit_code = match e.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };

                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
        }
    }
}
