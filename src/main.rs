use clap::Parser;
use location_listing::utils::logger;
use location_listing::{run_server, Catalog, CliConfig, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let format = if config.log_json {
        logger::LogFormat::Json
    } else {
        logger::LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting location-listing");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證配置
    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Location catalog rejected: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("📚 Loaded {} locations", catalog.len());

    if let Err(e) = run_server(&settings, catalog).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }

    Ok(())
}
