use anyhow::Context;
use clap::Parser;
use fashion_filter::adapters::http;
use fashion_filter::core::ConfigProvider;
use fashion_filter::utils::error::ErrorSeverity;
use fashion_filter::utils::{logger, validation::Validate};
use fashion_filter::{Catalog, CatalogEngine, CatalogError, CliConfig, LocalFileSource, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並合併配置（CLI > TOML > 預設值）
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.logging.level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.logging.level.as_deref());
    }

    tracing::info!("🚀 Starting {}", config.service_name());
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    // 目錄必須在接受任何請求前完整載入，失敗則不啟動
    let source = LocalFileSource::new(config.data_path());
    let catalog = match Catalog::load(&source).await {
        Ok(catalog) => catalog,
        Err(e) => fail(&e),
    };

    if cli.dry_run {
        display_catalog_summary(&catalog, &config);
        return Ok(());
    }

    let engine = CatalogEngine::new(catalog);
    let app = match http::router(engine, &config) {
        Ok(app) => app,
        Err(e) => fail(&e),
    };

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    http::serve(listener, app).await?;
    tracing::info!("👋 Server stopped");

    Ok(())
}

fn fail(e: &CatalogError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn display_catalog_summary(catalog: &Catalog, config: &TomlConfig) {
    println!("📋 Catalog Summary:");
    println!("  Source: {}", config.data_path());
    println!("  Items: {}", catalog.len());
    for (category, count) in catalog.count_by_category() {
        if count > 0 {
            println!("    {:<12} {}", category.as_str(), count);
        }
    }
    println!("  Default page size: {}", config.default_page_size());
    println!("  Would listen on: {}", config.bind_address());
    println!();
    println!("✅ Dry run complete. Catalog is valid.");
}
