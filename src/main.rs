use clap::Parser;
use plant_cart::ui::shell;
use plant_cart::utils::{logger, validation::Validate};
use plant_cart::{CartStore, CliConfig, ShopSession};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting plant-cart");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入商品目錄
    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("🌵 Catalog ready with {} items", catalog.len());

    let mut session = ShopSession::new(catalog, CartStore::new());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = shell::run_shell(&mut session, stdin.lock(), &mut out) {
        tracing::error!("❌ Shell stopped: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "Leaving shop with {} lines, total ${}",
        session.store().len(),
        session.total()
    );
}
