use autologin::utils::{logger, validation::Validate};
use autologin::{ChromiumDriver, CliConfig, LoginEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting autologin");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let driver = ChromiumDriver::new(config.browser.headless);
    let engine = LoginEngine::new(driver, config);

    match engine.run().await {
        Ok(report) => {
            if report.succeeded() {
                tracing::info!("Login workflow completed: signed in");
                println!("✅ Signed in");
            } else {
                tracing::warn!("Login workflow completed: both paths failed");
                println!("❌ Login failed on both the UI and API paths");
            }
        }
        Err(e) => {
            tracing::error!("Login workflow aborted: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
