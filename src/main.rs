use clap::Parser;
use housfy_scout::config::Cli;
use housfy_scout::{HousfyScraper, ScraperTrait};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    setup_logging(cli.verbose);

    info!("🏠 Housfy Scout");

    let start_urls = cli.start_urls()?;
    let scraper = HousfyScraper::with_settings(start_urls, cli.settings())?;

    info!(
        "Starting {} scrape from {} start URLs...",
        scraper.source_name(),
        scraper.start_urls().len()
    );
    let properties = scraper.scrape().await?;

    info!("✅ Scraped {} properties", properties.len());

    let json = serde_json::to_string_pretty(&properties)?;
    tokio::fs::write(&cli.output, json).await?;
    info!("💾 Saved all properties to {}", cli.output.display());

    Ok(())
}

/// `RUST_LOG` wins over the verbosity flag when set
fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "housfy_scout=info,warn",
        1 => "housfy_scout=debug,info",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
