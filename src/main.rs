mod client;
mod config;
mod error;
mod logging;
mod pipeline;
mod scraper;
mod store;
mod tables;

use crate::client::Client;
use crate::config::{Config, Credentials};
use crate::error::Result;
use crate::logging::{init_logging, LoggerConfig};
use crate::pipeline::Pipeline;
use crate::store::MongoStore;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        log_error!(err => "[main] Scrape aborted");
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load("config.toml")?;
    init_logging(LoggerConfig::from_log_config(&config.logging)?)?;

    log_info!("[main] Starting lazy portfolio scraper...");
    let credentials = Credentials::from_env()?;
    log_info!(
        "[main] Connecting to {} as {}",
        credentials.host,
        credentials.username
    );
    let store = MongoStore::connect(&credentials.connection_string(), &config.database).await?;

    let client = Client::builder()
        .base_url(&config.homepage_url)
        .header("user-agent", &config.user_agent)?
        .header("accept-language", "en-US,en;q=0.7")?
        .chrome_impersonation(config.chrome_impersonation)
        .build()?;

    let month_label = chrono::Local::now().format("%b %Y").to_string();
    let summary = Pipeline::new(&client, &store, config.homepage_url.as_str(), month_label)
        .run()
        .await?;

    log_info!(
        "[main] Stored {} portfolios ({} without a rating summary)",
        summary.portfolios.len(),
        summary.without_rating.len()
    );
    Ok(())
}
