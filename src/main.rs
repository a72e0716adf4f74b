mod config;
mod db;
mod error;
mod http;
mod models;
mod services;
mod store;

use config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Roadlog tracking service...");

    // Init DB
    let pool = db::init_pool(&config.database_url).await?;
    db::init_schema(&pool).await?;
    info!("Connected to database");

    // Serve HTTP
    http::serve(&config, pool).await?;

    Ok(())
}
