use std::sync::Arc;

use product_api::app::{app, AppState};
use product_api::config::AppConfig;
use product_api::store::MongoProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MONGODB_URI, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // A missing MONGODB_URI is the one unrecoverable error: bail before
    // binding anything.
    let config = AppConfig::from_env()?;
    tracing::info!("starting product-api in {:?} mode", config.environment);

    tracing::info!("connecting to MongoDB...");
    let store = MongoProductStore::connect(&config.mongodb.uri, &config.mongodb.database).await?;

    let state = AppState::new(Arc::new(store));
    let router = app(state);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("product-api listening on http://{}", bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
