pub mod api;
pub mod config;
pub mod engine;
pub mod store;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::server::{AppState, start_server};
use crate::config::{Config, LogFormat};
use crate::engine::random::{MockRandom, SeededRandom, ThreadRandom};
use crate::store::repo::Store;
use crate::store::tokens::TokenIssuer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .init(),
    }

    tracing::info!("Starting EditNova mock API...");

    let random: Arc<dyn MockRandom> = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded random source");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    // Nothing persists; a restart reseeds every counter.
    let store = Store::new(TokenIssuer::new(&config.token_secret));
    let state = Arc::new(AppState::new(store, random));

    start_server(&config, state).await
}
