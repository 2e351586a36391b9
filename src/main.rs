mod analyzer;
mod config;
mod model;
mod normalizer;
mod parser;
mod presenter;
mod source;
mod utils;

use config::{load_config, DEFAULT_CONFIG_PATH};
use presenter::{serve, AppState, ChartSettings};
use source::DexScreenerSource;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let source = match DexScreenerSource::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize data source: {}", e);
            return;
        }
    };

    let state = AppState::new(Arc::new(source), ChartSettings::from_config(&config));

    info!("🚀 DexSignal starting on {}...", config.bind_addr);
    if let Err(e) = serve(config.bind_addr, state).await {
        error!("Server error: {}", e);
    }
}
