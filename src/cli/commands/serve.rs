//! Run the HTTP service until Ctrl+C or SIGTERM

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use receipt_processor::adapters::InMemoryReceiptStore;
use receipt_processor::config::ServiceConfig;
use receipt_processor::openapi;
use receipt_processor::server::{self, AppState};

/// Load config, start the server and block until a shutdown signal
pub fn serve(host: Option<String>, port: Option<u16>, config: Option<&Path>) -> anyhow::Result<()> {
    let mut config = ServiceConfig::load(config)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    if let Some(path) = &config.openapi {
        match openapi::load(path) {
            Ok(document) => info!("{}", document.banner()),
            Err(e) => warn!("Could not read OpenAPI document {}: {e}", path.display()),
        }
    }

    let state = AppState::from_config(Arc::new(InMemoryReceiptStore::new()), &config);
    let handle = server::start(&config.server, state)?;

    server::run_until(handle, server::shutdown_signal())
}
