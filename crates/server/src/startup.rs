use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use service::{file::product_db::ProductDb, runtime};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> Result<SocketAddr, StartupError> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Resolve the catalog file path from configs or env, with a default.
fn load_data_file() -> String {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.store.normalize_from_env();
            cfg.store.data_file
        }
        Err(_) => env::var("PRODUCTS_FILE").unwrap_or_else(|_| "data/products.json".to_string()),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let data_file = load_data_file();
    if let Some(dir) = Path::new(&data_file).parent() {
        if !dir.as_os_str().is_empty() {
            runtime::ensure_env(&dir.to_string_lossy()).await?;
        }
    }

    // A catalog file that exists but cannot be parsed aborts startup here.
    let store = ProductDb::load(&data_file).await?;
    info!(%data_file, "product store loaded");

    let app: Router = routes::build_router(store);

    let addr = load_bind_addr()?;
    info!(%addr, "starting product server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
