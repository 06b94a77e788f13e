use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;

mod config;
mod domain;
mod errors;
mod map;
mod responses;
mod router;
mod sidebar;
mod source;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = match AppState::from_config(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(error = %e, "could not set up the property source");
            std::process::exit(1);
        }
    };

    // A failed first load still serves the basemap; POST /reload can retry.
    if let Err(e) = state.reload() {
        tracing::error!(error = %e, "initial sheet load failed, starting with no markers");
    }

    tracing::info!(addr = %config.addr, workers = config.workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
