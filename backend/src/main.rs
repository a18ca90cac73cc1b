//! Issue tracker entry point.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use issue_tracker::inbound::http::health::HealthState;
use issue_tracker::server::{ServerSettings, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        error!(error = %e, "failed to load settings");
        std::io::Error::other(e.to_string())
    })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &settings).inspect_err(|e| {
        error!(error = %e, "failed to start server");
    })?;
    server.await
}
