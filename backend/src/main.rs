//! Service entry-point: loads settings, installs logging and runs the HTTP
//! server until it is stopped.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use nutriplan::inbound::http::health::HealthState;
use server::{ServerSettings, create_server};

fn init_tracing(json: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    init_tracing(settings.json_logs);

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, &settings)?.await
}
