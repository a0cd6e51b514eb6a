//! Course registry entry-point: loads settings, restores the registry, and
//! serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use course_registry::inbound::http::health::HealthState;
use server::{ServerSettings, create_server, drain_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)?;
    let handle = server.handle();
    actix_web::rt::spawn(drain_on(
        async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = %err, "shutdown signal listener failed");
                std::future::pending::<()>().await;
            }
        },
        health_state,
        handle,
    ));
    server.await
}
