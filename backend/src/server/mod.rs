//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use course_registry::Trace;
#[cfg(debug_assertions)]
use course_registry::doc::ApiDoc;
use course_registry::domain::ports::{FixtureSnapshotRepository, SnapshotRepository};
use course_registry::domain::{CourseRegistry, RegistryStores};
use course_registry::inbound::http::configure_api;
use course_registry::inbound::http::health::{HealthState, live, ready};
use course_registry::inbound::http::state::HttpState;
use course_registry::outbound::persistence::JsonSnapshotRepository;
use course_registry::outbound::store::InMemoryEntityStore;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

fn snapshot_repository(settings: &ServerSettings) -> std::io::Result<Arc<dyn SnapshotRepository>> {
    match &settings.data_dir {
        Some(dir) => {
            let repo = JsonSnapshotRepository::open(dir, settings.snapshot_file())
                .map_err(std::io::Error::other)?;
            info!(data_dir = %dir.display(), file = settings.snapshot_file(), "snapshot persistence enabled");
            Ok(Arc::new(repo))
        }
        None => {
            info!("no data directory configured; registry is kept in memory only");
            Ok(Arc::new(FixtureSnapshotRepository))
        }
    }
}

/// Restore the registry and construct the HTTP server.
///
/// # Errors
/// Fails when the snapshot cannot be opened or decoded, when the bind
/// address is malformed, or when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let registry = CourseRegistry::new(
        RegistryStores {
            courses: Arc::new(InMemoryEntityStore::new()),
            students: Arc::new(InMemoryEntityStore::new()),
            lessons: Arc::new(InMemoryEntityStore::new()),
        },
        Arc::new(DefaultClock),
        snapshot_repository(settings)?,
    );
    let restored = registry.restore().map_err(std::io::Error::other)?;
    info!(records = restored, "registry ready");

    let http_state = web::Data::new(HttpState::new(Arc::new(registry)));
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "listening");
    Ok(server)
}

/// Wait for `signal`, then fail liveness and drain the server.
pub async fn drain_on(
    signal: impl Future<Output = ()>,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
) {
    signal.await;
    health_state.mark_unhealthy();
    info!("shutdown requested; draining connections");
    handle.stop(true).await;
}
