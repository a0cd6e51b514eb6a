//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::test_support::{registry_with_clock, stepping_clock};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// State backed by a fresh in-memory registry with a frozen clock.
pub fn registry_state() -> web::Data<HttpState> {
    let registry = registry_with_clock(stepping_clock());
    web::Data::new(HttpState::new(Arc::new(registry)))
}

/// Application exposing the full `/api/v1` surface over `state`.
pub fn registry_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
}
