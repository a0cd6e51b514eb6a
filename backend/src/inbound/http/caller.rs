//! Caller identity extractor.
//!
//! Authentication happens upstream; the fronting gateway forwards the
//! authenticated principal in the `X-Caller-Principal` header. Handlers that
//! need an identity take a [`Caller`] argument and reject requests without
//! one as `401 Unauthorized`.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{CallerIdentity, Error};

/// Header carrying the authenticated caller principal.
pub const CALLER_PRINCIPAL_HEADER: &str = "x-caller-principal";

/// Authenticated caller of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(CallerIdentity);

impl Caller {
    /// Unwrap into the domain identity.
    pub fn into_identity(self) -> CallerIdentity {
        self.0
    }
}

fn caller_from(req: &HttpRequest) -> Result<Caller, Error> {
    let value = req
        .headers()
        .get(CALLER_PRINCIPAL_HEADER)
        .ok_or_else(|| Error::unauthorized("caller principal required"))?;
    let raw = value
        .to_str()
        .map_err(|_| Error::unauthorized("caller principal must be visible ASCII"))?;
    CallerIdentity::new(raw.trim())
        .map(Caller)
        .map_err(|_| Error::unauthorized("caller principal required"))
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(caller_from(req))
    }
}
