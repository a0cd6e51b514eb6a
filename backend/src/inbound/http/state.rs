//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the registry port and remain testable without I/O.

use std::sync::Arc;

use actix_web::web;
use tracing::error;

use crate::domain::ports::RegistryService;
use crate::domain::{Error, TraceId};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registry: Arc<dyn RegistryService>,
}

impl HttpState {
    /// Construct state from the registry port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use course_registry::domain::ports::{FixtureSnapshotRepository, RegistryService};
    /// use course_registry::domain::{CourseRegistry, RegistryStores};
    /// use course_registry::inbound::http::state::HttpState;
    /// use course_registry::outbound::store::InMemoryEntityStore;
    /// use mockable::DefaultClock;
    ///
    /// let registry = CourseRegistry::new(
    ///     RegistryStores {
    ///         courses: Arc::new(InMemoryEntityStore::new()),
    ///         students: Arc::new(InMemoryEntityStore::new()),
    ///         lessons: Arc::new(InMemoryEntityStore::new()),
    ///     },
    ///     Arc::new(DefaultClock),
    ///     Arc::new(FixtureSnapshotRepository),
    /// );
    /// let state = HttpState::new(Arc::new(registry));
    /// assert!(state.registry.list_courses().is_empty());
    /// ```
    pub fn new(registry: Arc<dyn RegistryService>) -> Self {
        Self { registry }
    }

    /// Run a registry call on the blocking pool.
    ///
    /// Registry updates hold the update gate and write the snapshot file, so
    /// they must not run on the async workers. The caller's trace identifier
    /// is carried across so errors raised on the pool still report it.
    pub async fn call<T, F>(&self, operation: F) -> Result<T, Error>
    where
        F: FnOnce(&dyn RegistryService) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let registry = Arc::clone(&self.registry);
        let trace_id = TraceId::current();
        web::block(move || TraceId::sync_scope(trace_id, || operation(registry.as_ref())))
            .await
            .map_err(|err| {
                error!(error = %err, "registry call did not complete on the blocking pool");
                Error::internal(format!("registry call aborted: {err}"))
            })?
    }
}
