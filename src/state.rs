//! Shared application state for all routes.

use crate::config::ResourceRegistry;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Immutable after startup; resolves `/api/:resource` segments.
    pub resources: Arc<ResourceRegistry>,
}

impl AppState {
    pub fn new(pool: PgPool, resources: ResourceRegistry) -> Self {
        AppState {
            pool,
            resources: Arc::new(resources),
        }
    }
}
