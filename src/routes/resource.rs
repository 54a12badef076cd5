//! Resource CRUD routes. One parameterized route pair serves every registered resource kind.

use crate::handlers::resource::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/:resource", get(list).post(create))
        .route("/:resource/:id", put(update).delete(delete_handler))
        .with_state(state)
}
