//! Router assembly: common routes, `/api` resources, static fallback, middleware.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::resource_routes;

use crate::config::Settings;
use crate::response::error_body;
use crate::state::AppState;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application: `/health` etc., `/api/:resource[/:id]`, and static files for everything else.
pub fn app(state: AppState, settings: &Settings) -> Router {
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", resource_routes(state));
    if settings.static_dir.is_dir() {
        router = router.fallback_service(static_files(&settings.static_dir));
    } else {
        tracing::warn!(dir = %settings.static_dir.display(), "static directory not found, serving API only");
    }
    // Body limit outside CORS: `Cors` needs a `Default` response body.
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(settings.body_limit))
            .layer(CorsLayer::permissive()),
    )
}

fn static_files(dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(middleware::from_fn(hide_dotfiles))
}

/// `.env`, `.git` and other dot-prefixed paths are never served.
async fn hide_dotfiles(request: Request, next: Next) -> Response {
    if request.uri().path().split('/').any(is_hidden_segment) {
        return (StatusCode::NOT_FOUND, error_body("not found")).into_response();
    }
    next.run(request).await
}

fn is_hidden_segment(segment: &str) -> bool {
    segment.starts_with('.') || segment.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("%2e"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_segments_are_hidden() {
        assert!(is_hidden_segment(".env"));
        assert!(is_hidden_segment(".."));
        assert!(is_hidden_segment("%2Eenv"));
        assert!(!is_hidden_segment("index.html"));
        assert!(!is_hidden_segment(""));
    }
}
