//! Liveness, readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

const MISSING_TABLES_SQL: &str = "SELECT t.name FROM UNNEST($1::text[]) AS t(name) \
     WHERE NOT EXISTS (SELECT 1 FROM information_schema.tables \
     WHERE table_schema = current_schema() AND table_name::text = t.name)";

/// Readiness: the store answers and every resource table exists.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Readiness {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<String>,
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let tables: Vec<&str> = state.resources.iter().map(|r| r.table).collect();
    let missing = sqlx::query_scalar::<_, String>(MISSING_TABLES_SQL)
        .bind(tables.as_slice())
        .fetch_all(&state.pool)
        .await;
    let (status, body) = match missing {
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Readiness { status: "degraded", database: "unavailable", missing_tables: Vec::new() },
            )
        }
        Ok(missing) if !missing.is_empty() => {
            tracing::warn!(tables = ?missing, "resource tables missing");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Readiness { status: "degraded", database: "ok", missing_tables: missing },
            )
        }
        Ok(_) => (
            StatusCode::OK,
            Readiness { status: "ok", database: "ok", missing_tables: Vec::new() },
        ),
    };
    (status, Json(body))
}

/// GET /health (process up), GET /ready (store + tables), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/ready", get(ready))
        .route(
            "/version",
            get(|| async {
                Json::<Value>(json!({ "name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") }))
            }),
        )
        .with_state(state)
}
