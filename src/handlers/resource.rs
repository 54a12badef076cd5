//! Resource CRUD handlers: list, create, update, delete.

use crate::error::{Action, AppError, ResourceError};
use crate::extractors::{RecordId, Resource};
use crate::response::{success_ack, SuccessBody};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{Map, Value};

fn body_to_map(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    let Json(value) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Resource(resource): Resource,
) -> Result<Json<Vec<Value>>, ResourceError> {
    let rows = CrudService::list(&state.pool, resource)
        .await
        .map_err(|e| e.during(Action::Fetch, resource))?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Resource(resource): Resource,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ResourceError> {
    let body = body_to_map(body).map_err(|e| e.during(Action::Create, resource))?;
    let row = CrudService::create(&state.pool, resource, &body)
        .await
        .map_err(|e| e.during(Action::Create, resource))?;
    tracing::info!(resource = resource.path_segment, id = ?row.get("id"), "created");
    Ok(Json(row))
}

/// Responds 200 with `null` when no row has the id.
pub async fn update(
    State(state): State<AppState>,
    Resource(resource): Resource,
    RecordId(id): RecordId,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Option<Value>>, ResourceError> {
    let body = body_to_map(body).map_err(|e| e.during(Action::Update, resource))?;
    let row = CrudService::update(&state.pool, resource, id, &body)
        .await
        .map_err(|e| e.during(Action::Update, resource))?;
    if row.is_none() {
        tracing::debug!(resource = resource.path_segment, id, "update matched no row");
    }
    Ok(Json(row))
}

/// Responds `{"success": true}` whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    Resource(resource): Resource,
    RecordId(id): RecordId,
) -> Result<Json<SuccessBody>, ResourceError> {
    let removed = CrudService::delete(&state.pool, resource, id)
        .await
        .map_err(|e| e.during(Action::Delete, resource))?;
    tracing::debug!(resource = resource.path_segment, id, removed = removed.is_some(), "delete");
    Ok(success_ack())
}
