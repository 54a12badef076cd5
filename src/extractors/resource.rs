//! Resolve the resource kind and record id from `/api/:resource[/:id]`.

use crate::config::ResourceDescriptor;
use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;

/// Path parameter naming the resource kind.
pub const RESOURCE_PARAM: &str = "resource";
/// Path parameter naming the record id.
pub const ID_PARAM: &str = "id";

/// Descriptor for the `:resource` segment. Unknown segments reject with 404.
#[derive(Clone, Copy, Debug)]
pub struct Resource(pub &'static ResourceDescriptor);

/// Integer `:id` segment. Non-numeric or out-of-range ids reject with 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordId(pub i32);

async fn path_param(parts: &mut Parts, state: &AppState, name: &str) -> Result<String, AppError> {
    let Path(mut params): Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    params
        .remove(name)
        .ok_or_else(|| AppError::BadRequest(format!("missing path parameter '{}'", name)))
}

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", raw)))
}

#[async_trait]
impl FromRequestParts<AppState> for Resource {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let segment = path_param(parts, state, RESOURCE_PARAM).await?;
        state
            .resources
            .get(&segment)
            .map(Resource)
            .ok_or(AppError::UnknownResource(segment))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw = path_param(parts, state, ID_PARAM).await?;
        parse_id(&raw).map(RecordId)
    }
}
