//! Response body helpers.

use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct SuccessBody {
    pub success: bool,
}

/// `{"success": true}`, returned by deletes whether or not a row existed.
pub fn success_ack() -> Json<SuccessBody> {
    Json(SuccessBody { success: true })
}

pub fn error_body(message: impl Into<String>) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: message.into(),
    })
}
