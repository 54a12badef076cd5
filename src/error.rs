//! Typed errors and HTTP mapping.

use crate::config::ResourceDescriptor;
use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    /// Value is not echoed; connection strings carry credentials.
    #[error("malformed {key}: {reason}")]
    Malformed { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownResource(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attach the failing action and resource so the response carries the per-action message.
    pub fn during(self, action: Action, resource: &'static ResourceDescriptor) -> ResourceError {
        ResourceError::new(action, resource, self)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return (status, error_body("Internal server error")).into_response();
        }
        (status, error_body(self.to_string())).into_response()
    }
}

/// Resource operation attempted by a request; names the 500 message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn verb(self) -> &'static str {
        match self {
            Action::Fetch => "fetch",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    /// e.g. "Failed to fetch gallery", "Failed to create gallery item".
    pub fn failure_message(self, resource: &ResourceDescriptor) -> String {
        let label = match self {
            Action::Fetch => resource.plural,
            _ => resource.singular,
        };
        format!("Failed to {} {}", self.verb(), label)
    }
}

/// Accessor failure scoped to one action on one resource.
/// Client errors keep their own message; everything else collapses to the static per-action message.
#[derive(Error, Debug)]
#[error("{message}: {source}")]
pub struct ResourceError {
    pub action: Action,
    pub resource: &'static ResourceDescriptor,
    pub message: String,
    #[source]
    pub source: AppError,
}

impl ResourceError {
    pub fn new(action: Action, resource: &'static ResourceDescriptor, source: AppError) -> Self {
        ResourceError {
            action,
            resource,
            message: action.failure_message(resource),
            source,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.source.status();
        if status.is_server_error() {
            tracing::error!(
                resource = self.resource.path_segment,
                action = self.action.verb(),
                error = %self.source,
                "{}",
                self.message
            );
            return (status, error_body(self.message)).into_response();
        }
        (status, error_body(self.source.to_string())).into_response()
    }
}
