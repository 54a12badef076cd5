//! Generic CRUD execution against PostgreSQL, parameterized by a resource descriptor.

use crate::config::{json_key, ResourceDescriptor, CREATED_AT_COLUMN, ID_COLUMN, UPDATED_AT_COLUMN};
use crate::error::AppError;
use crate::service::RequestValidator;
use crate::sql::{bind_all, delete, insert, select_list, update, QueryBuf};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row, TypeInfo, ValueRef};

pub struct CrudService;

impl CrudService {
    /// All rows ordered by the descriptor's ordering key. Empty when the table is.
    pub async fn list(pool: &PgPool, resource: &'static ResourceDescriptor) -> Result<Vec<Value>, AppError> {
        let q = select_list(resource);
        tracing::debug!(sql = %q.sql, "query");
        let rows = bind_all(&q.sql, &q.params).fetch_all(pool).await?;
        rows.iter().map(|r| row_to_json(resource, r)).collect()
    }

    /// Validate and insert one row. The store assigns id, created_at and updated_at. Returns the created row.
    pub async fn create(
        pool: &PgPool,
        resource: &'static ResourceDescriptor,
        body: &Map<String, Value>,
    ) -> Result<Value, AppError> {
        let values = RequestValidator::validate(resource, body)?;
        let q = insert(resource, &values);
        Self::execute_returning_one(pool, resource, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Replace the supplied fields of one row and bump updated_at. Returns None when no row has that id.
    pub async fn update(
        pool: &PgPool,
        resource: &'static ResourceDescriptor,
        id: i32,
        body: &Map<String, Value>,
    ) -> Result<Option<Value>, AppError> {
        let values = RequestValidator::validate_partial(resource, body)?;
        let q = update(resource, id, &values);
        Self::execute_returning_one(pool, resource, &q).await
    }

    /// Delete one row by id. Returns the deleted row or None; deleting a missing id is not an error.
    pub async fn delete(
        pool: &PgPool,
        resource: &'static ResourceDescriptor,
        id: i32,
    ) -> Result<Option<Value>, AppError> {
        let q = delete(resource, id);
        Self::execute_returning_one(pool, resource, &q).await
    }

    async fn execute_returning_one(
        pool: &PgPool,
        resource: &ResourceDescriptor,
        q: &QueryBuf,
    ) -> Result<Option<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(&q.sql, &q.params).fetch_optional(pool).await?;
        row.map(|r| row_to_json(resource, &r)).transpose()
    }
}

/// Decode a row by the descriptor's column types; keys become camelCase.
fn row_to_json(resource: &ResourceDescriptor, row: &PgRow) -> Result<Value, AppError> {
    let mut map = Map::new();
    for col in resource.columns() {
        let v = match col {
            ID_COLUMN => Value::Number(row.try_get::<i32, _>(col)?.into()),
            CREATED_AT_COLUMN | UPDATED_AT_COLUMN => timestamp(row, col)?
                .map(|ts| Value::String(ts.to_rfc3339_opts(SecondsFormat::Micros, true)))
                .unwrap_or(Value::Null),
            _ => row
                .try_get::<Option<String>, _>(col)?
                .map(Value::String)
                .unwrap_or(Value::Null),
        };
        map.insert(json_key(col), v);
    }
    Ok(Value::Object(map))
}

/// Tables created here use `TIMESTAMPTZ NOT NULL`; older tables hold nullable `TIMESTAMP`
/// values, read as UTC.
fn timestamp(row: &PgRow, col: &str) -> Result<Option<DateTime<Utc>>, AppError> {
    let without_zone = row.try_get_raw(col)?.type_info().name() == "TIMESTAMP";
    if without_zone {
        Ok(row.try_get::<Option<NaiveDateTime>, _>(col)?.map(|ts| ts.and_utc()))
    } else {
        Ok(row.try_get::<Option<DateTime<Utc>>, _>(col)?)
    }
}
