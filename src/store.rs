//! Record store bootstrap: database creation, pool lifecycle, one table per resource kind.

use crate::config::{ResourceRegistry, Settings};
use crate::error::{AppError, ConfigError};
use crate::sql::create_table;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Open the pool. Optionally creates the target database first (`CREATE_DATABASE=true`).
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    if settings.create_database {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

/// Create every resource table that does not exist yet. Existing tables are left untouched.
pub async fn ensure_resource_tables(pool: &PgPool, resources: &ResourceRegistry) -> Result<(), AppError> {
    for resource in resources.iter() {
        let ddl = create_table(resource);
        tracing::debug!(sql = %ddl, "ddl");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!("resource tables ready");
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url).map_err(|e| malformed_url(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn malformed_url(reason: impl Into<String>) -> AppError {
    AppError::Config(ConfigError::Malformed {
        key: "DATABASE_URL",
        reason: reason.into(),
    })
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| malformed_url("no database path"))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
