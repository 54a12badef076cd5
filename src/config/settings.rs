//! Process settings read from the environment (after `dotenvy` has loaded `.env`).

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings for the server and the seeder.
///
/// | Env var                   | Default   |
/// |---------------------------|-----------|
/// | `DATABASE_URL`            | required  |
/// | `HOST`                    | `0.0.0.0` |
/// | `PORT`                    | `5000`    |
/// | `DB_MAX_CONNECTIONS`      | `5`       |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`      |
/// | `STATIC_DIR`              | `public`  |
/// | `BODY_LIMIT_BYTES`        | `1048576` |
/// | `CREATE_DATABASE`         | `false`   |
#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub static_dir: PathBuf,
    pub body_limit: usize,
    /// Create the target database before connecting when it does not exist.
    pub create_database: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        Ok(Settings {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_var(&lookup, "PORT", 5000)?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30)?),
            static_dir: lookup("STATIC_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("public")),
            body_limit: parse_var(&lookup, "BODY_LIMIT_BYTES", 1024 * 1024)?,
            create_database: parse_flag(&lookup, "CREATE_DATABASE")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::Invalid {
            key,
            value: v.to_string(),
        }),
    }
}
