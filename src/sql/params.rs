//! Bind values for built queries.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A value bound to a `$n` placeholder. Identity keys are `INTEGER`; every resource field is text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Int(i32),
    Text(Option<String>),
}

/// Prepare `sql` with every param bound in placeholder order.
pub fn bind_all<'q>(sql: &'q str, params: &'q [BindValue]) -> Query<'q, Postgres, PgArguments> {
    let mut query = sqlx::query(sql);
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_deref()),
        };
    }
    query
}
