//! Builds parameterized CREATE TABLE, SELECT, INSERT, UPDATE, DELETE from a resource descriptor.

use crate::config::{FieldSpec, ResourceDescriptor, CREATED_AT_COLUMN, ID_COLUMN, UPDATED_AT_COLUMN};
use crate::sql::params::BindValue;

/// Quote identifier for PostgreSQL (safe: only from descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// One validated column value headed for INSERT or UPDATE.
#[derive(Clone, Debug)]
pub struct Assignment {
    pub field: &'static FieldSpec,
    pub value: Option<String>,
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list(resource: &ResourceDescriptor) -> String {
    resource.columns().map(quoted).collect::<Vec<_>>().join(", ")
}

/// CREATE TABLE IF NOT EXISTS with serial identity and store-managed timestamps.
pub fn create_table(resource: &ResourceDescriptor) -> String {
    let mut defs = vec![format!("{} SERIAL PRIMARY KEY", quoted(ID_COLUMN))];
    for f in resource.fields {
        let null = if f.required { " NOT NULL" } else { "" };
        defs.push(format!("{} {}{}", quoted(f.column), f.column_type.sql_type(), null));
    }
    defs.push(format!("{} TIMESTAMPTZ NOT NULL DEFAULT NOW()", quoted(CREATED_AT_COLUMN)));
    defs.push(format!("{} TIMESTAMPTZ NOT NULL DEFAULT NOW()", quoted(UPDATED_AT_COLUMN)));
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(resource.table),
        defs.join(", ")
    )
}

/// SELECT every row ORDER BY the descriptor's ordering key, then id.
pub fn select_list(resource: &ResourceDescriptor) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut order = vec![quoted(resource.order_by)];
    if resource.order_by != ID_COLUMN {
        order.push(quoted(ID_COLUMN));
    }
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(resource),
        quoted(resource.table),
        order.join(", ")
    );
    q
}

/// INSERT the given columns; id and timestamps come from column defaults.
pub fn insert(resource: &ResourceDescriptor, values: &[Assignment]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = quoted(resource.table);
    let returning = select_column_list(resource);
    if values.is_empty() {
        q.sql = format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", table, returning);
        return q;
    }
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for a in values {
        let n = q.push_param(BindValue::Text(a.value.clone()));
        cols.push(quoted(a.field.column));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table,
        cols.join(", "),
        placeholders.join(", "),
        returning
    );
    q
}

/// UPDATE by id: SET only the supplied columns; updated_at is always reset to NOW().
pub fn update(resource: &ResourceDescriptor, id: i32, values: &[Assignment]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(values.len() + 1);
    for a in values {
        let n = q.push_param(BindValue::Text(a.value.clone()));
        sets.push(format!("{} = ${}", quoted(a.field.column), n));
    }
    sets.push(format!("{} = NOW()", quoted(UPDATED_AT_COLUMN)));
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(resource.table),
        sets.join(", "),
        quoted(ID_COLUMN),
        id_param,
        select_column_list(resource)
    );
    q
}

/// DELETE by id, returning the removed row when there was one.
pub fn delete(resource: &ResourceDescriptor, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(BindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = $1 RETURNING {}",
        quoted(resource.table),
        quoted(ID_COLUMN),
        select_column_list(resource)
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EVENTS, INDUSTRIAL_PROJECTS, MILESTONES, NEWS};

    fn assign(resource: &'static ResourceDescriptor, column: &str, value: Option<&str>) -> Assignment {
        Assignment {
            field: resource.field_by_column(column).unwrap(),
            value: value.map(String::from),
        }
    }

    #[test]
    fn create_table_marks_required_columns_not_null() {
        let ddl = create_table(&EVENTS);
        assert_eq!(
            ddl,
            "CREATE TABLE IF NOT EXISTS \"events\" (\"id\" SERIAL PRIMARY KEY, \"title\" VARCHAR(255) NOT NULL, \
             \"date\" VARCHAR(100) NOT NULL, \"location\" VARCHAR(255) NOT NULL, \"ticket_url\" TEXT, \
             \"created_at\" TIMESTAMPTZ NOT NULL DEFAULT NOW(), \"updated_at\" TIMESTAMPTZ NOT NULL DEFAULT NOW())"
        );
    }

    #[test]
    fn select_list_orders_by_descriptor_key_then_id() {
        let q = select_list(&MILESTONES);
        assert_eq!(
            q.sql,
            "SELECT \"id\", \"year\", \"text\", \"created_at\", \"updated_at\" FROM \"milestones\" ORDER BY \"year\", \"id\""
        );
        assert!(q.params.is_empty());

        let q = select_list(&INDUSTRIAL_PROJECTS);
        assert!(q.sql.contains("FROM \"industrial_projects\" ORDER BY \"created_at\", \"id\""));
    }

    #[test]
    fn insert_binds_only_supplied_columns() {
        let values = [
            assign(&NEWS, "title", Some("X")),
            assign(&NEWS, "type", Some("image")),
            assign(&NEWS, "url", Some("http://a")),
        ];
        let q = insert(&NEWS, &values);
        assert_eq!(
            q.sql,
            "INSERT INTO \"news\" (\"title\", \"type\", \"url\") VALUES ($1, $2, $3) \
             RETURNING \"id\", \"title\", \"type\", \"url\", \"description\", \"created_at\", \"updated_at\""
        );
        assert_eq!(
            q.params,
            vec![
                BindValue::Text(Some("X".into())),
                BindValue::Text(Some("image".into())),
                BindValue::Text(Some("http://a".into())),
            ]
        );
    }

    #[test]
    fn update_always_bumps_updated_at_and_binds_id_last() {
        let values = [assign(&EVENTS, "title", Some("Y")), assign(&EVENTS, "ticket_url", None)];
        let q = update(&EVENTS, 7, &values);
        assert!(q.sql.starts_with(
            "UPDATE \"events\" SET \"title\" = $1, \"ticket_url\" = $2, \"updated_at\" = NOW() WHERE \"id\" = $3 RETURNING "
        ));
        assert_eq!(q.params.last(), Some(&BindValue::Int(7)));
        assert_eq!(q.params[1], BindValue::Text(None));
    }

    #[test]
    fn empty_update_only_touches_updated_at() {
        let q = update(&NEWS, 3, &[]);
        assert!(q.sql.contains("SET \"updated_at\" = NOW() WHERE \"id\" = $1"));
        assert_eq!(q.params, vec![BindValue::Int(3)]);
    }

    #[test]
    fn delete_by_id() {
        let q = delete(&NEWS, 42);
        assert!(q.sql.starts_with("DELETE FROM \"news\" WHERE \"id\" = $1 RETURNING \"id\""));
        assert_eq!(q.params, vec![BindValue::Int(42)]);
    }

    #[test]
    fn quoted_escapes_embedded_quotes() {
        assert_eq!(quoted("a\"b"), "\"a\"\"b\"");
    }
}
