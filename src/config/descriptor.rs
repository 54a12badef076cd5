//! Resource descriptor: static storage shape of one resource kind.
//! Every table carries `id`, the descriptor's fields, then `created_at` and `updated_at`.

pub const ID_COLUMN: &str = "id";
pub const CREATED_AT_COLUMN: &str = "created_at";
pub const UPDATED_AT_COLUMN: &str = "updated_at";

/// Column storage type. Every resource field is character data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Varchar(u32),
    Text,
}

impl ColumnType {
    pub fn sql_type(&self) -> String {
        match self {
            ColumnType::Varchar(n) => format!("VARCHAR({})", n),
            ColumnType::Text => "TEXT".into(),
        }
    }

    pub fn max_length(&self) -> Option<u32> {
        match self {
            ColumnType::Varchar(n) => Some(*n),
            ColumnType::Text => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// snake_case column name; the JSON key is its camelCase form.
    pub column: &'static str,
    pub column_type: ColumnType,
    pub required: bool,
    /// Closed set of accepted values, if any.
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const fn required(column: &'static str, column_type: ColumnType) -> Self {
        FieldSpec {
            column,
            column_type,
            required: true,
            allowed: None,
        }
    }

    pub const fn optional(column: &'static str, column_type: ColumnType) -> Self {
        FieldSpec {
            column,
            column_type,
            required: false,
            allowed: None,
        }
    }

    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        FieldSpec {
            allowed: Some(allowed),
            ..self
        }
    }

    /// Key used for this field in request and response bodies.
    pub fn json_name(&self) -> String {
        json_key(self.column)
    }
}

/// Body key for a column: `image_url` -> `imageUrl`, `created_at` -> `createdAt`.
pub fn json_key(column: &str) -> String {
    let mut parts = column.split('_');
    let mut key = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
    }
    key
}

#[derive(Debug)]
pub struct ResourceDescriptor {
    /// URL segment under `/api`.
    pub path_segment: &'static str,
    pub table: &'static str,
    /// Labels used in error messages ("Failed to create gallery item", "Failed to fetch gallery").
    pub singular: &'static str,
    pub plural: &'static str,
    pub fields: &'static [FieldSpec],
    /// Column for `list` ordering; ties fall back to `id`.
    pub order_by: &'static str,
}

impl ResourceDescriptor {
    pub fn field_by_column(&self, column: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.column == column)
    }

    /// All stored columns in table order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(ID_COLUMN)
            .chain(self.fields.iter().map(|f| f.column))
            .chain([CREATED_AT_COLUMN, UPDATED_AT_COLUMN])
    }
}
