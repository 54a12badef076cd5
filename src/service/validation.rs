//! Request validation from descriptor rules.

use crate::config::{FieldSpec, ResourceDescriptor};
use crate::error::AppError;
use crate::sql::Assignment;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full record for insert. All required fields must be present and non-null.
    /// Returns the column assignments in descriptor order; unknown keys are dropped.
    pub fn validate(
        resource: &'static ResourceDescriptor,
        body: &Map<String, Value>,
    ) -> Result<Vec<Assignment>, AppError> {
        let by_column = keyed_by_column(resource, body)?;
        let mut out = Vec::with_capacity(resource.fields.len());
        for field in resource.fields {
            match by_column.get(field.column) {
                Some(v) => out.push(Assignment {
                    field,
                    value: validate_field(field, v)?,
                }),
                None if field.required => {
                    return Err(AppError::Validation(format!("{} is required", field.json_name())));
                }
                None => {}
            }
        }
        Ok(out)
    }

    /// Validate only the fields present in body (for update). Required fields may be omitted but not nulled.
    pub fn validate_partial(
        resource: &'static ResourceDescriptor,
        body: &Map<String, Value>,
    ) -> Result<Vec<Assignment>, AppError> {
        let by_column = keyed_by_column(resource, body)?;
        let mut out = Vec::new();
        for field in resource.fields {
            if let Some(v) = by_column.get(field.column) {
                out.push(Assignment {
                    field,
                    value: validate_field(field, v)?,
                });
            }
        }
        Ok(out)
    }
}

/// Body keys are the camelCase name ("imageUrl") or the exact column ("image_url"); anything
/// else is ignored. Naming one field twice is rejected.
fn keyed_by_column<'a>(
    resource: &'static ResourceDescriptor,
    body: &'a Map<String, Value>,
) -> Result<HashMap<&'static str, &'a Value>, AppError> {
    let mut out = HashMap::new();
    for (key, value) in body {
        let Some(field) = resource
            .fields
            .iter()
            .find(|f| f.column == key.as_str() || f.json_name() == key.as_str())
        else {
            continue;
        };
        if out.insert(field.column, value).is_some() {
            return Err(AppError::Validation(format!(
                "{} given more than once",
                field.json_name()
            )));
        }
    }
    Ok(out)
}

fn validate_field(field: &FieldSpec, v: &Value) -> Result<Option<String>, AppError> {
    let name = field.json_name();
    let s = match v {
        Value::Null if field.required => {
            return Err(AppError::Validation(format!("{} is required", name)));
        }
        Value::Null => return Ok(None),
        Value::String(s) => s,
        _ => return Err(AppError::Validation(format!("{} must be a string", name))),
    };
    if let Some(max) = field.column_type.max_length() {
        if s.chars().count() > max as usize {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                name, max
            )));
        }
    }
    if let Some(allowed) = field.allowed {
        if !allowed.iter().any(|a| *a == s.as_str()) {
            return Err(AppError::Validation(format!(
                "{} must be one of: {}",
                name,
                allowed.join(", ")
            )));
        }
    }
    Ok(Some(s.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EVENTS, MILESTONES, NEWS, RELEASES};
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn full_record_in_descriptor_order() {
        let body = obj(json!({"url": "http://a", "title": "X", "type": "image"}));
        let out = RequestValidator::validate(&NEWS, &body).unwrap();
        let cols: Vec<_> = out.iter().map(|a| a.field.column).collect();
        assert_eq!(cols, ["title", "type", "url"]);
        assert_eq!(out[0].value.as_deref(), Some("X"));
    }

    #[test]
    fn missing_required_field_is_named_in_camel_case() {
        let body = obj(json!({"title": "RITUALS EP", "date": "September 2025"}));
        let err = RequestValidator::validate(&RELEASES, &body).unwrap_err();
        assert_eq!(message(err), "imageUrl is required");
    }

    #[test]
    fn camel_case_keys_map_to_columns() {
        let body = obj(json!({"title": "T", "date": "2025-08-15", "location": "Berlin", "ticketUrl": "#"}));
        let out = RequestValidator::validate(&EVENTS, &body).unwrap();
        let ticket = out.iter().find(|a| a.field.column == "ticket_url").unwrap();
        assert_eq!(ticket.value.as_deref(), Some("#"));
    }

    #[test]
    fn null_required_field_is_rejected() {
        let body = obj(json!({"year": null, "text": "t"}));
        assert_eq!(message(RequestValidator::validate(&MILESTONES, &body).unwrap_err()), "year is required");
    }

    #[test]
    fn null_optional_field_binds_null() {
        let body = obj(json!({"title": "X", "type": "video", "url": "u", "description": null}));
        let out = RequestValidator::validate(&NEWS, &body).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[3].value, None);
    }

    #[test]
    fn non_string_values_are_rejected() {
        let body = obj(json!({"year": 2021, "text": "t"}));
        assert_eq!(message(RequestValidator::validate(&MILESTONES, &body).unwrap_err()), "year must be a string");
    }

    #[test]
    fn media_type_must_be_image_or_video() {
        let body = obj(json!({"title": "X", "type": "audio", "url": "u"}));
        assert_eq!(
            message(RequestValidator::validate(&NEWS, &body).unwrap_err()),
            "type must be one of: image, video"
        );
    }

    #[test]
    fn varchar_length_is_enforced() {
        let body = obj(json!({"year": "12345678901", "text": "t"}));
        assert_eq!(
            message(RequestValidator::validate(&MILESTONES, &body).unwrap_err()),
            "year must be at most 10 characters"
        );
    }

    #[test]
    fn identity_and_timestamps_are_ignored() {
        let body = obj(json!({"id": 5, "createdAt": "x", "updatedAt": "y", "year": "2021", "text": "t"}));
        let out = RequestValidator::validate(&MILESTONES, &body).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn partial_keeps_only_supplied_fields() {
        let body = obj(json!({"title": "Y", "bogus": 1}));
        let out = RequestValidator::validate_partial(&EVENTS, &body).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].field.column, "title");
    }

    #[test]
    fn partial_allows_empty_body() {
        assert!(RequestValidator::validate_partial(&EVENTS, &Map::new()).unwrap().is_empty());
    }

    #[test]
    fn partial_rejects_nulling_required_field() {
        let body = obj(json!({"location": null}));
        assert_eq!(
            message(RequestValidator::validate_partial(&EVENTS, &body).unwrap_err()),
            "location is required"
        );
    }

    #[test]
    fn camel_and_snake_key_for_one_field_is_rejected() {
        let body = obj(json!({"title": "T", "date": "2025", "imageUrl": "camel", "image_url": "snake"}));
        assert_eq!(
            message(RequestValidator::validate(&RELEASES, &body).unwrap_err()),
            "imageUrl given more than once"
        );
        let body = obj(json!({"ticketUrl": "a", "ticket_url": "b"}));
        assert!(RequestValidator::validate_partial(&EVENTS, &body).is_err());
    }

    #[test]
    fn snake_case_column_key_is_accepted() {
        let body = obj(json!({"title": "T", "date": "2025", "image_url": "http://i"}));
        let out = RequestValidator::validate(&RELEASES, &body).unwrap();
        assert_eq!(out[2].value.as_deref(), Some("http://i"));
    }

    #[test]
    fn keys_in_other_casings_are_ignored() {
        let body = obj(json!({"Title": "T", "date": "2025", "imageUrl": "i"}));
        assert_eq!(message(RequestValidator::validate(&RELEASES, &body).unwrap_err()), "title is required");
    }

    #[test]
    fn partial_can_clear_optional_field() {
        let body = obj(json!({"ticketUrl": null}));
        let out = RequestValidator::validate_partial(&EVENTS, &body).unwrap();
        assert_eq!(out[0].value, None);
    }
}
