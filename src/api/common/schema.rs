//
//  backlog-client
//  api/common/schema.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Declarative parameter schemas.
//!
//! Every endpoint declares the parameters it accepts as a static slice of
//! [`Field`]s. [`build`] takes that slice plus the caller's options (any
//! `Serialize` value that serializes to a JSON object, usually a
//! `#[serde(rename_all = "camelCase")]` struct or a `json!` literal) and
//! produces the outgoing [`Params`]:
//!
//! 1. Every supplied value is checked against its [`Rule`]
//! 2. Absent and `null` values are skipped (or rejected if `required`)
//! 3. Lists are emitted as repeated `name[]` keys in caller order
//! 4. Keys the schema does not declare are rejected
//!
//! Any failure is an [`ApiError::Validation`] and happens before a request
//! is built.
//!
//! # Example
//!
//! ```rust
//! use backlog_client::api::common::schema::{self, Field};
//! use serde_json::json;
//!
//! const LIST: &[Field] = &[
//!     Field::new("statusId").array(),
//!     schema::ORDER,
//!     schema::count(100),
//! ];
//!
//! let params = schema::build(LIST, &json!({"statusId": [1, 2], "count": 50})).unwrap();
//! assert_eq!(params.len(), 3);
//!
//! assert!(schema::build(LIST, &json!({"count": 0})).is_err());
//! assert!(schema::build(LIST, &json!({"order": "up"})).is_err());
//! ```

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{ApiError, ParamValue, Params, Result};

static PROJECT_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9_]+$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Value-domain constraint applied to every scalar of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Anything goes.
    Any,
    /// Integer within `min..=max`.
    Range { min: i64, max: i64 },
    /// One of a closed set of strings.
    OneOf(&'static [&'static str]),
    /// Project key: `^[A-Z0-9_]+$`.
    ProjectKey,
    /// Calendar date as `YYYY-MM-DD`.
    Date,
}

/// One declared parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Name of the value in the serialized options.
    pub key: &'static str,
    /// Name sent on the wire (`[]` is appended for arrays).
    pub wire: &'static str,
    pub rule: Rule,
    pub required: bool,
    pub array: bool,
}

impl Field {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            wire: key,
            rule: Rule::Any,
            required: false,
            array: false,
        }
    }

    /// Sends the value under a different name.
    pub const fn wire(self, wire: &'static str) -> Self {
        Self { wire, ..self }
    }

    pub const fn rule(self, rule: Rule) -> Self {
        Self { rule, ..self }
    }

    pub const fn range(self, min: i64, max: i64) -> Self {
        self.rule(Rule::Range { min, max })
    }

    pub const fn one_of(self, values: &'static [&'static str]) -> Self {
        self.rule(Rule::OneOf(values))
    }

    pub const fn date(self) -> Self {
        self.rule(Rule::Date)
    }

    pub const fn project_key(self) -> Self {
        self.rule(Rule::ProjectKey)
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn array(self) -> Self {
        Self { array: true, ..self }
    }
}

pub const ORDER_VALUES: &[&str] = &["asc", "desc"];
pub const TEXT_FORMATTING_RULES: &[&str] = &["backlog", "markdown"];

pub const ORDER: Field = Field::new("order").one_of(ORDER_VALUES);
pub const OFFSET: Field = Field::new("offset");
pub const MIN_ID: Field = Field::new("minId");
pub const MAX_ID: Field = Field::new("maxId");
pub const COUNT: Field = count(100);

/// `count` bounded to `1..=max`.
pub const fn count(max: i64) -> Field {
    Field::new("count").range(1, max)
}

/// Builds parameters from `options` according to `fields`.
///
/// # Errors
///
/// - [`ApiError::Validation`] for unknown keys, missing required values,
///   lists passed to scalar fields and rule violations
/// - [`ApiError::Decode`] if `options` cannot be serialized
pub fn build<T: Serialize + ?Sized>(fields: &[Field], options: &T) -> Result<Params> {
    let map = match serde_json::to_value(options)? {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(ApiError::validation(format!(
                "parameters must be a map, got `{}`",
                other
            )))
        }
    };

    if let Some(unknown) = map.keys().find(|k| !fields.iter().any(|f| f.key == k.as_str())) {
        return Err(ApiError::validation(format!("unknown parameter `{}`", unknown)));
    }

    let mut params = Params::new();

    for field in fields {
        match map.get(field.key) {
            None | Some(Value::Null) => {
                if field.required {
                    return Err(ApiError::validation(format!("`{}` is required", field.key)));
                }
            }
            Some(Value::Array(items)) => {
                if !field.array {
                    return Err(ApiError::validation(format!(
                        "`{}` takes a single value, not a list",
                        field.key
                    )));
                }
                if items.is_empty() && field.required {
                    return Err(ApiError::validation(format!(
                        "`{}` requires at least one value",
                        field.key
                    )));
                }
                let wire = format!("{}[]", field.wire);
                for item in items {
                    params.append(wire.clone(), scalar(field, item)?);
                }
            }
            Some(value) => {
                let value = scalar(field, value)?;
                if field.array {
                    params.append(format!("{}[]", field.wire), value);
                } else {
                    params.insert(field.wire, value);
                }
            }
        }
    }

    Ok(params)
}

fn scalar(field: &Field, value: &Value) -> Result<ParamValue> {
    let param = match value {
        Value::Bool(b) => ParamValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ParamValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                ParamValue::from(u)
            } else {
                ParamValue::Float(n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) => ParamValue::Text(s.clone()),
        _ => {
            return Err(ApiError::validation(format!(
                "`{}` must be a string, number or boolean",
                field.key
            )))
        }
    };

    check(field, &param)?;
    Ok(param)
}

fn check(field: &Field, value: &ParamValue) -> Result<()> {
    match (field.rule, value) {
        (Rule::Any, _) => Ok(()),
        (Rule::Range { min, max }, ParamValue::Integer(n)) => validate_range(field.key, *n, min, max),
        (Rule::Range { min, max }, _) => Err(ApiError::validation(format!(
            "`{}` must be an integer between {} and {}",
            field.key, min, max
        ))),
        (Rule::OneOf(allowed), ParamValue::Text(s)) if allowed.contains(&s.as_str()) => Ok(()),
        (Rule::OneOf(allowed), other) => Err(ApiError::validation(format!(
            "`{}` must be one of {}, got `{}`",
            field.key,
            allowed.join(", "),
            other
        ))),
        (Rule::ProjectKey, ParamValue::Text(s)) => validate_project_key(s),
        (Rule::Date, ParamValue::Text(s)) => validate_date(s),
        (Rule::ProjectKey | Rule::Date, other) => Err(ApiError::validation(format!(
            "`{}` must be a string, got `{}`",
            field.key, other
        ))),
    }
}

/// Fails unless `min <= value <= max`.
pub fn validate_range(name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(ApiError::validation(format!(
            "`{}` must be between {} and {}, got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

/// Fails unless `key` matches `^[A-Z0-9_]+$`.
pub fn validate_project_key(key: &str) -> Result<()> {
    if !PROJECT_KEY_RE.is_match(key) {
        return Err(ApiError::validation(format!(
            "project key `{}` may only contain A-Z, 0-9 and _",
            key
        )));
    }
    Ok(())
}

/// Fails unless `date` is a zero-padded `YYYY-MM-DD` calendar date.
pub fn validate_date(date: &str) -> Result<()> {
    if !DATE_RE.is_match(date) || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(ApiError::validation(format!(
            "date `{}` must be formatted as YYYY-MM-DD",
            date
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ISSUES: &[Field] = &[
        Field::new("projectId").array(),
        Field::new("keyword"),
        Field::new("attachment"),
        Field::new("createdSince").date(),
        Field::new("parentChild").range(0, 4),
        ORDER,
        OFFSET,
        COUNT,
    ];

    #[test]
    fn test_omitted_params_are_absent() {
        let params = build(ISSUES, &json!({"keyword": "crash", "order": null})).unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["keyword"]);

        let empty = build(ISSUES, &()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_arrays_become_repeated_bracket_keys() {
        let params = build(ISSUES, &json!({"projectId": [3, 1, 2]})).unwrap();
        assert_eq!(
            params.to_pairs(),
            vec![
                ("projectId[]".to_string(), "3".to_string()),
                ("projectId[]".to_string(), "1".to_string()),
                ("projectId[]".to_string(), "2".to_string()),
            ]
        );

        let empty = build(ISSUES, &json!({"projectId": []})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_bool_values_encode_lowercase() {
        let params = build(ISSUES, &json!({"attachment": true})).unwrap();
        assert_eq!(params.to_pairs(), vec![("attachment".to_string(), "true".to_string())]);
    }

    #[test]
    fn test_count_bounds() {
        assert!(build(ISSUES, &json!({"count": 1})).is_ok());
        assert!(build(ISSUES, &json!({"count": 100})).is_ok());
        assert!(matches!(build(ISSUES, &json!({"count": 0})), Err(ApiError::Validation(_))));
        assert!(matches!(build(ISSUES, &json!({"count": 101})), Err(ApiError::Validation(_))));
        assert!(build(ISSUES, &json!({"count": "20"})).is_err());
    }

    #[test]
    fn test_order_values() {
        assert!(build(ISSUES, &json!({"order": "asc"})).is_ok());
        assert!(build(ISSUES, &json!({"order": "desc"})).is_ok());
        assert!(matches!(build(ISSUES, &json!({"order": "up"})), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_dates() {
        assert!(build(ISSUES, &json!({"createdSince": "2019-01-01"})).is_ok());
        assert!(build(ISSUES, &json!({"createdSince": "2019-1-1"})).is_err());
        assert!(build(ISSUES, &json!({"createdSince": "2019-02-30"})).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = build(ISSUES, &json!({"foo_bar": 1})).unwrap_err();
        assert!(err.to_string().contains("foo_bar"));
    }

    #[test]
    fn test_required_and_list_misuse() {
        const ADD: &[Field] = &[
            Field::new("name").required(),
            Field::new("members").array().required(),
        ];
        assert!(build(ADD, &json!({"members": [1]})).is_err());
        assert!(build(ADD, &json!({"name": "dev", "members": []})).is_err());
        assert!(build(ADD, &json!({"name": ["a"], "members": [1]})).is_err());
        assert!(build(ADD, &json!({"name": "dev", "members": [1]})).is_ok());
    }

    #[test]
    fn test_wire_rename() {
        const WATCH: &[Field] = &[Field::new("resourceAlreadyRead").wire("alreadyRead")];
        let params = build(WATCH, &json!({"resourceAlreadyRead": false})).unwrap();
        assert_eq!(params.get("alreadyRead"), Some(&ParamValue::Bool(false)));
    }

    #[test]
    fn test_project_key() {
        assert!(validate_project_key("MY_PROJ1").is_ok());
        assert!(validate_project_key("my-proj").is_err());
        assert!(validate_project_key("").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("activityTypeId", 17, 1, 17).is_ok());
        assert!(validate_range("activityTypeId", 18, 1, 17).is_err());
    }
}
