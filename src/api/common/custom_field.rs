//
//  backlog-client
//  api/common/custom_field.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Custom field parameters.
//!
//! Issues carry project-defined custom fields. Their values are sent as
//! `customField_<id>` (and `customField_<id>_other_value` for the free-text
//! "other" entry of list fields). Issue searches filter on them with
//! `customField_<id>`, `customField_<id>_min` / `_max` and
//! `customField_<id>[]`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::schema::validate_date;
use super::{ApiError, ParamValue, Params, Result};

static CUSTOM_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^customField_(\d+)(_other_value)?$").unwrap());

/// Wire name of a custom field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomFieldKey {
    /// `customField_<id>`
    Value(u64),
    /// `customField_<id>_other_value`
    OtherValue(u64),
}

impl CustomFieldKey {
    pub fn id(&self) -> u64 {
        match self {
            CustomFieldKey::Value(id) | CustomFieldKey::OtherValue(id) => *id,
        }
    }

    pub fn wire_name(&self) -> String {
        match self {
            CustomFieldKey::Value(id) => format!("customField_{}", id),
            CustomFieldKey::OtherValue(id) => format!("customField_{}_other_value", id),
        }
    }

    /// Parses `customField_<digits>` or `customField_<digits>_other_value`.
    pub fn parse(name: &str) -> Result<Self> {
        let caps = CUSTOM_FIELD_RE.captures(name).ok_or_else(|| {
            ApiError::validation(format!(
                "`{}` is not a custom field name (expected customField_<id> or customField_<id>_other_value)",
                name
            ))
        })?;

        let id = caps[1]
            .parse::<u64>()
            .map_err(|_| ApiError::validation(format!("custom field id in `{}` is too large", name)))?;

        Ok(if caps.get(2).is_some() {
            CustomFieldKey::OtherValue(id)
        } else {
            CustomFieldKey::Value(id)
        })
    }
}

impl fmt::Display for CustomFieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire_name())
    }
}

impl FromStr for CustomFieldKey {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Custom field values attached to an issue add or update.
///
/// # Example
///
/// ```rust
/// use backlog_client::api::common::{CustomFieldValues, Params};
///
/// let mut values = CustomFieldValues::new();
/// values.set(12, "high");
/// values.set_other(13, "something else");
/// values.insert_named("customField_14", 3).unwrap();
/// assert!(values.insert_named("foo_bar", 1).is_err());
///
/// let mut params = Params::new();
/// values.append_to(&mut params);
/// assert!(params.contains_key("customField_13_other_value"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFieldValues {
    entries: Vec<(CustomFieldKey, ParamValue)>,
}

impl CustomFieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `customField_<id>`.
    pub fn set(&mut self, id: u64, value: impl Into<ParamValue>) -> &mut Self {
        self.insert(CustomFieldKey::Value(id), value)
    }

    /// Sets `customField_<id>_other_value`.
    pub fn set_other(&mut self, id: u64, value: impl Into<ParamValue>) -> &mut Self {
        self.insert(CustomFieldKey::OtherValue(id), value)
    }

    pub fn insert(&mut self, key: CustomFieldKey, value: impl Into<ParamValue>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Inserts a value by its wire name.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] if `name` is not a custom field name.
    pub fn insert_named(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<&mut Self> {
        let key = CustomFieldKey::parse(name)?;
        Ok(self.insert(key, value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(CustomFieldKey, ParamValue)> {
        self.entries.iter()
    }

    pub fn append_to(&self, params: &mut Params) {
        for (key, value) in &self.entries {
            params.insert(key.wire_name(), value.clone());
        }
    }
}

/// Search filter on a custom field, used by issue list and count.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomFieldFilter {
    /// Text match: `customField_<id>=<value>`.
    Text { id: u64, value: String },
    /// Numeric bounds: `customField_<id>_min` / `_max`.
    NumberRange {
        id: u64,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Date bounds (`YYYY-MM-DD`): `customField_<id>_min` / `_max`.
    DateRange {
        id: u64,
        min: Option<String>,
        max: Option<String>,
    },
    /// List item ids: repeated `customField_<id>[]`.
    Items { id: u64, items: Vec<u64> },
}

impl CustomFieldFilter {
    pub fn append_to(&self, params: &mut Params) -> Result<()> {
        match self {
            CustomFieldFilter::Text { id, value } => {
                params.insert(format!("customField_{}", id), value.as_str());
            }
            CustomFieldFilter::NumberRange { id, min, max } => {
                if let Some(min) = min {
                    params.insert(format!("customField_{}_min", id), *min);
                }
                if let Some(max) = max {
                    params.insert(format!("customField_{}_max", id), *max);
                }
            }
            CustomFieldFilter::DateRange { id, min, max } => {
                if let Some(min) = min {
                    validate_date(min)?;
                    params.insert(format!("customField_{}_min", id), min.as_str());
                }
                if let Some(max) = max {
                    validate_date(max)?;
                    params.insert(format!("customField_{}_max", id), max.as_str());
                }
            }
            CustomFieldFilter::Items { id, items } => {
                params.insert_list(&format!("customField_{}", id), items.iter().copied());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(CustomFieldKey::parse("customField_7").unwrap(), CustomFieldKey::Value(7));
        assert_eq!(
            "customField_7_other_value".parse::<CustomFieldKey>().unwrap(),
            CustomFieldKey::OtherValue(7)
        );
        for bad in ["foo_bar", "customField_", "customField_x", "customField_1_other", "xcustomField_1"] {
            assert!(matches!(CustomFieldKey::parse(bad), Err(ApiError::Validation(_))), "{}", bad);
        }
    }

    #[test]
    fn test_values_replace_same_key() {
        let mut values = CustomFieldValues::new();
        values.set(1, "a").set(1, "b").set_other(1, "c");
        assert_eq!(values.len(), 2);

        let mut params = Params::new();
        values.append_to(&mut params);
        assert_eq!(
            params.to_pairs(),
            vec![
                ("customField_1".to_string(), "b".to_string()),
                ("customField_1_other_value".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_filters() {
        let mut params = Params::new();
        CustomFieldFilter::NumberRange { id: 3, min: Some(0.0), max: None }
            .append_to(&mut params)
            .unwrap();
        CustomFieldFilter::Items { id: 4, items: vec![9, 8] }
            .append_to(&mut params)
            .unwrap();

        assert_eq!(params.get("customField_3_min"), Some(&ParamValue::Float(0.0)));
        assert!(!params.contains_key("customField_3_max"));
        assert_eq!(params.get_all("customField_4[]").len(), 2);
    }

    #[test]
    fn test_date_filter_validates() {
        let mut params = Params::new();
        let filter = CustomFieldFilter::DateRange {
            id: 5,
            min: Some("2020-1-1".to_string()),
            max: None,
        };
        assert!(filter.append_to(&mut params).is_err());
    }
}
