//
//  backlog-client
//  api/endpoints/custom_field.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Custom field definitions of a project.
//!
//! The settings a custom field accepts depend on its type:
//!
//! | Type | Extra settings |
//! |------|----------------|
//! | Numeric | `min`, `max`, `initialValue`, `unit` |
//! | Date | `min`, `max`, `initialValueType`, `initialDate`, `initialShift` |
//! | Single/multiple list, check box, radio | `items[]`, `allowInput`, `allowAddItem` |
//! | Text, text area | none |
//!
//! Settings that do not apply to the type are dropped. On update the type is
//! only known if the caller passes it; without it everything set is sent.
//! Numeric and date bounds share the `min` and `max` parameters, so setting
//! both families at once is rejected.
//!
//! # Example
//!
//! ```rust,no_run
//! use backlog_client::api::BacklogClient;
//! use backlog_client::api::common::CustomFieldType;
//! use backlog_client::api::endpoints::custom_field::CustomFieldSettings;
//! use backlog_client::config::ServiceConfig;
//!
//! # async fn example() -> backlog_client::Result<()> {
//! let client = BacklogClient::new(&ServiceConfig::load()?)?;
//!
//! let settings = CustomFieldSettings {
//!     min_num: Some(0.0),
//!     max_num: Some(5.0),
//!     unit: Some("pt".to_string()),
//!     ..Default::default()
//! };
//! client
//!     .custom_fields()
//!     .add("DEV", CustomFieldType::Numeric, "Story points", &settings)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::json;

use super::facade;
use crate::api::common::schema::{self, Field};
use crate::api::common::{ApiError, ApiResponse, CustomFieldType, Result};

const HEAD: &[Field] = &[Field::new("typeId").required(), Field::new("name").required()];
const RENAME: &[Field] = &[Field::new("name")];
const ITEM: &[Field] = &[Field::new("name").required()];

const SETTINGS: &[Field] = &[
    Field::new("applicableIssueTypes").array(),
    Field::new("description"),
    Field::new("required"),
    Field::new("minNum").wire("min"),
    Field::new("maxNum").wire("max"),
    Field::new("initialValue"),
    Field::new("unit"),
    Field::new("minDate").wire("min").date(),
    Field::new("maxDate").wire("max").date(),
    Field::new("initialValueType").range(1, 3),
    Field::new("initialDate").date(),
    Field::new("initialShift"),
    Field::new("items").array(),
    Field::new("allowInput"),
    Field::new("allowAddItem"),
];

/// Optional settings of a custom field.
///
/// `min_num`/`min_date` and `max_num`/`max_date` are sent as `min` and `max`;
/// at most one of each pair may be set once the type filter has run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldSettings {
    /// Issue type ids the field is shown for.
    pub applicable_issue_types: Vec<u64>,
    pub description: Option<String>,
    pub required: Option<bool>,

    /// Numeric lower bound.
    pub min_num: Option<f64>,
    /// Numeric upper bound.
    pub max_num: Option<f64>,
    pub initial_value: Option<f64>,
    pub unit: Option<String>,

    /// Earliest date, `YYYY-MM-DD`.
    pub min_date: Option<String>,
    /// Latest date, `YYYY-MM-DD`.
    pub max_date: Option<String>,
    /// 1: today, 2: today + `initial_shift` days, 3: `initial_date`.
    pub initial_value_type: Option<u8>,
    pub initial_date: Option<String>,
    pub initial_shift: Option<i64>,

    /// List item names.
    pub items: Vec<String>,
    /// Allow free text ("other").
    pub allow_input: Option<bool>,
    /// Allow users to add items while editing issues.
    pub allow_add_item: Option<bool>,
}

impl CustomFieldSettings {
    /// Copy with every setting that does not apply to `field_type` cleared.
    pub fn for_type(&self, field_type: CustomFieldType) -> Self {
        let mut settings = self.clone();

        if field_type != CustomFieldType::Numeric {
            settings.min_num = None;
            settings.max_num = None;
            settings.initial_value = None;
            settings.unit = None;
        }
        if field_type != CustomFieldType::Date {
            settings.min_date = None;
            settings.max_date = None;
            settings.initial_value_type = None;
            settings.initial_date = None;
            settings.initial_shift = None;
        }
        if !field_type.is_list() {
            settings.items.clear();
            settings.allow_input = None;
            settings.allow_add_item = None;
        }

        settings
    }

    /// Fails if a numeric and a date bound would both be sent as `min` or `max`.
    fn check_bounds(&self) -> Result<()> {
        for (wire, numeric, date) in [
            ("min", self.min_num.is_some(), self.min_date.is_some()),
            ("max", self.max_num.is_some(), self.max_date.is_some()),
        ] {
            if numeric && date {
                return Err(ApiError::validation(format!(
                    "custom field `{}` takes either a number or a date, not both",
                    wire
                )));
            }
        }
        Ok(())
    }
}

facade!(
    /// `/api/v2/projects/{project}/customFields`
    CustomFields,
    "projects"
);

impl<'a> CustomFields<'a> {
    pub async fn list(&self, project: &str) -> Result<ApiResponse> {
        self.resource
            .fetch(&format!("{}/customFields", project))
            .await
    }

    pub async fn add(
        &self,
        project: &str,
        field_type: CustomFieldType,
        name: &str,
        settings: &CustomFieldSettings,
    ) -> Result<ApiResponse> {
        let settings = settings.for_type(field_type);
        settings.check_bounds()?;

        let mut params = schema::build(HEAD, &json!({ "typeId": field_type, "name": name }))?;
        params.extend(schema::build(SETTINGS, &settings)?);

        self.resource
            .send(reqwest::Method::POST, &format!("{}/customFields", project), &params)
            .await
    }

    /// Updates a custom field. With `field_type` set, settings that do not
    /// apply to it are dropped.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] if both a numeric and a date bound remain for
    /// `min` or `max`.
    pub async fn update(
        &self,
        project: &str,
        custom_field_id: u64,
        name: Option<&str>,
        field_type: Option<CustomFieldType>,
        settings: &CustomFieldSettings,
    ) -> Result<ApiResponse> {
        let settings = match field_type {
            Some(field_type) => settings.for_type(field_type),
            None => settings.clone(),
        };
        settings.check_bounds()?;

        let mut params = schema::build(RENAME, &json!({ "name": name }))?;
        params.extend(schema::build(SETTINGS, &settings)?);

        self.resource
            .send(
                reqwest::Method::PATCH,
                &format!("{}/customFields/{}", project, custom_field_id),
                &params,
            )
            .await
    }

    pub async fn delete(&self, project: &str, custom_field_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!("{}/customFields/{}", project, custom_field_id))
            .await
    }

    /// Adds an item to a list-type custom field.
    pub async fn add_item(&self, project: &str, custom_field_id: u64, name: &str) -> Result<ApiResponse> {
        self.resource
            .post(
                &format!("{}/customFields/{}/items", project, custom_field_id),
                ITEM,
                &json!({ "name": name }),
            )
            .await
    }

    pub async fn update_item(
        &self,
        project: &str,
        custom_field_id: u64,
        item_id: u64,
        name: &str,
    ) -> Result<ApiResponse> {
        self.resource
            .patch(
                &format!("{}/customFields/{}/items/{}", project, custom_field_id, item_id),
                ITEM,
                &json!({ "name": name }),
            )
            .await
    }

    pub async fn delete_item(&self, project: &str, custom_field_id: u64, item_id: u64) -> Result<ApiResponse> {
        self.resource
            .remove(&format!(
                "{}/customFields/{}/items/{}",
                project, custom_field_id, item_id
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ParamValue;

    fn everything() -> CustomFieldSettings {
        CustomFieldSettings {
            applicable_issue_types: vec![1],
            min_num: Some(0.0),
            max_num: Some(10.0),
            unit: Some("h".into()),
            min_date: Some("2020-01-01".into()),
            initial_value_type: Some(1),
            items: vec!["red".into(), "blue".into()],
            allow_input: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_numeric_keeps_numeric_settings() {
        let params = schema::build(SETTINGS, &everything().for_type(CustomFieldType::Numeric)).unwrap();
        assert_eq!(params.get("min"), Some(&ParamValue::Float(0.0)));
        assert_eq!(params.get("max"), Some(&ParamValue::Float(10.0)));
        assert!(params.contains_key("unit"));
        assert!(!params.contains_key("initialValueType"));
        assert!(!params.contains_key("items[]"));
        assert!(params.contains_key("applicableIssueTypes[]"));
    }

    #[test]
    fn test_date_keeps_date_settings() {
        let params = schema::build(SETTINGS, &everything().for_type(CustomFieldType::Date)).unwrap();
        assert_eq!(params.get("min"), Some(&ParamValue::Text("2020-01-01".into())));
        assert!(params.contains_key("initialValueType"));
        assert!(!params.contains_key("unit"));
    }

    #[test]
    fn test_list_types_keep_items() {
        for field_type in [
            CustomFieldType::SingleList,
            CustomFieldType::MultipleList,
            CustomFieldType::CheckBox,
            CustomFieldType::Radio,
        ] {
            let params = schema::build(SETTINGS, &everything().for_type(field_type)).unwrap();
            assert_eq!(params.get_all("items[]").len(), 2);
            assert!(!params.contains_key("min"));
        }
    }

    #[test]
    fn test_text_drops_everything_typed() {
        let params = schema::build(SETTINGS, &everything().for_type(CustomFieldType::Text)).unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["applicableIssueTypes[]"]);
    }

    #[test]
    fn test_mixed_bounds_rejected_without_type() {
        assert!(matches!(everything().check_bounds(), Err(ApiError::Validation(_))));

        let max_only = CustomFieldSettings {
            max_num: Some(1.0),
            max_date: Some("2020-12-31".into()),
            ..Default::default()
        };
        assert!(matches!(max_only.check_bounds(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_type_filter_resolves_mixed_bounds() {
        assert!(everything().for_type(CustomFieldType::Numeric).check_bounds().is_ok());
        assert!(everything().for_type(CustomFieldType::Date).check_bounds().is_ok());
        assert!(CustomFieldSettings::default().check_bounds().is_ok());
    }

    #[test]
    fn test_head_sends_type_id() {
        let params = schema::build(HEAD, &json!({ "typeId": CustomFieldType::Radio, "name": "Colour" })).unwrap();
        assert_eq!(params.get("typeId"), Some(&ParamValue::Integer(8)));
    }
}
