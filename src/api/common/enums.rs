//
//  backlog-client
//  api/common/enums.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Closed value sets accepted by the API.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::ApiError;

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            other => Err(ApiError::validation(format!(
                "order must be `asc` or `desc`, got `{}`",
                other
            ))),
        }
    }
}

/// Markup used for project text (issue descriptions, wiki pages...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormattingRule {
    Backlog,
    Markdown,
}

impl TextFormattingRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormattingRule::Backlog => "backlog",
            TextFormattingRule::Markdown => "markdown",
        }
    }
}

impl fmt::Display for TextFormattingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextFormattingRule {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(TextFormattingRule::Backlog),
            "markdown" => Ok(TextFormattingRule::Markdown),
            other => Err(ApiError::validation(format!(
                "text formatting rule must be `backlog` or `markdown`, got `{}`",
                other
            ))),
        }
    }
}

/// Custom field type, sent as its numeric `typeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomFieldType {
    Text = 1,
    TextArea = 2,
    Numeric = 3,
    Date = 4,
    SingleList = 5,
    MultipleList = 6,
    CheckBox = 7,
    Radio = 8,
}

impl CustomFieldType {
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Types that carry a list of items.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            CustomFieldType::SingleList
                | CustomFieldType::MultipleList
                | CustomFieldType::CheckBox
                | CustomFieldType::Radio
        )
    }
}

impl TryFrom<u8> for CustomFieldType {
    type Error = ApiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => CustomFieldType::Text,
            2 => CustomFieldType::TextArea,
            3 => CustomFieldType::Numeric,
            4 => CustomFieldType::Date,
            5 => CustomFieldType::SingleList,
            6 => CustomFieldType::MultipleList,
            7 => CustomFieldType::CheckBox,
            8 => CustomFieldType::Radio,
            other => {
                return Err(ApiError::validation(format!(
                    "custom field type id must be between 1 and 8, got {}",
                    other
                )))
            }
        })
    }
}

impl Serialize for CustomFieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_parse() {
        assert_eq!("asc".parse::<Order>().unwrap(), Order::Asc);
        assert_eq!("desc".parse::<Order>().unwrap(), Order::Desc);
        assert!(matches!("up".parse::<Order>(), Err(ApiError::Validation(_))));
        assert!(matches!("ASC".parse::<Order>(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_text_formatting_rule_parse() {
        assert_eq!(
            "markdown".parse::<TextFormattingRule>().unwrap(),
            TextFormattingRule::Markdown
        );
        assert!("html".parse::<TextFormattingRule>().is_err());
    }

    #[test]
    fn test_custom_field_type_ids() {
        assert_eq!(CustomFieldType::Numeric.id(), 3);
        assert_eq!(CustomFieldType::try_from(8).unwrap(), CustomFieldType::Radio);
        assert!(CustomFieldType::try_from(0).is_err());
        assert!(CustomFieldType::try_from(9).is_err());
        assert_eq!(serde_json::to_value(CustomFieldType::Date).unwrap(), serde_json::json!(4));
    }
}
