//! Form field names and value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::options::UnknownOption;

/// Every input of the quote form, keyed by its camelCase wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    ProjectType,
    SelectedFeatures,
    AdditionalFeatures,
    Budget,
    Timeline,
    ProjectBrief,
    CompanyName,
    CompanyWebsite,
    ReferenceLinks,
    FullName,
    Email,
    Phone,
    BestTimeToContact,
}

impl FieldName {
    pub const ALL: [FieldName; 13] = [
        Self::ProjectType,
        Self::SelectedFeatures,
        Self::AdditionalFeatures,
        Self::Budget,
        Self::Timeline,
        Self::ProjectBrief,
        Self::CompanyName,
        Self::CompanyWebsite,
        Self::ReferenceLinks,
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::BestTimeToContact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectType => "projectType",
            Self::SelectedFeatures => "selectedFeatures",
            Self::AdditionalFeatures => "additionalFeatures",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::ProjectBrief => "projectBrief",
            Self::CompanyName => "companyName",
            Self::CompanyWebsite => "companyWebsite",
            Self::ReferenceLinks => "referenceLinks",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BestTimeToContact => "bestTimeToContact",
        }
    }

    /// Human readable label used by the form and review screens
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectType => "Project Type",
            Self::SelectedFeatures => "Features",
            Self::AdditionalFeatures => "Additional Features or Requirements",
            Self::Budget => "Estimated Budget (AUD)",
            Self::Timeline => "Timeline",
            Self::ProjectBrief => "Project Brief",
            Self::CompanyName => "Company Name",
            Self::CompanyWebsite => "Company Website",
            Self::ReferenceLinks => "Reference Links",
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::BestTimeToContact => "Best Time to Contact",
        }
    }

    /// Whether the field holds a single option from a fixed domain
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Self::ProjectType | Self::Budget | Self::Timeline | Self::BestTimeToContact
        )
    }

    /// Whether the field holds a list of feature identifiers
    pub fn is_list(&self) -> bool {
        matches!(self, Self::SelectedFeatures)
    }

    /// Whether the form marks the field as required
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::ProjectType
                | Self::Budget
                | Self::Timeline
                | Self::ProjectBrief
                | Self::FullName
                | Self::Email
                | Self::BestTimeToContact
        )
    }

    /// Whether free text may span several lines
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            Self::AdditionalFeatures | Self::ProjectBrief | Self::ReferenceLinks
        )
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Raw value of a single field as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (None for list values)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// Get the list value (None for text values)
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_parses_wire_key() {
        assert_eq!("projectType".parse::<FieldName>(), Ok(FieldName::ProjectType));
        assert_eq!(
            "bestTimeToContact".parse::<FieldName>(),
            Ok(FieldName::BestTimeToContact)
        );
        assert!("project_type".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_field_name_serializes_camel_case() {
        for field in FieldName::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_field_kinds() {
        assert!(FieldName::Budget.is_choice());
        assert!(!FieldName::Email.is_choice());
        assert!(FieldName::SelectedFeatures.is_list());
        assert!(FieldName::ProjectBrief.is_multiline());
        assert!(!FieldName::FullName.is_multiline());
        assert!(FieldName::Email.is_required());
        assert!(!FieldName::Phone.is_required());
    }

    #[test]
    fn test_field_value_accessors() {
        let text = FieldValue::from("hello");
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_list().is_none());

        let list = FieldValue::from(vec!["seo".to_string()]);
        assert_eq!(list.as_list(), Some(&["seo".to_string()][..]));
        assert!(list.as_text().is_none());
    }

    #[test]
    fn test_default_value_is_empty_text() {
        assert_eq!(FieldValue::default(), FieldValue::Text(String::new()));
    }
}
