//! Contact form data and per-field error map

use super::field::{FieldName, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All values collected by the quote wizard.
///
/// Scalar fields use the empty string as the "not provided" sentinel, which is
/// also the initial value of every input. Choice fields (`project_type`,
/// `budget`, `timeline`, `best_time_to_contact`) hold the raw wire value of
/// their option; see [`super::options`] for the allowed domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormData {
    // Step 1
    pub project_type: String,

    // Step 2
    pub selected_features: Vec<String>,
    pub additional_features: String,

    // Step 3
    pub budget: String,
    pub timeline: String,
    pub project_brief: String,
    pub company_name: String,
    pub company_website: String,
    pub reference_links: String,

    // Step 4
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub best_time_to_contact: String,
}

impl ContactFormData {
    /// Read a field as a [`FieldValue`]
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::SelectedFeatures => FieldValue::List(self.selected_features.clone()),
            other => FieldValue::Text(self.text(other).unwrap_or_default().to_string()),
        }
    }

    /// Borrow a text field (None for the feature list)
    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::ProjectType => &self.project_type,
            FieldName::SelectedFeatures => return None,
            FieldName::AdditionalFeatures => &self.additional_features,
            FieldName::Budget => &self.budget,
            FieldName::Timeline => &self.timeline,
            FieldName::ProjectBrief => &self.project_brief,
            FieldName::CompanyName => &self.company_name,
            FieldName::CompanyWebsite => &self.company_website,
            FieldName::ReferenceLinks => &self.reference_links,
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::BestTimeToContact => &self.best_time_to_contact,
        };
        Some(value)
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match field {
            FieldName::ProjectType => &mut self.project_type,
            FieldName::SelectedFeatures => return None,
            FieldName::AdditionalFeatures => &mut self.additional_features,
            FieldName::Budget => &mut self.budget,
            FieldName::Timeline => &mut self.timeline,
            FieldName::ProjectBrief => &mut self.project_brief,
            FieldName::CompanyName => &mut self.company_name,
            FieldName::CompanyWebsite => &mut self.company_website,
            FieldName::ReferenceLinks => &mut self.reference_links,
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::BestTimeToContact => &mut self.best_time_to_contact,
        };
        Some(value)
    }

    /// Merge a single value into the form.
    ///
    /// Returns false, leaving the data untouched, when the value shape does not
    /// match the field (a list for a text field or the other way round).
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> bool {
        match (field, value) {
            (FieldName::SelectedFeatures, FieldValue::List(items)) => {
                self.selected_features = items;
                true
            }
            (_, FieldValue::Text(text)) => match self.text_mut(field) {
                Some(slot) => {
                    *slot = text;
                    true
                }
                None => false,
            },
            (_, FieldValue::List(_)) => false,
        }
    }

    /// Whether every field still holds its empty sentinel
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Validation messages keyed by field.
///
/// A missing key means the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FieldName, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Field names with an error, in form order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
