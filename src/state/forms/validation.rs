//! Field, step and whole-form validation for the quote form
//!
//! Every rule is a plain function returning `Result<(), String>`; the public
//! entry points collect those outcomes into `Option<String>` or [`FormErrors`].

use super::field::{FieldName, FieldValue};
use super::form_data::{ContactFormData, FormErrors};
use super::options::{BudgetRange, ContactTime, ProjectType, Timeline};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

const INVALID_VALUE: &str = "Invalid value";
const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Local part, `@`, one or more domain labels, alphabetic TLD
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// ASCII digits only
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]+$").unwrap());

/// Scheme optional, domain + TLD, optional path. ASCII letters only, either case.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([hH][tT][tT][pP][sS]?://)?([A-Za-z0-9-]+\.)+[A-Za-z]{2,}(/\S*)?$").unwrap()
});

/// Required fields per wizard step
fn step_fields(step: u8) -> &'static [FieldName] {
    match step {
        1 => &[FieldName::ProjectType],
        2 => &[],
        3 => &[FieldName::Budget, FieldName::Timeline, FieldName::ProjectBrief],
        4 => &[
            FieldName::FullName,
            FieldName::Email,
            FieldName::BestTimeToContact,
        ],
        5 => &[],
        _ => &[],
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn length_between(
    value: &str,
    min: usize,
    max: usize,
    too_short: &str,
    too_long: &str,
) -> Result<(), String> {
    let len = char_len(value);
    if len < min {
        Err(too_short.to_string())
    } else if len > max {
        Err(too_long.to_string())
    } else {
        Ok(())
    }
}

fn choice<T: FromStr>(value: &str, empty_message: &str, allowed: &[&str]) -> Result<(), String> {
    if value.is_empty() {
        return Err(empty_message.to_string());
    }
    value
        .parse::<T>()
        .map(|_| ())
        .map_err(|_| format!("Invalid option. Expected one of: {}", allowed.join(", ")))
}

fn check_email(value: &str) -> Result<(), String> {
    let local = value.split('@').next().unwrap_or_default();
    if local.starts_with('.') || value.contains("..") || !EMAIL_RE.is_match(value) {
        return Err(INVALID_EMAIL.to_string());
    }
    Ok(())
}

fn check_phone(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    if !PHONE_RE.is_match(value) {
        return Err("Please enter a valid phone number".to_string());
    }
    length_between(
        value,
        8,
        20,
        "Phone number must be at least 8 characters",
        "Phone number must be less than 20 characters",
    )
}

fn check_website(value: &str) -> Result<(), String> {
    if value.is_empty() || URL_RE.is_match(value) {
        Ok(())
    } else {
        Err("Please enter a valid URL".to_string())
    }
}

fn check_text(field: FieldName, value: &str) -> Result<(), String> {
    match field {
        FieldName::ProjectType => choice::<ProjectType>(
            value,
            "Please select a project type",
            &ProjectType::ALL.map(|v| v.as_str()),
        ),
        FieldName::Budget => choice::<BudgetRange>(
            value,
            "Please select a budget range",
            &BudgetRange::ALL.map(|v| v.as_str()),
        ),
        FieldName::Timeline => choice::<Timeline>(
            value,
            "Please select a timeline",
            &Timeline::ALL.map(|v| v.as_str()),
        ),
        FieldName::BestTimeToContact => choice::<ContactTime>(
            value,
            "Please select the best time to contact you",
            &ContactTime::ALL.map(|v| v.as_str()),
        ),
        FieldName::ProjectBrief => length_between(
            value,
            20,
            2000,
            "Please provide at least 20 characters describing your project",
            "Project brief must be less than 2000 characters",
        ),
        FieldName::CompanyName if value.is_empty() => Ok(()),
        FieldName::CompanyName => length_between(
            value,
            2,
            100,
            "Company name must be at least 2 characters",
            "Company name must be less than 100 characters",
        ),
        FieldName::CompanyWebsite => check_website(value),
        FieldName::ReferenceLinks => {
            if char_len(value) > 500 {
                Err("Reference links must be less than 500 characters".to_string())
            } else {
                Ok(())
            }
        }
        FieldName::FullName => length_between(
            value,
            2,
            100,
            "Full name must be at least 2 characters",
            "Full name must be less than 100 characters",
        ),
        FieldName::Email => check_email(value),
        FieldName::Phone => check_phone(value),
        FieldName::AdditionalFeatures => Ok(()),
        FieldName::SelectedFeatures => Err(INVALID_VALUE.to_string()),
    }
}

fn check(field: FieldName, value: &FieldValue) -> Result<(), String> {
    match (field, value) {
        (FieldName::SelectedFeatures, FieldValue::List(_)) => Ok(()),
        (_, FieldValue::Text(text)) => check_text(field, text),
        (_, FieldValue::List(_)) => Err(INVALID_VALUE.to_string()),
    }
}

/// Validate a single field.
///
/// Returns the message of the first violated rule, or `None` when the value is
/// acceptable for that field.
pub fn validate_field(field: FieldName, value: &FieldValue) -> Option<String> {
    check(field, value).err()
}

/// Validate the required fields of one wizard step.
///
/// Steps outside 1..=5 have no required fields.
pub fn validate_step(step: u8, form_data: &ContactFormData) -> FormErrors {
    let mut errors = FormErrors::new();
    for &field in step_fields(step) {
        if let Some(message) = validate_field(field, &form_data.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate every field of the form in one pass
pub fn validate_form(form_data: &ContactFormData) -> FormErrors {
    let mut errors = FormErrors::new();
    for field in FieldName::ALL {
        if let Some(message) = validate_field(field, &form_data.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Whether the form satisfies every field constraint simultaneously
pub fn is_form_complete(form_data: &ContactFormData) -> bool {
    validate_form(form_data).is_empty()
}
