//! Submission records, wire shapes and the dashboard filter/sort pipeline

use crate::state::forms::{ContactFormData, UnknownOption};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Review status of a persisted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    #[default]
    New,
    Contacted,
    InProgress,
    Completed,
    Archived,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 5] = [
        Self::New,
        Self::Contacted,
        Self::InProgress,
        Self::Completed,
        Self::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// A persisted quote request as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SubmissionRow", into = "SubmissionRow")]
pub struct FormSubmission {
    pub id: String,
    pub data: ContactFormData,
    pub status: SubmissionStatus,
    pub notes: String,
    pub submitted_at: String,
    pub updated_at: String,
    pub created_at: String,
}

impl FormSubmission {
    /// Submission time as an absolute instant, if the stored value parses
    pub fn submitted_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.submitted_at)
    }
}

pub(super) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The `form_submissions` row in its persisted snake_case shape.
///
/// Optional text columns are `null` rather than empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_features: Vec<String>,
    #[serde(default)]
    pub additional_features: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_brief: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub reference_links: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub best_time_to_contact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl SubmissionRow {
    /// Build the insert shape for sanitized form data
    pub fn from_form(data: &ContactFormData, submitted_at: &str) -> Self {
        Self {
            id: None,
            project_type: data.project_type.clone(),
            selected_features: data.selected_features.clone(),
            additional_features: non_empty(&data.additional_features),
            budget: data.budget.clone(),
            timeline: data.timeline.clone(),
            project_brief: data.project_brief.clone(),
            company_name: non_empty(&data.company_name),
            company_website: non_empty(&data.company_website),
            reference_links: non_empty(&data.reference_links),
            full_name: data.full_name.clone(),
            email: data.email.clone(),
            phone: non_empty(&data.phone),
            best_time_to_contact: data.best_time_to_contact.clone(),
            status: SubmissionStatus::New,
            notes: None,
            submitted_at: non_empty(submitted_at),
            updated_at: None,
            created_at: None,
        }
    }
}

impl From<SubmissionRow> for FormSubmission {
    fn from(row: SubmissionRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            data: ContactFormData {
                project_type: row.project_type,
                selected_features: row.selected_features,
                additional_features: row.additional_features.unwrap_or_default(),
                budget: row.budget,
                timeline: row.timeline,
                project_brief: row.project_brief,
                company_name: row.company_name.unwrap_or_default(),
                company_website: row.company_website.unwrap_or_default(),
                reference_links: row.reference_links.unwrap_or_default(),
                full_name: row.full_name,
                email: row.email,
                phone: row.phone.unwrap_or_default(),
                best_time_to_contact: row.best_time_to_contact,
            },
            status: row.status,
            notes: row.notes.unwrap_or_default(),
            submitted_at: row.submitted_at.unwrap_or_default(),
            updated_at: row.updated_at.unwrap_or_default(),
            created_at: row.created_at.unwrap_or_default(),
        }
    }
}

impl From<FormSubmission> for SubmissionRow {
    fn from(submission: FormSubmission) -> Self {
        let mut row = SubmissionRow::from_form(&submission.data, &submission.submitted_at);
        row.id = non_empty(&submission.id);
        row.status = submission.status;
        row.notes = non_empty(&submission.notes);
        row.updated_at = non_empty(&submission.updated_at);
        row.created_at = non_empty(&submission.created_at);
        row
    }
}

/// Body posted to the submission endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub data: ContactFormData,
    pub submitted_at: String,
}

/// Reply from the submission endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status filter for the dashboard list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SubmissionStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: SubmissionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    /// Cycle through "all" and then each status in order
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(SubmissionStatus::New),
            Self::Only(SubmissionStatus::New) => Self::Only(SubmissionStatus::Contacted),
            Self::Only(SubmissionStatus::Contacted) => Self::Only(SubmissionStatus::InProgress),
            Self::Only(SubmissionStatus::InProgress) => Self::Only(SubmissionStatus::Completed),
            Self::Only(SubmissionStatus::Completed) => Self::Only(SubmissionStatus::Archived),
            Self::Only(SubmissionStatus::Archived) => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Statuses",
            Self::Only(status) => status.label(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Sort direction over submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Asc => "Oldest First",
            Self::Desc => "Newest First",
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// Filter by status and order by submission time.
///
/// The sort is stable: records with equal timestamps keep their input order.
/// Records whose timestamp does not parse order before all others ascending
/// and after all others descending.
pub fn filter_and_sort(
    submissions: &[FormSubmission],
    filter: StatusFilter,
    direction: SortDirection,
) -> Vec<&FormSubmission> {
    let mut filtered: Vec<_> = submissions
        .iter()
        .filter(|s| filter.matches(s.status))
        .collect();

    filtered.sort_by(|a, b| {
        let cmp = a.submitted_time().cmp(&b.submitted_time());
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });

    filtered
}

/// Number of submissions per status, in status order
pub fn status_counts(submissions: &[FormSubmission]) -> Vec<(SubmissionStatus, usize)> {
    SubmissionStatus::ALL
        .into_iter()
        .map(|status| {
            let count = submissions.iter().filter(|s| s.status == status).count();
            (status, count)
        })
        .collect()
}

/// Built-in records shown when the API cannot be reached and sample data is enabled
pub fn sample_submissions(now: DateTime<Utc>) -> Vec<FormSubmission> {
    let today = now.to_rfc3339();
    let yesterday = (now - Duration::days(1)).to_rfc3339();

    vec![
        FormSubmission {
            id: "sample-1".to_string(),
            data: ContactFormData {
                project_type: "ecommerce".to_string(),
                selected_features: vec![
                    "product-catalog".to_string(),
                    "shopping-cart".to_string(),
                    "payment-gateway".to_string(),
                ],
                additional_features: "Need integration with existing inventory system".to_string(),
                budget: "4k-7k".to_string(),
                timeline: "1-2-months".to_string(),
                project_brief: "We need an e-commerce platform for our retail business. Looking for a modern, mobile-friendly solution with payment processing.".to_string(),
                company_name: "Sample Retail Co".to_string(),
                company_website: "https://example.com".to_string(),
                reference_links: String::new(),
                full_name: "John Smith".to_string(),
                email: "john@example.com".to_string(),
                phone: "+61 400 000 000".to_string(),
                best_time_to_contact: "afternoon".to_string(),
            },
            status: SubmissionStatus::New,
            notes: String::new(),
            submitted_at: today.clone(),
            updated_at: today.clone(),
            created_at: today,
        },
        FormSubmission {
            id: "sample-2".to_string(),
            data: ContactFormData {
                project_type: "landing-page".to_string(),
                selected_features: vec![
                    "hero-section".to_string(),
                    "contact-form".to_string(),
                    "testimonials".to_string(),
                ],
                additional_features: String::new(),
                budget: "1k-2k".to_string(),
                timeline: "1-2-weeks".to_string(),
                project_brief: "Simple landing page for our new product launch. Need it fast!"
                    .to_string(),
                company_name: "Tech Startup".to_string(),
                company_website: String::new(),
                reference_links: String::new(),
                full_name: "Jane Doe".to_string(),
                email: "jane@techstartup.com".to_string(),
                phone: String::new(),
                best_time_to_contact: "morning".to_string(),
            },
            status: SubmissionStatus::Contacted,
            notes: String::new(),
            submitted_at: yesterday.clone(),
            updated_at: yesterday.clone(),
            created_at: yesterday,
        },
    ]
}
