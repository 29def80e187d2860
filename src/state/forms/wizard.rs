//! Five-step quote wizard state machine

use chrono::{SecondsFormat, Utc};
use tracing::{error, info, warn};

use super::catalog::{form_step, FormStep, FIRST_STEP, FORM_STEPS, LAST_STEP};
use super::field::{FieldName, FieldValue};
use super::form_data::{ContactFormData, FormErrors};
use super::sanitize::sanitize;
use super::validation::{is_form_complete, validate_step};
use crate::api::{ApiClientTrait, ApiError};
use crate::state::{SubmissionPayload, SubmissionResponse};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Lifecycle of the final submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    NotSubmitted,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    /// 1-based step number, always within the step table
    pub current_step: u8,
    pub form_data: ContactFormData,
    pub errors: FormErrors,
    pub status: SubmissionState,
    pub submit_error: Option<String>,
    /// Id returned by the last acknowledged submission
    pub last_submission_id: Option<String>,
    /// Payload built by `begin_submit`, not yet sent
    queued: Option<SubmissionPayload>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: FIRST_STEP,
            form_data: ContactFormData::default(),
            errors: FormErrors::new(),
            status: SubmissionState::NotSubmitted,
            submit_error: None,
            last_submission_id: None,
            queued: None,
        }
    }

    pub fn step(&self) -> &'static FormStep {
        form_step(self.current_step).unwrap_or(&FORM_STEPS[0])
    }

    pub fn is_review_step(&self) -> bool {
        self.current_step == LAST_STEP
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionState::Submitting
    }

    /// Merge a value into the form and drop any stale error for that field.
    ///
    /// The field is not re-validated here; that happens on `next`.
    pub fn edit_field(&mut self, field: FieldName, value: FieldValue) {
        if !self.form_data.set(field, value) {
            warn!(field = field.as_str(), "ignoring value of the wrong shape");
            return;
        }
        self.errors.remove(field);
    }

    pub fn set_text(&mut self, field: FieldName, text: impl Into<String>) {
        self.edit_field(field, FieldValue::Text(text.into()));
    }

    pub fn push_char(&mut self, field: FieldName, c: char) {
        if let Some(current) = self.form_data.text(field) {
            let mut text = current.to_string();
            text.push(c);
            self.set_text(field, text);
        }
    }

    pub fn pop_char(&mut self, field: FieldName) {
        if let Some(current) = self.form_data.text(field) {
            let mut text = current.to_string();
            if text.pop().is_some() {
                self.set_text(field, text);
            }
        }
    }

    /// Store the wire value of a choice field
    pub fn select_option(&mut self, field: FieldName, value: &str) {
        self.set_text(field, value);
    }

    /// Add the feature if absent, remove it if present. Order is kept.
    pub fn toggle_feature(&mut self, id: &str) {
        let mut features = self.form_data.selected_features.clone();
        match features.iter().position(|f| f == id) {
            Some(index) => {
                features.remove(index);
            }
            None => features.push(id.to_string()),
        }
        self.edit_field(FieldName::SelectedFeatures, FieldValue::List(features));
    }

    /// Validate the current step and advance when it passes.
    ///
    /// Returns whether the step advanced (or would have, on the last step).
    pub fn next(&mut self) -> bool {
        let errors = validate_step(self.current_step, &self.form_data);
        if errors.is_empty() {
            self.current_step = (self.current_step + 1).min(LAST_STEP);
            self.errors.clear();
            true
        } else {
            self.errors = errors;
            false
        }
    }

    pub fn previous(&mut self) {
        self.current_step = self.current_step.saturating_sub(1).max(FIRST_STEP);
        self.errors.clear();
    }

    /// Check the whole form and queue its sanitized payload.
    ///
    /// Returns false when a submit is already in flight or the form is
    /// incomplete. In the latter case `submit_error` explains why.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        if !is_form_complete(&self.form_data) {
            self.submit_error = Some(REQUIRED_FIELDS_MESSAGE.to_string());
            return false;
        }

        self.status = SubmissionState::Submitting;
        self.submit_error = None;
        self.queued = Some(SubmissionPayload {
            data: sanitize(&self.form_data),
            submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        true
    }

    /// Whether `begin_submit` queued a payload that has not been sent
    pub fn has_queued_submit(&self) -> bool {
        self.queued.is_some()
    }

    /// Apply the endpoint's answer to the submit in flight
    pub fn finish_submit(&mut self, result: Result<SubmissionResponse, ApiError>) {
        if !self.is_submitting() {
            warn!("submit result arrived with no submit in flight");
            return;
        }

        match result {
            Ok(response) if response.success => {
                info!(
                    submission_id = response.submission_id.as_deref().unwrap_or("-"),
                    "quote request submitted"
                );
                *self = Self {
                    status: SubmissionState::Succeeded,
                    last_submission_id: response.submission_id,
                    ..Self::new()
                };
            }
            Ok(response) => {
                warn!(error = ?response.error, "quote request rejected");
                self.status = SubmissionState::Failed;
                self.submit_error = Some(
                    response
                        .error
                        .filter(|e| !e.is_empty())
                        .unwrap_or_else(|| SUBMIT_FAILED_MESSAGE.to_string()),
                );
            }
            Err(err) => {
                error!(error = %err, "quote request failed");
                self.status = SubmissionState::Failed;
                self.submit_error = Some(UNEXPECTED_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Submit the form through `client`.
    ///
    /// Sends the payload queued by an earlier `begin_submit`, or begins one
    /// now. A submit already in flight is never sent twice.
    pub async fn submit(&mut self, client: &dyn ApiClientTrait) {
        if !self.is_submitting() && !self.begin_submit() {
            return;
        }
        let Some(payload) = self.queued.take() else {
            return;
        };
        let result = client.submit_form(&payload).await;
        self.finish_submit(result);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
