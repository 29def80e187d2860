//! Quote form domain layer
//!
//! Option domains, the form record, validation, sanitizing and the wizard
//! state machine that ties them together.

mod catalog;
mod field;
mod form_data;
mod options;
mod sanitize;
mod validation;
mod wizard;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{
    choice_label, choice_options, feature_label, features_for_raw, FIRST_STEP, FORM_STEPS,
    LAST_STEP,
};
pub use field::FieldName;
pub use form_data::ContactFormData;
pub use options::UnknownOption;
pub use wizard::{SubmissionState, WizardState};
