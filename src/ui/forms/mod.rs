//! Form rendering module
//!
//! - `field_renderer`: text, choice and checklist inputs, shared with the post editor
//! - `wizard_form`: the five-step quote wizard
//! - `review`: read-only summary shared by the review step and detail view

mod field_renderer;
mod review;
mod wizard_form;

pub use field_renderer::{draw_help_text, draw_text_input, InputSpec};
pub use review::review_lines;
pub use wizard_form::draw_wizard;
