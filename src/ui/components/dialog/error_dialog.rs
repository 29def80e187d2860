//! Error dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the front of the error queue, with a counter when more are waiting
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let title = if queued > 1 {
        format!("Error (1 of {})", queued)
    } else {
        "Error".to_string()
    };

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            accent: Color::Red,
            message: error_message,
            hint: Some(key_hint(&[("Enter", " or "), ("Esc", " to dismiss")])),
            ..DialogConfig::default()
        },
    );
}
