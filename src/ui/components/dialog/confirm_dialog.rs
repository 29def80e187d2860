//! Confirmation dialog for deleting a submission or blog post

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::state::PendingDelete;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the delete confirmation with Cancel/Delete options
pub fn render_confirm_dialog(frame: &mut Frame, pending: &PendingDelete) {
    let message = pending.message();

    let options = [("Cancel", false, Color::White), ("Delete", true, Color::Red)];
    let extra = options
        .iter()
        .map(|(label, is_delete, color)| {
            let is_selected = pending.confirm_selected == *is_delete;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(*color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{}{}", prefix, label), style))
        })
        .collect();

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            accent: Color::Red,
            message: &message,
            extra,
            hint: Some(key_hint(&[
                ("↑↓", " select  "),
                ("Enter", " confirm  "),
                ("Esc", " cancel"),
            ])),
            max_width: 56,
        },
    );
}
