//! Quote wizard screen: step header, step inputs and navigation buttons

use super::field_renderer::{
    draw_checklist_field, draw_choice_field, draw_help_text, draw_text_field, field_height,
};
use super::review::draw_review;
use crate::app::App;
use crate::state::{
    choice_options, features_for_raw, FieldName, SubmissionState, FORM_STEPS, LAST_STEP,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the whole wizard view
pub fn draw_wizard(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Step header
            Constraint::Min(5),                // Step body
            Constraint::Length(1),             // Submit feedback
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help
        ])
        .split(area);

    draw_step_header(frame, chunks[0], app);

    if wizard.is_review_step() {
        draw_review(frame, chunks[1], &wizard.form_data);
    } else {
        draw_step_fields(frame, chunks[1], app);
    }

    draw_submit_feedback(frame, chunks[2], app);
    draw_buttons(frame, chunks[3], app);

    let help = if wizard.is_review_step() {
        "Enter/^S:submit  ^P/Esc:back  ^R:start over  F2:submissions"
    } else {
        "Tab:next field  ↑↓:choose  Space/Enter:select  ^N:next  ^P/Esc:back  F2:submissions"
    };
    draw_help_text(frame, chunks[4], help);
}

/// Step progress: "Step N of 5" with a marker per step
fn draw_step_header(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let step = wizard.step();

    let mut markers = Vec::new();
    for (idx, s) in FORM_STEPS.iter().enumerate() {
        if idx > 0 {
            markers.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
        }
        let (symbol, style) = if s.id < wizard.current_step {
            ("✓", Style::default().fg(Color::Green))
        } else if s.id == wizard.current_step {
            (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        markers.push(Span::styled(format!("{} {}", symbol, s.title), style));
    }

    let content = vec![
        Line::from(markers),
        Line::from(vec![
            Span::styled(
                format!("Step {} of {}: ", wizard.current_step, LAST_STEP),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                step.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            step.description,
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(content).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Stack the current step's inputs, focused one expanded
fn draw_step_fields(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let wizard = &state.wizard;
    let fields = state.step_fields();

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let is_active = idx == state.active_form_field;
            let count = option_pairs(app, *field).len();
            Constraint::Length(field_height(*field, is_active, count))
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, field) in fields.iter().enumerate() {
        let field = *field;
        let area = chunks[idx];
        let is_active = idx == state.active_form_field;
        let error = wizard.errors.get(field);

        if field.is_list() {
            let options = option_pairs(app, field);
            draw_checklist_field(
                frame,
                area,
                field,
                &options,
                &wizard.form_data.selected_features,
                state.option_cursor,
                is_active,
            );
        } else if field.is_choice() {
            let options = option_pairs(app, field);
            let selected = wizard.form_data.text(field).unwrap_or_default();
            draw_choice_field(
                frame,
                area,
                field,
                &options,
                selected,
                state.option_cursor,
                is_active,
                error,
            );
        } else {
            let value = wizard.form_data.text(field).unwrap_or_default();
            draw_text_field(frame, area, field, value, is_active, error);
        }
    }
}

/// (value, label) pairs offered by a choice or checklist field
fn option_pairs(app: &App, field: FieldName) -> Vec<(&'static str, &'static str)> {
    if field.is_list() {
        features_for_raw(&app.state.wizard.form_data.project_type)
            .iter()
            .map(|f| (f.id, f.label))
            .collect()
    } else {
        choice_options(field)
    }
}

fn draw_submit_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;

    let line = match (&wizard.status, &wizard.submit_error) {
        (SubmissionState::Submitting, _) => Line::from(Span::styled(
            "Submitting your request...",
            Style::default().fg(Color::Yellow),
        )),
        (_, Some(message)) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        )),
        (SubmissionState::Succeeded, None) => {
            let reference = wizard
                .last_submission_id
                .as_deref()
                .map(|id| format!(" Reference: {}", id))
                .unwrap_or_default();
            Line::from(Span::styled(
                format!(
                    "✓ Thank you! We'll get back to you within 24 hours.{}",
                    reference
                ),
                Style::default().fg(Color::Green),
            ))
        }
        _ => Line::from(""),
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(18),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "◂ Back",
        false,
        wizard.current_step > 1,
    );

    let forward = if wizard.is_submitting() {
        "Submitting..."
    } else if wizard.is_review_step() {
        "Submit"
    } else {
        "Next ▸"
    };
    render_button(frame, chunks[2], forward, true, !wizard.is_submitting());
}
