//! Field rendering utilities for the quote form

use crate::state::FieldName;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, including borders and the error line
pub fn field_height(field: FieldName, is_active: bool, option_count: usize) -> u16 {
    let body = if field.is_choice() || field.is_list() {
        if is_active {
            option_count.max(1) as u16
        } else {
            1
        }
    } else if field.is_multiline() {
        3
    } else {
        1
    };
    body + 2
}

/// Label and shape of a free-text input
#[derive(Debug, Clone, Copy)]
pub struct InputSpec<'a> {
    pub label: &'a str,
    pub required: bool,
    pub multiline: bool,
}

impl From<FieldName> for InputSpec<'static> {
    fn from(field: FieldName) -> Self {
        Self {
            label: field.label(),
            required: field.is_required(),
            multiline: field.is_multiline(),
        }
    }
}

fn field_block(input: InputSpec, is_active: bool, error: Option<&str>) -> Block<'static> {
    let border_color = if error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .title(if input.required {
            format!(" {} * ", input.label)
        } else {
            format!(" {} ", input.label)
        })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a quote form text field
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    draw_text_input(frame, area, field.into(), value, is_active, error);
}

/// Draw a free-text input with a cursor when focused
pub fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    input: InputSpec,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if input.multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        // Keep the end of long input in view
        let visible = area.height.saturating_sub(2) as usize;
        if lines.len() > visible {
            lines.drain(..lines.len() - visible);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(input, is_active, error);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a single-select field. Expanded to the full option list when focused.
#[allow(clippy::too_many_arguments)]
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    options: &[(&str, &str)],
    selected: &str,
    cursor: usize,
    is_active: bool,
    error: Option<&str>,
) {
    let lines: Vec<Line> = if is_active {
        options
            .iter()
            .enumerate()
            .map(|(idx, (value, label))| {
                let is_chosen = *value == selected;
                let marker = if is_chosen { "(●) " } else { "( ) " };
                let prefix = if idx == cursor { "▸ " } else { "  " };
                let style = if idx == cursor {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if is_chosen {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(format!("{prefix}{marker}{label}"), style))
            })
            .collect()
    } else {
        let label = options
            .iter()
            .find(|(value, _)| *value == selected)
            .map(|(_, label)| *label);
        let line = match label {
            Some(label) => Span::styled(label.to_string(), Style::default().fg(Color::Green)),
            None => Span::styled("(not selected)", Style::default().fg(Color::DarkGray)),
        };
        vec![Line::from(line)]
    };

    let block = field_block(field.into(), is_active, error);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the feature checklist
pub fn draw_checklist_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    options: &[(&str, &str)],
    checked: &[String],
    cursor: usize,
    is_active: bool,
) {
    let lines: Vec<Line> = if options.is_empty() {
        vec![Line::from(Span::styled(
            "Choose a project type first",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if is_active {
        options
            .iter()
            .enumerate()
            .map(|(idx, (id, label))| {
                let is_checked = checked.iter().any(|c| c == id);
                let marker = if is_checked { "[x] " } else { "[ ] " };
                let prefix = if idx == cursor { "▸ " } else { "  " };
                let style = if idx == cursor {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if is_checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(format!("{prefix}{marker}{label}"), style))
            })
            .collect()
    } else {
        let summary = if checked.is_empty() {
            "(none selected)".to_string()
        } else {
            format!("{} selected", checked.len())
        };
        vec![Line::from(Span::styled(summary, Style::default().fg(Color::Gray)))]
    };

    let block = field_block(field.into(), is_active, None);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
