//! Submissions dashboard: filtered list and detail views

use super::forms::review_lines;
use super::render_scrollable_list;
use crate::app::App;
use crate::state::{choice_label, status_counts, FieldName, FormSubmission, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn status_color(status: SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::New => Color::Cyan,
        SubmissionStatus::Contacted => Color::Yellow,
        SubmissionStatus::InProgress => Color::Blue,
        SubmissionStatus::Completed => Color::Green,
        SubmissionStatus::Archived => Color::DarkGray,
    }
}

/// Local date and time, or the raw value when it doesn't parse
fn format_submitted(submission: &FormSubmission) -> String {
    match submission.submitted_time() {
        Some(time) => time
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => submission.submitted_at.clone(),
    }
}

/// Pad or cut to exactly `width` chars
pub(super) fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

fn choice_text(field: FieldName, raw: &str) -> &str {
    if raw.is_empty() {
        "-"
    } else {
        choice_label(field, raw)
    }
}

/// Draw the submissions list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;

    let block = Block::default()
        .title(format!(" Submissions ({}) ", state.submissions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Header: filter, sort, per-status counts, summary
    let mut counts = Vec::new();
    for (status, count) in status_counts(&state.submissions) {
        if !counts.is_empty() {
            counts.push(Span::raw("  "));
        }
        counts.push(Span::styled(
            format!("{}: {}", status.label(), count),
            Style::default().fg(status_color(status)),
        ));
    }

    let mut summary = vec![Span::styled(
        state.showing_summary(),
        Style::default().fg(Color::Gray),
    )];
    if let Some(notice) = &state.notice {
        summary.push(Span::raw(" | "));
        summary.push(Span::styled(notice, Style::default().fg(Color::Yellow)));
    }

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("Filter: {}", state.status_filter.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(" [f]", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled(
                format!(
                    "Sort: {} {}",
                    state.sort_direction.label(),
                    state.sort_direction.symbol()
                ),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(" [s]", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(counts),
        Line::from(summary),
    ]);
    frame.render_widget(header, chunks[0]);

    if state.loading && !state.loaded {
        let content = Paragraph::new("Loading submissions...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(content, chunks[1]);
        return;
    }

    let visible = state.visible_submissions();
    if visible.is_empty() {
        let content = Paragraph::new(state.empty_message())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, submission)| {
            let is_selected = idx == state.selected_index;
            let data = &submission.data;
            let text_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let company = if data.company_name.is_empty() {
                "-"
            } else {
                data.company_name.as_str()
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", fit(&format_submitted(submission), 16)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", fit(submission.status.label(), 11)),
                    Style::default().fg(status_color(submission.status)),
                ),
                Span::styled(format!("{} ", fit(&data.full_name, 20)), text_style),
                Span::styled(
                    format!("{} ", fit(company, 18)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!(
                        "{} ",
                        fit(choice_text(FieldName::ProjectType, &data.project_type), 18)
                    ),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    choice_text(FieldName::Budget, &data.budget),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    render_scrollable_list(frame, chunks[1], list, state.selected_index);
}

/// Draw one submission with status, timestamps and notes
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(submission) = app.state.selected_submission() else {
        let message = Paragraph::new("Submission not found")
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .title(" Submission ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(message, area);
        return;
    };

    let title = if submission.data.company_name.is_empty() {
        format!(" {} ", submission.data.full_name)
    } else {
        format!(
            " {} - {} ",
            submission.data.full_name, submission.data.company_name
        )
    };

    let mut content = vec![
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                submission.status.label(),
                Style::default()
                    .fg(status_color(submission.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
            Span::styled(submission.id.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Submitted: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_submitted(submission)),
        ]),
        Line::from(""),
    ];

    content.extend(review_lines(&submission.data));

    if !submission.notes.is_empty() {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "Notes",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for line in submission.notes.lines() {
            content.push(Line::from(format!("  {}", line)));
        }
    }

    let detail = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(detail, area);
}
