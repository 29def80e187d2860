//! Read-only summary of a quote request

use crate::state::{choice_label, feature_label, ContactFormData, FieldName};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn row(label: &str, value: &str) -> Line<'static> {
    let (value, style) = if value.is_empty() {
        ("Not provided".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (value.to_string(), Style::default().fg(Color::White))
    };
    Line::from(vec![
        Span::styled(format!("  {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, style),
    ])
}

fn choice_row(data: &ContactFormData, field: FieldName) -> Line<'static> {
    let raw = data.text(field).unwrap_or_default();
    let label = if raw.is_empty() {
        ""
    } else {
        choice_label(field, raw)
    };
    row(field.label(), label)
}

fn text_row(data: &ContactFormData, field: FieldName) -> Line<'static> {
    row(field.label(), data.text(field).unwrap_or_default())
}

/// Build the review lines for a set of form data
pub fn review_lines(data: &ContactFormData) -> Vec<Line<'static>> {
    let features = data
        .selected_features
        .iter()
        .map(|id| feature_label(id))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        section("Project"),
        choice_row(data, FieldName::ProjectType),
        row(FieldName::SelectedFeatures.label(), &features),
        text_row(data, FieldName::AdditionalFeatures),
        Line::from(""),
        section("Details"),
        choice_row(data, FieldName::Budget),
        choice_row(data, FieldName::Timeline),
        text_row(data, FieldName::ProjectBrief),
        text_row(data, FieldName::CompanyName),
        text_row(data, FieldName::CompanyWebsite),
        text_row(data, FieldName::ReferenceLinks),
        Line::from(""),
        section("Contact"),
        text_row(data, FieldName::FullName),
        text_row(data, FieldName::Email),
        text_row(data, FieldName::Phone),
        choice_row(data, FieldName::BestTimeToContact),
    ]
}

/// Draw the review step
pub fn draw_review(frame: &mut Frame, area: Rect, data: &ContactFormData) {
    let review = Paragraph::new(review_lines(data))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Review Your Request ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(review, area);
}
