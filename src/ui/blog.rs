//! Blog admin: post list, post detail and the post editor

use super::forms::{draw_help_text, draw_text_input, InputSpec};
use super::render_scrollable_list;
use super::submissions::fit;
use crate::app::App;
use crate::state::{post_status_counts, BlogPost, PostField, PostStatus, NO_POSTS_MESSAGE};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn status_color(status: PostStatus) -> Color {
    match status {
        PostStatus::Draft => Color::Yellow,
        PostStatus::Published => Color::Green,
        PostStatus::Archived => Color::DarkGray,
    }
}

fn format_time(time: Option<DateTime<Utc>>, raw: &str) -> String {
    match time {
        Some(time) => time
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None if raw.is_empty() => "-".to_string(),
        None => raw.to_string(),
    }
}

fn format_updated(post: &BlogPost) -> String {
    format_time(post.updated_time(), &post.updated_at)
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Draw the post list, most recently updated first
pub fn draw_posts(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let block = bordered(format!(" Blog Posts ({}) ", state.posts.len()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let mut counts = Vec::new();
    for (status, count) in post_status_counts(&state.posts) {
        if !counts.is_empty() {
            counts.push(Span::raw("  "));
        }
        counts.push(Span::styled(
            format!("{}: {}", status.label(), count),
            Style::default().fg(status_color(status)),
        ));
    }
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Sorted by last updated",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(counts),
    ]);
    frame.render_widget(header, chunks[0]);

    if state.posts_loading && !state.posts_loaded {
        let content = Paragraph::new("Loading blog posts...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(content, chunks[1]);
        return;
    }

    let visible = state.visible_posts();
    if visible.is_empty() {
        let content = Paragraph::new(NO_POSTS_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, post)| {
            let text_style = if idx == state.post_index {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", fit(&format_updated(post), 16)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", fit(post.status.label(), 10)),
                    Style::default().fg(status_color(post.status)),
                ),
                Span::styled(format!("{} ", fit(&post.title, 40)), text_style),
                Span::styled(format!("/{}", post.slug), Style::default().fg(Color::Blue)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    render_scrollable_list(frame, chunks[1], list, state.post_index);
}

fn meta_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draw one post with its metadata, excerpt and body
pub fn draw_post_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(post) = app.state.selected_post() else {
        let message = Paragraph::new("Post not found")
            .style(Style::default().fg(Color::Red))
            .block(bordered(" Blog Post ".to_string()));
        frame.render_widget(message, area);
        return;
    };

    let tags = if post.tags.is_empty() {
        "-".to_string()
    } else {
        post.tags.join(", ")
    };

    let mut content = vec![
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                post.status.label(),
                Style::default()
                    .fg(status_color(post.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        meta_line("Slug", format!("/{}", post.slug)),
        meta_line("Author", post.author_or_default().to_string()),
        meta_line("Tags", tags),
        meta_line(
            "Published",
            format_time(post.published_time(), post.published_at.as_deref().unwrap_or("")),
        ),
        meta_line("Updated", format_updated(post)),
    ];
    if let Some(cover) = &post.cover_image {
        content.push(meta_line("Cover", cover.clone()));
    }

    content.push(Line::from(""));
    content.push(heading("Excerpt"));
    content.extend(post.excerpt.lines().map(|l| Line::from(format!("  {}", l))));
    content.push(Line::from(""));
    content.push(heading("Content"));
    content.extend(post.content.lines().map(|l| Line::from(format!("  {}", l))));

    let detail = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset.min(u16::MAX as usize) as u16, 0))
        .block(bordered(format!(" {} ", post.title)));
    frame.render_widget(detail, area);
}

fn input_spec(field: PostField) -> InputSpec<'static> {
    InputSpec {
        label: field.label(),
        required: field.is_required(),
        multiline: field.is_multiline(),
    }
}

/// Draw the editor for a new or existing post
pub fn draw_post_editor(frame: &mut Frame, area: Rect, app: &App) {
    let Some(editor) = &app.state.post_editor else {
        let message = Paragraph::new("No post open")
            .style(Style::default().fg(Color::Red))
            .block(bordered(" Edit Post ".to_string()));
        frame.render_widget(message, area);
        return;
    };

    let rows: Vec<Constraint> = std::iter::once(Constraint::Length(1))
        .chain(PostField::ALL.iter().map(|field| match field {
            PostField::Content => Constraint::Min(5),
            PostField::Excerpt => Constraint::Length(5),
            _ => Constraint::Length(3),
        }))
        .chain([Constraint::Length(1), Constraint::Length(1)])
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(area);

    let heading = if editor.is_new() { "New post" } else { "Editing post" };
    let status_line = Line::from(vec![
        Span::styled(
            format!("{}  ", heading),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            editor.status.label(),
            Style::default().fg(status_color(editor.status)),
        ),
        Span::styled(" [^T]  ", Style::default().fg(Color::DarkGray)),
        Span::styled("URL: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("/{}", editor.effective_slug()),
            Style::default().fg(Color::Blue),
        ),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[0]);

    let active = editor.active_field();
    for (idx, field) in PostField::ALL.iter().enumerate() {
        draw_text_input(
            frame,
            chunks[idx + 1],
            input_spec(*field),
            editor.value(*field),
            *field == active,
            None,
        );
    }

    let feedback_area = chunks[PostField::ALL.len() + 1];
    if let Some(error) = &editor.error {
        let feedback = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(feedback, feedback_area);
    }

    draw_help_text(
        frame,
        chunks[PostField::ALL.len() + 2],
        "Tab:next field  Enter:newline in excerpt/content  ^T:status  ^S:save  Esc:cancel",
    );
}
