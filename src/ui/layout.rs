//! Layout components (title bar, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const QUIT_HINT: &str = " ^C:quit ";

/// Split the screen into title bar and main content, reserving the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the title bar
pub fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            " Quote Request ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.state.current_view.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", view_hints(app.state.current_view)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        &app.api_base_url,
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_width = (QUIT_HINT.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: status_area.y,
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(view: View) -> &'static str {
    match view {
        View::Wizard => "F2:submissions  F3:blog  ^Q:quit",
        View::Dashboard => {
            "j/k:nav  Enter:view  f:filter  s:sort  r:reload  d:delete  b:blog  Esc:back"
        }
        View::SubmissionDetail => "j/k:scroll  d:delete  Esc:back",
        View::BlogPosts => {
            "j/k:nav  Enter:view  n:new  e:edit  p:publish  a:archive  d:delete  r:reload  Esc:back"
        }
        View::BlogPostDetail => "j/k:scroll  e:edit  p:publish  a:archive  d:delete  Esc:back",
        View::BlogPostEditor => "Tab:field  ^T:status  ^S:save  Esc:cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_title_and_status_rows() {
        let (title, main) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(title, Rect::new(0, 0, 80, 1));
        assert_eq!(main, Rect::new(0, 1, 80, 22));
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in [
            View::Wizard,
            View::Dashboard,
            View::SubmissionDetail,
            View::BlogPosts,
            View::BlogPostDetail,
            View::BlogPostEditor,
        ] {
            assert!(view_hints(view).contains(':'));
        }
    }
}
