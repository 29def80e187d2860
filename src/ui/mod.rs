//! UI module for rendering the TUI

mod blog;
mod components;
mod forms;
mod layout;
mod submissions;
mod widgets;

pub use widgets::render_scrollable_list;

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (title_area, main_area) = layout::create_layout(area);
    layout::draw_title_bar(frame, title_area, app);

    match app.state.current_view {
        View::Wizard => forms::draw_wizard(frame, main_area, app),
        View::Dashboard => submissions::draw_list(frame, main_area, app),
        View::SubmissionDetail => submissions::draw_detail(frame, main_area, app),
        View::BlogPosts => blog::draw_posts(frame, main_area, app),
        View::BlogPostDetail => blog::draw_post_detail(frame, main_area, app),
        View::BlogPostEditor => blog::draw_post_editor(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays: delete confirmation, then the front of the error queue
    if let Some(pending) = &app.state.pending_delete {
        render_confirm_dialog(frame, pending);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.error_queue.len());
    }
}
