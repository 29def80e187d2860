//! Application state definitions

use std::collections::VecDeque;

use super::blog::{sort_by_updated, BlogPost, PostEditor};
use super::forms::{choice_options, features_for_raw, FieldName, WizardState};
use super::submissions::{filter_and_sort, FormSubmission, SortDirection, StatusFilter};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load submissions. Please try again.";
pub const SAMPLE_DATA_NOTICE: &str = "Using sample data (API not reachable)";
pub const NO_SUBMISSIONS_MESSAGE: &str = "No submissions yet";
pub const NO_MATCHES_MESSAGE: &str = "No submissions match the selected filters";
pub const BLOG_LOAD_FAILED_MESSAGE: &str = "Failed to load blog posts. Please try again.";
pub const NO_POSTS_MESSAGE: &str = "No blog posts yet";

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Wizard,
    Dashboard,
    SubmissionDetail,
    BlogPosts,
    BlogPostDetail,
    BlogPostEditor,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Wizard => "Get a Quote",
            Self::Dashboard => "Submissions",
            Self::SubmissionDetail => "Submission",
            Self::BlogPosts => "Blog Posts",
            Self::BlogPostDetail => "Blog Post",
            Self::BlogPostEditor => "Edit Post",
        }
    }
}

/// Record a confirmed delete will remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Submission(String),
    BlogPost(String),
}

/// A delete awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub target: DeleteTarget,
    /// Name and company, or post title, shown in the dialog
    pub display: String,
    /// true when "Delete" is highlighted, false for "Cancel"
    pub confirm_selected: bool,
}

impl PendingDelete {
    pub fn message(&self) -> String {
        match self.target {
            DeleteTarget::Submission(_) => format!(
                "Delete the submission from {}? This cannot be undone.",
                self.display
            ),
            DeleteTarget::BlogPost(_) => {
                format!("Delete the post \"{}\"? This cannot be undone.", self.display)
            }
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Wizard
    pub wizard: WizardState,
    /// Index into the current step's fields
    pub active_form_field: usize,
    /// Highlighted option of the focused choice or checklist field
    pub option_cursor: usize,

    // Dashboard
    pub submissions: Vec<FormSubmission>,
    pub status_filter: StatusFilter,
    pub sort_direction: SortDirection,
    pub selected_index: usize,
    pub selected_submission_id: Option<String>,
    pub scroll_offset: usize,
    pub loaded: bool,
    pub loading: bool,
    pub notice: Option<String>,
    pub pending_delete: Option<PendingDelete>,

    // Blog
    pub posts: Vec<BlogPost>,
    pub posts_loaded: bool,
    pub posts_loading: bool,
    pub post_index: usize,
    pub selected_post_id: Option<String>,
    pub post_editor: Option<PostEditor>,

    // Errors shown one at a time in a modal dialog
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Keep the selection inside the visible list
    pub fn clamp_selection(&mut self) {
        let len = self.visible_submissions().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Submissions after the active filter and sort
    pub fn visible_submissions(&self) -> Vec<&FormSubmission> {
        filter_and_sort(&self.submissions, self.status_filter, self.sort_direction)
    }

    /// Highlighted row in the list
    pub fn highlighted_submission(&self) -> Option<&FormSubmission> {
        self.visible_submissions().get(self.selected_index).copied()
    }

    /// Submission opened in the detail view
    pub fn selected_submission(&self) -> Option<&FormSubmission> {
        let id = self.selected_submission_id.as_deref()?;
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = self.status_filter.next();
        self.reset_selection();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggle();
        self.reset_selection();
    }

    /// Replace the loaded list with a fresh fetch
    pub fn set_submissions(&mut self, submissions: Vec<FormSubmission>) {
        self.submissions = submissions;
        self.loaded = true;
        self.loading = false;
        self.clamp_selection();
    }

    pub fn remove_submission(&mut self, id: &str) {
        self.submissions.retain(|s| s.id != id);
        if self.selected_submission_id.as_deref() == Some(id) {
            self.selected_submission_id = None;
        }
        self.clamp_selection();
    }

    /// "Showing X of Y submissions"
    pub fn showing_summary(&self) -> String {
        format!(
            "Showing {} of {} submissions",
            self.visible_submissions().len(),
            self.submissions.len()
        )
    }

    /// Message for an empty list, distinguishing no data from no matches
    pub fn empty_message(&self) -> &'static str {
        if self.submissions.is_empty() {
            NO_SUBMISSIONS_MESSAGE
        } else {
            NO_MATCHES_MESSAGE
        }
    }

    /// Posts in list order, most recently updated first
    pub fn visible_posts(&self) -> Vec<&BlogPost> {
        sort_by_updated(&self.posts)
    }

    pub fn highlighted_post(&self) -> Option<&BlogPost> {
        self.visible_posts().get(self.post_index).copied()
    }

    /// Post opened in the detail view
    pub fn selected_post(&self) -> Option<&BlogPost> {
        let id = self.selected_post_id.as_deref()?;
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn post_down(&mut self) {
        if self.post_index + 1 < self.posts.len() {
            self.post_index += 1;
        }
    }

    pub fn post_up(&mut self) {
        self.post_index = self.post_index.saturating_sub(1);
    }

    fn clamp_post_index(&mut self) {
        if self.post_index >= self.posts.len() {
            self.post_index = self.posts.len().saturating_sub(1);
        }
    }

    pub fn set_posts(&mut self, posts: Vec<BlogPost>) {
        self.posts = posts;
        self.posts_loaded = true;
        self.posts_loading = false;
        self.clamp_post_index();
    }

    /// Replace a stored post by id, or add it when new
    pub fn upsert_post(&mut self, post: BlogPost) {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post,
            None => self.posts.push(post),
        }
    }

    pub fn remove_post(&mut self, id: &str) {
        self.posts.retain(|p| p.id != id);
        if self.selected_post_id.as_deref() == Some(id) {
            self.selected_post_id = None;
        }
        self.clamp_post_index();
    }

    /// Fields of the wizard's current step
    pub fn step_fields(&self) -> &'static [FieldName] {
        self.wizard.step().fields
    }

    /// Focused wizard input, if the step has any
    pub fn active_field(&self) -> Option<FieldName> {
        self.step_fields().get(self.active_form_field).copied()
    }

    pub fn next_form_field(&mut self) {
        let count = self.step_fields().len();
        if count > 0 {
            self.active_form_field = (self.active_form_field + 1) % count;
            self.sync_option_cursor();
        }
    }

    pub fn prev_form_field(&mut self) {
        let count = self.step_fields().len();
        if count > 0 {
            self.active_form_field = (self.active_form_field + count - 1) % count;
            self.sync_option_cursor();
        }
    }

    /// Number of options offered by the focused field
    pub fn option_count(&self) -> usize {
        match self.active_field() {
            Some(FieldName::SelectedFeatures) => {
                features_for_raw(&self.wizard.form_data.project_type).len()
            }
            Some(field) if field.is_choice() => choice_options(field).len(),
            _ => 0,
        }
    }

    pub fn option_down(&mut self) {
        let count = self.option_count();
        if count > 0 && self.option_cursor < count - 1 {
            self.option_cursor += 1;
        }
    }

    pub fn option_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    /// Select the highlighted choice or toggle the highlighted feature
    pub fn activate_option(&mut self) {
        match self.active_field() {
            Some(FieldName::SelectedFeatures) => {
                let features = features_for_raw(&self.wizard.form_data.project_type);
                if let Some(feature) = features.get(self.option_cursor) {
                    self.wizard.toggle_feature(feature.id);
                }
            }
            Some(field) if field.is_choice() => {
                if let Some((value, _)) = choice_options(field).get(self.option_cursor) {
                    self.wizard.select_option(field, value);
                }
            }
            _ => {}
        }
    }

    /// Point the option cursor at the focused field's current value
    fn sync_option_cursor(&mut self) {
        self.option_cursor = match self.active_field() {
            Some(field) if field.is_choice() => {
                let current = self.wizard.form_data.text(field).unwrap_or_default();
                choice_options(field)
                    .iter()
                    .position(|(value, _)| *value == current)
                    .unwrap_or(0)
            }
            _ => 0,
        };
    }

    /// Focus the first input of the current step
    pub fn reset_wizard_focus(&mut self) {
        self.active_form_field = 0;
        self.sync_option_cursor();
    }

    pub fn wizard_next(&mut self) {
        let before = self.wizard.current_step;
        self.wizard.next();
        if self.wizard.current_step != before {
            self.reset_wizard_focus();
        }
    }

    pub fn wizard_previous(&mut self) {
        let before = self.wizard.current_step;
        self.wizard.previous();
        if self.wizard.current_step != before {
            self.reset_wizard_focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::fixtures::valid_form_data;
    use crate::state::blog::{sample_post, PostStatus};
    use crate::state::submissions::SubmissionStatus;
    use pretty_assertions::assert_eq;

    fn submission(id: &str, status: SubmissionStatus, submitted_at: &str) -> FormSubmission {
        FormSubmission {
            id: id.to_string(),
            data: valid_form_data(),
            status,
            notes: String::new(),
            submitted_at: submitted_at.to_string(),
            updated_at: submitted_at.to_string(),
            created_at: submitted_at.to_string(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_submissions(vec![
            submission("a", SubmissionStatus::New, "2024-03-01T09:00:00Z"),
            submission("b", SubmissionStatus::Contacted, "2024-03-02T09:00:00Z"),
            submission("c", SubmissionStatus::New, "2024-03-03T09:00:00Z"),
        ]);
        state
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_visible_submissions_default_newest_first() {
        let state = loaded_state();
        let ids: Vec<_> = state.visible_submissions().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(state.showing_summary(), "Showing 3 of 3 submissions");
    }

    #[test]
    fn test_cycle_filter_resets_selection() {
        let mut state = loaded_state();
        state.selected_index = 2;
        state.cycle_status_filter();
        assert_eq!(state.status_filter, StatusFilter::Only(SubmissionStatus::New));
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.showing_summary(), "Showing 2 of 3 submissions");
    }

    #[test]
    fn test_empty_message_distinguishes_filters() {
        let mut state = AppState::default();
        assert_eq!(state.empty_message(), NO_SUBMISSIONS_MESSAGE);
        state = loaded_state();
        state.status_filter = StatusFilter::Only(SubmissionStatus::Archived);
        assert!(state.visible_submissions().is_empty());
        assert_eq!(state.empty_message(), NO_MATCHES_MESSAGE);
    }

    #[test]
    fn test_remove_submission_clamps_selection() {
        let mut state = loaded_state();
        state.selected_index = 2;
        state.selected_submission_id = Some("a".to_string());
        state.remove_submission("a");
        assert_eq!(state.submissions.len(), 2);
        assert_eq!(state.selected_index, 1);
        assert!(state.selected_submission_id.is_none());
    }

    #[test]
    fn test_highlighted_follows_sorted_order() {
        let mut state = loaded_state();
        state.move_selection_down(3);
        assert_eq!(state.highlighted_submission().map(|s| s.id.as_str()), Some("b"));
        state.toggle_sort_direction();
        assert_eq!(state.highlighted_submission().map(|s| s.id.as_str()), Some("a"));
    }

    #[test]
    fn test_activate_option_selects_project_type() {
        let mut state = AppState::default();
        assert_eq!(state.active_field(), Some(FieldName::ProjectType));
        assert_eq!(state.option_count(), 6);
        state.option_down();
        state.option_down();
        state.activate_option();
        assert_eq!(state.wizard.form_data.project_type, "cms");
    }

    #[test]
    fn test_feature_checklist_needs_project_type() {
        let mut state = AppState::default();
        state.wizard.current_step = 2;
        state.reset_wizard_focus();
        assert_eq!(state.active_field(), Some(FieldName::SelectedFeatures));
        assert_eq!(state.option_count(), 0);

        state.wizard.select_option(FieldName::ProjectType, "ecommerce");
        assert_eq!(state.option_count(), 9);
        state.option_down();
        state.activate_option();
        state.activate_option();
        assert!(state.wizard.form_data.selected_features.is_empty());
        state.activate_option();
        assert_eq!(state.wizard.form_data.selected_features, vec!["shopping-cart"]);
    }

    #[test]
    fn test_field_focus_wraps() {
        let mut state = AppState::default();
        state.wizard.current_step = 4;
        state.reset_wizard_focus();
        state.prev_form_field();
        assert_eq!(state.active_field(), Some(FieldName::BestTimeToContact));
        state.next_form_field();
        assert_eq!(state.active_field(), Some(FieldName::FullName));
    }

    #[test]
    fn test_focusing_choice_points_cursor_at_value() {
        let mut state = AppState::default();
        state.wizard.current_step = 3;
        state.wizard.select_option(FieldName::Timeline, "1-2-months");
        state.reset_wizard_focus();
        state.next_form_field();
        assert_eq!(state.active_field(), Some(FieldName::Timeline));
        assert_eq!(state.option_cursor, 3);
    }

    #[test]
    fn test_wizard_next_resets_focus_on_advance() {
        let mut state = AppState::default();
        state.wizard.form_data = valid_form_data();
        state.wizard.current_step = 3;
        state.active_form_field = 4;
        state.wizard_next();
        assert_eq!(state.wizard.current_step, 4);
        assert_eq!(state.active_form_field, 0);
    }

    #[test]
    fn test_review_step_has_no_inputs() {
        let mut state = AppState::default();
        state.wizard.current_step = 5;
        assert_eq!(state.active_field(), None);
        state.next_form_field();
        assert_eq!(state.active_form_field, 0);
    }

    #[test]
    fn test_posts_list_newest_update_first() {
        let mut state = AppState::default();
        state.set_posts(vec![
            sample_post("a", "A", PostStatus::Draft, "2026-01-01T00:00:00Z"),
            sample_post("b", "B", PostStatus::Published, "2026-02-01T00:00:00Z"),
        ]);
        assert!(state.posts_loaded);
        assert_eq!(state.highlighted_post().map(|p| p.id.as_str()), Some("b"));
        state.post_down();
        state.post_down();
        assert_eq!(state.highlighted_post().map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn test_upsert_post_replaces_by_id() {
        let mut state = AppState::default();
        state.set_posts(vec![sample_post("a", "A", PostStatus::Draft, "")]);
        state.upsert_post(sample_post("a", "A", PostStatus::Published, ""));
        state.upsert_post(sample_post("b", "B", PostStatus::Draft, ""));
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.posts[0].status, PostStatus::Published);
    }

    #[test]
    fn test_remove_post_clears_selection() {
        let mut state = AppState::default();
        state.set_posts(vec![
            sample_post("a", "A", PostStatus::Draft, ""),
            sample_post("b", "B", PostStatus::Draft, ""),
        ]);
        state.post_index = 1;
        state.selected_post_id = Some("b".to_string());
        state.remove_post("b");
        assert_eq!(state.post_index, 0);
        assert!(state.selected_post().is_none());
    }

    #[test]
    fn test_delete_message_names_the_record() {
        let pending = PendingDelete {
            target: DeleteTarget::BlogPost("p1".to_string()),
            display: "Launch Day".to_string(),
            confirm_selected: false,
        };
        assert_eq!(
            pending.message(),
            "Delete the post \"Launch Day\"? This cannot be undone."
        );
    }
}
