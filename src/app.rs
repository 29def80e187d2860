//! Application state and core logic

use crate::api::{ApiClient, ApiClientTrait, ApiError};
use crate::config::QuoteConfig;
use crate::state::{
    sample_submissions, AppState, BlogPost, BlogPostUpdate, DeleteTarget, FieldName,
    PendingDelete, PostEditor, PostStatus, SubmissionState, View, BLOG_LOAD_FAILED_MESSAGE,
    FIRST_STEP, LOAD_FAILED_MESSAGE, SAMPLE_DATA_NOTICE,
};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{error, info, warn};

const DELETE_FAILED_MESSAGE: &str = "Failed to delete submission. Please try again.";
const POST_SAVE_FAILED_MESSAGE: &str = "Failed to save post. Please try again.";
const POST_UPDATE_FAILED_MESSAGE: &str = "Failed to update post. Please try again.";
const POST_DELETE_FAILED_MESSAGE: &str = "Failed to delete post. Please try again.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the quote API
    api: Box<dyn ApiClientTrait>,
    config: QuoteConfig,
    /// Base URL shown in the status bar
    pub api_base_url: String,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App talking to the configured API
    pub fn new(config: QuoteConfig) -> Result<Self> {
        let options = config.api_options();
        let client = ApiClient::new(&options)?;
        info!(base_url = client.base_url(), "using quote API");
        let base_url = client.base_url().to_string();
        Ok(Self::with_client(config, Box::new(client), base_url))
    }

    /// Create an App around any client implementation
    pub fn with_client(
        config: QuoteConfig,
        api: Box<dyn ApiClientTrait>,
        api_base_url: String,
    ) -> Self {
        let state = AppState {
            status_filter: config.status_filter(),
            sort_direction: config.sort_direction(),
            ..AppState::default()
        };

        Self {
            state,
            api,
            config,
            api_base_url,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether a submit or load is queued for the next tick
    pub fn has_pending_work(&self) -> bool {
        self.state.wizard.has_queued_submit() || self.state.loading || self.state.posts_loading
    }

    /// Run the network work queued by key handling.
    ///
    /// Called after a draw so the "Submitting..." and "Loading..." states are
    /// visible while the request is in flight.
    pub async fn flush_pending(&mut self) {
        if self.state.wizard.has_queued_submit() {
            self.state.wizard.submit(self.api.as_ref()).await;
            if self.state.wizard.status == SubmissionState::Succeeded {
                self.state.reset_wizard_focus();
                self.status_message = Some("Quote request sent".to_string());
            }
        }

        if self.state.loading {
            self.load_submissions().await;
        }

        if self.state.posts_loading {
            self.load_posts().await;
        }
    }

    /// Fetch submissions, falling back to sample data when configured
    pub async fn load_submissions(&mut self) {
        self.state.notice = None;
        match self.api.list_submissions().await {
            Ok(submissions) => {
                self.state.set_submissions(submissions);
            }
            Err(err) => {
                error!(error = %err, "failed to load submissions");
                if self.config.use_sample_data() {
                    warn!("falling back to sample submissions");
                    self.state.set_submissions(sample_submissions(Utc::now()));
                    self.state.notice = Some(SAMPLE_DATA_NOTICE.to_string());
                } else {
                    self.state.loading = false;
                    self.push_error(LOAD_FAILED_MESSAGE);
                }
            }
        }
    }

    /// Delete a submission and drop it from the local list on success
    pub async fn delete_submission(&mut self, id: &str) {
        match self.api.delete_submission(id).await {
            Ok(()) => {
                self.state.remove_submission(id);
                if self.state.current_view == View::SubmissionDetail {
                    self.go_back();
                }
                self.status_message = Some("Submission deleted".to_string());
            }
            Err(err) => {
                error!(id, error = %err, "failed to delete submission");
                self.push_error(DELETE_FAILED_MESSAGE);
            }
        }
    }

    /// Fetch every blog post for the admin list
    pub async fn load_posts(&mut self) {
        match self.api.list_blog_posts().await {
            Ok(posts) => self.state.set_posts(posts),
            Err(err) => {
                error!(error = %err, "failed to load blog posts");
                self.state.posts_loading = false;
                self.push_error(BLOG_LOAD_FAILED_MESSAGE);
            }
        }
    }

    /// Create or update the post held by the editor.
    ///
    /// Local validation failures and rejected saves stay in the editor so
    /// nothing typed is lost.
    pub async fn save_post(&mut self) {
        let Some(editor) = self.state.post_editor.clone() else {
            return;
        };

        let outcome = match editor.post_id.as_deref() {
            None => match editor.to_new_post() {
                Ok(new_post) => self.api.create_blog_post(&new_post).await,
                Err(message) => return self.set_editor_error(message),
            },
            Some(id) => match editor.to_update() {
                Ok(update) => self.api.update_blog_post(id, &update).await,
                Err(message) => return self.set_editor_error(message),
            },
        };

        match outcome {
            Ok(post) => {
                self.state.selected_post_id = Some(post.id.clone());
                self.state.upsert_post(post);
                self.state.post_editor = None;
                self.go_back();
                let message = if editor.is_new() { "Post created" } else { "Post saved" };
                self.status_message = Some(message.to_string());
            }
            Err(err) => {
                error!(error = %err, "failed to save blog post");
                let message = match err {
                    ApiError::Status { status: 400..=499, message } => message,
                    _ => POST_SAVE_FAILED_MESSAGE.to_string(),
                };
                self.set_editor_error(message);
            }
        }
    }

    fn set_editor_error(&mut self, message: String) {
        if let Some(editor) = self.state.post_editor.as_mut() {
            editor.error = Some(message);
        }
    }

    /// Move a post to a new status, e.g. publish or archive it
    pub async fn set_post_status(&mut self, id: &str, status: PostStatus) {
        match self
            .api
            .update_blog_post(id, &BlogPostUpdate::status(status))
            .await
        {
            Ok(post) => {
                self.state.upsert_post(post);
                let message = match status {
                    PostStatus::Draft => "Post moved to drafts",
                    PostStatus::Published => "Post published",
                    PostStatus::Archived => "Post archived",
                };
                self.status_message = Some(message.to_string());
            }
            Err(err) => {
                error!(id, error = %err, "failed to update blog post status");
                self.push_error(POST_UPDATE_FAILED_MESSAGE);
            }
        }
    }

    pub async fn delete_post(&mut self, id: &str) {
        match self.api.delete_blog_post(id).await {
            Ok(()) => {
                self.state.remove_post(id);
                if self.state.current_view == View::BlogPostDetail {
                    self.go_back();
                }
                self.status_message = Some("Post deleted".to_string());
            }
            Err(err) => {
                error!(id, error = %err, "failed to delete blog post");
                self.push_error(POST_DELETE_FAILED_MESSAGE);
            }
        }
    }

    /// Persist dashboard preferences for the next session
    pub fn save_preferences(&mut self) {
        self.config.status_filter = Some(self.state.status_filter.as_str().to_string());
        self.config.sort_direction = Some(self.state.sort_direction.as_str().to_string());
        if let Err(err) = self.config.save() {
            warn!(error = %err, "failed to save preferences");
        }
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_delete_dialog_key(key).await;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('q') {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view {
            View::Wizard => self.handle_wizard_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
            View::SubmissionDetail => self.handle_detail_key(key),
            View::BlogPosts => self.handle_blog_key(key).await,
            View::BlogPostDetail => self.handle_post_detail_key(key).await,
            View::BlogPostEditor => self.handle_editor_key(key).await,
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
        }
    }

    fn open_dashboard(&mut self) {
        self.navigate(View::Dashboard);
        if !self.state.loaded {
            self.state.loading = true;
        }
    }

    fn open_blog(&mut self) {
        self.navigate(View::BlogPosts);
        if !self.state.posts_loaded {
            self.state.posts_loading = true;
        }
    }

    fn open_editor(&mut self, editor: PostEditor) {
        self.state.post_editor = Some(editor);
        self.navigate(View::BlogPostEditor);
    }

    /// Handle keys in the wizard
    fn handle_wizard_key(&mut self, key: KeyEvent) {
        if self.state.wizard.is_submitting() {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let field = self.state.active_field();
        let is_option_field =
            field.is_some_and(|f| f.is_choice() || f == FieldName::SelectedFeatures);

        match key.code {
            KeyCode::F(2) => self.open_dashboard(),
            KeyCode::F(3) => self.open_blog(),
            KeyCode::Char('n') if ctrl => self.state.wizard_next(),
            KeyCode::Char('p') if ctrl => self.state.wizard_previous(),
            KeyCode::Char('s') if ctrl => self.queue_submit(),
            KeyCode::Char('r') if ctrl => {
                let wizard = &self.state.wizard;
                if !wizard.form_data.is_empty() || wizard.current_step != FIRST_STEP {
                    self.state.wizard.reset();
                    self.state.reset_wizard_focus();
                    self.status_message = Some("Form cleared".to_string());
                }
            }
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Esc => self.state.wizard_previous(),
            KeyCode::Down if is_option_field => self.state.option_down(),
            KeyCode::Up if is_option_field => self.state.option_up(),
            KeyCode::Enter | KeyCode::Char(' ') if is_option_field => {
                self.state.activate_option()
            }
            KeyCode::Enter => match field {
                Some(f) if f.is_multiline() => self.state.wizard.push_char(f, '\n'),
                _ if self.state.wizard.is_review_step() => self.queue_submit(),
                _ => self.state.wizard_next(),
            },
            KeyCode::Backspace => {
                if let Some(f) = field {
                    self.state.wizard.pop_char(f);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(f) = field.filter(|_| !is_option_field) {
                    self.state.wizard.push_char(f, c);
                }
            }
            _ => {}
        }
    }

    fn queue_submit(&mut self) {
        if !self.state.wizard.is_review_step() {
            return;
        }
        self.state.wizard.begin_submit();
    }

    /// Handle keys in the submissions list
    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.state.visible_submissions().len();
                self.state.move_selection_down(len);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => {
                let id = self.state.highlighted_submission().map(|s| s.id.clone());
                if let Some(id) = id {
                    self.state.selected_submission_id = Some(id);
                    self.state.scroll_offset = 0;
                    self.navigate(View::SubmissionDetail);
                }
            }
            KeyCode::Char('f') => self.state.cycle_status_filter(),
            KeyCode::Char('s') => self.state.toggle_sort_direction(),
            KeyCode::Char('r') => self.state.loading = true,
            KeyCode::Char('d') => {
                let target = self.state.highlighted_submission().map(|s| s.id.clone());
                if let Some(id) = target {
                    self.start_delete(id);
                }
            }
            KeyCode::Char('b') => self.open_blog(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc | KeyCode::F(1) => self.go_back(),
            _ => {}
        }
    }

    /// Handle keys in the submission detail view
    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') => {
                if let Some(id) = self.state.selected_submission_id.clone() {
                    self.start_delete(id);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    fn start_delete(&mut self, id: String) {
        let display = self
            .state
            .submissions
            .iter()
            .find(|s| s.id == id)
            .map(|s| {
                if s.data.company_name.is_empty() {
                    s.data.full_name.clone()
                } else {
                    format!("{} ({})", s.data.full_name, s.data.company_name)
                }
            })
            .unwrap_or_else(|| id.clone());

        self.state.pending_delete = Some(PendingDelete {
            target: DeleteTarget::Submission(id),
            display,
            confirm_selected: false,
        });
    }

    /// Handle keys in the blog post list
    async fn handle_blog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.post_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.post_up(),
            KeyCode::Enter => {
                let id = self.state.highlighted_post().map(|p| p.id.clone());
                if let Some(id) = id {
                    self.state.selected_post_id = Some(id);
                    self.state.scroll_offset = 0;
                    self.navigate(View::BlogPostDetail);
                }
            }
            KeyCode::Char('n') => self.open_editor(PostEditor::new()),
            KeyCode::Char('r') => self.state.posts_loading = true,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc | KeyCode::F(1) => self.go_back(),
            code => {
                let post = self.state.highlighted_post().cloned();
                if let Some(post) = post {
                    self.post_action(code, post).await;
                }
            }
        }
    }

    /// Handle keys in the blog post detail view
    async fn handle_post_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            code => {
                let post = self.state.selected_post().cloned();
                if let Some(post) = post {
                    self.post_action(code, post).await;
                }
            }
        }
    }

    /// Edit, publish, archive and delete act on the same post from list or detail
    async fn post_action(&mut self, code: KeyCode, post: BlogPost) {
        match code {
            KeyCode::Char('e') => self.open_editor(PostEditor::from_post(&post)),
            KeyCode::Char('p') => {
                let status = post.status.toggled_publish();
                self.set_post_status(&post.id, status).await
            }
            KeyCode::Char('a') if post.status != PostStatus::Archived => {
                self.set_post_status(&post.id, PostStatus::Archived).await
            }
            KeyCode::Char('d') => {
                self.state.pending_delete = Some(PendingDelete {
                    target: DeleteTarget::BlogPost(post.id),
                    display: post.title,
                    confirm_selected: false,
                });
            }
            _ => {}
        }
    }

    /// Handle keys in the post editor
    async fn handle_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('s') {
            self.save_post().await;
            return;
        }

        let Some(editor) = self.state.post_editor.as_mut() else {
            self.go_back();
            return;
        };

        match key.code {
            KeyCode::Char('t') if ctrl => editor.cycle_status(),
            KeyCode::Tab => editor.next_field(),
            KeyCode::BackTab => editor.prev_field(),
            KeyCode::Enter if editor.active_field().is_multiline() => editor.push_char('\n'),
            KeyCode::Enter => editor.next_field(),
            KeyCode::Backspace => editor.pop_char(),
            KeyCode::Char(c) if !ctrl => editor.push_char(c),
            KeyCode::Esc => {
                self.state.post_editor = None;
                self.go_back();
            }
            _ => {}
        }
    }

    async fn confirm_delete(&mut self, target: DeleteTarget) {
        match target {
            DeleteTarget::Submission(id) => self.delete_submission(&id).await,
            DeleteTarget::BlogPost(id) => self.delete_post(&id).await,
        }
    }

    async fn handle_delete_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                if let Some(pending) = self.state.pending_delete.as_mut() {
                    pending.confirm_selected = !pending.confirm_selected;
                }
            }
            KeyCode::Enter => {
                if let Some(pending) = self.state.pending_delete.take() {
                    if pending.confirm_selected {
                        self.confirm_delete(pending.target).await;
                    }
                }
            }
            KeyCode::Char('y') => {
                if let Some(pending) = self.state.pending_delete.take() {
                    self.confirm_delete(pending.target).await;
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                self.state.pending_delete = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockApiClientTrait};
    use crate::state::forms::fixtures::valid_form_data;
    use crate::state::{
        FormSubmission, StatusFilter, SubmissionResponse, SubmissionStatus, LAST_STEP,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(mock: MockApiClientTrait, config: QuoteConfig) -> App {
        App::with_client(config, Box::new(mock), "http://test".to_string())
    }

    fn submission(id: &str, submitted_at: &str) -> FormSubmission {
        FormSubmission {
            id: id.to_string(),
            data: valid_form_data(),
            status: SubmissionStatus::New,
            notes: String::new(),
            submitted_at: submitted_at.to_string(),
            updated_at: submitted_at.to_string(),
            created_at: submitted_at.to_string(),
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_wizard() {
            let app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            assert_eq!(app.state.current_view, View::Wizard);
            assert!(!app.should_quit());
            assert!(!app.has_pending_work());
        }

        #[test]
        fn test_config_seeds_dashboard_preferences() {
            let config = QuoteConfig {
                status_filter: Some("archived".to_string()),
                sort_direction: Some("asc".to_string()),
                ..Default::default()
            };
            let app = app_with(MockApiClientTrait::new(), config);
            assert_eq!(
                app.state.status_filter,
                StatusFilter::Only(SubmissionStatus::Archived)
            );
            assert_eq!(app.state.sort_direction.as_str(), "asc");
        }

        #[tokio::test]
        async fn test_f2_opens_dashboard_and_queues_load() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            assert_eq!(app.state.current_view, View::Dashboard);
            assert!(app.state.loading);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Wizard);
        }

        #[tokio::test]
        async fn test_ctrl_q_quits() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.handle_key(ctrl('q')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.push_error("boom");
            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            assert_eq!(app.state.current_view, View::Wizard);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_errors());
        }
    }

    mod wizard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_goes_to_focused_field() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.state.wizard.current_step = 4;
            app.state.reset_wizard_focus();

            for c in "Ann".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.wizard.form_data.full_name, "An");
        }

        #[tokio::test]
        async fn test_option_keys_select_project_type_and_advance() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.form_data.project_type, "landing-page");

            app.handle_key(ctrl('n')).await.unwrap();
            assert_eq!(app.state.wizard.current_step, 2);
        }

        #[tokio::test]
        async fn test_letters_do_not_type_into_choice_fields() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.wizard.form_data.project_type, "");
        }

        #[tokio::test]
        async fn test_ctrl_n_shows_errors_on_invalid_step() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.handle_key(ctrl('n')).await.unwrap();
            assert_eq!(app.state.wizard.current_step, 1);
            assert!(app.state.wizard.errors.contains(FieldName::ProjectType));
        }

        #[tokio::test]
        async fn test_submit_runs_after_flush() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_submit_form()
                .withf(|payload| payload.data.email == "jane@woodandco.com")
                .times(1)
                .returning(|_| {
                    Ok(SubmissionResponse {
                        success: true,
                        submission_id: Some("sub-9".to_string()),
                        ..SubmissionResponse::default()
                    })
                });

            let mut app = app_with(mock, QuoteConfig::default());
            app.state.wizard.form_data = valid_form_data();
            app.state.wizard.current_step = LAST_STEP;

            app.handle_key(ctrl('s')).await.unwrap();
            assert!(app.state.wizard.is_submitting());
            assert!(app.has_pending_work());

            // keys are ignored while the request is pending
            app.handle_key(ctrl('s')).await.unwrap();

            app.flush_pending().await;
            assert_eq!(app.state.wizard.status, SubmissionState::Succeeded);
            assert_eq!(app.state.wizard.last_submission_id.as_deref(), Some("sub-9"));
            assert_eq!(app.state.wizard.current_step, 1);
            assert!(!app.has_pending_work());
        }

        #[tokio::test]
        async fn test_ctrl_r_clears_entered_data() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.handle_key(ctrl('r')).await.unwrap();
            assert!(app.status_message.is_none());

            app.state.wizard.form_data = valid_form_data();
            app.state.wizard.current_step = 3;
            app.handle_key(ctrl('r')).await.unwrap();
            assert!(app.state.wizard.form_data.is_empty());
            assert_eq!(app.state.wizard.current_step, FIRST_STEP);
            assert_eq!(app.status_message.as_deref(), Some("Form cleared"));
        }

        #[tokio::test]
        async fn test_submit_outside_review_step_does_nothing() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_submit_form().times(0);

            let mut app = app_with(mock, QuoteConfig::default());
            app.state.wizard.form_data = valid_form_data();
            app.state.wizard.current_step = 3;
            app.handle_key(ctrl('s')).await.unwrap();
            app.flush_pending().await;
            assert_eq!(app.state.wizard.status, SubmissionState::NotSubmitted);
        }
    }

    mod dashboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_load_success_replaces_list() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_list_submissions().times(1).returning(|| {
                Ok(vec![
                    submission("a", "2024-03-01T09:00:00Z"),
                    submission("b", "2024-03-02T09:00:00Z"),
                ])
            });

            let mut app = app_with(mock, QuoteConfig::default());
            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            app.flush_pending().await;

            assert!(!app.state.loading);
            assert_eq!(app.state.submissions.len(), 2);
            assert_eq!(app.state.highlighted_submission().map(|s| s.id.as_str()), Some("b"));
            assert!(app.state.notice.is_none());
        }

        #[tokio::test]
        async fn test_load_failure_reports_error() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_list_submissions()
                .returning(|| Err(ApiError::Transport("refused".to_string())));

            let mut app = app_with(mock, QuoteConfig::default());
            app.load_submissions().await;

            assert_eq!(app.state.current_error(), Some(LOAD_FAILED_MESSAGE));
            assert!(app.state.submissions.is_empty());
            assert!(!app.state.loading);
        }

        #[tokio::test]
        async fn test_load_failure_falls_back_to_samples_when_enabled() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_list_submissions()
                .returning(|| Err(ApiError::Transport("refused".to_string())));

            let config = QuoteConfig {
                use_sample_data: Some(true),
                ..Default::default()
            };
            let mut app = app_with(mock, config);
            app.load_submissions().await;

            assert!(!app.state.has_errors());
            assert_eq!(app.state.submissions.len(), 2);
            assert_eq!(app.state.notice.as_deref(), Some(SAMPLE_DATA_NOTICE));
        }

        #[tokio::test]
        async fn test_delete_requires_confirmation() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_delete_submission()
                .withf(|id| id == "a")
                .times(1)
                .returning(|_| Ok(()));

            let mut app = app_with(mock, QuoteConfig::default());
            app.state.current_view = View::Dashboard;
            app.state.set_submissions(vec![submission("a", "2024-03-01T09:00:00Z")]);

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            let pending = app.state.pending_delete.clone().unwrap();
            assert_eq!(pending.target, DeleteTarget::Submission("a".to_string()));
            assert_eq!(pending.display, "Jane Doe (Wood & Co)");
            assert!(!pending.confirm_selected);

            // Enter on "Cancel" keeps the record
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.submissions.len(), 1);

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.submissions.is_empty());
            assert!(app.state.pending_delete.is_none());
            assert_eq!(app.status_message.as_deref(), Some("Submission deleted"));
        }

        #[tokio::test]
        async fn test_delete_failure_keeps_record() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_delete_submission().returning(|_| {
                Err(ApiError::Status {
                    status: 500,
                    message: "Failed to delete submission".to_string(),
                })
            });

            let mut app = app_with(mock, QuoteConfig::default());
            app.state.set_submissions(vec![submission("a", "2024-03-01T09:00:00Z")]);
            app.delete_submission("a").await;

            assert_eq!(app.state.submissions.len(), 1);
            assert_eq!(app.state.current_error(), Some(DELETE_FAILED_MESSAGE));
        }

        #[tokio::test]
        async fn test_delete_from_detail_returns_to_list() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_delete_submission().returning(|_| Ok(()));

            let mut app = app_with(mock, QuoteConfig::default());
            app.navigate(View::Dashboard);
            app.state.set_submissions(vec![submission("a", "2024-03-01T09:00:00Z")]);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::SubmissionDetail);
            assert_eq!(app.state.selected_submission().map(|s| s.id.as_str()), Some("a"));

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Dashboard);
        }

        #[tokio::test]
        async fn test_filter_and_sort_keys() {
            let mut app = app_with(MockApiClientTrait::new(), QuoteConfig::default());
            app.state.current_view = View::Dashboard;
            app.handle_key(key(KeyCode::Char('f'))).await.unwrap();
            assert_eq!(
                app.state.status_filter,
                StatusFilter::Only(SubmissionStatus::New)
            );
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            assert_eq!(app.state.sort_direction.as_str(), "asc");
            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            assert!(app.state.loading);
        }
    }

    mod blog {
        use super::*;
        use crate::state::{sample_post, POST_REQUIRED_MESSAGE};
        use pretty_assertions::assert_eq;

        fn blog_app(mock: MockApiClientTrait) -> App {
            let mut app = app_with(mock, QuoteConfig::default());
            app.navigate(View::Dashboard);
            app.navigate(View::BlogPosts);
            app.state.set_posts(vec![
                sample_post("p1", "Launch Day", PostStatus::Draft, "2026-03-01T10:00:00Z"),
                sample_post("p2", "Older News", PostStatus::Published, "2026-01-01T10:00:00Z"),
            ]);
            app
        }

        #[tokio::test]
        async fn test_b_opens_blog_and_loads_posts() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_list_blog_posts().times(1).returning(|| {
                Ok(vec![
                    sample_post("old", "Old", PostStatus::Published, "2026-01-01T00:00:00Z"),
                    sample_post("new", "New", PostStatus::Draft, "2026-04-01T00:00:00Z"),
                ])
            });

            let mut app = app_with(mock, QuoteConfig::default());
            app.state.current_view = View::Dashboard;
            app.state.loaded = true;
            app.handle_key(key(KeyCode::Char('b'))).await.unwrap();
            assert_eq!(app.state.current_view, View::BlogPosts);
            assert!(app.has_pending_work());

            app.flush_pending().await;
            assert!(!app.has_pending_work());
            assert_eq!(app.state.highlighted_post().map(|p| p.id.as_str()), Some("new"));

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Dashboard);
        }

        #[tokio::test]
        async fn test_load_failure_reports_error() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_list_blog_posts()
                .returning(|| Err(ApiError::Transport("refused".to_string())));

            let mut app = app_with(mock, QuoteConfig::default());
            app.handle_key(key(KeyCode::F(3))).await.unwrap();
            app.flush_pending().await;

            assert_eq!(app.state.current_error(), Some(BLOG_LOAD_FAILED_MESSAGE));
            assert!(!app.state.posts_loading);
            assert!(!app.state.posts_loaded);
        }

        #[tokio::test]
        async fn test_p_publishes_highlighted_draft() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_update_blog_post()
                .withf(|id, update| {
                    id == "p1" && update.status == Some(PostStatus::Published)
                })
                .times(1)
                .returning(|id, _| {
                    let updated_at = "2026-03-02T10:00:00Z";
                    Ok(sample_post(id, "Launch Day", PostStatus::Published, updated_at))
                });

            let mut app = blog_app(mock);
            app.handle_key(key(KeyCode::Char('p'))).await.unwrap();

            assert_eq!(app.status_message.as_deref(), Some("Post published"));
            let post = app.state.posts.iter().find(|p| p.id == "p1").unwrap();
            assert_eq!(post.status, PostStatus::Published);
        }

        #[tokio::test]
        async fn test_status_update_failure_reports_error() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_update_blog_post().returning(|_, _| {
                Err(ApiError::Status {
                    status: 500,
                    message: "Failed to update post".to_string(),
                })
            });

            let mut app = blog_app(mock);
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();

            assert_eq!(app.state.current_error(), Some(POST_UPDATE_FAILED_MESSAGE));
            assert_eq!(app.state.posts[0].status, PostStatus::Draft);
        }

        #[tokio::test]
        async fn test_new_post_is_created_from_editor() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_create_blog_post()
                .withf(|post| {
                    post.slug == "hello-world" && post.title == "Hello World"
                })
                .times(1)
                .returning(|_| {
                    let updated_at = "2026-05-01T10:00:00Z";
                    Ok(sample_post("p3", "Hello World", PostStatus::Draft, updated_at))
                });

            let mut app = blog_app(mock);
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert_eq!(app.state.current_view, View::BlogPostEditor);

            for c in "Hello World".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            // Enter on a single-line field moves on; slug is left blank
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('E'))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('C'))).await.unwrap();
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::BlogPosts);
            assert!(app.state.post_editor.is_none());
            assert_eq!(app.state.posts.len(), 3);
            assert_eq!(app.state.highlighted_post().map(|p| p.id.as_str()), Some("p3"));
            assert_eq!(app.status_message.as_deref(), Some("Post created"));
        }

        #[tokio::test]
        async fn test_incomplete_post_stays_in_editor() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_create_blog_post().times(0);

            let mut app = blog_app(mock);
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::BlogPostEditor);
            let editor = app.state.post_editor.as_ref().unwrap();
            assert_eq!(editor.error.as_deref(), Some(POST_REQUIRED_MESSAGE));
        }

        #[tokio::test]
        async fn test_rejected_edit_shows_server_message() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_update_blog_post().returning(|_, _| {
                Err(ApiError::Status {
                    status: 409,
                    message: "Slug already in use".to_string(),
                })
            });

            let mut app = blog_app(mock);
            app.handle_key(key(KeyCode::Char('e'))).await.unwrap();
            app.handle_key(ctrl('s')).await.unwrap();

            let editor = app.state.post_editor.as_ref().unwrap();
            assert_eq!(editor.post_id.as_deref(), Some("p1"));
            assert_eq!(editor.error.as_deref(), Some("Slug already in use"));
        }

        #[tokio::test]
        async fn test_esc_discards_editor() {
            let mut app = blog_app(MockApiClientTrait::new());
            app.handle_key(key(KeyCode::Char('e'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('!'))).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();

            assert_eq!(app.state.current_view, View::BlogPosts);
            assert!(app.state.post_editor.is_none());
            assert_eq!(app.state.posts[0].title, "Launch Day");
        }

        #[tokio::test]
        async fn test_delete_post_from_detail() {
            let mut mock = MockApiClientTrait::new();
            mock.expect_delete_blog_post()
                .withf(|id| id == "p1")
                .times(1)
                .returning(|_| Ok(()));

            let mut app = blog_app(mock);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::BlogPostDetail);

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            let pending = app.state.pending_delete.clone().unwrap();
            assert_eq!(pending.target, DeleteTarget::BlogPost("p1".to_string()));
            assert_eq!(pending.display, "Launch Day");

            app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
            assert_eq!(app.state.current_view, View::BlogPosts);
            assert_eq!(app.state.posts.len(), 1);
            assert_eq!(app.status_message.as_deref(), Some("Post deleted"));
        }
    }
}
