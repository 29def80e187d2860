//! reqwest implementation of the quote API
//!
//! Endpoints are resolved against a single base URL:
//! `POST api/contact/submit`, `GET api/admin/submissions`,
//! `DELETE api/admin/submissions/{id}`, `GET|POST api/admin/blog` and
//! `PATCH|DELETE api/admin/blog/{id}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, error, info};
use url::Url;

use super::error::ApiError;
use super::traits::ApiClientTrait;
use crate::state::{
    BlogListResponse, BlogPost, BlogPostResponse, BlogPostUpdate, FormSubmission, NewBlogPost,
    SubmissionPayload, SubmissionResponse,
};

/// Default API address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const DEFAULT_STATUS_MESSAGE: &str = "Quote API request failed";

/// Connection settings for [`ApiClient`]
#[derive(Clone)]
pub struct ApiClientOptions {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for ApiClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClientOptions")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP client for the studio's quote API
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    access_token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ApiClient {
    pub fn new(options: &ApiClientOptions) -> Result<Self, ApiError> {
        let base_url = Url::parse(options.base_url.trim())?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(options.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            access_token: options.access_token.clone().filter(|t| !t.is_empty()),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Read the body of a response, turning non-2xx statuses into `ApiError::Status`
async fn success_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        return Ok(body);
    }

    let message = extract_error_message(&body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.clone()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    ["error", "message"]
        .iter()
        .find_map(|key| parsed.get(*key).and_then(|v| v.as_str()))
        .map(ToOwned::to_owned)
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn submit_form(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionResponse, ApiError> {
        let url = self.endpoint(&["api", "contact", "submit"])?;
        debug!(%url, "posting quote request");

        let response = self.client.post(url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Failure replies carry the same JSON shape, so the body decides
        serde_json::from_str::<SubmissionResponse>(&body).map_err(|e| {
            error!(status = status.as_u16(), "unparseable submit response: {}", e);
            ApiError::Parse(e.to_string())
        })
    }

    async fn list_submissions(&self) -> Result<Vec<FormSubmission>, ApiError> {
        let url = self.endpoint(&["api", "admin", "submissions"])?;
        debug!(%url, "fetching submissions");

        let response = self.authorized(self.client.get(url)).send().await?;
        let body = success_body(response).await?;

        let submissions: Vec<FormSubmission> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        info!(count = submissions.len(), "loaded submissions");
        Ok(submissions)
    }

    async fn delete_submission(&self, id: &str) -> Result<(), ApiError> {
        check_id(id)?;

        let url = self.endpoint(&["api", "admin", "submissions", id])?;
        debug!(%url, "deleting submission");

        let response = self.authorized(self.client.delete(url)).send().await?;
        let body = success_body(response).await?;
        ensure_success(&body)?;

        info!(id, "deleted submission");
        Ok(())
    }

    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let url = self.endpoint(&["api", "admin", "blog"])?;
        debug!(%url, "fetching blog posts");

        let response = self.authorized(self.client.get(url)).send().await?;
        let body = success_body(response).await?;

        let reply: BlogListResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        if !reply.success {
            return Err(rejected(reply.error));
        }
        info!(count = reply.posts.len(), "loaded blog posts");
        Ok(reply.posts)
    }

    async fn create_blog_post(&self, post: &NewBlogPost) -> Result<BlogPost, ApiError> {
        let url = self.endpoint(&["api", "admin", "blog"])?;
        debug!(%url, slug = %post.slug, "creating blog post");

        let response = self.authorized(self.client.post(url).json(post)).send().await?;
        let body = success_body(response).await?;
        let created = post_from_reply(&body)?;

        info!(id = %created.id, "created blog post");
        Ok(created)
    }

    async fn update_blog_post(
        &self,
        id: &str,
        update: &BlogPostUpdate,
    ) -> Result<BlogPost, ApiError> {
        check_id(id)?;

        let url = self.endpoint(&["api", "admin", "blog", id])?;
        debug!(%url, "updating blog post");

        let response = self.authorized(self.client.patch(url).json(update)).send().await?;
        let body = success_body(response).await?;
        let updated = post_from_reply(&body)?;

        info!(id, status = updated.status.as_str(), "updated blog post");
        Ok(updated)
    }

    async fn delete_blog_post(&self, id: &str) -> Result<(), ApiError> {
        check_id(id)?;

        let url = self.endpoint(&["api", "admin", "blog", id])?;
        debug!(%url, "deleting blog post");

        let response = self.authorized(self.client.delete(url)).send().await?;
        let body = success_body(response).await?;
        ensure_success(&body)?;

        info!(id, "deleted blog post");
        Ok(())
    }
}

/// Ids are path segments; an empty or stringified-undefined id would hit the collection
fn check_id(id: &str) -> Result<(), ApiError> {
    if id.is_empty() || id == "undefined" {
        return Err(ApiError::InvalidId(id.to_string()));
    }
    Ok(())
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Status {
        status: 200,
        message: error.unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string()),
    }
}

/// Accept an empty 2xx body or any JSON body not carrying `success: false`
fn ensure_success(body: &str) -> Result<(), ApiError> {
    if body.trim().is_empty() {
        return Ok(());
    }
    let reply: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    if reply.get("success").and_then(|v| v.as_bool()) == Some(false) {
        return Err(rejected(extract_error_message(body)));
    }
    Ok(())
}

fn post_from_reply(body: &str) -> Result<BlogPost, ApiError> {
    let reply: BlogPostResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    match (reply.success, reply.post) {
        (true, Some(post)) => Ok(post),
        (true, None) => Err(ApiError::Parse("missing post in reply".to_string())),
        (false, _) => Err(rejected(reply.error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::fixtures::valid_form_data;
    use crate::state::{PostStatus, SubmissionStatus};
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    fn client_for(server: &mockito::Server, token: Option<&str>) -> ApiClient {
        ApiClient::new(&ApiClientOptions {
            base_url: server.url(),
            access_token: token.map(str::to_string),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            data: valid_form_data(),
            submitted_at: "2024-05-01T08:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let options = ApiClientOptions {
            base_url: "not a url".to_string(),
            ..ApiClientOptions::default()
        };
        assert!(matches!(ApiClient::new(&options), Err(ApiError::InvalidUrl(_))));

        let options = ApiClientOptions {
            base_url: "ftp://example.com".to_string(),
            ..ApiClientOptions::default()
        };
        assert!(matches!(ApiClient::new(&options), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new(&ApiClientOptions {
            base_url: "https://studio.example/quotes/".to_string(),
            ..ApiClientOptions::default()
        })
        .unwrap();
        let url = client.endpoint(&["api", "contact", "submit"]).unwrap();
        assert_eq!(url.as_str(), "https://studio.example/quotes/api/contact/submit");

        let url = client.endpoint(&["api", "admin", "submissions", "a b"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://studio.example/quotes/api/admin/submissions/a%20b"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = ApiClient::new(&ApiClientOptions {
            access_token: Some("secret-token".to_string()),
            ..ApiClientOptions::default()
        })
        .unwrap();
        let printed = format!("{:?}", client);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("[REDACTED]"));
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error": "Submission not found"}"#),
            Some("Submission not found".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"message": "nope"}"#),
            Some("nope".to_string())
        );
        assert_eq!(extract_error_message("<html>"), None);
        assert_eq!(extract_error_message("  "), None);
    }

    #[tokio::test]
    async fn test_submit_form_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact/submit")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "projectType": "ecommerce",
                "email": "jane@woodandco.com",
                "submittedAt": "2024-05-01T08:30:00Z"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success": true, "message": "Form submitted successfully", "submissionId": "sub-1"}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let response = client.submit_form(&payload()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.submission_id.as_deref(), Some("sub-1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_form_failure_body_is_ok() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/contact/submit")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "Invalid form data"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let response = client.submit_form(&payload()).await.unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Invalid form data"));
    }

    #[tokio::test]
    async fn test_submit_form_unparseable_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/contact/submit")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let client = client_for(&server, None);
        let result = client.submit_form(&payload()).await;

        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[tokio::test]
    async fn test_submit_form_transport_failure() {
        let client = ApiClient::new(&ApiClientOptions {
            base_url: "http://127.0.0.1:1".to_string(),
            access_token: None,
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        let result = client.submit_form(&payload()).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_list_submissions_sends_token() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/admin/submissions")
            .match_header("authorization", "Bearer admin-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "id": "a1",
                    "project_type": "portfolio",
                    "selected_features": ["resume"],
                    "budget": "1k-2k",
                    "timeline": "flexible",
                    "project_brief": "A portfolio to show my illustration work.",
                    "full_name": "Kim Park",
                    "email": "kim@example.com",
                    "best_time_to_contact": "anytime",
                    "status": "new",
                    "submitted_at": "2024-05-02T10:00:00Z"
                }]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server, Some("admin-token"));
        let submissions = client.list_submissions().await.unwrap();

        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].id, "a1");
        assert_eq!(submissions[0].status, SubmissionStatus::New);
        assert_eq!(submissions[0].data.selected_features, vec!["resume"]);
        assert_eq!(submissions[0].data.company_name, "");
    }

    #[tokio::test]
    async fn test_list_submissions_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/admin/submissions")
            .with_status(500)
            .with_body(r#"{"error": "Failed to fetch submissions"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        match client.list_submissions().await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to fetch submissions");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_submission_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/admin/submissions/a1")
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, None);
        client.delete_submission("a1").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_submission_rejects_bad_ids_locally() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, None);
        for id in ["", "undefined"] {
            let result = client.delete_submission(id).await;
            assert!(matches!(result, Err(ApiError::InvalidId(_))));
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_submission_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("DELETE", "/api/admin/submissions/missing")
            .with_status(404)
            .with_body(r#"{"error": "Submission not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let result = client.delete_submission("missing").await;
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_delete_submission_success_false() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("DELETE", "/api/admin/submissions/a1")
            .with_status(200)
            .with_body(r#"{"success": false, "error": "Failed to delete submission"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        match client.delete_submission("a1").await {
            Err(ApiError::Status { message, .. }) => {
                assert_eq!(message, "Failed to delete submission")
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    const POST_JSON: &str = r#"{
        "id": "p1",
        "title": "Launch Day",
        "slug": "launch-day",
        "excerpt": "We shipped",
        "content": "Full story",
        "cover_image": null,
        "author": "Truqorun Team",
        "tags": ["news"],
        "status": "published",
        "published_at": "2026-03-01T10:00:00Z",
        "created_at": "2026-02-28T09:00:00Z",
        "updated_at": "2026-03-01T10:00:00Z"
    }"#;

    #[tokio::test]
    async fn test_list_blog_posts_unwraps_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/admin/blog")
            .match_header("authorization", "Bearer admin-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"success": true, "posts": [{}]}}"#, POST_JSON))
            .create_async()
            .await;

        let client = client_for(&server, Some("admin-token"));
        let posts = client.list_blog_posts().await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "launch-day");
        assert_eq!(posts[0].status, PostStatus::Published);
    }

    #[tokio::test]
    async fn test_list_blog_posts_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/admin/blog")
            .with_status(401)
            .with_body(r#"{"success": false, "error": "Unauthorized"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        match client.list_blog_posts().await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_blog_post_posts_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/admin/blog")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "title": "Launch Day",
                "slug": "launch-day",
                "status": "published"
            })))
            .with_status(201)
            .with_body(format!(r#"{{"success": true, "post": {}}}"#, POST_JSON))
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, Some("admin-token"));
        let new_post = NewBlogPost {
            title: "Launch Day".to_string(),
            slug: "launch-day".to_string(),
            excerpt: "We shipped".to_string(),
            content: "Full story".to_string(),
            status: PostStatus::Published,
            ..NewBlogPost::default()
        };
        let created = client.create_blog_post(&new_post).await.unwrap();

        assert_eq!(created.id, "p1");
        assert!(created.published_time().is_some());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_blog_post_missing_fields() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/admin/blog")
            .with_status(400)
            .with_body(r#"{"success": false, "error": "title, slug, excerpt, and content are required"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let result = client.create_blog_post(&NewBlogPost::default()).await;
        assert!(matches!(result, Err(ApiError::Status { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_update_blog_post_patches_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/admin/blog/p1")
            .match_body(Matcher::Json(serde_json::json!({ "status": "published" })))
            .with_status(200)
            .with_body(format!(r#"{{"success": true, "post": {}}}"#, POST_JSON))
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let updated = client
            .update_blog_post("p1", &BlogPostUpdate::status(PostStatus::Published))
            .await
            .unwrap();

        assert_eq!(updated.status, PostStatus::Published);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_blog_post_without_post_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PATCH", "/api/admin/blog/p1")
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let result = client.update_blog_post("p1", &BlogPostUpdate::default()).await;
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[tokio::test]
    async fn test_blog_post_ids_rejected_locally() {
        let mut server = mockito::Server::new_async().await;
        let patch = server
            .mock("PATCH", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let update = BlogPostUpdate::default();
        for id in ["", "undefined"] {
            assert!(matches!(
                client.update_blog_post(id, &update).await,
                Err(ApiError::InvalidId(_))
            ));
            assert!(matches!(
                client.delete_blog_post(id).await,
                Err(ApiError::InvalidId(_))
            ));
        }
        patch.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_blog_post_failure() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("DELETE", "/api/admin/blog/p1")
            .with_status(500)
            .with_body(r#"{"success": false, "error": "Failed to delete post"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        match client.delete_blog_post("p1").await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to delete post");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
