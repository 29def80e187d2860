//! Trait abstraction for the quote API client to enable mocking in tests

use crate::state::{
    BlogPost, BlogPostUpdate, FormSubmission, NewBlogPost, SubmissionPayload, SubmissionResponse,
};
use async_trait::async_trait;

use super::error::ApiError;

/// Operations the app performs against the quote API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Post a sanitized quote request. Any well-formed reply is `Ok`,
    /// including `success: false`.
    async fn submit_form(&self, payload: &SubmissionPayload)
        -> Result<SubmissionResponse, ApiError>;

    /// Fetch every persisted submission
    async fn list_submissions(&self) -> Result<Vec<FormSubmission>, ApiError>;

    /// Delete one submission by id
    async fn delete_submission(&self, id: &str) -> Result<(), ApiError>;

    /// Fetch every blog post, drafts and archived ones included
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ApiError>;

    async fn create_blog_post(&self, post: &NewBlogPost) -> Result<BlogPost, ApiError>;

    /// Apply a partial update and return the stored post
    async fn update_blog_post(&self, id: &str, update: &BlogPostUpdate)
        -> Result<BlogPost, ApiError>;

    async fn delete_blog_post(&self, id: &str) -> Result<(), ApiError>;
}
