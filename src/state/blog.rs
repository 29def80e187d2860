//! Blog posts managed from the admin dashboard

use super::forms::UnknownOption;
use super::submissions::{null_as_default, parse_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shown when a post is saved without its required text
pub const POST_REQUIRED_MESSAGE: &str = "title, slug, excerpt, and content are required";

pub const INVALID_SLUG_MESSAGE: &str =
    "Slug may only contain lowercase letters, numbers and hyphens";

/// Author used by the server when none is given
pub const DEFAULT_AUTHOR: &str = "Truqorun Team";

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }

    /// Draft -> Published -> Archived -> Draft
    pub fn next(&self) -> Self {
        match self {
            Self::Draft => Self::Published,
            Self::Published => Self::Archived,
            Self::Archived => Self::Draft,
        }
    }

    /// Published posts go back to draft; anything else gets published
    pub fn toggled_publish(&self) -> Self {
        match self {
            Self::Published => Self::Draft,
            _ => Self::Published,
        }
    }
}

impl FromStr for PostStatus {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// A `blog_posts` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PostStatus,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl BlogPost {
    pub fn updated_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    pub fn published_time(&self) -> Option<DateTime<Utc>> {
        self.published_at.as_deref().and_then(parse_timestamp)
    }

    pub fn author_or_default(&self) -> &str {
        if self.author.is_empty() {
            DEFAULT_AUTHOR
        } else {
            &self.author
        }
    }
}

/// Body for creating a post. The server stamps `published_at` when the
/// status is published.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub status: PostStatus,
}

/// Partial update; unset fields are left alone by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlogPostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

impl BlogPostUpdate {
    pub fn status(status: PostStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// `{ success, posts }` envelope from the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `{ success, post }` envelope from the single-post endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostResponse {
    pub success: bool,
    #[serde(default)]
    pub post: Option<BlogPost>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Most recently updated first. Stable; unparseable timestamps sort last.
pub fn sort_by_updated(posts: &[BlogPost]) -> Vec<&BlogPost> {
    let mut sorted: Vec<_> = posts.iter().collect();
    sorted.sort_by(|a, b| b.updated_time().cmp(&a.updated_time()));
    sorted
}

/// Number of posts per status, in status order
pub fn post_status_counts(posts: &[BlogPost]) -> Vec<(PostStatus, usize)> {
    PostStatus::ALL
        .into_iter()
        .map(|status| (status, posts.iter().filter(|p| p.status == status).count()))
        .collect()
}

/// Lowercase ASCII words joined by single hyphens
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}

/// Comma separated tags, trimmed, without blanks or repeats
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Editable text fields of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Slug,
    Excerpt,
    Content,
    Tags,
    CoverImage,
}

impl PostField {
    pub const ALL: [PostField; 6] = [
        Self::Title,
        Self::Slug,
        Self::Excerpt,
        Self::Content,
        Self::Tags,
        Self::CoverImage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Slug => "Slug",
            Self::Excerpt => "Excerpt",
            Self::Content => "Content",
            Self::Tags => "Tags (comma separated)",
            Self::CoverImage => "Cover Image URL",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Title | Self::Excerpt | Self::Content)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Excerpt | Self::Content)
    }
}

/// In-progress edit of a new or existing post
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostEditor {
    /// `None` while creating
    pub post_id: Option<String>,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub tags: String,
    pub cover_image: String,
    pub status: PostStatus,
    pub active: usize,
    pub error: Option<String>,
}

impl PostEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            post_id: Some(post.id.clone()),
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            tags: post.tags.join(", "),
            cover_image: post.cover_image.clone().unwrap_or_default(),
            status: post.status,
            active: 0,
            error: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.post_id.is_none()
    }

    pub fn active_field(&self) -> PostField {
        PostField::ALL[self.active.min(PostField::ALL.len() - 1)]
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % PostField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + PostField::ALL.len() - 1) % PostField::ALL.len();
    }

    pub fn value(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Slug => &self.slug,
            PostField::Excerpt => &self.excerpt,
            PostField::Content => &self.content,
            PostField::Tags => &self.tags,
            PostField::CoverImage => &self.cover_image,
        }
    }

    fn value_mut(&mut self, field: PostField) -> &mut String {
        match field {
            PostField::Title => &mut self.title,
            PostField::Slug => &mut self.slug,
            PostField::Excerpt => &mut self.excerpt,
            PostField::Content => &mut self.content,
            PostField::Tags => &mut self.tags,
            PostField::CoverImage => &mut self.cover_image,
        }
    }

    /// Newlines only land in multi-line fields
    pub fn push_char(&mut self, c: char) {
        let field = self.active_field();
        if c == '\n' && !field.is_multiline() {
            return;
        }
        self.value_mut(field).push(c);
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        let field = self.active_field();
        self.value_mut(field).pop();
        self.error = None;
    }

    pub fn cycle_status(&mut self) {
        self.status = self.status.next();
    }

    /// The typed slug, or one derived from the title when left blank
    pub fn effective_slug(&self) -> String {
        let typed = self.slug.trim();
        if typed.is_empty() {
            slugify(&self.title)
        } else {
            typed.to_string()
        }
    }

    fn check(&self) -> Result<String, String> {
        let slug = self.effective_slug();
        let complete = [self.title.as_str(), &slug, &self.excerpt, &self.content]
            .iter()
            .all(|v| !v.trim().is_empty());
        if !complete {
            return Err(POST_REQUIRED_MESSAGE.to_string());
        }
        if !is_valid_slug(&slug) {
            return Err(INVALID_SLUG_MESSAGE.to_string());
        }
        Ok(slug)
    }

    pub fn to_new_post(&self) -> Result<NewBlogPost, String> {
        let slug = self.check()?;
        let cover = self.cover_image.trim();
        Ok(NewBlogPost {
            title: self.title.trim().to_string(),
            slug,
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.trim().to_string(),
            cover_image: (!cover.is_empty()).then(|| cover.to_string()),
            author: None,
            tags: parse_tags(&self.tags),
            status: self.status,
        })
    }

    /// Every editable field is sent so cleared values are persisted too
    pub fn to_update(&self) -> Result<BlogPostUpdate, String> {
        let slug = self.check()?;
        Ok(BlogPostUpdate {
            title: Some(self.title.trim().to_string()),
            slug: Some(slug),
            excerpt: Some(self.excerpt.trim().to_string()),
            content: Some(self.content.trim().to_string()),
            cover_image: Some(self.cover_image.trim().to_string()),
            tags: Some(parse_tags(&self.tags)),
            status: Some(self.status),
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_post(
    id: &str,
    title: &str,
    status: PostStatus,
    updated_at: &str,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        slug: slugify(title),
        excerpt: format!("About {}", title),
        content: format!("{} body", title),
        cover_image: None,
        author: DEFAULT_AUTHOR.to_string(),
        tags: vec!["news".to_string()],
        status,
        published_at: None,
        created_at: updated_at.to_string(),
        updated_at: updated_at.to_string(),
    }
}
