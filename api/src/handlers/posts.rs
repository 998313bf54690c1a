//! Post handlers
//!
//! JSON endpoints for creating posts and reading the post feed. Request
//! bodies are validated here, field by field, before the service sees them.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Post, PostInput, TITLE_MAX_CHARS};
use crate::domain::ports::{Clock, PostRepository};
use crate::error::{AppError, FieldErrors};
use crate::AppState;

/// Success envelope shared by every post endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Request body for POST /api/posts
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl CreatePostRequest {
    /// Check required fields and the title length, collecting every failure
    pub fn validate(self) -> Result<PostInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.title) {
            errors
                .entry("title")
                .or_default()
                .push("Title cannot be blank.".to_string());
        } else if self
            .title
            .as_deref()
            .is_some_and(|t| t.chars().count() > TITLE_MAX_CHARS)
        {
            errors.entry("title").or_default().push(format!(
                "Title should contain at most {} characters.",
                TITLE_MAX_CHARS
            ));
        }

        if is_blank(&self.content) {
            errors
                .entry("content")
                .or_default()
                .push("Content cannot be blank.".to_string());
        }

        match (self.title, self.content) {
            (Some(title), Some(content)) if errors.is_empty() => {
                Ok(PostInput::new(title, content))
            }
            _ => Err(errors),
        }
    }
}

/// The `mode` value from GET /api/posts query pairs; the last one wins when repeated
fn feed_mode_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "mode")
        .map(|(_, value)| value.as_str())
}

/// POST /api/posts
///
/// Create a post. Body: `{"title": "...", "content": "..."}`.
/// Field errors come back as 422 with `{"success": false, "errors": {...}}`.
pub async fn create_post<R, C>(
    State(state): State<AppState<R, C>>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Post>>, AppError>
where
    R: PostRepository + 'static,
    C: Clock + 'static,
{
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let input = request.validate().map_err(AppError::Validation)?;

    let post = state.post_service.create(input).await?;

    Ok(ApiResponse::ok(post))
}

/// GET /api/posts?mode=random|last_minute|chronological
///
/// Returns the feed for the requested mode. Unknown or missing modes get the
/// chronological feed, and a malformed query string never fails the request.
pub async fn list_posts<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<Vec<Post>>>, AppError>
where
    R: PostRepository + 'static,
    C: Clock + 'static,
{
    let posts = state.feed_service.get_feed(feed_mode_param(&params)).await?;

    Ok(ApiResponse::ok(posts))
}
