//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::NewBlogPost;
use quill_core::ports::BaseRepository;
use quill_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id,
    }
    .into()
}

fn unknown_id(raw: &str) -> AppError {
    AppError::NotFound(format!("BlogPost with id {} not found", raw))
}

/// Ids that are not valid UUIDs cannot name a stored post.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<BlogPostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id = parse_id(&raw).ok_or_else(|| unknown_id(&raw))?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(BlogPostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let new = NewBlogPost::try_from(body.into_inner())?;

    let post = state.posts.insert(new).await?;
    tracing::info!(%request_id, post_id = %post.id, "Created blog post");

    Ok(HttpResponse::Created().json(BlogPostResponse::from(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let (body_id, patch) = body.into_inner().into_parts();
    let id = parse_id(&raw);

    if let Some(body_id) = body_id {
        // The same UUID may be spelled differently (case, braces).
        let same = match id {
            Some(id) => parse_id(&body_id) == Some(id),
            None => body_id == raw,
        };
        if !same {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                raw, body_id
            )));
        }
    }

    let id = id.ok_or_else(|| unknown_id(&raw))?;

    state
        .posts
        .update(id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(%request_id, post_id = %id, "Updated blog post");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Succeeds whether or not the post existed.
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();

    if let Some(id) = parse_id(&raw) {
        let removed = state.posts.delete(id).await?;
        tracing::info!(%request_id, post_id = %id, removed, "Deleted blog post");
    }

    Ok(HttpResponse::NoContent().finish())
}
