//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;
use uuid::Uuid;

use quill_core::domain::{Author, Post, PostPatch};
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find().await?;
    let rendered: Vec<PostResponse> = posts.iter().map(render).collect();

    Ok(HttpResponse::Ok().json(rendered))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    Ok(HttpResponse::Ok().json(render(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input before touching the store
    req.validate()
        .map_err(|msg| AppError::BadRequest(msg.to_string()))?;

    let author = Author {
        first_name: req.author.first_name,
        last_name: req.author.last_name,
    };
    let post = state
        .posts
        .insert_one(author, req.title, req.content)
        .await?;

    Ok(HttpResponse::Created().json(render(&post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    // A body id is allowed, but only when it names the same record.
    if let Some(body_id) = req.id.as_deref() {
        match Uuid::parse_str(body_id) {
            Ok(parsed) if parsed == id => {}
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Body id {body_id} does not match path id {id}"
                )));
            }
        }
    }

    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };

    let matched = state.posts.update_by_id(id, patch).await?;
    if matched == 0 {
        return Err(AppError::NotFound(format!("Post {id} not found")));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Deleting an id that is already absent still answers 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete_by_id(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid post id: {raw}")))
}

fn render(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        created: post.created.to_rfc3339_opts(SecondsFormat::Millis, true),
        author: post.author.full_name(),
    }
}
