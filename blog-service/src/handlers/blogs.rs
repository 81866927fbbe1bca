use crate::dtos::{
    BlogResponse, CreateBlogRequest, CreateBlogResponse, MessageResponse, UpdateBlogRequest,
};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn list_blogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let blogs = state.store.list().await?;

    // An empty collection is an empty array, not an error.
    let blogs: Vec<BlogResponse> = blogs.into_iter().map(BlogResponse::from).collect();
    Ok(Json(blogs))
}

pub async fn get_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let blog = state
        .store
        .get(&blog_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Blog not found")))?;

    Ok(Json(BlogResponse::from(blog)))
}

pub async fn create_blog(
    State(state): State<AppState>,
    Json(body): Json<CreateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    let blog = body.into_blog();

    state.store.insert(&blog).await?;

    tracing::info!(post_id = %blog.id, "Blog created");

    Ok((
        StatusCode::CREATED,
        Json(CreateBlogResponse {
            message: "Blog created successfully".to_string(),
            post_id: blog.id,
        }),
    ))
}

pub async fn update_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
    Json(body): Json<UpdateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    let changes = body.into_update_document();

    // Single conditional store operation; no existence pre-check that a
    // concurrent delete could invalidate.
    let merged = state
        .store
        .update_merge(&blog_id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Blog not found")))?;

    tracing::info!(post_id = %blog_id, "Blog updated");

    Ok(Json(BlogResponse::from(merged)))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.store.delete(&blog_id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Blog not found")));
    }

    tracing::info!(post_id = %blog_id, "Blog deleted");

    Ok(Json(MessageResponse {
        message: "Blog deleted successfully".to_string(),
    }))
}
