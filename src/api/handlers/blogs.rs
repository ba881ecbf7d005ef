//! Blog CRUD and statistics request handlers.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    middleware,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use validator::Validate;

use crate::api::doc::BLOG_TAG;
use crate::api::dto::{
    BlogResponse, BlogStatsResponse, BlogWithOwnerResponse, CreateBlogRequest, UpdateBlogRequest,
};
use crate::api::middleware::{AuthUser, auth_middleware};
use crate::error::AppResult;
use crate::state::AppState;

/// Creates the blog routes.
///
/// # Routes
/// - `GET /` - List all blogs with owner details (public)
/// - `GET /stats` - Aggregate statistics over all blogs (public)
/// - `POST /` - Create a blog (requires bearer token)
/// - `PUT /{id}` - Update a blog (requires bearer token, owner only)
/// - `DELETE /{id}` - Delete a blog (requires bearer token, owner only)
pub fn blog_routes(state: AppState) -> OpenApiRouter<AppState> {
    let public = OpenApiRouter::new()
        .routes(routes!(list_blogs))
        .routes(routes!(blog_stats));

    let protected = OpenApiRouter::new()
        .routes(routes!(create_blog))
        .routes(routes!(update_blog, delete_blog))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// GET /api/blogs - List all blogs
#[utoipa::path(
    get,
    path = "/",
    tag = BLOG_TAG,
    responses(
        (status = 200, description = "All blogs with owner details", body = Vec<BlogWithOwnerResponse>)
    )
)]
async fn list_blogs(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BlogWithOwnerResponse>>> {
    let blogs = state.services.blogs.list().await?;
    let responses: Vec<BlogWithOwnerResponse> = blogs
        .into_iter()
        .map(BlogWithOwnerResponse::from)
        .collect();
    Ok(Json(responses))
}

/// GET /api/blogs/stats - Aggregate statistics over all blogs
#[utoipa::path(
    get,
    path = "/stats",
    tag = BLOG_TAG,
    responses(
        (status = 200, description = "Aggregate blog statistics", body = BlogStatsResponse)
    )
)]
async fn blog_stats(State(state): State<AppState>) -> AppResult<Json<BlogStatsResponse>> {
    let stats = state.services.blogs.stats().await?;
    Ok(Json(BlogStatsResponse::from(stats)))
}

/// POST /api/blogs - Create a new blog owned by the authenticated user
#[utoipa::path(
    post,
    path = "/",
    tag = BLOG_TAG,
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse),
        (status = 400, description = "Missing title or url"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn create_blog(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<CreateBlogRequest>,
) -> AppResult<(StatusCode, Json<BlogResponse>)> {
    payload.validate()?;
    let identity = auth_user.identity();
    let blog = state
        .services
        .blogs
        .create(&identity, payload.into_input())
        .await?;
    Ok((StatusCode::CREATED, Json(BlogResponse::from(blog))))
}

/// PUT /api/blogs/{id} - Update a blog owned by the authenticated user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog id")
    ),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = BlogResponse),
        (status = 400, description = "Invalid field values"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Blog is owned by another user"),
        (status = 404, description = "Blog not found")
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn update_blog(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBlogRequest>,
) -> AppResult<Json<BlogResponse>> {
    payload.validate()?;
    let identity = auth_user.identity();
    let blog = state
        .services
        .blogs
        .update(&identity, id, payload.into_update_blog())
        .await?;
    Ok(Json(BlogResponse::from(blog)))
}

/// DELETE /api/blogs/{id} - Delete a blog owned by the authenticated user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = i32, Path, description = "Blog id")
    ),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Blog is owned by another user"),
        (status = 404, description = "Blog not found")
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn delete_blog(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let identity = auth_user.identity();
    state.services.blogs.delete(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
