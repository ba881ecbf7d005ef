//! User listing and registration request handlers.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{RegisterRequest, UserResponse};
use crate::error::AppResult;
use crate::state::AppState;

/// Creates the user routes.
///
/// # Routes
/// - `GET /` - List all users
/// - `POST /` - Register a new user
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_users, register))
}

/// GET /api/users - List all users
#[utoipa::path(
    get,
    path = "/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All registered users", body = Vec<UserResponse>)
    )
)]
async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list_users().await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// POST /api/users - Register a new user
#[utoipa::path(
    post,
    path = "/",
    tag = USER_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Credentials too short or username taken")
    )
)]
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.services.users.register(payload.into_input()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
