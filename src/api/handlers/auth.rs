//! Login handler issuing bearer tokens.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{LoginRequest, LoginResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::jwt::issue_token;

/// Creates the login routes.
///
/// # Routes
/// - `POST /` - Authenticate with username and password, returns a token
pub fn login_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(login))
}

/// POST /api/login - Authenticate a user
#[utoipa::path(
    post,
    path = "/",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Unknown username or wrong password")
    )
)]
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .services
        .users
        .authenticate(&payload.username, &payload.password)
        .await?;

    let token = issue_token(
        user.id,
        user.username.clone(),
        &state.jwt_config.secret,
        state.jwt_config.token_expiration,
    )?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
