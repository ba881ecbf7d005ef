//! Router configuration for the API.
//!
//! Centralized route registration, OpenAPI document assembly, and
//! middleware wiring.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers::{
    auth::login_routes, blogs::blog_routes, health::health_routes, users::user_routes,
};
use crate::api::middleware::{
    logging_middleware, normalize_error_responses, request_id_middleware,
};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/blogs` - Blog listing, creation, update, delete, and statistics
/// - `/api/users` - User registration and listing
/// - `/api/login` - Authentication
/// - `/api/health` - Health and probe endpoints
/// - `/swagger-ui` - Interactive API documentation
///
/// # Middleware Order
/// Layers run outermost-last-added: request ID assignment wraps logging,
/// which wraps error normalization, which wraps the routes.
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/blogs", blog_routes(state.clone()))
        .nest("/api/users", user_routes())
        .nest("/api/login", login_routes())
        .nest("/api", health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(normalize_error_responses))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
