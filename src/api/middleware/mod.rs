//! Middleware components for request processing.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::{AuthUser, auth_middleware};
pub use error_handler::normalize_error_responses;
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
