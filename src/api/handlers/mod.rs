//! HTTP request handlers organized by resource type.

pub mod auth;
pub mod blogs;
pub mod health;
pub mod users;
