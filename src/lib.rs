//! A blog listing REST service with per-user ownership and token
//! authentication.
//!
//! The crate is layered: handlers deserialize and validate requests,
//! services enforce business rules and ownership, repositories run diesel
//! queries, and the aggregate module computes pure statistics over blog
//! collections.

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
