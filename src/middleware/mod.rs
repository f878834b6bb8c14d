//! Request pipeline stages that run before the route handlers.

pub mod auth;
pub mod error;
