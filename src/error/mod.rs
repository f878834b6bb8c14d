//! Error types for the Pizza Shack server.
//!
//! All errors raised by pipeline stages and handlers aggregate into a single
//! [`Error`] type via `thiserror`'s `#[from]` conversions, so handlers can
//! propagate with `?`. The `IntoResponse` implementation produces a bare
//! response carrying the status code plus an [`ErrorDetail`] extension; the
//! error-reporting middleware decides how much of that detail reaches the
//! client (see [`crate::middleware::error`]).

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the Pizza Shack server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Template rendering error.
    #[error("Failed to render template: {0}")]
    TemplateError(#[from] askama::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Internal error indicating a bug in the storefront's own code.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl Error {
    /// Status code declared by the error; everything this layer raises today
    /// is a server-side failure.
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Full diagnostic detail of a stage error, attached to the response as an
/// extension so the error-reporting stage can log it and, outside production,
/// include it in the body.
#[derive(Clone, Debug)]
pub struct ErrorDetail(pub String);

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response
            .extensions_mut()
            .insert(ErrorDetail(format!("{self}\n{self:?}")));

        response
    }
}
