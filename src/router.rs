//! Route table for the storefront's server-rendered pages.
//!
//! Only render-only pages live here. Static assets and the 404 fallback are
//! composed around these routes by [`crate::startup::build_router`].

use axum::{routing::get, Router};

use crate::{controller, model::app::AppState};

/// Builds the page routes.
///
/// # Registered Endpoints
/// - `GET /login` - Render the login page
/// - `GET /register` - Render the registration page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(controller::pages::login))
        .route("/register", get(controller::pages::register))
}
