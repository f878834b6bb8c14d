use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Extension,
};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{app::AppState, principal::CurrentUser, session::flash::SessionFlash},
    view::{LoginTemplate, NotFoundTemplate, RegisterTemplate},
};

use askama::Template;

/// Login page
///
/// Renders the login form with any pending flash message, which is consumed
/// by this read.
///
/// # Responses
/// - 200 (OK): Rendered login page
/// - 500 (Internal Server Error): Template rendering or session access failed
pub async fn login(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let flash = SessionFlash::take(&session).await?;

    let template = LoginTemplate {
        page: "Login",
        company: state.config.company_name.clone(),
        email: user.map(|Extension(user)| user.email),
        flash,
    };

    Ok(Html(template.render()?))
}

/// Register page
///
/// Renders the registration form with any pending flash message.
///
/// # Responses
/// - 200 (OK): Rendered registration page
/// - 500 (Internal Server Error): Template rendering or session access failed
pub async fn register(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let flash = SessionFlash::take(&session).await?;

    let template = RegisterTemplate {
        page: "Register",
        company: state.config.company_name.clone(),
        email: user.map(|Extension(user)| user.email),
        flash,
    };

    Ok(Html(template.render()?))
}

/// Fallback handler for anything no earlier stage responded to.
///
/// The page is a normal render rather than an error response, so it keeps the
/// default 200 status.
pub async fn not_found(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<impl IntoResponse, Error> {
    let template = NotFoundTemplate {
        company: state.config.company_name.clone(),
        email: user.map(|Extension(user)| user.email),
    };

    Ok(Html(template.render()?))
}
