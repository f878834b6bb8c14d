use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::Error,
    model::{app::AppState, principal::CurrentUser, session::user::SessionUserId},
};

/// Authentication stage: resolve the session's user reference to a principal.
///
/// A matching user row becomes a [`CurrentUser`] request extension for later
/// stages and render contexts. A stale user reference (row deleted since the
/// session was issued) is removed from the session and the request continues
/// anonymous.
pub async fn resolve_principal(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    if let Some(user_id) = SessionUserId::get(&session).await? {
        match UserRepository::new(&state.db).find_by_id(user_id).await? {
            Some(user) => {
                request.extensions_mut().insert(CurrentUser {
                    id: user.id,
                    email: user.email,
                });
            }
            None => {
                tracing::debug!(user_id, "Session references a missing user, clearing");
                SessionUserId::remove(&session).await?;
            }
        }
    }

    Ok(next.run(request).await)
}
