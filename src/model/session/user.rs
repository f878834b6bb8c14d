use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key for the authenticated user reference.
pub const SESSION_USER_ID_KEY: &str = "shack:auth:user_id";

/// Session wrapper for the user reference.
///
/// A session may be unauthenticated, in which case this key is absent. The
/// authentication stage resolves the stored id to a database row on each
/// request; a stale id is removed rather than trusted.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Insert the user ID into the session.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Get the user ID from the session, if any.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id))
    }

    /// Remove the user ID from the session.
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session.remove::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(())
    }
}
