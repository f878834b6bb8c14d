use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key for the transient flash message.
pub const SESSION_FLASH_KEY: &str = "shack:flash";

/// Single-read, per-session notification message.
///
/// Written by one request and removed by the first render that consults it,
/// so a message set during request N is visible exactly once.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFlash(pub String);

impl SessionFlash {
    /// Store a flash message, replacing any unread one.
    pub async fn set(session: &Session, message: &str) -> Result<(), Error> {
        session
            .insert(SESSION_FLASH_KEY, SessionFlash(message.to_string()))
            .await?;

        Ok(())
    }

    /// Read and discard the flash message, if any.
    pub async fn take(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .map(|SessionFlash(message)| message))
    }
}
