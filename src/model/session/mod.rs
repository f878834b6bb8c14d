//! Session data models and utilities.
//!
//! Type-safe wrappers for the values this application stores in the session
//! data map: the authenticated user reference and the single-read flash
//! message. Each wrapper owns its session key and the insert/get/remove
//! operations for it.

pub mod flash;
pub mod user;
