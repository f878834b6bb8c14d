//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` bundles an in-memory SQLite
//! database and a memory-backed session for exercising session and data
//! layer code without external services.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ActiveValue, ConnectionTrait, Database,
    DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// Most tests should create this via the builder rather than constructing it
/// directly.
pub struct TestContext {
    /// Connection to an in-memory SQLite database.
    pub db: DatabaseConnection,
    /// Session backed by a memory store, detached from any HTTP pipeline.
    pub session: Session,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Insert a user row with the given email.
    ///
    /// Requires the `shack_user` table, e.g. via
    /// [`TestBuilder::with_core_tables`](crate::TestBuilder::with_core_tables).
    pub async fn insert_user(&self, email: &str) -> Result<entity::shack_user::Model, TestError> {
        let user = entity::shack_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.db).await?)
    }
}
