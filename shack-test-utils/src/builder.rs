//! Declarative test builder.
//!
//! Configuration methods queue work that is executed by the final `build()`
//! call, which produces a ready [`TestContext`].

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,
    users: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
            users: Vec::new(),
        }
    }

    /// Create the `session` and `shack_user` tables during `build()`.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a user row with the given email for insertion during `build()`.
    ///
    /// Implies [`with_core_tables`](Self::with_core_tables).
    pub fn with_user(mut self, email: &str) -> Self {
        self.include_core_tables = true;
        self.users.push(email.to_string());
        self
    }

    /// Execute all queued setup and return the finished context.
    pub async fn build(mut self) -> Result<TestContext, TestError> {
        if self.include_core_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            self.tables
                .insert(0, schema.create_table_from_entity(entity::prelude::Session));
            self.tables
                .insert(1, schema.create_table_from_entity(entity::prelude::ShackUser));
        }

        let context = TestContext::new().await?;
        context.with_tables(self.tables).await?;

        for email in &self.users {
            context.insert_user(email).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
