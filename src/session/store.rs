//! tower-sessions `SessionStore` backed by the `session` table.
//!
//! Records are keyed by the cookie-presented identifier; the data map is
//! stored as JSON and the expiry as a timestamp so expired rows can be
//! filtered on load and swept in bulk.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store, SessionStore,
};

#[derive(Clone, Debug)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Delete all sessions at or past their expiry.
    ///
    /// Returns the number of rows removed. Run periodically by the sweeper
    /// task spawned at startup; expired rows never load either way.
    pub async fn delete_expired(&self) -> Result<u64, sea_orm::DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiryDate.lte(OffsetDateTime::now_utc()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn upsert(&self, record: &Record) -> session_store::Result<()> {
        let data = serde_json::to_value(&record.data)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        let session = entity::session::ActiveModel {
            id: Set(record.id.to_string()),
            data: Set(data),
            expiry_date: Set(record.expiry_date),
        };

        entity::prelude::Session::insert(session)
            .on_conflict(
                OnConflict::column(entity::session::Column::Id)
                    .update_columns([
                        entity::session::Column::Data,
                        entity::session::Column::ExpiryDate,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

#[async_trait]
impl SessionStore for SeaOrmStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        // At most one row per identifier: regenerate on collision rather
        // than silently adopting another session's row.
        while entity::prelude::Session::find_by_id(record.id.to_string())
            .one(&self.db)
            .await
            .map_err(backend)?
            .is_some()
        {
            record.id = Id::default();
        }

        self.upsert(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.upsert(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let Some(session) = entity::prelude::Session::find_by_id(session_id.to_string())
            .one(&self.db)
            .await
            .map_err(backend)?
        else {
            return Ok(None);
        };

        // An expired session must not authenticate a request.
        if session.expiry_date <= OffsetDateTime::now_utc() {
            return Ok(None);
        }

        let data: HashMap<String, serde_json::Value> = serde_json::from_value(session.data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(Record {
            id: *session_id,
            data,
            expiry_date: session.expiry_date,
        }))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        entity::prelude::Session::delete_by_id(session_id.to_string())
            .exec(&self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

fn backend(err: sea_orm::DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}
