use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(string(Session::Id).primary_key())
                    .col(json(Session::Data))
                    .col(timestamp_with_time_zone(Session::ExpiryDate))
                    .to_owned(),
            )
            .await?;

        // The expiry sweeper filters on this column.
        manager
            .create_index(
                Index::create()
                    .name("idx_session_expiry_date")
                    .table(Session::Table)
                    .col(Session::ExpiryDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    Id,
    Data,
    ExpiryDate,
}
