//! Create `status_check` table (legacy client ping log).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusCheck::Table)
                    .if_not_exists()
                    .col(uuid(StatusCheck::Id).primary_key())
                    .col(string_len(StatusCheck::ClientName, 256).not_null())
                    .col(timestamp_with_time_zone(StatusCheck::Timestamp).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StatusCheck::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StatusCheck {
    Table,
    Id,
    ClientName,
    Timestamp,
}
