//! Create `contact` table.
//! Holds contact-form submissions; `status` starts as `new`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(uuid(Contact::Id).primary_key())
                    .col(string_len(Contact::Name, 256).not_null())
                    .col(string_len(Contact::Company, 256).not_null())
                    .col(string_len(Contact::Email, 320).not_null())
                    .col(string_len_null(Contact::Phone, 64))
                    .col(string_len(Contact::Industry, 128).not_null())
                    .col(text(Contact::Message).not_null())
                    .col(timestamp_with_time_zone(Contact::CreatedAt).not_null())
                    .col(string_len(Contact::Status, 32).not_null().default("new"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact {
    Table,
    Id,
    Name,
    Company,
    Email,
    Phone,
    Industry,
    Message,
    CreatedAt,
    Status,
}
