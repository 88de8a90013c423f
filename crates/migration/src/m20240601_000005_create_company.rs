//! Create `company` table.
//! Logical singleton; `social` maps platform name to profile URL.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(uuid(Company::Id).primary_key())
                    .col(string_len(Company::Name, 256).not_null())
                    .col(text(Company::Description).not_null())
                    .col(string_len(Company::Email, 320).not_null())
                    .col(string_len(Company::Phone, 64).not_null())
                    .col(string_len(Company::Address, 512).not_null())
                    .col(json_binary(Company::Social).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    Name,
    Description,
    Email,
    Phone,
    Address,
    Social,
}
