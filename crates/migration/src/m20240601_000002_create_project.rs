//! Create `project` table.
//! Portfolio entries filtered by exact `category`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(uuid(Project::Id).primary_key())
                    .col(string_len(Project::Title, 256).not_null())
                    .col(string_len(Project::Category, 128).not_null())
                    .col(string_len(Project::Image, 1024).not_null())
                    .col(text(Project::Description).not_null())
                    .col(timestamp_with_time_zone(Project::CreatedAt).not_null())
                    .col(boolean(Project::Featured).not_null().default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Project::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Title,
    Category,
    Image,
    Description,
    CreatedAt,
    Featured,
}
