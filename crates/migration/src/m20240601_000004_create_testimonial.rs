//! Create `testimonial` table.
//! Only rows with `active = true` are ever listed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(uuid(Testimonial::Id).primary_key())
                    .col(text(Testimonial::Quote).not_null())
                    .col(string_len(Testimonial::Author, 256).not_null())
                    .col(string_len(Testimonial::Position, 256).not_null())
                    .col(string_len(Testimonial::Company, 256).not_null())
                    .col(timestamp_with_time_zone(Testimonial::CreatedAt).not_null())
                    .col(boolean(Testimonial::Active).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Testimonial::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Testimonial {
    Table,
    Id,
    Quote,
    Author,
    Position,
    Company,
    CreatedAt,
    Active,
}
