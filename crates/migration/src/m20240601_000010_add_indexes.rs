//! Indexes backing the list queries: newest-first scans, category filter,
//! active testimonials and service ordering.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_created_at")
                    .table(Contact::Table)
                    .col(Contact::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_category_created_at")
                    .table(Project::Table)
                    .col(Project::Category)
                    .col(Project::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_testimonial_active_created_at")
                    .table(Testimonial::Table)
                    .col(Testimonial::Active)
                    .col(Testimonial::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_order")
                    .table(Service::Table)
                    .col(Service::Order)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_created_at").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_project_category_created_at").table(Project::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_testimonial_active_created_at").table(Testimonial::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_order").table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, CreatedAt }

#[derive(DeriveIden)]
enum Project { Table, Category, CreatedAt }

#[derive(DeriveIden)]
enum Testimonial { Table, Active, CreatedAt }

#[derive(DeriveIden)]
enum Service { Table, Order }
