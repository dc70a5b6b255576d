//! Migration: Create owners, site_settings and testimonials tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owners::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Owners::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Owners::Name).string().not_null())
                    .col(ColumnDef::new(Owners::Role).string().null())
                    .col(ColumnDef::new(Owners::Bio).text().null())
                    .col(ColumnDef::new(Owners::PhotoUrl).string().null())
                    .col(
                        ColumnDef::new(Owners::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Owners::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Owners::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_owners_active_order")
                    .table(Owners::Table)
                    .col(Owners::IsActive)
                    .col(Owners::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        // Singleton: the service only ever writes id = 1
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteSettings::CompanyName).string().null())
                    .col(ColumnDef::new(SiteSettings::OwnerName).string().null())
                    .col(ColumnDef::new(SiteSettings::LicenseNumber).string().null())
                    .col(ColumnDef::new(SiteSettings::Phone).string().null())
                    .col(ColumnDef::new(SiteSettings::Whatsapp).string().null())
                    .col(ColumnDef::new(SiteSettings::Email).string().null())
                    .col(ColumnDef::new(SiteSettings::Address).text().null())
                    .col(ColumnDef::new(SiteSettings::InstagramUrl).string().null())
                    .col(ColumnDef::new(SiteSettings::FacebookUrl).string().null())
                    .col(ColumnDef::new(SiteSettings::About).text().null())
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonials::AuthorName).string().not_null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::Rating).integer().null())
                    .col(
                        ColumnDef::new(Testimonials::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Owners::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Owners {
    Table,
    Id,
    Name,
    Role,
    Bio,
    PhotoUrl,
    IsActive,
    DisplayOrder,
    CreatedAt,
}

#[derive(Iden)]
enum SiteSettings {
    Table,
    Id,
    CompanyName,
    OwnerName,
    LicenseNumber,
    Phone,
    Whatsapp,
    Email,
    Address,
    InstagramUrl,
    FacebookUrl,
    About,
    UpdatedAt,
}

#[derive(Iden)]
enum Testimonials {
    Table,
    Id,
    AuthorName,
    Content,
    Rating,
    IsActive,
    CreatedAt,
}
