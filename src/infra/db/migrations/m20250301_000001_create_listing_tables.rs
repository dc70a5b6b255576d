//! Migration: Create profiles and properties tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per auth user, same id
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Profiles::Role)
                            .string_len(32)
                            .not_null()
                            .default("viewer"),
                    )
                    .col(ColumnDef::new(Profiles::FullName).string().null())
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
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
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Properties::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Properties::Title).string().not_null())
                    .col(ColumnDef::new(Properties::Description).text().null())
                    .col(
                        ColumnDef::new(Properties::Status)
                            .string_len(32)
                            .not_null()
                            .default("available"),
                    )
                    .col(ColumnDef::new(Properties::Bedrooms).integer().null())
                    .col(ColumnDef::new(Properties::Bathrooms).integer().null())
                    .col(ColumnDef::new(Properties::Price).double().null())
                    .col(ColumnDef::new(Properties::AreaM2).double().null())
                    .col(ColumnDef::new(Properties::Address).string().null())
                    .col(ColumnDef::new(Properties::City).string().null())
                    .col(ColumnDef::new(Properties::Neighborhood).string().null())
                    .col(ColumnDef::new(Properties::MainPhotoUrl).string().null())
                    .col(ColumnDef::new(Properties::Photo2Url).string().null())
                    .col(ColumnDef::new(Properties::Photo3Url).string().null())
                    .col(ColumnDef::new(Properties::CreatedBy).uuid().null())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always ordered newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_properties_created_at")
                    .table(Properties::Table)
                    .col(Properties::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_properties_status")
                    .table(Properties::Table)
                    .col(Properties::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    Role,
    FullName,
    CreatedAt,
}

#[derive(Iden)]
enum Properties {
    Table,
    Id,
    Title,
    Description,
    Status,
    Bedrooms,
    Bathrooms,
    Price,
    #[iden = "area_m2"]
    AreaM2,
    Address,
    City,
    Neighborhood,
    MainPhotoUrl,
    #[iden = "photo_2_url"]
    Photo2Url,
    #[iden = "photo_3_url"]
    Photo3Url,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
