//! Migration: Create the inventory items table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inventory::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inventory::Name).string().not_null())
                    .col(ColumnDef::new(Inventory::PartNumber).string().null())
                    .col(ColumnDef::new(Inventory::Quantity).integer().not_null())
                    .col(ColumnDef::new(Inventory::Unit).string().not_null())
                    .col(ColumnDef::new(Inventory::MinQuantity).integer().not_null())
                    .col(ColumnDef::new(Inventory::Location).string().null())
                    .col(
                        ColumnDef::new(Inventory::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Inventory::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Inventory {
    #[iden = "inventory_items"]
    Table,
    Id,
    Name,
    PartNumber,
    Quantity,
    Unit,
    MinQuantity,
    Location,
    CreatedAt,
    UpdatedAt,
}
