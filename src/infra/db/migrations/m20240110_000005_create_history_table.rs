//! Migration: Create the maintenance history table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(History::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(History::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(History::EquipmentId).uuid().not_null())
                    .col(ColumnDef::new(History::TaskId).uuid().null())
                    .col(ColumnDef::new(History::Kind).string().not_null())
                    .col(ColumnDef::new(History::Description).string().not_null())
                    .col(ColumnDef::new(History::DatePerformed).date().not_null())
                    .col(ColumnDef::new(History::HoursSpent).integer().not_null())
                    .col(ColumnDef::new(History::PerformedBy).string().null())
                    .col(
                        ColumnDef::new(History::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_history_equipment")
                            .from(History::Table, History::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_history_task")
                            .from(History::Table, History::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_history_equipment_id")
                    .table(History::Table)
                    .col(History::EquipmentId)
                    .to_owned(),
            )
            .await?;

        // Report queries filter on the performed date
        manager
            .create_index(
                Index::create()
                    .name("idx_history_date_performed")
                    .table(History::Table)
                    .col(History::DatePerformed)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(History::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum History {
    #[iden = "maintenance_history"]
    Table,
    Id,
    EquipmentId,
    TaskId,
    Kind,
    Description,
    DatePerformed,
    HoursSpent,
    PerformedBy,
    CreatedAt,
}

#[derive(Iden)]
enum Equipment {
    Table,
    Id,
}

#[derive(Iden)]
enum Tasks {
    Table,
    Id,
}
