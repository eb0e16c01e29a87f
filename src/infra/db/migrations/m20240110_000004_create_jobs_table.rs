//! Migration: Create the jobs table.
//!
//! `date_due`, `remaining_hours` and `overdue_days` are stored derived
//! values; writers recompute them, the schema does not enforce them.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Jobs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Jobs::EquipmentId).uuid().not_null())
                    .col(ColumnDef::new(Jobs::Title).string().not_null())
                    .col(ColumnDef::new(Jobs::Description).string().null())
                    .col(ColumnDef::new(Jobs::Frequency).string().not_null())
                    .col(ColumnDef::new(Jobs::Criticality).string().not_null())
                    .col(ColumnDef::new(Jobs::DateDone).date().not_null())
                    .col(ColumnDef::new(Jobs::DateDue).date().not_null())
                    .col(ColumnDef::new(Jobs::PlannedHours).integer().not_null())
                    .col(ColumnDef::new(Jobs::HoursWorked).integer().not_null())
                    .col(ColumnDef::new(Jobs::RemainingHours).integer().not_null())
                    .col(ColumnDef::new(Jobs::OverdueDays).big_integer().not_null())
                    .col(ColumnDef::new(Jobs::AssignedTo).string().null())
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_equipment")
                            .from(Jobs::Table, Jobs::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_equipment_id")
                    .table(Jobs::Table)
                    .col(Jobs::EquipmentId)
                    .to_owned(),
            )
            .await?;

        // Dashboard and report queries filter on the due date
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_date_due")
                    .table(Jobs::Table)
                    .col(Jobs::DateDue)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Jobs {
    Table,
    Id,
    EquipmentId,
    Title,
    Description,
    Frequency,
    Criticality,
    DateDone,
    DateDue,
    PlannedHours,
    HoursWorked,
    RemainingHours,
    OverdueDays,
    AssignedTo,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Equipment {
    Table,
    Id,
}
