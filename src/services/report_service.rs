//! Report service - dashboard aggregation and report data assembly.
//!
//! Reports are returned as structured JSON; rendering them to PDF or
//! spreadsheet artifacts is a client concern.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use futures::future;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::DUE_SOON_WINDOW_DAYS;
use crate::domain::{
    EquipmentResponse, HistoryResponse, InventoryResponse, JobResponse, MaintenanceKind,
};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Aggregated counts for the dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub equipment_total: u64,
    pub jobs_total: u64,
    /// Jobs whose due date has passed
    pub jobs_overdue: u64,
    /// Jobs due within the next seven days
    pub jobs_due_soon: u64,
    pub history_scheduled: u64,
    pub history_corrective: u64,
    pub inventory_low_stock: u64,
    pub generated_at: DateTime<Utc>,
}

/// Per-equipment slice of the maintenance report.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentActivity {
    pub equipment: EquipmentResponse,
    pub jobs_due: Vec<JobResponse>,
    pub history: Vec<HistoryResponse>,
    /// Total hours recorded in the window
    pub hours_spent: i32,
}

/// Maintenance report data for a date window.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaintenanceReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub equipment: Vec<EquipmentActivity>,
    pub generated_at: DateTime<Utc>,
}

/// Inventory snapshot report.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryReport {
    pub items: Vec<InventoryResponse>,
    pub total_items: u64,
    pub low_stock_items: u64,
    pub generated_at: DateTime<Utc>,
}

/// Report service trait for dependency injection.
#[async_trait]
pub trait ReportService: Send + Sync {
    async fn dashboard(&self) -> AppResult<DashboardSummary>;
    async fn maintenance_report(&self, from: NaiveDate, to: NaiveDate)
        -> AppResult<MaintenanceReport>;
    async fn inventory_report(&self) -> AppResult<InventoryReport>;
}

/// Concrete implementation of ReportService using Unit of Work.
pub struct ReportManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReportManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReportService for ReportManager<U> {
    async fn dashboard(&self) -> AppResult<DashboardSummary> {
        let today = Utc::now().date_naive();
        let equipment = self.uow.equipment();
        let jobs = self.uow.jobs();
        let history = self.uow.history();
        let inventory = self.uow.inventory();

        // Independent counts, fetched concurrently
        let (
            equipment_total,
            jobs_total,
            jobs_overdue,
            jobs_due_soon,
            history_scheduled,
            history_corrective,
            inventory_low_stock,
        ) = tokio::try_join!(
            equipment.count(),
            jobs.count(),
            jobs.count_overdue(today),
            jobs.count_due_within(today, DUE_SOON_WINDOW_DAYS),
            history.count_by_kind(MaintenanceKind::Scheduled),
            history.count_by_kind(MaintenanceKind::Corrective),
            inventory.count_low_stock(),
        )?;

        Ok(DashboardSummary {
            equipment_total,
            jobs_total,
            jobs_overdue,
            jobs_due_soon,
            history_scheduled,
            history_corrective,
            inventory_low_stock,
            generated_at: Utc::now(),
        })
    }

    async fn maintenance_report(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<MaintenanceReport> {
        let jobs_repo = self.uow.jobs();
        let history_repo = self.uow.history();

        let (jobs, history) = tokio::try_join!(
            jobs_repo.list_due_between(from, to),
            history_repo.list_between(from, to),
        )?;

        // Group activity by equipment, preserving a stable order
        let mut jobs_by_equipment: BTreeMap<Uuid, Vec<JobResponse>> = BTreeMap::new();
        for job in jobs {
            jobs_by_equipment
                .entry(job.equipment_id)
                .or_default()
                .push(JobResponse::from(job));
        }
        let mut history_by_equipment: BTreeMap<Uuid, Vec<HistoryResponse>> = BTreeMap::new();
        for entry in history {
            history_by_equipment
                .entry(entry.equipment_id)
                .or_default()
                .push(HistoryResponse::from(entry));
        }

        let mut equipment_ids: Vec<Uuid> = jobs_by_equipment.keys().copied().collect();
        for id in history_by_equipment.keys() {
            if !equipment_ids.contains(id) {
                equipment_ids.push(*id);
            }
        }

        let equipment_repo = self.uow.equipment();
        let found = future::try_join_all(
            equipment_ids
                .iter()
                .map(|id| equipment_repo.find_by_id(*id)),
        )
        .await?;

        let mut activity = Vec::with_capacity(equipment_ids.len());
        for (id, equipment) in equipment_ids.into_iter().zip(found) {
            // Equipment deleted between the queries is simply skipped
            let Some(equipment) = equipment else {
                continue;
            };

            let history = history_by_equipment.remove(&id).unwrap_or_default();
            let hours_spent = history.iter().map(|h| h.hours_spent).sum();

            activity.push(EquipmentActivity {
                equipment: EquipmentResponse::from(equipment),
                jobs_due: jobs_by_equipment.remove(&id).unwrap_or_default(),
                history,
                hours_spent,
            });
        }

        Ok(MaintenanceReport {
            from,
            to,
            equipment: activity,
            generated_at: Utc::now(),
        })
    }

    async fn inventory_report(&self) -> AppResult<InventoryReport> {
        let items = self.uow.inventory().list_all().await?;

        let responses: Vec<InventoryResponse> =
            items.into_iter().map(InventoryResponse::from).collect();
        let total_items = responses.len() as u64;
        let low_stock_items = responses.iter().filter(|i| i.low_stock).count() as u64;

        Ok(InventoryReport {
            items: responses,
            total_items,
            low_stock_items,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Criticality, Equipment, Frequency, InventoryItem, Job, MaintenanceHistory};
    use crate::infra::test_support::{SharedTestUow, TestUnitOfWork};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn equipment(id: Uuid) -> Equipment {
        Equipment {
            id,
            code: "CR-001".to_string(),
            name: "Gantry crane".to_string(),
            category_id: Uuid::new_v4(),
            manufacturer: None,
            model: None,
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn job(equipment_id: Uuid, due: NaiveDate) -> Job {
        Job {
            id: Uuid::new_v4(),
            equipment_id,
            title: "Grease wire ropes".to_string(),
            description: None,
            frequency: Frequency::Weekly,
            criticality: Criticality::Medium,
            date_done: due - chrono::Duration::days(7),
            date_due: due,
            planned_hours: 4,
            hours_worked: 0,
            remaining_hours: 4,
            overdue_days: 0,
            assigned_to: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn history_entry(equipment_id: Uuid, hours: i32) -> MaintenanceHistory {
        MaintenanceHistory {
            id: Uuid::new_v4(),
            equipment_id,
            task_id: None,
            kind: MaintenanceKind::Corrective,
            description: "Replaced hoist brake pads".to_string(),
            date_performed: date(2024, 3, 10),
            hours_spent: hours,
            performed_by: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_dashboard_aggregates_counts() {
        let mut uow = TestUnitOfWork::default();
        uow.equipment.expect_count().returning(|| Ok(12));
        uow.jobs.expect_count().returning(|| Ok(30));
        uow.jobs.expect_count_overdue().returning(|_| Ok(4));
        uow.jobs.expect_count_due_within().returning(|_, _| Ok(6));
        uow.history
            .expect_count_by_kind()
            .returning(|kind| match kind {
                MaintenanceKind::Scheduled => Ok(20),
                MaintenanceKind::Corrective => Ok(8),
            });
        uow.inventory.expect_count_low_stock().returning(|| Ok(3));

        let service = ReportManager::new(Arc::new(SharedTestUow::from(uow)));
        let summary = service.dashboard().await.unwrap();

        assert_eq!(summary.equipment_total, 12);
        assert_eq!(summary.jobs_overdue, 4);
        assert_eq!(summary.jobs_due_soon, 6);
        assert_eq!(summary.history_scheduled, 20);
        assert_eq!(summary.history_corrective, 8);
        assert_eq!(summary.inventory_low_stock, 3);
    }

    #[tokio::test]
    async fn test_maintenance_report_groups_by_equipment() {
        let equipment_id = Uuid::new_v4();
        let from = date(2024, 3, 1);
        let to = date(2024, 3, 31);

        let mut uow = TestUnitOfWork::default();
        uow.jobs
            .expect_list_due_between()
            .returning(move |_, _| Ok(vec![job(equipment_id, date(2024, 3, 15))]));
        uow.history.expect_list_between().returning(move |_, _| {
            Ok(vec![
                history_entry(equipment_id, 3),
                history_entry(equipment_id, 2),
            ])
        });
        uow.equipment
            .expect_find_by_id()
            .returning(|id| Ok(Some(equipment(id))));

        let service = ReportManager::new(Arc::new(SharedTestUow::from(uow)));
        let report = service.maintenance_report(from, to).await.unwrap();

        assert_eq!(report.equipment.len(), 1);
        let activity = &report.equipment[0];
        assert_eq!(activity.jobs_due.len(), 1);
        assert_eq!(activity.history.len(), 2);
        assert_eq!(activity.hours_spent, 5);
    }

    #[tokio::test]
    async fn test_inventory_report_flags_low_stock() {
        let mut uow = TestUnitOfWork::default();
        uow.inventory.expect_list_all().returning(|| {
            let make = |quantity: i32, min_quantity: i32| InventoryItem {
                id: Uuid::new_v4(),
                name: "Cutting tip".to_string(),
                part_number: None,
                quantity,
                unit: "pcs".to_string(),
                min_quantity,
                location: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            Ok(vec![make(2, 5), make(50, 5)])
        });

        let service = ReportManager::new(Arc::new(SharedTestUow::from(uow)));
        let report = service.inventory_report().await.unwrap();

        assert_eq!(report.total_items, 2);
        assert_eq!(report.low_stock_items, 1);
    }
}
