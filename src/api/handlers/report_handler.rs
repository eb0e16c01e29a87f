//! Dashboard and report handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::config::{REPORT_LOOKAHEAD_DAYS, REPORT_LOOKBACK_DAYS};
use crate::errors::{AppError, AppResult};
use crate::services::{DashboardSummary, InventoryReport, MaintenanceReport};

/// Maintenance report date window
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportWindowQuery {
    /// Window start; defaults to 30 days ago
    pub from: Option<NaiveDate>,
    /// Window end; defaults to 30 days ahead
    pub to: Option<NaiveDate>,
}

/// Create report routes
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/maintenance", get(maintenance_report))
        .route("/inventory", get(inventory_report))
}

/// Create the dashboard route
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

/// Summary counts for the dashboard
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "Reports",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary)
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = state.report_service.dashboard().await?;

    Ok(Json(summary))
}

/// Maintenance activity report for a date window
#[utoipa::path(
    get,
    path = "/reports/maintenance",
    tag = "Reports",
    params(ReportWindowQuery),
    responses(
        (status = 200, description = "Maintenance report", body = MaintenanceReport),
        (status = 400, description = "Window start is after window end")
    )
)]
pub async fn maintenance_report(
    State(state): State<AppState>,
    Query(query): Query<ReportWindowQuery>,
) -> AppResult<Json<MaintenanceReport>> {
    let today = Utc::now().date_naive();
    let from = query
        .from
        .unwrap_or_else(|| today - Duration::days(REPORT_LOOKBACK_DAYS));
    let to = query
        .to
        .unwrap_or_else(|| today + Duration::days(REPORT_LOOKAHEAD_DAYS));

    if from > to {
        return Err(AppError::bad_request("Window start is after window end"));
    }

    let report = state.report_service.maintenance_report(from, to).await?;

    Ok(Json(report))
}

/// Current inventory snapshot with low-stock flags
#[utoipa::path(
    get,
    path = "/reports/inventory",
    tag = "Reports",
    responses(
        (status = 200, description = "Inventory report", body = InventoryReport)
    )
)]
pub async fn inventory_report(State(state): State<AppState>) -> AppResult<Json<InventoryReport>> {
    let report = state.report_service.inventory_report().await?;

    Ok(Json(report))
}
