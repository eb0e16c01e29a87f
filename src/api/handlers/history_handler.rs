//! Maintenance history handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{HistoryFilter, HistoryResponse, MaintenanceKind, NewHistory};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Ad-hoc history entry request, typically a corrective repair
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHistoryRequest {
    pub equipment_id: Uuid,
    /// Optional link to the task that was executed
    pub task_id: Option<Uuid>,
    pub kind: MaintenanceKind,
    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "Replaced sheared shear-leg bolt")]
    pub description: String,
    pub date_performed: NaiveDate,
    #[validate(range(min = 0, message = "Hours spent must not be negative"))]
    pub hours_spent: i32,
    pub performed_by: Option<String>,
}

/// History list filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryListQuery {
    /// Restrict to one piece of equipment
    pub equipment_id: Option<Uuid>,
    pub kind: Option<MaintenanceKind>,
}

/// Create history routes
pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_history).post(create_history))
        .route("/:id", get(get_history).delete(delete_history))
}

/// List history entries, paginated, newest first
#[utoipa::path(
    get,
    path = "/history",
    tag = "History",
    params(PaginationParams, HistoryListQuery),
    responses(
        (status = 200, description = "Paginated history list")
    )
)]
pub async fn list_history(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<HistoryListQuery>,
) -> AppResult<Json<Paginated<HistoryResponse>>> {
    let filter = HistoryFilter {
        equipment_id: query.equipment_id,
        kind: query.kind,
    };
    let (entries, total) = state.history_service.list_entries(&params, filter).await?;

    let data = entries.into_iter().map(HistoryResponse::from).collect();

    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Record a maintenance activity
#[utoipa::path(
    post,
    path = "/history",
    tag = "History",
    request_body = CreateHistoryRequest,
    responses(
        (status = 201, description = "Entry recorded", body = HistoryResponse),
        (status = 400, description = "Validation error or unknown equipment")
    )
)]
pub async fn create_history(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateHistoryRequest>,
) -> AppResult<Created<HistoryResponse>> {
    let entry = state
        .history_service
        .record_entry(NewHistory {
            equipment_id: payload.equipment_id,
            task_id: payload.task_id,
            kind: payload.kind,
            description: payload.description,
            date_performed: payload.date_performed,
            hours_spent: payload.hours_spent,
            performed_by: payload.performed_by,
        })
        .await?;

    Ok(Created(HistoryResponse::from(entry)))
}

/// Get a history entry by id
#[utoipa::path(
    get,
    path = "/history/{id}",
    tag = "History",
    params(("id" = Uuid, Path, description = "History entry id")),
    responses(
        (status = 200, description = "Entry found", body = HistoryResponse),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<HistoryResponse>> {
    let entry = state.history_service.get_entry(id).await?;

    Ok(Json(HistoryResponse::from(entry)))
}

/// Delete a history entry
#[utoipa::path(
    delete,
    path = "/history/{id}",
    tag = "History",
    params(("id" = Uuid, Path, description = "History entry id")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.history_service.delete_entry(id).await?;

    Ok(NoContent)
}
