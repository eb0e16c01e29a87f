//! Maintenance job handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Criticality, Frequency, JobFilter, JobResponse, NewJob, UpdateJob};
use crate::errors::AppResult;
use crate::services::CompleteJob;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Job creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    pub equipment_id: Uuid,
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Grease wire ropes")]
    pub title: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub criticality: Criticality,
    /// Date the job was last done; seeds the schedule
    pub date_done: NaiveDate,
    #[validate(range(min = 0, message = "Planned hours must not be negative"))]
    pub planned_hours: i32,
    #[validate(range(min = 0, message = "Hours worked must not be negative"))]
    #[serde(default)]
    pub hours_worked: i32,
    pub assigned_to: Option<String>,
}

/// Job update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<Frequency>,
    pub criticality: Option<Criticality>,
    pub date_done: Option<NaiveDate>,
    #[validate(range(min = 0, message = "Planned hours must not be negative"))]
    pub planned_hours: Option<i32>,
    #[validate(range(min = 0, message = "Hours worked must not be negative"))]
    pub hours_worked: Option<i32>,
    pub assigned_to: Option<String>,
}

/// Job completion request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompleteJobRequest {
    /// Completion date; defaults to today
    pub completed_on: Option<NaiveDate>,
    #[validate(range(min = 0, message = "Hours spent must not be negative"))]
    pub hours_spent: i32,
    #[schema(example = "Asha Rahman")]
    pub performed_by: Option<String>,
    pub notes: Option<String>,
}

/// Job list filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobListQuery {
    /// Restrict to one piece of equipment
    pub equipment_id: Option<Uuid>,
    pub criticality: Option<Criticality>,
    /// When true, only jobs past their due date
    #[serde(default)]
    pub overdue: bool,
}

/// Create job routes
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/:id", get(get_job).put(update_job).delete(delete_job))
        .route("/:id/complete", post(complete_job))
}

/// List jobs, paginated
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "Jobs",
    params(PaginationParams, JobListQuery),
    responses(
        (status = 200, description = "Paginated job list")
    )
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<JobListQuery>,
) -> AppResult<Json<Paginated<JobResponse>>> {
    let filter = JobFilter {
        equipment_id: query.equipment_id,
        criticality: query.criticality,
        overdue_before: query.overdue.then(|| Utc::now().date_naive()),
    };
    let (jobs, total) = state.job_service.list_jobs(&params, filter).await?;

    let data = jobs.into_iter().map(JobResponse::from).collect();

    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Create a recurring maintenance job
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "Jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 400, description = "Validation error or unknown equipment")
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateJobRequest>,
) -> AppResult<Created<JobResponse>> {
    let job = state
        .job_service
        .create_job(NewJob {
            equipment_id: payload.equipment_id,
            title: payload.title,
            description: payload.description,
            frequency: payload.frequency,
            criticality: payload.criticality,
            date_done: payload.date_done,
            planned_hours: payload.planned_hours,
            hours_worked: payload.hours_worked,
            assigned_to: payload.assigned_to,
        })
        .await?;

    Ok(Created(JobResponse::from(job)))
}

/// Get a job by id
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "Jobs",
    params(("id" = Uuid, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job found", body = JobResponse),
        (status = 404, description = "Job not found")
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JobResponse>> {
    let job = state.job_service.get_job(id).await?;

    Ok(Json(JobResponse::from(job)))
}

/// Update a job; derived schedule fields are recomputed
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    tag = "Jobs",
    params(("id" = Uuid, Path, description = "Job id")),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateJobRequest>,
) -> AppResult<Json<JobResponse>> {
    let job = state
        .job_service
        .update_job(
            id,
            UpdateJob {
                title: payload.title,
                description: payload.description,
                frequency: payload.frequency,
                criticality: payload.criticality,
                date_done: payload.date_done,
                planned_hours: payload.planned_hours,
                hours_worked: payload.hours_worked,
                assigned_to: payload.assigned_to,
            },
        )
        .await?;

    Ok(Json(JobResponse::from(job)))
}

/// Delete a job
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "Jobs",
    params(("id" = Uuid, Path, description = "Job id")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.job_service.delete_job(id).await?;

    Ok(NoContent)
}

/// Complete a job: record history and roll the schedule forward
#[utoipa::path(
    post,
    path = "/jobs/{id}/complete",
    tag = "Jobs",
    params(("id" = Uuid, Path, description = "Job id")),
    request_body = CompleteJobRequest,
    responses(
        (status = 200, description = "Job completed and rescheduled", body = JobResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn complete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CompleteJobRequest>,
) -> AppResult<Json<JobResponse>> {
    let job = state
        .job_service
        .complete_job(
            id,
            CompleteJob {
                completed_on: payload.completed_on.unwrap_or_else(|| Utc::now().date_naive()),
                hours_spent: payload.hours_spent,
                performed_by: payload.performed_by,
                notes: payload.notes,
            },
        )
        .await?;

    Ok(Json(JobResponse::from(job)))
}
