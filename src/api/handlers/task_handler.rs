//! Task definition handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Frequency, NewTask, TaskResponse, UpdateTask};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Task creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    /// Human-assigned task code, unique per yard
    #[validate(length(min = 1, message = "Task id is required"))]
    #[schema(example = "T-0142")]
    pub task_id: String,
    pub equipment_id: Uuid,
    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "Replace hydraulic filter")]
    pub description: String,
    pub frequency: Frequency,
    #[validate(range(min = 0, message = "Planned hours must not be negative"))]
    pub planned_hours: i32,
}

/// Task update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, message = "Task id must not be empty"))]
    pub task_id: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    pub frequency: Option<Frequency>,
    #[validate(range(min = 0, message = "Planned hours must not be negative"))]
    pub planned_hours: Option<i32>,
}

/// Task list filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskListQuery {
    /// Restrict to one piece of equipment
    pub equipment_id: Option<Uuid>,
}

/// Create task routes
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", get(get_task).put(update_task).delete(delete_task))
}

/// List tasks, paginated
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    params(PaginationParams, TaskListQuery),
    responses(
        (status = 200, description = "Paginated task list")
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<TaskListQuery>,
) -> AppResult<Json<Paginated<TaskResponse>>> {
    let (tasks, total) = state
        .task_service
        .list_tasks(&params, query.equipment_id)
        .await?;

    let data = tasks.into_iter().map(TaskResponse::from).collect();

    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Define a maintenance task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Validation error or unknown equipment"),
        (status = 409, description = "Task id already exists")
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTaskRequest>,
) -> AppResult<Created<TaskResponse>> {
    let task = state
        .task_service
        .create_task(NewTask {
            task_id: payload.task_id,
            equipment_id: payload.equipment_id,
            description: payload.description,
            frequency: payload.frequency,
            planned_hours: payload.planned_hours,
        })
        .await?;

    Ok(Created(TaskResponse::from(task)))
}

/// Get a task by id
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 404, description = "Task not found")
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TaskResponse>> {
    let task = state.task_service.get_task(id).await?;

    Ok(Json(TaskResponse::from(task)))
}

/// Update a task
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Task not found"),
        (status = 409, description = "Task id already exists")
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateTaskRequest>,
) -> AppResult<Json<TaskResponse>> {
    let task = state
        .task_service
        .update_task(
            id,
            UpdateTask {
                task_id: payload.task_id,
                description: payload.description,
                frequency: payload.frequency,
                planned_hours: payload.planned_hours,
            },
        )
        .await?;

    Ok(Json(TaskResponse::from(task)))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found")
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.task_service.delete_task(id).await?;

    Ok(NoContent)
}
