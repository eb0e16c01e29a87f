//! Equipment and category handlers.

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
use crate::domain::{
    CategoryResponse, EquipmentResponse, HistoryResponse, JobResponse, NewEquipment,
    UpdateEquipment,
};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Category create/rename request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    /// Category name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Lifting gear")]
    pub name: String,
}

/// Equipment registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentRequest {
    /// Unique yard asset code
    #[validate(length(min = 1, message = "Code is required"))]
    #[schema(example = "CR-001")]
    pub code: String,
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Gantry crane no. 1")]
    pub name: String,
    pub category_id: Uuid,
    #[schema(example = "Liebherr")]
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    #[schema(example = "Pier 3")]
    pub location: Option<String>,
}

/// Equipment update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipmentRequest {
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: Option<String>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
}

/// Equipment list filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EquipmentListQuery {
    /// Restrict to one category
    pub category_id: Option<Uuid>,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// Create equipment routes
pub fn equipment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_equipment).post(create_equipment))
        .route(
            "/:id",
            get(get_equipment).put(update_equipment).delete(delete_equipment),
        )
        .route("/:id/jobs", get(list_equipment_jobs))
        .route("/:id/history", get(list_equipment_history))
}

/// List all equipment categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "List of categories", body = [CategoryResponse])
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state.equipment_service.list_categories().await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Create an equipment category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryRequest>,
) -> AppResult<Created<CategoryResponse>> {
    let category = state.equipment_service.create_category(payload.name).await?;

    Ok(Created(CategoryResponse::from(category)))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.equipment_service.get_category(id).await?;

    Ok(Json(CategoryResponse::from(category)))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state
        .equipment_service
        .update_category(id, payload.name)
        .await?;

    Ok(Json(CategoryResponse::from(category)))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Category still referenced by equipment"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.equipment_service.delete_category(id).await?;

    Ok(NoContent)
}

/// List equipment, paginated
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "Equipment",
    params(PaginationParams, EquipmentListQuery),
    responses(
        (status = 200, description = "Paginated equipment list")
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<EquipmentListQuery>,
) -> AppResult<Json<Paginated<EquipmentResponse>>> {
    let (items, total) = state
        .equipment_service
        .list_equipment(&params, filter.category_id)
        .await?;

    let data = items.into_iter().map(EquipmentResponse::from).collect();

    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Register new equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "Equipment",
    request_body = CreateEquipmentRequest,
    responses(
        (status = 201, description = "Equipment registered", body = EquipmentResponse),
        (status = 400, description = "Validation error or unknown category"),
        (status = 409, description = "Equipment code already exists")
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEquipmentRequest>,
) -> AppResult<Created<EquipmentResponse>> {
    let equipment = state
        .equipment_service
        .create_equipment(NewEquipment {
            code: payload.code,
            name: payload.name,
            category_id: payload.category_id,
            manufacturer: payload.manufacturer,
            model: payload.model,
            location: payload.location,
        })
        .await?;

    Ok(Created(EquipmentResponse::from(equipment)))
}

/// Get equipment by id
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "Equipment",
    params(("id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "Equipment found", body = EquipmentResponse),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentResponse>> {
    let equipment = state.equipment_service.get_equipment(id).await?;

    Ok(Json(EquipmentResponse::from(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "Equipment",
    params(("id" = Uuid, Path, description = "Equipment id")),
    request_body = UpdateEquipmentRequest,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentResponse),
        (status = 400, description = "Validation error or unknown category"),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Equipment code already exists")
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEquipmentRequest>,
) -> AppResult<Json<EquipmentResponse>> {
    let equipment = state
        .equipment_service
        .update_equipment(
            id,
            UpdateEquipment {
                code: payload.code,
                name: payload.name,
                category_id: payload.category_id,
                manufacturer: payload.manufacturer,
                model: payload.model,
                location: payload.location,
            },
        )
        .await?;

    Ok(Json(EquipmentResponse::from(equipment)))
}

/// Delete equipment and its jobs, tasks and history
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "Equipment",
    params(("id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.equipment_service.delete_equipment(id).await?;

    Ok(NoContent)
}

/// List all jobs for one piece of equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/jobs",
    tag = "Equipment",
    params(("id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "Jobs for the equipment", body = [JobResponse]),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<JobResponse>>> {
    // 404 when the equipment itself is missing
    state.equipment_service.get_equipment(id).await?;
    let jobs = state.job_service.list_for_equipment(id).await?;

    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// List the maintenance history of one piece of equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/history",
    tag = "Equipment",
    params(("id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "History entries for the equipment", body = [HistoryResponse]),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<HistoryResponse>>> {
    state.equipment_service.get_equipment(id).await?;
    let entries = state.history_service.list_for_equipment(id).await?;

    Ok(Json(entries.into_iter().map(HistoryResponse::from).collect()))
}
