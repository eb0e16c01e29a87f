//! Spare-part inventory handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{InventoryResponse, NewInventoryItem, UpdateInventoryItem};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Inventory item creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Oxy-cutting nozzle")]
    pub name: String,
    #[schema(example = "NZ-300-12")]
    pub part_number: Option<String>,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,
    #[validate(length(min = 1, message = "Unit is required"))]
    #[schema(example = "pcs")]
    pub unit: String,
    #[validate(range(min = 0, message = "Minimum quantity must not be negative"))]
    pub min_quantity: i32,
    pub location: Option<String>,
}

/// Inventory item update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub part_number: Option<String>,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i32>,
    #[validate(length(min = 1, message = "Unit must not be empty"))]
    pub unit: Option<String>,
    #[validate(range(min = 0, message = "Minimum quantity must not be negative"))]
    pub min_quantity: Option<i32>,
    pub location: Option<String>,
}

/// Relative stock adjustment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdjustQuantityRequest {
    /// Positive to receive stock, negative to issue it
    #[schema(example = -2)]
    pub delta: i32,
}

/// Inventory list filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryListQuery {
    /// When true, only items at or below their reorder threshold
    #[serde(default)]
    pub low_stock: bool,
}

/// Create inventory routes
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/adjust", post(adjust_quantity))
}

/// List inventory items, paginated
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "Inventory",
    params(PaginationParams, InventoryListQuery),
    responses(
        (status = 200, description = "Paginated inventory list")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(query): Query<InventoryListQuery>,
) -> AppResult<Json<Paginated<InventoryResponse>>> {
    let (items, total) = state
        .inventory_service
        .list_items(&params, query.low_stock)
        .await?;

    let data = items.into_iter().map(InventoryResponse::from).collect();

    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Add an inventory item
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "Inventory",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = InventoryResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Item name already exists")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateItemRequest>,
) -> AppResult<Created<InventoryResponse>> {
    let item = state
        .inventory_service
        .create_item(NewInventoryItem {
            name: payload.name,
            part_number: payload.part_number,
            quantity: payload.quantity,
            unit: payload.unit,
            min_quantity: payload.min_quantity,
            location: payload.location,
        })
        .await?;

    Ok(Created(InventoryResponse::from(item)))
}

/// Get an inventory item by id
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "Inventory",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = InventoryResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<InventoryResponse>> {
    let item = state.inventory_service.get_item(id).await?;

    Ok(Json(InventoryResponse::from(item)))
}

/// Update an inventory item
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "Inventory",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = InventoryResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateItemRequest>,
) -> AppResult<Json<InventoryResponse>> {
    let item = state
        .inventory_service
        .update_item(
            id,
            UpdateInventoryItem {
                name: payload.name,
                part_number: payload.part_number,
                quantity: payload.quantity,
                unit: payload.unit,
                min_quantity: payload.min_quantity,
                location: payload.location,
            },
        )
        .await?;

    Ok(Json(InventoryResponse::from(item)))
}

/// Adjust stock by a relative amount
#[utoipa::path(
    post,
    path = "/inventory/{id}/adjust",
    tag = "Inventory",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = AdjustQuantityRequest,
    responses(
        (status = 200, description = "Stock adjusted", body = InventoryResponse),
        (status = 400, description = "Adjustment would make the quantity negative"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn adjust_quantity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<AdjustQuantityRequest>,
) -> AppResult<Json<InventoryResponse>> {
    let item = state
        .inventory_service
        .adjust_quantity(id, payload.delta)
        .await?;

    Ok(Json(InventoryResponse::from(item)))
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "Inventory",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.inventory_service.delete_item(id).await?;

    Ok(NoContent)
}
