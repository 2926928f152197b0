use crate::models::*;
use utoipa::OpenApi;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// List all items
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All items, most recently created first", body = [Item])
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/api/items/{item_id}",
    params(
        ("item_id" = i32, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "The requested item", body = Item),
        (status = 404, description = "No item with that identifier", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_item_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, description = "Name missing or empty", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        list_items_doc,
        get_item_doc,
        create_item_doc,
    ),
    components(
        schemas(HealthResponse, ErrorResponse, Item, CreateItemRequest)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
