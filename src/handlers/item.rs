use crate::db::DbItems;
use crate::models::{CreateItemRequest, ErrorResponse, Item};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::error;

/// List all items, most recently created first
pub async fn list_items(
    State(db): State<Arc<DbItems>>,
) -> Result<(StatusCode, Json<Vec<Item>>), (StatusCode, Json<ErrorResponse>)> {
    let items = db.list_items().await.map_err(|e| {
        error!("Failed to list items: {}", e);
        internal_error()
    })?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get a single item by its identifier
///
/// Non-integer identifiers are rejected by the path extractor before this
/// handler runs.
pub async fn get_item(
    State(db): State<Arc<DbItems>>,
    Path(item_id): Path<i32>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    let item = db.get_item(item_id).await.map_err(|e| {
        error!("Failed to fetch item {}: {}", item_id, e);
        internal_error()
    })?;

    match item {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Not found")),
        )),
    }
}

/// Create a new item
///
/// An absent or non-JSON body is treated the same as an empty name.
pub async fn create_item(
    State(db): State<Arc<DbItems>>,
    payload: Option<Json<CreateItemRequest>>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    let name = payload
        .as_ref()
        .map(|Json(p)| p.trimmed_name())
        .unwrap_or_default();

    if name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Field 'name' is required")),
        ));
    }

    let item = db.insert_item(name, Utc::now()).await.map_err(|e| {
        error!("Failed to create item '{}': {}", name, e);
        internal_error()
    })?;

    Ok((StatusCode::CREATED, Json(item)))
}

fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
}
