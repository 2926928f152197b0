use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    /// Creation time in UTC, serialized as ISO-8601 text
    pub created_at: DateTime<Utc>,
}

/// Request body for creating an item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// A missing field behaves like an empty one and fails validation
    #[serde(default)]
    pub name: String,
}

impl CreateItemRequest {
    /// The name with surrounding whitespace removed
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}
