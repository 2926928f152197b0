use crate::db::DbItems;
use crate::handlers::{create_item, get_item, health_check, list_items};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(db: Arc<DbItems>) -> Router {
    Router::<Arc<DbItems>>::new()
        .route("/health", get(health_check))
        .route("/items", get(list_items))
        .route("/items", post(create_item))
        .route("/items/:item_id", get(get_item))
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    // A lazy pool never touches the network until a query runs, so the
    // routes below that fail before reaching the store can be exercised
    // without a database.
    fn test_router() -> Router {
        let db = Arc::new(DbItems::new("postgres://postgres@localhost/items_test").unwrap());
        create_api_routes(db)
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok_without_store_access() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn create_with_empty_name_is_rejected() {
        let request = Request::post("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name": ""}"#))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!({ "error": "Field 'name' is required" }));
    }

    #[tokio::test]
    async fn create_with_whitespace_name_is_rejected() {
        let request = Request::post("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name": "   "}"#))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!({ "error": "Field 'name' is required" }));
    }

    #[tokio::test]
    async fn create_with_missing_name_field_is_rejected() {
        let request = Request::post("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_no_body_is_rejected() {
        let request = Request::post("/items").body(Body::empty()).unwrap();
        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!({ "error": "Field 'name' is required" }));
    }

    #[tokio::test]
    async fn non_integer_item_id_is_rejected_before_the_handler() {
        let response = test_router()
            .oneshot(Request::get("/items/not-a-number").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // The tests below run against a per-test database managed by sqlx;
    // they need DATABASE_URL pointing at a PostgreSQL instance.

    async fn store_router(pool: sqlx::PgPool) -> Router {
        let db = Arc::new(DbItems::from_pool(pool));
        db.ensure_schema().await.unwrap();
        create_api_routes(db)
    }

    async fn post_item(router: &Router, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::post("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        (status, body_json(response.into_body()).await)
    }

    #[sqlx::test]
    async fn unknown_item_id_returns_not_found_body(pool: sqlx::PgPool) {
        let router = store_router(pool).await;

        let response = router
            .oneshot(Request::get("/items/999999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!({ "error": "Not found" }));
    }

    #[sqlx::test]
    async fn list_returns_items_newest_first(pool: sqlx::PgPool) {
        let router = store_router(pool).await;

        for name in ["alpha", "beta", "gamma"] {
            let (status, _) = post_item(&router, &format!(r#"{{"name": "{name}"}}"#)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let response = router
            .clone()
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response.into_body()).await;
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["gamma", "beta", "alpha"]);

        let ids: Vec<i64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_i64().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[sqlx::test]
    async fn create_then_get_round_trips_trimmed_name(pool: sqlx::PgPool) {
        let router = store_router(pool).await;
        let before = chrono::Utc::now();

        let (status, created) = post_item(&router, r#"{"name": "  lantern  "}"#).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "lantern");

        let created_at: chrono::DateTime<chrono::Utc> =
            serde_json::from_value(created["created_at"].clone()).unwrap();
        assert!(created_at >= before);

        let id = created["id"].as_i64().unwrap();
        let response = router
            .clone()
            .oneshot(Request::get(format!("/items/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let fetched = body_json(response.into_body()).await;
        assert_eq!(fetched, created);
    }

    #[sqlx::test]
    async fn rejected_create_persists_no_row(pool: sqlx::PgPool) {
        let router = store_router(pool).await;

        let (status, _) = post_item(&router, r#"{"name": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let response = router
            .clone()
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response.into_body()).await;
        assert_eq!(json, serde_json::json!([]));
    }
}
