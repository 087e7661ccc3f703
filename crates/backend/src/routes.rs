use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Orders
        // ========================================
        .route("/api/a001/orders", get(handlers::a001_order::list_all))
        .route(
            "/api/a001/orders/testdata",
            post(handlers::a001_order::insert_test_data),
        )
        .route(
            "/api/a001/orders/:id",
            get(handlers::a001_order::get_by_id).delete(handlers::a001_order::delete),
        )
        .route(
            "/api/a001/orders/:id/status",
            put(handlers::a001_order::update_status),
        )
        .route(
            "/api/a001/orders/:id/invoice",
            get(handlers::a001_order::download_invoice),
        )
}
