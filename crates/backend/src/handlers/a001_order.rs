use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_order::aggregate::{
    invoice_file_name, Order, OrderId, UpdateOrderStatusDto,
};
use contracts::domain::common::AggregateId;
use contracts::shared::api_response::{messages, ApiResponse, DeleteOrderResponse};
use uuid::Uuid;

use crate::domain::a001_order::{invoice, service};
use crate::shared::api_error::ApiError;
use crate::shared::config;

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    OrderId::from_string(id)
        .map(|id| id.value())
        .map_err(|_| ApiError::InvalidId(id.to_string()))
}

/// GET /api/a001/orders
pub async fn list_all() -> Result<Json<ApiResponse<Vec<Order>>>, ApiError> {
    let orders = service::list_all().await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /api/a001/orders/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let uuid = parse_id(&id)?;
    let order = service::get_by_id(uuid).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// DELETE /api/a001/orders/:id
pub async fn delete(Path(id): Path<String>) -> Result<Json<DeleteOrderResponse>, ApiError> {
    let uuid = parse_id(&id)?;
    service::delete(uuid).await?;
    Ok(Json(DeleteOrderResponse::deleted()))
}

/// PUT /api/a001/orders/:id/status
pub async fn update_status(
    Path(id): Path<String>,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let uuid = parse_id(&id)?;
    let order = service::update_status(uuid, dto.status).await?;
    Ok(Json(ApiResponse::ok_with_message(
        order,
        messages::STATUS_UPDATED,
    )))
}

/// GET /api/a001/orders/:id/invoice
pub async fn download_invoice(Path(id): Path<String>) -> Result<Response, ApiError> {
    let uuid = parse_id(&id)?;
    let order = service::get_by_id(uuid).await?;
    let bytes = invoice::render_invoice(&order, &config::invoice_config())?;
    tracing::info!("Invoice for order {} rendered ({} bytes)", uuid, bytes.len());
    Ok(pdf_response(&order.to_string_id(), bytes))
}

fn pdf_response(id: &str, bytes: Vec<u8>) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", invoice_file_name(id));
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

/// POST /api/a001/orders/testdata
pub async fn insert_test_data() -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let ids = service::insert_test_data().await?;
    Ok(Json(ApiResponse::ok(
        ids.into_iter().map(|id| id.to_string()).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(parse_id("42"), Err(ApiError::InvalidId(_))));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn pdf_response_sets_download_headers() {
        let resp = pdf_response("abc", b"%PDF-1.5".to_vec());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"INVOICE-abc\""
        );
    }

    #[tokio::test]
    async fn invalid_id_short_circuits_before_storage() {
        let resp = get_by_id(Path("not-a-uuid".to_string()))
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
