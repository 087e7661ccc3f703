//! API layer for orders

use crate::shared::api_utils::{api_base, read_envelope};
use contracts::domain::a001_order::aggregate::{Order, OrderStatus, UpdateOrderStatusDto};
use contracts::shared::api_response::DeleteOrderResponse;
use gloo_net::http::Request;

fn order_url(id: &str) -> String {
    format!("{}/api/a001/orders/{}", api_base(), urlencoding::encode(id))
}

pub async fn fetch_order(id: &str) -> Result<Order, String> {
    let response = Request::get(&order_url(id))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;
    read_envelope(response).await
}

/// DELETE returns `{success, message}`; error statuses carry the same shape.
pub async fn delete_order(id: &str) -> Result<DeleteOrderResponse, String> {
    let response = Request::delete(&order_url(id))
        .send()
        .await
        .map_err(|e| format!("Failed to delete: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Server error {}: {}", status, e))
}

pub async fn update_status(id: &str, status: OrderStatus) -> Result<Order, String> {
    let url = format!("{}/status", order_url(id));
    let response = Request::put(&url)
        .json(&UpdateOrderStatusDto { status })
        .map_err(|e| format!("Failed to serialize: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update status: {}", e))?;
    read_envelope(response).await
}

/// Сырые байты PDF-счёта
pub async fn fetch_invoice(id: &str) -> Result<Vec<u8>, String> {
    let url = format!("{}/invoice", order_url(id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch invoice: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read invoice: {}", e))
}
