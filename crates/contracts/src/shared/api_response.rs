//! Response envelope used by every JSON endpoint.

use serde::{Deserialize, Serialize};

/// Message keys carried by `ApiResponse::message`.
///
/// The frontend resolves them as `common:errors.<key>`.
pub mod messages {
    pub const ORDER_DELETED: &str = "order-deleted";
    pub const STATUS_UPDATED: &str = "status-updated";
    pub const ORDER_NOT_FOUND: &str = "order-not-found";
    pub const INVALID_ORDER_ID: &str = "invalid-order-id";
    pub const VALIDATION_FAILED: &str = "validation-failed";
    pub const INTERNAL_ERROR: &str = "internal-error";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Данные успешного ответа; `Err(message)` для `success: false` или пустого `data`
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Response has no data".to_string()),
            (false, _) => Err(self
                .message
                .unwrap_or_else(|| messages::INTERNAL_ERROR.to_string())),
        }
    }
}

/// Ответ на удаление заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOrderResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteOrderResponse {
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: messages::ORDER_DELETED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_omits_data() {
        let resp: ApiResponse<u32> = ApiResponse::fail(messages::ORDER_NOT_FOUND);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"order-not-found"}"#);
    }

    #[test]
    fn into_result_uses_success_flag() {
        assert_eq!(ApiResponse::ok(7).into_result(), Ok(7));
        let failed: ApiResponse<u32> =
            serde_json::from_str(r#"{"success":false,"message":"order-not-found"}"#).unwrap();
        assert_eq!(failed.into_result(), Err("order-not-found".to_string()));
        let empty: ApiResponse<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(empty.into_result().is_err());
    }

    #[test]
    fn order_envelopes_decode() {
        use crate::domain::a001_order::aggregate::{Order, OrderDto};

        let order = OrderDto {
            code: Some("ORD-9".into()),
            currency: "USD".into(),
            ..Default::default()
        }
        .into_order();
        let body = serde_json::to_string(&ApiResponse::ok(order.clone())).unwrap();
        let decoded: ApiResponse<Order> = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded.into_result(), Ok(order));

        let failed: ApiResponse<Order> =
            serde_json::from_str(r#"{"success":false,"message":"order-not-found"}"#).unwrap();
        assert_eq!(failed.into_result(), Err("order-not-found".to_string()));
    }

    #[test]
    fn delete_response_carries_message_key() {
        let json = serde_json::to_value(DeleteOrderResponse::deleted()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "order-deleted");
    }
}
