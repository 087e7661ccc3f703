use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_response::{messages, ApiResponse};
use thiserror::Error;

use crate::domain::a001_order::service::OrderError;

/// Ошибка HTTP-слоя: статус + конверт `{ success: false, message }`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid order id: {0}")]
    InvalidId(String),
    #[error("not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            ApiError::InvalidId(_) => messages::INVALID_ORDER_ID,
            ApiError::NotFound => messages::ORDER_NOT_FOUND,
            ApiError::Validation(_) => messages::VALIDATION_FAILED,
            ApiError::Internal(_) => messages::INTERNAL_ERROR,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound,
            OrderError::Validation(msg) => ApiError::Validation(msg),
            OrderError::Storage(err) => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:#}", self);
        } else {
            tracing::warn!("{}", self);
        }
        let body = ApiResponse::<()>::fail(self.message_key());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_envelope() {
        let resp = ApiError::from(OrderError::NotFound(Uuid::nil())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "order-not-found");
    }

    #[tokio::test]
    async fn storage_failure_maps_to_500() {
        let err = OrderError::Storage(anyhow::anyhow!("disk full"));
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["message"], "internal-error");
    }

    #[test]
    fn invalid_id_is_bad_request() {
        let err = ApiError::InvalidId("xyz".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message_key(), "invalid-order-id");
    }
}
