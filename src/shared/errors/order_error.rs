use thiserror::Error;
use axum::{http::StatusCode, Json};

use crate::shared::utils::response::error_body;

/// 주문 관련 에러
/// Order-related errors
#[derive(Error, Debug)]
pub enum OrderError {
    /// 요청 값 검증 실패 (필드 이름 포함)
    /// Request validation failed for a named field
    #[error("{message}")]
    Validation { field: String, message: String },

    /// 주문 ID 형식 오류 (ORD- + 9자리 숫자)
    /// Order id does not match ORD-NNNNNNNNN
    #[error("Invalid order ID format: {0}")]
    InvalidOrderId(String),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    #[error("Invalid payment status value: {0}")]
    InvalidPaymentStatus(String),

    #[error("Invalid payment code status: {0}")]
    InvalidPaymentCodeStatus(String),

    /// 결제 코드가 없거나, 이미 사용되었거나, 만료됨
    /// Payment code unknown, already used, or expired
    #[error("Invalid or expired payment code")]
    InvalidPaymentCode,

    /// 주문을 찾을 수 없음
    /// Order not found
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: String },

    #[error("No active payment code found for order {order_id}")]
    NoActivePaymentCode { order_id: String },

    /// 주문 ID 충돌 (서비스에서 새 ID로 재시도)
    /// Order id collision (the service retries with a fresh id)
    #[error("Order ID already exists: {order_id}")]
    DuplicateOrderId { order_id: String },

    #[error("Could not allocate a unique payment code after {attempts} attempts")]
    PaymentCodeSpaceExhausted { attempts: usize },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl OrderError {
    /// 필수 필드 누락
    /// Missing required field
    pub fn missing_field(field: &str, message: impl Into<String>) -> Self {
        OrderError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        OrderError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation { .. }
            | OrderError::InvalidOrderId(_)
            | OrderError::InvalidStatus(_)
            | OrderError::InvalidPaymentStatus(_)
            | OrderError::InvalidPaymentCode => StatusCode::BAD_REQUEST,
            OrderError::OrderNotFound { .. } | OrderError::NoActivePaymentCode { .. } => {
                StatusCode::NOT_FOUND
            }
            OrderError::DuplicateOrderId { .. } => StatusCode::CONFLICT,
            OrderError::InvalidPaymentCodeStatus(_)
            | OrderError::PaymentCodeSpaceExhausted { .. }
            | OrderError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 보여줄 메시지 (DB 에러 내용은 숨김)
    /// Message shown to clients; driver details stay in the logs
    pub fn client_message(&self) -> String {
        match self {
            OrderError::InvalidOrderId(_) => "Invalid order ID format".to_string(),
            OrderError::OrderNotFound { .. } => "Order not found".to_string(),
            OrderError::NoActivePaymentCode { .. } => "No active payment code found".to_string(),
            OrderError::DatabaseError(_) | OrderError::InvalidPaymentCodeStatus(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        OrderError::DatabaseError(err.to_string())
    }
}

/// OrderError를 HTTP 응답으로 변환 (공통 응답 envelope)
impl From<OrderError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: OrderError) -> Self {
        let status = err.status_code();

        if status.is_server_error() {
            tracing::error!(error = %err, "Request failed");
        } else {
            tracing::debug!(error = %err, "Request rejected");
        }

        (status, error_body(status, err.client_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            OrderError::missing_field("email", "Missing required customer field: email").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            OrderError::OrderNotFound { order_id: "ORD-000000001".into() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(OrderError::InvalidPaymentCode.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            OrderError::DatabaseError("connection reset".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_details_are_not_exposed() {
        let err = OrderError::DatabaseError("relation \"orders\" does not exist".into());
        assert_eq!(err.client_message(), "Internal server error");

        let (status, Json(body)) = <(StatusCode, Json<serde_json::Value>)>::from(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(body["message"], "Internal server error");
        assert!(body["data"].is_null());
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = OrderError::missing_field("phone", "Missing required customer field: phone");
        assert_eq!(err.client_message(), "Missing required customer field: phone");
    }
}
