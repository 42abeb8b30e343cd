use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;

// =====================================================
// 공통 응답 포맷 (Response Envelope)
// =====================================================
// 모든 API 응답은 같은 형태:
// { "status": 200, "message": "...", "data": ..., "timestamp": "2024-06-01 12:00:00" }
// 에러 응답은 data = null
// =====================================================

/// 에러 응답 타입 (핸들러 공통)
/// Error response type shared by all handlers
pub type ApiError = (StatusCode, Json<serde_json::Value>);

/// 핸들러 반환 타입
/// Handler return type
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 공통 응답 envelope
/// Uniform response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// 성공 응답 (200)
    /// Success response (200)
    pub fn success(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data: Some(data),
            timestamp: current_timestamp(),
        })
    }
}

/// 에러 응답 body
/// Error body (data is always null)
pub fn error_body(status: StatusCode, message: impl Into<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": status.as_u16(),
        "message": message.into(),
        "data": null,
        "timestamp": current_timestamp(),
    }))
}

/// JSON body 추출 실패를 공통 envelope로 변환
/// Map axum's JSON rejection into the envelope instead of a plain-text body
pub fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err((
            StatusCode::BAD_REQUEST,
            error_body(
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", rejection.body_text()),
            ),
        )),
    }
}

fn current_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
