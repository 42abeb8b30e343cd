use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use super::{optional_text, required_order_id};
use crate::domains::orders::models::{
    OrderIdQuery, PaymentCode, PendingPayment, VerificationResult, VerifyPaymentCodeRequest,
};
use crate::shared::errors::OrderError;
use crate::shared::services::AppState;
use crate::shared::utils::response::{parse_json, ApiResponse, ApiResult};

// =====================================================
// Payment Code Handler
// =====================================================
// 역할: 모바일 머니 결제 코드 조회 / 검증
//
// 결제 코드 조회와 검증은 먼저 주문 존재 여부를 확인함 (없으면 404)
// =====================================================

/// 결제 코드 조회 핸들러 (경로)
/// Get active payment code by path
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/payment-code",
    params(
        ("order_id" = String, Path, description = "Order ID (ORD-NNNNNNNNN)")
    ),
    responses(
        (status = 200, description = "Payment code retrieved successfully", body = PaymentCode),
        (status = 400, description = "Invalid order ID format"),
        (status = 404, description = "Order not found or no active payment code")
    ),
    tag = "Payments"
)]
pub async fn get_payment_code(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<PaymentCode> {
    active_payment_code(app_state, Some(&order_id)).await
}

/// 결제 코드 조회 핸들러 (쿼리 ?orderId=)
/// Get active payment code by query
#[utoipa::path(
    get,
    path = "/api/orders/payment-code",
    params(OrderIdQuery),
    responses(
        (status = 200, description = "Payment code retrieved successfully", body = PaymentCode),
        (status = 400, description = "Missing or invalid order ID"),
        (status = 404, description = "Order not found or no active payment code")
    ),
    tag = "Payments"
)]
pub async fn get_payment_code_by_query(
    State(app_state): State<AppState>,
    Query(query): Query<OrderIdQuery>,
) -> ApiResult<PaymentCode> {
    active_payment_code(app_state, query.order_id.as_deref()).await
}

async fn active_payment_code(app_state: AppState, raw_order_id: Option<&str>) -> ApiResult<PaymentCode> {
    let order_id = required_order_id(raw_order_id)?;

    let code = app_state
        .order_state
        .order_service
        .get_payment_code(&order_id)
        .await?;

    Ok(ApiResponse::success("Payment code retrieved successfully", code))
}

/// 결제 코드 검증 핸들러
/// Verify payment code handler
///
/// # Request Body
/// - orderId, paymentCode (필수)
/// - verifiedBy (기본 "admin")
///
/// # Response
/// - 200: 검증 성공 (결제 승인, pending 주문은 processing으로)
/// - 400: 코드가 없거나 이미 사용되었거나 만료됨
/// - 404: 주문을 찾을 수 없음
#[utoipa::path(
    post,
    path = "/api/admin/verify-payment-code",
    request_body = VerifyPaymentCodeRequest,
    responses(
        (status = 200, description = "Payment code verified successfully", body = VerificationResult),
        (status = 400, description = "Invalid or expired payment code"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn verify_payment_code(
    State(app_state): State<AppState>,
    payload: Result<Json<VerifyPaymentCodeRequest>, JsonRejection>,
) -> ApiResult<VerificationResult> {
    let request = parse_json(payload)?;
    let order_id = required_order_id(request.order_id.as_deref())?;
    let code = optional_text(request.payment_code.as_deref())
        .ok_or_else(|| OrderError::missing_field("paymentCode", "Payment code is required"))?;
    let verified_by = optional_text(request.verified_by.as_deref()).unwrap_or("admin");

    let result = app_state
        .order_state
        .order_service
        .verify_payment_code(&order_id, code, verified_by)
        .await?;

    Ok(ApiResponse::success("Payment code verified successfully", result))
}

/// 검증 대기 중인 결제 목록 핸들러
/// Pending payments handler
#[utoipa::path(
    get,
    path = "/api/admin/pending-payments",
    responses(
        (status = 200, description = "Pending payments retrieved successfully", body = Vec<PendingPayment>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
pub async fn get_pending_payments(State(app_state): State<AppState>) -> ApiResult<Vec<PendingPayment>> {
    let pending = app_state
        .order_state
        .order_service
        .pending_payments()
        .await?;

    Ok(ApiResponse::success("Pending payments retrieved successfully", pending))
}
