use axum::{
    routing::{get, post, put},
    Router,
};
use crate::shared::services::AppState;

use super::handlers;

/// 주문 라우터 생성
/// Create orders router
///
/// 주문 / 결제 코드 관련 API 엔드포인트를 등록합니다.
///
/// # Routes
///
/// ## Orders (주문)
/// - `POST   /api/orders` - 주문 생성
/// - `GET    /api/orders` - 주문 목록 (page, limit, status, paymentStatus)
/// - `GET    /api/orders/customer` - 고객 주문 목록 (email)
/// - `GET    /api/orders/track` - 주문 추적 (orderId)
/// - `PUT    /api/orders/update-status` - 주문 상태 변경
/// - `PUT    /api/orders/update-payment` - 결제 상태 변경
/// - `POST   /api/orders/confirm-payment` - 관리자 결제 확인
/// - `GET    /api/orders/:order_id/history` - 상태 변경 이력
///
/// ## Payment codes (결제 코드)
/// - `GET    /api/orders/:order_id/payment-code` - 유효한 결제 코드
/// - `GET    /api/orders/payment-code` - 유효한 결제 코드 (orderId 쿼리)
/// - `POST   /api/orders/verify-payment` - 결제 코드 검증
/// - `GET    /api/orders/pending-payments` - 검증 대기 결제 목록
pub fn create_orders_router() -> Router<AppState> {
    Router::new()
        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
        // Orders (주문)
        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

        // 주문 생성 & 목록
        .route("/", post(handlers::create_order).get(handlers::list_orders))

        // 고객 주문 목록
        .route("/customer", get(handlers::list_customer_orders))

        // 주문 추적
        .route("/track", get(handlers::track_order))

        // 상태 변경
        .route("/update-status", put(handlers::update_order_status))
        .route("/update-payment", put(handlers::update_payment_status))
        .route("/confirm-payment", post(handlers::confirm_payment))

        // 상태 변경 이력
        .route("/:order_id/history", get(handlers::get_status_history))

        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
        // Payment codes (결제 코드)
        // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

        .route("/payment-code", get(handlers::get_payment_code_by_query))
        .route("/:order_id/payment-code", get(handlers::get_payment_code))
        .route("/verify-payment", post(handlers::verify_payment_code))
        .route("/pending-payments", get(handlers::get_pending_payments))
}

/// 관리자 라우터 생성
/// Create admin router
///
/// # Routes
/// - `POST   /api/admin/verify-payment-code` - 결제 코드 검증
/// - `GET    /api/admin/pending-payments` - 검증 대기 결제 목록
/// - `GET    /api/admin/dashboard` - 대시보드
/// - `GET    /api/admin/sales-report` - 매출 리포트
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/verify-payment-code", post(handlers::verify_payment_code))
        .route("/pending-payments", get(handlers::get_pending_payments))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/sales-report", get(handlers::get_sales_report))
}
