// Orders handlers module
// 주문 핸들러 모듈

pub mod admin_handler;
pub mod order_handler;
pub mod payment_handler;

pub use admin_handler::*;
pub use order_handler::*;
pub use payment_handler::*;

use crate::domains::orders::models::{OrderFilter, OrderId, OrderStatus, PaymentStatus};
use crate::shared::errors::OrderError;

// =====================================================
// 요청 값 파싱 헬퍼 (핸들러 공통)
// =====================================================
// 주문 ID는 저장소에 닿기 전에 형식 검증 (ORD- + 9자리)
// =====================================================

/// 필수 주문 ID (없으면 400, 형식 오류면 400)
fn required_order_id(raw: Option<&str>) -> Result<OrderId, OrderError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => OrderId::parse(value),
        None => Err(OrderError::missing_field("orderId", "Order ID is required")),
    }
}

/// 페이지 번호 / 크기: 숫자가 아니면 기본값 사용
fn lenient_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
}

/// 목록 필터: 알 수 없는 상태 값은 400
fn listing_filter(
    status: Option<&str>,
    payment_status: Option<&str>,
) -> Result<OrderFilter, OrderError> {
    Ok(OrderFilter {
        status: optional_text(status).map(str::parse::<OrderStatus>).transpose()?,
        payment_status: optional_text(payment_status)
            .map(str::parse::<PaymentStatus>)
            .transpose()?,
        customer_email: None,
    })
}

/// 선택 입력 (빈 문자열은 없음으로)
fn optional_text(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
