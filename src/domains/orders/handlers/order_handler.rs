use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use super::{lenient_number, listing_filter, optional_text, required_order_id};
use crate::domains::orders::models::{
    ConfirmPaymentRequest, CreateOrderRequest, CustomerOrdersQuery, ListOrdersQuery, Order,
    OrderIdQuery, OrderStatus, PaginatedOrders, PaymentStatus, StatusLog,
    UpdatePaymentStatusRequest, UpdateStatusRequest,
};
use crate::domains::orders::services::CreatedOrder;
use crate::shared::errors::OrderError;
use crate::shared::services::AppState;
use crate::shared::utils::response::{parse_json, ApiResponse, ApiResult};

// =====================================================
// Order Handler
// =====================================================
// 역할: 주문 관련 HTTP API 엔드포인트
//
// 처리 흐름:
// HTTP Request → Handler (형식 검증) → OrderService → OrderRepository → 응답 envelope
// =====================================================

/// 주문 생성 핸들러
/// Create order handler
///
/// # Request Body
/// - customerInfo: email, phone, firstName, lastName, address(location), city?, country?
/// - items: [{ name, price, quantity, image? }]
/// - paymentMethod: "mobile_money" | "cash_on_delivery" | ...
/// - total: 클라이언트 계산 총액 (서버에서 다시 계산)
///
/// # Response
/// - 200: 주문 생성 성공 (모바일 머니면 paymentCode 포함)
/// - 400: 필수 필드 누락 / 형식 오류
/// - 500: 서버 오류
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created successfully", body = CreatedOrder),
        (status = 400, description = "Missing or invalid field"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> ApiResult<CreatedOrder> {
    let request = parse_json(payload)?;

    let created = app_state
        .order_state
        .order_service
        .create_order(request)
        .await?;

    Ok(ApiResponse::success("Order created successfully", created))
}

/// 주문 목록 조회 핸들러
/// List orders handler
///
/// # Query Parameters
/// - page: 페이지 번호 (기본 1)
/// - limit: 페이지 크기 (1~100, 기본 10)
/// - status, paymentStatus: 상태 필터 (선택)
#[utoipa::path(
    get,
    path = "/api/orders",
    params(ListOrdersQuery),
    responses(
        (status = 200, description = "Orders retrieved successfully", body = PaginatedOrders),
        (status = 400, description = "Invalid status filter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> ApiResult<PaginatedOrders> {
    let filter = listing_filter(query.status.as_deref(), query.payment_status.as_deref())?;

    let orders = app_state
        .order_state
        .order_service
        .list_orders(
            filter,
            lenient_number(query.page.as_deref()),
            lenient_number(query.limit.as_deref()),
        )
        .await?;

    Ok(ApiResponse::success("Orders retrieved successfully", orders))
}

/// 고객 주문 목록 조회 핸들러
/// Customer orders handler
#[utoipa::path(
    get,
    path = "/api/orders/customer",
    params(CustomerOrdersQuery),
    responses(
        (status = 200, description = "Customer orders retrieved successfully", body = PaginatedOrders),
        (status = 400, description = "Email missing or invalid status filter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn list_customer_orders(
    State(app_state): State<AppState>,
    Query(query): Query<CustomerOrdersQuery>,
) -> ApiResult<PaginatedOrders> {
    let filter = listing_filter(query.status.as_deref(), query.payment_status.as_deref())?;

    let orders = app_state
        .order_state
        .order_service
        .list_customer_orders(
            query.email.as_deref().unwrap_or_default(),
            filter,
            lenient_number(query.page.as_deref()),
            lenient_number(query.limit.as_deref()),
        )
        .await?;

    Ok(ApiResponse::success("Customer orders retrieved successfully", orders))
}

/// 주문 추적 핸들러
/// Track order handler
///
/// # Response
/// - 200: 주문 조회 성공
/// - 400: 주문 ID 형식 오류
/// - 404: 주문을 찾을 수 없음
#[utoipa::path(
    get,
    path = "/api/orders/track",
    params(OrderIdQuery),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 400, description = "Invalid order ID format"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn track_order(
    State(app_state): State<AppState>,
    Query(query): Query<OrderIdQuery>,
) -> ApiResult<Order> {
    let order_id = required_order_id(query.order_id.as_deref())?;

    let order = app_state
        .order_state
        .order_service
        .require_order(&order_id)
        .await?;

    Ok(ApiResponse::success("Order found", order))
}

/// 주문 상태 변경 핸들러
/// Update order status handler
///
/// # Request Body
/// - orderId, status (필수)
/// - changedBy (기본 "admin"), reason (선택)
#[utoipa::path(
    put,
    path = "/api/orders/update-status",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Order status updated successfully", body = Order),
        (status = 400, description = "Invalid order ID or status"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<Order> {
    let request = parse_json(payload)?;
    let order_id = required_order_id(request.order_id.as_deref())?;
    let status: OrderStatus = optional_text(request.status.as_deref())
        .ok_or_else(|| OrderError::missing_field("status", "Status is required"))?
        .parse()?;
    let changed_by = optional_text(request.changed_by.as_deref()).unwrap_or("admin");

    let order = app_state
        .order_state
        .order_service
        .update_status(
            &order_id,
            status,
            changed_by,
            optional_text(request.reason.as_deref()),
        )
        .await?;

    Ok(ApiResponse::success("Order status updated successfully", order))
}

/// 결제 상태 변경 핸들러
/// Update payment status handler
///
/// 결제 대기(pending) 중인 pending 주문을 승인하면 주문 상태는 processing으로 변경됨
/// (이미 진행된 주문의 상태는 그대로)
#[utoipa::path(
    put,
    path = "/api/orders/update-payment",
    request_body = UpdatePaymentStatusRequest,
    responses(
        (status = 200, description = "Payment status updated successfully", body = Order),
        (status = 400, description = "Invalid order ID or payment status"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn update_payment_status(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdatePaymentStatusRequest>, JsonRejection>,
) -> ApiResult<Order> {
    let request = parse_json(payload)?;
    let order_id = required_order_id(request.order_id.as_deref())?;
    let payment_status: PaymentStatus = optional_text(request.payment_status.as_deref())
        .ok_or_else(|| OrderError::missing_field("paymentStatus", "Payment status is required"))?
        .parse()?;
    let changed_by = optional_text(request.changed_by.as_deref()).unwrap_or("admin");

    let order = app_state
        .order_state
        .order_service
        .update_payment_status(
            &order_id,
            payment_status,
            changed_by,
            optional_text(request.reason.as_deref()),
        )
        .await?;

    Ok(ApiResponse::success("Payment status updated successfully", order))
}

/// 관리자 결제 확인 핸들러
/// Confirm payment handler
///
/// 결제 승인 후, 착불이 아니면 주문을 on_route로 변경
#[utoipa::path(
    post,
    path = "/api/orders/confirm-payment",
    request_body = ConfirmPaymentRequest,
    responses(
        (status = 200, description = "Payment confirmed", body = Order),
        (status = 400, description = "Invalid order ID"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn confirm_payment(
    State(app_state): State<AppState>,
    payload: Result<Json<ConfirmPaymentRequest>, JsonRejection>,
) -> ApiResult<Order> {
    let request = parse_json(payload)?;
    let order_id = required_order_id(request.order_id.as_deref())?;

    let confirmation = app_state
        .order_state
        .order_service
        .confirm_payment(&order_id, request.notes.as_deref())
        .await?;

    let message = if confirmation.moved_on_route {
        "Payment confirmed and order is now on route"
    } else {
        "Payment confirmed (cash on delivery - order ready for pickup)"
    };

    Ok(ApiResponse::success(message, confirmation.order))
}

/// 주문 상태 변경 이력 핸들러
/// Order status history handler
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/history",
    params(
        ("order_id" = String, Path, description = "Order ID (ORD-NNNNNNNNN)")
    ),
    responses(
        (status = 200, description = "Status history retrieved successfully", body = Vec<StatusLog>),
        (status = 400, description = "Invalid order ID format"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_status_history(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Vec<StatusLog>> {
    let order_id = required_order_id(Some(&order_id))?;

    let history = app_state
        .order_state
        .order_service
        .status_history(&order_id)
        .await?;

    Ok(ApiResponse::success("Status history retrieved successfully", history))
}
