use async_trait::async_trait;

use crate::domains::orders::models::{
    DashboardStats, NewOrder, NewPaymentCode, Order, OrderFilter, OrderId, OrderStatus,
    PaginatedOrders, PaymentCode, PaymentStatus, PaymentTransition, PendingPayment, SalesReport,
    StatusLog, StatusTransition, VerificationResult,
};
use crate::shared::errors::OrderError;

/// 주문 생성 시 상태 로그 기록자 / 사유
pub const SYSTEM_ACTOR: &str = "system";
pub const ORDER_CREATED_REASON: &str = "Order created";

/// 결제 승인으로 주문이 processing으로 넘어갈 때 기록되는 사유
pub const PAYMENT_APPROVED_REASON: &str = "Payment approved";

// =====================================================
// OrderRepository Trait (주문 저장소 인터페이스)
// =====================================================
// 주문, 주문 상품, 상태 로그, 결제 코드의 저장과 상태 전이 규칙을 담당.
// Service 계층은 이 trait만 사용함.
//
// 구현체:
// - PgOrderRepository: PostgreSQL (트랜잭션 + 행 잠금)
// - MemoryOrderRepository: 프로세스 메모리 (로컬 실행, 테스트용)
//
// 두 구현체는 같은 의미를 가져야 함:
// - 여러 문장으로 된 작업은 전부 적용되거나 전부 취소됨
// - 결제 승인 (pending → approved) 은 아직 pending인 주문을 processing으로 올림
// =====================================================

/// 주문 저장소 인터페이스
/// Order repository interface
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 주문 생성 (주문 + 상품 + 최초 상태 로그, 한 트랜잭션)
    /// Create an order with its items and the initial status log
    ///
    /// # Returns
    /// * `Ok(OrderId)` - 호출자가 넘긴 주문 ID
    /// * `Err(OrderError::DuplicateOrderId)` - 같은 ID가 이미 존재 (아무것도 저장되지 않음)
    async fn create(&self, order_id: &OrderId, new_order: &NewOrder) -> Result<OrderId, OrderError>;

    /// 주문 ID로 조회 (없으면 `Ok(None)`)
    /// Get order by id
    async fn get_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// 주문 목록 조회 (최신순, 페이지네이션)
    /// List orders, newest first
    ///
    /// `page`, `limit`는 이미 보정된 값이어야 함 (page >= 1, 1 <= limit <= 100)
    async fn get_all(
        &self,
        filter: &OrderFilter,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedOrders, OrderError>;

    /// 주문 상태 변경
    /// Update order status
    ///
    /// 같은 상태로의 변경도 허용되며 로그가 남음
    async fn update_status(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<StatusTransition, OrderError>;

    /// 결제 상태 변경 (결제 결정 테이블 적용)
    /// Update payment status, applying the payment decision table
    async fn update_payment_status(
        &self,
        order_id: &OrderId,
        new_payment_status: PaymentStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<PaymentTransition, OrderError>;

    /// 관리자 결제 확인 (결제 승인 + 필요 시 상태 변경, 한 트랜잭션)
    /// Approve payment and optionally move the order on route, atomically
    ///
    /// `on_route_reason`이 있으면 승인 후 on_route로 변경하고 그 사유로 로그를 남김.
    /// 어느 단계든 실패하면 아무것도 적용되지 않음.
    async fn confirm_payment(
        &self,
        order_id: &OrderId,
        changed_by: &str,
        on_route_reason: Option<&str>,
    ) -> Result<PaymentTransition, OrderError>;

    /// 결제 코드 저장
    /// Insert a pending payment code
    ///
    /// # Returns
    /// * `Ok(Some(code))` - 저장됨
    /// * `Ok(None)` - 같은 코드가 이미 존재 (호출자가 다시 뽑음)
    /// * `Err(OrderError::OrderNotFound)` - 주문 없음
    async fn insert_payment_code(
        &self,
        new_code: &NewPaymentCode,
    ) -> Result<Option<PaymentCode>, OrderError>;

    /// 유효한 결제 코드 조회 (pending + 미만료, 최신 1건)
    /// Latest pending, unexpired payment code of an order
    async fn get_active_payment_code(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<PaymentCode>, OrderError>;

    /// 결제 코드 검증 (코드 verified + 결제 승인, 한 트랜잭션)
    /// Verify a payment code and approve the order's payment
    ///
    /// 코드가 없거나, pending이 아니거나, 만료되었으면 `InvalidPaymentCode`
    async fn verify_payment_code(
        &self,
        order_id: &OrderId,
        code: &str,
        verified_by: &str,
    ) -> Result<VerificationResult, OrderError>;

    /// 검증 대기 중인 결제 코드 목록 (고객 정보 포함, 최신순)
    /// Pending, unexpired payment codes with customer details
    async fn get_pending_payment_codes(&self) -> Result<Vec<PendingPayment>, OrderError>;

    /// 주문 상태 변경 이력 (시간순)
    /// Status history of an order, oldest first
    async fn get_status_history(&self, order_id: &OrderId) -> Result<Vec<StatusLog>, OrderError>;

    async fn get_dashboard_stats(&self) -> Result<DashboardStats, OrderError>;

    async fn get_sales_report(&self) -> Result<SalesReport, OrderError>;
}
