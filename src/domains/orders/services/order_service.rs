use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::validation::validate_create_order;
use crate::domains::orders::models::{
    coerce_pagination, CreateOrderRequest, DashboardResponse, NewPaymentCode, Order, OrderFilter,
    OrderId, OrderStatus, PaginatedOrders, PaymentCode, PaymentInstructions, PaymentStatus,
    PendingPayment, SalesReport, StatusLog, VerificationResult,
};
use crate::shared::database::OrderRepository;
use crate::shared::errors::OrderError;
use crate::shared::utils::id_generator::{OrderIdGenerator, PaymentCodeGenerator};

/// 주문 ID 충돌 시 최대 시도 횟수
pub const ORDER_ID_ATTEMPTS: usize = 5;

/// 결제 코드 충돌 시 최대 시도 횟수 (코드 공간 10^6)
pub const PAYMENT_CODE_ATTEMPTS: usize = 10;

const ADMIN_ACTOR: &str = "admin";
const ON_ROUTE_REASON: &str = "Payment confirmed, order is now on route";

const RECENT_ORDERS_LIMIT: i64 = 10;
const PENDING_PAYMENT_ORDERS_LIMIT: i64 = 20;

/// 주문 생성 결과 (모바일 머니면 결제 안내 포함)
/// Created order, with payment instructions for mobile money
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    #[serde(flatten)]
    pub order: Order,

    pub payment_code: Option<PaymentInstructions>,
}

/// 관리자 결제 확인 결과
/// Outcome of an admin payment confirmation
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    pub order: Order,

    /// 배송 중(on_route)으로 넘어갔는지 (착불은 넘어가지 않음)
    pub moved_on_route: bool,
}

/// 주문 서비스
/// Order Service
///
/// 역할:
/// - 주문 생성 (검증 → ID 생성 → 저장 → 결제 코드 발급)
/// - 상태 / 결제 상태 변경 후 최신 주문 반환
/// - 결제 코드 조회 / 검증
/// - 관리자 대시보드 / 매출 리포트
///
/// 처리 흐름:
/// 1. API Handler → OrderService
/// 2. OrderService → 검증, ID / 코드 생성
/// 3. OrderService → OrderRepository (저장, 상태 전이)
#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,

    /// 결제 코드 유효 시간 (기본 24시간)
    payment_code_ttl: Duration,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>, payment_code_ttl: Duration) -> Self {
        Self {
            repository,
            payment_code_ttl,
        }
    }

    /// 주문 생성
    /// Create order
    ///
    /// # 처리 과정
    /// 1. 요청 검증 (첫 번째 위반에서 실패)
    /// 2. 주문 ID 생성 후 저장 (ID 충돌 시 새 ID로 재시도, 최대 5회)
    /// 3. 모바일 머니면 결제 코드 발급
    ///    - 발급 실패는 로그만 남기고 주문은 그대로 반환 (결제 안내 없이)
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<CreatedOrder, OrderError> {
        let validated = validate_create_order(request)?;
        let new_order = validated.new_order;

        if let Some(declared) = validated.declared_total {
            if declared != new_order.total_amount {
                tracing::warn!(
                    declared = %declared,
                    computed = %new_order.total_amount,
                    "Declared order total differs from item sum; using computed total"
                );
            }
        }

        let mut attempt = 0;
        let order_id = loop {
            attempt += 1;
            let candidate = OrderIdGenerator::next(Utc::now());
            match self.repository.create(&candidate, &new_order).await {
                Ok(order_id) => break order_id,
                Err(OrderError::DuplicateOrderId { order_id }) if attempt < ORDER_ID_ATTEMPTS => {
                    tracing::warn!(%order_id, attempt, "Order id collision, retrying");
                }
                Err(e) => return Err(e),
            }
        };

        tracing::info!(
            %order_id,
            total = %new_order.total_amount,
            payment_method = %new_order.payment_method,
            "Order created"
        );

        let order = self.require_order(&order_id).await?;

        let payment_code = if order.is_mobile_money() {
            match self
                .issue_payment_code(&order_id, order.total_amount, &order.customer_info.phone)
                .await
            {
                Ok(instructions) => Some(instructions),
                Err(e) => {
                    tracing::error!(%order_id, error = %e, "Failed to issue payment code");
                    None
                }
            }
        } else {
            None
        };

        Ok(CreatedOrder {
            order,
            payment_code,
        })
    }

    /// 결제 코드 발급
    /// Issue a mobile money payment code
    ///
    /// 랜덤 코드를 뽑아 저장하고, 이미 존재하는 코드면 다시 뽑음 (최대 10회)
    pub async fn issue_payment_code(
        &self,
        order_id: &OrderId,
        amount: Decimal,
        phone_number: &str,
    ) -> Result<PaymentInstructions, OrderError> {
        let expires_at = Utc::now() + self.payment_code_ttl;

        for attempt in 1..=PAYMENT_CODE_ATTEMPTS {
            let new_code = NewPaymentCode {
                order_id: order_id.clone(),
                payment_code: PaymentCodeGenerator::next(),
                amount,
                phone_number: phone_number.to_string(),
                expires_at,
            };

            match self.repository.insert_payment_code(&new_code).await? {
                Some(code) => {
                    tracing::info!(%order_id, expires_at = %code.expires_at, "Payment code issued");
                    return Ok(PaymentInstructions::from(&code));
                }
                None => {
                    tracing::warn!(%order_id, attempt, "Payment code collision, redrawing");
                }
            }
        }

        Err(OrderError::PaymentCodeSpaceExhausted {
            attempts: PAYMENT_CODE_ATTEMPTS,
        })
    }

    /// 주문 조회
    /// Get order by id
    pub async fn get_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderError> {
        self.repository.get_by_id(order_id).await
    }

    /// 주문 조회 (없으면 OrderNotFound)
    pub async fn require_order(&self, order_id: &OrderId) -> Result<Order, OrderError> {
        self.repository
            .get_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::OrderNotFound {
                order_id: order_id.to_string(),
            })
    }

    /// 주문 목록 조회
    /// List orders
    ///
    /// page < 1 → 1, limit이 1~100 밖이면 → 10
    pub async fn list_orders(
        &self,
        filter: OrderFilter,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<PaginatedOrders, OrderError> {
        let (page, limit) = coerce_pagination(page, limit);
        self.repository.get_all(&filter, page, limit).await
    }

    /// 고객 이메일로 주문 목록 조회
    /// List one customer's orders
    pub async fn list_customer_orders(
        &self,
        email: &str,
        mut filter: OrderFilter,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<PaginatedOrders, OrderError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(OrderError::missing_field("email", "Email is required"));
        }
        filter.customer_email = Some(email.to_string());
        self.list_orders(filter, page, limit).await
    }

    /// 주문 상태 변경 후 최신 주문 반환
    /// Update order status and return the refreshed order
    pub async fn update_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<Order, OrderError> {
        let transition = self
            .repository
            .update_status(order_id, status, changed_by, reason)
            .await?;

        tracing::info!(
            %order_id,
            from = %transition.old_status,
            to = %transition.new_status,
            changed_by,
            "Order status updated"
        );

        self.require_order(order_id).await
    }

    /// 결제 상태 변경 후 최신 주문 반환
    /// Update payment status and return the refreshed order
    ///
    /// pending 주문의 결제가 pending → approved로 바뀌면 주문은 processing으로 넘어감
    pub async fn update_payment_status(
        &self,
        order_id: &OrderId,
        payment_status: PaymentStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<Order, OrderError> {
        let transition = self
            .repository
            .update_payment_status(order_id, payment_status, changed_by, reason)
            .await?;

        tracing::info!(
            %order_id,
            from = %transition.old_payment_status,
            to = %transition.new_payment_status,
            promoted = transition.promotes_order(),
            changed_by,
            reason = reason.unwrap_or(""),
            "Payment status updated"
        );

        self.require_order(order_id).await
    }

    /// 관리자 결제 확인
    /// Confirm payment as admin
    ///
    /// 1. 결제 승인 (pending 주문이었으면 processing으로)
    /// 2. 착불이 아니면 on_route로 변경
    ///
    /// 두 단계는 저장소에서 한 트랜잭션으로 처리됨
    pub async fn confirm_payment(
        &self,
        order_id: &OrderId,
        notes: Option<&str>,
    ) -> Result<PaymentConfirmation, OrderError> {
        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Payment confirmed by admin");

        let moved_on_route = !self.require_order(order_id).await?.is_cash_on_delivery();
        let transition = self
            .repository
            .confirm_payment(
                order_id,
                ADMIN_ACTOR,
                moved_on_route.then_some(ON_ROUTE_REASON),
            )
            .await?;

        tracing::info!(
            %order_id,
            from = %transition.old_payment_status,
            moved_on_route,
            notes,
            "Payment confirmed"
        );

        Ok(PaymentConfirmation {
            order: self.require_order(order_id).await?,
            moved_on_route,
        })
    }

    /// 유효한 결제 코드 조회
    /// Get the active payment code of an order
    pub async fn get_payment_code(&self, order_id: &OrderId) -> Result<PaymentCode, OrderError> {
        self.require_order(order_id).await?;

        self.repository
            .get_active_payment_code(order_id)
            .await?
            .ok_or_else(|| OrderError::NoActivePaymentCode {
                order_id: order_id.to_string(),
            })
    }

    /// 결제 코드 검증
    /// Verify a payment code
    pub async fn verify_payment_code(
        &self,
        order_id: &OrderId,
        code: &str,
        verified_by: &str,
    ) -> Result<VerificationResult, OrderError> {
        self.require_order(order_id).await?;

        let result = self
            .repository
            .verify_payment_code(order_id, code.trim(), verified_by)
            .await?;

        tracing::info!(
            %order_id,
            verified_by,
            status = %result.status,
            "Payment code verified"
        );

        Ok(result)
    }

    /// 검증 대기 중인 결제 목록
    /// Pending payments
    pub async fn pending_payments(&self) -> Result<Vec<PendingPayment>, OrderError> {
        self.repository.get_pending_payment_codes().await
    }

    /// 주문 상태 변경 이력
    /// Status history of an order
    pub async fn status_history(&self, order_id: &OrderId) -> Result<Vec<StatusLog>, OrderError> {
        self.require_order(order_id).await?;
        self.repository.get_status_history(order_id).await
    }

    /// 관리자 대시보드 (통계 + 최근 주문 10건 + 결제 대기 주문 20건)
    /// Admin dashboard
    pub async fn dashboard(&self) -> Result<DashboardResponse, OrderError> {
        let stats = self.repository.get_dashboard_stats().await?;
        let recent = self
            .repository
            .get_all(&OrderFilter::default(), 1, RECENT_ORDERS_LIMIT)
            .await?;
        let pending = self
            .repository
            .get_all(
                &OrderFilter {
                    payment_status: Some(PaymentStatus::Pending),
                    ..Default::default()
                },
                1,
                PENDING_PAYMENT_ORDERS_LIMIT,
            )
            .await?;

        Ok(DashboardResponse {
            stats,
            recent_orders: recent.orders,
            pending_payments: pending.orders,
        })
    }

    /// 매출 리포트
    /// Sales report
    pub async fn sales_report(&self) -> Result<SalesReport, OrderError> {
        self.repository.get_sales_report().await
    }
}
