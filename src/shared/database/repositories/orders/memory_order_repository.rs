use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::order_repository::{
    OrderRepository, ORDER_CREATED_REASON, PAYMENT_APPROVED_REASON, SYSTEM_ACTOR,
};
use crate::domains::orders::models::{
    apply_payment_decision, dashboard_stats_of, page_offset, sales_report_of, total_pages,
    DashboardStats, NewOrder, NewPaymentCode, Order, OrderFilter, OrderId, OrderStatus,
    PaginatedOrders, PaymentCode, PaymentCodeStatus, PaymentStatus, PaymentTransition,
    PendingPayment, SalesReport, StatusLog, StatusTransition, VerificationResult,
};
use crate::shared::errors::OrderError;

/// 메모리 저장소 내부 상태
#[derive(Default)]
struct Store {
    orders: HashMap<OrderId, Order>,
    status_logs: Vec<StatusLog>,
    payment_codes: Vec<PaymentCode>,
    next_log_id: i64,
    next_code_id: i64,
}

impl Store {
    fn append_log(
        &mut self,
        order_id: &OrderId,
        old_status: Option<OrderStatus>,
        new_status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) {
        self.next_log_id += 1;
        self.status_logs.push(StatusLog {
            id: self.next_log_id,
            order_id: order_id.clone(),
            old_status,
            new_status,
            changed_by: changed_by.to_string(),
            reason: reason.map(str::to_string),
            created_at: Utc::now(),
        });
    }

    /// 상태 변경 (잠금을 잡은 상태에서 호출)
    fn apply_status(
        &mut self,
        order_id: &OrderId,
        new_status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<StatusTransition, OrderError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::OrderNotFound {
                order_id: order_id.to_string(),
            })?;
        let old_status = order.status;
        order.status = new_status;
        order.updated_at = Utc::now();

        self.append_log(order_id, Some(old_status), new_status, changed_by, reason);

        Ok(StatusTransition {
            old_status,
            new_status,
        })
    }

    /// 결제 결정 적용 (잠금을 잡은 상태에서 호출)
    fn apply_payment(
        &mut self,
        order_id: &OrderId,
        decision: PaymentStatus,
        changed_by: &str,
    ) -> Result<PaymentTransition, OrderError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::OrderNotFound {
                order_id: order_id.to_string(),
            })?;

        let transition = apply_payment_decision(order.status, order.payment_status, decision);
        order.payment_status = transition.new_payment_status;
        order.status = transition.new_status;
        order.updated_at = Utc::now();

        if transition.promotes_order() {
            self.append_log(
                order_id,
                Some(transition.old_status),
                transition.new_status,
                changed_by,
                Some(PAYMENT_APPROVED_REASON),
            );
        }

        Ok(transition)
    }

    fn sorted_orders(&self, filter: &OrderFilter) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.values().filter(|o| filter.matches(o)).collect();
        // 최신순, 같은 시간이면 ID 내림차순
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.order_id.cmp(&a.order_id))
        });
        orders
    }
}

/// 메모리 주문 저장소
/// In-process order repository
///
/// 모든 작업은 하나의 뮤텍스 안에서 수행되므로
/// PostgreSQL 구현의 트랜잭션과 같은 원자성을 가짐.
/// DB 없이 로컬에서 실행하거나 테스트할 때 사용.
#[derive(Default)]
pub struct MemoryOrderRepository {
    store: Mutex<Store>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn create(&self, order_id: &OrderId, new_order: &NewOrder) -> Result<OrderId, OrderError> {
        let mut store = self.store.lock();

        if store.orders.contains_key(order_id) {
            return Err(OrderError::DuplicateOrderId {
                order_id: order_id.to_string(),
            });
        }

        let order = new_order.clone().into_order(order_id.clone(), Utc::now());
        store.orders.insert(order_id.clone(), order);
        store.append_log(
            order_id,
            None,
            OrderStatus::Pending,
            SYSTEM_ACTOR,
            Some(ORDER_CREATED_REASON),
        );

        Ok(order_id.clone())
    }

    async fn get_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.store.lock().orders.get(order_id).cloned())
    }

    async fn get_all(
        &self,
        filter: &OrderFilter,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedOrders, OrderError> {
        let store = self.store.lock();
        let matching = store.sorted_orders(filter);
        let total = matching.len() as i64;
        let offset = usize::try_from(page_offset(page, limit)).unwrap_or(usize::MAX);

        let orders = matching
            .into_iter()
            .skip(offset)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        })
    }

    async fn update_status(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<StatusTransition, OrderError> {
        self.store
            .lock()
            .apply_status(order_id, new_status, changed_by, reason)
    }

    async fn update_payment_status(
        &self,
        order_id: &OrderId,
        new_payment_status: PaymentStatus,
        changed_by: &str,
        _reason: Option<&str>,
    ) -> Result<PaymentTransition, OrderError> {
        self.store
            .lock()
            .apply_payment(order_id, new_payment_status, changed_by)
    }

    async fn confirm_payment(
        &self,
        order_id: &OrderId,
        changed_by: &str,
        on_route_reason: Option<&str>,
    ) -> Result<PaymentTransition, OrderError> {
        // 하나의 잠금 안에서 두 단계 모두 적용
        let mut store = self.store.lock();
        let transition = store.apply_payment(order_id, PaymentStatus::Approved, changed_by)?;
        if let Some(reason) = on_route_reason {
            store.apply_status(order_id, OrderStatus::OnRoute, changed_by, Some(reason))?;
        }

        Ok(transition)
    }

    async fn insert_payment_code(
        &self,
        new_code: &NewPaymentCode,
    ) -> Result<Option<PaymentCode>, OrderError> {
        let mut store = self.store.lock();

        if !store.orders.contains_key(&new_code.order_id) {
            return Err(OrderError::OrderNotFound {
                order_id: new_code.order_id.to_string(),
            });
        }
        if store
            .payment_codes
            .iter()
            .any(|c| c.payment_code == new_code.payment_code)
        {
            return Ok(None);
        }

        store.next_code_id += 1;
        let code = PaymentCode {
            id: store.next_code_id,
            order_id: new_code.order_id.clone(),
            payment_code: new_code.payment_code.clone(),
            amount: new_code.amount,
            phone_number: new_code.phone_number.clone(),
            status: PaymentCodeStatus::Pending,
            expires_at: new_code.expires_at,
            verified_by: None,
            verified_at: None,
            created_at: Utc::now(),
        };
        store.payment_codes.push(code.clone());

        Ok(Some(code))
    }

    async fn get_active_payment_code(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<PaymentCode>, OrderError> {
        let now = Utc::now();
        let store = self.store.lock();

        // 뒤에 추가된 코드가 최신
        Ok(store
            .payment_codes
            .iter()
            .rev()
            .find(|c| &c.order_id == order_id && c.is_active_at(now))
            .cloned())
    }

    async fn verify_payment_code(
        &self,
        order_id: &OrderId,
        code: &str,
        verified_by: &str,
    ) -> Result<VerificationResult, OrderError> {
        let now = Utc::now();
        let mut store = self.store.lock();

        let index = store
            .payment_codes
            .iter()
            .rposition(|c| &c.order_id == order_id && c.payment_code == code && c.is_active_at(now))
            .ok_or(OrderError::InvalidPaymentCode)?;

        // 주문이 없으면 코드도 건드리지 않음
        if !store.orders.contains_key(order_id) {
            return Err(OrderError::OrderNotFound {
                order_id: order_id.to_string(),
            });
        }

        let transition = store.apply_payment(order_id, PaymentStatus::Approved, verified_by)?;

        let entry = &mut store.payment_codes[index];
        entry.status = PaymentCodeStatus::Verified;
        entry.verified_by = Some(verified_by.to_string());
        entry.verified_at = Some(now);

        Ok(VerificationResult {
            order_id: order_id.clone(),
            amount: entry.amount,
            payment_code: entry.payment_code.clone(),
            payment_status: transition.new_payment_status,
            status: transition.new_status,
            verified_by: verified_by.to_string(),
            verified_at: now,
        })
    }

    async fn get_pending_payment_codes(&self) -> Result<Vec<PendingPayment>, OrderError> {
        let now = Utc::now();
        let store = self.store.lock();

        let mut pending: Vec<PendingPayment> = store
            .payment_codes
            .iter()
            .filter(|c| c.is_active_at(now))
            .filter_map(|c| {
                let order = store.orders.get(&c.order_id)?;
                Some(PendingPayment {
                    id: c.id,
                    order_id: c.order_id.clone(),
                    payment_code: c.payment_code.clone(),
                    amount: c.amount,
                    phone_number: c.phone_number.clone(),
                    customer_name: order.customer_name(),
                    customer_phone: order.customer_info.phone.clone(),
                    customer_email: order.customer_info.email.clone(),
                    created_at: c.created_at,
                    expires_at: c.expires_at,
                })
            })
            .collect();
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        Ok(pending)
    }

    async fn get_status_history(&self, order_id: &OrderId) -> Result<Vec<StatusLog>, OrderError> {
        Ok(self
            .store
            .lock()
            .status_logs
            .iter()
            .filter(|log| &log.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn get_dashboard_stats(&self) -> Result<DashboardStats, OrderError> {
        Ok(dashboard_stats_of(self.store.lock().orders.values()))
    }

    async fn get_sales_report(&self) -> Result<SalesReport, OrderError> {
        Ok(sales_report_of(self.store.lock().orders.values(), Utc::now()))
    }
}
