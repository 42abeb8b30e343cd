// Orders domain state
// 주문 도메인 상태
use chrono::Duration;
use std::sync::Arc;

use crate::domains::orders::services::OrderService;
use crate::shared::database::OrderRepository;

/// Orders domain state
/// 주문 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct OrderState {
    pub order_service: OrderService,
}

impl OrderState {
    /// Create OrderState with a repository
    /// OrderState 생성 (저장소 구현체와 결제 코드 유효 시간 필요)
    pub fn new(repository: Arc<dyn OrderRepository>, payment_code_ttl: Duration) -> Self {
        Self {
            order_service: OrderService::new(repository, payment_code_ttl),
        }
    }
}
