use chrono::Duration;
use std::sync::Arc;

use crate::domains::orders::services::state::OrderState;
use crate::shared::database::OrderRepository;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 저장소 구현체(PostgreSQL / 메모리)는 밖에서 주입받음
#[derive(Clone)]
pub struct AppState {
    pub order_state: OrderState,
}

impl AppState {
    /// Create AppState with an order repository
    /// 저장소와 결제 코드 유효 시간으로 도메인 State 초기화
    pub fn new(repository: Arc<dyn OrderRepository>, payment_code_ttl: Duration) -> Self {
        Self {
            order_state: OrderState::new(repository, payment_code_ttl),
        }
    }
}
