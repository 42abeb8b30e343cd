// Orders services module
// 주문 서비스 모듈

pub mod order_service;
pub mod state;
pub mod validation;

pub use order_service::*;
pub use state::*;
pub use validation::*;
