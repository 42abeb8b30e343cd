/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - ID 생성기 (Order ID, Payment Code)
/// - 금액 파싱/포맷
/// - 공통 응답 envelope
pub mod id_generator;
pub mod money;
pub mod response;

pub use id_generator::*;
pub use money::*;
pub use response::*;
