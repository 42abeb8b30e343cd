/// ID 생성기
/// ID Generator
///
/// 역할:
/// - 주문 ID 생성 (Order ID): "ORD-" + unix 시간 끝 6자리 + 랜덤 3자리
/// - 결제 코드 생성 (Payment Code): "*182*8*1*" + 랜덤 6자리 + "#"
///
/// 사용 방법:
/// ```rust,ignore
/// let order_id = OrderIdGenerator::next(Utc::now());
/// let code = PaymentCodeGenerator::next();
/// ```
///
/// 주의:
/// 두 생성기 모두 전역 유일성을 보장하지 않음.
/// 중복은 INSERT 시점에 감지되고 서비스에서 새 값으로 재시도함.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domains::orders::models::OrderId;

/// 결제 코드 USSD prefix
pub const PAYMENT_CODE_PREFIX: &str = "*182*8*1*";

/// 주문 ID 생성기
/// Order ID Generator
pub struct OrderIdGenerator;

impl OrderIdGenerator {
    /// 다음 주문 ID 생성
    /// Generate an order id for the given instant
    pub fn next(now: DateTime<Utc>) -> OrderId {
        let random_suffix = rand::thread_rng().gen_range(0..1000);
        Self::format(now.timestamp(), random_suffix)
    }

    /// 주문 ID 포맷
    /// Build "ORD-" + last 6 digits of `unix_seconds` + zero-padded `random_suffix`
    pub fn format(unix_seconds: i64, random_suffix: u32) -> OrderId {
        let tail = unix_seconds.rem_euclid(1_000_000);
        OrderId::from_trusted(format!("ORD-{:06}{:03}", tail, random_suffix % 1000))
    }
}

/// 결제 코드 생성기
/// Payment Code Generator
///
/// 가능한 코드 수: 10^6 (000000 ~ 999999)
pub struct PaymentCodeGenerator;

impl PaymentCodeGenerator {
    /// 랜덤 결제 코드 생성
    /// Draw a random payment code
    pub fn next() -> String {
        Self::format(rand::thread_rng().gen_range(0..=999_999))
    }

    /// 결제 코드 포맷: *182*8*1*NNNNNN#
    pub fn format(number: u32) -> String {
        format!("{}{:06}#", PAYMENT_CODE_PREFIX, number % 1_000_000)
    }
}
