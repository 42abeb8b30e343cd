use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::order::OrderId;
use super::status::{OrderStatus, PaymentCodeStatus, PaymentStatus};

// =====================================================
// PaymentCode 모델
// =====================================================
// 역할: 모바일 머니 결제 코드 (*182*8*1*NNNNNN#)
//
// 생명주기:
// - pending: 발급 직후. 관리자 검증 대기
// - verified: 관리자가 검증 완료 → 주문 결제 승인
// - expired / cancelled: 더 이상 사용 불가
//
// 만료는 조회/검증 시점에 expires_at > now 조건으로만 적용됨
// (백그라운드 작업이 status를 expired로 바꾸지 않음)
// =====================================================

/// 결제 코드
/// Payment code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCode {
    pub id: i64,

    #[schema(value_type = String, example = "ORD-243456007")]
    pub order_id: OrderId,

    #[schema(example = "*182*8*1*123456#")]
    pub payment_code: String,

    #[schema(value_type = String, example = "100000")]
    pub amount: Decimal,

    #[schema(example = "+250788123456")]
    pub phone_number: String,

    pub status: PaymentCodeStatus,

    pub expires_at: DateTime<Utc>,

    pub verified_by: Option<String>,

    pub verified_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl PaymentCode {
    /// pending 상태이고 아직 만료되지 않았는지
    /// Pending and not yet expired at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.status == PaymentCodeStatus::Pending && self.expires_at > now
    }
}

/// 새 결제 코드 (저장 전)
/// Payment code to insert
#[derive(Debug, Clone)]
pub struct NewPaymentCode {
    pub order_id: OrderId,
    pub payment_code: String,
    pub amount: Decimal,
    pub phone_number: String,
    pub expires_at: DateTime<Utc>,
}

/// 고객에게 보여줄 결제 안내
/// Payment instructions returned to the customer
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstructions {
    #[schema(example = "*182*8*1*123456#")]
    pub payment_code: String,

    #[schema(value_type = String, example = "100000")]
    pub amount: Decimal,

    #[schema(example = "+250788123456")]
    pub phone_number: String,

    pub expires_at: DateTime<Utc>,

    #[schema(example = "Dial *182*8*1*123456# to pay 100000frw for your order")]
    pub instructions: String,
}

impl From<&PaymentCode> for PaymentInstructions {
    fn from(code: &PaymentCode) -> Self {
        Self {
            payment_code: code.payment_code.clone(),
            amount: code.amount,
            phone_number: code.phone_number.clone(),
            expires_at: code.expires_at,
            instructions: format!(
                "Dial {} to pay {}frw for your order",
                code.payment_code,
                code.amount.normalize()
            ),
        }
    }
}

/// 결제 코드 검증 요청
/// Verify payment code request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentCodeRequest {
    #[schema(example = "ORD-243456007")]
    pub order_id: Option<String>,

    #[schema(example = "*182*8*1*123456#")]
    pub payment_code: Option<String>,

    #[schema(example = "admin")]
    pub verified_by: Option<String>,
}

/// 결제 코드 검증 결과
/// Verification result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    #[schema(value_type = String, example = "ORD-243456007")]
    pub order_id: OrderId,

    #[schema(value_type = String, example = "100000")]
    pub amount: Decimal,

    pub payment_code: String,

    pub payment_status: PaymentStatus,

    pub status: OrderStatus,

    pub verified_by: String,

    pub verified_at: DateTime<Utc>,
}

/// 관리자 화면용 대기 중 결제 (고객 정보 포함)
/// Pending payment joined with the owning order's customer
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayment {
    pub id: i64,

    #[schema(value_type = String, example = "ORD-243456007")]
    pub order_id: OrderId,

    pub payment_code: String,

    #[schema(value_type = String, example = "100000")]
    pub amount: Decimal,

    pub phone_number: String,

    #[schema(example = "Jane Doe")]
    pub customer_name: String,

    pub customer_phone: String,

    pub customer_email: String,

    pub created_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}
