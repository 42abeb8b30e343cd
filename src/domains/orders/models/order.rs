use chrono::{DateTime, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};

use super::status::{OrderStatus, PaymentStatus};
use crate::shared::errors::OrderError;
use crate::shared::utils::money::format_frw;

/// 모바일 머니 결제 (결제 코드 발급 대상)
pub const MOBILE_MONEY: &str = "mobile_money";

/// 착불 결제 (결제 확인 후에도 배송 상태로 넘기지 않음)
pub const CASH_ON_DELIVERY: &str = "cash_on_delivery";

static ORDER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ORD-\d{9}$").expect("order id pattern is valid"));

// =====================================================
// OrderId
// =====================================================
// 형식: "ORD-" + 9자리 숫자 (unix 시간 끝 6자리 + 랜덤 3자리)
// 예: ORD-243456007
//
// 형식 검증을 통과한 값만 OrderId로 만들 수 있음.
// 핸들러는 요청 값을 먼저 OrderId::parse로 검증하고,
// 잘못된 형식은 저장소까지 가지 않고 400으로 거절됨.
// =====================================================

/// 주문 ID
/// Order identifier (`ORD-` followed by nine digits)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// 형식 검증 후 생성
    /// Validate and wrap a raw order id
    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        let trimmed = raw.trim();
        if ORDER_ID_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(OrderError::InvalidOrderId(raw.to_string()))
        }
    }

    /// 이미 검증된 값 (생성기, DB 행)
    pub(crate) fn from_trusted(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderId {
    type Error = OrderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        OrderId::parse(&value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

// =====================================================
// Order 모델
// =====================================================
// 고객 정보는 주문 시점의 스냅샷 (사용자 레코드 참조 아님)
// 상품 목록은 주문과 함께 한 번에 생성되고 이후 변경되지 않음
// =====================================================

/// 주문 고객 정보 (주문 시점 스냅샷)
/// Customer snapshot copied into the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "+250788123456")]
    pub phone: String,

    #[schema(example = "Jane")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    /// 배송 주소 (요청에서는 "location"으로도 받음)
    /// Delivery address
    #[schema(example = "KG 11 Ave")]
    pub address: String,

    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// 주문 상품
/// Order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[schema(example = "Wine A")]
    pub name: String,

    /// 요청에 들어온 가격 표기 그대로
    /// Price label as submitted
    #[schema(example = "50,000frw")]
    pub price: String,

    /// 숫자만 남겨 파싱한 단가
    /// Parsed unit price
    #[schema(value_type = String, example = "50000")]
    pub unit_price: Decimal,

    #[schema(example = 2)]
    pub quantity: i32,

    pub image: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// 주문 정보 (상품 목록 포함)
/// Order with its items
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(value_type = String, example = "ORD-243456007")]
    pub order_id: OrderId,

    pub customer_info: CustomerInfo,

    pub items: Vec<OrderItem>,

    /// 총 금액 (상품 단가 × 수량의 합)
    /// Total amount
    #[schema(value_type = String, example = "100000")]
    pub total_amount: Decimal,

    /// 표시용 금액
    /// Display total, e.g. "100,000frw"
    #[schema(example = "100,000frw")]
    pub total: String,

    pub status: OrderStatus,

    pub payment_status: PaymentStatus,

    #[schema(example = "mobile_money")]
    pub payment_method: String,

    /// 주문 생성 시간
    /// Created timestamp
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn is_mobile_money(&self) -> bool {
        self.payment_method == MOBILE_MONEY
    }

    pub fn is_cash_on_delivery(&self) -> bool {
        self.payment_method == CASH_ON_DELIVERY
    }

    /// 고객 이름 (이름 + 성)
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.customer_info.first_name, self.customer_info.last_name)
    }
}

/// 저장소에 넘기는 새 주문 (검증 완료)
/// Validated order draft handed to the repository
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_info: CustomerInfo,
    pub items: Vec<NewOrderItem>,
    pub payment_method: String,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub name: String,
    pub price_label: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub image: Option<String>,
}

impl NewOrder {
    /// 저장된 주문 형태로 변환 (메모리 저장소, 응답 조립용)
    /// Materialize the draft as a stored order
    pub fn into_order(self, order_id: OrderId, now: DateTime<Utc>) -> Order {
        let items = self
            .items
            .into_iter()
            .map(|item| OrderItem {
                name: item.name,
                price: item.price_label,
                unit_price: item.unit_price,
                quantity: item.quantity,
                image: item.image,
            })
            .collect();

        Order {
            order_id,
            customer_info: self.customer_info,
            items,
            total: format_frw(self.total_amount),
            total_amount: self.total_amount,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: self.payment_method,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 상태 변경 이력
/// Status log entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusLog {
    pub id: i64,

    #[schema(value_type = String, example = "ORD-243456007")]
    pub order_id: OrderId,

    /// 주문 생성 시에는 null
    /// Null for the creation entry
    pub old_status: Option<OrderStatus>,

    pub new_status: OrderStatus,

    #[schema(example = "system")]
    pub changed_by: String,

    #[schema(example = "Order created")]
    pub reason: Option<String>,

    pub created_at: DateTime<Utc>,
}

// =====================================================
// 목록 조회 / 페이지네이션
// =====================================================

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// 주문 목록 필터 (모든 조건 AND)
/// Order listing filter, equality predicates AND-combined
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub customer_email: Option<String>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|s| order.status == s)
            && self.payment_status.is_none_or(|p| order.payment_status == p)
            && self
                .customer_email
                .as_deref()
                .is_none_or(|email| order.customer_info.email == email)
    }
}

/// 페이지 번호 / 크기 보정
/// Coerce page (< 1 → 1) and limit (outside 1..=100 → 10)
pub fn coerce_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.filter(|p| *p >= 1).unwrap_or(1);
    let limit = limit
        .filter(|l| (1..=MAX_PAGE_LIMIT).contains(l))
        .unwrap_or(DEFAULT_PAGE_LIMIT);
    (page, limit)
}

/// 건너뛸 행 수 ((page - 1) × limit)
///
/// 아주 큰 page 값은 i64 최댓값에서 멈추므로 빈 페이지가 된다.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1).max(0).saturating_mul(limit.max(0))
}

pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// 페이지네이션된 주문 목록
/// Paginated orders
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

// =====================================================
// 요청 DTO
// =====================================================
// 필수 필드도 Option으로 받음: serde 에러 대신
// 어떤 필드가 빠졌는지 메시지에 담아 400을 돌려주기 위함
// =====================================================

/// 주문 생성 요청
/// Create order request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_info: Option<CustomerInfoInput>,

    pub items: Option<Vec<OrderItemInput>>,

    #[schema(example = "mobile_money")]
    pub payment_method: Option<String>,

    /// 클라이언트가 계산한 총액 (저장 값은 서버에서 다시 계산)
    /// Client-side total; the stored total is recomputed from the items
    #[schema(value_type = Object, example = "100,000frw")]
    pub total: Option<serde_json::Value>,
}

/// 고객 정보 입력
/// Customer info input
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfoInput {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(alias = "location")]
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// 주문 상품 입력
/// Line item input; price and quantity accept strings or numbers
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OrderItemInput {
    pub name: Option<String>,

    #[schema(value_type = Object, example = "50,000frw")]
    pub price: Option<serde_json::Value>,

    #[schema(value_type = Object, example = 2)]
    pub quantity: Option<serde_json::Value>,

    pub image: Option<String>,
}

/// 주문 상태 변경 요청
/// Update status request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[schema(example = "ORD-243456007")]
    pub order_id: Option<String>,

    #[schema(example = "shipped")]
    pub status: Option<String>,

    pub changed_by: Option<String>,

    pub reason: Option<String>,
}

/// 결제 상태 변경 요청
/// Update payment status request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
    #[schema(example = "ORD-243456007")]
    pub order_id: Option<String>,

    #[schema(example = "approved")]
    pub payment_status: Option<String>,

    pub changed_by: Option<String>,

    pub reason: Option<String>,
}

/// 관리자 결제 확인 요청
/// Admin payment confirmation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    #[schema(example = "ORD-243456007")]
    pub order_id: Option<String>,

    pub notes: Option<String>,
}

/// 주문 목록 쿼리
/// Order listing query
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListOrdersQuery {
    /// 페이지 번호 (기본 1)
    pub page: Option<String>,
    /// 페이지 크기 (1~100, 기본 10)
    pub limit: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
}

/// 고객 주문 목록 쿼리
/// Customer order listing query
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerOrdersQuery {
    pub email: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
}

/// 주문 ID 쿼리 (?orderId=)
/// Order id query
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderIdQuery {
    pub order_id: Option<String>,
}
