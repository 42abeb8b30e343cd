use regex::Regex;
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::LazyLock;

use crate::domains::orders::models::{
    CreateOrderRequest, CustomerInfo, CustomerInfoInput, NewOrder, NewOrderItem, OrderItemInput,
};
use crate::shared::errors::OrderError;
use crate::shared::utils::money::{parse_price, MAX_AMOUNT};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

// 국제 전화번호: + 선택, 첫 자리 1~9, 총 2~15자리
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern is valid"));

/// 검증된 주문 요청
/// Validated create-order request
#[derive(Debug, Clone)]
pub struct ValidatedOrder {
    pub new_order: NewOrder,

    /// 클라이언트가 보낸 총액 (숫자로 읽을 수 있을 때만)
    /// Client-declared total, when it parses as a number
    pub declared_total: Option<Decimal>,
}

// =====================================================
// 주문 생성 요청 검증
// =====================================================
// 첫 번째 위반에서 바로 실패 (fail-fast). 검사 순서:
// 1. 최상위 필드: customerInfo, items, paymentMethod, total
// 2. 고객 필드: email, phone, firstName, lastName, address(location)
// 3. 이메일 / 전화번호 형식
// 4. 상품: 비어있지 않음, 각 상품의 name / price / quantity
// 5. 계산된 총액: 0보다 크고 저장 가능한 범위 이내
// =====================================================

/// 주문 생성 요청 검증 및 변환
/// Validate a create-order request and turn it into an order draft
pub fn validate_create_order(request: CreateOrderRequest) -> Result<ValidatedOrder, OrderError> {
    let customer = request
        .customer_info
        .ok_or_else(|| missing_top_level("customerInfo"))?;
    let items = request.items.ok_or_else(|| missing_top_level("items"))?;
    let payment_method = request
        .payment_method
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .ok_or_else(|| missing_top_level("paymentMethod"))?;
    let total = request.total.ok_or_else(|| missing_top_level("total"))?;

    let customer_info = validate_customer(customer)?;

    if items.is_empty() {
        return Err(OrderError::invalid_field(
            "items",
            "Items array is required and cannot be empty",
        ));
    }
    let items = items
        .into_iter()
        .map(validate_item)
        .collect::<Result<Vec<_>, _>>()?;

    let total_amount = items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| {
            item.unit_price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| sum.checked_add(line))
        })
        .filter(|total| *total <= MAX_AMOUNT)
        .ok_or_else(|| OrderError::invalid_field("total", "Order total is too large"))?;
    if total_amount <= Decimal::ZERO {
        return Err(OrderError::invalid_field(
            "total",
            "Order total must be greater than zero",
        ));
    }

    Ok(ValidatedOrder {
        new_order: NewOrder {
            customer_info,
            items,
            payment_method,
            total_amount,
        },
        declared_total: decimal_of(&total),
    })
}

fn missing_top_level(field: &str) -> OrderError {
    OrderError::missing_field(field, format!("Missing required field: {}", field))
}

fn required_customer_field(value: Option<String>, field: &str) -> Result<String, OrderError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            OrderError::missing_field(field, format!("Missing required customer field: {}", field))
        })
}

fn validate_customer(input: CustomerInfoInput) -> Result<CustomerInfo, OrderError> {
    let email = required_customer_field(input.email, "email")?;
    let phone = required_customer_field(input.phone, "phone")?;
    let first_name = required_customer_field(input.first_name, "firstName")?;
    let last_name = required_customer_field(input.last_name, "lastName")?;
    let address = required_customer_field(input.address, "address")?;

    if !EMAIL_REGEX.is_match(&email) {
        return Err(OrderError::invalid_field("email", "Invalid email format"));
    }
    if !PHONE_REGEX.is_match(&phone) {
        return Err(OrderError::invalid_field("phone", "Invalid phone format"));
    }

    let optional = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    Ok(CustomerInfo {
        email,
        phone,
        first_name,
        last_name,
        address,
        city: optional(input.city),
        country: optional(input.country),
        latitude: input.latitude,
        longitude: input.longitude,
    })
}

fn validate_item(input: OrderItemInput) -> Result<NewOrderItem, OrderError> {
    let name = input.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    let (Some(name), Some(price), Some(quantity)) = (name, input.price, input.quantity) else {
        return Err(OrderError::missing_field(
            "items",
            "Each item must have name, price, and quantity",
        ));
    };

    let price_label = match &price {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    let unit_price = parse_price(&price_label)
        .filter(|price| *price <= MAX_AMOUNT)
        .ok_or_else(|| OrderError::invalid_field("price", format!("Invalid price for item: {}", name)))?;

    let quantity = quantity_of(&quantity)
        .filter(|q| *q >= 1)
        .ok_or_else(|| {
            OrderError::invalid_field("quantity", format!("Invalid quantity for item: {}", name))
        })?;

    Ok(NewOrderItem {
        name,
        price_label,
        unit_price,
        quantity,
        image: input.image.filter(|i| !i.trim().is_empty()),
    })
}

/// 수량: 정수 또는 정수 문자열
fn quantity_of(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|q| i32::try_from(q).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

fn decimal_of(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_price(&n.to_string()),
        Value::String(s) => parse_price(s),
        _ => None,
    }
}
