// =====================================================
// 결제 코드 통합 테스트
// =====================================================

mod common;
use common::*;

use chrono::Duration;
use liquor_store_api::domains::orders::models::{
    CreateOrderRequest, OrderId, OrderStatus, PaymentStatus,
};
use liquor_store_api::shared::errors::OrderError;

fn request(email: &str, payment_method: &str) -> CreateOrderRequest {
    serde_json::from_value(order_body(email, payment_method)).unwrap()
}

/// 테스트: 결제 코드 검증 성공
///
/// 결제 승인 + pending 주문은 processing으로 넘어가고,
/// 검증된 코드는 더 이상 유효 코드로 조회되지 않습니다.
#[tokio::test]
async fn test_verify_payment_code() {
    let service = setup_service();
    let created = service
        .create_order(request("jane@example.com", "mobile_money"))
        .await
        .unwrap();
    let order_id = created.order.order_id;
    let code = created.payment_code.unwrap().payment_code;

    let active = service.get_payment_code(&order_id).await.unwrap();
    assert_eq!(active.payment_code, code);

    let result = service
        .verify_payment_code(&order_id, &code, "cashier-1")
        .await
        .unwrap();

    assert_eq!(result.order_id, order_id);
    assert_eq!(result.payment_status, PaymentStatus::Approved);
    assert_eq!(result.status, OrderStatus::Processing);
    assert_eq!(result.verified_by, "cashier-1");

    let order = service.require_order(&order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.payment_status, PaymentStatus::Approved);

    assert!(matches!(
        service.get_payment_code(&order_id).await,
        Err(OrderError::NoActivePaymentCode { .. })
    ));
}

/// 테스트: 같은 코드는 한 번만 사용 가능
#[tokio::test]
async fn test_payment_code_is_single_use() {
    let service = setup_service();
    let created = service
        .create_order(request("jane@example.com", "mobile_money"))
        .await
        .unwrap();
    let order_id = created.order.order_id;
    let code = created.payment_code.unwrap().payment_code;

    service.verify_payment_code(&order_id, &code, "admin").await.unwrap();

    assert!(matches!(
        service.verify_payment_code(&order_id, &code, "admin").await,
        Err(OrderError::InvalidPaymentCode)
    ));
}

/// 테스트: 잘못된 코드 / 다른 주문의 코드는 거절
#[tokio::test]
async fn test_wrong_code_is_rejected() {
    let service = setup_service();
    let first = service
        .create_order(request("jane@example.com", "mobile_money"))
        .await
        .unwrap();
    let second = service
        .create_order(request("john@example.com", "mobile_money"))
        .await
        .unwrap();
    let first_code = first.payment_code.unwrap().payment_code;
    let second_code = second.payment_code.unwrap().payment_code;

    let unknown_code = if first_code == "*182*8*1*000000#" {
        "*182*8*1*000001#"
    } else {
        "*182*8*1*000000#"
    };
    assert!(matches!(
        service
            .verify_payment_code(&first.order.order_id, unknown_code, "admin")
            .await,
        Err(OrderError::InvalidPaymentCode)
    ));

    // 다른 주문의 코드
    assert_ne!(first_code, second_code);
    assert!(matches!(
        service
            .verify_payment_code(&first.order.order_id, &second_code, "admin")
            .await,
        Err(OrderError::InvalidPaymentCode)
    ));

    // 거절된 검증은 주문을 바꾸지 않음
    let order = service.require_order(&first.order.order_id).await.unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.status, OrderStatus::Pending);
}

/// 테스트: 만료된 코드는 조회 / 검증 불가
///
/// 유효 시간을 음수로 두어 발급 즉시 만료되도록 합니다.
#[tokio::test]
async fn test_expired_code_is_rejected() {
    let service = setup_service_with_ttl(Duration::hours(-1));
    let created = service
        .create_order(request("jane@example.com", "mobile_money"))
        .await
        .unwrap();
    let order_id = created.order.order_id;
    let code = created.payment_code.unwrap().payment_code;

    assert!(matches!(
        service.get_payment_code(&order_id).await,
        Err(OrderError::NoActivePaymentCode { .. })
    ));
    assert!(matches!(
        service.verify_payment_code(&order_id, &code, "admin").await,
        Err(OrderError::InvalidPaymentCode)
    ));
    assert!(service.pending_payments().await.unwrap().is_empty());
}

/// 테스트: 없는 주문의 코드 검증은 404
#[tokio::test]
async fn test_verify_for_unknown_order() {
    let service = setup_service();
    let order_id = OrderId::parse("ORD-999999999").unwrap();

    assert!(matches!(
        service
            .verify_payment_code(&order_id, "*182*8*1*123456#", "admin")
            .await,
        Err(OrderError::OrderNotFound { .. })
    ));
    assert!(matches!(
        service.get_payment_code(&order_id).await,
        Err(OrderError::OrderNotFound { .. })
    ));
}

/// 테스트: 검증 대기 목록 (고객 정보 포함, 최신순)
#[tokio::test]
async fn test_pending_payments() {
    let service = setup_service();
    let first = service
        .create_order(request("jane@example.com", "mobile_money"))
        .await
        .unwrap();
    let second = service
        .create_order(request("john@example.com", "mobile_money"))
        .await
        .unwrap();
    service
        .create_order(request("cod@example.com", "cash_on_delivery"))
        .await
        .unwrap();

    let pending = service.pending_payments().await.unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].order_id, second.order.order_id);
    assert_eq!(pending[0].customer_email, "john@example.com");
    assert_eq!(pending[0].customer_name, "Jane Doe");
    assert_eq!(pending[1].order_id, first.order.order_id);

    // 검증되면 목록에서 빠짐
    let code = first.payment_code.unwrap().payment_code;
    service
        .verify_payment_code(&first.order.order_id, &code, "admin")
        .await
        .unwrap();
    let pending = service.pending_payments().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].order_id, second.order.order_id);
}

/// 테스트: 코드 앞뒤 공백은 무시
#[tokio::test]
async fn test_code_is_trimmed_before_verification() {
    let service = setup_service();
    let created = service
        .create_order(request("jane@example.com", "mobile_money"))
        .await
        .unwrap();
    let code = created.payment_code.unwrap().payment_code;

    let result = service
        .verify_payment_code(&created.order.order_id, &format!("  {code} "), "admin")
        .await
        .unwrap();

    assert_eq!(result.payment_code, code);
}
