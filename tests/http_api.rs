// =====================================================
// HTTP API 통합 테스트 (라우터 + 핸들러 + 메모리 저장소)
// =====================================================

mod common;
use common::*;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

fn assert_envelope(body: &Value, status: u16) {
    assert_eq!(body["status"], status);
    assert!(body["message"].is_string());
    // "YYYY-MM-DD HH:MM:SS"
    assert_eq!(body["timestamp"].as_str().unwrap().len(), 19);
}

/// 테스트: 주문 생성 → 추적
#[tokio::test]
async fn test_create_and_track_order() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(order_body("jane@example.com", "mobile_money")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, 200);
    assert_eq!(body["message"], "Order created successfully");

    let data = &body["data"];
    let order_id = data["orderId"].as_str().unwrap().to_string();
    assert!(is_order_id(&order_id));
    assert_eq!(data["status"], "pending");
    assert_eq!(data["paymentStatus"], "pending");
    assert_eq!(data["total"], "100,000frw");
    assert_eq!(data["customerInfo"]["email"], "jane@example.com");
    assert!(is_payment_code(data["paymentCode"]["paymentCode"].as_str().unwrap()));

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/orders/track?orderId={order_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["orderId"], order_id.as_str());
}

/// 테스트: 필수 필드 누락은 400 + 필드 이름
#[tokio::test]
async fn test_create_order_validation_errors() {
    let app = setup_app();

    let mut body = order_body("jane@example.com", "mobile_money");
    body["customerInfo"].as_object_mut().unwrap().remove("phone");
    let (status, response) = send(&app, Method::POST, "/api/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&response, 400);
    assert_eq!(response["message"], "Missing required customer field: phone");
    assert!(response["data"].is_null());

    let mut body = order_body("jane@example.com", "mobile_money");
    body["items"] = json!([]);
    let (status, response) = send(&app, Method::POST, "/api/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Items array is required and cannot be empty");

    let mut body = order_body("not-an-email", "mobile_money");
    body.as_object_mut().unwrap().remove("paymentMethod");
    let (status, response) = send(&app, Method::POST, "/api/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Missing required field: paymentMethod");
}

/// 테스트: 잘못된 JSON도 같은 envelope로 400
#[tokio::test]
async fn test_malformed_json_uses_envelope() {
    let app = setup_app();

    let (status, body) = send_raw(&app, Method::POST, "/api/orders", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400);
    assert!(body["data"].is_null());
}

/// 테스트: 주문 ID 형식 오류 → 400, 없는 주문 → 404
#[tokio::test]
async fn test_track_order_errors() {
    let app = setup_app();

    let (status, body) = send(&app, Method::GET, "/api/orders/track?orderId=ORD-12", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid order ID format");

    let (status, body) = send(&app, Method::GET, "/api/orders/track", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Order ID is required");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/orders/track?orderId=ORD-000000001",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404);
    assert_eq!(body["message"], "Order not found");
}

/// 테스트: 저장할 수 없는 금액은 400
#[tokio::test]
async fn test_oversized_price_is_rejected() {
    let app = setup_app();
    let mut body = order_body("jane@example.com", "mobile_money");
    body["items"] = json!([
        { "name": "Wine A", "price": "79228162514264337593543950335", "quantity": 2 }
    ]);

    let (status, body) = send(&app, Method::POST, "/api/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400);
    assert_eq!(body["message"], "Invalid price for item: Wine A");

    let (_, list) = send(&app, Method::GET, "/api/orders", None).await;
    assert_eq!(list["data"]["total"], 0);
}

/// 테스트: 페이지네이션
///
/// pending 주문 12건, limit 5 → 5건, total 12, total_pages 3
#[tokio::test]
async fn test_pagination() {
    let app = setup_app();
    for i in 0..12 {
        create_order(&app, &format!("customer{i}@example.com"), "cash_on_delivery").await;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/orders?status=pending&page=1&limit=5",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["orders"].as_array().unwrap().len(), 5);
    assert_eq!(data["total"], 12);
    assert_eq!(data["page"], 1);
    assert_eq!(data["limit"], 5);
    assert_eq!(data["total_pages"], 3);

    let (_, body) = send(&app, Method::GET, "/api/orders?page=3&limit=5", None).await;
    assert_eq!(body["data"]["orders"].as_array().unwrap().len(), 2);

    // 범위를 벗어난 값은 기본값으로
    let (status, body) = send(&app, Method::GET, "/api/orders?page=0&limit=500", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["limit"], 10);

    let (status, body) = send(&app, Method::GET, "/api/orders?page=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"], 1);
}

/// 테스트: 모든 페이지를 이어 붙이면 필터된 전체 목록과 같음
///
/// 중복 / 누락 없이 최신순(date 내림차순, 같으면 ID 내림차순)으로 나와야 합니다.
#[tokio::test]
async fn test_pages_concatenate_to_filtered_set() {
    let app = setup_app();
    let mut expected = std::collections::HashSet::new();
    for i in 0..12 {
        let order = create_order(&app, &format!("customer{i}@example.com"), "cash_on_delivery").await;
        let order_id = order["orderId"].as_str().unwrap().to_string();
        if i % 5 == 0 {
            let (status, _) = send(
                &app,
                Method::PUT,
                "/api/orders/update-status",
                Some(json!({ "orderId": order_id, "status": "cancelled" })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        } else {
            expected.insert(order_id);
        }
    }
    assert_eq!(expected.len(), 9);

    let (_, first) = send(&app, Method::GET, "/api/orders?status=pending&page=1&limit=4", None).await;
    let total_pages = first["data"]["total_pages"].as_i64().unwrap();
    assert_eq!(first["data"]["total"], 9);
    assert_eq!(total_pages, 3);

    let mut seen: Vec<(chrono::DateTime<chrono::Utc>, String)> = Vec::new();
    for page in 1..=total_pages {
        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/orders?status=pending&page={page}&limit=4"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        for order in body["data"]["orders"].as_array().unwrap() {
            let date = serde_json::from_value(order["date"].clone()).unwrap();
            seen.push((date, order["orderId"].as_str().unwrap().to_string()));
        }
    }

    assert_eq!(seen.len(), expected.len());
    let ids: std::collections::HashSet<String> = seen.iter().map(|(_, id)| id.clone()).collect();
    assert_eq!(ids, expected);
    assert!(seen.windows(2).all(|pair| pair[0] > pair[1]));
}

/// 테스트: 아주 큰 페이지 번호는 빈 페이지
#[tokio::test]
async fn test_huge_page_number_returns_empty_page() {
    let app = setup_app();
    create_order(&app, "jane@example.com", "cash_on_delivery").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/orders?page=9223372036854775807&limit=10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["page"], i64::MAX);
}

/// 테스트: 알 수 없는 상태 필터는 400
#[tokio::test]
async fn test_unknown_status_filter() {
    let app = setup_app();

    let (status, body) = send(&app, Method::GET, "/api/orders?status=lost", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400);
}

/// 테스트: 상태 변경 / 결제 상태 변경 (자동 전환 포함)
#[tokio::test]
async fn test_status_updates() {
    let app = setup_app();
    let order = create_order(&app, "jane@example.com", "mobile_money").await;
    let order_id = order["orderId"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/orders/update-payment",
        Some(json!({ "orderId": order_id, "paymentStatus": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["paymentStatus"], "approved");
    assert_eq!(body["data"]["status"], "processing");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/orders/update-status",
        Some(json!({ "orderId": order_id, "status": "shipped", "changedBy": "driver", "reason": "Left store" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "shipped");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/orders/update-status",
        Some(json!({ "orderId": order_id, "status": "teleported" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/orders/update-status",
        Some(json!({ "orderId": "ORD-000000001", "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/orders/{order_id}/history"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let history = body["data"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2]["newStatus"], "shipped");
    assert_eq!(history[2]["changedBy"], "driver");
}

/// 테스트: 결제 코드 조회 → 검증 → 대기 목록
#[tokio::test]
async fn test_payment_code_flow() {
    let app = setup_app();
    let order = create_order(&app, "jane@example.com", "mobile_money").await;
    let order_id = order["orderId"].as_str().unwrap();

    let (status, by_path) = send(
        &app,
        Method::GET,
        &format!("/api/orders/{order_id}/payment-code"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, by_query) = send(
        &app,
        Method::GET,
        &format!("/api/orders/payment-code?orderId={order_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_path["data"]["paymentCode"], by_query["data"]["paymentCode"]);
    let code = by_path["data"]["paymentCode"].as_str().unwrap().to_string();

    let (_, pending) = send(&app, Method::GET, "/api/admin/pending-payments", None).await;
    assert_eq!(pending["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/verify-payment-code",
        Some(json!({ "orderId": order_id, "paymentCode": code })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Payment code verified successfully");
    assert_eq!(body["data"]["paymentStatus"], "approved");
    assert_eq!(body["data"]["status"], "processing");
    assert_eq!(body["data"]["verifiedBy"], "admin");

    // 재사용은 400
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders/verify-payment",
        Some(json!({ "orderId": order_id, "paymentCode": code, "verifiedBy": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid or expired payment code");

    let (_, pending) = send(&app, Method::GET, "/api/orders/pending-payments", None).await;
    assert!(pending["data"].as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/orders/{order_id}/payment-code"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 테스트: 결제 코드 조회 시 주문 ID 검증
#[tokio::test]
async fn test_payment_code_lookup_errors() {
    let app = setup_app();

    let (status, _) = send(&app, Method::GET, "/api/orders/ORD-abc/payment-code", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/orders/ORD-000000001/payment-code", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/admin/verify-payment-code",
        Some(json!({ "orderId": "ORD-000000001" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// 테스트: 관리자 결제 확인 메시지
#[tokio::test]
async fn test_confirm_payment_messages() {
    let app = setup_app();

    let mobile = create_order(&app, "jane@example.com", "mobile_money").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders/confirm-payment",
        Some(json!({ "orderId": mobile["orderId"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Payment confirmed and order is now on route");
    assert_eq!(body["data"]["status"], "on_route");

    let cod = create_order(&app, "jane@example.com", "cash_on_delivery").await;
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/orders/confirm-payment",
        Some(json!({ "orderId": cod["orderId"], "notes": "Paid in store" })),
    )
    .await;
    assert_eq!(
        body["message"],
        "Payment confirmed (cash on delivery - order ready for pickup)"
    );
    assert_eq!(body["data"]["status"], "processing");
}

/// 테스트: 고객 주문 목록
#[tokio::test]
async fn test_customer_orders() {
    let app = setup_app();
    create_order(&app, "jane@example.com", "cash_on_delivery").await;
    create_order(&app, "jane@example.com", "mobile_money").await;
    create_order(&app, "john@example.com", "mobile_money").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/orders/customer?email=jane@example.com",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 2);

    let (status, body) = send(&app, Method::GET, "/api/orders/customer", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is required");
}

/// 테스트: 대시보드 / 매출 리포트 / 헬스 체크
#[tokio::test]
async fn test_admin_endpoints() {
    let app = setup_app();
    let order = create_order(&app, "jane@example.com", "mobile_money").await;
    send(
        &app,
        Method::PUT,
        "/api/orders/update-payment",
        Some(json!({ "orderId": order["orderId"], "paymentStatus": "approved" })),
    )
    .await;
    create_order(&app, "john@example.com", "cash_on_delivery").await;

    let (status, body) = send(&app, Method::GET, "/api/admin/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["stats"]["total_orders"], 2);
    assert_eq!(body["data"]["stats"]["pending_payments"], 1);
    assert_eq!(body["data"]["recentOrders"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pendingPayments"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/api/admin/sales-report", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sales report data retrieved successfully");
    assert!(body["data"]["monthly_sales"].is_array());

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

/// 테스트: OpenAPI 문서 제공
#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_app();

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/orders"].is_object());
}
