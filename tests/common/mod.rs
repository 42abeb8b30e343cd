// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = setup_app();
//     let (status, body) = send(&app, Method::GET, "/api/orders", None).await;
//     // 테스트 코드...
// }
// ```
//
// 저장소는 메모리 구현을 사용하므로 DB 없이 실행됨
// (PostgreSQL 테스트는 postgres_repository.rs 참고)
// =====================================================

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use serde_json::{json, Value};
use tower::ServiceExt;

use liquor_store_api::domains::orders::services::OrderService;
use liquor_store_api::routes::{create_app, create_cors_layer};
use liquor_store_api::shared::database::{MemoryOrderRepository, OrderRepository};
use liquor_store_api::shared::services::AppState;

/// 기본 결제 코드 유효 시간
pub fn default_ttl() -> Duration {
    Duration::hours(24)
}

/// 메모리 저장소 기반 서비스
pub fn setup_service_with_ttl(ttl: Duration) -> OrderService {
    let repository: Arc<dyn OrderRepository> = Arc::new(MemoryOrderRepository::new());
    OrderService::new(repository, ttl)
}

pub fn setup_service() -> OrderService {
    setup_service_with_ttl(default_ttl())
}

/// 메모리 저장소 기반 전체 애플리케이션 (라우터 + 미들웨어)
pub fn setup_app_with_ttl(ttl: Duration) -> Router {
    let repository: Arc<dyn OrderRepository> = Arc::new(MemoryOrderRepository::new());
    let state = AppState::new(repository, ttl);
    let cors = create_cors_layer(None).expect("CORS layer");
    create_app(state, cors)
}

pub fn setup_app() -> Router {
    setup_app_with_ttl(default_ttl())
}

/// 요청 전송 후 (상태 코드, JSON body) 반환
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    send_request(app, request).await
}

/// 원본 body 그대로 전송 (잘못된 JSON 테스트용)
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .expect("request");

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, value)
}

/// 주문 생성 요청 body
pub fn order_body(email: &str, payment_method: &str) -> Value {
    json!({
        "customerInfo": {
            "email": email,
            "phone": "+250788123456",
            "firstName": "Jane",
            "lastName": "Doe",
            "address": "KG 11 Ave",
            "city": "Kigali",
            "country": "Rwanda"
        },
        "items": [
            { "name": "Wine A", "price": "50,000frw", "quantity": 2 }
        ],
        "paymentMethod": payment_method,
        "total": "100,000frw"
    })
}

/// 주문 생성 후 응답 data 반환
pub async fn create_order(app: &Router, email: &str, payment_method: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/api/orders", Some(order_body(email, payment_method))).await;
    assert_eq!(status, StatusCode::OK, "create order failed: {body}");
    body["data"].clone()
}

/// 결제 코드 형식: *182*8*1*NNNNNN#
pub fn is_payment_code(code: &str) -> bool {
    code.len() == 16
        && code.starts_with("*182*8*1*")
        && code.ends_with('#')
        && code[9..15].chars().all(|c| c.is_ascii_digit())
}

/// 주문 ID 형식: ORD- + 9자리 숫자
pub fn is_order_id(id: &str) -> bool {
    id.len() == 13 && id.starts_with("ORD-") && id[4..].chars().all(|c| c.is_ascii_digit())
}
