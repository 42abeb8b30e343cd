// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::domains::orders::handlers::health;
use crate::domains::orders::routes::{create_admin_router, create_orders_router};
use crate::shared::services::AppState;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/orders", create_orders_router())
        .nest("/api/admin", create_admin_router())
        .route("/api/health", get(health))
}

/// 전체 애플리케이션 (라우터 + Swagger + 미들웨어 + 상태)
/// Assemble the full application
pub fn create_app(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// CORS 설정
/// Build the CORS layer
///
/// origin이 지정되면 해당 origin만 허용 (credentials 포함),
/// 지정되지 않으면 모든 origin 허용 (credentials 없음)
pub fn create_cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    let cors = match origin {
        Some(origin) => cors
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {origin}"))?,
            )
            .allow_credentials(true),
        None => cors.allow_origin(Any),
    };

    Ok(cors)
}
