use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::orders::models::{DashboardResponse, SalesReport};
use crate::shared::services::AppState;
use crate::shared::utils::response::{ApiResponse, ApiResult};

/// 관리자 대시보드 핸들러
/// Admin dashboard handler
///
/// 통계 + 최근 주문 10건 + 결제 대기 주문 20건
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard data retrieved successfully", body = DashboardResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn get_dashboard(State(app_state): State<AppState>) -> ApiResult<DashboardResponse> {
    let dashboard = app_state.order_state.order_service.dashboard().await?;

    Ok(ApiResponse::success("Dashboard data retrieved successfully", dashboard))
}

/// 매출 리포트 핸들러
/// Sales report handler
#[utoipa::path(
    get,
    path = "/api/admin/sales-report",
    responses(
        (status = 200, description = "Sales report data retrieved successfully", body = SalesReport),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn get_sales_report(State(app_state): State<AppState>) -> ApiResult<SalesReport> {
    let report = app_state.order_state.order_service.sales_report().await?;

    Ok(ApiResponse::success("Sales report data retrieved successfully", report))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
    pub version: String,
}

/// 헬스 체크
/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthStatus)
    ),
    tag = "Admin"
)]
pub async fn health() -> ApiResult<HealthStatus> {
    Ok(ApiResponse::success(
        "API is healthy",
        HealthStatus {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}
