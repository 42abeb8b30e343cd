use utoipa::OpenApi;

use crate::domains::orders::handlers::HealthStatus;
use crate::domains::orders::models::*;
use crate::domains::orders::services::CreatedOrder;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::orders::handlers::order_handler::create_order,
        crate::domains::orders::handlers::order_handler::list_orders,
        crate::domains::orders::handlers::order_handler::list_customer_orders,
        crate::domains::orders::handlers::order_handler::track_order,
        crate::domains::orders::handlers::order_handler::update_order_status,
        crate::domains::orders::handlers::order_handler::update_payment_status,
        crate::domains::orders::handlers::order_handler::confirm_payment,
        crate::domains::orders::handlers::order_handler::get_status_history,
        crate::domains::orders::handlers::payment_handler::get_payment_code,
        crate::domains::orders::handlers::payment_handler::get_payment_code_by_query,
        crate::domains::orders::handlers::payment_handler::verify_payment_code,
        crate::domains::orders::handlers::payment_handler::get_pending_payments,
        crate::domains::orders::handlers::admin_handler::get_dashboard,
        crate::domains::orders::handlers::admin_handler::get_sales_report,
        crate::domains::orders::handlers::admin_handler::health
    ),
    components(schemas(
        OrderStatus,
        PaymentStatus,
        PaymentCodeStatus,
        CustomerInfo,
        OrderItem,
        Order,
        CreatedOrder,
        StatusLog,
        PaginatedOrders,
        CreateOrderRequest,
        CustomerInfoInput,
        OrderItemInput,
        UpdateStatusRequest,
        UpdatePaymentStatusRequest,
        ConfirmPaymentRequest,
        PaymentCode,
        PaymentInstructions,
        VerifyPaymentCodeRequest,
        VerificationResult,
        PendingPayment,
        DashboardStats,
        DashboardResponse,
        MonthlySales,
        PaymentMethodSales,
        StatusSales,
        TopCustomer,
        DailySales,
        SalesReport,
        HealthStatus
    )),
    tags(
        (name = "Orders", description = "Order placement, tracking and status workflow"),
        (name = "Payments", description = "Mobile money payment codes"),
        (name = "Admin", description = "Dashboard, sales report and health")
    ),
    info(
        title = "Liquor Store Order API",
        description = "Order management backend with mobile money payment codes",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
