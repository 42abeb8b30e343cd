use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use utoipa::ToSchema;

use super::order::Order;
use super::status::PaymentStatus;

// =====================================================
// 관리자 리포트 (Admin reporting)
// =====================================================
// 주문 테이블에 대한 읽기 전용 집계
// - 대시보드 통계: 주문 수, 매출, 고객 수, 결제 대기 수
// - 매출 리포트: 월별(12개월), 결제수단별, 상태별, 상위 고객, 일별(30일)
// =====================================================

pub const SALES_REPORT_MONTHS: u32 = 12;
pub const SALES_REPORT_DAYS: i64 = 30;
pub const TOP_CUSTOMERS_LIMIT: usize = 10;

/// 대시보드 통계
/// Dashboard statistics
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_orders: i64,

    /// 결제 승인된 주문의 총액
    /// Sum of approved orders
    #[schema(value_type = String, example = "250000")]
    pub total_revenue: Decimal,

    pub unique_customers: i64,

    /// 결제 대기 중인 주문 수
    /// Orders whose payment is still pending
    pub pending_payments: i64,
}

/// 대시보드 응답
/// Dashboard payload
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_orders: Vec<Order>,
    pub pending_payments: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlySales {
    #[schema(example = "2024-06")]
    pub month: String,
    pub order_count: i64,
    #[schema(value_type = String)]
    pub total_revenue: Decimal,
    #[schema(value_type = String)]
    pub avg_order_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PaymentMethodSales {
    pub payment_method: String,
    pub order_count: i64,
    #[schema(value_type = String)]
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatusSales {
    pub status: String,
    pub order_count: i64,
    #[schema(value_type = String)]
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TopCustomer {
    pub customer_email: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub order_count: i64,
    #[schema(value_type = String)]
    pub total_spent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailySales {
    pub date: NaiveDate,
    pub order_count: i64,
    #[schema(value_type = String)]
    pub daily_revenue: Decimal,
}

/// 매출 리포트
/// Sales report
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalesReport {
    pub monthly_sales: Vec<MonthlySales>,
    pub sales_by_payment_method: Vec<PaymentMethodSales>,
    pub sales_by_status: Vec<StatusSales>,
    pub top_customers: Vec<TopCustomer>,
    pub daily_sales: Vec<DailySales>,
}

// =====================================================
// 메모리 집계 (MemoryOrderRepository용)
// =====================================================
// PostgreSQL 구현은 같은 집계를 SQL GROUP BY로 수행함
// =====================================================

/// 주문 목록으로부터 대시보드 통계 계산
/// Compute dashboard statistics over a set of orders
pub fn dashboard_stats_of<'a>(orders: impl IntoIterator<Item = &'a Order>) -> DashboardStats {
    let mut total_orders = 0;
    let mut total_revenue = Decimal::ZERO;
    let mut pending_payments = 0;
    let mut customers = HashSet::new();

    for order in orders {
        total_orders += 1;
        customers.insert(order.customer_info.email.as_str());
        match order.payment_status {
            PaymentStatus::Approved => total_revenue += order.total_amount,
            PaymentStatus::Pending => pending_payments += 1,
            PaymentStatus::Rejected => {}
        }
    }

    DashboardStats {
        total_orders,
        total_revenue,
        unique_customers: customers.len() as i64,
        pending_payments,
    }
}

/// 주문 목록으로부터 매출 리포트 계산
/// Compute the sales report over a set of orders as of `now`
pub fn sales_report_of<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    now: DateTime<Utc>,
) -> SalesReport {
    let orders: Vec<&Order> = orders.into_iter().collect();
    let months_ago = now
        .checked_sub_months(Months::new(SALES_REPORT_MONTHS))
        .unwrap_or(now);
    let days_ago = now - Duration::days(SALES_REPORT_DAYS);

    // 월별 (오름차순)
    let mut monthly: BTreeMap<String, (i64, Decimal)> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.created_at >= months_ago) {
        let key = format!("{:04}-{:02}", order.created_at.year(), order.created_at.month());
        let entry = monthly.entry(key).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += order.total_amount;
    }
    let monthly_sales = monthly
        .into_iter()
        .map(|(month, (order_count, total_revenue))| MonthlySales {
            month,
            order_count,
            total_revenue,
            avg_order_value: (total_revenue / Decimal::from(order_count)).round_dp(2),
        })
        .collect();

    // 결제수단별 / 상태별 (매출 내림차순)
    let mut by_method: HashMap<&str, (i64, Decimal)> = HashMap::new();
    let mut by_status: HashMap<&str, (i64, Decimal)> = HashMap::new();
    for order in &orders {
        let entry = by_method
            .entry(order.payment_method.as_str())
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += order.total_amount;

        let entry = by_status.entry(order.status.as_str()).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += order.total_amount;
    }
    let mut sales_by_payment_method: Vec<PaymentMethodSales> = by_method
        .into_iter()
        .map(|(method, (order_count, total_revenue))| PaymentMethodSales {
            payment_method: method.to_string(),
            order_count,
            total_revenue,
        })
        .collect();
    sales_by_payment_method.sort_by(|a, b| {
        b.total_revenue
            .cmp(&a.total_revenue)
            .then_with(|| a.payment_method.cmp(&b.payment_method))
    });

    let mut sales_by_status: Vec<StatusSales> = by_status
        .into_iter()
        .map(|(status, (order_count, total_revenue))| StatusSales {
            status: status.to_string(),
            order_count,
            total_revenue,
        })
        .collect();
    sales_by_status.sort_by(|a, b| {
        b.total_revenue
            .cmp(&a.total_revenue)
            .then_with(|| a.status.cmp(&b.status))
    });

    // 상위 고객 (총 구매액 내림차순, 10명)
    let mut customers: HashMap<(&str, &str, &str), (i64, Decimal)> = HashMap::new();
    for order in &orders {
        let key = (
            order.customer_info.email.as_str(),
            order.customer_info.first_name.as_str(),
            order.customer_info.last_name.as_str(),
        );
        let entry = customers.entry(key).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += order.total_amount;
    }
    let mut top_customers: Vec<TopCustomer> = customers
        .into_iter()
        .map(|((email, first, last), (order_count, total_spent))| TopCustomer {
            customer_email: email.to_string(),
            customer_first_name: first.to_string(),
            customer_last_name: last.to_string(),
            order_count,
            total_spent,
        })
        .collect();
    top_customers.sort_by(|a, b| {
        b.total_spent
            .cmp(&a.total_spent)
            .then_with(|| a.customer_email.cmp(&b.customer_email))
    });
    top_customers.truncate(TOP_CUSTOMERS_LIMIT);

    // 일별 (오름차순, 30일)
    let mut daily: BTreeMap<NaiveDate, (i64, Decimal)> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.created_at >= days_ago) {
        let entry = daily
            .entry(order.created_at.date_naive())
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += order.total_amount;
    }
    let daily_sales = daily
        .into_iter()
        .map(|(date, (order_count, daily_revenue))| DailySales {
            date,
            order_count,
            daily_revenue,
        })
        .collect();

    SalesReport {
        monthly_sales,
        sales_by_payment_method,
        sales_by_status,
        top_customers,
        daily_sales,
    }
}
