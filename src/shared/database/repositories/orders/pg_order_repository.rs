use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};
use std::collections::HashMap;

use super::order_repository::{
    OrderRepository, ORDER_CREATED_REASON, PAYMENT_APPROVED_REASON, SYSTEM_ACTOR,
};
use crate::domains::orders::models::{
    apply_payment_decision, page_offset, total_pages, CustomerInfo, DailySales, DashboardStats,
    MonthlySales, NewOrder, NewPaymentCode, Order, OrderFilter, OrderId, OrderItem, OrderStatus,
    PaginatedOrders, PaymentCode, PaymentCodeStatus, PaymentMethodSales, PaymentStatus,
    PaymentTransition, PendingPayment, SalesReport, StatusLog, StatusSales, StatusTransition,
    TopCustomer, VerificationResult, SALES_REPORT_DAYS, SALES_REPORT_MONTHS, TOP_CUSTOMERS_LIMIT,
};
use crate::shared::errors::OrderError;
use crate::shared::utils::money::format_frw;

const ORDER_COLUMNS: &str = r#"
    id, customer_email, customer_phone, customer_first_name, customer_last_name,
    customer_address, customer_city, customer_country, customer_latitude, customer_longitude,
    total_amount, payment_method, status, payment_status, created_at, updated_at
"#;

const PAYMENT_CODE_COLUMNS: &str = r#"
    id, order_id, payment_code, amount, phone_number, status,
    expires_at, verified_by, verified_at, created_at
"#;

// 필터는 NULL이면 조건 없음으로 처리 ($1::text IS NULL OR ...)
const ORDER_FILTER: &str = r#"
    ($1::text IS NULL OR status = $1)
    AND ($2::text IS NULL OR payment_status = $2)
    AND ($3::text IS NULL OR customer_email = $3)
"#;

/// PostgreSQL 주문 저장소
/// PostgreSQL order repository
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 주문 행 잠금 후 현재 상태 조회 (트랜잭션 안에서 호출)
    /// Lock the order row and read its current state
    async fn lock_order(
        conn: &mut PgConnection,
        order_id: &OrderId,
    ) -> Result<(OrderStatus, PaymentStatus), OrderError> {
        let row = sqlx::query("SELECT status, payment_status FROM orders WHERE id = $1 FOR UPDATE")
            .bind(order_id.as_str())
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| OrderError::OrderNotFound {
                order_id: order_id.to_string(),
            })?;

        let status: String = row.get("status");
        let payment_status: String = row.get("payment_status");
        Ok((parse_column(&status)?, parse_column(&payment_status)?))
    }

    /// 상태 로그 추가
    /// Append a status log row
    async fn append_log(
        conn: &mut PgConnection,
        order_id: &OrderId,
        old_status: Option<OrderStatus>,
        new_status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<(), OrderError> {
        sqlx::query(
            r#"
            INSERT INTO order_status_logs (order_id, old_status, new_status, changed_by, change_reason, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(order_id.as_str())
        .bind(old_status.map(|s| s.as_str()))
        .bind(new_status.as_str())
        .bind(changed_by)
        .bind(reason)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// 상태 변경 (주문 잠금 → UPDATE → 로그, 트랜잭션 안에서 호출)
    /// Update status on an existing connection/transaction
    async fn apply_status(
        conn: &mut PgConnection,
        order_id: &OrderId,
        new_status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<StatusTransition, OrderError> {
        let (old_status, _) = Self::lock_order(conn, order_id).await?;

        sqlx::query("UPDATE orders SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(new_status.as_str())
            .bind(Utc::now())
            .bind(order_id.as_str())
            .execute(&mut *conn)
            .await?;

        Self::append_log(conn, order_id, Some(old_status), new_status, changed_by, reason).await?;

        Ok(StatusTransition {
            old_status,
            new_status,
        })
    }

    /// 결제 결정 적용 (주문 잠금 → 결정 테이블 → UPDATE → 필요 시 로그)
    /// Apply a payment decision on an existing connection/transaction
    async fn apply_payment(
        conn: &mut PgConnection,
        order_id: &OrderId,
        decision: PaymentStatus,
        changed_by: &str,
    ) -> Result<PaymentTransition, OrderError> {
        let (status, payment_status) = Self::lock_order(conn, order_id).await?;
        let transition = apply_payment_decision(status, payment_status, decision);

        sqlx::query(
            "UPDATE orders SET payment_status = $1, status = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(transition.new_payment_status.as_str())
        .bind(transition.new_status.as_str())
        .bind(Utc::now())
        .bind(order_id.as_str())
        .execute(&mut *conn)
        .await?;

        if transition.promotes_order() {
            Self::append_log(
                conn,
                order_id,
                Some(transition.old_status),
                transition.new_status,
                changed_by,
                Some(PAYMENT_APPROVED_REASON),
            )
            .await?;
        }

        Ok(transition)
    }

    /// 주문 ID 목록의 상품 조회 (주문별로 묶음)
    /// Load items of several orders and group them by order id
    async fn load_items(&self, order_ids: &[String]) -> Result<HashMap<String, Vec<OrderItem>>, OrderError> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT order_id, product_name, price_label, product_price, quantity, product_image
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(order_ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.get("order_id"))
                .or_default()
                .push(OrderItem {
                    name: row.get("product_name"),
                    price: row.get("price_label"),
                    unit_price: row.get("product_price"),
                    quantity: row.get("quantity"),
                    image: row.get("product_image"),
                });
        }

        Ok(grouped)
    }

    /// 주문 행들에 상품을 붙여 Order로 변환
    async fn attach_items(&self, rows: Vec<PgRow>) -> Result<Vec<Order>, OrderError> {
        let ids: Vec<String> = rows.iter().map(|r| r.get("id")).collect();
        let mut items = self.load_items(&ids).await?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let order_items = items.remove(&id).unwrap_or_default();
                row_to_order(row, order_items)
            })
            .collect()
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order_id: &OrderId, new_order: &NewOrder) -> Result<OrderId, OrderError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();
        let customer = &new_order.customer_info;

        // ID 충돌은 INSERT에서 감지 (서비스가 새 ID로 재시도)
        let inserted = sqlx::query(
            r#"
            INSERT INTO orders (
                id, customer_email, customer_phone, customer_first_name, customer_last_name,
                customer_address, customer_city, customer_country, customer_latitude, customer_longitude,
                total_amount, payment_method, status, payment_status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(order_id.as_str())
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.country)
        .bind(customer.latitude)
        .bind(customer.longitude)
        .bind(new_order.total_amount)
        .bind(&new_order.payment_method)
        .bind(OrderStatus::Pending.as_str())
        .bind(PaymentStatus::Pending.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() == 0 {
            // tx는 drop 시 롤백됨
            return Err(OrderError::DuplicateOrderId {
                order_id: order_id.to_string(),
            });
        }

        for item in &new_order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_name, product_price, price_label, quantity, product_image, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(order_id.as_str())
            .bind(&item.name)
            .bind(item.unit_price)
            .bind(&item.price_label)
            .bind(item.quantity)
            .bind(&item.image)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        Self::append_log(
            &mut tx,
            order_id,
            None,
            OrderStatus::Pending,
            SYSTEM_ACTOR,
            Some(ORDER_CREATED_REASON),
        )
        .await?;

        tx.commit().await?;

        Ok(order_id.clone())
    }

    async fn get_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query(&format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS))
            .bind(order_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.attach_items(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn get_all(
        &self,
        filter: &OrderFilter,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedOrders, OrderError> {
        let status = filter.status.map(|s| s.as_str());
        let payment_status = filter.payment_status.map(|p| p.as_str());
        let email = filter.customer_email.as_deref();
        let offset = page_offset(page, limit);

        let total: i64 = sqlx::query(&format!(
            "SELECT COUNT(*) AS total FROM orders WHERE {}",
            ORDER_FILTER
        ))
        .bind(status)
        .bind(payment_status)
        .bind(email)
        .fetch_one(&self.pool)
        .await?
        .get("total");

        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM orders
            WHERE {}
            ORDER BY created_at DESC, id DESC
            LIMIT $4 OFFSET $5
            "#,
            ORDER_COLUMNS, ORDER_FILTER
        ))
        .bind(status)
        .bind(payment_status)
        .bind(email)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let orders = self.attach_items(rows).await?;

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        })
    }

    async fn update_status(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
        changed_by: &str,
        reason: Option<&str>,
    ) -> Result<StatusTransition, OrderError> {
        let mut tx = self.pool.begin().await?;
        let transition = Self::apply_status(&mut tx, order_id, new_status, changed_by, reason).await?;
        tx.commit().await?;

        Ok(transition)
    }

    async fn update_payment_status(
        &self,
        order_id: &OrderId,
        new_payment_status: PaymentStatus,
        changed_by: &str,
        _reason: Option<&str>,
    ) -> Result<PaymentTransition, OrderError> {
        let mut tx = self.pool.begin().await?;
        let transition = Self::apply_payment(&mut tx, order_id, new_payment_status, changed_by).await?;
        tx.commit().await?;

        Ok(transition)
    }

    async fn confirm_payment(
        &self,
        order_id: &OrderId,
        changed_by: &str,
        on_route_reason: Option<&str>,
    ) -> Result<PaymentTransition, OrderError> {
        let mut tx = self.pool.begin().await?;
        let transition =
            Self::apply_payment(&mut tx, order_id, PaymentStatus::Approved, changed_by).await?;
        if let Some(reason) = on_route_reason {
            Self::apply_status(&mut tx, order_id, OrderStatus::OnRoute, changed_by, Some(reason))
                .await?;
        }
        tx.commit().await?;

        Ok(transition)
    }

    async fn insert_payment_code(
        &self,
        new_code: &NewPaymentCode,
    ) -> Result<Option<PaymentCode>, OrderError> {
        let exists = sqlx::query("SELECT 1 FROM orders WHERE id = $1")
            .bind(new_code.order_id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .is_some();
        if !exists {
            return Err(OrderError::OrderNotFound {
                order_id: new_code.order_id.to_string(),
            });
        }

        let now = Utc::now();
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO payment_codes (order_id, payment_code, amount, phone_number, status, expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (payment_code) DO NOTHING
            RETURNING {}
            "#,
            PAYMENT_CODE_COLUMNS
        ))
        .bind(new_code.order_id.as_str())
        .bind(&new_code.payment_code)
        .bind(new_code.amount)
        .bind(&new_code.phone_number)
        .bind(PaymentCodeStatus::Pending.as_str())
        .bind(new_code.expires_at)
        .bind(now)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_payment_code(&r)).transpose()
    }

    async fn get_active_payment_code(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<PaymentCode>, OrderError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM payment_codes
            WHERE order_id = $1 AND status = 'pending' AND expires_at > NOW()
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
            PAYMENT_CODE_COLUMNS
        ))
        .bind(order_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_payment_code(&r)).transpose()
    }

    async fn verify_payment_code(
        &self,
        order_id: &OrderId,
        code: &str,
        verified_by: &str,
    ) -> Result<VerificationResult, OrderError> {
        let mut tx = self.pool.begin().await?;

        // 코드 행 잠금: 같은 코드를 동시에 검증하면 하나만 성공
        let row = sqlx::query(
            r#"
            SELECT id, amount
            FROM payment_codes
            WHERE order_id = $1 AND payment_code = $2 AND status = 'pending' AND expires_at > NOW()
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .bind(order_id.as_str())
        .bind(code)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(OrderError::InvalidPaymentCode)?;

        let code_id: i64 = row.get("id");
        let amount: Decimal = row.get("amount");
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE payment_codes
            SET status = 'verified', verified_by = $1, verified_at = $2, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(verified_by)
        .bind(now)
        .bind(code_id)
        .execute(&mut *tx)
        .await?;

        let transition =
            Self::apply_payment(&mut tx, order_id, PaymentStatus::Approved, verified_by).await?;

        tx.commit().await?;

        Ok(VerificationResult {
            order_id: order_id.clone(),
            amount,
            payment_code: code.to_string(),
            payment_status: transition.new_payment_status,
            status: transition.new_status,
            verified_by: verified_by.to_string(),
            verified_at: now,
        })
    }

    async fn get_pending_payment_codes(&self) -> Result<Vec<PendingPayment>, OrderError> {
        let rows = sqlx::query(
            r#"
            SELECT pc.id, pc.order_id, pc.payment_code, pc.amount, pc.phone_number,
                   pc.created_at, pc.expires_at,
                   o.customer_first_name, o.customer_last_name, o.customer_phone, o.customer_email
            FROM payment_codes pc
            JOIN orders o ON o.id = pc.order_id
            WHERE pc.status = 'pending' AND pc.expires_at > NOW()
            ORDER BY pc.created_at DESC, pc.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let first: String = row.get("customer_first_name");
                let last: String = row.get("customer_last_name");
                PendingPayment {
                    id: row.get("id"),
                    order_id: OrderId::from_trusted(row.get("order_id")),
                    payment_code: row.get("payment_code"),
                    amount: row.get("amount"),
                    phone_number: row.get("phone_number"),
                    customer_name: format!("{} {}", first, last),
                    customer_phone: row.get("customer_phone"),
                    customer_email: row.get("customer_email"),
                    created_at: row.get("created_at"),
                    expires_at: row.get("expires_at"),
                }
            })
            .collect())
    }

    async fn get_status_history(&self, order_id: &OrderId) -> Result<Vec<StatusLog>, OrderError> {
        let rows = sqlx::query(
            r#"
            SELECT id, order_id, old_status, new_status, changed_by, change_reason, created_at
            FROM order_status_logs
            WHERE order_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(order_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let old_status: Option<String> = row.get("old_status");
                let new_status: String = row.get("new_status");
                Ok(StatusLog {
                    id: row.get("id"),
                    order_id: OrderId::from_trusted(row.get("order_id")),
                    old_status: old_status.as_deref().map(parse_column).transpose()?,
                    new_status: parse_column(&new_status)?,
                    changed_by: row.get("changed_by"),
                    reason: row.get("change_reason"),
                    created_at: row.get("created_at"),
                })
            })
            .collect()
    }

    async fn get_dashboard_stats(&self) -> Result<DashboardStats, OrderError> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total_orders,
                COALESCE(SUM(total_amount) FILTER (WHERE payment_status = 'approved'), 0) AS total_revenue,
                COUNT(DISTINCT customer_email) AS unique_customers,
                COUNT(*) FILTER (WHERE payment_status = 'pending') AS pending_payments
            FROM orders
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardStats {
            total_orders: row.get("total_orders"),
            total_revenue: row.get("total_revenue"),
            unique_customers: row.get("unique_customers"),
            pending_payments: row.get("pending_payments"),
        })
    }

    async fn get_sales_report(&self) -> Result<SalesReport, OrderError> {
        // 월별 매출 (최근 12개월)
        let monthly_sales = sqlx::query(
            r#"
            SELECT
                to_char(created_at, 'YYYY-MM') AS month,
                COUNT(*) AS order_count,
                COALESCE(SUM(total_amount), 0) AS total_revenue,
                ROUND(COALESCE(AVG(total_amount), 0), 2) AS avg_order_value
            FROM orders
            WHERE created_at >= NOW() - make_interval(months => $1)
            GROUP BY month
            ORDER BY month ASC
            "#,
        )
        .bind(SALES_REPORT_MONTHS as i32)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| MonthlySales {
            month: row.get("month"),
            order_count: row.get("order_count"),
            total_revenue: row.get("total_revenue"),
            avg_order_value: row.get("avg_order_value"),
        })
        .collect();

        // 결제수단별
        let sales_by_payment_method = sqlx::query(
            r#"
            SELECT payment_method, COUNT(*) AS order_count, COALESCE(SUM(total_amount), 0) AS total_revenue
            FROM orders
            GROUP BY payment_method
            ORDER BY total_revenue DESC, payment_method ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| PaymentMethodSales {
            payment_method: row.get("payment_method"),
            order_count: row.get("order_count"),
            total_revenue: row.get("total_revenue"),
        })
        .collect();

        // 상태별
        let sales_by_status = sqlx::query(
            r#"
            SELECT status, COUNT(*) AS order_count, COALESCE(SUM(total_amount), 0) AS total_revenue
            FROM orders
            GROUP BY status
            ORDER BY total_revenue DESC, status ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| StatusSales {
            status: row.get("status"),
            order_count: row.get("order_count"),
            total_revenue: row.get("total_revenue"),
        })
        .collect();

        // 상위 고객
        let top_customers = sqlx::query(
            r#"
            SELECT customer_email, customer_first_name, customer_last_name,
                   COUNT(*) AS order_count, COALESCE(SUM(total_amount), 0) AS total_spent
            FROM orders
            GROUP BY customer_email, customer_first_name, customer_last_name
            ORDER BY total_spent DESC, customer_email ASC
            LIMIT $1
            "#,
        )
        .bind(TOP_CUSTOMERS_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| TopCustomer {
            customer_email: row.get("customer_email"),
            customer_first_name: row.get("customer_first_name"),
            customer_last_name: row.get("customer_last_name"),
            order_count: row.get("order_count"),
            total_spent: row.get("total_spent"),
        })
        .collect();

        // 일별 매출 (최근 30일)
        let daily_sales = sqlx::query(
            r#"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS sale_date,
                   COUNT(*) AS order_count,
                   COALESCE(SUM(total_amount), 0) AS daily_revenue
            FROM orders
            WHERE created_at >= NOW() - make_interval(days => $1)
            GROUP BY sale_date
            ORDER BY sale_date ASC
            "#,
        )
        .bind(SALES_REPORT_DAYS as i32)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| DailySales {
            date: row.get("sale_date"),
            order_count: row.get("order_count"),
            daily_revenue: row.get("daily_revenue"),
        })
        .collect();

        Ok(SalesReport {
            monthly_sales,
            sales_by_payment_method,
            sales_by_status,
            top_customers,
            daily_sales,
        })
    }
}

/// DB에 저장된 상태 문자열 파싱 (실패는 서버 에러)
fn parse_column<T>(value: &str) -> Result<T, OrderError>
where
    T: std::str::FromStr<Err = OrderError>,
{
    value
        .parse()
        .map_err(|e: OrderError| OrderError::DatabaseError(e.to_string()))
}

/// Row를 Order로 변환하는 헬퍼 함수
/// Helper function to convert Row to Order
fn row_to_order(row: &PgRow, items: Vec<OrderItem>) -> Result<Order, OrderError> {
    let status: String = row.get("status");
    let payment_status: String = row.get("payment_status");
    let total_amount: Decimal = row.get("total_amount");

    Ok(Order {
        order_id: OrderId::from_trusted(row.get("id")),
        customer_info: CustomerInfo {
            email: row.get("customer_email"),
            phone: row.get("customer_phone"),
            first_name: row.get("customer_first_name"),
            last_name: row.get("customer_last_name"),
            address: row.get("customer_address"),
            city: row.get("customer_city"),
            country: row.get("customer_country"),
            latitude: row.get("customer_latitude"),
            longitude: row.get("customer_longitude"),
        },
        items,
        total: format_frw(total_amount),
        total_amount,
        status: parse_column(&status)?,
        payment_status: parse_column(&payment_status)?,
        payment_method: row.get("payment_method"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn row_to_payment_code(row: &PgRow) -> Result<PaymentCode, OrderError> {
    let status: String = row.get("status");

    Ok(PaymentCode {
        id: row.get("id"),
        order_id: OrderId::from_trusted(row.get("order_id")),
        payment_code: row.get("payment_code"),
        amount: row.get("amount"),
        phone_number: row.get("phone_number"),
        status: parse_column(&status)?,
        expires_at: row.get("expires_at"),
        verified_by: row.get("verified_by"),
        verified_at: row.get("verified_at"),
        created_at: row.get("created_at"),
    })
}
