//! Order repository for database operations.
//!
//! Line items are stored as a JSONB snapshot inside the order row, keeping
//! the denormalized at-order-time shape: catalog edits never rewrite history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use flacon_core::{Email, Order, OrderId, OrderItem, OrderStatus, ValidOrder};

use super::RepositoryError;

const ORDER_COLUMNS: &str =
    "id, customer_name, email, phone, address, items, status, total_amount, order_date";

/// Database row for an order.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    customer_name: String,
    email: String,
    phone: String,
    address: String,
    items: Json<Vec<OrderItem>>,
    status: String,
    total_amount: Decimal,
    order_date: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let status = OrderStatus::from_str_opt(&row.status).ok_or_else(|| {
            RepositoryError::DataCorruption(format!("unknown order status: {}", row.status))
        })?;

        Ok(Self {
            id: OrderId::new(row.id),
            customer_name: row.customer_name,
            email,
            phone: row.phone,
            address: row.address,
            items: row.items.0,
            status,
            total_amount: row.total_amount,
            order_date: row.order_date,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated order with status `pending` and the server's
    /// timestamp, returning the generated ID.
    ///
    /// The total amount is stored exactly as supplied - there is no
    /// server-side recomputation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, order: &ValidOrder) -> Result<OrderId, RepositoryError> {
        let id = OrderId::generate();

        sqlx::query(
            "INSERT INTO orders \
                 (id, customer_name, email, phone, address, items, status, total_amount) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(&order.customer_name)
        .bind(order.email.as_str())
        .bind(&order.phone)
        .bind(&order.address)
        .bind(Json(&order.items))
        .bind(OrderStatus::Pending.as_str())
        .bind(order.total_amount)
        .execute(self.pool)
        .await?;

        Ok(id)
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored row no longer
    /// parses into a valid order.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        row.map(Order::try_from).transpose()
    }

    /// Number of placed orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Sum of all order totals.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn revenue(&self) -> Result<Decimal, RepositoryError> {
        let total: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(total_amount), 0) FROM orders")
                .fetch_one(self.pool)
                .await?;
        Ok(total)
    }
}
