//! Storefront statistics.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::{OrderRepository, ProductRepository};
use crate::error::Result;
use crate::state::AppState;

/// Aggregate counts and the revenue sum.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_products: i64,
    pub total_orders: i64,
    pub total_revenue: Decimal,
}

/// Report catalog size, order count, and total revenue.
pub async fn show(State(state): State<AppState>) -> Result<Json<Stats>> {
    let total_products = ProductRepository::new(state.pool()).count().await?;
    let orders = OrderRepository::new(state.pool());
    let total_orders = orders.count().await?;
    let total_revenue = orders.revenue().await?;

    Ok(Json(Stats {
        total_products,
        total_orders,
        total_revenue,
    }))
}
