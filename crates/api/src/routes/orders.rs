//! Order route handlers.
//!
//! Placement validates the intake, persists the snapshot, and answers with
//! the generated ID. Retrieval expands each stored item's weak product
//! reference to the *current* catalog document for display - deleted or
//! never-known products expand to `null`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use flacon_core::{Email, NewOrder, OrderId, OrderStatus, Product, ProductId};

use crate::db::{OrderRepository, ProductRepository};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response body for a placed order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: &'static str,
    pub order_id: OrderId,
}

/// An order as displayed: items joined against the current catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: OrderId,
    pub customer_name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub items: Vec<ExpandedItem>,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
}

/// An order line: the stored snapshot plus the live product, when it still
/// resolves.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub product: Option<Product>,
}

/// Place an order.
///
/// The total amount is accepted as supplied by the client; the server
/// validates presence and sign, never the arithmetic.
pub async fn create(
    State(state): State<AppState>,
    Json(new_order): Json<NewOrder>,
) -> Result<(StatusCode, Json<OrderCreated>)> {
    let valid = new_order.validate()?;
    let order_id = OrderRepository::new(state.pool()).insert(&valid).await?;

    tracing::info!(%order_id, total = %valid.total_amount, "order placed");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order placed successfully",
            order_id,
        }),
    ))
}

/// Get an order with its items expanded against the current catalog.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetail>> {
    let order_id: OrderId = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("order {id}")))?;

    let order = OrderRepository::new(state.pool())
        .get(order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    let products = ProductRepository::new(state.pool());
    let mut items = Vec::with_capacity(order.items.len());
    for item in order.items {
        let product = products.get(item.product_id).await?;
        items.push(ExpandedItem {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            product,
        });
    }

    Ok(Json(OrderDetail {
        id: order.id,
        customer_name: order.customer_name,
        email: order.email,
        phone: order.phone,
        address: order.address,
        items,
        status: order.status,
        total_amount: order.total_amount,
        order_date: order.order_date,
    }))
}
