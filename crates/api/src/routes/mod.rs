//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/products                      - List the whole catalog
//! GET  /api/products/{id}                 - Get one product
//! PUT  /api/products/{id}                 - Partial update, returns the merged product
//! GET  /api/products/featured/all         - Featured shelf
//! GET  /api/products/search/{query}       - Case-insensitive substring search
//! GET  /api/products/category/{category}  - Exact category filter
//!
//! POST /api/orders                        - Place an order (201 + {message, orderId})
//! GET  /api/orders/{id}                   - Order with items expanded to current products
//!
//! GET  /api/stats                         - Catalog/order counts and revenue sum
//! GET  /api/health                        - Liveness
//! GET  /api/health/ready                  - Readiness (checks the database)
//! ```
//!
//! Route strings are part of the compatibility surface and must not change.

pub mod orders;
pub mod products;
pub mod stats;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list))
        .route("/{id}", get(products::show).put(products::update))
        .route("/featured/all", get(products::featured))
        .route("/search/{query}", get(products::search))
        .route("/category/{category}", get(products::by_category))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/{id}", get(orders::show))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/orders", order_routes())
        .route("/api/stats", get(stats::show))
}
