//! Product route handlers.
//!
//! Read-only catalog queries plus the single-field-merge update. Substring
//! search filters in the handler via [`crate::catalog::matches_query`]
//! rather than pushing a pattern to the store.

use axum::{
    Json,
    extract::{Path, State},
};

use flacon_core::{Product, ProductId, ProductPatch};

use crate::catalog;
use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Parse a path segment into a product ID.
///
/// A segment that is not a well-formed ID cannot name any product, so it
/// surfaces as `NotFound` rather than a malformed-request error.
fn parse_id(raw: &str) -> Result<ProductId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("product {raw}")))
}

/// List the entire catalog.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// Get a single product by ID.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product_id = parse_id(&id)?;
    let product = ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}

/// Merge a partial update into a product and return the updated document.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product_id = parse_id(&id)?;
    let product = ProductRepository::new(state.pool())
        .update(product_id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}

/// List featured products.
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_featured().await?;
    Ok(Json(products))
}

/// Case-insensitive substring search over name, brand, description, and
/// category.
pub async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    let matches = products
        .into_iter()
        .filter(|product| catalog::matches_query(product, &query))
        .collect();
    Ok(Json(matches))
}

/// Exact (case-sensitive) category filter.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list_by_category(&category)
        .await?;
    Ok(Json(products))
}
