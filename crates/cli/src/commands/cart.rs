//! Local cart management.
//!
//! Mutations load the cart file, apply one state transition from
//! `flacon_core::cart`, and synchronously rewrite the file. Product data is
//! resolved through the API at add time and snapshotted into the cart.

use std::path::Path;

use flacon_core::pricing::PricingConfig;
use flacon_core::{Product, ProductId};

use super::fetch_json;
use crate::cart_file;

/// Show the cart with its price breakdown.
///
/// # Errors
///
/// Returns an error if the cart file cannot be read.
pub fn show(cart_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cart = cart_file::load(Path::new(cart_path))?;
    if cart.is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "{qty} x {name} ({brand})  ${price} each",
            qty = line.quantity,
            name = line.product.name,
            brand = line.product.brand,
            price = line.product.price,
        );
    }

    let quote = cart.quote(&PricingConfig::default());
    println!();
    println!("subtotal  ${}", quote.subtotal);
    println!("tax       ${}", quote.tax);
    println!("shipping  ${}", quote.shipping);
    if let Some(code) = cart.promo_code() {
        println!("discount -${}  ({code})", quote.discount);
    }
    println!("total     ${}", quote.total);
    Ok(())
}

/// Fetch a product from the API and add it to the cart.
///
/// # Errors
///
/// Returns an error if the ID is malformed, the product is unknown or out of
/// stock, or the cart file cannot be written.
pub async fn add(
    api_url: &str,
    cart_path: &str,
    product_id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let id: ProductId = product_id
        .parse()
        .map_err(|_| format!("invalid product id: {product_id}"))?;

    let product: Product = fetch_json(&format!("{api_url}/api/products/{id}")).await?;
    if !product.in_stock {
        return Err(format!("{} is out of stock", product.name).into());
    }

    let path = Path::new(cart_path);
    let mut cart = cart_file::load(path)?;
    let name = product.name.clone();
    cart.add(product, quantity);
    cart_file::save(path, &cart)?;

    println!("added {quantity} x {name}");
    Ok(())
}

/// Remove a product's line from the cart.
///
/// # Errors
///
/// Returns an error if the ID is malformed or the cart file cannot be
/// written.
pub fn remove(cart_path: &str, product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id: ProductId = product_id
        .parse()
        .map_err(|_| format!("invalid product id: {product_id}"))?;

    let path = Path::new(cart_path);
    let mut cart = cart_file::load(path)?;
    cart.remove(id);
    cart_file::save(path, &cart)?;

    println!("removed {product_id}");
    Ok(())
}

/// Set a line's quantity; zero removes the line.
///
/// # Errors
///
/// Returns an error if the ID is malformed or the cart file cannot be
/// written.
pub fn set_quantity(
    cart_path: &str,
    product_id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let id: ProductId = product_id
        .parse()
        .map_err(|_| format!("invalid product id: {product_id}"))?;

    let path = Path::new(cart_path);
    let mut cart = cart_file::load(path)?;
    cart.set_quantity(id, quantity);
    cart_file::save(path, &cart)?;

    println!("set {product_id} to {quantity}");
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart file cannot be written.
pub fn clear(cart_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(cart_path);
    let mut cart = cart_file::load(path)?;
    cart.clear();
    cart_file::save(path, &cart)?;

    println!("cart cleared");
    Ok(())
}

/// Apply a promo code. An unrecognized code clears any applied promo rather
/// than leaving the old discount in place.
///
/// # Errors
///
/// Returns an error if the cart file cannot be written.
pub fn promo(cart_path: &str, code: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(cart_path);
    let mut cart = cart_file::load(path)?;

    let applied = cart.apply_promo(code, &PricingConfig::default());
    cart_file::save(path, &cart)?;

    if applied {
        println!("promo {code} applied");
    } else {
        println!("promo {code} not recognized; any applied promo was cleared");
    }
    Ok(())
}
