//! Checkout: turn the local cart into a placed order.
//!
//! The total is computed here, client-side, from the shared pricing rules
//! and sent with the order - the server stores it as supplied. A successful
//! checkout empties the cart; a failed one leaves it untouched and is not
//! retried.

use std::path::Path;

use serde_json::Value;

use flacon_core::pricing::PricingConfig;
use flacon_core::{NewOrder, OrderItem};

use super::api_error;
use crate::cart_file;

/// Customer details for the order.
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

impl Customer {
    /// The free-text shipping address: street, city, and zip concatenated.
    fn full_address(&self) -> String {
        [self.address.as_str(), self.city.as_str(), self.zip.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Place an order from the local cart.
///
/// # Errors
///
/// Returns an error if the cart is empty, the API rejects the order, or the
/// cart file cannot be updated afterwards.
pub async fn run(
    api_url: &str,
    cart_path: &str,
    customer: Customer,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(cart_path);
    let mut cart = cart_file::load(path)?;
    if cart.is_empty() {
        return Err("cart is empty; add something first".into());
    }

    let quote = cart.quote(&PricingConfig::default());

    let order = NewOrder {
        customer_name: customer.name.clone(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        address: customer.full_address(),
        items: cart
            .lines()
            .iter()
            .map(|line| OrderItem {
                product_id: line.product.id,
                name: line.product.name.clone(),
                price: line.product.price,
                quantity: line.quantity,
            })
            .collect(),
        total_amount: Some(quote.total),
    };

    let response = reqwest::Client::new()
        .post(format!("{api_url}/api/orders"))
        .json(&order)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response).await);
    }

    let body: Value = response.json().await?;
    let order_id = body
        .get("orderId")
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
        .to_owned();

    // Order placed: the cart has been consumed.
    cart.clear();
    cart_file::save(path, &cart)?;

    println!("order {order_id} placed");
    println!("subtotal  ${}", quote.subtotal);
    println!("tax       ${}", quote.tax);
    println!("shipping  ${}", quote.shipping);
    println!("discount  ${}", quote.discount);
    println!("total     ${}", quote.total);
    Ok(())
}
