//! Order types and intake validation.
//!
//! Orders snapshot their line items at placement time: `OrderItem` carries a
//! denormalized copy of the product name and price, and `product_id` is a
//! weak reference - later catalog edits do not affect past orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Email, EmailError, OrderId, ProductId};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The status as its wire/storage string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a storage string back into a status.
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "shipped" => Some(Self::Shipped),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// One line of an order: a snapshot, not a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Weak reference to the product at order time.
    pub product_id: ProductId,
    /// Product name as it was when ordered.
    pub name: String,
    /// Unit price as it was when ordered.
    pub price: Decimal,
    /// Invariant: >= 1.
    pub quantity: u32,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub email: Email,
    pub phone: String,
    /// Free-text shipping address (city/zip concatenated by the client).
    pub address: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Computed client-side at order time; the server does not recompute it.
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
}

/// Order intake payload, before validation.
///
/// Every field defaults so that an incomplete body surfaces as a
/// [`ValidationError`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
}

/// A validated order intake, ready to persist.
#[derive(Debug, Clone)]
pub struct ValidOrder {
    pub customer_name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
}

/// Why an order intake was rejected.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The email address is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The order has no line items.
    #[error("order must contain at least one item")]
    NoItems,

    /// A line item has a zero quantity.
    #[error("item {0} has a quantity below 1")]
    InvalidQuantity(usize),

    /// The supplied total is negative.
    #[error("total amount cannot be negative")]
    NegativeTotal,
}

impl NewOrder {
    /// Validate the intake and produce a [`ValidOrder`].
    ///
    /// The total amount is accepted as supplied (client-authoritative, like
    /// the rest of the checkout flow) - only its presence and sign are
    /// checked, never whether it matches the item sum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a required field is absent or empty,
    /// the email is malformed, there are no items, or a quantity is below 1.
    pub fn validate(&self) -> Result<ValidOrder, ValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::MissingField("customerName"));
        }
        if self.email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingField("address"));
        }
        let total_amount = self
            .total_amount
            .ok_or(ValidationError::MissingField("totalAmount"))?;
        if total_amount < Decimal::ZERO {
            return Err(ValidationError::NegativeTotal);
        }

        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(ValidationError::InvalidQuantity(index));
            }
        }

        let email = Email::parse(&self.email)?;

        Ok(ValidOrder {
            customer_name: self.customer_name.clone(),
            email,
            phone: self.phone.clone(),
            address: self.address.clone(),
            items: self.items.clone(),
            total_amount,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn intake() -> NewOrder {
        NewOrder {
            customer_name: "Ana Duarte".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: "+351 912 345 678".to_owned(),
            address: "Rua das Flores 12, Lisboa, 1100-001".to_owned(),
            items: vec![OrderItem {
                product_id: ProductId::generate(),
                name: "Nuit de Velours".to_owned(),
                price: Decimal::new(12900, 2),
                quantity: 1,
            }],
            total_amount: Some(Decimal::new(14932, 2)),
        }
    }

    #[test]
    fn test_valid_intake_passes() {
        let valid = intake().validate().unwrap();
        assert_eq!(valid.email.as_str(), "ana@example.com");
        assert_eq!(valid.total_amount, Decimal::new(14932, 2));
    }

    #[test]
    fn test_missing_fields_rejected() {
        for (field, mutate) in [
            ("customerName", Box::new(|o: &mut NewOrder| o.customer_name.clear())
                as Box<dyn Fn(&mut NewOrder)>),
            ("email", Box::new(|o: &mut NewOrder| o.email.clear())),
            ("phone", Box::new(|o: &mut NewOrder| o.phone.clear())),
            ("address", Box::new(|o: &mut NewOrder| o.address.clear())),
            ("totalAmount", Box::new(|o: &mut NewOrder| o.total_amount = None)),
        ] {
            let mut order = intake();
            mutate(&mut order);
            match order.validate() {
                Err(ValidationError::MissingField(name)) => assert_eq!(name, field),
                other => panic!("expected MissingField({field}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut order = intake();
        order.email = "not-an-email".to_owned();
        assert!(matches!(
            order.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut order = intake();
        order.items.clear();
        assert!(matches!(order.validate(), Err(ValidationError::NoItems)));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut order = intake();
        order.items.push(OrderItem {
            product_id: ProductId::generate(),
            name: "Sample".to_owned(),
            price: Decimal::ONE,
            quantity: 0,
        });
        assert!(matches!(
            order.validate(),
            Err(ValidationError::InvalidQuantity(1))
        ));
    }

    #[test]
    fn test_total_is_not_recomputed() {
        // Client-authoritative: a total that disagrees with the item sum is
        // accepted as-is.
        let mut order = intake();
        order.total_amount = Some(Decimal::ONE);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_str_opt(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_str_opt("refunded"), None);
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
