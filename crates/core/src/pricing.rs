//! The pricing engine.
//!
//! Pure computation over a list of line amounts: subtotal, flat-rate tax,
//! threshold shipping, and promo-code discounts. The same [`PricingConfig`]
//! drives the server and the cart client, so the constants and the promo
//! table live in exactly one place.
//!
//! All arithmetic is exact [`Decimal`] math; nothing here rounds.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The price-relevant part of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmount {
    /// Unit price.
    pub price: Decimal,
    /// Invariant: >= 1.
    pub quantity: u32,
}

/// How a promo code discounts the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoRule {
    /// Percentage of the subtotal (e.g. 10 for 10% off).
    Percentage(Decimal),
    /// Flat amount off the total.
    Flat(Decimal),
}

/// Tax, shipping, and promo configuration.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Flat tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Shipping is free strictly above this subtotal.
    pub free_shipping_threshold: Decimal,
    /// Flat shipping fee below the threshold.
    pub shipping_fee: Decimal,
    promos: HashMap<String, PromoRule>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            // 8%
            tax_rate: Decimal::new(8, 2),
            free_shipping_threshold: Decimal::from(100),
            shipping_fee: Decimal::from(10),
            promos: HashMap::from([
                ("SAVE10".to_owned(), PromoRule::Percentage(Decimal::from(10))),
                ("SAVE20".to_owned(), PromoRule::Percentage(Decimal::from(20))),
                ("FIRSTORDER".to_owned(), PromoRule::Flat(Decimal::from(15))),
                ("WELCOME".to_owned(), PromoRule::Percentage(Decimal::from(5))),
            ]),
        }
    }
}

impl PricingConfig {
    /// Look up a promo code. Codes are matched exactly.
    #[must_use]
    pub fn promo(&self, code: &str) -> Option<PromoRule> {
        self.promos.get(code).copied()
    }

    /// Whether the given code is recognized.
    #[must_use]
    pub fn is_valid_promo(&self, code: &str) -> bool {
        self.promos.contains_key(code)
    }
}

/// A priced cart: every component of the total, itemized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Price a cart.
///
/// - subtotal = sum of price x quantity
/// - tax = subtotal x tax rate
/// - shipping = 0 strictly above the free-shipping threshold, else the flat
///   fee (a subtotal exactly at the threshold still pays shipping)
/// - discount from the promo table; an unrecognized or absent code
///   discounts nothing
/// - total = subtotal + tax + shipping - discount, deliberately not clamped
///   at zero: a discount exceeding the rest goes negative
///
/// Deterministic, no side effects, no I/O.
#[must_use]
pub fn quote(lines: &[LineAmount], promo: Option<&str>, config: &PricingConfig) -> Quote {
    let subtotal: Decimal = lines
        .iter()
        .map(|line| line.price * Decimal::from(line.quantity))
        .sum();

    let tax = subtotal * config.tax_rate;

    let shipping = if subtotal > config.free_shipping_threshold {
        Decimal::ZERO
    } else {
        config.shipping_fee
    };

    let discount = promo
        .and_then(|code| config.promo(code))
        .map_or(Decimal::ZERO, |rule| match rule {
            PromoRule::Percentage(percent) => subtotal * percent / Decimal::ONE_HUNDRED,
            PromoRule::Flat(amount) => amount,
        });

    Quote {
        subtotal,
        tax,
        shipping,
        discount,
        total: subtotal + tax + shipping - discount,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn line(price: &str, quantity: u32) -> LineAmount {
        LineAmount {
            price: dec(price),
            quantity,
        }
    }

    #[test]
    fn test_worked_example() {
        // Two bottles at 1600 plus one at 64.99 with SAVE10.
        let lines = [line("1600", 2), line("64.99", 1)];
        let q = quote(&lines, Some("SAVE10"), &PricingConfig::default());

        assert_eq!(q.subtotal, dec("3264.99"));
        assert_eq!(q.tax, dec("261.1992"));
        assert_eq!(q.shipping, Decimal::ZERO);
        assert_eq!(q.discount, dec("326.499"));
        assert_eq!(q.total, dec("3199.6902"));
    }

    #[test]
    fn test_invariant_under_reordering() {
        let forward = [line("19.99", 3), line("250", 1), line("5", 7)];
        let reversed = [line("5", 7), line("250", 1), line("19.99", 3)];
        let config = PricingConfig::default();

        assert_eq!(
            quote(&forward, Some("SAVE20"), &config),
            quote(&reversed, Some("SAVE20"), &config)
        );
    }

    #[test]
    fn test_unrecognized_code_discounts_nothing() {
        let lines = [line("50", 1)];
        let config = PricingConfig::default();

        let with_bad_code = quote(&lines, Some("SAVE99"), &config);
        let without = quote(&lines, None, &config);
        assert_eq!(with_bad_code.discount, Decimal::ZERO);
        assert_eq!(with_bad_code, without);
    }

    #[test]
    fn test_shipping_boundary_is_strict() {
        let config = PricingConfig::default();

        // Exactly 100.00 still pays shipping; strictly above does not.
        let at = quote(&[line("100.00", 1)], None, &config);
        assert_eq!(at.shipping, dec("10"));

        let above = quote(&[line("100.01", 1)], None, &config);
        assert_eq!(above.shipping, Decimal::ZERO);
    }

    #[test]
    fn test_tax_is_eight_percent() {
        let q = quote(&[line("25.50", 2)], None, &PricingConfig::default());
        assert_eq!(q.tax, dec("4.08"));
    }

    #[test]
    fn test_flat_promo() {
        let q = quote(&[line("40", 1)], Some("FIRSTORDER"), &PricingConfig::default());
        assert_eq!(q.discount, dec("15"));
        // 40 + 3.20 tax + 10 shipping - 15
        assert_eq!(q.total, dec("38.20"));
    }

    #[test]
    fn test_oversized_discount_goes_negative() {
        // A flat discount larger than subtotal + tax + shipping is not
        // clamped.
        let q = quote(&[line("1", 1)], Some("FIRSTORDER"), &PricingConfig::default());
        assert!(q.total < Decimal::ZERO);
    }

    #[test]
    fn test_empty_cart() {
        let q = quote(&[], None, &PricingConfig::default());
        assert_eq!(q.subtotal, Decimal::ZERO);
        assert_eq!(q.tax, Decimal::ZERO);
        // An empty cart is not above the threshold, so the flat fee applies.
        assert_eq!(q.shipping, dec("10"));
        assert_eq!(q.total, dec("10"));
    }

    #[test]
    fn test_promo_lookup_is_exact() {
        let config = PricingConfig::default();
        assert!(config.is_valid_promo("SAVE10"));
        assert!(!config.is_valid_promo("save10"));
        assert!(!config.is_valid_promo(""));
    }
}
