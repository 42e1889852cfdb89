//! Cart persistence.
//!
//! The cart is a single JSON blob in a local file - the CLI's equivalent of
//! the browser's local storage. Loads tolerate a missing file (fresh cart);
//! every mutation rewrites the whole file synchronously, last write wins.

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use flacon_core::cart::Cart;

/// Errors reading or writing the cart file.
#[derive(Debug, Error)]
pub enum CartFileError {
    #[error("cannot access cart file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cart file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load the cart, or an empty one when the file does not exist yet.
///
/// # Errors
///
/// Returns `CartFileError` if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<Cart, CartFileError> {
    match std::fs::read_to_string(path) {
        Ok(blob) => Ok(serde_json::from_str(&blob)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Cart::new()),
        Err(e) => Err(e.into()),
    }
}

/// Write the full cart state back to disk.
///
/// # Errors
///
/// Returns `CartFileError` if the file cannot be written.
pub fn save(path: &Path, cart: &Cart) -> Result<(), CartFileError> {
    let blob = serde_json::to_string_pretty(cart)?;
    std::fs::write(path, blob)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use flacon_core::{FragranceNotes, Product, ProductId};

    use super::*;

    fn scratch_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("flacon-cart-{}.json", uuid::Uuid::new_v4()))
    }

    fn product() -> Product {
        Product {
            id: ProductId::generate(),
            name: "Rose Absolue".to_owned(),
            brand: "Maison Ambre".to_owned(),
            price: Decimal::new(7500, 2),
            original_price: None,
            description: String::new(),
            category: "floral".to_owned(),
            image: "rose-absolue.jpg".to_owned(),
            rating: Decimal::new(45, 1),
            reviews: 0,
            in_stock: true,
            size: "100ml".to_owned(),
            notes: FragranceNotes::default(),
            featured: false,
        }
    }

    #[test]
    fn test_missing_file_is_an_empty_cart() {
        let cart = load(Path::new("/nonexistent/flacon-cart.json")).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = scratch_path();
        let mut cart = Cart::new();
        cart.add(product(), 2);

        save(&path, &cart).unwrap();
        let restored = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(restored.lines().len(), 1);
        assert_eq!(restored.lines()[0].quantity, 2);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let path = scratch_path();
        std::fs::write(&path, "not json").unwrap();

        let result = load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(CartFileError::Malformed(_))));
    }
}
