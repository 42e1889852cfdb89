//! Integration tests for Flacon.
//!
//! # Running Tests
//!
//! The tests drive a running API over HTTP and are `#[ignore]`d by default:
//!
//! ```bash
//! # Start the database, migrate, and seed
//! cargo run -p flacon-cli -- migrate
//! cargo run -p flacon-cli -- seed
//!
//! # Start the API
//! cargo run -p flacon-api &
//!
//! # Run the ignored tests
//! FLACON_BASE_URL=http://127.0.0.1:5000 \
//!     cargo test -p flacon-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_catalog` - Catalog listing, search, and filter semantics
//! - `api_orders` - Order placement, validation, and expansion

use reqwest::Client;

/// Shared context for driving the API under test.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Build a context against `FLACON_BASE_URL` (default: localhost:5000).
    #[must_use]
    pub fn new() -> Self {
        let base_url = std::env::var("FLACON_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_owned());
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
