//! Flacon CLI - database tooling and the storefront cart client.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! flacon migrate
//!
//! # Seed the perfume catalog
//! flacon seed
//!
//! # Browse the catalog through a running API
//! flacon catalog list
//! flacon catalog search "rose"
//!
//! # Manage the local cart and check out
//! flacon cart add <product-id> --quantity 2
//! flacon cart promo SAVE10
//! flacon checkout --name "Ana Duarte" --email ana@example.com \
//!     --phone "+351912345678" --address "Rua das Flores 12" \
//!     --city Lisboa --zip 1100-001
//! ```
//!
//! The cart lives in a local JSON file and is rewritten in full on every
//! mutation; the API is only contacted to resolve products and to place the
//! order.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod cart_file;
mod commands;

#[derive(Parser)]
#[command(name = "flacon")]
#[command(author, version, about = "Flacon storefront CLI")]
struct Cli {
    /// Base URL of the Flacon API
    #[arg(long, global = true, default_value = "http://127.0.0.1:5000")]
    api_url: String,

    /// Path of the local cart file
    #[arg(long, global = true, default_value = ".flacon-cart.json")]
    cart_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with the perfume catalog
    Seed {
        /// Re-seed even if products already exist
        #[arg(long)]
        force: bool,
    },
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order from the local cart
    Checkout {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer email address
        #[arg(long)]
        email: String,

        /// Customer phone number
        #[arg(long)]
        phone: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// City (appended to the address)
        #[arg(long, default_value = "")]
        city: String,

        /// Postal code (appended to the address)
        #[arg(long, default_value = "")]
        zip: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the whole catalog
    List,
    /// List featured products
    Featured,
    /// Substring search over name, brand, description, and category
    Search {
        /// Search query
        query: String,
    },
    /// Exact category filter
    Category {
        /// Category name (case-sensitive)
        category: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with its price breakdown
    Show,
    /// Add a product (fetched from the API) to the cart
    Add {
        /// Product ID
        product_id: String,

        /// How many to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Set a line's quantity (0 removes the line)
    Set {
        /// Product ID
        product_id: String,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Apply a promo code (an unrecognized code clears any applied promo)
    Promo {
        /// Promo code
        code: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { force } => commands::seed::run(force).await?,
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&cli.api_url).await?,
            CatalogAction::Featured => commands::catalog::featured(&cli.api_url).await?,
            CatalogAction::Search { query } => {
                commands::catalog::search(&cli.api_url, &query).await?;
            }
            CatalogAction::Category { category } => {
                commands::catalog::by_category(&cli.api_url, &category).await?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&cli.cart_file)?,
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&cli.api_url, &cli.cart_file, &product_id, quantity).await?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(&cli.cart_file, &product_id)?;
            }
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&cli.cart_file, &product_id, quantity)?,
            CartAction::Clear => commands::cart::clear(&cli.cart_file)?,
            CartAction::Promo { code } => commands::cart::promo(&cli.cart_file, &code)?,
        },
        Commands::Checkout {
            name,
            email,
            phone,
            address,
            city,
            zip,
        } => {
            commands::checkout::run(
                &cli.api_url,
                &cli.cart_file,
                commands::checkout::Customer {
                    name,
                    email,
                    phone,
                    address,
                    city,
                    zip,
                },
            )
            .await?;
        }
    }
    Ok(())
}
