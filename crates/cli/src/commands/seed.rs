//! Seed the database with the perfume catalog.
//!
//! Idempotent by default: an already-populated catalog is left alone unless
//! `--force` is given, in which case it is replaced wholesale.

use rust_decimal::Decimal;
use tracing::info;

use flacon_api::config::database_url_from_env;
use flacon_api::db::{self, ProductRepository};
use flacon_core::{FragranceNotes, Product, ProductId};

/// A catalog entry in seed form. Prices and ratings are fixed-point
/// integers (cents / tenths) so the table stays literal.
struct SeedProduct {
    name: &'static str,
    brand: &'static str,
    price_cents: i64,
    original_price_cents: Option<i64>,
    description: &'static str,
    category: &'static str,
    image: &'static str,
    rating_tenths: i64,
    reviews: i32,
    in_stock: bool,
    size: &'static str,
    top: &'static [&'static str],
    heart: &'static [&'static str],
    base: &'static [&'static str],
    featured: bool,
}

impl SeedProduct {
    fn to_product(&self) -> Product {
        Product {
            id: ProductId::generate(),
            name: self.name.to_owned(),
            brand: self.brand.to_owned(),
            price: Decimal::new(self.price_cents, 2),
            original_price: self.original_price_cents.map(|cents| Decimal::new(cents, 2)),
            description: self.description.to_owned(),
            category: self.category.to_owned(),
            image: self.image.to_owned(),
            rating: Decimal::new(self.rating_tenths, 1),
            reviews: self.reviews,
            in_stock: self.in_stock,
            size: self.size.to_owned(),
            notes: FragranceNotes {
                top: self.top.iter().map(|s| (*s).to_owned()).collect(),
                heart: self.heart.iter().map(|s| (*s).to_owned()).collect(),
                base: self.base.iter().map(|s| (*s).to_owned()).collect(),
            },
            featured: self.featured,
        }
    }
}

const CATALOG: &[SeedProduct] = &[
    SeedProduct {
        name: "Nuit de Velours",
        brand: "Maison Ambre",
        price_cents: 12900,
        original_price_cents: Some(14900),
        description: "Dark rose over smoked oud, softened by vanilla absolute.",
        category: "oriental",
        image: "nuit-de-velours.jpg",
        rating_tenths: 47,
        reviews: 214,
        in_stock: true,
        size: "100ml",
        top: &["saffron", "pink pepper"],
        heart: &["damask rose", "oud"],
        base: &["vanilla absolute", "amber"],
        featured: true,
    },
    SeedProduct {
        name: "Rose Absolue",
        brand: "Maison Ambre",
        price_cents: 7500,
        original_price_cents: None,
        description: "A straightforward celebration of Grasse rose in full bloom.",
        category: "floral",
        image: "rose-absolue.jpg",
        rating_tenths: 45,
        reviews: 98,
        in_stock: true,
        size: "100ml",
        top: &["bergamot"],
        heart: &["grasse rose", "peony"],
        base: &["white musk"],
        featured: true,
    },
    SeedProduct {
        name: "Bois Fume",
        brand: "Atelier Nord",
        price_cents: 9800,
        original_price_cents: None,
        description: "Cedar and birch tar around a quiet leather accord.",
        category: "woody",
        image: "bois-fume.jpg",
        rating_tenths: 44,
        reviews: 61,
        in_stock: true,
        size: "100ml",
        top: &["cardamom"],
        heart: &["cedar", "birch tar"],
        base: &["leather", "vetiver"],
        featured: false,
    },
    SeedProduct {
        name: "Eau Vive",
        brand: "Atelier Nord",
        price_cents: 5600,
        original_price_cents: Some(6400),
        description: "Cold citrus and crushed mint, made for summer mornings.",
        category: "fresh",
        image: "eau-vive.jpg",
        rating_tenths: 42,
        reviews: 143,
        in_stock: true,
        size: "50ml",
        top: &["lemon", "mint"],
        heart: &["green tea"],
        base: &["cedar"],
        featured: false,
    },
    SeedProduct {
        name: "Santal Creme",
        brand: "Comptoir Sud",
        price_cents: 11200,
        original_price_cents: None,
        description: "Creamy sandalwood with fig milk and a whisper of iris.",
        category: "woody",
        image: "santal-creme.jpg",
        rating_tenths: 48,
        reviews: 327,
        in_stock: true,
        size: "100ml",
        top: &["fig"],
        heart: &["iris", "sandalwood"],
        base: &["tonka bean"],
        featured: true,
    },
    SeedProduct {
        name: "Agrume Royal",
        brand: "Comptoir Sud",
        price_cents: 6900,
        original_price_cents: None,
        description: "Bitter orange and neroli with a honeyed drydown.",
        category: "citrus",
        image: "agrume-royal.jpg",
        rating_tenths: 43,
        reviews: 52,
        in_stock: false,
        size: "100ml",
        top: &["bitter orange", "neroli"],
        heart: &["orange blossom"],
        base: &["honey", "musk"],
        featured: false,
    },
    SeedProduct {
        name: "Jardin Blanc",
        brand: "Maison Ambre",
        price_cents: 8400,
        original_price_cents: None,
        description: "Gardenia and jasmine over damp greenery.",
        category: "floral",
        image: "jardin-blanc.jpg",
        rating_tenths: 46,
        reviews: 77,
        in_stock: true,
        size: "100ml",
        top: &["green leaves"],
        heart: &["gardenia", "jasmine"],
        base: &["moss"],
        featured: false,
    },
    SeedProduct {
        name: "Cuir Obscur",
        brand: "Atelier Nord",
        price_cents: 160_000,
        original_price_cents: None,
        description: "A parfum extrait of black leather, incense, and rum. Numbered bottles.",
        category: "oriental",
        image: "cuir-obscur.jpg",
        rating_tenths: 49,
        reviews: 18,
        in_stock: true,
        size: "75ml",
        top: &["rum", "incense"],
        heart: &["black leather"],
        base: &["labdanum", "patchouli"],
        featured: true,
    },
];

/// Load the seed catalog.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = database_url_from_env();

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let repository = ProductRepository::new(&pool);
    let existing = repository.count().await?;
    if existing > 0 {
        if force {
            info!(existing, "Clearing existing catalog (--force)");
            sqlx::query("DELETE FROM products").execute(&pool).await?;
        } else {
            info!(existing, "Catalog already seeded; use --force to replace it");
            return Ok(());
        }
    }

    for entry in CATALOG {
        repository.insert(&entry.to_product()).await?;
    }

    info!(count = CATALOG.len(), "Catalog seeded");
    Ok(())
}
