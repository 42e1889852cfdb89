//! Product repository for database operations.
//!
//! Queries are written against the `products` table with runtime binding;
//! rows are mapped into the shared [`Product`] domain type.

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use flacon_core::{FragranceNotes, Product, ProductId, ProductPatch};

use super::RepositoryError;

/// Column list shared by every product query.
const PRODUCT_COLUMNS: &str = "id, name, brand, price, original_price, description, category, \
     image, rating, reviews, in_stock, size, notes, featured";

/// Database row for a product.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    brand: String,
    price: Decimal,
    original_price: Option<Decimal>,
    description: String,
    category: String,
    image: String,
    rating: Decimal,
    reviews: i32,
    in_stock: bool,
    size: String,
    notes: Json<FragranceNotes>,
    featured: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            brand: row.brand,
            price: row.price,
            original_price: row.original_price,
            description: row.description,
            category: row.category,
            image: row.image,
            rating: row.rating,
            reviews: row.reviews,
            in_stock: row.in_stock,
            size: row.size,
            notes: row.notes.0,
            featured: row.featured,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products in natural (insertion) order. No pagination - the
    /// catalog is small and returned whole.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> =
            sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Product::from))
    }

    /// Products on the featured shelf.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_featured(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE featured ORDER BY created_at, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Products whose category equals the given string exactly
    /// (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = $1 ORDER BY created_at, id"
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Merge a partial update into a product and return the updated row.
    ///
    /// Absent patch fields leave the stored value unchanged. Returns `None`
    /// if the product does not exist. No field-level validation happens
    /// here - the store's column types and checks are the only gate.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(&format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 brand = COALESCE($3, brand), \
                 price = COALESCE($4, price), \
                 original_price = COALESCE($5, original_price), \
                 description = COALESCE($6, description), \
                 category = COALESCE($7, category), \
                 image = COALESCE($8, image), \
                 rating = COALESCE($9, rating), \
                 reviews = COALESCE($10, reviews), \
                 in_stock = COALESCE($11, in_stock), \
                 size = COALESCE($12, size), \
                 notes = COALESCE($13, notes), \
                 featured = COALESCE($14, featured) \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.brand.as_deref())
        .bind(patch.price)
        .bind(patch.original_price)
        .bind(patch.description.as_deref())
        .bind(patch.category.as_deref())
        .bind(patch.image.as_deref())
        .bind(patch.rating)
        .bind(patch.reviews)
        .bind(patch.in_stock)
        .bind(patch.size.as_deref())
        .bind(patch.notes.as_ref().map(Json))
        .bind(patch.featured)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Insert a fully formed product (seed path).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO products \
                 (id, name, brand, price, original_price, description, category, \
                  image, rating, reviews, in_stock, size, notes, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.brand)
        .bind(product.price)
        .bind(product.original_price)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.image)
        .bind(product.rating)
        .bind(product.reviews)
        .bind(product.in_stock)
        .bind(&product.size)
        .bind(Json(&product.notes))
        .bind(product.featured)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Number of products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
