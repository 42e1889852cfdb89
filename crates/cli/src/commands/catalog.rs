//! Catalog browsing against a running API.

use flacon_core::Product;

use super::fetch_json;

/// List the whole catalog.
///
/// # Errors
///
/// Returns an error if the API is unreachable or responds with a failure.
pub async fn list(api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let products: Vec<Product> = fetch_json(&format!("{api_url}/api/products")).await?;
    print_products(&products);
    Ok(())
}

/// List featured products.
///
/// # Errors
///
/// Returns an error if the API is unreachable or responds with a failure.
pub async fn featured(api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let products: Vec<Product> = fetch_json(&format!("{api_url}/api/products/featured/all")).await?;
    print_products(&products);
    Ok(())
}

/// Substring search over name, brand, description, and category.
///
/// # Errors
///
/// Returns an error if the API is unreachable or responds with a failure.
pub async fn search(api_url: &str, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = urlencoding::encode(query);
    let products: Vec<Product> =
        fetch_json(&format!("{api_url}/api/products/search/{encoded}")).await?;
    print_products(&products);
    Ok(())
}

/// Exact category filter.
///
/// # Errors
///
/// Returns an error if the API is unreachable or responds with a failure.
pub async fn by_category(api_url: &str, category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = urlencoding::encode(category);
    let products: Vec<Product> =
        fetch_json(&format!("{api_url}/api/products/category/{encoded}")).await?;
    print_products(&products);
    Ok(())
}

/// Render products as a readable listing.
fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("no products found");
        return;
    }

    for product in products {
        let stock = if product.in_stock { "" } else { "  [out of stock]" };
        let star = if product.featured { "*" } else { " " };
        println!(
            "{star} {id}  {name} - {brand}  ({category}, {size})  ${price}{stock}",
            id = product.id,
            name = product.name,
            brand = product.brand,
            category = product.category,
            size = product.size,
            price = product.price,
        );
    }
    println!("{} product(s)", products.len());
}
