//! Assertions over the JSON envelope printed with `--format json`.

use anyhow::{Context, Result};
use serde_json::Value;

fn products(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["products"]
        .as_array()
        .context("Expected 'content.products' array in JSON")
}

/// Assert that a `list` result holds exactly `expected` products.
pub fn assert_product_count(json: &Value, expected: usize) -> Result<()> {
    let products = products(json)?;
    if products.len() != expected {
        anyhow::bail!("Expected {} products, got {}", expected, products.len());
    }
    Ok(())
}

/// Titles of a `list` result, in output order.
pub fn product_titles(json: &Value) -> Result<Vec<String>> {
    products(json)?
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p["title"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Product {} missing title", i))
        })
        .collect()
}

/// Assert that every product in a `list` result is in `category`.
pub fn assert_all_in_category(json: &Value, category: &str) -> Result<()> {
    for (i, product) in products(json)?.iter().enumerate() {
        let actual = product["category"]
            .as_str()
            .with_context(|| format!("Product {} missing category", i))?;
        if actual != category {
            anyhow::bail!(
                "Product {} is in category {} but expected {}",
                i,
                actual,
                category
            );
        }
    }
    Ok(())
}

/// Categories of a `categories` result, in output order.
pub fn category_names(json: &Value) -> Result<Vec<String>> {
    let categories = json["content"]["categories"]
        .as_array()
        .context("Expected 'content.categories' array in JSON")?;
    Ok(categories
        .iter()
        .filter_map(|c| c.as_str().map(String::from))
        .collect())
}
