//! Sample product feeds.
//!
//! Feeds are written in publication order (oldest first), the same way the
//! real `produtos.json` grows; the binary shows them reversed.

use anyhow::Result;
use serde_json::{Value, json};
use std::path::Path;
use vitrine_types::Product;

/// Five products over three categories and three stores.
///
/// Covers a numeric code, a string code, a blank code, a zero old price and
/// a real discount.
pub fn sample_feed() -> Value {
    json!([
        {
            "title": "Cabo USB-C Turbo",
            "price": 19.9,
            "category": "Eletrônicos",
            "store": "Shopee",
            "code": "",
            "link": "https://shopee.example/cabo",
            "image": "https://img.example/cabo.jpg"
        },
        {
            "title": "Air Fryer 4L",
            "price": 299.0,
            "oldPrice": 449.0,
            "category": "Casa",
            "store": "Mercado Livre",
            "code": 771,
            "link": "https://ml.example/air-fryer",
            "image": "https://img.example/air-fryer.jpg"
        },
        {
            "title": "Fone Bluetooth",
            "price": 89.9,
            "oldPrice": 0,
            "category": "Eletrônicos",
            "store": "Amazon",
            "code": "FB-01",
            "link": "https://amazon.example/fone",
            "image": "https://img.example/fone.jpg"
        },
        {
            "title": "Jogo de Panelas",
            "price": 159.0,
            "oldPrice": 199.0,
            "category": "Casa",
            "store": "Shopee",
            "link": "https://shopee.example/panelas",
            "image": "https://img.example/panelas.jpg"
        },
        {
            "title": "Tênis de Corrida",
            "price": 249.9,
            "category": "Moda",
            "store": "ML Oficial",
            "code": "TN-42",
            "link": "https://ml.example/tenis",
            "image": "https://img.example/tenis.jpg"
        }
    ])
}

/// Decoded form of [`sample_feed`], in feed order.
pub fn sample_products() -> Vec<Product> {
    serde_json::from_value(sample_feed()).unwrap_or_default()
}

pub fn write_feed(path: &Path, feed: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(feed)?)?;
    Ok(())
}
