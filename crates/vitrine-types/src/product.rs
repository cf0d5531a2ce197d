use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single catalog entry as published in the static product feed.
///
/// Records are read-only once loaded. Field names follow the feed's
/// camelCase convention on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub category: String,
    pub store: String,
    #[serde(
        default,
        deserialize_with = "deserialize_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<ProductCode>,
    pub link: String,
    pub image: String,
}

impl Product {
    /// Old price worth showing next to the current one.
    ///
    /// A zero old price is treated the same as a missing one.
    pub fn visible_old_price(&self) -> Option<f64> {
        self.old_price.filter(|old| *old != 0.0)
    }
}

/// Marketplace reference code. The feed mixes strings and bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductCode {
    Text(String),
    Number(serde_json::Number),
}

impl ProductCode {
    /// Empty strings and zero carry no usable reference.
    pub fn is_blank(&self) -> bool {
        match self {
            ProductCode::Text(text) => text.is_empty(),
            ProductCode::Number(number) => number.as_f64() == Some(0.0),
        }
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCode::Text(text) => f.write_str(text),
            // Integral floats (`1e3`, `1000.0`) print as plain digits.
            ProductCode::Number(number) => match number.as_f64() {
                Some(value) if number.is_f64() => write!(f, "{}", value),
                _ => write!(f, "{}", number),
            },
        }
    }
}

impl From<&str> for ProductCode {
    fn from(value: &str) -> Self {
        ProductCode::Text(value.to_string())
    }
}

impl From<u64> for ProductCode {
    fn from(value: u64) -> Self {
        ProductCode::Number(value.into())
    }
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<ProductCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<ProductCode>::deserialize(deserializer)?;
    Ok(code.filter(|c| !c.is_blank()))
}
