//! Product record type consumed by the vocabulary builder.
//!
//! The corpus provider hands Sagitta an ordered sequence of these records.
//! Every field is optional in the source data; absent or null fields
//! deserialize to empty strings rather than failing, so a partially filled
//! catalog never breaks index construction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single product from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product title, e.g. "Samsung Galaxy S21".
    #[serde(default, deserialize_with = "null_to_empty")]
    pub title: String,
    /// Brand name, e.g. "Samsung".
    #[serde(default, deserialize_with = "null_to_empty")]
    pub brand: String,
    /// Category path or label, e.g. "Mobiles".
    #[serde(default, deserialize_with = "null_to_empty")]
    pub category: String,
    /// Free-text description.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub description: String,
}

/// Deserialize a possibly null field as an empty string.
fn null_to_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl ProductRecord {
    /// Create a record from owned field values.
    pub fn new(title: String, brand: String, category: String, description: String) -> Self {
        ProductRecord {
            title,
            brand,
            category,
            description,
        }
    }

    /// Load a corpus from a JSON file containing an array of records.
    ///
    /// I/O and parse failures propagate; callers surface them before the
    /// correction core is constructed.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRecord>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)?;
        Ok(records)
    }
}
