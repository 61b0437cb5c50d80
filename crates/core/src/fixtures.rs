//! Fixtures
//!
//! YAML-backed catalogues used to seed a store and to drive tests. Entries
//! carry prices in major units as strings, the same shape a submitted form
//! would, so fixture loading exercises the same parsing conventions.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    forms::{self, ValidationError},
    products::NewProduct,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A fixture entry failed field validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// One catalogue entry as written in fixture files.
#[derive(Debug, Clone, Deserialize)]
struct FixtureProduct {
    name: String,
    brand: String,
    category: String,
    /// Price in major units, e.g. `"4999"` or `"4999.50"`.
    price: String,
    #[serde(default)]
    discount: Option<String>,
    #[serde(default)]
    stock: u64,
    #[serde(default)]
    sales: u64,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    products: Vec<FixtureProduct>,
}

/// Load a catalogue fixture from a YAML file.
///
/// # Errors
///
/// Returns a [`FixtureError`] when the file cannot be read, is not valid
/// YAML, or an entry fails field validation.
pub fn load_catalog(path: &Path) -> Result<Vec<NewProduct>, FixtureError> {
    parse_catalog(&fs::read_to_string(path)?)
}

/// The bundled demonstration catalogue.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded fixture fails to parse,
/// which indicates a packaging defect rather than user error.
pub fn demo_catalog() -> Result<Vec<NewProduct>, FixtureError> {
    parse_catalog(include_str!("../fixtures/demo.yaml"))
}

fn parse_catalog(yaml: &str) -> Result<Vec<NewProduct>, FixtureError> {
    let catalog: Catalog = serde_norway::from_str(yaml)?;

    catalog
        .products
        .into_iter()
        .map(|entry| {
            let new = NewProduct {
                name: entry.name,
                brand: entry.brand,
                category: entry.category,
                price: forms::parse_price(&entry.price)?,
                discount: forms::parse_discount(entry.discount.as_deref())?,
                stock: entry.stock,
                sales: entry.sales,
            };

            new.validate()?;

            Ok(new)
        })
        .collect()
}
