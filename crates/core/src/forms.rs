//! Form Input
//!
//! Parsing and validation of submitted product fields. Every write to the
//! catalogue is a full-record overwrite, so a form always carries every
//! mutable field. Numeric fields arrive as raw strings and are parsed
//! strictly; the one documented exception is `discount`, which falls back
//! to zero when missing or unparsable rather than erroring.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

use crate::{
    pricing::MINOR_PER_MAJOR,
    products::{NewProduct, ProductUpdate},
};

/// Errors raised while parsing or validating submitted fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was missing or blank.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A counter field did not parse as a non-negative integer.
    #[error("field `{field}` must be a non-negative integer, got `{value}`")]
    InvalidCount {
        /// Field name as submitted.
        field: &'static str,
        /// Rejected raw value.
        value: String,
    },

    /// The price did not parse as a non-negative decimal amount.
    #[error("field `price` must be a non-negative amount, got `{0}`")]
    InvalidPrice(String),

    /// The discount parsed but fell outside `0..=100`.
    #[error("discount must be between 0 and 100, got `{0}`")]
    DiscountOutOfRange(Decimal),
}

/// Raw field values of a submitted product form.
///
/// `price` is in major units ("4999" or "4999.50" rupees); `discount` is a
/// percentage and may be omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub discount: Option<String>,
    pub stock: String,
    pub sales: String,
}

impl ProductForm {
    /// Parse into data for creating a product.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank required strings, malformed
    /// or negative numerics, or an out-of-range discount.
    pub fn parse_new(self) -> Result<NewProduct, ValidationError> {
        let update = self.parse_update()?;

        Ok(NewProduct {
            name: update.name,
            brand: update.brand,
            category: update.category,
            price: update.price,
            discount: update.discount,
            stock: update.stock,
            sales: update.sales,
        })
    }

    /// Parse into data for a full-record update.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank required strings, malformed
    /// or negative numerics, or an out-of-range discount.
    pub fn parse_update(self) -> Result<ProductUpdate, ValidationError> {
        Ok(ProductUpdate {
            name: required_text("name", &self.name)?,
            brand: required_text("brand", &self.brand)?,
            category: required_text("category", &self.category)?,
            price: parse_price(&self.price)?,
            discount: parse_discount(self.discount.as_deref())?,
            stock: parse_count("stock", &self.stock)?,
            sales: parse_count("sales", &self.sales)?,
        })
    }
}

/// A required text field, trimmed; blank input is a missing field.
fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(trimmed.to_string())
}

/// A non-negative integer counter (`sales`, `stock`).
///
/// # Errors
///
/// Rejects anything `u64` does not accept, fractions included.
pub fn parse_count(field: &'static str, value: &str) -> Result<u64, ValidationError> {
    let Ok(count) = value.trim().parse::<u64>() else {
        return Err(ValidationError::InvalidCount {
            field,
            value: value.to_string(),
        });
    };

    Ok(count)
}

/// A non-negative decimal amount in major units, converted to minor units.
///
/// # Errors
///
/// Rejects malformed input, negative amounts, and amounts too large to be
/// represented in minor units.
pub fn parse_price(value: &str) -> Result<u64, ValidationError> {
    let invalid = || ValidationError::InvalidPrice(value.to_string());

    let Ok(amount) = Decimal::from_str(value.trim()) else {
        return Err(invalid());
    };

    if amount.is_sign_negative() {
        return Err(invalid());
    }

    let minor = amount
        .checked_mul(Decimal::from(MINOR_PER_MAJOR))
        .ok_or_else(invalid)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    minor.to_u64().ok_or_else(invalid)
}

/// The discount percentage, with the documented fallback convention.
///
/// A missing or unparsable discount is `0`, not an error. A discount that
/// *does* parse is still rejected outside `0..=100`.
///
/// # Errors
///
/// Returns [`ValidationError::DiscountOutOfRange`] for parsed values
/// outside `0..=100`.
pub fn parse_discount(value: Option<&str>) -> Result<Decimal, ValidationError> {
    let Some(raw) = value else {
        return Ok(Decimal::ZERO);
    };

    let Ok(parsed) = Decimal::from_str(raw.trim()) else {
        return Ok(Decimal::ZERO);
    };

    if parsed.is_sign_negative() || parsed > Decimal::ONE_HUNDRED {
        return Err(ValidationError::DiscountOutOfRange(parsed));
    }

    Ok(parsed)
}

impl NewProduct {
    /// Field-level validation for programmatically built values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank required strings or an
    /// out-of-range discount.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.brand, &self.category, self.discount)
    }
}

impl ProductUpdate {
    /// Field-level validation for programmatically built values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank required strings or an
    /// out-of-range discount.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.brand, &self.category, self.discount)
    }
}

fn validate_fields(
    name: &str,
    brand: &str,
    category: &str,
    discount: Decimal,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }

    if brand.trim().is_empty() {
        return Err(ValidationError::MissingField("brand"));
    }

    if category.trim().is_empty() {
        return Err(ValidationError::MissingField("category"));
    }

    if discount.is_sign_negative() || discount > Decimal::ONE_HUNDRED {
        return Err(ValidationError::DiscountOutOfRange(discount));
    }

    Ok(())
}
