//! Pricing
//!
//! Prices are carried as minor units (paise) and only converted to
//! [`Money`] at display boundaries. The final price is always derived from
//! the base price and discount percentage, never stored.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::ToPrimitive,
};
use rusty_money::{Money, iso};
use thiserror::Error;

/// Currency every price in the store is denominated in.
pub const CURRENCY: &iso::Currency = iso::INR;

/// Number of minor units in one major unit of [`CURRENCY`].
pub const MINOR_PER_MAJOR: u64 = 100;

/// Errors that can occur during price arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// Percentage calculation could not be safely represented.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// An amount grew beyond the representable range.
    #[error("amount overflowed the representable range")]
    AmountOverflow,
}

/// Price in minor units after applying a percentage discount.
///
/// Computes `price − price × discount / 100`, rounding the discount amount
/// to whole minor units away from zero on midpoints. For any discount in
/// `0..=100` the result is between zero and `price` inclusive.
///
/// # Errors
///
/// Returns [`PriceError::PercentConversion`] if the intermediate decimal
/// arithmetic overflows or the result cannot be represented in minor units.
pub fn final_price(price: u64, discount: Decimal) -> Result<u64, PriceError> {
    let price_minor = Decimal::from(price);

    let Some(scaled) = price_minor.checked_mul(discount) else {
        return Err(PriceError::PercentConversion);
    };

    let Some(amount) = scaled.checked_div(Decimal::ONE_HUNDRED) else {
        return Err(PriceError::PercentConversion);
    };

    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let Some(amount) = rounded.to_u64() else {
        return Err(PriceError::PercentConversion);
    };

    price
        .checked_sub(amount)
        .ok_or(PriceError::PercentConversion)
}

/// Revenue in minor units for `units` sold at the discounted price.
///
/// # Errors
///
/// Returns [`PriceError::PercentConversion`] if the discount cannot be
/// applied, or [`PriceError::AmountOverflow`] if the product of price and
/// units exceeds `u64::MAX`.
pub fn revenue(price: u64, discount: Decimal, units: u64) -> Result<u64, PriceError> {
    final_price(price, discount)?
        .checked_mul(units)
        .ok_or(PriceError::AmountOverflow)
}

/// Convert minor units to [`Money`] for display.
///
/// # Errors
///
/// Returns [`PriceError::AmountOverflow`] if the amount exceeds the signed
/// range `Money` works in.
pub fn to_money(minor: u64) -> Result<Money<'static, iso::Currency>, PriceError> {
    let Ok(minor) = i64::try_from(minor) else {
        return Err(PriceError::AmountOverflow);
    };

    Ok(Money::from_minor(minor, CURRENCY))
}
