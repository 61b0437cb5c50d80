//! Price & Discount Bands
//!
//! Reporting buckets the catalogue into fixed intervals: price bands over
//! the final (discounted) price, and discount bands over the discount
//! percentage. Price bands are inclusive on the lower bound and exclusive
//! on the upper, with an open-ended top band.

use std::fmt;

use rust_decimal::Decimal;

use crate::pricing::MINOR_PER_MAJOR;

const BAND_2000: u64 = 2000 * MINOR_PER_MAJOR;
const BAND_4000: u64 = 4000 * MINOR_PER_MAJOR;
const BAND_6000: u64 = 6000 * MINOR_PER_MAJOR;
const BAND_8000: u64 = 8000 * MINOR_PER_MAJOR;

/// Price interval in rupees, classified over the final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBand {
    /// Below ₹2000.
    UpTo2000,
    /// ₹2000 up to but excluding ₹4000.
    From2000To4000,
    /// ₹4000 up to but excluding ₹6000.
    From4000To6000,
    /// ₹6000 up to but excluding ₹8000.
    From6000To8000,
    /// ₹8000 and above.
    Above8000,
}

impl PriceBand {
    /// Every band, in ascending display order.
    pub const ALL: [Self; 5] = [
        Self::UpTo2000,
        Self::From2000To4000,
        Self::From4000To6000,
        Self::From6000To8000,
        Self::Above8000,
    ];

    /// Classify a final price given in minor units.
    #[must_use]
    pub fn classify(final_price: u64) -> Self {
        if final_price < BAND_2000 {
            Self::UpTo2000
        } else if final_price < BAND_4000 {
            Self::From2000To4000
        } else if final_price < BAND_6000 {
            Self::From4000To6000
        } else if final_price < BAND_8000 {
            Self::From6000To8000
        } else {
            Self::Above8000
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpTo2000 => write!(f, "₹0-2000"),
            Self::From2000To4000 => write!(f, "₹2000-4000"),
            Self::From4000To6000 => write!(f, "₹4000-6000"),
            Self::From6000To8000 => write!(f, "₹6000-8000"),
            Self::Above8000 => write!(f, "₹8000+"),
        }
    }
}

/// Discount interval in percent.
///
/// Zero is its own band; the remaining boundaries are inclusive on the
/// upper edge, so a 10% discount reports as 1-10% and 10.5% as 11-20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountBand {
    /// Exactly 0%.
    Zero,
    /// Above 0% up to 10%.
    UpTo10,
    /// Above 10% up to 20%.
    UpTo20,
    /// Above 20% up to 30%.
    UpTo30,
    /// Above 30%.
    Above30,
}

impl DiscountBand {
    /// Every band, in ascending display order.
    pub const ALL: [Self; 5] = [
        Self::Zero,
        Self::UpTo10,
        Self::UpTo20,
        Self::UpTo30,
        Self::Above30,
    ];

    /// Classify a discount percentage.
    #[must_use]
    pub fn classify(discount: Decimal) -> Self {
        if discount == Decimal::ZERO {
            Self::Zero
        } else if discount <= Decimal::TEN {
            Self::UpTo10
        } else if discount <= Decimal::from(20) {
            Self::UpTo20
        } else if discount <= Decimal::from(30) {
            Self::UpTo30
        } else {
            Self::Above30
        }
    }
}

impl fmt::Display for DiscountBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "0%"),
            Self::UpTo10 => write!(f, "1-10%"),
            Self::UpTo20 => write!(f, "11-20%"),
            Self::UpTo30 => write!(f, "21-30%"),
            Self::Above30 => write!(f, "31%+"),
        }
    }
}
