//! Taka amounts.
//!
//! Catalog prices are whole Taka with no minor unit, so amounts are plain
//! integers and every calculation stays exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency sign used in every price label.
pub const TAKA_SIGN: &str = "\u{09f3}";

/// A whole-Taka amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Taka(pub i64);

impl Taka {
    /// Create a new amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Format as a display string (e.g. "৳50").
    pub fn display(&self) -> String {
        format!("{}{}", TAKA_SIGN, self.0)
    }

    /// Whole-percent discount of `self` relative to a higher `original` price.
    ///
    /// Returns `None` unless `original` is strictly greater than `self`.
    ///
    /// ```
    /// use sodai_commerce::money::Taka;
    /// assert_eq!(Taka::new(100).discount_percent_from(Taka::new(150)), Some(33));
    /// assert_eq!(Taka::new(150).discount_percent_from(Taka::new(150)), None);
    /// ```
    pub fn discount_percent_from(&self, original: Taka) -> Option<u32> {
        if original.0 <= self.0 || original.0 <= 0 {
            return None;
        }
        let ratio = (original.0 - self.0) as f64 / original.0 as f64;
        Some((ratio * 100.0).round() as u32)
    }
}

impl Add for Taka {
    type Output = Taka;

    fn add(self, other: Taka) -> Taka {
        Taka(self.0 + other.0)
    }
}

impl Mul<u32> for Taka {
    type Output = Taka;

    fn mul(self, quantity: u32) -> Taka {
        Taka(self.0 * i64::from(quantity))
    }
}

impl Sum for Taka {
    fn sum<I: Iterator<Item = Taka>>(iter: I) -> Taka {
        iter.fold(Taka::zero(), |acc, t| acc + t)
    }
}

impl fmt::Display for Taka {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
