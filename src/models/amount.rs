//! Amount type for record quantities
//!
//! An amount has no unit of its own: the owning calculator decides whether it
//! is money in the base currency or calories. Provides arithmetic, summation
//! and parsing so the calculators never touch bare floats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Neg, Sub};
use std::str::FromStr;

use crate::error::TrackerError;

/// A unit-less numeric quantity
///
/// `Display` prints the exact value the way the number itself would print, so
/// integral values carry no fractional part (`300`, not `300.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use daily_limit::models::Amount;
    /// let amount = Amount::new(250.5);
    /// assert_eq!(amount.value(), 250.5);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from a string
    ///
    /// Accepts integers and decimals with an optional sign: "300", "-12.5".
    pub fn parse(s: &str) -> Result<Self, TrackerError> {
        let s = s.trim();
        let value: f64 = s
            .parse()
            .map_err(|_| TrackerError::Validation(format!("Invalid amount: '{}'", s)))?;

        if !value.is_finite() {
            return Err(TrackerError::Validation(format!(
                "Amount must be a finite number: '{}'",
                s
            )));
        }

        Ok(Self(value))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl FromStr for Amount {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Conversion by a rate (base units per foreign unit)
impl Div<f64> for Amount {
    type Output = Self;

    fn div(self, rate: f64) -> Self {
        Self(self.0 / rate)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
