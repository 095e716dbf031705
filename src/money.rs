//! [`Money`] amounts used by the pricing engine.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Amount of money in whole US dollars.
///
/// Every price in the estimator is an integer number of dollars, so the amount is
/// stored as an integer and only rendered with cents.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(0);

    /// Creates an amount of whole dollars.
    pub const fn dollars(amount: u32) -> Self {
        Self(amount)
    }

    /// Whole-dollar amount.
    pub const fn amount(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Short form without cents, as used in `(+$300)` receipt suffixes.
    pub fn short(self) -> String {
        format!("${}", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.00", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn test_display_has_cents() {
        assert_eq!(Money::dollars(1800).to_string(), "$1800.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_short_form() {
        assert_eq!(Money::dollars(300).short(), "$300");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Money::dollars(15) * 10, Money::dollars(150));
        let total: Money = [Money::dollars(450), Money::dollars(1050), Money::dollars(300)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::dollars(1800));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Money::dollars(60)).unwrap(), "60");
    }
}
