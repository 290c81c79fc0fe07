//! Money as an integer count of the smallest currency unit.
//!
//! The catalog wire format carries prices as decimal major units
//! (e.g. `109.95`); internally all arithmetic happens on integer minor
//! units so totals are exact.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// A non-negative amount of money, in minor units (e.g. cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor_units(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn as_minor_units(&self) -> u64 {
        self.0
    }

    /// Convert from decimal major units (the catalog wire format).
    ///
    /// Rejects negative and non-finite values; rounds to the nearest
    /// minor unit.
    pub fn from_major_units(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!("price is not finite: {value}")));
        }
        if value < 0.0 {
            return Err(DomainError::validation(format!("price must be >= 0, got {value}")));
        }
        let minor = (value * 100.0).round();
        if minor > u64::MAX as f64 {
            return Err(DomainError::validation(format!("price out of range: {value}")));
        }
        Ok(Self(minor as u64))
    }

    pub fn as_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Line total: unit price times quantity. Saturates instead of
    /// overflowing; cart operations are total functions.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_major_units(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_major_units_to_minor() {
        assert_eq!(Money::from_major_units(109.95).unwrap().as_minor_units(), 10995);
        assert_eq!(Money::from_major_units(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn rejects_negative_and_non_finite_prices() {
        assert!(Money::from_major_units(-0.01).is_err());
        assert!(Money::from_major_units(f64::NAN).is_err());
        assert!(Money::from_major_units(f64::INFINITY).is_err());
    }

    #[test]
    fn line_totals_are_exact() {
        let price = Money::from_major_units(9.99).unwrap();
        assert_eq!(price.times(3).as_minor_units(), 2997);
    }

    #[test]
    fn sums_over_iterators() {
        let total: Money = [199, 250, 1]
            .into_iter()
            .map(Money::from_minor_units)
            .sum();
        assert_eq!(total, Money::from_minor_units(450));
    }

    #[test]
    fn displays_as_major_units() {
        assert_eq!(Money::from_minor_units(10995).to_string(), "109.95");
        assert_eq!(Money::from_minor_units(5).to_string(), "0.05");
    }

    #[test]
    fn deserializes_from_wire_decimal() {
        let money: Money = serde_json::from_str("109.95").unwrap();
        assert_eq!(money.as_minor_units(), 10995);

        let err = serde_json::from_str::<Money>("-3.5");
        assert!(err.is_err());
    }
}
