use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign};
use rust_decimal::Decimal as WrappedDecimal;
use serde::{Deserialize, Serialize};

///
/// DecimalParts
///
/// Canonical decomposition of a Decimal.
///
/// Invariant:
/// - value == mantissa * 10^-scale
/// - mantissa carries the sign
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecimalParts {
    pub mantissa: i128,
    pub scale: u32,
}

///
/// Decimal
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Sub,
    SubAssign,
)]
#[serde(transparent)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);

    #[must_use]
    /// Construct a decimal from mantissa and scale.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    #[must_use]
    pub const fn get(self) -> WrappedDecimal {
        self.0
    }

    /// Decompose into mantissa and scale.
    #[must_use]
    pub const fn parts(&self) -> DecimalParts {
        DecimalParts {
            mantissa: self.0.mantissa(),
            scale: self.0.scale(),
        }
    }

    /// Returns true if the decimal has no fractional component.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.0.scale() == 0
    }

    #[must_use]
    /// Round to a given number of decimal places.
    pub fn round_dp(&self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }

    #[must_use]
    /// Return the absolute value of the decimal.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self(WrappedDecimal::from(n))
    }
}

impl From<u64> for Decimal {
    fn from(n: u64) -> Self {
        Self(WrappedDecimal::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_expose_mantissa_and_scale() {
        let d = Decimal::new(12_345, 2);
        assert_eq!(d.to_string(), "123.45");

        let parts = d.parts();
        assert_eq!(parts.mantissa, 12_345);
        assert_eq!(parts.scale, 2);
        assert!(!d.is_integer());
    }

    #[test]
    fn parses_and_rounds() {
        let d: Decimal = "2.675".parse().expect("decimal literal should parse");
        assert_eq!(d.round_dp(2).to_string(), "2.68");
        assert_eq!(Decimal::new(-5, 0).abs(), Decimal::new(5, 0));
    }
}
