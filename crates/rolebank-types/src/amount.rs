//! Minor-unit money type
//!
//! Balances and transfer amounts are unsigned minor units (cents). The
//! unsigned representation makes the no-negative-balance invariant
//! structural; checked arithmetic keeps overflow explicit.

use crate::{Result, RolebankError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Money in minor units (cents)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(pub u64);

impl Amount {
    pub fn zero() -> Self {
        Self(0)
    }

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a major-unit value (e.g. 100.50) into minor units.
    ///
    /// Negative, non-finite, and unrepresentably large inputs are rejected
    /// before they can reach any balance.
    pub fn from_major(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RolebankError::InvalidAmount {
                reason: format!("not a representable amount: {value}"),
            });
        }
        let minor = (value * 100.0).round();
        if minor > u64::MAX as f64 {
            return Err(RolebankError::InvalidAmount {
                reason: format!("amount too large: {value}"),
            });
        }
        Ok(Self(minor as u64))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display as major units with 2 decimal places
        write!(f, "${:.2}", self.0 as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        assert_eq!(Amount::from_major(100.50).unwrap(), Amount::new(10050));
        assert_eq!(Amount::from_major(0.0).unwrap(), Amount::zero());
    }

    #[test]
    fn test_from_major_rejects_bad_input() {
        assert!(Amount::from_major(-1.0).is_err());
        assert!(Amount::from_major(f64::NAN).is_err());
        assert!(Amount::from_major(f64::INFINITY).is_err());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Amount::new(1000);
        let b = Amount::new(400);

        assert_eq!(a.checked_add(b), Some(Amount::new(1400)));
        assert_eq!(a.checked_sub(b), Some(Amount::new(600)));

        // Underflow and overflow surface as None, never wrap
        assert_eq!(b.checked_sub(a), None);
        assert_eq!(Amount::new(u64::MAX).checked_add(Amount::new(1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(10050).to_string(), "$100.50");
        assert_eq!(Amount::zero().to_string(), "$0.00");
    }
}
