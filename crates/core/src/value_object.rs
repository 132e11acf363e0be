//! Value objects: equality by value, not identity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Two `Money` amounts of 1500 cents are the same money; two
/// events with the same title are still different events (see `Entity`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Currency amount in the smallest unit (cents).
///
/// Unsigned, so budgets and unit costs cannot go negative. Arithmetic
/// saturates instead of wrapping.
///
/// Serialized as a decimal number of whole units (`25.99`); deserialization
/// rounds to the nearest cent and rejects negative or non-finite amounts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units (e.g. dollars).
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// `self × quantity`, e.g. unit cost times stock on hand.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        if !units.is_finite() || units < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "invalid amount {units}: expected a non-negative number"
            )));
        }
        // `as` saturates above u64::MAX cents.
        Ok(Money((units * 100.0).round() as u64))
    }
}

impl core::fmt::Display for Money {
    /// Renders as `units.cc`, e.g. `1234.50`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
