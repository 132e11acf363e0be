//! Categorical filter with an "all" sentinel.

use core::str::FromStr;

/// Sentinel value that disables a categorical filter.
pub const ALL: &str = "all";

/// Exact-match filter on one dimension (status, category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    /// No filtering on this dimension.
    All,
    /// Keep only records whose value equals this one.
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl Selector<String> {
    /// String selectors compare against borrowed fields without cloning.
    pub fn admits_str(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> Selector<T> {
    /// Parse a filter value as the presentation layer sends it:
    /// `"all"` (or blank) disables the filter, anything else must parse as `T`.
    pub fn parse(raw: &str) -> Result<Self, T::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL {
            return Ok(Selector::All);
        }
        raw.parse().map(Selector::Only)
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selector::All, Selector::Only)
    }
}
