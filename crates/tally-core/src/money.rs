//! Currency amounts held as whole cents.
//!
//! Receipts carry amounts as decimal strings ("35.35"). Parsing converts
//! them to integer cents so the rule engine never touches floating point.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when an amount string is not a well-formed currency value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed amount: {0:?}")]
pub struct ParseAmountError(pub String);

/// A non-negative currency amount in whole cents.
///
/// Accepted textual form: one or more ASCII digits, optionally followed by
/// a decimal point and one or two fractional digits. Signs, empty parts,
/// and three or more fractional digits are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Construct from a cent count.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// The amount in whole cents.
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// True if the amount has no fractional component (e.g. "35.00").
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True if the amount is a multiple of 0.25.
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseAmountError(s.to_string());

        let (dollars, fraction) = match s.split_once('.') {
            Some((d, f)) => (d, Some(f)),
            None => (s, None),
        };

        if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let mut cents = dollars
            .parse::<u64>()
            .map_err(|_| malformed())?
            .checked_mul(100)
            .ok_or_else(malformed)?;

        if let Some(fraction) = fraction {
            if fraction.is_empty()
                || fraction.len() > 2
                || !fraction.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(malformed());
            }
            let mut part = fraction.parse::<u64>().map_err(|_| malformed())?;
            if fraction.len() == 1 {
                part *= 10;
            }
            cents = cents.checked_add(part).ok_or_else(malformed)?;
        }

        Ok(Self(cents))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
