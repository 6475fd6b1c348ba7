use std::{
    fmt,
    ops::{Add, Sub},
    str::FromStr,
};

use crate::LedgerError;

/// Money amount represented as **integer cents**.
///
/// Use this type for every monetary value held by the client (record
/// amounts, the running total) so that accumulation stays exact. The wire
/// speaks major units as plain numbers; convert at the boundary with
/// [`Amount::from_major`] and [`Amount::to_major`].
///
/// # Examples
///
/// ```rust
/// use ledger::Amount;
///
/// let amount = Amount::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing form input (a plain positive decimal, `.` or `,` as the
/// separator, at most two decimals):
///
/// ```rust
/// use ledger::Amount;
///
/// assert_eq!("10".parse::<Amount>().unwrap().cents(), 1000);
/// assert_eq!("3,50".parse::<Amount>().unwrap().cents(), 350);
/// assert!("12.345".parse::<Amount>().is_err());
/// assert!("-5".parse::<Amount>().is_err());
/// assert!("abc".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Converts a major-unit number (as found on the wire) into cents,
    /// rounding to the nearest cent.
    #[must_use]
    pub fn from_major(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Converts back to a major-unit number for the wire.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Amount {
    /// Two-decimal rendering, e.g. `119.75`; the display layer owns any
    /// currency symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    /// Parses form input into cents.
    ///
    /// An expense amount is a plain positive decimal: digits, optionally
    /// followed by `.` or `,` and at most two fraction digits. Signs,
    /// empty input, and anything non-numeric are refused; whether zero is
    /// acceptable is the validation layer's call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| LedgerError::InvalidAmount(reason.to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty amount"));
        }

        let (units, fraction) = match trimmed.split_once(['.', ',']) {
            Some((units, fraction)) => (units, fraction),
            None => (trimmed, ""),
        };

        if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a number"));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a number"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimals"));
        }

        let units: i64 = units.parse().map_err(|_| invalid("amount too large"))?;
        // One fraction digit means tenths: "3.5" is 3.50, not 3.05.
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("not a number"))? * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid("not a number"))?,
        };

        units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(Amount)
            .ok_or_else(|| invalid("amount too large"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Amount::new(0).to_string(), "0.00");
        assert_eq!(Amount::new(1).to_string(), "0.01");
        assert_eq!(Amount::new(350).to_string(), "3.50");
        assert_eq!(Amount::new(11_975).to_string(), "119.75");
        assert_eq!(Amount::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("3.50".parse::<Amount>().unwrap().cents(), 350);
        assert_eq!("3,5".parse::<Amount>().unwrap().cents(), 350);
        assert_eq!("100".parse::<Amount>().unwrap().cents(), 10_000);
        assert_eq!("  20.00 ".parse::<Amount>().unwrap().cents(), 2000);
        assert_eq!("7.".parse::<Amount>().unwrap().cents(), 700);
    }

    #[test]
    fn parse_rejects_signs() {
        assert!("-5".parse::<Amount>().is_err());
        assert!("+3.50".parse::<Amount>().is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("abc".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
        assert!("   ".parse::<Amount>().is_err());
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!("12.345".parse::<Amount>().is_err());
        assert!(".50".parse::<Amount>().is_err());
        assert!("3.5x".parse::<Amount>().is_err());
    }

    #[test]
    fn parse_refuses_overflowing_values() {
        assert!("92233720368547758070".parse::<Amount>().is_err());
    }

    #[test]
    fn major_conversion_round_trips() {
        assert_eq!(Amount::from_major(3.5).cents(), 350);
        assert_eq!(Amount::from_major(100.0).cents(), 10_000);
        assert_eq!(Amount::from_major(7.25).to_major(), 7.25);
    }
}
