//! Fixed-point monetary amounts.
//!
//! Amounts are represented as scaled 64-bit integers to avoid floating-point errors.
//! One whole unit is `FIXED_SCALE` raw units; every amount in the system shares the
//! same precision of `MAX_PRECISION` decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AmountError;
use crate::params::{FIXED_SCALE, MAX_PRECISION};

/// A fixed-point amount, stored as raw units (`value * 10^8`).
///
/// Amounts produced by [`Fixed64::parse`] are never negative. Arithmetic helpers are
/// checked and keep that property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed64(i64);

impl Fixed64 {
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(i64::MAX);

    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Build an amount from a whole number of units.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(FIXED_SCALE).map(Self)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, returning `None` if the result would be negative.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0
            .checked_sub(other.0)
            .filter(|raw| *raw >= 0)
            .map(Self)
    }

    /// Sum an iterator of amounts, failing on overflow.
    pub fn checked_sum<I>(iter: I) -> Result<Self, AmountError>
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .try_fold(Self::ZERO, |acc, v| acc.checked_add(v))
            .ok_or(AmountError::Overflow)
    }

    /// Parse a human-entered decimal string such as `"12.5"` or `"0.00000001"`.
    ///
    /// Surrounding whitespace and a leading `+` are accepted. More than
    /// `MAX_PRECISION` fractional digits, a negative sign, or a magnitude that does
    /// not fit in 64 bits are [`AmountError::OutOfRange`]; anything that is not a
    /// decimal number is [`AmountError::Malformed`].
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let malformed = || AmountError::Malformed {
            input: input.to_string(),
        };
        let out_of_range = || AmountError::OutOfRange {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => {
                if f.is_empty() {
                    return Err(malformed());
                }
                (i, f)
            }
            None => (body, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(malformed());
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(malformed());
        }

        if negative || frac_part.len() > MAX_PRECISION as usize {
            return Err(out_of_range());
        }

        let mut whole: i64 = 0;
        for b in int_part.bytes() {
            whole = whole
                .checked_mul(10)
                .and_then(|w| w.checked_add(i64::from(b - b'0')))
                .ok_or_else(out_of_range)?;
        }

        let mut frac: i64 = 0;
        for b in frac_part.bytes() {
            frac = frac * 10 + i64::from(b - b'0');
        }
        for _ in frac_part.len()..MAX_PRECISION as usize {
            frac *= 10;
        }

        whole
            .checked_mul(FIXED_SCALE)
            .and_then(|w| w.checked_add(frac))
            .map(Self)
            .ok_or_else(out_of_range)
    }

    /// Canonical decimal rendering: no trailing fractional zeros, no trailing dot.
    pub fn format(&self) -> String {
        let magnitude = self.0.unsigned_abs();
        let scale = FIXED_SCALE as u64;
        let whole = magnitude / scale;
        let frac = magnitude % scale;
        let sign = if self.0 < 0 { "-" } else { "" };

        if frac == 0 {
            return format!("{sign}{whole}");
        }
        let digits = format!("{:0width$}", frac, width = MAX_PRECISION as usize);
        format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Fixed64 {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_and_fractional() {
        assert_eq!(Fixed64::parse("12").unwrap().raw(), 1_200_000_000);
        assert_eq!(Fixed64::parse("12.5").unwrap().raw(), 1_250_000_000);
        assert_eq!(Fixed64::parse("0.00000001").unwrap().raw(), 1);
        assert_eq!(Fixed64::parse(".5").unwrap().raw(), 50_000_000);
        assert_eq!(Fixed64::parse(" +3 ").unwrap().raw(), 300_000_000);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "abc", "1.2.3", "1e5", "5.", ".", "--1", "1 000", "+"] {
            assert!(
                matches!(Fixed64::parse(bad), Err(AmountError::Malformed { .. })),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_rejects_unrepresentable() {
        for bad in ["-1", "0.000000001", "92233720368.54775808", "99999999999999999999"] {
            assert!(
                matches!(Fixed64::parse(bad), Err(AmountError::OutOfRange { .. })),
                "{bad:?} should be out of range"
            );
        }
    }

    #[test]
    fn parse_accepts_largest_value() {
        let max = Fixed64::parse("92233720368.54775807").unwrap();
        assert_eq!(max, Fixed64::MAX);
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(Fixed64::new(1_250_000_000).format(), "12.5");
        assert_eq!(Fixed64::new(300_000_000).format(), "3");
        assert_eq!(Fixed64::new(1).format(), "0.00000001");
        assert_eq!(Fixed64::ZERO.format(), "0");
    }

    #[test]
    fn format_normalizes_parsed_input() {
        let v = Fixed64::parse("007.1000").unwrap();
        assert_eq!(v.to_string(), "7.1");
    }

    #[test]
    fn checked_sub_refuses_negative() {
        let a = Fixed64::new(5);
        let b = Fixed64::new(7);
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(Fixed64::new(2)));
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(Fixed64::MAX.checked_add(Fixed64::new(1)), None);
        assert_eq!(Fixed64::new(2).checked_add(Fixed64::new(3)), Some(Fixed64::new(5)));
    }

    #[test]
    fn checked_sum_detects_overflow() {
        let values = [Fixed64::MAX, Fixed64::new(1)];
        assert_eq!(Fixed64::checked_sum(values), Err(AmountError::Overflow));
        let values = [Fixed64::new(2), Fixed64::new(3)];
        assert_eq!(Fixed64::checked_sum(values), Ok(Fixed64::new(5)));
    }
}
