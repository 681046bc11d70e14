//! Digit reduction with master-number preservation.
//!
//! Every higher-level calculator funnels its sums through [`reduce`], which
//! repeatedly replaces a number with the sum of its decimal digits until it
//! lands in the canonical set {1..=9, 11, 22, 33}.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{NumerologyError, Result};

/// Master numbers, exempt from further reduction.
pub const MASTER_NUMBERS: [u8; 3] = [11, 22, 33];

/// All values a [`ReducedNumber`] can take, in ascending order.
pub const ALL_REDUCED_VALUES: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

/// An integer in {1..=9, 11, 22, 33}.
///
/// The only way to obtain one is through [`reduce`] or the checked
/// constructors, so the invariant holds for every value in circulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ReducedNumber(u8);

impl ReducedNumber {
    /// Checked constructor. Returns `None` for values outside the canonical set.
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1..=9 | 11 | 22 | 33 => Some(Self(value)),
            _ => None,
        }
    }

    /// The raw value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this is 11, 22 or 33.
    pub const fn is_master(self) -> bool {
        matches!(self.0, 11 | 22 | 33)
    }

    /// Single-digit root (11 -> 2, 22 -> 4, 33 -> 6; 1..=9 unchanged).
    pub const fn root(self) -> u8 {
        match self.0 {
            11 => 2,
            22 => 4,
            33 => 6,
            v => v,
        }
    }

    /// Same number with any master collapsed to its root.
    pub const fn to_root(self) -> Self {
        Self(self.root())
    }
}

impl Display for ReducedNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ReducedNumber {
    type Error = NumerologyError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or(NumerologyError::InvalidInput(
            "reduced number must be 1-9, 11, 22 or 33",
        ))
    }
}

impl From<ReducedNumber> for u8 {
    fn from(n: ReducedNumber) -> u8 {
        n.0
    }
}

impl From<ReducedNumber> for u32 {
    fn from(n: ReducedNumber) -> u32 {
        u32::from(n.0)
    }
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Plain digital root without master preservation (0 stays 0).
pub const fn digit_root(mut n: u64) -> u8 {
    while n > 9 {
        n = digit_sum(n);
    }
    n as u8
}

/// Reduce a positive integer to a [`ReducedNumber`].
///
/// While `n > 9` and `n` is not a master number, `n` is replaced with the
/// sum of its digits. The master check runs before each step, so an
/// intermediate 11/22/33 halts reduction (`reduce(29) == 11`).
///
/// Zero and negative input is [`NumerologyError::InvalidInput`].
pub fn reduce(n: i64) -> Result<ReducedNumber> {
    if n <= 0 {
        return Err(NumerologyError::InvalidInput(
            "reduction requires a positive integer",
        ));
    }
    let mut n = n.unsigned_abs();
    while n > 9 && !is_master_value(n) {
        n = digit_sum(n);
    }
    // n is now 1..=9 or a master number.
    Ok(ReducedNumber(n as u8))
}

/// Reduce an unsigned running total, as produced by the calculators.
pub(crate) fn reduce_sum(total: u32) -> Result<ReducedNumber> {
    reduce(i64::from(total))
}

const fn is_master_value(n: u64) -> bool {
    matches!(n, 11 | 22 | 33)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> u8 {
        reduce(n).unwrap().value()
    }

    #[test]
    fn single_digits_unchanged() {
        for n in 1..=9 {
            assert_eq!(r(n), n as u8);
        }
    }

    #[test]
    fn masters_preserved() {
        assert_eq!(r(11), 11);
        assert_eq!(r(22), 22);
        assert_eq!(r(33), 33);
    }

    #[test]
    fn intermediate_master_halts() {
        // 2 + 9 = 11
        assert_eq!(r(29), 11);
        // 3 + 8 = 11
        assert_eq!(r(38), 11);
        // 4 + 9 = 13 -> 4
        assert_eq!(r(49), 4);
        // 9 + 9 + 4 = 22
        assert_eq!(r(994), 22);
    }

    #[test]
    fn non_master_double_digits() {
        assert_eq!(r(10), 1);
        assert_eq!(r(44), 8);
        assert_eq!(r(19), 1);
        assert_eq!(r(1990), 1);
    }

    #[test]
    fn zero_and_negative_rejected() {
        assert!(matches!(reduce(0), Err(NumerologyError::InvalidInput(_))));
        assert!(matches!(reduce(-5), Err(NumerologyError::InvalidInput(_))));
    }

    #[test]
    fn range_invariant_up_to_10000() {
        for n in 1..=10_000 {
            let v = r(n);
            assert!(ALL_REDUCED_VALUES.contains(&v), "reduce({n}) = {v}");
        }
    }

    #[test]
    fn root_of_masters() {
        assert_eq!(ReducedNumber::new(11).unwrap().root(), 2);
        assert_eq!(ReducedNumber::new(22).unwrap().root(), 4);
        assert_eq!(ReducedNumber::new(33).unwrap().root(), 6);
        assert_eq!(ReducedNumber::new(7).unwrap().root(), 7);
    }

    #[test]
    fn checked_constructor() {
        assert!(ReducedNumber::new(0).is_none());
        assert!(ReducedNumber::new(10).is_none());
        assert!(ReducedNumber::new(44).is_none());
        assert!(ReducedNumber::new(33).is_some());
    }

    #[test]
    fn digit_helpers() {
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_root(1990), 1);
        assert_eq!(digit_root(0), 0);
        assert_eq!(digit_root(29), 2);
    }

    #[test]
    fn serde_rejects_out_of_set() {
        let ok: ReducedNumber = serde_json::from_str("22").unwrap();
        assert_eq!(ok.value(), 22);
        assert!(serde_json::from_str::<ReducedNumber>("10").is_err());
    }
}
