//! Digit reduction.
//!
//! Repeatedly replaces a number with the sum of its decimal digits until a
//! single digit or a master number (11, 22, 33) remains. Karmic-debt numbers
//! (13, 14, 16, 19) met along the way can be recorded.

use serde::{Deserialize, Serialize};

/// Numbers that are never reduced further.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Intermediate sums flagged as karmic debt.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// The outcome of reducing a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionResult {
    /// A value in `0..=9` or a master number.
    pub final_value: u32,
    /// True when reduction stopped on 11, 22 or 33.
    pub is_master_number: bool,
    /// Karmic-debt numbers seen before the terminal value, first occurrence
    /// order, no duplicates. Empty unless tracking was requested.
    pub karmic_debt_numbers: Vec<u32>,
}

/// Returns true for 11, 22 and 33.
pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Returns true for 13, 14, 16 and 19.
pub fn is_karmic_debt_number(n: u32) -> bool {
    KARMIC_DEBT_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit or master number.
///
/// The master check runs before every digit-sum step, so 29 stops at 11
/// instead of continuing to 2. With `track_karmic_debt`, every intermediate
/// value in [`KARMIC_DEBT_NUMBERS`] is recorded before it is reduced.
pub fn reduce_number(n: u32, track_karmic_debt: bool) -> ReductionResult {
    let mut value = n;
    let mut karmic = Vec::new();

    while value > 9 && !is_master_number(value) {
        if track_karmic_debt && is_karmic_debt_number(value) && !karmic.contains(&value) {
            karmic.push(value);
        }
        value = digit_sum(value);
    }

    tracing::trace!(input = n, output = value, "reduced");

    ReductionResult {
        final_value: value,
        is_master_number: is_master_number(value),
        karmic_debt_numbers: karmic,
    }
}

/// Shorthand for `reduce_number(n, false).final_value`.
pub fn reduce(n: u32) -> u32 {
    reduce_number(n, false).final_value
}

/// Root digit of a master number (11 → 2, 22 → 4, 33 → 6). Every other
/// value is returned unchanged.
pub fn root_digit(n: u32) -> u32 {
    if is_master_number(n) {
        digit_sum(n)
    } else {
        n
    }
}
