//! Fixed 3x3 Lo Shu magic-square layout.
//!
//! ```text
//!   4 | 9 | 2
//!   3 | 5 | 7
//!   8 | 1 | 6
//! ```
//!
//! Every row, column and diagonal sums to 15.

/// Digits by (row, column).
pub const LO_SHU_LAYOUT: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// (row, column) of digits 1..=9, index 0 = digit 1.
const POSITIONS: [(usize, usize); 9] = [
    (2, 1), // 1
    (0, 2), // 2
    (1, 0), // 3
    (0, 0), // 4
    (1, 1), // 5
    (2, 2), // 6
    (1, 2), // 7
    (2, 0), // 8
    (0, 1), // 9
];

/// Cell of a digit 1..=9; `None` for 0 and anything above 9.
pub const fn position(digit: u8) -> Option<(usize, usize)> {
    match digit {
        1..=9 => Some(POSITIONS[(digit - 1) as usize]),
        _ => None,
    }
}
