//! Pairwise compatibility matrix over the twelve reduced values.

use ank_core::ReducedNumber;

/// Symmetric scores, rows and columns in `ALL_REDUCED_VALUES` order
/// (1..=9, 11, 22, 33).
pub const COMPATIBILITY_MATRIX: [[u8; 12]; 12] = [
    [70, 60, 90, 55, 85, 65, 75, 80, 85, 80, 75, 70],
    [60, 85, 75, 90, 50, 95, 70, 80, 75, 95, 85, 90],
    [90, 75, 80, 45, 95, 90, 60, 55, 95, 85, 60, 95],
    [55, 90, 45, 75, 40, 85, 80, 95, 50, 70, 95, 75],
    [85, 50, 95, 40, 70, 55, 90, 60, 80, 75, 55, 70],
    [65, 95, 90, 85, 55, 85, 50, 75, 95, 90, 85, 98],
    [75, 70, 60, 80, 90, 50, 90, 65, 70, 95, 80, 85],
    [80, 80, 55, 95, 60, 75, 65, 75, 60, 70, 95, 70],
    [85, 75, 95, 50, 80, 95, 70, 60, 80, 90, 75, 98],
    [80, 95, 85, 70, 75, 90, 95, 70, 90, 90, 95, 98],
    [75, 85, 60, 95, 55, 85, 80, 95, 75, 95, 85, 95],
    [70, 90, 95, 75, 70, 98, 85, 70, 98, 98, 95, 95],
];

fn matrix_index(n: ReducedNumber) -> usize {
    match n.value() {
        11 => 9,
        22 => 10,
        33 => 11,
        v => usize::from(v - 1),
    }
}

/// Score for a pair of reduced numbers, 40..=98.
pub fn compatibility_score(a: ReducedNumber, b: ReducedNumber) -> u8 {
    COMPATIBILITY_MATRIX[matrix_index(a)][matrix_index(b)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ank_core::ALL_REDUCED_VALUES;

    fn n(v: u8) -> ReducedNumber {
        ReducedNumber::new(v).unwrap()
    }

    #[test]
    fn matrix_is_symmetric() {
        for i in 0..12 {
            for j in 0..12 {
                assert_eq!(COMPATIBILITY_MATRIX[i][j], COMPATIBILITY_MATRIX[j][i], "{i},{j}");
            }
        }
    }

    #[test]
    fn index_follows_value_order() {
        for (i, &v) in ALL_REDUCED_VALUES.iter().enumerate() {
            assert_eq!(matrix_index(n(v)), i);
        }
    }

    #[test]
    fn known_pairs() {
        assert_eq!(compatibility_score(n(1), n(3)), 90);
        assert_eq!(compatibility_score(n(4), n(5)), 40);
        assert_eq!(compatibility_score(n(6), n(33)), 98);
        assert_eq!(compatibility_score(n(11), n(2)), 95);
    }
}
