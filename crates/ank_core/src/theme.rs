//! Thematic keyword attached to each number 1..=9.
//!
//! The presentation layer maps these codes to localized text; the core only
//! decides which theme applies.

use serde::{Deserialize, Serialize};

use crate::reduce::ReducedNumber;

/// Theme of a personal cycle, prediction or life stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleTheme {
    Beginnings,
    Cooperation,
    Creativity,
    Foundation,
    Change,
    Harmony,
    Reflection,
    Achievement,
    Completion,
}

/// All nine themes, index 0 = number 1.
pub const ALL_THEMES: [CycleTheme; 9] = [
    CycleTheme::Beginnings,
    CycleTheme::Cooperation,
    CycleTheme::Creativity,
    CycleTheme::Foundation,
    CycleTheme::Change,
    CycleTheme::Harmony,
    CycleTheme::Reflection,
    CycleTheme::Achievement,
    CycleTheme::Completion,
];

impl CycleTheme {
    /// Theme for a digit 1..=9. Returns `None` outside that range.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1..=9 => Some(ALL_THEMES[(digit - 1) as usize]),
            _ => None,
        }
    }

    /// Theme for a reduced number; masters take the theme of their root.
    pub const fn for_number(n: ReducedNumber) -> Self {
        ALL_THEMES[(n.root() - 1) as usize]
    }

    /// Stable camelCase code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Beginnings => "beginnings",
            Self::Cooperation => "cooperation",
            Self::Creativity => "creativity",
            Self::Foundation => "foundation",
            Self::Change => "change",
            Self::Harmony => "harmony",
            Self::Reflection => "reflection",
            Self::Achievement => "achievement",
            Self::Completion => "completion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_mapping() {
        assert_eq!(CycleTheme::from_digit(1), Some(CycleTheme::Beginnings));
        assert_eq!(CycleTheme::from_digit(9), Some(CycleTheme::Completion));
        assert_eq!(CycleTheme::from_digit(0), None);
        assert_eq!(CycleTheme::from_digit(10), None);
    }

    #[test]
    fn masters_use_root() {
        let eleven = ReducedNumber::new(11).unwrap();
        assert_eq!(CycleTheme::for_number(eleven), CycleTheme::Cooperation);
    }
}
