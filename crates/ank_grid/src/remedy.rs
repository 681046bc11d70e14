//! Remedies for digits missing from the grid.
//!
//! Only language-neutral data lives here: colours as hex codes, element,
//! compass direction and favourable weekday.

use chrono::Weekday;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RemedyElement {
    Fire,
    Water,
    Air,
    Earth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberRemedy {
    pub number: u8,
    pub colors: [&'static str; 2],
    pub element: RemedyElement,
    pub direction: Direction,
    pub favorable_day: Weekday,
}

const fn entry(
    number: u8,
    colors: [&'static str; 2],
    element: RemedyElement,
    direction: Direction,
    favorable_day: Weekday,
) -> NumberRemedy {
    NumberRemedy {
        number,
        colors,
        element,
        direction,
        favorable_day,
    }
}

/// Remedies for digits 1..=9, index 0 = digit 1.
pub const NUMBER_REMEDIES: [NumberRemedy; 9] = {
    use Direction as D;
    use RemedyElement as E;
    [
        entry(1, ["#FF0000", "#FFCC00"], E::Fire, D::East, Weekday::Sun),
        entry(2, ["#FFFFFF", "#F5F5DC"], E::Water, D::NorthWest, Weekday::Mon),
        entry(3, ["#FFFF00", "#FFA500"], E::Fire, D::NorthEast, Weekday::Thu),
        entry(4, ["#808080", "#0000FF"], E::Air, D::SouthWest, Weekday::Sat),
        entry(5, ["#008000", "#90EE90"], E::Earth, D::North, Weekday::Wed),
        entry(6, ["#FFC0CB", "#F0E68C"], E::Water, D::SouthEast, Weekday::Fri),
        entry(7, ["#808080", "#F5F5F5"], E::Water, D::South, Weekday::Tue),
        entry(8, ["#000080", "#000000"], E::Earth, D::West, Weekday::Sat),
        entry(9, ["#FF0000", "#8B0000"], E::Fire, D::South, Weekday::Tue),
    ]
};

/// Remedy for a digit 1..=9.
pub fn remedy(digit: u8) -> Option<&'static NumberRemedy> {
    match digit {
        1..=9 => Some(&NUMBER_REMEDIES[usize::from(digit - 1)]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_digit() {
        for (i, r) in NUMBER_REMEDIES.iter().enumerate() {
            assert_eq!(usize::from(r.number), i + 1);
        }
        assert_eq!(remedy(0), None);
        assert_eq!(remedy(5).unwrap().favorable_day, Weekday::Wed);
        assert_eq!(remedy(2).unwrap().direction.name(), "north-west");
    }
}
