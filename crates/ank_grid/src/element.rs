//! Five-element reading of the grid.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Fire,
    Earth,
    Metal,
    Water,
    Wood,
}

/// Elements in tie-break order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
];

impl Element {
    /// Digits feeding this element. 1 and 6 count twice (fire/water, metal/water).
    pub const fn digits(self) -> &'static [u8] {
        match self {
            Self::Fire => &[1, 9],
            Self::Earth => &[2, 5, 8],
            Self::Metal => &[6, 7],
            Self::Water => &[1, 6],
            Self::Wood => &[3, 4],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
            Self::Wood => "wood",
        }
    }
}

/// Element with the highest digit count.
///
/// An earlier element keeps the lead on ties; with no digits at all the
/// result is earth.
pub fn dominant_element(counts: &[u32; 9]) -> Element {
    let mut best = (Element::Earth, 0u32);
    for element in ALL_ELEMENTS {
        let total: u32 = element
            .digits()
            .iter()
            .map(|&d| counts[usize::from(d - 1)])
            .sum();
        if total > best.1 {
            best = (element, total);
        }
    }
    best.0
}
