//! Arrows: named digit lines that are either complete or entirely absent.
//!
//! A line with all three digits present is a positive arrow. Three of the
//! lines also have a negative reading when none of their digits appear;
//! partial lines produce nothing.

use serde::Serialize;

/// Which arrow was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrowKind {
    Determination,
    Hesitation,
    Spirituality,
    Frustration,
    Planner,
    Success,
    Disappointment,
    Activity,
    Emotional,
}

impl ArrowKind {
    /// Stable meaning code for the presentation layer.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Determination => "arrowOfDetermination",
            Self::Hesitation => "arrowOfHesitation",
            Self::Spirituality => "arrowOfSpirituality",
            Self::Frustration => "arrowOfFrustration",
            Self::Planner => "arrowOfPlanner",
            Self::Success => "arrowOfSuccess",
            Self::Disappointment => "arrowOfDisappointment",
            Self::Activity => "arrowOfActivity",
            Self::Emotional => "arrowOfEmotionalBalance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrowDirection {
    Positive,
    Negative,
}

/// A detected arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrow {
    #[serde(rename = "type")]
    pub kind: ArrowKind,
    pub direction: ArrowDirection,
    pub numbers: [u8; 3],
    pub meaning: &'static str,
}

struct ArrowLine {
    numbers: [u8; 3],
    positive: ArrowKind,
    negative: Option<ArrowKind>,
}

/// Lines in detection order.
const ARROW_LINES: [ArrowLine; 6] = [
    ArrowLine {
        numbers: [1, 5, 9],
        positive: ArrowKind::Determination,
        negative: Some(ArrowKind::Hesitation),
    },
    ArrowLine {
        numbers: [3, 5, 7],
        positive: ArrowKind::Spirituality,
        negative: Some(ArrowKind::Frustration),
    },
    ArrowLine {
        numbers: [1, 2, 3],
        positive: ArrowKind::Planner,
        negative: None,
    },
    ArrowLine {
        numbers: [4, 5, 6],
        positive: ArrowKind::Success,
        negative: Some(ArrowKind::Disappointment),
    },
    ArrowLine {
        numbers: [7, 8, 9],
        positive: ArrowKind::Activity,
        negative: None,
    },
    ArrowLine {
        numbers: [2, 5, 8],
        positive: ArrowKind::Emotional,
        negative: None,
    },
];

fn arrow(kind: ArrowKind, direction: ArrowDirection, numbers: [u8; 3]) -> Arrow {
    Arrow {
        kind,
        direction,
        numbers,
        meaning: kind.meaning(),
    }
}

/// Detect arrows from per-digit counts (index 0 = digit 1).
pub fn detect_arrows(counts: &[u32; 9]) -> Vec<Arrow> {
    let present = |d: &u8| counts[usize::from(d - 1)] > 0;
    ARROW_LINES
        .iter()
        .filter_map(|line| {
            if line.numbers.iter().all(present) {
                Some(arrow(line.positive, ArrowDirection::Positive, line.numbers))
            } else if line.numbers.iter().any(present) {
                None
            } else {
                line.negative
                    .map(|kind| arrow(kind, ArrowDirection::Negative, line.numbers))
            }
        })
        .collect()
}
