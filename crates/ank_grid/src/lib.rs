//! Lo Shu grid: birth-date digits plotted on the 4-9-2 / 3-5-7 / 8-1-6 magic square.
//!
//! This crate provides:
//! - The fixed layout table and digit positions
//! - Plane (row/column/diagonal) strengths
//! - Arrows of strength and weakness
//! - Dominant element and remedies for missing digits

pub mod arrow;
pub mod element;
pub mod grid;
pub mod layout;
pub mod plane;
pub mod remedy;

pub use arrow::{Arrow, ArrowDirection, ArrowKind, detect_arrows};
pub use element::{ALL_ELEMENTS, Element, dominant_element};
pub use grid::{LoShuAnalysis, LoShuGrid, RepeatedNumber, birth_date_digits, generate_lo_shu_grid};
pub use layout::{LO_SHU_LAYOUT, position};
pub use plane::{ALL_PLANES, Plane, PlaneReading, PlaneStrength, read_planes};
pub use remedy::{Direction, NUMBER_REMEDIES, NumberRemedy, RemedyElement, remedy};
