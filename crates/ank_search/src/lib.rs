//! Date-range scans over a person's numerology.
//!
//! This crate provides:
//! - Lucky-date scoring and range search, with purpose thresholds
//! - Daily, weekly and monthly predictions
//! - Nine-year life cycles, peak years and life stage
//!
//! Scans are synchronous and walk the range one day at a time.

pub mod error;
pub mod life;
pub mod lucky;
pub mod predict;

pub use error::SearchError;
pub use life::{
    ALL_LIFE_STAGES, CYCLE_COUNT, CYCLE_YEARS, LifeCycle, LifeStage, LifeStageName, PeakKind,
    PeakYear, life_cycles, life_stage, peak_years,
};
pub use lucky::{
    LuckyConfig, LuckyDate, LuckyDates, LuckyReason, LuckyScore, NEXT_LUCKY_MIN_SCORE, Purpose,
    calculate_lucky_score, compatible_numbers, find_lucky_dates, has_repeating_digits,
    is_mirror_date, lucky_dates_for_purpose, next_lucky_date,
};
pub use predict::{
    DailyPrediction, MAX_KEY_DAYS, MonthlyPrediction, WEEK_LEN, WeeklyPrediction,
    daily_prediction, day_color, lucky_hours, monthly_prediction, weekly_prediction,
};
