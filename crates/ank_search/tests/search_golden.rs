//! Integration tests for range scans and predictions.

use ank_core::{NameConfig, ProfileInput, ReducedNumber, calendar_date, personal_year_number};
use ank_search::{
    LuckyConfig, LuckyReason, PeakKind, Purpose, SearchError, calculate_lucky_score,
    find_lucky_dates, life_cycles, life_stage, lucky_dates_for_purpose, monthly_prediction,
    next_lucky_date, peak_years, weekly_prediction,
};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    calendar_date(y, m, day).unwrap()
}

fn maria() -> ProfileInput {
    // life path 9, destiny 3
    ProfileInput::new("Maria Elena Popescu", d(1990, 11, 15)).unwrap()
}

// ---------------------------------------------------------------------------
// Lucky score
// ---------------------------------------------------------------------------

#[test]
fn life_path_match_on_universal_nine() {
    let n = |v| ReducedNumber::new(v).unwrap();
    // 2024-05-05 -> 5 + 5 + 2 + 0 + 2 + 4 = 18 -> 9
    let s = calculate_lucky_score(d(2024, 5, 5), n(9), n(3), n(8)).unwrap();
    assert_eq!(s.reasons[0], LuckyReason::LifePathMatch);
    assert!(s.score >= 30);
}

#[test]
fn reason_codes_serialize_camel_case() {
    let json = serde_json::to_string(&LuckyReason::RepeatingDigits).unwrap();
    assert_eq!(json, "\"repeatingDigits\"");
    assert_eq!(LuckyReason::RepeatingDigits.code(), "repeatingDigits");
}

// ---------------------------------------------------------------------------
// Range search
// ---------------------------------------------------------------------------

#[test]
fn may_scan_is_sorted_and_thresholded() {
    let config = LuckyConfig::default();
    let found = find_lucky_dates(&maria(), d(2024, 5, 1), d(2024, 5, 31), &config).unwrap();
    assert_eq!(found.life_path.value(), 9);
    assert_eq!(found.destiny.value(), 3);
    assert!(!found.dates.is_empty());
    for pair in found.dates.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score.score > b.score.score || (a.score.score == b.score.score && a.date < b.date)
        );
    }
    assert!(found.dates.iter().all(|l| l.score.score >= config.min_score));
    assert!(found.best.len() <= config.best_count);
    assert_eq!(found.best[..], found.dates[..found.best.len()]);
}

#[test]
fn reversed_range_is_rejected() {
    let err = find_lucky_dates(&maria(), d(2024, 5, 2), d(2024, 5, 1), &LuckyConfig::default())
        .unwrap_err();
    assert!(matches!(err, SearchError::EmptyRange { .. }));
}

#[test]
fn single_day_range() {
    let config = LuckyConfig::default().with_min_score(0);
    let found = find_lucky_dates(&maria(), d(2024, 5, 5), d(2024, 5, 5), &config).unwrap();
    assert_eq!(found.dates.len(), 1);
    assert_eq!(found.dates[0].date, d(2024, 5, 5));
}

#[test]
fn purpose_scan_stays_in_month() {
    let found = lucky_dates_for_purpose(
        &maria(),
        Purpose::Business,
        2024,
        2,
        &LuckyConfig::default(),
    )
    .unwrap();
    for l in &found.dates {
        assert_eq!((l.date.year(), l.date.month()), (2024, 2));
        assert!(l.score.score >= 40);
    }
}

#[test]
fn next_lucky_date_is_the_earliest() {
    let profile = maria();
    let from = d(2024, 5, 1);
    let config = LuckyConfig::default();
    let Some(next) = next_lucky_date(&profile, from, 60, &config).unwrap() else {
        return;
    };
    assert!(next.score.score >= 40);
    let lp = ReducedNumber::new(9).unwrap();
    let destiny = ReducedNumber::new(3).unwrap();
    for date in from.iter_days().take_while(|x| *x < next.date) {
        let py = personal_year_number(profile.birth_date(), date.year()).unwrap();
        let s = calculate_lucky_score(date, lp, destiny, py).unwrap();
        assert!(s.score < 40, "{date} scored {}", s.score);
    }
}

// ---------------------------------------------------------------------------
// Predictions and life views
// ---------------------------------------------------------------------------

#[test]
fn week_and_month() {
    let birth = d(1990, 11, 15);
    let w = weekly_prediction(birth, d(2024, 12, 29)).unwrap();
    assert_eq!(w.days.len(), 7);
    assert_eq!(w.days[6].date, d(2025, 1, 4));
    assert_eq!(w.week_of_month, 5);

    let m = monthly_prediction(birth, 2024, 5).unwrap();
    assert_eq!(m.month, 5);
    assert!(m.key_days.len() <= 5);
    assert!(monthly_prediction(birth, 2024, 13).is_err());
}

#[test]
fn life_views() {
    let birth = d(1990, 11, 15);
    let cycles = life_cycles(birth, d(2024, 6, 1)).unwrap();
    assert_eq!(cycles.iter().filter(|c| c.current_year_in_cycle > 0).count(), 1);

    let stage = life_stage(birth, d(2024, 6, 1)).unwrap();
    assert_eq!(stage.age, 33);
    assert_eq!(stage.stage, 4);

    let peaks = peak_years(&maria(), &NameConfig::default(), 2024, 20).unwrap();
    assert!(peaks.iter().all(|p| (2024..=2044).contains(&p.year)));
    for p in &peaks {
        match p.kind {
            PeakKind::LifePath => assert_eq!(p.personal_year.value(), 9),
            PeakKind::Destiny => assert_eq!(p.personal_year.value(), 3),
            PeakKind::Major => unreachable!("9 always matches the life path first"),
        }
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn score_is_sum_of_reasons(days in 0u32..40_000, lp in 0usize..12, de in 0usize..12, py in 0usize..12) {
        let values = ank_core::ALL_REDUCED_VALUES;
        let n = |i: usize| ReducedNumber::new(values[i]).unwrap();
        let date = d(1950, 1, 1) + chrono::Days::new(u64::from(days));
        let a = calculate_lucky_score(date, n(lp), n(de), n(py)).unwrap();
        let b = calculate_lucky_score(date, n(lp), n(de), n(py)).unwrap();
        prop_assert_eq!(&a, &b);
        let sum: u32 = a.reasons.iter().map(|r| r.points()).sum();
        prop_assert_eq!(a.score, sum);
    }
}
