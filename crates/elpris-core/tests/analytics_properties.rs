// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Elpriskollen.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

// Invariants of the analytics engine checked over many generated price days.
// Prices are drawn from a small deterministic generator so failures reproduce.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone};
use elpris_core::{
    AnalysisError, bucketize_if_quarter_hourly, find_cheapest_window, group_by_clock_hour,
    max_price, mean_price, min_price, records_on, sort_descending,
};
use elpris_types::PriceRecord;

/// Linear congruential generator; good enough to scatter test prices
struct PriceGenerator(u64);

impl PriceGenerator {
    fn next_price(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Two decimals in [-0.20, 2.79], with plenty of repeats to exercise ties
        let cents = i32::try_from((self.0 >> 33) % 300).unwrap() - 20;
        f64::from(cents) / 100.0
    }
}

fn stockholm_winter() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
}

fn midnight(date: NaiveDate) -> DateTime<FixedOffset> {
    stockholm_winter()
        .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
        .unwrap()
}

fn generate_series(
    generator: &mut PriceGenerator,
    start: DateTime<FixedOffset>,
    minutes: i64,
    len: usize,
) -> Vec<PriceRecord> {
    (0..len)
        .map(|i| {
            let begin = start + TimeDelta::minutes(i64::try_from(i).unwrap() * minutes);
            PriceRecord::new(
                generator.next_price(),
                begin,
                begin + TimeDelta::minutes(minutes),
            )
            .unwrap()
        })
        .collect()
}

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + TimeDelta::days(offset)
}

#[test]
fn extremes_dominate_every_record() {
    let mut generator = PriceGenerator(7);

    for len in 1..=48 {
        let series = generate_series(&mut generator, midnight(day(0)), 60, len);
        let max = max_price(&series).unwrap();
        let min = min_price(&series).unwrap();

        for record in &series {
            assert!(max.price() >= record.price());
            assert!(min.price() <= record.price());
        }

        // First occurrence wins a tie
        let first_max = series.iter().position(|r| r.price() == max.price()).unwrap();
        let first_min = series.iter().position(|r| r.price() == min.price()).unwrap();
        assert_eq!(max, &series[first_max]);
        assert_eq!(min, &series[first_min]);
    }
}

#[test]
fn mean_is_sum_over_count() {
    let mut generator = PriceGenerator(11);

    for len in 1..=96 {
        let series = generate_series(&mut generator, midnight(day(1)), 15, len);
        let expected = series.iter().map(PriceRecord::price).sum::<f64>() / len as f64;

        assert!((mean_price(&series).unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn sort_is_a_stable_descending_permutation() {
    let mut generator = PriceGenerator(13);

    for len in 0..=48 {
        let series = generate_series(&mut generator, midnight(day(2)), 60, len);
        let sorted = sort_descending(&series);

        assert_eq!(sorted.len(), series.len());
        for record in &series {
            assert!(sorted.contains(record));
        }

        for pair in sorted.windows(2) {
            assert!(pair[0].price() >= pair[1].price());
            // Records are unique by start time, so this checks stability
            if pair[0].price() == pair[1].price() {
                assert!(pair[0].interval_start() < pair[1].interval_start());
            }
        }
    }
}

#[test]
fn cheapest_window_beats_every_other_window() {
    let mut generator = PriceGenerator(17);

    for len in 1..=48 {
        let series = generate_series(&mut generator, midnight(day(3)), 60, len);

        for hours in [2_usize, 4, 8] {
            let Ok(window) = find_cheapest_window(&series, hours) else {
                assert!(len < hours);
                continue;
            };

            assert_eq!(window.len(), hours);
            let best = window.total_price();
            let sums: Vec<f64> = series
                .windows(hours)
                .map(|w| w.iter().map(PriceRecord::price).sum())
                .collect();

            for &sum in &sums {
                assert!(best <= sum);
            }

            let earliest = sums.iter().position(|&sum| sum == best).unwrap();
            assert_eq!(window.start_index(), earliest);
        }
    }
}

#[test]
fn quarter_hour_day_buckets_into_hours() {
    let mut generator = PriceGenerator(19);
    let quarters = generate_series(&mut generator, midnight(day(4)), 15, 96);
    let hours = bucketize_if_quarter_hourly(&quarters);

    assert_eq!(hours.len(), 24);
    for (hour, record) in hours.iter().enumerate() {
        let group = &quarters[hour * 4..(hour + 1) * 4];
        let mean = group.iter().map(PriceRecord::price).sum::<f64>() / 4.0;

        assert!((record.price() - mean).abs() < 1e-9);
        assert_eq!(record.interval_start(), group[0].interval_start());
        assert_eq!(record.interval_end(), group[3].interval_end());
    }
}

#[test]
fn two_day_quarter_feed_is_filtered_before_bucketing() {
    // A raw feed covering today and tomorrow must be split per day first;
    // bucketing the 192-record concatenation directly is a no-op.
    let mut generator = PriceGenerator(23);
    let raw = generate_series(&mut generator, midnight(day(5)), 15, 192);

    assert_eq!(bucketize_if_quarter_hourly(&raw).len(), 192);

    let today = bucketize_if_quarter_hourly(&records_on(&raw, day(5)));
    let tomorrow = bucketize_if_quarter_hourly(&records_on(&raw, day(6)));
    assert_eq!(today.len(), 24);
    assert_eq!(tomorrow.len(), 24);

    let combined: Vec<PriceRecord> = today.into_iter().chain(tomorrow).collect();
    let window = find_cheapest_window(&combined, 8).unwrap();
    assert!(window.start_index() <= 40);
}

#[test]
fn windows_on_dst_days_span_whole_hours() {
    let mut generator = PriceGenerator(31);
    let winter = FixedOffset::east_opt(3600).unwrap();
    let summer = FixedOffset::east_opt(7200).unwrap();
    let at = |offset: FixedOffset, month: u32, day: u32, hour: u32| {
        offset.with_ymd_and_hms(2026, month, day, hour, 0, 0).unwrap()
    };

    // Spring forward skips 02:00, fall back repeats it
    let mut spring = generate_series(&mut generator, at(winter, 3, 29, 0), 15, 8);
    spring.extend(generate_series(&mut generator, at(summer, 3, 29, 3), 15, 84));
    let mut autumn = generate_series(&mut generator, at(summer, 10, 25, 0), 15, 12);
    autumn.extend(generate_series(&mut generator, at(winter, 10, 25, 2), 15, 88));

    for (quarters, expected_hours) in [(spring, 23), (autumn, 25)] {
        assert_eq!(bucketize_if_quarter_hourly(&quarters).len(), quarters.len());

        let hours = group_by_clock_hour(&quarters);
        assert_eq!(hours.len(), expected_hours);

        for length in [2_usize, 4, 8] {
            let window = find_cheapest_window(&hours, length).unwrap();
            let span = window.ends_at().unwrap() - window.starts_at().unwrap();
            assert_eq!(span, TimeDelta::hours(i64::try_from(length).unwrap()));
        }
    }
}

#[test]
fn errors_are_distinguishable() {
    let empty: Vec<PriceRecord> = Vec::new();
    let short = generate_series(&mut PriceGenerator(29), midnight(day(7)), 60, 3);

    assert_eq!(max_price(&empty), Err(AnalysisError::EmptyInput));
    assert_eq!(min_price(&empty), Err(AnalysisError::EmptyInput));
    assert_eq!(mean_price(&empty), Err(AnalysisError::EmptyInput));

    let err = find_cheapest_window(&short, 8).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InsufficientData {
            requested: 8,
            available: 3
        }
    );
    assert_ne!(err, AnalysisError::EmptyInput);
    assert!(err.to_string().contains("8h"));
}
