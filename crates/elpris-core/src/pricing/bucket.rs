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

use chrono::{NaiveDate, Timelike};
use elpris_types::PriceRecord;

/// 15-minute quotes per hour
pub const QUARTERS_PER_HOUR: usize = 4;

/// 15-minute quotes in a regular (non-DST-switch) day
pub const QUARTERS_PER_DAY: usize = 96;

/// Collapse a day of 15-minute quotes into 24 hourly records
///
/// Each hourly record spans the first quarter's start to the last quarter's
/// end and carries the arithmetic mean of the four quarter prices.
///
/// # Arguments
/// * `series` - A single day's records in chronological order
///
/// # Returns
/// 24 hourly records when `series` holds exactly 96 quarters, otherwise an
/// unchanged copy of `series` (already hourly, a granularity we do not
/// aggregate, or quarters that are not in chronological order).
pub fn bucketize_if_quarter_hourly(series: &[PriceRecord]) -> Vec<PriceRecord> {
    if series.len() != QUARTERS_PER_DAY {
        return series.to_vec();
    }

    let hours: Result<Vec<PriceRecord>, _> = series
        .chunks_exact(QUARTERS_PER_HOUR)
        .map(|quarters| {
            let first = &quarters[0];
            let last = &quarters[QUARTERS_PER_HOUR - 1];
            let mean = quarters.iter().map(PriceRecord::price).sum::<f64>()
                / QUARTERS_PER_HOUR as f64;

            PriceRecord::new(mean, first.interval_start(), last.interval_end())
        })
        .collect();

    // Out-of-order quarters cannot form an hour; leave such input untouched
    hours.unwrap_or_else(|_| series.to_vec())
}

/// Merge consecutive records that start within the same clock hour
///
/// Unlike [`bucketize_if_quarter_hourly`] this does not depend on the day
/// having 96 quarters, so spring-forward (23 hours) and fall-back (25 hours)
/// days also come out hourly. The repeated fall-back hour is told apart by
/// its UTC offset. Hourly input is returned unchanged.
///
/// # Returns
/// One record per clock hour carrying the mean price of its members, or an
/// unchanged copy of `series` when the records are not in chronological order.
pub fn group_by_clock_hour(series: &[PriceRecord]) -> Vec<PriceRecord> {
    let mut hours = Vec::with_capacity(series.len());
    let mut rest = series;

    while let Some(first) = rest.first() {
        let key = clock_hour(first);
        let len = rest.iter().take_while(|r| clock_hour(r) == key).count();
        let (group, tail) = rest.split_at(len);
        rest = tail;

        if len == 1 {
            hours.push(*first);
            continue;
        }

        let last = &group[len - 1];
        let mean = group.iter().map(PriceRecord::price).sum::<f64>() / len as f64;
        match PriceRecord::new(mean, first.interval_start(), last.interval_end()) {
            Ok(hour) => hours.push(hour),
            // Out-of-order records cannot form an hour; leave such input untouched
            Err(_) => return series.to_vec(),
        }
    }

    hours
}

fn clock_hour(record: &PriceRecord) -> (NaiveDate, u32, i32) {
    let start = record.interval_start();
    (
        start.date_naive(),
        start.hour(),
        start.offset().local_minus_utc(),
    )
}
