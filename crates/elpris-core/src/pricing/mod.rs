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

pub mod bucket;
pub mod sort;
pub mod stats;
pub mod window;

pub use bucket::{
    QUARTERS_PER_DAY, QUARTERS_PER_HOUR, bucketize_if_quarter_hourly, group_by_clock_hour,
};
pub use sort::sort_descending;
pub use stats::{PriceSummary, max_price, mean_price, min_price, summarize};
pub use window::{ChargingWindow, find_cheapest_window};

use chrono::NaiveDate;
use elpris_types::PriceRecord;

/// Keep only the records whose interval starts on `date`
///
/// Bucketing must only ever see a single day, so callers filter the raw
/// response with this before calling [`bucketize_if_quarter_hourly`].
pub fn records_on(series: &[PriceRecord], date: NaiveDate) -> Vec<PriceRecord> {
    series
        .iter()
        .filter(|record| record.local_date() == date)
        .copied()
        .collect()
}
