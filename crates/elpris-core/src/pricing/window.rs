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

use crate::error::{AnalysisError, Result};
use chrono::{DateTime, FixedOffset};
use elpris_types::PriceRecord;

/// Contiguous run of hours selected for charging
///
/// Borrows the winning sub-slice of the series it was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargingWindow<'a> {
    start_index: usize,
    records: &'a [PriceRecord],
}

impl<'a> ChargingWindow<'a> {
    /// Index of the first hour within the searched series
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    #[must_use]
    pub fn records(&self) -> &'a [PriceRecord] {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of the hourly prices (SEK/kWh summed over the window)
    #[must_use]
    pub fn total_price(&self) -> f64 {
        window_sum(self.records)
    }

    /// Average hourly price across the window
    #[must_use]
    pub fn mean_price(&self) -> f64 {
        self.total_price() / self.records.len() as f64
    }

    /// When charging should begin
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<FixedOffset>> {
        self.records.first().map(PriceRecord::interval_start)
    }

    /// When the last hour of the window ends
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<FixedOffset>> {
        self.records.last().map(PriceRecord::interval_end)
    }
}

/// Find the cheapest run of `hours` consecutive records
///
/// Every window start from `0` to `len - hours` is evaluated and the one with
/// the lowest price sum is returned. Exact ties go to the earliest start.
/// The series may span today and tomorrow so that a window can cross
/// midnight; the caller is responsible for concatenating them in order.
///
/// # Arguments
/// * `series` - Hourly records in chronological order
/// * `hours` - Window length in records
///
/// # Returns
/// The winning window, or `InsufficientData` when `series` is shorter than
/// `hours`.
pub fn find_cheapest_window(series: &[PriceRecord], hours: usize) -> Result<ChargingWindow<'_>> {
    if hours == 0 {
        return Err(AnalysisError::ZeroLengthWindow);
    }
    if series.len() < hours {
        return Err(AnalysisError::InsufficientData {
            requested: hours,
            available: series.len(),
        });
    }

    let mut best_start = 0;
    let mut best_sum = f64::INFINITY;

    // Each window is summed from scratch so equal windows compare exactly equal
    for (start, window) in series.windows(hours).enumerate() {
        let sum = window_sum(window);
        if sum < best_sum {
            best_sum = sum;
            best_start = start;
        }
    }

    Ok(ChargingWindow {
        start_index: best_start,
        records: &series[best_start..best_start + hours],
    })
}

fn window_sum(records: &[PriceRecord]) -> f64 {
    records.iter().map(PriceRecord::price).sum()
}
