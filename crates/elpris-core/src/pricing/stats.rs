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
use elpris_types::PriceRecord;

/// Price statistics for one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub max: PriceRecord,
    pub min: PriceRecord,
    pub mean: f64,
}

/// Most expensive record; the earliest one wins a tie
pub fn max_price(series: &[PriceRecord]) -> Result<&PriceRecord> {
    extremum(series, |candidate, best| candidate > best)
}

/// Cheapest record; the earliest one wins a tie
pub fn min_price(series: &[PriceRecord]) -> Result<&PriceRecord> {
    extremum(series, |candidate, best| candidate < best)
}

/// Arithmetic mean of all prices
pub fn mean_price(series: &[PriceRecord]) -> Result<f64> {
    if series.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let sum: f64 = series.iter().map(PriceRecord::price).sum();
    Ok(sum / series.len() as f64)
}

/// Max, min and mean in one call
pub fn summarize(series: &[PriceRecord]) -> Result<PriceSummary> {
    Ok(PriceSummary {
        max: *max_price(series)?,
        min: *min_price(series)?,
        mean: mean_price(series)?,
    })
}

// Linear scan seeded with the first record; `replaces` must be strict so ties
// keep the first-encountered record.
fn extremum(
    series: &[PriceRecord],
    replaces: impl Fn(f64, f64) -> bool,
) -> Result<&PriceRecord> {
    let (first, rest) = series.split_first().ok_or(AnalysisError::EmptyInput)?;

    Ok(rest.iter().fold(first, |best, record| {
        if replaces(record.price(), best.price()) {
            record
        } else {
            best
        }
    }))
}
