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

//! One report run: fetch, analyse, print

use crate::formatters::ReportFormatter;
use anyhow::Result;
use chrono::NaiveDate;
use elpris_core::{
    AnalysisError, Clock, PriceSource, bucketize_if_quarter_hourly, find_cheapest_window,
    group_by_clock_hour, records_on, sort_descending, summarize,
};
use elpris_types::{ChargingDuration, PriceRecord, PriceZone};
use std::io::Write;
use tracing::{debug, warn};

/// What the user asked for
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest {
    pub zone: PriceZone,
    /// Explicit day; the clock decides when `None`
    pub date: Option<NaiveDate>,
    pub sorted: bool,
    pub charging: Option<ChargingDuration>,
    /// Let the charging window run into tomorrow
    pub include_tomorrow: bool,
}

/// Fetch one zone's prices and write the report to `out`
///
/// # Arguments
/// * `request` - Zone, date and report options
/// * `source` - Where prices come from
/// * `clock` - Supplies today's date when `request.date` is unset
/// * `formatter` - Localized report text
/// * `out` - Destination for the report
///
/// # Returns
/// An error when prices for the requested day cannot be fetched. Missing data
/// is reported in the output rather than as an error.
pub fn run_report(
    request: &ReportRequest,
    source: &dyn PriceSource,
    clock: &dyn Clock,
    formatter: &ReportFormatter<'_>,
    out: &mut dyn Write,
) -> Result<()> {
    let date = request.date.unwrap_or_else(|| clock.today());
    writeln!(out, "{}", formatter.header(request.zone, date)?)?;

    let today = fetch_hourly(source, date, request.zone)?;

    if today.is_empty() {
        writeln!(out, "{}", formatter.no_data(date)?)?;
    } else if request.sorted {
        writeln!(out, "{}", formatter.sorted(&sort_descending(&today))?)?;
    } else {
        writeln!(out, "{}", formatter.summary(&summarize(&today)?)?)?;
    }

    if let Some(duration) = request.charging {
        // Window length counts records, so each must span one clock hour
        let mut series = group_by_clock_hour(&today);

        if request.include_tomorrow {
            match date.succ_opt() {
                Some(tomorrow) => {
                    let next = fetch_tomorrow(source, tomorrow, request.zone);
                    if next.is_empty() {
                        writeln!(out, "{}", formatter.tomorrow_unpublished()?)?;
                    }
                    series.extend(group_by_clock_hour(&next));
                }
                None => warn!("No day follows {date}; charging window limited to one day"),
            }
        }

        match find_cheapest_window(&series, duration.hours()) {
            Ok(window) => {
                writeln!(out, "{}", formatter.charging(duration, &window, date)?)?;
            }
            Err(AnalysisError::InsufficientData {
                requested,
                available,
            }) => {
                writeln!(out, "{}", formatter.insufficient_data(requested, available)?)?;
            }
            Err(err @ (AnalysisError::EmptyInput | AnalysisError::ZeroLengthWindow)) => {
                return Err(err.into());
            }
        }
    }

    Ok(())
}

/// One day's prices from `source`, restricted to `date` and collapsed to hours
fn fetch_hourly(
    source: &dyn PriceSource,
    date: NaiveDate,
    zone: PriceZone,
) -> Result<Vec<PriceRecord>> {
    let raw = source.fetch_prices(date, zone)?;
    let day = records_on(&raw, date);
    let hourly = bucketize_if_quarter_hourly(&day);

    debug!(
        "{}: {} records for {date}, {} after bucketing",
        source.name(),
        raw.len(),
        hourly.len()
    );
    Ok(hourly)
}

// Tomorrow only extends the charging search, so a failed fetch is not fatal
fn fetch_tomorrow(source: &dyn PriceSource, date: NaiveDate, zone: PriceZone) -> Vec<PriceRecord> {
    fetch_hourly(source, date, zone).unwrap_or_else(|e| {
        warn!("Ignoring tomorrow's prices from {}: {e:#}", source.name());
        Vec::new()
    })
}
