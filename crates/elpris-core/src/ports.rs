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

//! Collaborators the engine is driven by

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use chrono_tz::Europe::Stockholm;
use elpris_types::{PriceRecord, PriceZone};

/// Day-ahead price provider keyed by calendar date and zone
pub trait PriceSource {
    /// Fetch one day's prices in chronological order
    ///
    /// A day that has not been published yet yields an empty vector.
    fn fetch_prices(&self, date: NaiveDate, zone: PriceZone) -> Result<Vec<PriceRecord>>;

    /// Get data source name for logging
    fn name(&self) -> &str;
}

/// Source of "today" when no explicit date is given
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in Swedish local time
#[derive(Debug, Clone, Copy, Default)]
pub struct StockholmClock;

impl Clock for StockholmClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&Stockholm).date_naive()
    }
}

/// Clock pinned to a given date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_stockholm_clock_is_within_a_day_of_utc() {
        let today = StockholmClock.today();
        let utc_today = Utc::now().date_naive();
        assert!((today - utc_today).num_days().abs() <= 1);
    }
}
