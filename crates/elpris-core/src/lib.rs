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

//! Price analytics engine
//!
//! Pure computations over a chronologically ordered slice of
//! [`PriceRecord`](elpris_types::PriceRecord)s: hourly bucketing, statistics,
//! descending sort and the cheapest charging window search. Nothing in this
//! crate performs I/O or logs; fetching and presentation sit behind the
//! traits in [`ports`].

pub mod error;
pub mod ports;
pub mod pricing;

pub use error::{AnalysisError, Result};
pub use ports::{Clock, FixedClock, PriceSource, StockholmClock};
pub use pricing::{
    ChargingWindow, PriceSummary, bucketize_if_quarter_hourly, find_cheapest_window,
    group_by_clock_hour, max_price, mean_price, min_price, records_on, sort_descending, summarize,
};
