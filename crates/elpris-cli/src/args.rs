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

use chrono::NaiveDate;
use clap::Parser;
use elpris_i18n::Language;
use elpris_types::{ChargingDuration, PriceZone};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "elpriskollen",
    version,
    about = "Swedish electricity spot prices: daily statistics and cheapest charging window",
    long_about = "Fetches day-ahead spot prices for a Swedish price zone and reports the\n\
    highest, lowest and mean price of the day, optionally sorted from most to\n\
    least expensive, and the cheapest contiguous window for charging.\n\
    \nExamples:\n  \
    elpriskollen --zone SE3                      # Today's summary for Stockholm\n  \
    elpriskollen --zone se4 --date 2025-01-15    # A given day in Malmö\n  \
    elpriskollen --zone SE3 --sorted             # Hours by price, most expensive first\n  \
    elpriskollen --zone SE1 --charging 4h        # Cheapest 4-hour charging window",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Price zone (SE1, SE2, SE3, SE4)
    #[arg(
        long,
        value_name = "ZONE",
        long_help = "Swedish price zone, case-insensitive:\n  \
          - SE1: Luleå\n  \
          - SE2: Sundsvall\n  \
          - SE3: Stockholm\n  \
          - SE4: Malmö"
    )]
    pub zone: PriceZone,

    /// Day to report (defaults to today, Swedish time)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// List prices from most to least expensive instead of the summary
    #[arg(long, default_value_t = false)]
    pub sorted: bool,

    /// Find the cheapest charging window of this length
    #[arg(
        long,
        value_name = "2h|4h|8h",
        long_help = "Length of the charging window. The window may run past midnight\n\
          into tomorrow once tomorrow's prices are published (around 13:00)."
    )]
    pub charging: Option<ChargingDuration>,

    /// Output language (sv, en); overrides the configuration file
    #[arg(long, value_name = "sv|en")]
    pub lang: Option<Language>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
