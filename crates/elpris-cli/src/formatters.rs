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

//! Localized text for the price report

use chrono::{NaiveDate, TimeDelta, Timelike};
use elpris_core::{ChargingWindow, PriceSummary};
use elpris_i18n::{FluentArgs, I18n, I18nError, Language};
use elpris_types::{ChargingDuration, PriceRecord, PriceZone};

type Result<T> = std::result::Result<T, I18nError>;

/// Price in öre/kWh with two decimals and the language's decimal separator
///
/// # Arguments
/// * `sek_per_kwh` - Price in SEK/kWh
/// * `language` - Decides between `12,34` and `12.34`
#[must_use]
pub fn format_ore(sek_per_kwh: f64, language: Language) -> String {
    let text = format!("{:.2}", sek_per_kwh * 100.0);

    match language.decimal_separator() {
        '.' => text,
        separator => text.replace('.', separator.encode_utf8(&mut [0; 4])),
    }
}

/// `HH-HH` for a whole clock hour, `HH:MM-HH:MM` otherwise
#[must_use]
pub fn period_label(record: &PriceRecord) -> String {
    let start = record.interval_start();
    let end = record.interval_end();

    if record.duration() == TimeDelta::hours(1) && start.minute() == 0 {
        format!("{}-{}", start.format("%H"), end.format("%H"))
    } else {
        format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
    }
}

/// Renders report sections through the message catalogue
#[derive(Debug)]
pub struct ReportFormatter<'a> {
    i18n: &'a I18n,
}

impl<'a> ReportFormatter<'a> {
    #[must_use]
    pub fn new(i18n: &'a I18n) -> Self {
        Self { i18n }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.i18n.language()
    }

    fn price(&self, sek_per_kwh: f64) -> String {
        format_ore(sek_per_kwh, self.language())
    }

    /// Banner followed by the selected zone and date
    pub fn header(&self, zone: PriceZone, date: NaiveDate) -> Result<String> {
        let mut args = FluentArgs::new();
        args.set("zone", zone.code());
        args.set("city", zone.city());
        args.set("date", date.to_string());

        Ok([
            self.i18n.get("welcome")?,
            self.i18n.format("selected-zone", Some(&args))?,
            self.i18n.format("selected-date", Some(&args))?,
        ]
        .join("\n"))
    }

    /// Highest, lowest and mean price, one per line
    pub fn summary(&self, summary: &PriceSummary) -> Result<String> {
        let extreme = |key: &str, record: &PriceRecord| {
            let mut args = FluentArgs::new();
            args.set("period", period_label(record));
            args.set("price", self.price(record.price()));
            self.i18n.format(key, Some(&args))
        };

        let mut mean_args = FluentArgs::new();
        mean_args.set("price", self.price(summary.mean));

        Ok([
            extreme("summary-max", &summary.max)?,
            extreme("summary-min", &summary.min)?,
            self.i18n.format("summary-mean", Some(&mean_args))?,
        ]
        .join("\n"))
    }

    /// Heading plus one `period price` line per record, in the given order
    pub fn sorted(&self, records: &[PriceRecord]) -> Result<String> {
        let mut lines = vec![self.i18n.get("sorted-heading")?];

        for record in records {
            let mut args = FluentArgs::new();
            args.set("period", period_label(record));
            args.set("price", self.price(record.price()));
            lines.push(self.i18n.format("sorted-line", Some(&args))?);
        }

        Ok(lines.join("\n"))
    }

    /// When to start charging and what the window costs on average
    ///
    /// The start date is included only when the window begins on a day other
    /// than `requested`, which happens when it runs into tomorrow's prices.
    pub fn charging(
        &self,
        duration: ChargingDuration,
        window: &ChargingWindow<'_>,
        requested: NaiveDate,
    ) -> Result<String> {
        let mut args = FluentArgs::new();
        args.set("hours", duration.hours());
        args.set("price", self.price(window.mean_price()));

        let mut lines = vec![self.i18n.format("charging-heading", Some(&args))?];

        if let Some(start) = window.starts_at() {
            args.set("time", start.format("%H:%M").to_string());
            let key = if start.date_naive() == requested {
                "charging-start"
            } else {
                args.set("date", start.date_naive().to_string());
                "charging-start-on-date"
            };
            lines.push(self.i18n.format(key, Some(&args))?);
        }

        lines.push(self.i18n.format("charging-mean", Some(&args))?);
        Ok(lines.join("\n"))
    }

    pub fn insufficient_data(&self, requested: usize, available: usize) -> Result<String> {
        let mut args = FluentArgs::new();
        args.set("hours", requested);
        args.set("available", available);
        self.i18n.format("charging-insufficient", Some(&args))
    }

    pub fn tomorrow_unpublished(&self) -> Result<String> {
        self.i18n.get("tomorrow-unpublished")
    }

    pub fn no_data(&self, date: NaiveDate) -> Result<String> {
        let mut args = FluentArgs::new();
        args.set("date", date.to_string());
        self.i18n.format("no-data", Some(&args))
    }

    pub fn fetch_error(&self, reason: &str) -> Result<String> {
        let mut args = FluentArgs::new();
        args.set("reason", reason.to_owned());
        self.i18n.format("error-fetch", Some(&args))
    }
}
