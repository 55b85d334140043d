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

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============= Price Records =============

/// Errors raised while constructing a [`PriceRecord`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("price must be a finite number, got {0}")]
    NonFinitePrice(f64),

    #[error("interval must end after it starts: {start} .. {end}")]
    EmptyInterval {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
}

/// A single priced interval (one hour or one 15-minute quarter)
///
/// Records are immutable once constructed. The constructor enforces a
/// finite price and `interval_start < interval_end`; nothing else about
/// neighbouring records is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRecord")]
pub struct PriceRecord {
    /// Spot price (SEK/kWh)
    price: f64,

    /// Start of the interval, in the zone's local offset
    interval_start: DateTime<FixedOffset>,

    /// End of the interval (exclusive)
    interval_end: DateTime<FixedOffset>,
}

impl PriceRecord {
    pub fn new(
        price: f64,
        interval_start: DateTime<FixedOffset>,
        interval_end: DateTime<FixedOffset>,
    ) -> Result<Self, RecordError> {
        if !price.is_finite() {
            return Err(RecordError::NonFinitePrice(price));
        }
        if interval_start >= interval_end {
            return Err(RecordError::EmptyInterval {
                start: interval_start,
                end: interval_end,
            });
        }

        Ok(Self {
            price,
            interval_start,
            interval_end,
        })
    }

    /// Price in SEK/kWh
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Price in öre/kWh (1 SEK = 100 öre)
    #[must_use]
    pub fn price_ore(&self) -> f64 {
        self.price * 100.0
    }

    #[must_use]
    pub fn interval_start(&self) -> DateTime<FixedOffset> {
        self.interval_start
    }

    #[must_use]
    pub fn interval_end(&self) -> DateTime<FixedOffset> {
        self.interval_end
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.interval_end - self.interval_start
    }

    /// Calendar date the interval starts on, in the record's own offset
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.interval_start.date_naive()
    }
}

/// Unchecked wire shape, validated through [`PriceRecord::new`]
#[derive(Deserialize)]
struct RawPriceRecord {
    price: f64,
    interval_start: DateTime<FixedOffset>,
    interval_end: DateTime<FixedOffset>,
}

impl TryFrom<RawPriceRecord> for PriceRecord {
    type Error = RecordError;

    fn try_from(raw: RawPriceRecord) -> Result<Self, Self::Error> {
        Self::new(raw.price, raw.interval_start, raw.interval_end)
    }
}
