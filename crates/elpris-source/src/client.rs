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

//! Blocking client for the elprisetjustnu.se price API

use crate::error::{Result, SourceError};
use anyhow::Context;
use chrono::{DateTime, FixedOffset, NaiveDate};
use elpris_core::PriceSource;
use elpris_types::{PriceRecord, PriceZone};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.elprisetjustnu.se/api/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("elpriskollen/", env!("CARGO_PKG_VERSION"));

/// One entry of the API response; `EUR_per_kWh` and `EXR` are ignored
#[derive(Debug, Deserialize)]
struct ApiPrice {
    #[serde(rename = "SEK_per_kWh")]
    sek_per_kwh: f64,
    time_start: DateTime<FixedOffset>,
    time_end: DateTime<FixedOffset>,
}

impl TryFrom<ApiPrice> for PriceRecord {
    type Error = SourceError;

    fn try_from(api: ApiPrice) -> Result<Self> {
        PriceRecord::new(api.sek_per_kwh, api.time_start, api.time_end).map_err(|source| {
            SourceError::InvalidRecord {
                time_start: api.time_start.to_rfc3339(),
                source,
            }
        })
    }
}

/// Day-ahead prices for one zone and date, as published by elprisetjustnu.se
///
/// Prices for tomorrow are released around 13:00 Swedish time. Until then the
/// API answers 404, which is reported as an empty day rather than an error.
#[derive(Debug, Clone)]
pub struct ElprisetClient {
    client: Client,
    base_url: String,
}

impl ElprisetClient {
    /// Client against the public API with default timeout and user agent
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> ElprisetClientBuilder {
        ElprisetClientBuilder::default()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the daily price file, e.g. `.../prices/2025/01-15_SE3.json`
    #[must_use]
    pub fn url_for(&self, date: NaiveDate, zone: PriceZone) -> String {
        format!(
            "{}/prices/{}_{}.json",
            self.base_url,
            date.format("%Y/%m-%d"),
            zone.code()
        )
    }

    /// Fetch all records published for `date` in `zone`
    ///
    /// # Arguments
    /// * `date` - Calendar day in Swedish local time
    /// * `zone` - Bidding zone
    ///
    /// # Returns
    /// Records in the order the API lists them (chronological), or an empty
    /// vector when the day is not published yet.
    pub fn fetch_day(&self, date: NaiveDate, zone: PriceZone) -> Result<Vec<PriceRecord>> {
        let url = self.url_for(date, zone);
        debug!("Fetching {zone} prices from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| SourceError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("No {zone} prices published for {date} yet");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(SourceError::Status { url, status });
        }

        let body = response.text().map_err(|source| SourceError::Transport {
            url: url.clone(),
            source,
        })?;
        let prices: Vec<ApiPrice> =
            serde_json::from_str(&body).map_err(|source| SourceError::Decode {
                url: url.clone(),
                source,
            })?;

        let records = prices
            .into_iter()
            .map(PriceRecord::try_from)
            .collect::<Result<Vec<_>>>()?;

        info!("Fetched {} {zone} price records for {date}", records.len());
        Ok(records)
    }
}

impl PriceSource for ElprisetClient {
    fn fetch_prices(&self, date: NaiveDate, zone: PriceZone) -> anyhow::Result<Vec<PriceRecord>> {
        self.fetch_day(date, zone)
            .with_context(|| format!("Failed to fetch {zone} prices for {date}"))
    }

    fn name(&self) -> &str {
        "elprisetjustnu.se"
    }
}

/// Configures an [`ElprisetClient`]
#[derive(Debug, Clone)]
pub struct ElprisetClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ElprisetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl ElprisetClientBuilder {
    /// API root without the `/prices/...` suffix; a trailing slash is ignored
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<ElprisetClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(SourceError::Client)?;

        Ok(ElprisetClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_owned(),
        })
    }
}
