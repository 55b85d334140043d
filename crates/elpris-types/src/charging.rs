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

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported charging session lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargingDuration {
    TwoHours,
    FourHours,
    EightHours,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid charging duration '{0}', expected 2h, 4h or 8h")]
pub struct DurationParseError(pub String);

impl ChargingDuration {
    pub const ALL: [ChargingDuration; 3] = [Self::TwoHours, Self::FourHours, Self::EightHours];

    /// Number of consecutive hourly blocks in the window
    #[must_use]
    pub fn hours(&self) -> usize {
        match self {
            Self::TwoHours => 2,
            Self::FourHours => 4,
            Self::EightHours => 8,
        }
    }
}

impl fmt::Display for ChargingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl FromStr for ChargingDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2h" => Ok(Self::TwoHours),
            "4h" => Ok(Self::FourHours),
            "8h" => Ok(Self::EightHours),
            _ => Err(DurationParseError(s.to_owned())),
        }
    }
}
