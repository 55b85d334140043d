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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Swedish electricity price areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceZone {
    /// Northern Sweden (Luleå)
    Se1,
    /// Northern central Sweden (Sundsvall)
    Se2,
    /// Southern central Sweden (Stockholm)
    Se3,
    /// Southern Sweden (Malmö)
    Se4,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown price zone '{0}', expected one of SE1, SE2, SE3, SE4")]
pub struct ZoneParseError(pub String);

impl PriceZone {
    /// List all price zones
    pub const ALL: [PriceZone; 4] = [Self::Se1, Self::Se2, Self::Se3, Self::Se4];

    /// Zone code as used by Nord Pool and the price API ("SE1".."SE4")
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Se1 => "SE1",
            Self::Se2 => "SE2",
            Self::Se3 => "SE3",
            Self::Se4 => "SE4",
        }
    }

    /// Reference city of the zone
    #[must_use]
    pub fn city(&self) -> &'static str {
        match self {
            Self::Se1 => "Luleå",
            Self::Se2 => "Sundsvall",
            Self::Se3 => "Stockholm",
            Self::Se4 => "Malmö",
        }
    }
}

impl fmt::Display for PriceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PriceZone {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SE1" => Ok(Self::Se1),
            "SE2" => Ok(Self::Se2),
            "SE3" => Ok(Self::Se3),
            "SE4" => Ok(Self::Se4),
            _ => Err(ZoneParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_from_str_is_case_insensitive() {
        assert_eq!("SE3".parse::<PriceZone>().unwrap(), PriceZone::Se3);
        assert_eq!("se1".parse::<PriceZone>().unwrap(), PriceZone::Se1);
        assert_eq!(" Se4 ".parse::<PriceZone>().unwrap(), PriceZone::Se4);
    }

    #[test]
    fn test_unknown_zone_lists_valid_codes() {
        let err = "SE5".parse::<PriceZone>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("SE5"));
        for zone in PriceZone::ALL {
            assert!(message.contains(zone.code()));
        }
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for zone in PriceZone::ALL {
            assert_eq!(zone.to_string().parse::<PriceZone>().unwrap(), zone);
        }
    }

    #[test]
    fn test_serde_uses_upper_case_codes() {
        assert_eq!(serde_json::to_string(&PriceZone::Se2).unwrap(), "\"SE2\"");
        let zone: PriceZone = serde_json::from_str("\"SE4\"").unwrap();
        assert_eq!(zone, PriceZone::Se4);
    }
}
