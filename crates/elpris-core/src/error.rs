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

//! Error types for the analytics engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no price data available")]
    EmptyInput,

    #[error("cannot form a {requested}h window from {available} hourly prices")]
    InsufficientData { requested: usize, available: usize },

    #[error("charging window must span at least one hour")]
    ZeroLengthWindow,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
