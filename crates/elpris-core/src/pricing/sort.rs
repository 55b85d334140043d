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

use elpris_types::PriceRecord;

/// Copy of `series` ordered from most to least expensive
///
/// The sort is stable: records with equal prices keep their chronological
/// order. The input slice is left untouched.
pub fn sort_descending(series: &[PriceRecord]) -> Vec<PriceRecord> {
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| b.price().total_cmp(&a.price()));
    sorted
}
