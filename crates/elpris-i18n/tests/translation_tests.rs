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

use elpris_i18n::{FluentArgs, I18n, Language};
use fluent::fluent_args;

/// List of all translation keys that must exist in all languages
const REQUIRED_KEYS: &[&str] = &[
    // Header
    "welcome",
    "selected-zone",
    "selected-date",
    // Summary
    "summary-max",
    "summary-min",
    "summary-mean",
    // Sorted listing
    "sorted-heading",
    "sorted-line",
    // Charging
    "charging-heading",
    "charging-start",
    "charging-start-on-date",
    "charging-mean",
    "charging-insufficient",
    "tomorrow-unpublished",
    // Errors
    "no-data",
    "error-fetch",
];

fn dummy_args() -> FluentArgs<'static> {
    fluent_args![
        "zone" => "SE3",
        "city" => "Stockholm",
        "date" => "2025-01-15",
        "period" => "13-14",
        "price" => "42,17",
        "hours" => 4,
        "available" => 3,
        "time" => "02:00",
        "reason" => "timeout"
    ]
}

fn missing_keys(language: Language) -> Vec<&'static str> {
    let i18n = I18n::new(language).unwrap();
    let args = dummy_args();

    REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| i18n.format(key, Some(&args)).is_err())
        .collect()
}

#[test]
fn test_swedish_translations_complete() {
    let missing = missing_keys(Language::Swedish);
    assert!(missing.is_empty(), "Missing Swedish keys: {missing:?}");
}

#[test]
fn test_english_translations_complete() {
    let missing = missing_keys(Language::English);
    assert!(missing.is_empty(), "Missing English keys: {missing:?}");
}

#[test]
fn test_languages_differ() {
    let sv = I18n::new(Language::Swedish).unwrap();
    let en = I18n::new(Language::English).unwrap();

    for key in ["welcome", "sorted-heading", "tomorrow-unpublished"] {
        assert_ne!(sv.get(key).unwrap(), en.get(key).unwrap(), "{key}");
    }
}

#[test]
fn test_swedish_report_lines() {
    let i18n = I18n::new(Language::Swedish).unwrap();

    assert_eq!(i18n.get("welcome").unwrap(), "--Välkommen till Elpriskollen--");
    assert_eq!(
        i18n.format(
            "summary-max",
            Some(&fluent_args!["period" => "17-18", "price" => "123,40"])
        )
        .unwrap(),
        "Högsta pris: 17-18 123,40 öre"
    );
    assert_eq!(
        i18n.format("charging-start", Some(&fluent_args!["time" => "02:00"]))
            .unwrap(),
        "Påbörja laddning kl 02:00"
    );
    assert_eq!(
        i18n.format("charging-mean", Some(&fluent_args!["price" => "8,25"]))
            .unwrap(),
        "Medelpris för fönster: 8,25 öre"
    );
}

#[test]
fn test_numeric_arguments_render_plainly() {
    let i18n = I18n::new(Language::English).unwrap();
    let text = i18n
        .format(
            "charging-insufficient",
            Some(&fluent_args!["hours" => 8, "available" => 3]),
        )
        .unwrap();

    assert_eq!(
        text,
        "Too few hourly prices for a window of 8 hours (only 3 available)"
    );
}
