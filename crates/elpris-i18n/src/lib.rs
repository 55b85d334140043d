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

//! Swedish and English message catalogues for the price report

use fluent::{FluentBundle, FluentResource};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use fluent::FluentArgs;

/// Supported languages
///
/// Deserializes through [`Language::from_code`], so config files accept the
/// same spellings as the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(try_from = "String")]
pub enum Language {
    /// Swedish (default)
    #[default]
    #[serde(rename = "sv")]
    Swedish,
    /// English
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// List all supported languages
    pub const ALL: [Language; 2] = [Language::Swedish, Language::English];

    /// Get the language identifier string (e.g., "sv", "en")
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Swedish => "sv",
            Self::English => "en",
        }
    }

    /// Decimal separator used when printing prices
    #[must_use]
    pub fn decimal_separator(&self) -> char {
        match self {
            Self::Swedish => ',',
            Self::English => '.',
        }
    }

    /// Parse language from string code
    ///
    /// # Errors
    ///
    /// Returns `I18nError::UnsupportedLanguage` if the language code is not supported.
    pub fn from_code(code: &str) -> Result<Self, I18nError> {
        match code.trim().to_lowercase().as_str() {
            "sv" | "se" | "swedish" | "svenska" => Ok(Self::Swedish),
            "en" | "english" => Ok(Self::English),
            _ => Err(I18nError::UnsupportedLanguage(code.to_owned())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Language {
    type Error = I18nError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Translation errors
#[derive(Debug, Error)]
pub enum I18nError {
    /// Translation key not found
    #[error("Translation key not found: {0}")]
    KeyNotFound(String),

    /// Failed to load translation resource
    #[error("Failed to load translation resource: {0}")]
    LoadError(String),

    /// Unsupported language
    #[error("Unsupported language: {0}, expected sv or en")]
    UnsupportedLanguage(String),

    /// Formatting error
    #[error("Failed to format translation: {0}")]
    FormatError(String),
}

/// Message catalogue for one language
pub struct I18n {
    bundle: FluentBundle<FluentResource>,
    language: Language,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("language", &self.language)
            .field("bundle", &"<FluentBundle>")
            .finish()
    }
}

impl I18n {
    /// Create a new i18n instance for the specified language
    ///
    /// # Errors
    ///
    /// Returns `I18nError::LoadError` if the embedded catalogue fails to parse.
    pub fn new(language: Language) -> Result<Self, I18nError> {
        let lang_code = language.code();

        let resource = FluentResource::try_new(Self::main_ftl(language).to_owned())
            .map_err(|(_, e)| {
                I18nError::LoadError(format!("Failed to parse {lang_code}/main.ftl: {e:?}"))
            })?;

        let lang_id: LanguageIdentifier = lang_code
            .parse()
            .map_err(|e| I18nError::LoadError(format!("Invalid language ID: {e}")))?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        // Terminal output; Unicode isolation marks would show up as noise
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|e| I18nError::LoadError(format!("Failed to add resource: {e:?}")))?;

        Ok(Self { bundle, language })
    }

    fn main_ftl(language: Language) -> &'static str {
        match language {
            Language::Swedish => include_str!("../locales/sv/main.ftl"),
            Language::English => include_str!("../locales/en/main.ftl"),
        }
    }

    /// Get a translated string by key
    ///
    /// # Errors
    ///
    /// Returns `I18nError::KeyNotFound` if the translation key is not found.
    pub fn get(&self, key: &str) -> Result<String, I18nError> {
        self.format(key, None)
    }

    /// Format a translated string with arguments
    ///
    /// # Errors
    ///
    /// Returns `I18nError::KeyNotFound` if the translation key is not found.
    /// Returns `I18nError::FormatError` if formatting fails.
    pub fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Result<String, I18nError> {
        let pattern = self
            .bundle
            .get_message(key)
            .and_then(|msg| msg.value())
            .ok_or_else(|| I18nError::KeyNotFound(key.to_owned()))?;

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            return Err(I18nError::FormatError(format!(
                "Formatting errors in {key}: {errors:?}"
            )));
        }

        Ok(value.into_owned())
    }

    /// Get the current language
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}
