// SPDX-License-Identifier: PMPL-1.0-or-later

//! Domain error types.
//!
//! Loaders and the binary wrap these in `anyhow` with file context.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("no translation for key '{key}' in '{lang}' or the default language")]
    MissingTranslationKey { lang: String, key: String },
    #[error("unsupported language code '{0}' (expected one of en, hi, ta, te)")]
    UnsupportedLanguage(String),
    #[error("{name} ('{code}') has no translation yet (expected one of en, hi, ta, te)")]
    UntranslatedLanguage { code: String, name: &'static str },
}

/// A single registration field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Required,
    NotANumber,
    UnknownChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: crate::registration::Field,
    pub problem: FieldProblem,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("registration incomplete: {} field(s) need attention", .0.len())]
    IncompleteRegistration(Vec<FieldError>),
}

impl RegistrationError {
    pub fn fields(&self) -> &[FieldError] {
        match self {
            RegistrationError::IncompleteRegistration(fields) => fields,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unsupported catalog extension for {0} (use .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("catalog has no {0}")]
    Empty(&'static str),
}
