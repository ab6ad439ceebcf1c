// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Diagnostic sink for the generation pass.
//!
//! The assembler never panics and never aborts the host's compilation; every
//! anomaly is pushed here and the host decides how to surface it. Two
//! severities exist: an error means no method was generated, a warning means
//! generation was deliberately skipped.

use std::fmt;

use thiserror::Error;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Generation did not occur; the host should report and continue.
    Error,
    /// Generation was skipped; not fatal.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// One reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{severity}: {message}")]
pub struct Diagnostic {
    /// Severity of the report.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

/// Ordered collection of diagnostics from one generation pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    /// Report a warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    /// All diagnostics, in report order.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Error diagnostics only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Warning diagnostics only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Whether any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether nothing at all was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
