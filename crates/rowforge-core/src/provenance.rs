// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Provenance tagging for safe idempotent re-generation.
//!
//! Everything the assembler synthesizes is tagged with
//! [`Origin::Generator`], and the host's existing-method query reports that
//! tag back through [`MethodLookup`] on the next pass. That is what lets a
//! repeated pass skip silently instead of warning about its own output.

/// Who authored a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Hand-written by the user.
    User,
    /// Produced by this generator.
    Generator,
}

/// Result of the host's existing-method query for the target method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodLookup {
    /// No method with the target name exists; generation proceeds.
    NotExists,
    /// A previous pass of this generator already produced the method;
    /// skipped silently.
    ExistsByGenerator,
    /// The user wrote a method with the target name; skipped with a
    /// warning.
    ExistsByUser,
}
