// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Host-neutral generation model for the rowforge row-factory derive.
//!
//! This crate knows nothing about proc-macros or any concrete compiler AST.
//! It models a target type as a [`ClassDescriptor`], decides which of its
//! fields qualify for row mapping, derives the column-name spellings to try
//! for each field, and assembles the result into a [`GeneratedMethod`]: a
//! factory procedure that builds an instance of the target type from a keyed
//! row source, skipping columns the row does not carry.
//!
//! The pipeline, leaf to root:
//!
//! 1. [`naming`] — pure string transforms ([`capitalize_first`],
//!    [`snake_variant`]) and the [`NamingVariant`] pair they produce.
//! 2. [`descriptor`] — [`ClassDescriptor`] / [`FieldDescriptor`] and the
//!    eligibility filter (no `$`-prefixed, static, or final members).
//! 3. [`binding`] — [`AccessorBinding`]: one column lookup paired with the
//!    typed getter and target mutator names.
//! 4. [`guard`] — [`GuardStatement`]: a binding wrapped in a column-existence
//!    check so absent columns are silently skipped.
//! 5. [`method`] — [`assemble`]: applicability and duplicate checks, then the
//!    full method body in field-then-variant order.
//!
//! Host adapters (such as the `rowforge-derive` proc-macro) translate the
//! assembled method into whatever representation their compiler requires.
//! [`GeneratedMethod::render`] additionally produces the canonical textual
//! form, which is the reference shape for all adapters.
//!
//! Generation is a pure, synchronous, single-pass transform. It holds no
//! shared state between invocations; for a given descriptor, configuration,
//! and lookup result the output is fully deterministic, with statement order
//! fixed by field declaration order.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub mod binding;
pub mod descriptor;
pub mod diagnostics;
pub mod guard;
pub mod method;
pub mod naming;
pub mod provenance;

pub use binding::AccessorBinding;
pub use descriptor::{ClassDescriptor, ClassKind, FieldDescriptor, Modifiers, SYNTHETIC_PREFIX};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use guard::GuardStatement;
pub use method::{
    EXISTENCE_CHECK, GenConfig, GeneratedMethod, METHOD_NAME, PARAM_NAME, RETURN_VAR, assemble,
};
pub use naming::{NamingVariant, capitalize_first, snake_variant};
pub use provenance::{MethodLookup, Origin};
