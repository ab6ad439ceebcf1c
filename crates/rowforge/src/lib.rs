// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! # rowforge
//!
//! Derive macro generating a row-to-object factory: given a struct, it
//! synthesizes `convert_from_row`, an associated function that builds an
//! instance from a keyed row source (such as a database result row).
//!
//! The factory looks each field up by column name and tolerates absent
//! columns: every lookup is guarded by an existence check, so a row lacking
//! a column silently leaves the field at its `Default` value instead of
//! failing. For each field up to two column spellings are tried, the
//! declared name first and its lower-underscored variant second, so
//! differently-cased row schemas still populate the object.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowforge::RowFactory;
//!
//! #[derive(Default, RowFactory)]
//! #[row_factory(source = "my_db::Row")]
//! pub struct User {
//!     pub id: i64,
//!
//!     #[row_factory(column = "userName")]
//!     pub user_name: String,
//!
//!     pub note: Option<String>,
//!
//!     #[row_factory(skip)]
//!     pub password_hash: String,
//! }
//!
//! let user = User::convert_from_row(&row);
//! ```
//!
//! The row-source type is an external collaborator: it only needs
//! `get_column_index(&str) -> i32` (negative when absent) and typed
//! accessors named `get_` + the lower-underscored field type
//! (`get_string`, `get_i64`, ...).
//!
//! ## Generation model
//!
//! The naming, eligibility, guarding, and ordering policy lives in
//! `rowforge-core` as a host-neutral model, re-exported here under
//! [`model`] for tooling that wants to inspect or render generation output
//! without going through the macro.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub use rowforge_derive::RowFactory;

/// Host-neutral generation model, re-exported from `rowforge-core`.
pub mod model {
    pub use rowforge_core::{
        AccessorBinding, ClassDescriptor, ClassKind, Diagnostic, Diagnostics, EXISTENCE_CHECK,
        FieldDescriptor, GenConfig, GeneratedMethod, GuardStatement, METHOD_NAME, MethodLookup,
        Modifiers, NamingVariant, Origin, PARAM_NAME, RETURN_VAR, SYNTHETIC_PREFIX, Severity,
        assemble, capitalize_first, snake_variant,
    };
}
