// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Proc-macro adapter for rowforge.
//!
//! This crate is the Rust-host side of the generator: it parses the derive
//! input into the host-neutral descriptor from `rowforge-core`, runs the
//! core assembler, and translates the assembled method into Rust tokens.
//! All policy (field eligibility, naming variants, guard shape, statement
//! order) lives in the core; this crate only adapts it to `syn`/`quote`.
//!
//! Most users should depend on `rowforge`, which re-exports the macro.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod factory;

use proc_macro::TokenStream;

/// Derive macro generating a `convert_from_row` factory for a struct.
///
/// For every eligible field the factory tries up to two column spellings
/// (the declared name and its lower-underscored variant) against the row
/// source and silently skips columns the row does not carry. The target
/// type must implement [`Default`].
///
/// # Container attributes
///
/// | Attribute | Required | Description |
/// |-----------|----------|-------------|
/// | `source = "path::To::Row"` | **Yes** | Row-source type of the sole parameter |
/// | `unique` | No | Mark the factory `#[must_use]` |
///
/// # Field attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[row_factory(column = "userName")]` | Override the column base name |
/// | `#[row_factory(skip)]` | Exclude the field from generation |
///
/// # Row-source contract
///
/// The row type is an external collaborator and only needs to expose, by
/// convention, `get_column_index(&str) -> i32` (negative when the column is
/// absent) plus one typed accessor per mapped field type, named `get_` +
/// the lower-underscored type name (`get_string`, `get_i64`, ...).
///
/// # Example
///
/// ```rust,ignore
/// use rowforge::RowFactory;
///
/// #[derive(Default, RowFactory)]
/// #[row_factory(source = "my_db::Row")]
/// pub struct User {
///     pub id: i64,
///     #[row_factory(column = "userName")]
///     pub user_name: String,
///     #[row_factory(skip)]
///     pub password_hash: String,
/// }
///
/// // Generated:
/// // impl User {
/// //     pub fn convert_from_row(row: &my_db::Row) -> Self { ... }
/// // }
/// ```
#[proc_macro_derive(RowFactory, attributes(row_factory))]
pub fn derive_row_factory(input: TokenStream) -> TokenStream {
    factory::derive(input)
}
