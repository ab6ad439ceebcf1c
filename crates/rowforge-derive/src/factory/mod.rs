// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! RowFactory derive implementation.

mod emit;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::FactoryDef;

/// Main entry point for the RowFactory derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match FactoryDef::from_derive_input(&input) {
        Ok(def) => emit::generate(&def).into(),
        Err(err) => err.write_errors().into(),
    }
}
