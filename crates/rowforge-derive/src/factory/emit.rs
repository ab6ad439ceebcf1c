// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Token emission.
//!
//! Translates the core's assembled method into Rust tokens. Names cross the
//! host boundary through the core's own snake conversion (`getColumnIndex`
//! becomes `get_column_index`, `getI64` becomes `get_i64`), so the accessor
//! convention stays a single source of truth. The IR mutator call becomes a
//! direct field assignment, Rust's setter convention.

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use rowforge_core::{
    Diagnostics, EXISTENCE_CHECK, GenConfig, GeneratedMethod, GuardStatement, METHOD_NAME,
    MethodLookup, PARAM_NAME, RETURN_VAR, assemble, snake_variant,
};

use super::parse::{FactoryDef, FactoryField};

/// Generate the `impl` block with the factory method.
pub fn generate(def: &FactoryDef) -> TokenStream {
    let mut diagnostics = Diagnostics::new();
    let class = def.descriptor();
    let config = GenConfig {
        emit_uniqueness_annotation: def.unique,
    };

    // A derive macro cannot see sibling impl blocks, so the existing-method
    // lookup always reports NotExists in this host.
    let Some(method) = assemble(
        &class,
        &path_display(&def.source),
        MethodLookup::NotExists,
        &config,
        &mut diagnostics,
    ) else {
        return diagnostics
            .errors()
            .map(|d| syn::Error::new_spanned(&def.ident, d.to_string()).to_compile_error())
            .collect();
    };

    method_tokens(def, &method)
}

fn method_tokens(def: &FactoryDef, method: &GeneratedMethod) -> TokenStream {
    let target = &def.ident;
    let row_ty = &def.source;
    let fn_name = ident(&snake_variant(METHOD_NAME));
    let row = ident(PARAM_NAME);
    let rt = ident(RETURN_VAR);

    let by_column_base: HashMap<String, &FactoryField> = def
        .fields
        .iter()
        .map(|field| (field.column_base(), field))
        .collect();
    let guards: Vec<TokenStream> = method
        .statements
        .iter()
        .filter_map(|statement| guard_tokens(&by_column_base, statement))
        .collect();

    // No guards means the binding never mutates, so drop the `mut`.
    let alloc = if guards.is_empty() {
        quote! { let #rt = <Self as ::core::default::Default>::default(); }
    } else {
        quote! { let mut #rt = <Self as ::core::default::Default>::default(); }
    };

    let must_use = method.unique_return.then(|| quote! { #[must_use] });
    let doc = format!(
        "Builds a `{target}` from a `{row}` row, skipping absent columns.\n\n\
         Generated by the `RowFactory` derive; do not edit.",
        row = path_display(&def.source)
    );

    quote! {
        impl #target {
            #[doc = #doc]
            #must_use
            pub fn #fn_name(#row: &#row_ty) -> Self {
                #alloc
                #(#guards)*
                #rt
            }
        }
    }
}

/// One guarded assignment.
///
/// The existence check and the value lookup use the same column literal the
/// core bound; `Option` fields wrap the looked-up value in `Some` so an
/// absent column leaves the `Default` value (`None`) untouched.
fn guard_tokens(
    fields: &HashMap<String, &FactoryField>,
    statement: &GuardStatement,
) -> Option<TokenStream> {
    let binding = &statement.binding;
    let field = fields.get(&binding.field)?;

    let target = &field.ident;
    let row = ident(PARAM_NAME);
    let rt = ident(RETURN_VAR);
    let check = ident(&snake_variant(EXISTENCE_CHECK));
    let getter = ident(&snake_variant(&binding.getter));
    let column = &binding.column;

    let lookup = quote! { #row.#getter(#column) };
    let value = if field.is_option() {
        quote! { ::core::option::Option::Some(#lookup) }
    } else {
        lookup
    };

    Some(quote! {
        if #row.#check(#column) >= 0 {
            #rt.#target = #value;
        }
    })
}

fn ident(name: &str) -> proc_macro2::Ident {
    format_ident!("{}", name)
}

fn path_display(path: &syn::Path) -> String {
    quote!(#path).to_string().replace(' ', "")
}
