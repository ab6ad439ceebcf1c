// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Derive-input parsing.
//!
//! Container attributes (`#[row_factory(source = "...", unique)]`) go
//! through darling; field attributes are marker-style and parsed manually,
//! mirroring how the row column overrides are written at use sites.
//!
//! Parsing ends with [`FactoryDef::descriptor`], which lowers the syn view
//! into the host-neutral `ClassDescriptor` consumed by the core assembler.

use std::collections::HashSet;

use darling::FromDeriveInput;
use rowforge_core::{ClassDescriptor, ClassKind, FieldDescriptor};
use syn::{Attribute, DeriveInput, Field, Ident, Meta, Type};

/// Container attributes parsed from `#[row_factory(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(row_factory), supports(struct_named))]
struct FactoryAttrs {
    ident: Ident,

    /// Row-source type of the generated method's sole parameter.
    ///
    /// Required; there is no meaningful default row type in a host-neutral
    /// build.
    source: syn::Path,

    /// Mark the factory `#[must_use]`, flagging that it returns a fresh
    /// instance that is pointless to discard.
    #[darling(default)]
    unique: bool,
}

/// One struct field with its row-mapping attributes.
#[derive(Debug)]
pub struct FactoryField {
    /// Field identifier.
    pub ident: Ident,

    /// Full declared type.
    pub ty: Type,

    /// Column base-name override from `#[row_factory(column = "...")]`.
    pub column: Option<String>,

    /// Excluded from generation via `#[row_factory(skip)]`.
    pub skip: bool,
}

impl FactoryField {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Panics
    ///
    /// Panics on a tuple-struct field; `supports(struct_named)` rejects
    /// those before this runs.
    pub fn from_field(field: &Field) -> Self {
        let ident = field.ident.clone().expect("named field required");
        let ty = field.ty.clone();

        let mut column = None;
        let mut skip = false;
        for attr in &field.attrs {
            if attr.path().is_ident("row_factory") {
                parse_field_attr(attr, &mut column, &mut skip);
            }
        }

        Self {
            ident,
            ty,
            column,
            skip,
        }
    }

    /// The column base name: the override when present, otherwise the
    /// declared field name. Both naming variants derive from this.
    pub fn column_base(&self) -> String {
        self.column
            .clone()
            .unwrap_or_else(|| self.ident.to_string())
    }

    /// Whether the declared type is `Option<T>`.
    pub fn is_option(&self) -> bool {
        option_inner(&self.ty).is_some()
    }

    /// The type the row accessor is selected from: `T` for `Option<T>`
    /// fields, the declared type otherwise.
    pub fn value_type(&self) -> &Type {
        option_inner(&self.ty).unwrap_or(&self.ty)
    }

    /// Name of the value type's last path segment.
    ///
    /// Non-path types yield an empty string, which the core accepts and
    /// degenerates into a plain `get` accessor.
    pub fn accessor_type_name(&self) -> String {
        if let Type::Path(type_path) = self.value_type()
            && let Some(segment) = type_path.path.segments.last()
        {
            return segment.ident.to_string();
        }
        String::new()
    }
}

/// Unwrap `Option<T>` to `T`, by the last-path-segment heuristic.
fn option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}

/// Parse `#[row_factory(column = "...", skip)]` on a field.
///
/// Unknown identifiers are silently ignored for forward compatibility.
fn parse_field_attr(attr: &Attribute, column: &mut Option<String>, skip: &mut bool) {
    if let Meta::List(meta_list) = &attr.meta {
        let _ = meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                *column = Some(lit.value());
            } else if meta.path.is_ident("skip") {
                *skip = true;
            }
            Ok(())
        });
    }
}

/// Complete parsed derive input.
#[derive(Debug)]
pub struct FactoryDef {
    /// Target struct identifier.
    pub ident: Ident,
    /// Row-source type path.
    pub source: syn::Path,
    /// Uniqueness marker requested.
    pub unique: bool,
    /// All struct fields, in declaration order.
    pub fields: Vec<FactoryField>,
}

impl FactoryDef {
    /// Parse a derive input into a factory definition.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = FactoryAttrs::from_derive_input(input)?;

        let fields: Vec<FactoryField> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => {
                    named.named.iter().map(FactoryField::from_field).collect()
                }
                _ => {
                    return Err(darling::Error::custom("RowFactory requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("RowFactory can only be derived for structs")
                        .with_span(&input.ident),
                );
            }
        };

        // Column bases key the statement-to-field association during
        // emission, so two mapped fields must never share one.
        let mut seen = HashSet::new();
        for field in fields.iter().filter(|f| !f.skip) {
            let base = field.column_base();
            if !seen.insert(base.clone()) {
                return Err(darling::Error::custom(format!(
                    "duplicate column name `{base}`: another field already maps to it"
                ))
                .with_span(&field.ident));
            }
        }

        Ok(Self {
            ident: attrs.ident,
            source: attrs.source,
            unique: attrs.unique,
            fields,
        })
    }

    /// Lower into the host-neutral descriptor.
    ///
    /// Rust structs have no static/final members, so those flags stay
    /// unset; `#[row_factory(skip)]` maps to the descriptor's host
    /// exclusion. The column base name stands in as the declared name, so
    /// naming variants follow any rename.
    pub fn descriptor(&self) -> ClassDescriptor {
        let mut class = ClassDescriptor::new(self.ident.to_string(), ClassKind::Class);
        for field in &self.fields {
            let mut descriptor =
                FieldDescriptor::new(field.column_base(), field.accessor_type_name());
            descriptor.excluded = field.skip;
            class.fields.push(descriptor);
        }
        class
    }
}
