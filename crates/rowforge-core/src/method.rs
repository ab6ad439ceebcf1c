// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Method assembly.
//!
//! The assembler is the decision point of the whole pass. It validates
//! applicability, consults the host's existing-method lookup, and only then
//! builds the factory body: allocate the instance, append one guarded
//! assignment per naming variant per eligible field, return the instance.
//!
//! Outcomes are total; exactly one of four things happens per call:
//!
//! - not a class/enum: error diagnostic, no method;
//! - method already generated by a previous pass: silent no-op;
//! - method written by the user: warning, no method;
//! - otherwise: a [`GeneratedMethod`] tagged with generator provenance.

use crate::{
    binding::AccessorBinding,
    descriptor::ClassDescriptor,
    diagnostics::Diagnostics,
    guard::GuardStatement,
    naming::NamingVariant,
    provenance::{MethodLookup, Origin},
};

/// Fixed name of the generated method.
pub const METHOD_NAME: &str = "convertFromRow";

/// Fixed name of the row-source parameter.
pub const PARAM_NAME: &str = "row";

/// Fixed name of the local holding the instance under construction.
pub const RETURN_VAR: &str = "rt";

/// Row method probed to decide whether a column exists. Returns a negative
/// index when it does not.
pub const EXISTENCE_CHECK: &str = "getColumnIndex";

/// Explicit configuration for one assembly call.
///
/// Passed in by the host rather than read from ambient state, so two calls
/// with the same inputs always produce the same output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenConfig {
    /// Mark the return type with a uniqueness annotation, telling callers
    /// the factory hands out a fresh, unaliased instance.
    pub emit_uniqueness_annotation: bool,
}

/// The assembled factory method, immutable once built.
///
/// Hosts translate this into their own tree representation;
/// [`render`](GeneratedMethod::render) gives the canonical textual shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
    /// Target type name; also the return type.
    pub return_type: String,
    /// Fully qualified row-source type of the sole parameter.
    pub row_type: String,
    /// Guarded assignments in field-then-variant order.
    pub statements: Vec<GuardStatement>,
    /// Whether the return type carries the uniqueness marker.
    pub unique_return: bool,
    /// Provenance tag, always [`Origin::Generator`].
    pub origin: Origin,
}

/// Assemble the factory method for one class.
///
/// Returns `None` when generation is rejected or skipped; the reason, if
/// any, lands in `diagnostics`. The statement order inside the produced
/// method is an observable contract: fields in declaration order, and for
/// each field the declared-name spelling strictly before the derived one.
pub fn assemble(
    class: &ClassDescriptor,
    row_type: &str,
    lookup: MethodLookup,
    config: &GenConfig,
    diagnostics: &mut Diagnostics,
) -> Option<GeneratedMethod> {
    if !class.kind.supports_generation() {
        diagnostics.error(format!(
            "{METHOD_NAME} is only supported on a class or enum"
        ));
        return None;
    }

    match lookup {
        MethodLookup::ExistsByGenerator => return None,
        MethodLookup::ExistsByUser => {
            diagnostics.warning(format!(
                "Not generating {METHOD_NAME}(): A method with that name already exists"
            ));
            return None;
        }
        MethodLookup::NotExists => {}
    }

    let mut statements = Vec::new();
    for field in class.eligible_fields() {
        let variant = NamingVariant::of(&field.name);
        for spelling in variant.spellings() {
            statements.push(GuardStatement::synthesize(AccessorBinding::bind(
                field, spelling,
            )));
        }
    }

    Some(GeneratedMethod {
        return_type: class.name.clone(),
        row_type: row_type.to_string(),
        statements,
        unique_return: config.emit_uniqueness_annotation,
        origin: Origin::Generator,
    })
}

impl GeneratedMethod {
    /// Canonical textual form of the whole method.
    ///
    /// ```text
    /// public static User convertFromRow(Row row) {
    ///     final User rt = new User();
    ///     if (row.getColumnIndex("id") >= 0) rt.setId(row.getInteger("id"));
    ///     return rt;
    /// }
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let return_type = if self.unique_return {
            format!("@Unique {}", self.return_type)
        } else {
            self.return_type.clone()
        };

        let mut out = format!(
            "public static {return_type} {METHOD_NAME}({} {PARAM_NAME}) {{\n",
            self.row_type
        );
        out.push_str(&format!(
            "    final {0} {RETURN_VAR} = new {0}();\n",
            self.return_type
        ));
        for statement in &self.statements {
            out.push_str("    ");
            out.push_str(&statement.render());
            out.push('\n');
        }
        out.push_str(&format!("    return {RETURN_VAR};\n}}"));
        out
    }
}
