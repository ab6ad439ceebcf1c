// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Column-existence guarding.
//!
//! This is the failure-tolerance policy of the generated code: a row lacking
//! a column is a silent no-op, never an error, so the factory keeps working
//! across schema drift between the row source and the target type.

use crate::{
    binding::AccessorBinding,
    method::{EXISTENCE_CHECK, PARAM_NAME, RETURN_VAR},
    provenance::Origin,
};

/// One guarded assignment in the generated body.
///
/// Equivalent to:
///
/// ```text
/// if (row.getColumnIndex("col") >= 0) rt.setField(row.getType("col"));
/// ```
///
/// There is no `else` branch. The existence check and the value lookup use
/// the same column literal carried by the binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardStatement {
    /// The binding this guard protects.
    pub binding: AccessorBinding,
    /// Provenance tag, always [`Origin::Generator`] for synthesized
    /// statements.
    pub origin: Origin,
}

impl GuardStatement {
    /// Wrap a binding in its existence guard.
    #[must_use]
    pub fn synthesize(binding: AccessorBinding) -> Self {
        Self {
            binding,
            origin: Origin::Generator,
        }
    }

    /// Canonical textual form of the statement.
    #[must_use]
    pub fn render(&self) -> String {
        let b = &self.binding;
        format!(
            "if ({row}.{check}(\"{col}\") >= 0) {rt}.{setter}({row}.{getter}(\"{col}\"));",
            row = PARAM_NAME,
            check = EXISTENCE_CHECK,
            col = b.column,
            rt = RETURN_VAR,
            setter = b.setter,
            getter = b.getter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldDescriptor;

    #[test]
    fn guard_is_tagged_with_generator_origin() {
        let field = FieldDescriptor::new("id", "Integer");
        let guard = GuardStatement::synthesize(AccessorBinding::bind(&field, "id"));
        assert_eq!(guard.origin, Origin::Generator);
    }

    #[test]
    fn render_uses_one_column_literal_for_check_and_lookup() {
        let field = FieldDescriptor::new("userName", "String");
        let guard = GuardStatement::synthesize(AccessorBinding::bind(&field, "user_name"));

        assert_eq!(
            guard.render(),
            "if (row.getColumnIndex(\"user_name\") >= 0) \
             rt.setUserName(row.getString(\"user_name\"));"
        );
    }
}
