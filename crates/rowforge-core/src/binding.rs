// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Per-field accessor and mutator binding.
//!
//! A binding is purely descriptive data: it names the typed row getter, the
//! column literal it is called with, and the mutator on the target instance
//! that receives the value. The guard synthesizer consumes it; nothing here
//! executes anything.

use crate::{descriptor::FieldDescriptor, naming::capitalize_first};

/// One column lookup paired with its target assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorBinding {
    /// Declared name of the field the assignment targets.
    pub field: String,

    /// Column-name literal, used both for the existence check and the value
    /// lookup. One binding never mixes naming variants.
    pub column: String,

    /// Typed row getter: `"get"` + capitalized declared type name.
    ///
    /// An empty declared type name degenerates to plain `"get"`; that is
    /// accepted as-is rather than treated as an error.
    pub getter: String,

    /// Target mutator: `"set"` + capitalized field name.
    pub setter: String,
}

impl AccessorBinding {
    /// Bind one field to one column spelling.
    #[must_use]
    pub fn bind(field: &FieldDescriptor, column: &str) -> Self {
        Self {
            field: field.name.clone(),
            column: column.to_string(),
            getter: format!("get{}", capitalize_first(&field.type_name)),
            setter: format!("set{}", capitalize_first(&field.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getter_and_setter_follow_bean_conventions() {
        let field = FieldDescriptor::new("userName", "String");
        let binding = AccessorBinding::bind(&field, "user_name");

        assert_eq!(binding.field, "userName");
        assert_eq!(binding.column, "user_name");
        assert_eq!(binding.getter, "getString");
        assert_eq!(binding.setter, "setUserName");
    }

    #[test]
    fn setter_derives_from_declared_name_not_column() {
        let field = FieldDescriptor::new("createdAt", "Instant");
        let binding = AccessorBinding::bind(&field, "created_at");
        assert_eq!(binding.setter, "setCreatedAt");
        assert_eq!(binding.getter, "getInstant");
    }

    #[test]
    fn empty_type_name_degenerates_to_plain_get() {
        let field = FieldDescriptor::new("blob", "");
        let binding = AccessorBinding::bind(&field, "blob");
        assert_eq!(binding.getter, "get");
    }
}
