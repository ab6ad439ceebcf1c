// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Structural view of the target type.
//!
//! The host compiler owns the real syntax tree; generation only needs the
//! slice of it modeled here: the type's kind, and an ordered field list with
//! name, declared type name, and modifier flags. Field order is declaration
//! order and determines the order of generated statements, so it must be
//! preserved by whoever builds the descriptor.

/// Prefix marking compiler-synthesized members, which never take part in
/// generation.
pub const SYNTHETIC_PREFIX: char = '$';

/// Kind of the annotated type.
///
/// Only [`Class`](ClassKind::Class) and [`Enum`](ClassKind::Enum) support
/// generation; the other kinds are rejected with an error diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// A concrete class with constructible instances.
    Class,
    /// An enum type.
    Enum,
    /// An interface; not constructible, rejected.
    Interface,
    /// An annotation type; rejected.
    Annotation,
}

impl ClassKind {
    /// Whether a factory method can be generated for this kind.
    #[must_use]
    pub fn supports_generation(self) -> bool {
        matches!(self, Self::Class | Self::Enum)
    }
}

/// Modifier flags relevant to field eligibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// The member is static.
    pub is_static: bool,
    /// The member is final.
    pub is_final: bool,
}

/// One data member of the target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier as declared. Also the base spelling for column
    /// lookups; hosts with a column-rename facility substitute the renamed
    /// spelling here.
    pub name: String,

    /// Declared type name, used to select the typed row accessor
    /// (`getString`, `getInteger`, ...). May be empty for types the host
    /// cannot name; the binding stays lenient in that case.
    pub type_name: String,

    /// Modifier flags.
    pub modifiers: Modifiers,

    /// Host-marked exclusion, for member kinds the flag model cannot
    /// express (e.g. an explicit skip attribute).
    pub excluded: bool,
}

impl FieldDescriptor {
    /// Build a plain instance field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: Modifiers::default(),
            excluded: false,
        }
    }

    /// Whether this field takes part in generation.
    ///
    /// Synthetic (`$`-prefixed), static, final, and host-excluded members
    /// are filtered out.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        !self.name.starts_with(SYNTHETIC_PREFIX)
            && !self.modifiers.is_static
            && !self.modifiers.is_final
            && !self.excluded
    }
}

/// The annotated type, as read from the host compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Type name; also the return type of the generated method.
    pub name: String,
    /// Kind of the type.
    pub kind: ClassKind,
    /// All declared fields, in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    /// Build a descriptor with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
        }
    }

    /// Eligible fields in declaration order.
    pub fn eligible_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_eligible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, "String")
    }

    #[test]
    fn only_class_and_enum_support_generation() {
        assert!(ClassKind::Class.supports_generation());
        assert!(ClassKind::Enum.supports_generation());
        assert!(!ClassKind::Interface.supports_generation());
        assert!(!ClassKind::Annotation.supports_generation());
    }

    #[test]
    fn plain_field_is_eligible() {
        assert!(field("name").is_eligible());
    }

    #[test]
    fn synthetic_prefix_excludes_field() {
        assert!(!field("$jacocoData").is_eligible());
    }

    #[test]
    fn static_and_final_exclude_field() {
        let mut stat = field("COUNT");
        stat.modifiers.is_static = true;
        assert!(!stat.is_eligible());

        let mut fin = field("fixed");
        fin.modifiers.is_final = true;
        assert!(!fin.is_eligible());
    }

    #[test]
    fn host_exclusion_is_honored() {
        let mut f = field("secret");
        f.excluded = true;
        assert!(!f.is_eligible());
    }

    #[test]
    fn eligible_fields_preserve_declaration_order() {
        let mut class = ClassDescriptor::new("User", ClassKind::Class);
        class.fields.push(field("b"));
        class.fields.push(field("$skip"));
        class.fields.push(field("a"));

        let names: Vec<&str> = class.eligible_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
