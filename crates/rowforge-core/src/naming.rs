// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

//! Naming transforms shared by every generator stage.
//!
//! Both transforms use pure ASCII semantics; no locale-specific casing is
//! ever applied. They are the normative rules for accessor names and derived
//! column spellings, so host adapters must reuse them rather than substitute
//! a word-boundary casing heuristic.

/// Upper-case the first character of an identifier.
///
/// Empty input is returned unchanged; otherwise the first character is
/// ASCII-upper-cased and the remainder is untouched.
///
/// ```
/// use rowforge_core::capitalize_first;
///
/// assert_eq!(capitalize_first(""), "");
/// assert_eq!(capitalize_first("a"), "A");
/// assert_eq!(capitalize_first("Name"), "Name");
/// assert_eq!(capitalize_first("userName"), "UserName");
/// ```
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Derive the lower-underscored spelling of an identifier.
///
/// An underscore is inserted immediately before every ASCII upper-case
/// letter, then the whole result is lower-cased. A name with no upper-case
/// letters comes back equal to the input.
///
/// The rule is literal, not a word-boundary heuristic: every upper-case
/// letter gets its own underscore, so `"URL"` becomes `"_u_r_l"`.
///
/// ```
/// use rowforge_core::snake_variant;
///
/// assert_eq!(snake_variant("id"), "id");
/// assert_eq!(snake_variant("userName"), "user_name");
/// assert_eq!(snake_variant("URL"), "_u_r_l");
/// ```
#[must_use]
pub fn snake_variant(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// The column-name spellings tried for one field.
///
/// Pairs the declared field name with its [`snake_variant`] form. When both
/// spellings coincide only one lookup is emitted, so no duplicate guard
/// statement ever appears in the generated body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingVariant {
    /// The field name exactly as declared.
    pub original: String,
    /// The lower-underscored spelling derived from `original`.
    pub derived: String,
}

impl NamingVariant {
    /// Compute the variant pair for a declared field name.
    #[must_use]
    pub fn of(name: &str) -> Self {
        Self {
            original: name.to_string(),
            derived: snake_variant(name),
        }
    }

    /// Whether the derived spelling collapses into the declared one.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.original == self.derived
    }

    /// The distinct spellings to try, declared name strictly first.
    #[must_use]
    pub fn spellings(&self) -> Vec<&str> {
        if self.is_single() {
            vec![&self.original]
        } else {
            vec![&self.original, &self.derived]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_empty_is_identity() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_first_single_char() {
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first("Z"), "Z");
    }

    #[test]
    fn capitalize_first_is_idempotent_on_capitalized() {
        assert_eq!(capitalize_first("Name"), "Name");
        assert_eq!(capitalize_first(&capitalize_first("name")), "Name");
    }

    #[test]
    fn capitalize_first_leaves_remainder_untouched() {
        assert_eq!(capitalize_first("userName"), "UserName");
        assert_eq!(capitalize_first("iD"), "ID");
    }

    #[test]
    fn snake_variant_lowercase_is_identity() {
        assert_eq!(snake_variant("id"), "id");
        assert_eq!(snake_variant("already_snake"), "already_snake");
    }

    #[test]
    fn snake_variant_camel_case() {
        assert_eq!(snake_variant("userName"), "user_name");
        assert_eq!(snake_variant("createdAtTime"), "created_at_time");
    }

    #[test]
    fn snake_variant_underscores_every_uppercase_letter() {
        // Literal per-letter rule, deliberately not a word-boundary split.
        assert_eq!(snake_variant("URL"), "_u_r_l");
        assert_eq!(snake_variant("HTTPCode"), "_h_t_t_p_code");
    }

    #[test]
    fn snake_variant_keeps_digits() {
        assert_eq!(snake_variant("getI64"), "get_i64");
        assert_eq!(snake_variant("v2Tag"), "v2_tag");
    }

    #[test]
    fn variant_collapses_when_spellings_match() {
        let v = NamingVariant::of("id");
        assert!(v.is_single());
        assert_eq!(v.spellings(), vec!["id"]);
    }

    #[test]
    fn variant_declared_spelling_comes_first() {
        let v = NamingVariant::of("userName");
        assert!(!v.is_single());
        assert_eq!(v.spellings(), vec!["userName", "user_name"]);
    }
}
