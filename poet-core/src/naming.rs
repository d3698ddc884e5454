//! Identifier cleaning rules.
//!
//! Raw names handed to the spec builders are arbitrary strings (schema keys,
//! JSON property names, user input). A [`NamingConvention`] turns any of them
//! into a valid identifier for the target language.

use crate::utils::{to_camel_case, to_pascal_case};

/// Language-specific naming conventions.
///
/// Both cleaning functions are total: every input, including the empty string
/// and reserved words, maps to a valid identifier.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a raw name to a type-style name (e.g., "hello-world" -> "HelloWorld")
    pub type_case: fn(&str) -> String,
    /// Transform a raw name to a member-style name (e.g., "hello-world" -> "helloWorld")
    pub member_case: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "default" -> "`default`" in Swift)
    pub escape_reserved: fn(&str) -> String,
    /// Identifier used when nothing usable survives cleaning
    pub empty_name: &'static str,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Clean a raw string into a type name.
    pub fn type_name(&self, name: &str) -> String {
        self.finish((self.type_case)(name))
    }

    /// Clean a raw string into a member (property, method, parameter) name.
    pub fn member_name(&self, name: &str) -> String {
        self.finish((self.member_case)(name))
    }

    fn finish(&self, transformed: String) -> String {
        if transformed.is_empty() {
            return self.empty_name.to_string();
        }
        if transformed.starts_with(|c: char| c.is_numeric()) {
            return format!("_{}", transformed);
        }
        self.safe_name(&transformed)
    }
}

fn escape_swift_reserved(name: &str) -> String {
    format!("`{}`", name)
}

/// Swift naming conventions.
pub const SWIFT_NAMING: NamingConvention = NamingConvention {
    // Types and enum cases use PascalCase
    type_case: to_pascal_case,
    // Properties, methods and parameters use camelCase
    member_case: to_camel_case,
    reserved_words: &[
        // Declarations
        "associatedtype",
        "class",
        "deinit",
        "enum",
        "extension",
        "fileprivate",
        "func",
        "import",
        "init",
        "inout",
        "internal",
        "let",
        "open",
        "operator",
        "private",
        "precedencegroup",
        "protocol",
        "public",
        "rethrows",
        "static",
        "struct",
        "subscript",
        "typealias",
        "var",
        // Statements
        "break",
        "case",
        "catch",
        "continue",
        "default",
        "defer",
        "do",
        "else",
        "fallthrough",
        "for",
        "guard",
        "if",
        "in",
        "repeat",
        "return",
        "switch",
        "throw",
        "where",
        "while",
        // Expressions and types
        "Any",
        "as",
        "await",
        "false",
        "is",
        "nil",
        "self",
        "Self",
        "super",
        "throws",
        "true",
        "try",
    ],
    escape_reserved: escape_swift_reserved,
    empty_name: "unnamed",
};
