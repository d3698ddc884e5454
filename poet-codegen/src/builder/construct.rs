//! The closed set of renderable source constructs.

use std::fmt;

/// Discriminator over every kind of construct a spec can describe.
///
/// A spec's rendering rule is selected by its own construct and, for
/// members, by the construct of the container that adopted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `class` declaration.
    Class,
    /// `struct` declaration.
    Struct,
    /// `enum` declaration.
    Enum,
    /// `protocol` declaration.
    Protocol,
    /// `extension` declaration.
    Extension,
    /// Immutable stored property (`let`).
    Field,
    /// Mutable stored property (`var`).
    MutableField,
    /// Function or method (`func`).
    Method,
    /// Function parameter (no keyword).
    Parameter,
}

impl Construct {
    /// The keyword that introduces this construct in Swift source.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Extension => "extension",
            Self::Field => "let",
            Self::MutableField => "var",
            Self::Method => "func",
            Self::Parameter => "",
        }
    }

    /// Whether this construct declares a type that can own members.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Self::Class | Self::Struct | Self::Enum | Self::Protocol | Self::Extension
        )
    }

    /// Whether this construct is a member of a type.
    pub fn is_member(&self) -> bool {
        !self.is_type()
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
