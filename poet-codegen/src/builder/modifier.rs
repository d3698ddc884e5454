//! Declaration modifiers and their canonical emission order.

use std::{collections::BTreeSet, fmt};

/// A visibility or behavior modifier.
///
/// Variants are declared in canonical emission order; the derived `Ord`
/// is what makes `{static, public}` and `{public, static}` render alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Open,
    Public,
    Internal,
    FilePrivate,
    Private,
    Override,
    Required,
    Convenience,
    Final,
    Static,
    Class,
    Lazy,
    Weak,
    Unowned,
    Mutating,
}

impl Modifier {
    /// Every modifier, in canonical order.
    pub const ALL: [Modifier; 15] = [
        Self::Open,
        Self::Public,
        Self::Internal,
        Self::FilePrivate,
        Self::Private,
        Self::Override,
        Self::Required,
        Self::Convenience,
        Self::Final,
        Self::Static,
        Self::Class,
        Self::Lazy,
        Self::Weak,
        Self::Unowned,
        Self::Mutating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Public => "public",
            Self::Internal => "internal",
            Self::FilePrivate => "fileprivate",
            Self::Private => "private",
            Self::Override => "override",
            Self::Required => "required",
            Self::Convenience => "convenience",
            Self::Final => "final",
            Self::Static => "static",
            Self::Class => "class",
            Self::Lazy => "lazy",
            Self::Weak => "weak",
            Self::Unowned => "unowned",
            Self::Mutating => "mutating",
        }
    }

    /// Check if this is an access-level modifier.
    pub fn is_access_level(&self) -> bool {
        matches!(
            self,
            Self::Open | Self::Public | Self::Internal | Self::FilePrivate | Self::Private
        )
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of modifiers; iteration yields canonical order.
pub type Modifiers = BTreeSet<Modifier>;
