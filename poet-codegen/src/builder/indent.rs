//! The unit of indentation a [`CodeWriter`](super::CodeWriter) repeats per level.

/// One level of indentation in generated Swift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// This many spaces per level.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, as Xcode writes it.
    pub const SWIFT: Self = Self::Spaces(4);

    pub const COMPACT: Self = Self::Spaces(2);

    /// Widest space indentation accepted from file options.
    pub const MAX_SPACES: u8 = 16;

    /// The text written for a single level, exactly as wide as requested.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}
