//! Core utilities and types for the SwiftPoet generator.
//!
//! This crate provides the string utilities, identifier cleaning rules and
//! file primitives shared across the SwiftPoet crates.

mod file;
mod naming;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Identifier cleaning
pub use naming::{NamingConvention, SWIFT_NAMING};
// String utilities
pub use utils::{split_words, to_camel_case, to_pascal_case};
