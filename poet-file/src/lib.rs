//! Swift source file packaging.
//!
//! Wraps a rendered [`TypeSpec`](swiftpoet_codegen::builder::TypeSpec) with
//! the standard file header and the `import` statements it needs.
//!
//! # Example
//!
//! ```
//! use swiftpoet_codegen::builder::{SpecBuilder, TypeSpec};
//! use swiftpoet_file::{FileOptions, PoetFile};
//!
//! let spec = TypeSpec::class("TopLevelClass").build();
//! let options = FileOptions {
//!     add_generation_date: false,
//!     ..FileOptions::default()
//! };
//!
//! let file = PoetFile::new(spec, options);
//! assert_eq!(file.file_name(), "TopLevelClass.swift");
//! assert!(file.contents().ends_with("class TopLevelClass {\n\n}\n"));
//! ```

mod config;
mod error;
mod poet_file;

pub use config::{FileOptions, OverwritePolicy};
pub use error::{Error, Result, SourceContext};
pub use poet_file::PoetFile;
