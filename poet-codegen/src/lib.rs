//! Swift source construction toolkit.
//!
//! Callers assemble an immutable description of Swift constructs (types,
//! fields, methods, parameters, code fragments) through builders and render
//! it with a [`CodeWriter`](builder::CodeWriter).
//!
//! # Module Organization
//!
//! - [`builder`] - Specs, their builders, and the emission engine
//! - [`generation`] - Output helpers (ImportCollector)
//!
//! # Example
//!
//! ```
//! use swiftpoet_codegen::builder::{
//!     CodeBlock, CodeWriter, Emit, FieldSpec, SpecBuilder, TypeName, TypeSpec,
//! };
//!
//! let spec = TypeSpec::struct_("Point")
//!     .add_field(FieldSpec::builder("x", TypeName::int()).build())
//!     .add_field(
//!         FieldSpec::builder("y", TypeName::int())
//!             .mutable()
//!             .add_initializer(CodeBlock::literal("0"))
//!             .build(),
//!     )
//!     .build();
//!
//! let mut writer = CodeWriter::swift();
//! spec.emit(&mut writer);
//! assert_eq!(
//!     writer.as_str(),
//!     "struct Point {\n    let x: Int\n    var y: Int = 0\n}\n"
//! );
//! ```

pub mod builder;
pub mod generation;
