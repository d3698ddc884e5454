//! Spec tree building blocks.
//!
//! This module provides the primitives for describing Swift source:
//! - [`TypeSpec`] - Classes, structs, enums, protocols and extensions
//! - [`FieldSpec`], [`MethodSpec`], [`ParameterSpec`] - Members
//! - [`CodeBlock`] - Token sequences for initializers and bodies
//! - [`TypeName`] - Type references carrying their module imports
//! - [`CodeWriter`] - Stateful renderer with indentation and spacing rules
//!
//! Every spec is immutable once built. Members are built in isolation and
//! adopted by the type that owns them, which decides how they render.

mod code_block;
mod code_writer;
mod construct;
mod emit;
mod field;
mod indent;
mod method;
mod modifier;
mod parameter;
mod spec;
mod type_name;
mod type_spec;

pub use code_block::{CodeBlock, CodeBlockBuilder, Emittable};
pub use code_writer::{CodeWriter, MAX_NESTING_DEPTH};
pub use construct::Construct;
pub use emit::{CollectImports, Emit};
pub use field::{FieldSpec, FieldSpecBuilder};
pub use indent::Indent;
pub use method::{MethodSpec, MethodSpecBuilder};
pub use modifier::{Modifier, Modifiers};
pub use parameter::{ParameterSpec, ParameterSpecBuilder};
pub use spec::{Spec, SpecBase, SpecBuilder};
pub use type_name::{TypeKind, TypeName};
pub use type_spec::{TypeSpec, TypeSpecBuilder};
