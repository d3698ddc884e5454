//! Composable code fragments.
//!
//! A [`CodeBlock`] is an ordered, immutable sequence of [`Emittable`] tokens
//! that render through a [`CodeWriter`]. Blocks are assembled with a
//! [`CodeBlockBuilder`] and can embed other blocks.

use std::collections::BTreeSet;

use super::{
    code_writer::CodeWriter,
    emit::{CollectImports, Emit},
    type_name::TypeName,
};

/// A single token of a code fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Emittable {
    /// Literal source text, spaced against its neighbours by the writer.
    Literal(String),
    /// A type reference, rendered by delegation.
    Type(TypeName),
    /// A nested block, rendered by delegation.
    Code(CodeBlock),
    /// End the current line.
    NewLine,
    /// Open a braced scope: ` {`, newline, indent.
    BeginStatement,
    /// Close the innermost braced scope.
    EndStatement,
    /// Indent without emitting a brace.
    IncreaseIndentation,
    /// Dedent without emitting a brace.
    DecreaseIndentation,
}

/// An immutable code fragment.
///
/// The empty block is legal and renders nothing.
///
/// # Example
///
/// ```
/// use swiftpoet_codegen::builder::{CodeBlock, CodeWriter, Emit};
///
/// let body = CodeBlock::builder()
///     .begin_control_flow("if count > 0")
///     .add_code_line("return true")
///     .end_control_flow()
///     .add_code_line("return false")
///     .build();
///
/// let mut writer = CodeWriter::swift();
/// body.emit(&mut writer);
/// assert_eq!(
///     writer.as_str(),
///     "if count > 0 {\n    return true\n}\nreturn false\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeBlock {
    emittable_objects: Vec<Emittable>,
}

impl CodeBlock {
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// A block holding a single literal, e.g. an initializer expression.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::builder().add_literal(text).build()
    }

    /// A block holding one line of code.
    pub fn line(text: impl Into<String>) -> Self {
        Self::builder().add_code_line(text).build()
    }

    pub fn emittable_objects(&self) -> &[Emittable] {
        &self.emittable_objects
    }

    pub fn is_empty(&self) -> bool {
        self.emittable_objects.is_empty()
    }
}

impl Emit for CodeBlock {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        writer.emit_code_block(self)
    }
}

impl CollectImports for CodeBlock {
    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        for object in &self.emittable_objects {
            match object {
                Emittable::Type(ty) => imports.extend(ty.collect_imports()),
                Emittable::Code(block) => imports.extend(block.collect_imports()),
                _ => {}
            }
        }
        imports
    }
}

/// Accumulates tokens for a [`CodeBlock`].
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    emittable_objects: Vec<Emittable>,
}

impl CodeBlockBuilder {
    /// Append a single token.
    pub fn add_emit_object(mut self, object: Emittable) -> Self {
        self.emittable_objects.push(object);
        self
    }

    /// Append several tokens in order.
    pub fn add_emit_objects(mut self, objects: impl IntoIterator<Item = Emittable>) -> Self {
        self.emittable_objects.extend(objects);
        self
    }

    /// Append a literal token.
    pub fn add_literal(self, text: impl Into<String>) -> Self {
        self.add_emit_object(Emittable::Literal(text.into()))
    }

    /// Append a type reference.
    pub fn add_type(self, ty: TypeName) -> Self {
        self.add_emit_object(Emittable::Type(ty))
    }

    /// Append another block's tokens to this one.
    pub fn add_code_block(self, block: &CodeBlock) -> Self {
        self.add_emit_objects(block.emittable_objects.iter().cloned())
    }

    /// Append a nested block that renders by delegation.
    pub fn add_nested(self, block: CodeBlock) -> Self {
        self.add_emit_object(Emittable::Code(block))
    }

    /// Append a full line of code.
    pub fn add_code_line(self, text: impl Into<String>) -> Self {
        self.add_literal(text).add_emit_object(Emittable::NewLine)
    }

    /// Open a control-flow scope, e.g. `if x > 0`, `for item in items`.
    pub fn begin_control_flow(self, header: impl Into<String>) -> Self {
        self.add_literal(header)
            .add_emit_object(Emittable::BeginStatement)
    }

    /// Close the scope opened by [`begin_control_flow`](Self::begin_control_flow).
    pub fn end_control_flow(self) -> Self {
        self.add_emit_object(Emittable::EndStatement)
    }

    pub fn new_line(self) -> Self {
        self.add_emit_object(Emittable::NewLine)
    }

    pub fn increase_indentation(self) -> Self {
        self.add_emit_object(Emittable::IncreaseIndentation)
    }

    pub fn decrease_indentation(self) -> Self {
        self.add_emit_object(Emittable::DecreaseIndentation)
    }

    pub fn build(self) -> CodeBlock {
        CodeBlock {
            emittable_objects: self.emittable_objects,
        }
    }
}
