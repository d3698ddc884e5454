//! Stored properties, enum cases and protocol property requirements.

use std::collections::BTreeSet;

use swiftpoet_core::SWIFT_NAMING;

use super::{
    code_block::CodeBlock,
    code_writer::CodeWriter,
    construct::Construct,
    emit::{CollectImports, Emit},
    spec::{Spec, SpecBase, SpecBuilder},
    type_name::TypeName,
};

/// A field. How it renders depends on the container that adopted it:
///
/// | parent                       | output                                   |
/// |------------------------------|------------------------------------------|
/// | `Enum`                       | `case Name[ = initializer]`              |
/// | `Struct`, `Class`, `Extension` | `[modifiers] let/var name: Type[ = initializer]` |
/// | `Protocol`                   | `[modifiers] var name: Type { get }` or `{get set}` |
/// | none                         | documentation only                       |
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    base: SpecBase,
    ty: Option<TypeName>,
    initializer: Option<CodeBlock>,
    parent_type: Option<Construct>,
}

impl FieldSpec {
    /// Start building an immutable (`let`) field.
    pub fn builder(name: impl Into<String>, ty: impl Into<Option<TypeName>>) -> FieldSpecBuilder {
        FieldSpecBuilder {
            base: SpecBase::new(name, Construct::Field),
            ty: ty.into(),
            initializer: None,
            parent_type: None,
        }
    }

    pub fn ty(&self) -> Option<&TypeName> {
        self.ty.as_ref()
    }

    pub fn initializer(&self) -> Option<&CodeBlock> {
        self.initializer.as_ref()
    }

    /// The construct of the container this field was adopted by.
    pub fn parent_type(&self) -> Option<Construct> {
        self.parent_type
    }

    /// Adopt this field into a container. Only containers call this.
    pub(crate) fn attach(mut self, parent: Construct) -> Self {
        self.parent_type = Some(parent);
        self
    }

    fn emit_enum_case(&self, writer: &mut CodeWriter) {
        let mut block = CodeBlock::builder()
            .add_literal("case")
            .add_literal(SWIFT_NAMING.type_name(&self.base.name));

        if let Some(initializer) = &self.initializer {
            block = block.add_literal("=").add_code_block(initializer);
        }

        writer.emit_with_indentation(&block.build());
    }

    fn emit_property(&self, writer: &mut CodeWriter) {
        writer.emit_modifiers(&self.base.modifiers);

        let mut block = CodeBlock::builder()
            .add_literal(self.base.construct.keyword())
            .add_literal(SWIFT_NAMING.member_name(&self.base.name));

        if let Some(ty) = &self.ty {
            block = block.add_literal(":").add_type(ty.clone());
        }
        if let Some(initializer) = &self.initializer {
            block = block.add_literal("=").add_code_block(initializer);
        }

        writer.emit_with_indentation(&block.build());
    }

    fn emit_protocol_requirement(&self, writer: &mut CodeWriter) {
        writer.emit_modifiers(&self.base.modifiers);

        // Departs from the field's own keyword on purpose: Swift rejects `let`
        // in a protocol, so mutability is carried by the accessor suffix only.
        let mut block = CodeBlock::builder()
            .add_literal(Construct::MutableField.keyword())
            .add_literal(SWIFT_NAMING.member_name(&self.base.name));

        if let Some(ty) = &self.ty {
            block = block.add_literal(":").add_type(ty.clone());
        }

        let accessors = match self.base.construct {
            Construct::MutableField => "{get set}",
            _ => "{ get }",
        };

        writer.emit_with_indentation(&block.add_literal(accessors).build());
    }
}

impl Spec for FieldSpec {
    fn base(&self) -> &SpecBase {
        &self.base
    }
}

impl Emit for FieldSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        writer.emit_documentation(self);

        match self.parent_type {
            Some(Construct::Enum) => self.emit_enum_case(writer),
            Some(Construct::Struct | Construct::Class | Construct::Extension) => {
                self.emit_property(writer)
            }
            Some(Construct::Protocol) => self.emit_protocol_requirement(writer),
            Some(
                parent @ (Construct::Field
                | Construct::MutableField
                | Construct::Method
                | Construct::Parameter),
            ) => {
                tracing::debug!(
                    field = %self.base.name,
                    parent = ?parent,
                    "field parent is not a type, rendering documentation only"
                );
            }
            None => {
                tracing::debug!(
                    field = %self.base.name,
                    "field was never adopted, rendering documentation only"
                );
            }
        }

        writer
    }
}

impl CollectImports for FieldSpec {
    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.base.imports.clone();
        imports.extend(self.ty.collect_imports());
        imports.extend(self.initializer.collect_imports());
        imports
    }
}

/// Builder for [`FieldSpec`].
#[derive(Debug, Clone)]
pub struct FieldSpecBuilder {
    base: SpecBase,
    ty: Option<TypeName>,
    initializer: Option<CodeBlock>,
    parent_type: Option<Construct>,
}

impl FieldSpecBuilder {
    /// Make this a mutable (`var`) field.
    pub fn mutable(mut self) -> Self {
        self.base.construct = Construct::MutableField;
        self
    }

    /// Set the initializer expression, appended verbatim after `=`.
    pub fn add_initializer(mut self, initializer: CodeBlock) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Bind the field to a container construct ahead of adoption.
    pub fn add_parent_type(mut self, parent: Construct) -> Self {
        self.parent_type = Some(parent);
        self
    }
}

impl SpecBuilder for FieldSpecBuilder {
    type Output = FieldSpec;

    fn base_mut(&mut self) -> &mut SpecBase {
        &mut self.base
    }

    fn build(self) -> FieldSpec {
        FieldSpec {
            base: self.base,
            ty: self.ty,
            initializer: self.initializer,
            parent_type: self.parent_type,
        }
    }
}
