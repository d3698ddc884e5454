//! Function and method parameters.

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

/// A parameter: `[label ]name: Type[ = default]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    base: SpecBase,
    ty: TypeName,
    label: Option<String>,
    default_value: Option<CodeBlock>,
}

impl ParameterSpec {
    pub fn builder(name: impl Into<String>, ty: TypeName) -> ParameterSpecBuilder {
        ParameterSpecBuilder {
            base: SpecBase::new(name, Construct::Parameter),
            ty,
            label: None,
            default_value: None,
        }
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    /// External argument label, if it differs from the name.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn default_value(&self) -> Option<&CodeBlock> {
        self.default_value.as_ref()
    }

    /// Whether both render the same declaration, whatever their imports.
    pub(crate) fn declares_same(&self, other: &ParameterSpec) -> bool {
        self.base.name == other.base.name
            && self.label == other.label
            && self.ty == other.ty
            && self.default_value == other.default_value
    }

    /// Fold the imports of a duplicate parameter into this one.
    pub(crate) fn absorb_imports(&mut self, duplicate: &ParameterSpec) {
        self.base.imports.extend(duplicate.collect_imports());
    }
}

impl Spec for ParameterSpec {
    fn base(&self) -> &SpecBase {
        &self.base
    }
}

impl Emit for ParameterSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        if let Some(label) = &self.label {
            if label == "_" {
                writer.emit_literal("_");
            } else {
                writer.emit_literal(&SWIFT_NAMING.member_name(label));
            }
        }
        writer
            .emit_literal(&SWIFT_NAMING.member_name(&self.base.name))
            .emit_literal(":")
            .emit_type(&self.ty);

        if let Some(default_value) = &self.default_value {
            writer.emit_literal("=").emit_code_block(default_value);
        }
        writer
    }
}

impl CollectImports for ParameterSpec {
    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.base.imports.clone();
        imports.extend(self.ty.collect_imports());
        imports.extend(self.default_value.collect_imports());
        imports
    }
}

/// Builder for [`ParameterSpec`].
#[derive(Debug, Clone)]
pub struct ParameterSpecBuilder {
    base: SpecBase,
    ty: TypeName,
    label: Option<String>,
    default_value: Option<CodeBlock>,
}

impl ParameterSpecBuilder {
    /// Set the external argument label (`_` suppresses it at call sites).
    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn add_default_value(mut self, value: CodeBlock) -> Self {
        self.default_value = Some(value);
        self
    }
}

impl SpecBuilder for ParameterSpecBuilder {
    type Output = ParameterSpec;

    fn base_mut(&mut self) -> &mut SpecBase {
        &mut self.base
    }

    fn build(self) -> ParameterSpec {
        ParameterSpec {
            base: self.base,
            ty: self.ty,
            label: self.label,
            default_value: self.default_value,
        }
    }
}
