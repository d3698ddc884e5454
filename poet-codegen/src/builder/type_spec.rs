//! Type-level specs: classes, structs, enums, protocols and extensions.

use std::collections::BTreeSet;

use swiftpoet_core::SWIFT_NAMING;

use super::{
    code_writer::CodeWriter,
    construct::Construct,
    emit::{CollectImports, Emit},
    field::FieldSpec,
    method::MethodSpec,
    spec::{Spec, SpecBase, SpecBuilder},
    type_name::TypeName,
};

/// A type declaration and everything it owns.
///
/// Members added through the builder are adopted: their parent construct is
/// set to this type's construct, which decides how they render. Inside an
/// `enum` fields become cases, inside a `protocol` fields and methods
/// become requirements.
///
/// The body lists fields first, then methods, then nested types, with one
/// blank line between sections and between methods and nested types.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    base: SpecBase,
    super_type: Option<TypeName>,
    protocols: Vec<TypeName>,
    fields: Vec<FieldSpec>,
    methods: Vec<MethodSpec>,
    nested_types: Vec<TypeSpec>,
}

impl TypeSpec {
    pub fn class(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(name, Construct::Class)
    }

    pub fn struct_(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(name, Construct::Struct)
    }

    pub fn enum_(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(name, Construct::Enum)
    }

    pub fn protocol(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(name, Construct::Protocol)
    }

    /// Extend an existing type. A dotted name like `Outer.Inner` keeps its
    /// dots; each segment is cleaned on its own.
    pub fn extension(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(name, Construct::Extension)
    }

    /// The name as it appears in the declaration.
    pub fn type_name(&self) -> String {
        match self.base.construct {
            Construct::Extension => self
                .base
                .name
                .split('.')
                .map(|segment| SWIFT_NAMING.type_name(segment))
                .collect::<Vec<_>>()
                .join("."),
            _ => SWIFT_NAMING.type_name(&self.base.name),
        }
    }

    pub fn super_type(&self) -> Option<&TypeName> {
        self.super_type.as_ref()
    }

    pub fn protocols(&self) -> &[TypeName] {
        &self.protocols
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    pub fn nested_types(&self) -> &[TypeSpec] {
        &self.nested_types
    }

    fn emit_header(&self, writer: &mut CodeWriter) {
        writer
            .emit_documentation(self)
            .emit_modifiers(&self.base.modifiers)
            .emit_literal(self.base.construct.keyword())
            .emit_literal(&self.type_name());

        let inherited = self.super_type.iter().chain(&self.protocols);
        for (i, ty) in inherited.enumerate() {
            writer.emit_literal(if i == 0 { ":" } else { "," });
            writer.emit_type(ty);
        }
    }

    fn emit_body(&self, writer: &mut CodeWriter) {
        let mut has_section = false;

        for field in &self.fields {
            field.emit(writer);
            has_section = true;
        }

        for method in &self.methods {
            if has_section {
                writer.blank_line();
            }
            method.emit(writer);
            has_section = true;
        }

        for nested in &self.nested_types {
            if has_section {
                writer.blank_line();
            }
            writer.nested(|w| {
                nested.emit(w);
            });
            has_section = true;
        }
    }
}

impl Spec for TypeSpec {
    fn base(&self) -> &SpecBase {
        &self.base
    }
}

impl Emit for TypeSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        tracing::trace!(
            name = %self.base.name,
            construct = %self.base.construct,
            fields = self.fields.len(),
            methods = self.methods.len(),
            "emitting type"
        );

        self.emit_header(writer);
        writer.begin_statement();
        self.emit_body(writer);
        writer.end_statement()
    }
}

impl CollectImports for TypeSpec {
    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.base.imports.clone();
        imports.extend(self.super_type.collect_imports());
        imports.extend(self.protocols.collect_imports());
        imports.extend(self.fields.collect_imports());
        imports.extend(self.methods.collect_imports());
        imports.extend(self.nested_types.collect_imports());
        imports
    }
}

/// Builder for [`TypeSpec`].
#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    base: SpecBase,
    super_type: Option<TypeName>,
    protocols: Vec<TypeName>,
    fields: Vec<FieldSpec>,
    methods: Vec<MethodSpec>,
    nested_types: Vec<TypeSpec>,
}

impl TypeSpecBuilder {
    fn new(name: impl Into<String>, construct: Construct) -> Self {
        Self {
            base: SpecBase::new(name, construct),
            super_type: None,
            protocols: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested_types: Vec::new(),
        }
    }

    /// Set the superclass, or the raw type of an enum.
    pub fn add_super_type(mut self, super_type: TypeName) -> Self {
        self.super_type = Some(super_type);
        self
    }

    /// Conform to a protocol. An equal one is not listed again, but its
    /// imports are kept.
    pub fn add_protocol(mut self, protocol: TypeName) -> Self {
        match self.protocols.iter_mut().find(|kept| **kept == protocol) {
            Some(kept) => kept.absorb_imports(&protocol),
            None => self.protocols.push(protocol),
        }
        self
    }

    pub fn add_protocols(self, protocols: impl IntoIterator<Item = TypeName>) -> Self {
        protocols
            .into_iter()
            .fold(self, |builder, protocol| builder.add_protocol(protocol))
    }

    /// Adopt a field into this type.
    pub fn add_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field.attach(self.base.construct));
        self
    }

    pub fn add_fields(self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        fields
            .into_iter()
            .fold(self, |builder, field| builder.add_field(field))
    }

    /// Adopt a method into this type.
    pub fn add_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method.attach(self.base.construct));
        self
    }

    pub fn add_methods(self, methods: impl IntoIterator<Item = MethodSpec>) -> Self {
        methods
            .into_iter()
            .fold(self, |builder, method| builder.add_method(method))
    }

    pub fn add_nested_type(mut self, nested: TypeSpec) -> Self {
        self.nested_types.push(nested);
        self
    }
}

impl SpecBuilder for TypeSpecBuilder {
    type Output = TypeSpec;

    fn base_mut(&mut self) -> &mut SpecBase {
        &mut self.base
    }

    fn build(self) -> TypeSpec {
        TypeSpec {
            base: self.base,
            super_type: self.super_type,
            protocols: self.protocols,
            fields: self.fields,
            methods: self.methods,
            nested_types: self.nested_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{CodeBlock, Modifier, ParameterSpec};

    fn render(spec: &TypeSpec) -> String {
        let mut writer = CodeWriter::swift();
        spec.emit(&mut writer);
        writer.build()
    }

    #[test]
    fn test_empty_class() {
        let spec = TypeSpec::class("TopLevelClass").build();
        assert_eq!(render(&spec), "class TopLevelClass {\n\n}\n");
    }

    #[test]
    fn test_members_are_adopted() {
        let spec = TypeSpec::enum_("Status")
            .add_field(FieldSpec::builder("ok", None).build())
            .add_method(MethodSpec::builder("describe").build())
            .build();
        assert_eq!(spec.fields()[0].parent_type(), Some(Construct::Enum));
        assert_eq!(spec.methods()[0].parent_type(), Some(Construct::Enum));
    }

    #[test]
    fn test_class_with_sections() {
        let role = TypeSpec::enum_("role")
            .add_field(FieldSpec::builder("admin", None).build())
            .add_field(FieldSpec::builder("guest", None).build())
            .build();

        let spec = TypeSpec::class("user")
            .add_description("A user account.")
            .add_modifiers([Modifier::Final, Modifier::Public])
            .add_super_type(TypeName::named("Model"))
            .add_protocol(TypeName::named("Codable"))
            .add_field(
                FieldSpec::builder("id", TypeName::int())
                    .add_modifier(Modifier::Public)
                    .build(),
            )
            .add_field(
                FieldSpec::builder("name", TypeName::string().into_optional())
                    .mutable()
                    .build(),
            )
            .add_method(
                MethodSpec::builder("init")
                    .add_modifier(Modifier::Public)
                    .add_parameter(ParameterSpec::builder("id", TypeName::int()).build())
                    .add_code(CodeBlock::line("self.id = id"))
                    .build(),
            )
            .add_method(
                MethodSpec::builder("rename")
                    .add_parameter(
                        ParameterSpec::builder("newName", TypeName::string())
                            .add_label("to")
                            .build(),
                    )
                    .add_code(CodeBlock::line("name = newName"))
                    .build(),
            )
            .add_nested_type(role)
            .build();

        let expected = "\
/// A user account.
public final class User: Model, Codable {
    public let id: Int
    var name: String?

    public init(id: Int) {
        self.id = id
    }

    func rename(to newName: String) {
        name = newName
    }

    enum Role {
        case Admin
        case Guest
    }
}
";
        assert_eq!(render(&spec), expected);
    }

    #[test]
    fn test_enum_with_raw_type() {
        let spec = TypeSpec::enum_("HttpStatus")
            .add_super_type(TypeName::int())
            .add_field(
                FieldSpec::builder("ok", None)
                    .add_initializer(CodeBlock::literal("200"))
                    .build(),
            )
            .add_field(
                FieldSpec::builder("not_found", None)
                    .add_initializer(CodeBlock::literal("404"))
                    .build(),
            )
            .build();
        assert_eq!(
            render(&spec),
            "enum HttpStatus: Int {\n    case Ok = 200\n    case NotFound = 404\n}\n"
        );
    }

    #[test]
    fn test_protocol_requirements() {
        let spec = TypeSpec::protocol("Repository")
            .add_protocol(TypeName::any_object())
            .add_field(FieldSpec::builder("count", TypeName::int()).build())
            .add_field(FieldSpec::builder("label", TypeName::string()).mutable().build())
            .add_method(
                MethodSpec::builder("load")
                    .add_parameter(ParameterSpec::builder("id", TypeName::int()).build())
                    .add_return_type(TypeName::named("Item"))
                    .can_throw_error()
                    .add_code(CodeBlock::line("fatalError()"))
                    .build(),
            )
            .add_method(MethodSpec::builder("reset").build())
            .build();

        let expected = "\
protocol Repository: AnyObject {
    var count: Int { get }
    var label: String {get set}

    func load(id: Int) throws -> Item

    func reset()
}
";
        assert_eq!(render(&spec), expected);
    }

    #[test]
    fn test_extension_renders_members_like_struct() {
        let spec = TypeSpec::extension("String")
            .add_protocol(TypeName::named("Identifiable"))
            .add_field(
                FieldSpec::builder("id", TypeName::string())
                    .mutable()
                    .add_initializer(CodeBlock::literal("\"\""))
                    .build(),
            )
            .build();
        assert_eq!(
            render(&spec),
            "extension String: Identifiable {\n    var id: String = \"\"\n}\n"
        );
    }

    #[test]
    fn test_extension_of_nested_type_keeps_dots() {
        let spec = TypeSpec::extension("Outer.Inner").build();
        assert_eq!(spec.type_name(), "Outer.Inner");
        assert_eq!(render(&spec), "extension Outer.Inner {\n\n}\n");

        let messy = TypeSpec::extension("outer_type.inner_type").build();
        assert_eq!(messy.type_name(), "OuterType.InnerType");

        let nested = TypeSpec::struct_("Outer.Inner").build();
        assert_eq!(nested.type_name(), "OuterInner");
    }

    #[test]
    fn test_repeated_protocol_keeps_imports() {
        let spec = TypeSpec::class("Store")
            .add_protocol(TypeName::named("P"))
            .add_protocol(TypeName::named("P").add_import("PKit"))
            .build();

        assert_eq!(spec.protocols().len(), 1);
        assert_eq!(render(&spec), "class Store: P {\n\n}\n");
        let imports: Vec<_> = spec.collect_imports().into_iter().collect();
        assert_eq!(imports, vec!["PKit"]);
    }

    #[test]
    fn test_collect_imports_union() {
        let spec = TypeSpec::class("Store")
            .add_import("Dispatch")
            .add_super_type(TypeName::named("NSObject").add_import("Foundation"))
            .add_protocol(TypeName::named("ObservableObject").add_import("Combine"))
            .add_field(FieldSpec::builder("view", TypeName::named("UIView").add_import("UIKit")).build())
            .add_method(
                MethodSpec::builder("log")
                    .add_parameter(
                        ParameterSpec::builder("logger", TypeName::named("Logger").add_import("OSLog"))
                            .build(),
                    )
                    .build(),
            )
            .add_nested_type(
                TypeSpec::struct_("Snapshot")
                    .add_field(
                        FieldSpec::builder("image", TypeName::named("CGImage").add_import("CoreGraphics"))
                            .build(),
                    )
                    .build(),
            )
            .build();

        let imports: Vec<_> = spec.collect_imports().into_iter().collect();
        assert_eq!(
            imports,
            vec!["Combine", "CoreGraphics", "Dispatch", "Foundation", "OSLog", "UIKit"]
        );
    }
}
