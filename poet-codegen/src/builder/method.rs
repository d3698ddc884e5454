//! Functions, methods, initializers and protocol method requirements.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use swiftpoet_core::SWIFT_NAMING;

use super::{
    code_block::CodeBlock,
    code_writer::CodeWriter,
    construct::Construct,
    emit::{CollectImports, Emit},
    parameter::ParameterSpec,
    spec::{Spec, SpecBase, SpecBuilder},
    type_name::TypeName,
};

/// Name that is rendered without the `func` keyword.
const INITIALIZER: &str = "init";

/// A method or free function.
///
/// Inside a protocol only the signature is rendered. Everywhere else the
/// signature is followed by a braced body, which is empty (`{\n\n}`) when no
/// code was added.
///
/// # Example
///
/// ```
/// use swiftpoet_codegen::builder::{
///     CodeWriter, Emit, MethodSpec, ParameterSpec, SpecBuilder, TypeName,
/// };
///
/// let method = MethodSpec::builder("doWork")
///     .add_parameter(ParameterSpec::builder("x", TypeName::int()).build())
///     .add_return_type(TypeName::string())
///     .can_throw_error()
///     .build();
///
/// let mut writer = CodeWriter::swift();
/// method.emit(&mut writer);
/// assert_eq!(writer.as_str(), "func doWork(x: Int) throws -> String {\n\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    base: SpecBase,
    type_variables: Vec<TypeName>,
    throws_error: bool,
    return_type: Option<TypeName>,
    parameters: Vec<ParameterSpec>,
    code: Option<CodeBlock>,
    parent_type: Option<Construct>,
}

impl MethodSpec {
    pub fn builder(name: impl Into<String>) -> MethodSpecBuilder {
        MethodSpecBuilder {
            base: SpecBase::new(name, Construct::Method),
            type_variables: IndexMap::new(),
            throws_error: false,
            return_type: None,
            parameters: Vec::new(),
            code: None,
            parent_type: None,
        }
    }

    pub fn type_variables(&self) -> &[TypeName] {
        &self.type_variables
    }

    pub fn throws_error(&self) -> bool {
        self.throws_error
    }

    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn code(&self) -> Option<&CodeBlock> {
        self.code.as_ref()
    }

    pub fn parent_type(&self) -> Option<Construct> {
        self.parent_type
    }

    /// Whether this is an initializer rather than a named method.
    pub fn is_initializer(&self) -> bool {
        self.base.name == INITIALIZER
    }

    pub(crate) fn attach(mut self, parent: Construct) -> Self {
        self.parent_type = Some(parent);
        self
    }

    fn emit_signature(&self, writer: &mut CodeWriter) {
        writer
            .emit_documentation(self)
            .emit_modifiers(&self.base.modifiers);

        if self.is_initializer() {
            writer.emit_literal(INITIALIZER);
        } else {
            writer
                .emit_literal(self.base.construct.keyword())
                .emit_literal(&SWIFT_NAMING.member_name(&self.base.name));
        }

        if !self.type_variables.is_empty() {
            writer.emit_literal("<");
            for (i, type_variable) in self.type_variables.iter().enumerate() {
                if i > 0 {
                    writer.emit_literal(",");
                }
                writer.emit_type(type_variable);
            }
            writer.emit_literal(">");
        }

        writer.emit_literal("(");
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                writer.emit_literal(",");
            }
            parameter.emit(writer);
        }
        writer.emit_literal(")");

        if self.throws_error {
            writer.emit_literal("throws");
        }
        if let Some(return_type) = &self.return_type {
            writer.emit_literal("->").emit_type(return_type);
        }
    }
}

impl Spec for MethodSpec {
    fn base(&self) -> &SpecBase {
        &self.base
    }
}

impl Emit for MethodSpec {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        self.emit_signature(writer);

        match self.parent_type {
            Some(Construct::Protocol) => writer.end_line(),
            _ => {
                writer.begin_statement();
                if let Some(code) = &self.code {
                    writer.emit_code_block(code);
                }
                writer.end_statement()
            }
        }
    }
}

impl CollectImports for MethodSpec {
    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.base.imports.clone();
        imports.extend(self.type_variables.collect_imports());
        imports.extend(self.parameters.collect_imports());
        imports.extend(self.return_type.collect_imports());
        imports
    }
}

/// Builder for [`MethodSpec`].
#[derive(Debug, Clone)]
pub struct MethodSpecBuilder {
    base: SpecBase,
    /// Keyed by rendered name so a duplicate can merge its imports.
    type_variables: IndexMap<String, TypeName>,
    throws_error: bool,
    return_type: Option<TypeName>,
    parameters: Vec<ParameterSpec>,
    code: Option<CodeBlock>,
    parent_type: Option<Construct>,
}

impl MethodSpecBuilder {
    /// Add a generic type variable. An equal one is not added again, but
    /// its imports are kept.
    pub fn add_type_variable(mut self, type_variable: TypeName) -> Self {
        self.type_variables
            .entry(type_variable.name())
            .and_modify(|kept| kept.absorb_imports(&type_variable))
            .or_insert(type_variable);
        self
    }

    pub fn add_type_variables(self, type_variables: impl IntoIterator<Item = TypeName>) -> Self {
        type_variables
            .into_iter()
            .fold(self, |builder, type_variable| builder.add_type_variable(type_variable))
    }

    pub fn add_return_type(mut self, return_type: TypeName) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Add a parameter. The same declaration is not added again, but its
    /// imports are kept.
    pub fn add_parameter(mut self, parameter: ParameterSpec) -> Self {
        match self
            .parameters
            .iter_mut()
            .find(|kept| kept.declares_same(&parameter))
        {
            Some(kept) => kept.absorb_imports(&parameter),
            None => self.parameters.push(parameter),
        }
        self
    }

    pub fn add_parameters(self, parameters: impl IntoIterator<Item = ParameterSpec>) -> Self {
        parameters
            .into_iter()
            .fold(self, |builder, parameter| builder.add_parameter(parameter))
    }

    /// Append code to the body.
    pub fn add_code(mut self, code: CodeBlock) -> Self {
        self.code = Some(match self.code.take() {
            Some(existing) => CodeBlock::builder()
                .add_code_block(&existing)
                .add_code_block(&code)
                .build(),
            None => code,
        });
        self
    }

    /// Mark the method as `throws`.
    pub fn can_throw_error(mut self) -> Self {
        self.throws_error = true;
        self
    }

    pub fn add_parent_type(mut self, parent: Construct) -> Self {
        self.parent_type = Some(parent);
        self
    }
}

impl SpecBuilder for MethodSpecBuilder {
    type Output = MethodSpec;

    fn base_mut(&mut self) -> &mut SpecBase {
        &mut self.base
    }

    fn build(self) -> MethodSpec {
        MethodSpec {
            base: self.base,
            type_variables: self.type_variables.into_values().collect(),
            throws_error: self.throws_error,
            return_type: self.return_type,
            parameters: self.parameters,
            code: self.code,
            parent_type: self.parent_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Modifier;

    fn render(method: &MethodSpec) -> String {
        let mut writer = CodeWriter::swift();
        method.emit(&mut writer);
        writer.build()
    }

    fn do_work() -> MethodSpecBuilder {
        MethodSpec::builder("doWork")
            .add_parameter(ParameterSpec::builder("x", TypeName::int()).build())
            .add_return_type(TypeName::string())
            .can_throw_error()
    }

    #[test]
    fn test_free_function_with_empty_body() {
        let method = do_work().build();
        assert_eq!(render(&method), "func doWork(x: Int) throws -> String {\n\n}\n");
    }

    #[test]
    fn test_protocol_requirement_has_no_body() {
        let method = do_work()
            .add_code(CodeBlock::line("return \"\""))
            .build()
            .attach(Construct::Protocol);
        assert_eq!(render(&method), "func doWork(x: Int) throws -> String\n");
    }

    #[test]
    fn test_initializer_has_no_keyword() {
        let method = MethodSpec::builder("init")
            .add_modifier(Modifier::Public)
            .add_parameter(ParameterSpec::builder("name", TypeName::string()).build())
            .add_code(CodeBlock::line("self.name = name"))
            .build()
            .attach(Construct::Class);
        assert!(method.is_initializer());
        assert_eq!(
            render(&method),
            "public init(name: String) {\n    self.name = name\n}\n"
        );
    }

    #[test]
    fn test_generics_and_parameter_list() {
        let method = MethodSpec::builder("merge_values")
            .add_type_variables([TypeName::named("T"), TypeName::named("U"), TypeName::named("T")])
            .add_parameter(ParameterSpec::builder("lhs", TypeName::named("T")).add_label("_").build())
            .add_parameter(ParameterSpec::builder("rhs", TypeName::named("U")).build())
            .add_parameter(ParameterSpec::builder("rhs", TypeName::named("U")).build())
            .build();
        assert_eq!(method.type_variables().len(), 2);
        assert_eq!(method.parameters().len(), 2);
        assert_eq!(
            render(&method),
            "func mergeValues<T, U>(_ lhs: T, rhs: U) {\n\n}\n"
        );
    }

    #[test]
    fn test_duplicates_keep_their_imports() {
        let method = MethodSpec::builder("convert")
            .add_type_variable(TypeName::named("T"))
            .add_type_variable(TypeName::named("T").add_import("TKit"))
            .add_parameter(ParameterSpec::builder("x", TypeName::named("Foo")).build())
            .add_parameter(
                ParameterSpec::builder("x", TypeName::named("Foo").add_import("FooKit")).build(),
            )
            .add_parameter(
                ParameterSpec::builder("x", TypeName::named("Foo"))
                    .add_import("Extras")
                    .build(),
            )
            .build();

        assert_eq!(method.type_variables().len(), 1);
        assert_eq!(method.parameters().len(), 1);
        assert_eq!(render(&method), "func convert<T>(x: Foo) {\n\n}\n");

        let imports: Vec<_> = method.collect_imports().into_iter().collect();
        assert_eq!(imports, vec!["Extras", "FooKit", "TKit"]);
    }

    #[test]
    fn test_add_code_appends() {
        let method = MethodSpec::builder("run")
            .add_code(CodeBlock::line("prepare()"))
            .add_code(CodeBlock::line("execute()"))
            .build();
        assert_eq!(
            render(&method),
            "func run() {\n    prepare()\n    execute()\n}\n"
        );
    }

    #[test]
    fn test_body_control_flow_indents() {
        let method = MethodSpec::builder("check")
            .add_parameter(ParameterSpec::builder("x", TypeName::int()).build())
            .add_code(
                CodeBlock::builder()
                    .begin_control_flow("if x > 0")
                    .add_code_line("print(x)")
                    .end_control_flow()
                    .build(),
            )
            .build();
        assert_eq!(
            render(&method),
            "func check(x: Int) {\n    if x > 0 {\n        print(x)\n    }\n}\n"
        );
    }

    #[test]
    fn test_collect_imports_excludes_body() {
        let method = MethodSpec::builder("fetch")
            .add_import("Combine")
            .add_type_variable(TypeName::named("Model").add_import("Models"))
            .add_parameter(
                ParameterSpec::builder("url", TypeName::named("URL").add_import("Foundation")).build(),
            )
            .add_return_type(TypeName::generic(
                "AnyPublisher",
                vec![TypeName::named("Data"), TypeName::named("Failure").add_import("Networking")],
            ))
            .add_code(
                CodeBlock::builder()
                    .add_type(TypeName::named("Logger").add_import("OSLog"))
                    .build(),
            )
            .build();

        let imports: Vec<_> = method.collect_imports().into_iter().collect();
        assert_eq!(imports, vec!["Combine", "Foundation", "Models", "Networking"]);
        assert_eq!(method.collect_imports(), method.collect_imports());
    }
}
