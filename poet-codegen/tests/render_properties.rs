//! Property tests for rendering and import aggregation.

use proptest::prelude::*;
use swiftpoet_codegen::builder::{
    CodeBlock, CodeBlockBuilder, CodeWriter, CollectImports, Construct, Emit, FieldSpec,
    MethodSpec, Modifier, ParameterSpec, SpecBuilder, TypeName, TypeSpec,
};

// ============================================================================
// Generators
// ============================================================================

/// Any subset of modifiers, in any order.
fn arb_modifiers() -> impl Strategy<Value = Vec<Modifier>> {
    proptest::sample::subsequence(Modifier::ALL.to_vec(), 0..=Modifier::ALL.len())
        .prop_shuffle()
}

/// Raw names, including ones that need cleaning.
fn arb_raw_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-zA-Z0-9]{0,12}",
        "[a-z]{1,6}(_[a-z0-9]{1,6}){0,3}",
        "[0-9][a-z_ -]{0,8}",
        Just("default".to_string()),
        Just("self".to_string()),
        Just("".to_string()),
    ]
}

fn arb_module() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z]{2,10}"
}

fn arb_type_name() -> impl Strategy<Value = TypeName> {
    ("[A-Z][A-Za-z]{0,8}", proptest::collection::vec(arb_module(), 0..3))
        .prop_map(|(name, modules)| TypeName::named(name).add_imports(modules))
}

/// A body of nested control-flow scopes.
fn arb_body(depth: u32) -> impl Strategy<Value = CodeBlock> {
    let leaf = "[a-z]{1,8}\\(\\)".prop_map(CodeBlock::line);
    leaf.prop_recursive(depth, 32, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(|blocks| {
            blocks
                .iter()
                .fold(
                    CodeBlock::builder().begin_control_flow("do"),
                    CodeBlockBuilder::add_code_block,
                )
                .end_control_flow()
                .build()
        })
    })
}

fn render<E: Emit>(node: &E) -> String {
    let mut writer = CodeWriter::swift();
    node.emit(&mut writer);
    writer.build()
}

proptest! {
    #[test]
    fn modifier_order_is_independent_of_insertion(modifiers in arb_modifiers()) {
        let field = FieldSpec::builder("value", TypeName::int())
            .add_modifiers(modifiers.clone())
            .add_parent_type(Construct::Struct)
            .build();

        let mut canonical = modifiers;
        canonical.sort();
        let prefix: Vec<&str> = canonical.iter().map(Modifier::as_str).collect();
        let expected = if prefix.is_empty() {
            "let value: Int\n".to_string()
        } else {
            format!("{} let value: Int\n", prefix.join(" "))
        };

        prop_assert_eq!(render(&field), expected);
    }

    #[test]
    fn enum_case_has_no_type_or_modifiers(
        name in arb_raw_name(),
        ty in arb_type_name(),
        modifiers in arb_modifiers(),
    ) {
        let field = FieldSpec::builder(name, ty)
            .add_modifiers(modifiers)
            .add_parent_type(Construct::Enum)
            .build();

        let output = render(&field);
        let tokens: Vec<&str> = output.split_whitespace().collect();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0], "case");
        prop_assert!(!output.contains(':'));
        prop_assert!(output.ends_with('\n'));
    }

    #[test]
    fn only_initializers_omit_the_keyword(name in prop_oneof![Just("init".to_string()), arb_raw_name()]) {
        let method = MethodSpec::builder(name.clone()).build();
        let output = render(&method);

        if name == "init" {
            prop_assert!(output.starts_with("init("));
        } else {
            prop_assert!(output.starts_with("func "));
        }
    }

    #[test]
    fn protocol_methods_never_have_a_body(body in arb_body(4), returns in arb_type_name()) {
        let method = MethodSpec::builder("perform")
            .add_return_type(returns)
            .add_code(body)
            .add_parent_type(Construct::Protocol)
            .build();

        let output = render(&method);
        prop_assert!(!output.contains('{'), "output contains '{{'");
        prop_assert!(!output.contains('}'), "output contains '}}'");
        prop_assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn braces_are_balanced(body in arb_body(6)) {
        let method = MethodSpec::builder("run").add_code(body).build();

        let mut writer = CodeWriter::swift();
        method.emit(&mut writer);
        prop_assert_eq!(writer.open_scopes(), 0);
        prop_assert_eq!(writer.current_indent(), 0);

        let output = writer.build();
        prop_assert_eq!(output.matches('{').count(), output.matches('}').count());
        prop_assert!(!output.contains("\n\n\n"));
    }

    #[test]
    fn imports_are_pure_and_a_superset_of_members(
        field_types in proptest::collection::vec(arb_type_name(), 0..4),
        param_types in proptest::collection::vec(arb_type_name(), 0..4),
        own in proptest::collection::vec(arb_module(), 0..3),
    ) {
        let fields: Vec<FieldSpec> = field_types
            .into_iter()
            .enumerate()
            .map(|(i, ty)| FieldSpec::builder(format!("field{}", i), ty).build())
            .collect();
        let method = MethodSpec::builder("configure")
            .add_parameters(
                param_types
                    .into_iter()
                    .enumerate()
                    .map(|(i, ty)| ParameterSpec::builder(format!("arg{}", i), ty).build()),
            )
            .build();

        let spec = TypeSpec::class("Container")
            .add_imports(own.clone())
            .add_fields(fields.clone())
            .add_method(method.clone())
            .build();

        let first = spec.collect_imports();
        let rendered = render(&spec);
        let second = spec.collect_imports();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(rendered, render(&spec));

        for field in &fields {
            prop_assert!(field.collect_imports().is_subset(&first));
        }
        prop_assert!(method.collect_imports().is_subset(&first));
        for module in &own {
            prop_assert!(first.contains(module));
        }
    }
}
