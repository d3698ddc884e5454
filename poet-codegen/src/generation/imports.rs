//! Module import collection.

use std::collections::BTreeSet;

use crate::builder::CollectImports;

/// Tracks the modules a generated file imports and deduplicates them.
///
/// Modules are kept sorted for deterministic output.
///
/// # Example
///
/// ```
/// use swiftpoet_codegen::builder::{FieldSpec, SpecBuilder, TypeName, TypeSpec};
/// use swiftpoet_codegen::generation::ImportCollector;
///
/// let spec = TypeSpec::struct_("Event")
///     .add_field(FieldSpec::builder("date", TypeName::named("Date").add_import("Foundation")).build())
///     .add_import("Combine")
///     .build();
///
/// let mut imports = ImportCollector::new();
/// imports.extend(&spec);
/// assert_eq!(imports.render(), "import Combine\nimport Foundation\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    modules: BTreeSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect everything a node depends on.
    pub fn from_node<T: CollectImports + ?Sized>(node: &T) -> Self {
        Self {
            modules: node.collect_imports(),
        }
    }

    /// Add a module import.
    pub fn add(&mut self, module: impl Into<String>) {
        let module = module.into();
        let module = module.trim();
        if !module.is_empty() {
            self.modules.insert(module.to_string());
        }
    }

    /// Add every module a node depends on.
    pub fn extend<T: CollectImports + ?Sized>(&mut self, node: &T) {
        for module in node.collect_imports() {
            self.add(module);
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        self.modules.extend(other.modules.iter().cloned());
    }

    /// Check if a module is already imported.
    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    /// Iterate over all modules in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Render one `import` statement per line.
    pub fn render(&self) -> String {
        self.modules
            .iter()
            .map(|module| format!("import {}\n", module))
            .collect()
    }
}
