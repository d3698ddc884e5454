//! A Swift source file holding one top-level type.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use swiftpoet_codegen::{
    builder::{CodeWriter, Emit, Spec, TypeSpec},
    generation::ImportCollector,
};
use swiftpoet_core::{FileRules, GeneratedFile};

use crate::config::FileOptions;

const GENERATOR: &str = "SwiftPoet";

/// A generated `.swift` file: header comment, imports and the type itself.
#[derive(Debug, Clone)]
pub struct PoetFile {
    spec: TypeSpec,
    options: FileOptions,
    generation_date: Option<NaiveDate>,
}

impl PoetFile {
    pub fn new(spec: TypeSpec, options: FileOptions) -> Self {
        Self {
            spec,
            options,
            generation_date: None,
        }
    }

    /// Pin the date written to the header instead of using today's.
    pub fn with_generation_date(mut self, date: NaiveDate) -> Self {
        self.generation_date = Some(date);
        self
    }

    pub fn spec(&self) -> &TypeSpec {
        &self.spec
    }

    pub fn options(&self) -> &FileOptions {
        &self.options
    }

    /// `<TypeName>.swift`
    pub fn file_name(&self) -> String {
        format!("{}.swift", self.spec.type_name())
    }

    /// Modules the file imports.
    pub fn imports(&self) -> ImportCollector {
        ImportCollector::from_node(&self.spec)
    }

    /// Render the complete file.
    pub fn contents(&self) -> String {
        let imports = self.imports();
        tracing::debug!(
            file = %self.file_name(),
            imports = imports.len(),
            "rendering swift file"
        );

        let mut out = self.header();
        out.push('\n');
        if !imports.is_empty() {
            out.push_str(&imports.render());
            out.push('\n');
        }

        let mut writer = CodeWriter::new(self.options.indent());
        self.spec.emit(&mut writer);
        out.push_str(writer.as_str());
        out
    }

    fn header(&self) -> String {
        let mut lines = vec![
            String::new(),
            format!("  {}", self.file_name()),
            String::new(),
            "  Contains:".to_string(),
            format!("  {} {}", self.spec.construct().keyword(), self.spec.type_name()),
            String::new(),
            format!("  Generated by {}", GENERATOR),
        ];
        if let Some(info) = &self.options.generator_info {
            lines.push(format!("  {}", info));
        }
        if self.options.add_generation_date {
            let date = self
                .generation_date
                .unwrap_or_else(|| Local::now().date_naive());
            lines.push(format!("  on {}", date.format("%B %-d, %Y")));
        }
        lines.push(String::new());

        lines
            .iter()
            .map(|line| format!("//{}\n", line))
            .collect()
    }
}

impl GeneratedFile for PoetFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::new(self.options.overwrite.into())
    }

    fn render(&self) -> String {
        self.contents()
    }
}
