//! File packaging options, loadable from TOML.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use swiftpoet_codegen::builder::Indent;
use swiftpoet_core::Overwrite;

use crate::error::{Error, Result, SourceContext};

/// Options controlling how a [`PoetFile`](crate::PoetFile) is rendered.
///
/// ```toml
/// indent_width = 2
/// use_tabs = false
/// generator_info = "schema v3"
/// add_generation_date = false
/// overwrite = "if-changed"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileOptions {
    /// Spaces per indentation level, ignored when `use_tabs` is set.
    pub indent_width: u8,
    pub use_tabs: bool,
    /// Extra line appended to the `Generated by` header block.
    pub generator_info: Option<String>,
    /// Whether the header records the generation date.
    pub add_generation_date: bool,
    pub overwrite: OverwritePolicy,
}

/// What writing a file does when the destination already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwritePolicy {
    #[default]
    Always,
    IfChanged,
    IfMissing,
}

impl From<OverwritePolicy> for Overwrite {
    fn from(policy: OverwritePolicy) -> Self {
        match policy {
            OverwritePolicy::Always => Overwrite::Always,
            OverwritePolicy::IfChanged => Overwrite::IfChanged,
            OverwritePolicy::IfMissing => Overwrite::IfMissing,
        }
    }
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            use_tabs: false,
            generator_info: None,
            add_generation_date: true,
            overwrite: OverwritePolicy::Always,
        }
    }
}

impl FromStr for FileOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "swiftpoet.toml")
    }
}

impl FileOptions {
    /// Parse options from TOML, using `filename` in diagnostics.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let options: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        options.validate(&ctx)?;
        Ok(options)
    }

    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let options = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded file options");
        Ok(options)
    }

    /// The indentation unit these options select.
    pub fn indent(&self) -> Indent {
        if self.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent_width)
        }
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if !self.use_tabs && !(1..=Indent::MAX_SPACES).contains(&self.indent_width) {
            return Err(ctx.validation_error(
                "indent_width",
                format!("unsupported indent width {}", self.indent_width),
            ));
        }
        Ok(())
    }
}
