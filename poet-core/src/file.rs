use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A source file produced by the generator.
pub trait GeneratedFile {
    /// Where the file lands under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    /// How an existing file at that path is treated.
    fn rules(&self) -> FileRules;

    /// The full file contents.
    fn render(&self) -> String;

    /// Render and persist the file under `base`.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

/// Outcome of [`File::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The file was created or replaced.
    Written,
    /// The file already held exactly this content.
    Unchanged,
    /// The file existed and the rules forbid touching it.
    Skipped,
}

/// Rendered contents bound to a destination path.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist the content, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => self.persist(),
            Overwrite::IfMissing if self.exists() => {
                tracing::debug!(path = %self.path.display(), "file exists, skipping");
                Ok(WriteResult::Skipped)
            }
            Overwrite::IfMissing => self.persist(),
            Overwrite::IfChanged => {
                if self.exists() && self.on_disk()? == self.content {
                    tracing::debug!(path = %self.path.display(), "file is up to date");
                    Ok(WriteResult::Unchanged)
                } else {
                    self.persist()
                }
            }
        }
    }

    fn on_disk(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("failed to read '{}'", self.path.display()))
    }

    fn persist(&self) -> Result<WriteResult> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        tracing::info!(
            path = %self.path.display(),
            bytes = self.content.len(),
            "wrote generated file"
        );
        Ok(WriteResult::Written)
    }
}

/// Write policy for a generated file.
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn new(overwrite: Overwrite) -> Self {
        Self { overwrite }
    }
}

/// What to do when the destination already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace it unconditionally.
    #[default]
    Always,
    /// Replace it only when the content differs, leaving timestamps alone.
    IfChanged,
    /// Never replace it.
    IfMissing,
}
