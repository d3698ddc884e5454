//! Emission and import-aggregation contracts.
//!
//! Every node of a spec tree renders itself into a shared [`CodeWriter`]
//! and reports the modules it depends on. The two traversals are
//! independent: either can run on a tree without the other.

use std::collections::BTreeSet;

use super::code_writer::CodeWriter;

/// Trait for nodes that render themselves into a [`CodeWriter`].
///
/// Implementations append to the writer and hand it back for chaining.
pub trait Emit {
    /// Append this node's source text to the writer.
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter;
}

/// Trait for nodes that depend on external modules.
///
/// The result is a pure function of the (immutable) tree: calling it twice
/// yields the same set.
pub trait CollectImports {
    /// Collect the modules this node and everything it owns depend on.
    fn collect_imports(&self) -> BTreeSet<String>;
}

/// Blanket implementation for references.
impl<T: Emit + ?Sized> Emit for &T {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        (*self).emit(writer)
    }
}

/// Blanket implementation for Box.
impl<T: Emit + ?Sized> Emit for Box<T> {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        self.as_ref().emit(writer)
    }
}

impl<T: CollectImports + ?Sized> CollectImports for &T {
    fn collect_imports(&self) -> BTreeSet<String> {
        (*self).collect_imports()
    }
}

impl<T: CollectImports> CollectImports for Option<T> {
    fn collect_imports(&self) -> BTreeSet<String> {
        self.as_ref()
            .map(CollectImports::collect_imports)
            .unwrap_or_default()
    }
}

impl<T: CollectImports> CollectImports for [T] {
    fn collect_imports(&self) -> BTreeSet<String> {
        self.iter().flat_map(CollectImports::collect_imports).collect()
    }
}
