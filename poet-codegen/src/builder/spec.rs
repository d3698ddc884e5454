//! State and behavior shared by every spec kind.
//!
//! Rust has no implementation inheritance, so each concrete spec embeds a
//! [`SpecBase`] and exposes it through the [`Spec`] trait. Builders embed the
//! same struct and get the common chainable adders from [`SpecBuilder`].

use std::collections::BTreeSet;

use super::{
    construct::Construct,
    emit::{CollectImports, Emit},
    modifier::{Modifier, Modifiers},
};

/// Fields every spec carries.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecBase {
    pub(crate) name: String,
    pub(crate) construct: Construct,
    pub(crate) modifiers: Modifiers,
    pub(crate) description: Option<String>,
    pub(crate) imports: BTreeSet<String>,
}

impl SpecBase {
    pub(crate) fn new(name: impl Into<String>, construct: Construct) -> Self {
        Self {
            name: name.into(),
            construct,
            modifiers: Modifiers::new(),
            description: None,
            imports: BTreeSet::new(),
        }
    }
}

/// An immutable, named, documented source construct.
pub trait Spec: Emit + CollectImports {
    fn base(&self) -> &SpecBase;

    /// The raw name, as given to the builder. Cleaning happens at render time.
    fn name(&self) -> &str {
        &self.base().name
    }

    fn construct(&self) -> Construct {
        self.base().construct
    }

    fn modifiers(&self) -> &Modifiers {
        &self.base().modifiers
    }

    fn description(&self) -> Option<&str> {
        self.base().description.as_deref()
    }

    /// Imports declared explicitly by the author of this spec.
    fn imports(&self) -> &BTreeSet<String> {
        &self.base().imports
    }
}

/// Accumulates a spec's state; the only place defaulting happens.
///
/// Adders consume and return the builder so calls chain in declaration
/// order. Nothing is validated across fields.
pub trait SpecBuilder: Sized {
    /// The spec kind this builder produces.
    type Output: Spec;

    fn base_mut(&mut self) -> &mut SpecBase;

    /// Freeze the accumulated state into an immutable spec.
    fn build(self) -> Self::Output;

    fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.base_mut().modifiers.insert(modifier);
        self
    }

    fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.base_mut().modifiers.extend(modifiers);
        self
    }

    fn add_description(mut self, description: impl Into<String>) -> Self {
        self.base_mut().description = Some(description.into());
        self
    }

    fn add_import(mut self, module: impl Into<String>) -> Self {
        self.base_mut().imports.insert(module.into());
        self
    }

    fn add_imports(mut self, modules: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.base_mut()
            .imports
            .extend(modules.into_iter().map(Into::into));
        self
    }
}
