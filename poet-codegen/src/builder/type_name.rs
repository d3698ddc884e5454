//! References to Swift types.
//!
//! A [`TypeName`] renders to its display name and carries the modules it
//! depends on, so import aggregation can walk into generic and collection
//! arguments.

use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
};

use super::{code_writer::CodeWriter, emit::CollectImports, emit::Emit};

/// Structural shape of a type reference.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// A plain named type (`Int`, `URLSession`, `T`).
    Named(String),
    /// An optional type: `T?`.
    Optional(Box<TypeName>),
    /// An array type: `[T]`.
    Array(Box<TypeName>),
    /// A dictionary type: `[K: V]`.
    Dictionary {
        /// Key type.
        key: Box<TypeName>,
        /// Value type.
        value: Box<TypeName>,
    },
    /// A generic type with arguments: `Result<T, E>`.
    Generic {
        /// Base type name (e.g., "Result", "Set").
        base: String,
        /// Type arguments.
        args: Vec<TypeName>,
    },
}

/// An immutable reference to a type.
///
/// Two type names are interchangeable when they render identically, so
/// equality and hashing only look at the rendered name.
#[derive(Debug, Clone)]
pub struct TypeName {
    kind: TypeKind,
    imports: BTreeSet<String>,
}

impl TypeName {
    fn from_kind(kind: TypeKind) -> Self {
        Self {
            kind,
            imports: BTreeSet::new(),
        }
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_kind(TypeKind::Named(name.into()))
    }

    /// Create an optional type reference.
    pub fn optional(inner: TypeName) -> Self {
        Self::from_kind(TypeKind::Optional(Box::new(inner)))
    }

    /// Create an array type reference.
    pub fn array(element: TypeName) -> Self {
        Self::from_kind(TypeKind::Array(Box::new(element)))
    }

    /// Create a dictionary type reference.
    pub fn dictionary(key: TypeName, value: TypeName) -> Self {
        Self::from_kind(TypeKind::Dictionary {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Create a generic type reference.
    pub fn generic(base: impl Into<String>, args: Vec<TypeName>) -> Self {
        Self::from_kind(TypeKind::Generic {
            base: base.into(),
            args,
        })
    }

    /// Convenience: `Int`.
    pub fn int() -> Self {
        Self::named("Int")
    }

    /// Convenience: `String`.
    pub fn string() -> Self {
        Self::named("String")
    }

    /// Convenience: `Bool`.
    pub fn bool() -> Self {
        Self::named("Bool")
    }

    /// Convenience: `Double`.
    pub fn double() -> Self {
        Self::named("Double")
    }

    /// Convenience: `Float`.
    pub fn float() -> Self {
        Self::named("Float")
    }

    /// Convenience: `Void`.
    pub fn void() -> Self {
        Self::named("Void")
    }

    /// Convenience: `AnyObject`.
    pub fn any_object() -> Self {
        Self::named("AnyObject")
    }

    /// Wrap this type in an optional.
    pub fn into_optional(self) -> Self {
        Self::optional(self)
    }

    /// Declare a module this type depends on.
    pub fn add_import(mut self, module: impl Into<String>) -> Self {
        self.imports.insert(module.into());
        self
    }

    /// Declare several modules this type depends on.
    pub fn add_imports(mut self, modules: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Fold every import of an equal type into this one.
    ///
    /// Equality ignores imports, so a duplicate that is dropped hands its
    /// modules to the entry that is kept.
    pub(crate) fn absorb_imports(&mut self, duplicate: &TypeName) {
        self.imports.extend(duplicate.collect_imports());
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Modules declared directly on this type (not its arguments).
    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    /// The rendered name, e.g. `[String: Int]?`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.kind, TypeKind::Optional(_))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Named(name) => f.write_str(name),
            TypeKind::Optional(inner) => write!(f, "{}?", inner),
            TypeKind::Array(element) => write!(f, "[{}]", element),
            TypeKind::Dictionary { key, value } => write!(f, "[{}: {}]", key, value),
            TypeKind::Generic { base, args } => {
                let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, "{}<{}>", base, args.join(", "))
            }
        }
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for TypeName {}

impl Hash for TypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl CollectImports for TypeName {
    fn collect_imports(&self) -> BTreeSet<String> {
        let mut imports = self.imports.clone();
        match &self.kind {
            TypeKind::Named(_) => {}
            TypeKind::Optional(inner) | TypeKind::Array(inner) => {
                imports.extend(inner.collect_imports());
            }
            TypeKind::Dictionary { key, value } => {
                imports.extend(key.collect_imports());
                imports.extend(value.collect_imports());
            }
            TypeKind::Generic { args, .. } => {
                for arg in args {
                    imports.extend(arg.collect_imports());
                }
            }
        }
        imports
    }
}

impl Emit for TypeName {
    fn emit<'w>(&self, writer: &'w mut CodeWriter) -> &'w mut CodeWriter {
        writer.emit_type(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TypeName::int().to_string(), "Int");
        assert_eq!(TypeName::optional(TypeName::string()).to_string(), "String?");
        assert_eq!(TypeName::array(TypeName::int()).to_string(), "[Int]");
        assert_eq!(
            TypeName::dictionary(TypeName::string(), TypeName::any_object()).to_string(),
            "[String: AnyObject]"
        );
        assert_eq!(
            TypeName::generic("Result", vec![TypeName::int(), TypeName::named("Error")])
                .to_string(),
            "Result<Int, Error>"
        );
    }

    #[test]
    fn test_equality_ignores_imports() {
        let plain = TypeName::named("Date");
        let imported = TypeName::named("Date").add_import("Foundation");
        assert_eq!(plain, imported);
        assert_ne!(plain, TypeName::named("Date").into_optional());
    }

    #[test]
    fn test_collect_imports_recurses_into_arguments() {
        let ty = TypeName::dictionary(
            TypeName::string(),
            TypeName::array(TypeName::named("UIImage").add_import("UIKit")),
        )
        .into_optional()
        .add_import("Foundation");

        let imports = ty.collect_imports();
        assert_eq!(
            imports.into_iter().collect::<Vec<_>>(),
            vec!["Foundation".to_string(), "UIKit".to_string()]
        );
    }

    #[test]
    fn test_absorb_imports_from_duplicate() {
        let mut kept = TypeName::array(TypeName::named("Foo"));
        let duplicate = TypeName::array(TypeName::named("Foo").add_import("FooKit"))
            .add_import("Collections");
        assert_eq!(kept, duplicate);

        kept.absorb_imports(&duplicate);
        let imports: Vec<_> = kept.collect_imports().into_iter().collect();
        assert_eq!(imports, vec!["Collections", "FooKit"]);
    }

    #[test]
    fn test_generic_arguments_imports() {
        let ty = TypeName::generic(
            "Observable",
            vec![TypeName::named("Decimal").add_import("Foundation")],
        )
        .add_import("RxSwift");
        assert!(ty.collect_imports().contains("Foundation"));
        assert!(ty.collect_imports().contains("RxSwift"));
        assert_eq!(ty.imports().len(), 1);
    }
}
