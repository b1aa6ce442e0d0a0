//! Declared type expressions and opaque framework type handles.
//!
//! Field types are represented as data: a [`TypeExpr`] tree of named types,
//! optional wrappers, containers, unions, and forward references. The leaves
//! are [`TypeRef`]s, opaque handles to framework-native declarations that
//! adapters downcast back to their own types.

use std::{
    any::Any,
    fmt,
    sync::{Arc, OnceLock},
};

/// Opaque, shared handle to a framework-native type declaration.
///
/// The core never inspects the wrapped value; it only carries it between the
/// type-argument resolver and the adapter registry. Frameworks recover their
/// declaration types with [`TypeRef::downcast_ref`] or [`TypeRef::downcast`].
#[derive(Clone)]
pub struct TypeRef {
    name: String,
    inner: Arc<dyn Any + Send + Sync>,
}

impl TypeRef {
    /// Wrap a framework declaration under a display name used in
    /// diagnostics and rendered type names.
    pub fn new(name: impl Into<String>, inner: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    /// The display name of the referenced type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the wrapped declaration as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Clone out the wrapped declaration as a shared `Arc<T>`, if it is one.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast().ok()
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named reference to a type that may not be declared yet.
///
/// The binding cell is shared between clones, so binding one occurrence of a
/// reference binds every expression that holds it. An unbound reference
/// encountered during resolution is the unevaluated-forward-reference failure
/// condition.
#[derive(Debug, Clone)]
pub struct ForwardRef {
    name: String,
    target: Arc<OnceLock<TypeRef>>,
}

impl ForwardRef {
    /// Create an unbound reference to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: Arc::new(OnceLock::new()),
        }
    }

    /// The referenced name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind the reference to a declaration. Returns `false` if it was
    /// already bound; the first binding wins.
    pub fn bind(&self, target: TypeRef) -> bool {
        self.target.set(target).is_ok()
    }

    /// The bound declaration, if any.
    pub fn get(&self) -> Option<&TypeRef> {
        self.target.get()
    }

    /// Whether the reference has been bound.
    pub fn is_bound(&self) -> bool {
        self.target.get().is_some()
    }
}

/// The kind of container a field type wraps its elements in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Sequence of elements (`Vec<T>`).
    List,
    /// Set of elements (`HashSet<T>`).
    Set,
    /// Key-value mapping (`HashMap<K, V>`).
    Map,
}

impl ContainerKind {
    /// Rendered container name.
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::List => "Vec",
            ContainerKind::Set => "HashSet",
            ContainerKind::Map => "HashMap",
        }
    }
}

/// A declared field type.
///
/// Expressions are trees: a bare named type, an optional wrapper, a container
/// with element type arguments, a union of alternatives, or one of the two
/// forward-reference forms that cannot be resolved yet.
#[derive(Debug, Clone)]
pub enum TypeExpr {
    /// A bare type.
    Named(TypeRef),
    /// A nullable wrapper around a type.
    Optional(Box<TypeExpr>),
    /// A container of element types.
    Container(ContainerKind, Vec<TypeExpr>),
    /// A union of alternative types.
    Union(Vec<TypeExpr>),
    /// A raw string annotation that was never parsed into an expression.
    StringRef(String),
    /// A recognized named reference, possibly not yet bound.
    Forward(ForwardRef),
}

impl TypeExpr {
    /// A bare named type.
    pub fn named(type_ref: TypeRef) -> Self {
        TypeExpr::Named(type_ref)
    }

    /// An optional wrapper around `inner`.
    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::Optional(Box::new(inner))
    }

    /// A sequence of `element`s.
    pub fn list(element: TypeExpr) -> Self {
        TypeExpr::Container(ContainerKind::List, vec![element])
    }

    /// A set of `element`s.
    pub fn set(element: TypeExpr) -> Self {
        TypeExpr::Container(ContainerKind::Set, vec![element])
    }

    /// A mapping from `key` to `value`.
    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Container(ContainerKind::Map, vec![key, value])
    }

    /// A union of `members`.
    pub fn union(members: Vec<TypeExpr>) -> Self {
        TypeExpr::Union(members)
    }

    /// Whether the outermost layer is an optional wrapper.
    pub fn is_optional(&self) -> bool {
        matches!(self, TypeExpr::Optional(_))
    }

    /// The expression with all outer optional layers removed.
    pub fn strip_optional(&self) -> &TypeExpr {
        let mut expr = self;
        while let TypeExpr::Optional(inner) = expr {
            expr = inner;
        }
        expr
    }

    /// Visit this expression and every nested expression, outermost first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a TypeExpr)) {
        f(self);
        match self {
            TypeExpr::Optional(inner) => inner.visit(f),
            TypeExpr::Container(_, args) | TypeExpr::Union(args) => {
                for arg in args {
                    arg.visit(f);
                }
            }
            TypeExpr::Named(_) | TypeExpr::StringRef(_) | TypeExpr::Forward(_) => {}
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(type_ref) => write!(f, "{}", type_ref.name()),
            TypeExpr::Optional(inner) => write!(f, "Option<{inner}>"),
            TypeExpr::Container(kind, args) => {
                write!(f, "{}<", kind.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            TypeExpr::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            TypeExpr::StringRef(raw) => write!(f, "{raw}"),
            TypeExpr::Forward(forward) => write!(f, "{}", forward.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeExpr {
        TypeExpr::named(TypeRef::new(name, Arc::new(())))
    }

    #[test]
    fn test_display_renders_nested_expressions() {
        let expr = TypeExpr::optional(TypeExpr::list(named("Quest")));

        assert_eq!(expr.to_string(), "Option<Vec<Quest>>");
    }

    #[test]
    fn test_display_renders_maps_and_unions() {
        let map = TypeExpr::map(named("String"), named("Quest"));
        assert_eq!(map.to_string(), "HashMap<String, Quest>");

        let union = TypeExpr::union(vec![named("Quest"), named("SideQuest")]);
        assert_eq!(union.to_string(), "Quest | SideQuest");
    }

    #[test]
    fn test_strip_optional_removes_all_outer_layers() {
        let expr = TypeExpr::optional(TypeExpr::optional(TypeExpr::list(named("Quest"))));

        assert!(expr.is_optional());
        assert!(matches!(
            expr.strip_optional(),
            TypeExpr::Container(ContainerKind::List, _)
        ));
    }

    #[test]
    fn test_forward_ref_binding_is_shared_between_clones() {
        let forward = ForwardRef::new("Quest");
        let clone = forward.clone();
        assert!(!clone.is_bound());

        assert!(forward.bind(TypeRef::new("Quest", Arc::new(()))));
        assert!(clone.is_bound());
        assert_eq!(clone.get().map(TypeRef::name), Some("Quest"));
    }

    #[test]
    fn test_forward_ref_first_binding_wins() {
        let forward = ForwardRef::new("Quest");

        assert!(forward.bind(TypeRef::new("Quest", Arc::new(()))));
        assert!(!forward.bind(TypeRef::new("Other", Arc::new(()))));
        assert_eq!(forward.get().map(TypeRef::name), Some("Quest"));
    }

    #[test]
    fn test_visit_reaches_every_nested_expression() {
        let expr = TypeExpr::optional(TypeExpr::union(vec![
            named("Quest"),
            TypeExpr::list(named("Adventurer")),
        ]));

        let mut names = Vec::new();
        expr.visit(&mut |e| {
            if let TypeExpr::Named(t) = e {
                names.push(t.name().to_string());
            }
        });

        assert_eq!(names, vec!["Quest", "Adventurer"]);
    }

    #[test]
    fn test_downcast_recovers_the_declaration() {
        #[derive(Debug, PartialEq)]
        struct Decl(u32);

        let type_ref = TypeRef::new("Decl", Arc::new(Decl(7)));

        assert_eq!(type_ref.downcast_ref::<Decl>(), Some(&Decl(7)));
        assert!(type_ref.downcast_ref::<String>().is_none());
        assert_eq!(type_ref.downcast::<Decl>().as_deref(), Some(&Decl(7)));
    }
}
