//! Type-argument resolution.
//!
//! Given a field's declared type expression, flatten it into the leaf type
//! candidates that should be tested against the adapter registry: bare types
//! yield themselves, optional wrappers are looked through (the "none" arm is
//! dropped), containers contribute their element types, unions contribute
//! every member. The two forward-reference forms cannot be resolved and fail
//! with distinct conditions; the graph builder attaches the owning model and
//! field before surfacing them.

use modelmap_core::types::{TypeExpr, TypeRef};
use thiserror::Error;

/// A declared type that cannot be flattened into candidates yet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The type is a raw string annotation that was never parsed.
    #[error("unresolved string annotation {0:?}")]
    StringForwardRef(String),

    /// The type names a forward reference that has not been bound.
    #[error("unevaluated forward reference {0:?}")]
    UnevaluatedForwardRef(String),
}

/// Flatten a declared type into the candidates to test against the registry.
///
/// # Errors
///
/// Returns [`ResolveError`] when the expression contains either
/// forward-reference form; resolution does not continue past the first one.
pub fn candidate_args(expr: &TypeExpr) -> Result<Vec<TypeRef>, ResolveError> {
    let mut candidates = Vec::new();
    collect(expr, &mut candidates)?;
    Ok(candidates)
}

fn collect(expr: &TypeExpr, out: &mut Vec<TypeRef>) -> Result<(), ResolveError> {
    match expr {
        TypeExpr::Named(type_ref) => out.push(type_ref.clone()),
        TypeExpr::Optional(inner) => collect(inner, out)?,
        TypeExpr::Container(_, args) | TypeExpr::Union(args) => {
            for arg in args {
                collect(arg, out)?;
            }
        }
        TypeExpr::StringRef(raw) => return Err(ResolveError::StringForwardRef(raw.clone())),
        TypeExpr::Forward(forward) => match forward.get() {
            Some(target) => out.push(target.clone()),
            None => {
                return Err(ResolveError::UnevaluatedForwardRef(
                    forward.name().to_string(),
                ));
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use modelmap_core::types::ForwardRef;

    use super::*;

    fn named(name: &str) -> TypeExpr {
        TypeExpr::named(TypeRef::new(name, Arc::new(())))
    }

    fn names(expr: &TypeExpr) -> Vec<String> {
        candidate_args(expr)
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect()
    }

    #[test]
    fn test_bare_type_yields_itself() {
        assert_eq!(names(&named("Quest")), vec!["Quest"]);
    }

    #[test]
    fn test_optional_yields_the_wrapped_candidates() {
        let expr = TypeExpr::optional(named("Quest"));

        assert_eq!(names(&expr), vec!["Quest"]);
    }

    #[test]
    fn test_containers_yield_their_type_arguments() {
        let list = TypeExpr::list(named("Adventurer"));
        assert_eq!(names(&list), vec!["Adventurer"]);

        let map = TypeExpr::map(named("String"), named("Quest"));
        assert_eq!(names(&map), vec!["String", "Quest"]);
    }

    #[test]
    fn test_unions_yield_every_member() {
        let expr = TypeExpr::union(vec![named("Quest"), TypeExpr::list(named("Adventurer"))]);

        assert_eq!(names(&expr), vec!["Quest", "Adventurer"]);
    }

    #[test]
    fn test_deep_nesting_flattens() {
        let expr = TypeExpr::optional(TypeExpr::list(TypeExpr::union(vec![
            named("Quest"),
            TypeExpr::optional(named("SideQuest")),
        ])));

        assert_eq!(names(&expr), vec!["Quest", "SideQuest"]);
    }

    #[test]
    fn test_string_annotation_fails_distinctly() {
        let expr = TypeExpr::list(TypeExpr::StringRef("Quest".to_string()));

        assert_eq!(
            candidate_args(&expr).unwrap_err(),
            ResolveError::StringForwardRef("Quest".to_string())
        );
    }

    #[test]
    fn test_unbound_forward_reference_fails_distinctly() {
        let expr = TypeExpr::optional(TypeExpr::Forward(ForwardRef::new("Quest")));

        assert_eq!(
            candidate_args(&expr).unwrap_err(),
            ResolveError::UnevaluatedForwardRef("Quest".to_string())
        );
    }

    #[test]
    fn test_bound_forward_reference_yields_its_target() {
        let forward = ForwardRef::new("Quest");
        forward.bind(TypeRef::new("Quest", Arc::new(())));
        let expr = TypeExpr::Forward(forward);

        assert_eq!(names(&expr), vec!["Quest"]);
    }
}
