//! Annotation value protocol
//!
//! Every annotation kind carries exactly one typed value ([`HasValue`]) and
//! knows how to find itself on a declaration point ([`Annotation`]). The
//! lookups in [`AnnotationSet`] are written once and serve every kind:
//!
//! ```
//! use taskdef_manifest::annotations::{input, AnnotationSet, FieldAnnotations};
//! use std::sync::Arc;
//!
//! let mut annotations = FieldAnnotations::default();
//! annotations.push(input::Label::new("Mola"));
//!
//! let label = annotations.value_or::<input::Label, _>(Arc::from("fallback"));
//! assert_eq!(label.as_ref(), "Mola");
//! let rule = annotations.value::<input::VisibleRule, _>();
//! assert!(rule.is_none());
//! ```

/// Capability shared by every annotation kind: it carries a single typed value
pub trait HasValue<T> {
    fn value(&self) -> &T;
}

/// An annotation kind that can be found on declaration point `P`
pub trait Annotation<P> {
    /// First annotation of this kind attached to `point`
    fn find(point: &P) -> Option<&Self>;
}

/// Typed lookups over a declaration point's annotations
pub trait AnnotationSet: Sized {
    /// Whether an annotation of kind `A` is attached
    fn has<A: Annotation<Self>>(&self) -> bool {
        A::find(self).is_some()
    }

    /// The value of annotation `A`, if attached
    fn value<A, T>(&self) -> Option<T>
    where
        A: Annotation<Self> + HasValue<T>,
        T: Clone,
    {
        A::find(self).map(|annotation| annotation.value().clone())
    }

    /// The value of annotation `A`, or `default` when it is not attached
    fn value_or<A, T>(&self, default: T) -> T
    where
        A: Annotation<Self> + HasValue<T>,
        T: Clone,
    {
        self.value::<A, T>().unwrap_or(default)
    }
}

/// Wire an annotation struct into a tagged-union annotation set.
///
/// Generates `Annotation<$set>` for the kind, plus `From<$kind>` for the
/// union so kinds can be attached directly. When `$value` is given the kind
/// also gets `HasValue<$value>` over its single tuple field.
macro_rules! annotation_kind {
    ($set:ty, $union:ident :: $variant:ident ( $kind:ty ) => $value:ty) => {
        annotation_kind!($set, $union::$variant($kind));

        impl $crate::annotations::HasValue<$value> for $kind {
            fn value(&self) -> &$value {
                &self.0
            }
        }
    };
    ($set:ty, $union:ident :: $variant:ident ( $kind:ty )) => {
        impl $crate::annotations::Annotation<$set> for $kind {
            fn find(point: &$set) -> Option<&Self> {
                point.iter().find_map(|annotation| match annotation {
                    $union::$variant(inner) => Some(inner),
                    _ => None,
                })
            }
        }

        impl From<$kind> for $union {
            fn from(annotation: $kind) -> Self {
                $union::$variant(annotation)
            }
        }
    };
}

pub mod input;
pub mod task;

pub use input::{FieldAnnotation, FieldAnnotations, MemberAnnotations};
pub use task::{TaskAnnotation, TaskAnnotations};
