//! Explicit declarations of annotated task types
//!
//! A task type is described by a table built alongside it: its identifier,
//! type-level annotations and its fields in declaration order, each with a
//! declared kind and field annotations. Introspection walks this table.

use crate::annotations::{FieldAnnotation, FieldAnnotations, MemberAnnotations, TaskAnnotation, TaskAnnotations};
use crate::annotations::input::Label;
use crate::errors::ManifestError;
use crate::manifest::{build_manifest, output_variables, OutputVariable};
use crate::types::Manifest;
use smallvec::SmallVec;
use std::fmt;

/// Declared value kind of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    Enumeration(EnumDecl),
    /// Any other declared kind, by type name; never valid for an input
    Other(String),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => f.write_str("String"),
            FieldKind::Boolean => f.write_str("Boolean"),
            FieldKind::Enumeration(decl) => f.write_str(&decl.ident),
            FieldKind::Other(name) => f.write_str(name),
        }
    }
}

/// An enumeration of named members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub ident: String,
    pub members: SmallVec<[EnumMember; 4]>,
}

impl EnumDecl {
    pub fn new(ident: impl Into<String>) -> Self {
        EnumDecl {
            ident: ident.into(),
            members: SmallVec::new(),
        }
    }

    /// Append a member; declaration order is preserved
    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub ident: String,
    pub annotations: MemberAnnotations,
}

impl EnumMember {
    pub fn new(ident: impl Into<String>) -> Self {
        EnumMember {
            ident: ident.into(),
            annotations: MemberAnnotations::default(),
        }
    }

    pub fn label(mut self, label: Label) -> Self {
        self.annotations.push(label);
        self
    }
}

/// One field of a task type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub ident: String,
    pub kind: FieldKind,
    pub annotations: FieldAnnotations,
}

impl FieldDecl {
    pub fn new(ident: impl Into<String>, kind: FieldKind) -> Self {
        FieldDecl {
            ident: ident.into(),
            kind,
            annotations: FieldAnnotations::default(),
        }
    }

    pub fn string(ident: impl Into<String>) -> Self {
        Self::new(ident, FieldKind::String)
    }

    pub fn boolean(ident: impl Into<String>) -> Self {
        Self::new(ident, FieldKind::Boolean)
    }

    pub fn enumeration(ident: impl Into<String>, decl: EnumDecl) -> Self {
        Self::new(ident, FieldKind::Enumeration(decl))
    }

    /// Field of a kind introspection does not support, named by its type
    pub fn other(ident: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(ident, FieldKind::Other(type_name.into()))
    }

    /// Field backed by a modeled enumeration type
    pub fn enumeration_of<E: EnumDefinition>(ident: impl Into<String>) -> Self {
        Self::enumeration(ident, E::declaration())
    }

    pub fn annotate(mut self, annotation: impl Into<FieldAnnotation>) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A task type: identifier, type-level annotations and ordered fields
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub ident: String,
    pub annotations: TaskAnnotations,
    pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
    pub fn new(ident: impl Into<String>) -> Self {
        TypeDecl {
            ident: ident.into(),
            annotations: TaskAnnotations::default(),
            fields: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: impl Into<TaskAnnotation>) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}

/// A modeled enumeration that can describe its members
pub trait EnumDefinition {
    fn declaration() -> EnumDecl;
}

/// A modeled task type that publishes its declaration table
///
/// Building the declaration constructs the type-level annotations, so
/// format errors surface from [`TaskDefinition::declaration`].
pub trait TaskDefinition {
    fn declaration() -> Result<TypeDecl, ManifestError>;

    fn manifest() -> Result<Manifest, ManifestError> {
        build_manifest(&Self::declaration()?)
    }

    fn output_variables() -> Result<Vec<OutputVariable>, ManifestError> {
        Ok(output_variables(&Self::declaration()?))
    }
}
