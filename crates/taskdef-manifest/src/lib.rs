//! Task Manifest Introspection
//!
//! This crate turns an annotated task type declaration into a validated
//! manifest: the task's identity plus one normalized entity per input field.
//!
//! Task types publish an explicit declaration table ([`TypeDecl`]) built from
//! the annotation catalog in [`annotations`]. [`build_manifest`] validates the
//! identity, introspects the input fields and assembles the result. The crate
//! performs no I/O; serializing the manifest is left to the caller.

pub mod annotations;
pub mod compatibility;
pub mod declaration;
pub mod errors;
pub mod identity;
pub mod introspection;
pub mod manifest;
pub mod types;

pub use declaration::{
    EnumDecl, EnumDefinition, EnumMember, FieldDecl, FieldKind, TaskDefinition, TypeDecl,
};
pub use errors::{IdentityError, IntrospectionError, ManifestError};
pub use identity::TaskIdentity;
pub use introspection::introspect;
pub use manifest::{assemble, build_manifest, output_variables, OutputVariable};
pub use types::{
    Category, DefaultValue, InputEntity, InputType, InputTypeHint, Manifest, PickListOptions,
    RunsOn, Visibility,
};
