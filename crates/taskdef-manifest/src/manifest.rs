//! Manifest assembly
//!
//! The pipeline is a single linear pass: identity → inputs → assembly. Each
//! stage either succeeds or returns the error that ends processing for the
//! type; no partial manifest is ever produced.

use crate::annotations::{input, AnnotationSet};
use crate::declaration::TypeDecl;
use crate::errors::ManifestError;
use crate::identity::TaskIdentity;
use crate::introspection::introspect;
use crate::types::{InputEntity, Manifest};
use serde::Serialize;
use std::sync::Arc;

/// Combine an already-validated identity and input entities
pub fn assemble(identity: TaskIdentity, inputs: Vec<InputEntity>) -> Manifest {
    Manifest { identity, inputs }
}

/// Build the manifest for a task type declaration
pub fn build_manifest(decl: &TypeDecl) -> Result<Manifest, ManifestError> {
    let identity = TaskIdentity::from_declaration(decl)?;
    let inputs = introspect(decl)?;
    Ok(assemble(identity, inputs))
}

/// A field whose runtime value is published under `name` after execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputVariable {
    pub field: Arc<str>,
    pub name: Arc<str>,
}

/// Output variable bindings of a type, in field declaration order
///
/// Bindings are independent of the input marker: any field may publish a
/// variable.
pub fn output_variables(decl: &TypeDecl) -> Vec<OutputVariable> {
    decl.fields
        .iter()
        .filter_map(|field| {
            field
                .annotations
                .value::<input::Variable, _>()
                .map(|name| OutputVariable {
                    field: Arc::from(field.ident.as_str()),
                    name,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::annotations::input::{DefaultValue, HelpMarkDown, Input, Label, Required, Variable};
    use crate::annotations::task;
    use crate::declaration::{EnumDecl, EnumMember, EnumDefinition, FieldDecl, TaskDefinition};
    use crate::errors::{IdentityError, IntrospectionError};
    use crate::manifest::*;
    use crate::types::{Category, InputType, InputTypeHint};
    use serde_json::json;

    struct Program;

    struct Opcion;

    impl EnumDefinition for Opcion {
        fn declaration() -> EnumDecl {
            EnumDecl::new("Opcion")
                .member(EnumMember::new("Uno").label(Label::new("Opcion Uno")))
                .member(EnumMember::new("Dos").label(Label::new("Opcion Dos")))
                .member(EnumMember::new("Tres").label(Label::new("Opcion Tres")))
        }
    }

    impl TaskDefinition for Program {
        fn declaration() -> Result<TypeDecl, ManifestError> {
            Ok(TypeDecl::new("Program")
                .annotate(task::Task)
                .annotate(task::Id::new("3b1d7c52-4f0e-4b8a-a6d2-9c5e1f7a2b40")?)
                .annotate(task::Name::new("TestInputs")?)
                .annotate(task::FriendlyName::new("Test inputs")?)
                .annotate(task::TaskCategory::new(Category::Pipelines))
                .field(
                    FieldDecl::string("Mola")
                        .annotate(Input)
                        .annotate(Label::new("Mola"))
                        .annotate(Required::flag()),
                )
                .field(
                    FieldDecl::enumeration_of::<Opcion>("Opciones")
                        .annotate(Input)
                        .annotate(Label::new("Opciones a elegir"))
                        .annotate(HelpMarkDown::new(
                            "Las opciones posibles son Opcion Uno, Opcion Dos, Opcion Tres",
                        ))
                        .annotate(DefaultValue::new("Uno")),
                )
                .field(FieldDecl::string("Relase").annotate(Variable::new("release"))))
        }
    }

    #[test]
    fn test_end_to_end_manifest() -> Result<(), ManifestError> {
        let manifest = Program::manifest()?;
        assert_eq!(manifest.identity.name.as_ref(), "TestInputs");
        assert_eq!(manifest.inputs.len(), 2);

        let mola = &manifest.inputs[0];
        assert_eq!(mola.name.as_ref(), "Mola");
        assert_eq!(mola.label.as_ref(), "Mola");
        assert_eq!(mola.input_type, InputType::String);
        assert!(mola.required);
        assert!(mola.options.is_none());

        let opciones = &manifest.inputs[1];
        assert_eq!(opciones.name.as_ref(), "Opciones");
        assert_eq!(opciones.label.as_ref(), "Opciones a elegir");
        assert_eq!(opciones.input_type, InputType::PickList);
        assert!(!opciones.required);
        assert_eq!(
            opciones.default_value,
            Some(crate::types::DefaultValue::from("Uno"))
        );
        let options = opciones.options.clone().unwrap_or_default();
        assert_eq!(
            serde_json::to_string(&options).unwrap_or_default(),
            r#"{"Uno":"Opcion Uno","Dos":"Opcion Dos","Tres":"Opcion Tres"}"#
        );
        Ok(())
    }

    #[test]
    fn test_manifest_document_shape() -> Result<(), ManifestError> {
        let manifest = Program::manifest()?;
        let value = serde_json::to_value(&manifest).unwrap_or_default();

        assert_eq!(
            value,
            json!({
                "id": "3b1d7c52-4f0e-4b8a-a6d2-9c5e1f7a2b40",
                "name": "TestInputs",
                "friendlyName": "Test inputs",
                "runsOn": ["Agent"],
                "visibility": ["Build", "Release"],
                "category": "Pipelines",
                "inputs": [
                    {
                        "name": "Mola",
                        "label": "Mola",
                        "type": "string",
                        "required": true
                    },
                    {
                        "name": "Opciones",
                        "label": "Opciones a elegir",
                        "type": "pickList",
                        "defaultValue": "Uno",
                        "required": false,
                        "helpMarkDown": "Las opciones posibles son Opcion Uno, Opcion Dos, Opcion Tres",
                        "options": {
                            "Uno": "Opcion Uno",
                            "Dos": "Opcion Dos",
                            "Tres": "Opcion Tres"
                        }
                    }
                ]
            })
        );
        Ok(())
    }

    #[test]
    fn test_introspection_is_idempotent() -> Result<(), ManifestError> {
        let decl = Program::declaration()?;
        let first = build_manifest(&decl)?;
        let second = build_manifest(&decl)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_concurrent_builds_are_independent() -> Result<(), ManifestError> {
        let decl = Program::declaration()?;
        let expected = build_manifest(&decl)?;

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| build_manifest(&decl))).collect();
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        for result in results {
            assert!(result.is_ok_and(|built| built == Ok(expected.clone())));
        }
        Ok(())
    }

    #[test]
    fn test_output_variables() -> Result<(), ManifestError> {
        let variables = Program::output_variables()?;
        assert_eq!(
            variables,
            vec![OutputVariable {
                field: Arc::from("Relase"),
                name: Arc::from("release"),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_identity_failure_produces_no_manifest() {
        let decl = TypeDecl::new("Program")
            .annotate(task::Task)
            .field(FieldDecl::string("Mola").annotate(Input));
        assert!(matches!(
            build_manifest(&decl),
            Err(ManifestError::Identity(IdentityError::MissingAnnotation { annotation: "Id", .. }))
        ));
    }

    #[test]
    fn test_field_failure_produces_no_manifest() -> Result<(), ManifestError> {
        let decl = Program::declaration()?.field(
            FieldDecl::boolean("Flag")
                .annotate(Input)
                .annotate(crate::annotations::input::InputType::new(InputTypeHint::FilePath)),
        );
        assert_eq!(
            build_manifest(&decl),
            Err(ManifestError::Introspection(
                IntrospectionError::IncompatibleInputType {
                    hint: InputTypeHint::FilePath,
                    field: "Flag".to_string(),
                    declared: "Boolean".to_string(),
                }
            ))
        );
        Ok(())
    }

    #[test]
    fn test_assembled_identity_only_carries_validated_values() -> Result<(), ManifestError> {
        assert!(task::Name::new("Invalid Name!").is_err());
        assert!(task::FriendlyName::new("x".repeat(41)).is_err());
        assert!(task::MinimumAgentVersion::new("2.x").is_err());

        let decl = Program::declaration()?.annotate(task::MinimumAgentVersion::new("2.10")?);
        let identity = TaskIdentity::from_declaration(&decl)?;
        let manifest = assemble(identity, introspect(&decl)?);

        assert_eq!(manifest.identity().name(), "TestInputs");
        assert_eq!(manifest.identity().friendly_name(), "Test inputs");
        assert_eq!(manifest.identity().minimum_agent_version(), Some("2.10"));
        for input in manifest.inputs() {
            assert_eq!(
                input.options().is_some(),
                input.input_type() == InputType::PickList
            );
        }
        Ok(())
    }

    #[test]
    fn test_format_error_surfaces_from_declaration() {
        let decl = task::Name::new("Invalid Name!").map(|name| TypeDecl::new("Program").annotate(name));
        assert_eq!(
            decl.map_err(ManifestError::from).map(|d| d.ident),
            Err(ManifestError::Identity(IdentityError::InvalidName(
                "Invalid Name!".to_string()
            )))
        );
    }
}
