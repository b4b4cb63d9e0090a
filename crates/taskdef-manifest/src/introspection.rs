//! Field introspection
//!
//! Walks a type declaration's fields in declaration order, keeps those marked
//! with [`input::Input`], and builds one [`InputEntity`] per field. The first
//! failing field aborts the whole type.

use crate::annotations::{input, AnnotationSet};
use crate::compatibility::resolve_input_type;
use crate::declaration::{EnumDecl, FieldDecl, FieldKind, TypeDecl};
use crate::errors::IntrospectionError;
use crate::types::{InputEntity, PickListOptions};
use std::sync::Arc;

/// Build the input entities for every field marked as a task input
pub fn introspect(decl: &TypeDecl) -> Result<Vec<InputEntity>, IntrospectionError> {
    decl.fields
        .iter()
        .filter(|field| is_input(field))
        .map(to_entity)
        .collect()
}

pub fn is_input(field: &FieldDecl) -> bool {
    field.annotations.has::<input::Input>()
}

/// Build the input entity for a single field
pub fn to_entity(field: &FieldDecl) -> Result<InputEntity, IntrospectionError> {
    let annotations = &field.annotations;
    let ident: Arc<str> = Arc::from(field.ident.as_str());

    let hint = annotations.value::<input::InputType, _>();
    let input_type = resolve_input_type(field, hint)?;

    let options = match &field.kind {
        FieldKind::Enumeration(decl) => Some(pick_list_options(decl)),
        _ => None,
    };

    Ok(InputEntity {
        name: annotations.value_or::<input::Name, _>(ident.clone()),
        label: annotations.value_or::<input::Label, _>(ident),
        input_type,
        default_value: annotations.value::<input::DefaultValue, _>(),
        required: annotations.value_or::<input::Required, _>(false),
        help_mark_down: annotations.value::<input::HelpMarkDown, _>(),
        group_name: None,
        visible_rule: annotations.value::<input::VisibleRule, _>(),
        options,
    })
}

/// Member identifier to label, in member declaration order
fn pick_list_options(decl: &EnumDecl) -> PickListOptions {
    decl.members
        .iter()
        .map(|member| {
            let key: Arc<str> = Arc::from(member.ident.as_str());
            let label = member.annotations.value_or::<input::Label, _>(key.clone());
            (key, label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::annotations::input::{DefaultValue, HelpMarkDown, Input, InputType, Label, Name, Required, VisibleRule};
    use crate::declaration::{EnumMember, FieldDecl, TypeDecl};
    use crate::introspection::*;
    use crate::types::{self, InputTypeHint};

    fn colors() -> EnumDecl {
        EnumDecl::new("Color")
            .member(EnumMember::new("Red").label(Label::new("Bright red")))
            .member(EnumMember::new("Green"))
            .member(EnumMember::new("Blue").label(Label::new("Deep blue")))
    }

    #[test]
    fn test_only_marked_fields_are_inputs() -> Result<(), IntrospectionError> {
        let decl = TypeDecl::new("Sample")
            .field(FieldDecl::string("First").annotate(Input))
            .field(FieldDecl::string("Hidden").annotate(Label::new("not an input")))
            .field(FieldDecl::other("Count", "Int32"))
            .field(FieldDecl::boolean("Second").annotate(Input));

        let inputs = introspect(&decl)?;
        let names: Vec<_> = inputs.iter().map(|i| i.name.as_ref()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        Ok(())
    }

    #[test]
    fn test_defaults_come_from_field_identifier() -> Result<(), IntrospectionError> {
        let entity = to_entity(&FieldDecl::string("Path").annotate(Input))?;
        assert_eq!(entity.name.as_ref(), "Path");
        assert_eq!(entity.label.as_ref(), "Path");
        assert_eq!(entity.input_type, types::InputType::String);
        assert!(!entity.required);
        assert!(entity.default_value.is_none());
        assert!(entity.help_mark_down.is_none());
        assert!(entity.group_name.is_none());
        assert!(entity.visible_rule.is_none());
        assert!(entity.options.is_none());
        Ok(())
    }

    #[test]
    fn test_annotation_values_are_extracted() -> Result<(), IntrospectionError> {
        let field = FieldDecl::string("Script")
            .annotate(Input)
            .annotate(Name::new("scriptPath"))
            .annotate(Label::new("Script path"))
            .annotate(Required::flag())
            .annotate(DefaultValue::new("build.sh"))
            .annotate(HelpMarkDown::link("docs", "https://example.com"))
            .annotate(VisibleRule::new("useScript = true"))
            .annotate(InputType::new(InputTypeHint::FilePath));

        let entity = to_entity(&field)?;
        assert_eq!(entity.name.as_ref(), "scriptPath");
        assert_eq!(entity.label.as_ref(), "Script path");
        assert!(entity.required);
        assert_eq!(entity.default_value, Some(types::DefaultValue::from("build.sh")));
        assert_eq!(
            entity.help_mark_down.as_deref(),
            Some("[docs](https://example.com)")
        );
        assert_eq!(entity.visible_rule.as_deref(), Some("useScript = true"));
        assert_eq!(entity.input_type, types::InputType::FilePath);
        Ok(())
    }

    #[test]
    fn test_enumeration_builds_ordered_options() -> Result<(), IntrospectionError> {
        let entity = to_entity(&FieldDecl::enumeration("Color", colors()).annotate(Input))?;
        assert_eq!(entity.input_type, types::InputType::PickList);

        let options = entity.options.unwrap_or_default();
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["Red", "Green", "Blue"]);
        assert_eq!(options.get("Red"), Some("Bright red"));
        assert_eq!(options.get("Green"), Some("Green"));
        assert_eq!(options.get("Blue"), Some("Deep blue"));
        Ok(())
    }

    #[test]
    fn test_boolean_radio() -> Result<(), IntrospectionError> {
        let entity = to_entity(
            &FieldDecl::boolean("Mode")
                .annotate(Input)
                .annotate(InputType::new(InputTypeHint::Radio)),
        )?;
        assert_eq!(entity.input_type, types::InputType::Radio);
        assert!(entity.options.is_none());
        Ok(())
    }

    #[test]
    fn test_first_failing_field_aborts() {
        let decl = TypeDecl::new("Broken")
            .field(FieldDecl::string("Ok").annotate(Input))
            .field(
                FieldDecl::enumeration("Color", colors())
                    .annotate(Input)
                    .annotate(InputType::new(InputTypeHint::Radio)),
            )
            .field(FieldDecl::other("Count", "Int32").annotate(Input));

        assert_eq!(
            introspect(&decl),
            Err(IntrospectionError::IncompatibleInputType {
                hint: InputTypeHint::Radio,
                field: "Color".to_string(),
                declared: "Color".to_string(),
            })
        );
    }

    #[test]
    fn test_unmarked_unsupported_field_is_ignored() -> Result<(), IntrospectionError> {
        let decl = TypeDecl::new("Sample").field(FieldDecl::other("Count", "Int32"));
        assert!(introspect(&decl)?.is_empty());
        Ok(())
    }
}
