//! Declared kind × input-kind hint compatibility
//!
//! | Declared    | No hint    | Allowed hints                   |
//! |-------------|------------|---------------------------------|
//! | String      | `string`   | FilePath, MultiLine, SecureFile |
//! | Boolean     | `boolean`  | Radio                           |
//! | Enumeration | `pickList` | none                            |
//!
//! Any other declared kind is unsupported.

use crate::declaration::{FieldDecl, FieldKind};
use crate::errors::IntrospectionError;
use crate::types::{InputType, InputTypeHint};

/// Resolve the normalized input type for `field` given its optional hint
pub fn resolve_input_type(
    field: &FieldDecl,
    hint: Option<InputTypeHint>,
) -> Result<InputType, IntrospectionError> {
    let incompatible = |hint: InputTypeHint| IntrospectionError::IncompatibleInputType {
        hint,
        field: field.ident.clone(),
        declared: field.kind.to_string(),
    };

    match (&field.kind, hint) {
        (FieldKind::String, None) => Ok(InputType::String),
        (
            FieldKind::String,
            Some(hint @ (InputTypeHint::FilePath | InputTypeHint::MultiLine | InputTypeHint::SecureFile)),
        ) => Ok(hint.input_type()),
        (FieldKind::Boolean, None) => Ok(InputType::Boolean),
        (FieldKind::Boolean, Some(InputTypeHint::Radio)) => Ok(InputType::Radio),
        (FieldKind::Enumeration(_), None) => Ok(InputType::PickList),
        (FieldKind::String | FieldKind::Boolean | FieldKind::Enumeration(_), Some(hint)) => {
            Err(incompatible(hint))
        }
        (FieldKind::Other(declared), _) => Err(IntrospectionError::UnsupportedField {
            field: field.ident.clone(),
            declared: declared.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::compatibility::*;
    use crate::declaration::EnumDecl;

    fn check(kind: FieldKind, hint: Option<InputTypeHint>) -> Result<InputType, IntrospectionError> {
        resolve_input_type(&FieldDecl::new("Field", kind), hint)
    }

    #[test]
    fn test_string_hints() {
        assert_eq!(check(FieldKind::String, None), Ok(InputType::String));
        assert_eq!(
            check(FieldKind::String, Some(InputTypeHint::FilePath)),
            Ok(InputType::FilePath)
        );
        assert_eq!(
            check(FieldKind::String, Some(InputTypeHint::MultiLine)),
            Ok(InputType::MultiLine)
        );
        assert_eq!(
            check(FieldKind::String, Some(InputTypeHint::SecureFile)),
            Ok(InputType::SecureFile)
        );
    }

    #[test]
    fn test_boolean_hints() {
        assert_eq!(check(FieldKind::Boolean, None), Ok(InputType::Boolean));
        assert_eq!(
            check(FieldKind::Boolean, Some(InputTypeHint::Radio)),
            Ok(InputType::Radio)
        );
    }

    #[test]
    fn test_radio_on_string_is_incompatible() {
        let err = resolve_input_type(
            &FieldDecl::string("Mola"),
            Some(InputTypeHint::Radio),
        );
        assert_eq!(
            err,
            Err(IntrospectionError::IncompatibleInputType {
                hint: InputTypeHint::Radio,
                field: "Mola".to_string(),
                declared: "String".to_string(),
            })
        );
    }

    #[test]
    fn test_file_path_on_boolean_is_incompatible() {
        assert!(matches!(
            check(FieldKind::Boolean, Some(InputTypeHint::FilePath)),
            Err(IntrospectionError::IncompatibleInputType { hint: InputTypeHint::FilePath, .. })
        ));
        assert!(check(FieldKind::Boolean, Some(InputTypeHint::MultiLine)).is_err());
    }

    #[test]
    fn test_any_hint_on_enumeration_is_incompatible() {
        for hint in [
            InputTypeHint::FilePath,
            InputTypeHint::MultiLine,
            InputTypeHint::Radio,
            InputTypeHint::SecureFile,
        ] {
            let result = check(FieldKind::Enumeration(EnumDecl::new("Opcion")), Some(hint));
            assert!(
                result.as_ref().is_err_and(|e| e.to_string().contains("of type Opcion")),
                "hint {} should be rejected: {:?}",
                hint,
                result
            );
        }
        assert_eq!(
            check(FieldKind::Enumeration(EnumDecl::new("Opcion")), None),
            Ok(InputType::PickList)
        );
    }

    #[test]
    fn test_other_kind_is_unsupported() {
        let result = check(FieldKind::Other("Int32".to_string()), None);
        assert_eq!(
            result,
            Err(IntrospectionError::UnsupportedField {
                field: "Field".to_string(),
                declared: "Int32".to_string(),
            })
        );
        assert!(check(FieldKind::Other("Int32".to_string()), Some(InputTypeHint::Radio)).is_err());
    }
}
