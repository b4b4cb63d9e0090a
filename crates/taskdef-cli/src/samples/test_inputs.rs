use taskdef_manifest::annotations::input::{
    DefaultValue, HelpMarkDown, Input, Label, Required, Variable,
};
use taskdef_manifest::annotations::task;
use taskdef_manifest::{
    Category, EnumDecl, EnumDefinition, EnumMember, FieldDecl, ManifestError, TaskDefinition,
    TypeDecl,
};

/// Choices offered by the `Opciones` pick list
pub struct Opcion;

impl EnumDefinition for Opcion {
    fn declaration() -> EnumDecl {
        EnumDecl::new("Opcion")
            .member(EnumMember::new("Uno").label(Label::new("Opcion Uno")))
            .member(EnumMember::new("Dos").label(Label::new("Opcion Dos")))
            .member(EnumMember::new("Tres").label(Label::new("Opcion Tres")))
    }
}

/// Minimal sample task: a required string, a pick list and one output variable
pub struct TestInputs;

impl TaskDefinition for TestInputs {
    fn declaration() -> Result<TypeDecl, ManifestError> {
        Ok(TypeDecl::new("Program")
            .annotate(task::Task)
            .annotate(task::Id::new("3b1d7c52-4f0e-4b8a-a6d2-9c5e1f7a2b40")?)
            .annotate(task::Name::new("TestInputs")?)
            .annotate(task::FriendlyName::new("Test inputs")?)
            .annotate(task::Description::new("Exercises the basic input kinds"))
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
