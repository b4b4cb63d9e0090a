use taskdef_manifest::annotations::input::{
    DefaultValue, HelpMarkDown, Input, InputType, Label, Name, Required, Variable, VisibleRule,
};
use taskdef_manifest::annotations::task;
use taskdef_manifest::{
    Category, EnumDecl, EnumDefinition, EnumMember, FieldDecl, InputTypeHint, ManifestError,
    RunsOn, TaskDefinition, TypeDecl, Visibility,
};

/// Where a published artifact is stored
pub struct ArtifactLocation;

impl EnumDefinition for ArtifactLocation {
    fn declaration() -> EnumDecl {
        EnumDecl::new("ArtifactLocation")
            .member(EnumMember::new("Container").label(Label::new("Pipeline container")))
            .member(EnumMember::new("FilePath").label(Label::new("A file share")))
            // Unlabeled members fall back to their identifier
            .member(EnumMember::new("Package"))
    }
}

pub struct PublishArtifact;

impl TaskDefinition for PublishArtifact {
    fn declaration() -> Result<TypeDecl, ManifestError> {
        Ok(TypeDecl::new("PublishArtifact")
            .annotate(task::Task)
            .annotate(task::Id::new("9f4c2a61-7d3e-4b5a-8c1f-2e6d0b9a7c35")?)
            .annotate(task::Name::new("PublishArtifact")?)
            .annotate(task::FriendlyName::new("Publish build artifact")?)
            .annotate(task::InstanceNameFormat::new("Publish $(ArtifactName)"))
            .annotate(task::Description::new(
                "Publish files to a container or a file share",
            ))
            .annotate(task::HelpUrl::new("https://example.com/tasks/publish-artifact"))
            .annotate(task::Author::new("taskdef"))
            .annotate(task::Preview::flag())
            .annotate(task::RunsOnTargets::new(RunsOn::AGENT | RunsOn::SERVER))
            .annotate(task::VisibleIn::new(Visibility::BUILD))
            .annotate(task::TaskCategory::new(Category::Artifacts))
            .annotate(task::MinimumAgentVersion::new("2.144.0")?)
            .field(
                FieldDecl::string("PathToPublish")
                    .annotate(Input)
                    .annotate(Label::new("Path to publish"))
                    .annotate(Required::flag())
                    .annotate(InputType::new(InputTypeHint::FilePath))
                    .annotate(HelpMarkDown::link(
                        "Folder or file to publish",
                        "https://example.com/tasks/publish-artifact#path",
                    )),
            )
            .field(
                FieldDecl::string("ArtifactName")
                    .annotate(Input)
                    .annotate(Label::new("Artifact name"))
                    .annotate(Required::flag())
                    .annotate(DefaultValue::new("drop")),
            )
            .field(
                FieldDecl::enumeration_of::<ArtifactLocation>("ArtifactType")
                    .annotate(Input)
                    .annotate(Label::new("Artifact publish location"))
                    .annotate(DefaultValue::new("Container")),
            )
            .field(
                FieldDecl::string("TargetPath")
                    .annotate(Input)
                    .annotate(Label::new("File share path"))
                    .annotate(VisibleRule::new("ArtifactType = FilePath")),
            )
            .field(
                FieldDecl::string("ReleaseNotes")
                    .annotate(Input)
                    .annotate(InputType::new(InputTypeHint::MultiLine)),
            )
            .field(
                FieldDecl::string("SigningKey")
                    .annotate(Input)
                    .annotate(Name::new("signingKeyFile"))
                    .annotate(Label::new("Signing key"))
                    .annotate(InputType::new(InputTypeHint::SecureFile)),
            )
            .field(
                FieldDecl::boolean("Parallel")
                    .annotate(Input)
                    .annotate(Label::new("Parallel copy"))
                    .annotate(InputType::new(InputTypeHint::Radio))
                    .annotate(DefaultValue::new(false)),
            )
            .field(FieldDecl::string("ArtifactUrl").annotate(Variable::new("artifactUrl"))))
    }
}
