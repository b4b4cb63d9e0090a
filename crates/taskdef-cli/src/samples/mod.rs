//! Task definitions bundled with the CLI
//!
//! Each entry pairs a lookup key with the declaration function of a
//! [`TaskDefinition`] implementor.

mod publish_artifact;
mod test_inputs;

pub use publish_artifact::{ArtifactLocation, PublishArtifact};
pub use test_inputs::{Opcion, TestInputs};

use crate::errors::CliError;
use taskdef_manifest::{ManifestError, TaskDefinition, TypeDecl};

/// A bundled task definition, addressable by key
pub struct BundledTask {
    pub key: &'static str,
    pub summary: &'static str,
    declaration: fn() -> Result<TypeDecl, ManifestError>,
}

impl BundledTask {
    pub fn declaration(&self) -> Result<TypeDecl, ManifestError> {
        (self.declaration)()
    }
}

static BUNDLED: &[BundledTask] = &[
    BundledTask {
        key: "test-inputs",
        summary: "Sample task with a string, a pick list and an output variable",
        declaration: <TestInputs as TaskDefinition>::declaration,
    },
    BundledTask {
        key: "publish-artifact",
        summary: "Publishes a build artifact; exercises every input kind hint",
        declaration: <PublishArtifact as TaskDefinition>::declaration,
    },
];

/// All bundled tasks in registration order
pub fn bundled_tasks() -> &'static [BundledTask] {
    BUNDLED
}

/// Look up a bundled task by key (case-insensitive)
pub fn find_task(key: &str) -> Result<&'static BundledTask, CliError> {
    BUNDLED
        .iter()
        .find(|task| task.key.eq_ignore_ascii_case(key.trim()))
        .ok_or_else(|| CliError::UnknownTask {
            key: key.to_string(),
            available: BUNDLED
                .iter()
                .map(|task| task.key)
                .collect::<Vec<_>>()
                .join(", "),
        })
}
