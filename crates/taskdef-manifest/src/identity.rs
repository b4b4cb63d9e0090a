//! Task identity validation and construction
//!
//! Format checks run when the type-level annotations are built, so an invalid
//! name, friendly name, version or id never makes it into a declaration.
//! [`TaskIdentity::from_declaration`] then only checks that the mandatory
//! annotations are present.

use crate::annotations::task;
use crate::annotations::AnnotationSet;
use crate::declaration::TypeDecl;
use crate::errors::IdentityError;
use crate::types::{Category, RunsOn, Visibility};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Longest accepted friendly name, in characters
pub const FRIENDLY_NAME_MAX_CHARS: usize = 40;

static NAME_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-]+$").ok());
static VERSION_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+(\.\d+)?$").ok());

fn matches(pattern: &Lazy<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

/// Check a task name against `[A-Za-z0-9-]+`
pub fn validate_name(name: &str) -> Result<(), IdentityError> {
    if matches(&NAME_PATTERN, name) {
        Ok(())
    } else {
        Err(IdentityError::InvalidName(name.to_string()))
    }
}

/// Check that a friendly name is at most [`FRIENDLY_NAME_MAX_CHARS`] characters
pub fn validate_friendly_name(name: &str) -> Result<(), IdentityError> {
    let actual = name.chars().count();
    if actual <= FRIENDLY_NAME_MAX_CHARS {
        Ok(())
    } else {
        Err(IdentityError::FriendlyNameTooLong {
            value: name.to_string(),
            actual,
            max: FRIENDLY_NAME_MAX_CHARS,
        })
    }
}

/// Check a minimum agent version against `major.minor[.patch]`
pub fn validate_version(version: &str) -> Result<(), IdentityError> {
    if matches(&VERSION_PATTERN, version) {
        Ok(())
    } else {
        Err(IdentityError::InvalidVersion(version.to_string()))
    }
}

/// Parse a task id from its textual UUID form
pub fn parse_task_id(value: &str) -> Result<Uuid, IdentityError> {
    Uuid::parse_str(value).map_err(|e| IdentityError::InvalidId {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Type-level identity of a task
///
/// Fields are read-only outside the crate; the only way to obtain one is
/// [`TaskIdentity::from_declaration`], so every instance carries a validated
/// name, friendly name and version.
///
/// ```compile_fail
/// use taskdef_manifest::{assemble, Category, RunsOn, TaskIdentity, Visibility};
///
/// let identity = TaskIdentity {
///     id: uuid::Uuid::nil(),
///     name: "Invalid Name!".into(),
///     friendly_name: "x".repeat(41).into(),
///     instance_name_format: None,
///     description: None,
///     help_url: None,
///     help_mark_down: None,
///     author: None,
///     preview: None,
///     deprecated: None,
///     runs_on: RunsOn::default(),
///     visibility: Visibility::default(),
///     category: Category::Pipelines,
///     minimum_agent_version: Some("2.x".into()),
/// };
/// let _ = assemble(identity, Vec::new());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskIdentity {
    pub(crate) id: Uuid,
    pub(crate) name: Arc<str>,
    pub(crate) friendly_name: Arc<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) instance_name_format: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) help_url: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) help_mark_down: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) author: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) deprecated: Option<bool>,
    pub(crate) runs_on: RunsOn,
    pub(crate) visibility: Visibility,
    pub(crate) category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) minimum_agent_version: Option<Arc<str>>,
}

impl TaskIdentity {
    /// Build the identity from a type declaration's task annotations
    pub fn from_declaration(decl: &TypeDecl) -> Result<Self, IdentityError> {
        let annotations = &decl.annotations;

        if !annotations.has::<task::Task>() {
            return Err(IdentityError::NotATask(decl.ident.clone()));
        }

        let missing = |annotation: &'static str| IdentityError::MissingAnnotation {
            ty: decl.ident.clone(),
            annotation,
        };

        Ok(TaskIdentity {
            id: annotations
                .value::<task::Id, _>()
                .ok_or_else(|| missing("Id"))?,
            name: annotations
                .value::<task::Name, _>()
                .ok_or_else(|| missing("Name"))?,
            friendly_name: annotations
                .value::<task::FriendlyName, _>()
                .ok_or_else(|| missing("FriendlyName"))?,
            instance_name_format: annotations.value::<task::InstanceNameFormat, _>(),
            description: annotations.value::<task::Description, _>(),
            help_url: annotations.value::<task::HelpUrl, _>(),
            help_mark_down: annotations.value::<task::HelpMarkDown, _>(),
            author: annotations.value::<task::Author, _>(),
            preview: annotations.value::<task::Preview, _>(),
            deprecated: annotations.value::<task::Deprecated, _>(),
            runs_on: annotations.value_or::<task::RunsOnTargets, _>(RunsOn::default()),
            visibility: annotations.value_or::<task::VisibleIn, _>(Visibility::default()),
            category: annotations
                .value::<task::TaskCategory, _>()
                .ok_or_else(|| missing("Category"))?,
            minimum_agent_version: annotations.value::<task::MinimumAgentVersion, _>(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn instance_name_format(&self) -> Option<&str> {
        self.instance_name_format.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn help_url(&self) -> Option<&str> {
        self.help_url.as_deref()
    }

    pub fn help_mark_down(&self) -> Option<&str> {
        self.help_mark_down.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn preview(&self) -> Option<bool> {
        self.preview
    }

    pub fn deprecated(&self) -> Option<bool> {
        self.deprecated
    }

    pub fn runs_on(&self) -> RunsOn {
        self.runs_on
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn minimum_agent_version(&self) -> Option<&str> {
        self.minimum_agent_version.as_deref()
    }
}
