//! Type-level annotations describing the task itself
//!
//! Format-restricted kinds ([`Id`], [`Name`], [`FriendlyName`],
//! [`MinimumAgentVersion`]) validate in their constructors and return an
//! [`IdentityError`] immediately.

use super::AnnotationSet;
use crate::errors::IdentityError;
use crate::identity::{parse_task_id, validate_friendly_name, validate_name, validate_version};
use crate::types::{Category, RunsOn, Visibility};
use std::sync::Arc;
use uuid::Uuid;

/// Marks a type as a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task;

/// Globally unique task id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(Uuid);

impl Id {
    pub fn new(id: &str) -> Result<Self, IdentityError> {
        parse_task_id(id).map(Id)
    }
}

impl From<Uuid> for Id {
    fn from(id: Uuid) -> Self {
        Id(id)
    }
}

/// Task name, restricted to `[A-Za-z0-9-]+`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: impl Into<Arc<str>>) -> Result<Self, IdentityError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Name(name))
    }
}

/// Human-readable name, at most 40 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendlyName(Arc<str>);

impl FriendlyName {
    pub fn new(name: impl Into<Arc<str>>) -> Result<Self, IdentityError> {
        let name = name.into();
        validate_friendly_name(&name)?;
        Ok(FriendlyName(name))
    }
}

/// Format string for naming task instances, e.g. `Echo $(message)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceNameFormat(Arc<str>);

impl InstanceNameFormat {
    pub fn new(format: impl Into<Arc<str>>) -> Self {
        InstanceNameFormat(format.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(Arc<str>);

impl Description {
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        Description(description.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpUrl(Arc<str>);

impl HelpUrl {
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        HelpUrl(url.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpMarkDown(Arc<str>);

impl HelpMarkDown {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        HelpMarkDown(text.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author(Arc<str>);

impl Author {
    pub fn new(author: impl Into<Arc<str>>) -> Self {
        Author(author.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview(bool);

impl Preview {
    pub fn new(preview: bool) -> Self {
        Preview(preview)
    }

    pub fn flag() -> Self {
        Preview(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecated(bool);

impl Deprecated {
    pub fn new(deprecated: bool) -> Self {
        Deprecated(deprecated)
    }

    pub fn flag() -> Self {
        Deprecated(true)
    }
}

/// Run targets; defaults to [`RunsOn::AGENT`] when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunsOnTargets(RunsOn);

impl RunsOnTargets {
    pub fn new(targets: RunsOn) -> Self {
        RunsOnTargets(targets)
    }
}

/// Visibility; defaults to build and release when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleIn(Visibility);

impl VisibleIn {
    pub fn new(visibility: Visibility) -> Self {
        VisibleIn(visibility)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCategory(Category);

impl TaskCategory {
    pub fn new(category: Category) -> Self {
        TaskCategory(category)
    }
}

/// Oldest agent able to run the task, `major.minor[.patch]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumAgentVersion(Arc<str>);

impl MinimumAgentVersion {
    pub fn new(version: impl Into<Arc<str>>) -> Result<Self, IdentityError> {
        let version = version.into();
        validate_version(&version)?;
        Ok(MinimumAgentVersion(version))
    }
}

/// Any annotation attachable to a task type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAnnotation {
    Task(Task),
    Id(Id),
    Name(Name),
    FriendlyName(FriendlyName),
    InstanceNameFormat(InstanceNameFormat),
    Description(Description),
    HelpUrl(HelpUrl),
    HelpMarkDown(HelpMarkDown),
    Author(Author),
    Preview(Preview),
    Deprecated(Deprecated),
    RunsOn(RunsOnTargets),
    Visibility(VisibleIn),
    Category(TaskCategory),
    MinimumAgentVersion(MinimumAgentVersion),
}

/// Annotations attached to a task type, in attachment order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskAnnotations(Vec<TaskAnnotation>);

impl TaskAnnotations {
    pub fn push(&mut self, annotation: impl Into<TaskAnnotation>) {
        self.0.push(annotation.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskAnnotation> {
        self.0.iter()
    }
}

impl AnnotationSet for TaskAnnotations {}

annotation_kind!(TaskAnnotations, TaskAnnotation::Task(Task));
annotation_kind!(TaskAnnotations, TaskAnnotation::Id(Id) => Uuid);
annotation_kind!(TaskAnnotations, TaskAnnotation::Name(Name) => Arc<str>);
annotation_kind!(TaskAnnotations, TaskAnnotation::FriendlyName(FriendlyName) => Arc<str>);
annotation_kind!(TaskAnnotations, TaskAnnotation::InstanceNameFormat(InstanceNameFormat) => Arc<str>);
annotation_kind!(TaskAnnotations, TaskAnnotation::Description(Description) => Arc<str>);
annotation_kind!(TaskAnnotations, TaskAnnotation::HelpUrl(HelpUrl) => Arc<str>);
annotation_kind!(TaskAnnotations, TaskAnnotation::HelpMarkDown(HelpMarkDown) => Arc<str>);
annotation_kind!(TaskAnnotations, TaskAnnotation::Author(Author) => Arc<str>);
annotation_kind!(TaskAnnotations, TaskAnnotation::Preview(Preview) => bool);
annotation_kind!(TaskAnnotations, TaskAnnotation::Deprecated(Deprecated) => bool);
annotation_kind!(TaskAnnotations, TaskAnnotation::RunsOn(RunsOnTargets) => RunsOn);
annotation_kind!(TaskAnnotations, TaskAnnotation::Visibility(VisibleIn) => Visibility);
annotation_kind!(TaskAnnotations, TaskAnnotation::Category(TaskCategory) => Category);
annotation_kind!(TaskAnnotations, TaskAnnotation::MinimumAgentVersion(MinimumAgentVersion) => Arc<str>);
