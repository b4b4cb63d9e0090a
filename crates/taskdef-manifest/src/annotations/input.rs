//! Field-level annotations
//!
//! Attached to the fields of a task type, and (for [`Label`]) to the members
//! of an enumeration backing a pick list.

use super::{Annotation, AnnotationSet};
use crate::types::{self, InputTypeHint};
use std::sync::Arc;

/// Marks a field as a task input; unmarked fields never reach the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input;

/// Overrides the input name (defaults to the field identifier)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Name(name.into())
    }
}

/// Display label; on enumeration members it labels the pick-list option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(Arc<str>);

impl Label {
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Label(label.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpMarkDown(Arc<str>);

impl HelpMarkDown {
    pub fn new(help: impl Into<Arc<str>>) -> Self {
        HelpMarkDown(help.into())
    }

    /// Help text rendered as a markdown link: `[text](url)`
    pub fn link(text: &str, url: &str) -> Self {
        HelpMarkDown(Arc::from(format!("[{}]({})", text, url)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required(bool);

impl Required {
    pub fn new(required: bool) -> Self {
        Required(required)
    }

    /// Marker form, equivalent to `Required::new(true)`
    pub fn flag() -> Self {
        Required(true)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultValue(types::DefaultValue);

impl DefaultValue {
    pub fn new(value: impl Into<types::DefaultValue>) -> Self {
        DefaultValue(value.into())
    }
}

/// Explicit input-kind hint, checked against the field's declared kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputType(InputTypeHint);

impl InputType {
    pub fn new(hint: InputTypeHint) -> Self {
        InputType(hint)
    }
}

/// Expression deciding when the input is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRule(Arc<str>);

impl VisibleRule {
    pub fn new(rule: impl Into<Arc<str>>) -> Self {
        VisibleRule(rule.into())
    }
}

/// Publishes the field's runtime value under a variable name after the task
/// runs. Not part of the input entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable(Arc<str>);

impl Variable {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Variable(name.into())
    }
}

/// Any annotation attachable to a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldAnnotation {
    Input(Input),
    Name(Name),
    Label(Label),
    HelpMarkDown(HelpMarkDown),
    Required(Required),
    DefaultValue(DefaultValue),
    InputType(InputType),
    VisibleRule(VisibleRule),
    Variable(Variable),
}

/// Annotations attached to one field, in attachment order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldAnnotations(Vec<FieldAnnotation>);

impl FieldAnnotations {
    pub fn push(&mut self, annotation: impl Into<FieldAnnotation>) {
        self.0.push(annotation.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldAnnotation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AnnotationSet for FieldAnnotations {}

annotation_kind!(FieldAnnotations, FieldAnnotation::Input(Input));
annotation_kind!(FieldAnnotations, FieldAnnotation::Name(Name) => Arc<str>);
annotation_kind!(FieldAnnotations, FieldAnnotation::Label(Label) => Arc<str>);
annotation_kind!(FieldAnnotations, FieldAnnotation::HelpMarkDown(HelpMarkDown) => Arc<str>);
annotation_kind!(FieldAnnotations, FieldAnnotation::Required(Required) => bool);
annotation_kind!(FieldAnnotations, FieldAnnotation::DefaultValue(DefaultValue) => types::DefaultValue);
annotation_kind!(FieldAnnotations, FieldAnnotation::InputType(InputType) => InputTypeHint);
annotation_kind!(FieldAnnotations, FieldAnnotation::VisibleRule(VisibleRule) => Arc<str>);
annotation_kind!(FieldAnnotations, FieldAnnotation::Variable(Variable) => Arc<str>);

/// Annotations attached to an enumeration member; only [`Label`] applies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberAnnotations {
    label: Option<Label>,
}

impl MemberAnnotations {
    /// Attach a label; the first label attached wins
    pub fn push(&mut self, label: Label) {
        if self.label.is_none() {
            self.label = Some(label);
        }
    }
}

impl Annotation<MemberAnnotations> for Label {
    fn find(point: &MemberAnnotations) -> Option<&Self> {
        point.label.as_ref()
    }
}

impl AnnotationSet for MemberAnnotations {}
