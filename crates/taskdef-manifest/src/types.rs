//! Output types for task manifests
//!
//! This module provides:
//! - The normalized input entity emitted per task input field
//! - Input kinds and the explicit input-kind hints fields may carry
//! - Flag sets for run targets and visibility
//! - The top-level manifest record

use crate::identity::TaskIdentity;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::sync::Arc;

// =============================================================================
// MANIFEST - Identity plus ordered inputs
// =============================================================================

/// Top-level manifest describing a task's identity and its inputs
///
/// Only [`crate::build_manifest`] and [`crate::assemble`] produce one, from
/// an identity and inputs that were validated on the way in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub(crate) identity: TaskIdentity,
    pub(crate) inputs: Vec<InputEntity>,
}

impl Manifest {
    pub fn identity(&self) -> &TaskIdentity {
        &self.identity
    }

    /// Input entities in field declaration order
    pub fn inputs(&self) -> &[InputEntity] {
        &self.inputs
    }

    /// Look up an input entity by its output name
    pub fn input(&self, name: &str) -> Option<&InputEntity> {
        self.inputs.iter().find(|input| input.name.as_ref() == name)
    }
}

// =============================================================================
// INPUT ENTITY - One per field marked as a task input
// =============================================================================

/// Normalized description of one task input field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEntity {
    pub(crate) name: Arc<str>,
    pub(crate) label: Arc<str>,
    #[serde(rename = "type")]
    pub(crate) input_type: InputType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<DefaultValue>,
    pub(crate) required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) help_mark_down: Option<Arc<str>>,
    /// Reserved; never populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) group_name: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) visible_rule: Option<Arc<str>>,
    /// Present if and only if `input_type` is [`InputType::PickList`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) options: Option<PickListOptions>,
}

impl InputEntity {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn help_mark_down(&self) -> Option<&str> {
        self.help_mark_down.as_deref()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn visible_rule(&self) -> Option<&str> {
        self.visible_rule.as_deref()
    }

    /// Ordered pick-list options; `Some` only for [`InputType::PickList`]
    pub fn options(&self) -> Option<&PickListOptions> {
        self.options.as_ref()
    }
}

/// Normalized input kind written to the manifest
#[derive(Debug, Clone, Copy, Serialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    String,
    Boolean,
    PickList,
    FilePath,
    MultiLine,
    Radio,
    SecureFile,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::String => "string",
            InputType::Boolean => "boolean",
            InputType::PickList => "pickList",
            InputType::FilePath => "filePath",
            InputType::MultiLine => "multiLine",
            InputType::Radio => "radio",
            InputType::SecureFile => "secureFile",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit hint narrowing how a field's declared kind is rendered
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum InputTypeHint {
    FilePath,
    MultiLine,
    Radio,
    SecureFile,
}

impl InputTypeHint {
    /// The input kind this hint maps to when the declared kind allows it
    pub fn input_type(self) -> InputType {
        match self {
            InputTypeHint::FilePath => InputType::FilePath,
            InputTypeHint::MultiLine => InputType::MultiLine,
            InputTypeHint::Radio => InputType::Radio,
            InputTypeHint::SecureFile => InputType::SecureFile,
        }
    }
}

impl fmt::Display for InputTypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputTypeHint::FilePath => "FilePath",
            InputTypeHint::MultiLine => "MultiLine",
            InputTypeHint::Radio => "Radio",
            InputTypeHint::SecureFile => "SecureFile",
        };
        f.write_str(name)
    }
}

// =============================================================================
// DEFAULT VALUE - Opaque scalar
// =============================================================================

/// Default value for an input field
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Str(Arc::from(value))
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Str(Arc::from(value))
    }
}

// =============================================================================
// PICK LIST OPTIONS - Insertion-ordered key/label map
// =============================================================================

/// Ordered mapping of enumeration member identifier to display label
///
/// Serializes as a map whose key order follows the enumeration's declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickListOptions {
    entries: SmallVec<[(Arc<str>, Arc<str>); 4]>,
}

impl PickListOptions {
    /// Append an option, replacing the label if the key is already present
    pub fn insert(&mut self, key: Arc<str>, label: Arc<str>) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = label;
        } else {
            self.entries.push((key, label));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, label)| label.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}

impl FromIterator<(Arc<str>, Arc<str>)> for PickListOptions {
    fn from_iter<I: IntoIterator<Item = (Arc<str>, Arc<str>)>>(iter: I) -> Self {
        let mut options = PickListOptions::default();
        for (key, label) in iter {
            options.insert(key, label);
        }
        options
    }
}

impl Serialize for PickListOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, label) in &self.entries {
            map.serialize_entry(key.as_ref(), label.as_ref())?;
        }
        map.end()
    }
}

// =============================================================================
// FLAG SETS - Run targets and visibility
// =============================================================================

fn flag_names(bits: u8, table: &[(u8, &'static str)]) -> SmallVec<[&'static str; 3]> {
    table
        .iter()
        .filter(|(bit, _)| bits & bit == *bit)
        .map(|(_, name)| *name)
        .collect()
}

/// Where a task may run
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct RunsOn(u8);

impl RunsOn {
    pub const AGENT: Self = Self(1);
    pub const MACHINE_GROUP: Self = Self(2);
    pub const SERVER: Self = Self(4);

    const NAMES: [(u8, &'static str); 3] = [(1, "Agent"), (2, "MachineGroup"), (4, "Server")];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flag names in bit order
    pub fn names(self) -> SmallVec<[&'static str; 3]> {
        flag_names(self.0, &Self::NAMES)
    }
}

impl Default for RunsOn {
    fn default() -> Self {
        RunsOn::AGENT
    }
}

impl BitOr for RunsOn {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RunsOn {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Serialize for RunsOn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

/// Which pipeline kinds a task is offered in
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Visibility(u8);

impl Visibility {
    pub const BUILD: Self = Self(1);
    pub const RELEASE: Self = Self(2);

    const NAMES: [(u8, &'static str); 2] = [(1, "Build"), (2, "Release")];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn names(self) -> SmallVec<[&'static str; 3]> {
        flag_names(self.0, &Self::NAMES)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::BUILD | Visibility::RELEASE
    }
}

impl BitOr for Visibility {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Visibility {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

// =============================================================================
// CATEGORY
// =============================================================================

/// Task catalog category
#[derive(Debug, Clone, Copy, Serialize, Hash, PartialEq, Eq)]
pub enum Category {
    Repos,
    Boards,
    Pipelines,
    TestPlans,
    Artifacts,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Repos => "Repos",
            Category::Boards => "Boards",
            Category::Pipelines => "Pipelines",
            Category::TestPlans => "TestPlans",
            Category::Artifacts => "Artifacts",
        };
        f.write_str(name)
    }
}
