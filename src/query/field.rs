// Copyright (c) 2025 - Cowboy AI, Inc.
//! Field requests, policies and responses

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::cache::QueryArgs;
use crate::errors::CatalogError;

/// The paginated launch list
pub const LAUNCHES_FIELD: &str = "launches";

/// A single launch by id
pub const LAUNCH_FIELD: &str = "launch";

/// Several launches by id
pub const LAUNCHES_BY_IDS_FIELD: &str = "launchesByIds";

/// Per-launch mission patch URL, argument `size`
pub const MISSION_PATCH_FIELD: &str = "missionPatch";

/// How a field is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPolicy {
    /// Always read from a reactive cell, never from fetched data
    Reactive,
    /// Slice the upstream list, merge into the connection cache
    Paginated,
    /// Delegate unchanged to the upstream collaborator
    PassThrough,
}

/// One top-level field to resolve
///
/// `args` belong to the top-level field and (minus pagination) identify the
/// cached list. `item_args` belong to fields nested in each returned launch,
/// keyed by nested field name; they shape the output only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRequest {
    pub name: String,
    #[serde(default)]
    pub args: QueryArgs,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub item_args: BTreeMap<String, QueryArgs>,
}

impl FieldRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: QueryArgs::new(),
            item_args: BTreeMap::new(),
        }
    }

    /// Add an argument
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Add an argument to the nested per-launch field `field`
    pub fn item_arg(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.item_args
            .entry(field.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    /// Argument `name` of the nested per-launch field `field`
    pub fn item_arg_value(&self, field: &str, name: &str) -> Option<&Value> {
        self.item_args.get(field).and_then(|args| args.get(name))
    }
}

/// Field-level failure; siblings still resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub kind: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, error: &CatalogError) -> Self {
        Self {
            field: field.into(),
            message: error.to_string(),
            kind: error.kind().to_string(),
        }
    }
}

/// Assembled result of a multi-field query
///
/// Failed fields are `null` in `data` and described in `errors`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl QueryResponse {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name).filter(|value| !value.is_null())
    }

    pub fn error_for(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == name)
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
