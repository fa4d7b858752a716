// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cache Keys Without Pagination Arguments
//!
//! Every page of one logical list must land in the same cache entry, so keys
//! are derived from the query name and its *non-pagination* arguments only.
//! Arguments are kept in a `BTreeMap`, which makes the key independent of the
//! order arguments were supplied in.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Argument names that never participate in key derivation
pub const PAGINATION_ARGS: &[&str] = &["after", "pageSize"];

/// Query arguments, sorted by name
pub type QueryArgs = BTreeMap<String, Value>;

/// Canonical identity of a logical list query
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    name: String,
    /// `(argument, canonical JSON)` pairs, sorted by argument name
    args: Vec<(String, String)>,
}

impl CacheKey {
    /// Derive the key for `name(args)`, dropping `after` and `pageSize`
    pub fn derive(name: impl Into<String>, args: &QueryArgs) -> Self {
        let args = args
            .iter()
            .filter(|(arg, _)| !is_pagination_arg(arg))
            .map(|(arg, value)| (arg.clone(), value.to_string()))
            .collect();

        Self {
            name: name.into(),
            args,
        }
    }

    /// Key for a query with no arguments
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            return write!(f, "{}", self.name);
        }

        let rendered: Vec<String> = self
            .args
            .iter()
            .map(|(arg, value)| format!("{}:{}", arg, value))
            .collect();
        write!(f, "{}({})", self.name, rendered.join(","))
    }
}

/// Whether `arg` is a pagination argument
pub fn is_pagination_arg(arg: &str) -> bool {
    PAGINATION_ARGS.contains(&arg)
}
