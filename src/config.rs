// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{CatalogError, CatalogResult};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Runtime configuration for the catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Upstream REST base URL (e.g., "https://api.spacexdata.com/v2/")
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Page size used when a list query omits `pageSize`
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Persisted credential token; its presence seeds the login cell
    #[serde(default)]
    pub credential_token_path: Option<PathBuf>,
}

fn default_upstream_base_url() -> String {
    "https://api.spacexdata.com/v2/".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: default_upstream_base_url(),
            timeout_secs: default_timeout(),
            default_page_size: default_page_size(),
            credential_token_path: None,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables
    ///
    /// | Variable               | Field                   |
    /// |------------------------|-------------------------|
    /// | `CATALOG_UPSTREAM_URL` | `upstream_base_url`     |
    /// | `CATALOG_TIMEOUT_SECS` | `timeout_secs`          |
    /// | `CATALOG_PAGE_SIZE`    | `default_page_size`     |
    /// | `CATALOG_TOKEN_PATH`   | `credential_token_path` |
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CatalogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            upstream_base_url: lookup("CATALOG_UPSTREAM_URL")
                .unwrap_or(defaults.upstream_base_url),
            timeout_secs: parse_var(&lookup, "CATALOG_TIMEOUT_SECS")?
                .unwrap_or(defaults.timeout_secs),
            default_page_size: parse_var(&lookup, "CATALOG_PAGE_SIZE")?
                .unwrap_or(defaults.default_page_size),
            credential_token_path: lookup("CATALOG_TOKEN_PATH").map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express
    pub fn validate(&self) -> CatalogResult<()> {
        if self.default_page_size < 1 {
            return Err(CatalogError::Configuration(
                "default_page_size must be >= 1".to_string(),
            ));
        }
        if self.upstream_base_url.trim().is_empty() {
            return Err(CatalogError::Configuration(
                "upstream_base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> CatalogResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                CatalogError::Configuration(format!("{} has invalid value '{}': {}", name, raw, e))
            })
        })
        .transpose()
}
