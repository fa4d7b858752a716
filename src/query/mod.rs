// Copyright (c) 2025 - Cowboy AI, Inc.
//! Query Result Assembly
//!
//! Read-time routing of top-level fields to their resolution policy:
//!
//! ```text
//! FieldRequest
//!     │
//!     ├── Reactive     → ReactiveCell::get            (session state)
//!     ├── Paginated    → fetch → reverse → slice
//!     │                  → ConnectionCache::merge_page (key without after/pageSize)
//!     └── PassThrough  → LaunchSource                  (unchanged)
//! ```
//!
//! The assembler holds no state of its own; connections live in the
//! [`ConnectionCache`], session values in the [`SessionState`] cells.
//!
//! # Example
//!
//! ```rust
//! use cim_launch_catalog::domain::Launch;
//! use cim_launch_catalog::query::{FieldRequest, QueryResultAssembler};
//! use cim_launch_catalog::session::{SessionState, StaticBootstrap};
//! use cim_launch_catalog::upstream::StaticLaunchSource;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let source = StaticLaunchSource::new((1..=30).map(|n| Launch::new(n, n as i64)).collect());
//! let session = SessionState::bootstrap(&StaticBootstrap::default());
//! let assembler = QueryResultAssembler::new(Arc::new(source), session);
//!
//! let response = assembler
//!     .execute(&[
//!         FieldRequest::new("launches").arg("pageSize", 10),
//!         FieldRequest::new("loggedIn"),
//!     ])
//!     .await;
//!
//! assert!(response.is_ok());
//! assert_eq!(response.data["loggedIn"], false);
//! # });
//! ```

pub mod field;
pub mod reactive;

use futures::future::join_all;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::cache::{CacheKey, Connection, ConnectionCache, QueryArgs};
use crate::config::CatalogConfig;
use crate::domain::{Cursor, Launch, PatchSize};
use crate::errors::{CatalogError, CatalogResult};
use crate::pagination::{slice, PageRequest, DEFAULT_PAGE_SIZE};
use crate::session::SessionState;
use crate::upstream::LaunchSource;

pub use field::{
    FieldError, FieldPolicy, FieldRequest, QueryResponse, LAUNCHES_BY_IDS_FIELD, LAUNCHES_FIELD,
    LAUNCH_FIELD, MISSION_PATCH_FIELD,
};
pub use reactive::ReactiveField;

/// Outcome of one paginated fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFetch<T> {
    /// The page cut from the upstream list for this request
    pub page: Connection<T>,
    /// The cache entry after merging `page`
    pub merged: Connection<T>,
}

/// Per-field policy dispatch over the cache, the cells and the upstream
pub struct QueryResultAssembler {
    source: Arc<dyn LaunchSource>,
    cache: ConnectionCache<Launch>,
    session: SessionState,
    reactive: HashMap<String, Arc<dyn ReactiveField>>,
    paginated: HashSet<String>,
    pass_through: HashSet<String>,
    default_page_size: usize,
}

impl QueryResultAssembler {
    /// Build an assembler with the session's cells registered as reactive fields
    pub fn new(source: Arc<dyn LaunchSource>, session: SessionState) -> Self {
        let mut assembler = Self {
            source,
            cache: ConnectionCache::new(),
            session: session.clone(),
            reactive: HashMap::new(),
            paginated: HashSet::from([LAUNCHES_FIELD.to_string()]),
            pass_through: HashSet::from([
                LAUNCH_FIELD.to_string(),
                LAUNCHES_BY_IDS_FIELD.to_string(),
            ]),
            default_page_size: DEFAULT_PAGE_SIZE,
        };

        assembler.register_reactive(session.logged_in().clone());
        assembler.register_reactive(session.selected_item_ids().clone());
        assembler
    }

    /// Apply configuration (default page size)
    pub fn with_config(mut self, config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        self.default_page_size = config.default_page_size;
        Ok(self)
    }

    /// Share an existing connection cache
    pub fn with_cache(mut self, cache: ConnectionCache<Launch>) -> Self {
        self.cache = cache;
        self
    }

    /// Route reads of `field.field_name()` to a cell
    ///
    /// Reactive registration takes precedence over every other policy.
    pub fn register_reactive<F>(&mut self, field: F)
    where
        F: ReactiveField + 'static,
    {
        let name = field.field_name().to_string();
        debug!(field = %name, "Registered reactive field");
        self.reactive.insert(name, Arc::new(field));
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn cache(&self) -> &ConnectionCache<Launch> {
        &self.cache
    }

    /// Policy a field resolves with
    pub fn policy_for(&self, field: &str) -> Option<FieldPolicy> {
        if self.reactive.contains_key(field) {
            Some(FieldPolicy::Reactive)
        } else if self.paginated.contains(field) {
            Some(FieldPolicy::Paginated)
        } else if self.pass_through.contains(field) {
            Some(FieldPolicy::PassThrough)
        } else {
            None
        }
    }

    /// Resolve every request; a failing field never aborts its siblings
    pub async fn execute(&self, requests: &[FieldRequest]) -> QueryResponse {
        let request_id = Uuid::now_v7();
        let span = info_span!("query", %request_id, fields = requests.len());

        async {
            let results = join_all(requests.iter().map(|request| self.resolve(request))).await;

            let mut response = QueryResponse::default();
            for (request, result) in requests.iter().zip(results) {
                match result {
                    Ok(value) => {
                        response.data.insert(request.name.clone(), value);
                    }
                    Err(e) => {
                        warn!(field = %request.name, error = %e, "Field resolution failed");
                        response.data.insert(request.name.clone(), Value::Null);
                        response.errors.push(FieldError::new(request.name.clone(), &e));
                    }
                }
            }
            response
        }
        .instrument(span)
        .await
    }

    /// Resolve one top-level field to JSON
    pub async fn resolve(&self, request: &FieldRequest) -> CatalogResult<Value> {
        let policy = self
            .policy_for(&request.name)
            .ok_or_else(|| CatalogError::UnknownField(request.name.clone()))?;

        debug!(field = %request.name, ?policy, "Resolving field");

        match policy {
            FieldPolicy::Reactive => self.read_reactive(&request.name),
            FieldPolicy::Paginated => {
                let patch_size = patch_size_arg(request)?;
                let fetch = self.fetch_list(&request.name, &request.args).await?;
                let items = fetch
                    .merged
                    .items
                    .iter()
                    .map(|launch| launch_value(launch, patch_size))
                    .collect::<CatalogResult<Vec<_>>>()?;

                Ok(json!({
                    "items": items,
                    "cursor": fetch.merged.cursor,
                    "hasMore": fetch.merged.has_more,
                }))
            }
            FieldPolicy::PassThrough => self.resolve_pass_through(request).await,
        }
    }

    /// Current value of a reactive field
    pub fn read_reactive(&self, field: &str) -> CatalogResult<Value> {
        self.reactive
            .get(field)
            .ok_or_else(|| CatalogError::UnknownField(field.to_string()))?
            .read()
    }

    /// Shape-checked write to a reactive field
    pub fn write_reactive(&self, field: &str, value: Value) -> CatalogResult<()> {
        self.reactive
            .get(field)
            .ok_or_else(|| CatalogError::UnknownField(field.to_string()))?
            .write(value)
    }

    /// `launches(pageSize, after)` with the remaining arguments as cache key
    pub async fn launches(&self, args: &QueryArgs) -> CatalogResult<ListFetch<Launch>> {
        self.fetch_list(LAUNCHES_FIELD, args).await
    }

    /// Typed form of `launches` for callers outside the JSON surface
    pub async fn launches_page(
        &self,
        page_size: i64,
        after: Option<Cursor>,
    ) -> CatalogResult<ListFetch<Launch>> {
        let mut args = QueryArgs::new();
        args.insert("pageSize".to_string(), json!(page_size));
        if let Some(after) = after {
            args.insert("after".to_string(), json!(after));
        }
        self.launches(&args).await
    }

    /// Merged connection currently cached for `name(args)`
    pub async fn cached_list(&self, name: &str, args: &QueryArgs) -> Option<Connection<Launch>> {
        self.cache.get(&CacheKey::derive(name, args)).await
    }

    /// Forget the cached connection so pagination restarts from the head
    pub async fn reset_list(&self, name: &str, args: &QueryArgs) -> bool {
        self.cache.evict(&CacheKey::derive(name, args)).await
    }

    pub async fn launch(&self, id: &str) -> CatalogResult<Option<Launch>> {
        self.source.fetch_launch_by_id(id).await
    }

    pub async fn launches_by_ids(&self, ids: &[String]) -> CatalogResult<Vec<Launch>> {
        self.source.fetch_launches_by_ids(ids).await
    }

    pub fn logged_in(&self) -> bool {
        self.session.logged_in().get()
    }

    pub fn selected_item_ids(&self) -> Vec<String> {
        self.session.selected_item_ids().get()
    }

    async fn fetch_list(&self, name: &str, args: &QueryArgs) -> CatalogResult<ListFetch<Launch>> {
        let request = self.page_request(args)?;
        let key = CacheKey::derive(name, args);

        // Nothing is written to the cache unless the fetch and slice succeed
        let mut launches = self.source.fetch_all_launches().await.map_err(|e| {
            error!(query = %key, source = self.source.name(), error = %e, "Upstream fetch failed");
            match e {
                CatalogError::UpstreamUnavailable(_) => e,
                other => CatalogError::UpstreamUnavailable(other.to_string()),
            }
        })?;

        // Upstream serves oldest first; the catalog is reverse-chronological
        launches.reverse();

        let page: Connection<Launch> = slice(&launches, &request)?.into();
        let merged = self.cache.merge_page(&key, page.clone()).await;

        Ok(ListFetch { page, merged })
    }

    async fn resolve_pass_through(&self, request: &FieldRequest) -> CatalogResult<Value> {
        let patch_size = patch_size_arg(request)?;

        match request.name.as_str() {
            LAUNCH_FIELD => {
                let id = id_arg(request.args.get("id"))?;
                match self.launch(&id).await? {
                    Some(launch) => launch_value(&launch, patch_size),
                    None => Ok(Value::Null),
                }
            }
            LAUNCHES_BY_IDS_FIELD => {
                let ids = match request.args.get("ids") {
                    Some(Value::Array(values)) => values
                        .iter()
                        .map(|value| id_arg(Some(value)))
                        .collect::<CatalogResult<Vec<_>>>()?,
                    _ => {
                        return Err(CatalogError::InvalidArgument(
                            "ids must be a list".to_string(),
                        ))
                    }
                };
                let launches = self.launches_by_ids(&ids).await?;
                Ok(Value::Array(
                    launches
                        .iter()
                        .map(|launch| launch_value(launch, patch_size))
                        .collect::<CatalogResult<Vec<_>>>()?,
                ))
            }
            other => Err(CatalogError::UnknownField(other.to_string())),
        }
    }

    fn page_request(&self, args: &QueryArgs) -> CatalogResult<PageRequest> {
        let page_size = match args.get("pageSize") {
            None | Some(Value::Null) => self.default_page_size as i64,
            Some(value) => value.as_i64().ok_or_else(|| {
                CatalogError::InvalidArgument(format!("pageSize must be an integer, got {}", value))
            })?,
        };

        let after = match args.get("after") {
            None | Some(Value::Null) => None,
            Some(Value::String(cursor)) => Some(Cursor::new(cursor.clone())),
            Some(other) => {
                return Err(CatalogError::InvalidArgument(format!(
                    "after must be a string cursor, got {}",
                    other
                )))
            }
        };

        PageRequest::new(page_size, after)
    }
}

fn id_arg(value: Option<&Value>) -> CatalogResult<String> {
    match value {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(CatalogError::InvalidArgument("id must be a string or number".to_string())),
    }
}

/// `missionPatch(size)` of the request's per-launch selection
fn patch_size_arg(request: &FieldRequest) -> CatalogResult<Option<PatchSize>> {
    match request.item_arg_value(MISSION_PATCH_FIELD, "size") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| CatalogError::InvalidArgument(format!("missionPatch size: {}", e))),
    }
}

/// Launch JSON with `mission.missionPatch` resolved for `size`
fn launch_value(launch: &Launch, size: Option<PatchSize>) -> CatalogResult<Value> {
    let mut value = serde_json::to_value(launch)?;
    if let Some(mission) = value.get_mut("mission").and_then(Value::as_object_mut) {
        mission.insert(
            "missionPatch".to_string(),
            json!(launch.mission.mission_patch(size)),
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mission;
    use crate::session::StaticBootstrap;
    use crate::upstream::StaticLaunchSource;

    fn assembler(count: u64) -> (QueryResultAssembler, StaticLaunchSource) {
        let source = StaticLaunchSource::new((1..=count).map(|n| Launch::new(n, n as i64)).collect());
        let session = SessionState::bootstrap(&StaticBootstrap::default());
        (
            QueryResultAssembler::new(Arc::new(source.clone()), session),
            source,
        )
    }

    #[test]
    fn test_policy_dispatch() {
        let (assembler, _) = assembler(1);
        assert_eq!(assembler.policy_for("loggedIn"), Some(FieldPolicy::Reactive));
        assert_eq!(assembler.policy_for("selectedItemIds"), Some(FieldPolicy::Reactive));
        assert_eq!(assembler.policy_for("launches"), Some(FieldPolicy::Paginated));
        assert_eq!(assembler.policy_for("launch"), Some(FieldPolicy::PassThrough));
        assert_eq!(assembler.policy_for("me"), None);
    }

    #[tokio::test]
    async fn test_unknown_field() {
        let (assembler, _) = assembler(1);
        let err = assembler.resolve(&FieldRequest::new("me")).await.unwrap_err();
        assert_eq!(err, CatalogError::UnknownField("me".to_string()));
    }

    #[tokio::test]
    async fn test_default_page_size_from_config() {
        let (assembler, _) = assembler(10);
        let config = CatalogConfig {
            default_page_size: 4,
            ..CatalogConfig::default()
        };
        let assembler = assembler.with_config(&config).unwrap();

        let fetch = assembler.launches(&QueryArgs::new()).await.unwrap();
        assert_eq!(fetch.page.len(), 4);
    }

    #[test]
    fn test_zero_default_page_size_rejected() {
        let (assembler, _) = assembler(1);
        let config = CatalogConfig {
            default_page_size: 0,
            ..CatalogConfig::default()
        };

        let err = assembler.with_config(&config).err();
        assert!(matches!(err, Some(CatalogError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_malformed_pagination_args() {
        let (assembler, _) = assembler(3);

        let err = assembler
            .resolve(&FieldRequest::new("launches").arg("pageSize", "ten"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));

        let err = assembler
            .resolve(&FieldRequest::new("launches").arg("after", 81))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_mission_patch_resolution() {
        let launch = Launch::new(1, 1).with_mission(Mission {
            name: Some("FalconSat".to_string()),
            mission_patch_small: Some("small.png".to_string()),
            mission_patch_large: Some("large.png".to_string()),
        });
        let source = StaticLaunchSource::new(vec![launch]);
        let assembler = QueryResultAssembler::new(
            Arc::new(source),
            SessionState::bootstrap(&StaticBootstrap::default()),
        );

        let small = assembler
            .resolve(
                &FieldRequest::new("launch")
                    .arg("id", "1")
                    .item_arg(MISSION_PATCH_FIELD, "size", "SMALL"),
            )
            .await
            .unwrap();
        let large = assembler
            .resolve(&FieldRequest::new("launch").arg("id", 1))
            .await
            .unwrap();

        assert_eq!(small["mission"]["missionPatch"], "small.png");
        assert_eq!(large["mission"]["missionPatch"], "large.png");

        let err = assembler
            .resolve(
                &FieldRequest::new("launch")
                    .arg("id", 1)
                    .item_arg(MISSION_PATCH_FIELD, "size", "HUGE"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_missing_launch_is_null() {
        let (assembler, _) = assembler(3);
        let value = assembler
            .resolve(&FieldRequest::new("launch").arg("id", "99"))
            .await
            .unwrap();
        assert!(value.is_null());
    }
}
