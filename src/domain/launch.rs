// Copyright (c) 2025 - Cowboy AI, Inc.
//! Launch Catalog Items
//!
//! A [`Launch`] is the immutable record the catalog pages over. Identity is the
//! flight number, ordering is the launch date cursor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cursor::Cursor;

/// Contract every paginated item satisfies
///
/// `id` is the stable identity used for de-duplication, `cursor` the position
/// key used for slicing. No two distinct items may share a cursor.
pub trait CatalogItem: Clone + Send + Sync {
    /// Stable identifier
    fn id(&self) -> &str;

    /// Position key in the canonical order
    fn cursor(&self) -> &Cursor;
}

/// Requested mission patch resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatchSize {
    Small,
    #[default]
    Large,
}

/// Mission flown by a launch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub name: Option<String>,
    pub mission_patch_small: Option<String>,
    pub mission_patch_large: Option<String>,
}

impl Mission {
    /// Patch image URL for the requested size (large when unspecified)
    pub fn mission_patch(&self, size: Option<PatchSize>) -> Option<&str> {
        match size.unwrap_or_default() {
            PatchSize::Small => self.mission_patch_small.as_deref(),
            PatchSize::Large => self.mission_patch_large.as_deref(),
        }
    }
}

/// Rocket used by a launch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub rocket_type: Option<String>,
}

/// A single launch in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    pub id: String,
    pub cursor: Cursor,
    pub launch_date: Option<DateTime<Utc>>,
    pub site: Option<String>,
    pub mission: Mission,
    pub rocket: Rocket,
}

impl Launch {
    /// Build a launch from its flight number and unix launch date
    ///
    /// The cursor is the unix timestamp rendered as a string.
    pub fn new(flight_number: u64, launch_date_unix: i64) -> Self {
        Self {
            id: flight_number.to_string(),
            cursor: Cursor::new(launch_date_unix.to_string()),
            launch_date: DateTime::<Utc>::from_timestamp(launch_date_unix, 0),
            site: None,
            mission: Mission::default(),
            rocket: Rocket::default(),
        }
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.mission = mission;
        self
    }

    pub fn with_rocket(mut self, rocket: Rocket) -> Self {
        self.rocket = rocket;
        self
    }
}

impl CatalogItem for Launch {
    fn id(&self) -> &str {
        &self.id
    }

    fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_identity_and_cursor() {
        let launch = Launch::new(42, 1_520_000_000);
        assert_eq!(launch.id(), "42");
        assert_eq!(launch.cursor().as_str(), "1520000000");
        assert_eq!(
            launch.launch_date.map(|d| d.timestamp()),
            Some(1_520_000_000)
        );
    }

    #[test]
    fn test_mission_patch_defaults_to_large() {
        let mission = Mission {
            name: Some("CRS-14".to_string()),
            mission_patch_small: Some("small.png".to_string()),
            mission_patch_large: Some("large.png".to_string()),
        };

        assert_eq!(mission.mission_patch(None), Some("large.png"));
        assert_eq!(mission.mission_patch(Some(PatchSize::Large)), Some("large.png"));
        assert_eq!(mission.mission_patch(Some(PatchSize::Small)), Some("small.png"));
    }

    #[test]
    fn test_patch_size_wire_format() {
        let size: PatchSize = serde_json::from_str("\"SMALL\"").unwrap();
        assert_eq!(size, PatchSize::Small);
    }
}
