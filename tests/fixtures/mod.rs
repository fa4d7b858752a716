// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-launch-catalog
//!
//! Deterministic launch lists. Flight numbers equal launch-date cursors so a
//! launch's id and position are easy to read in assertions.

#![allow(dead_code)]

use std::sync::Arc;

use cim_launch_catalog::domain::{Launch, Mission, Rocket};
use cim_launch_catalog::query::QueryResultAssembler;
use cim_launch_catalog::session::{SessionState, StaticBootstrap};
use cim_launch_catalog::upstream::StaticLaunchSource;

/// Oldest cursor of the reference catalog
pub const FIRST_CURSOR: i64 = 76;

/// Newest cursor of the reference catalog
pub const LAST_CURSOR: i64 = 100;

/// A launch whose id and cursor are both `n`
pub fn launch(n: i64) -> Launch {
    Launch::new(n as u64, n)
        .with_site("KSC LC 39A")
        .with_mission(Mission {
            name: Some(format!("Mission {}", n)),
            mission_patch_small: Some(format!("https://patches.example.com/{}-small.png", n)),
            mission_patch_large: Some(format!("https://patches.example.com/{}.png", n)),
        })
        .with_rocket(Rocket {
            id: "falcon9".to_string(),
            name: Some("Falcon 9".to_string()),
            rocket_type: Some("FT".to_string()),
        })
}

/// Launches in upstream order (oldest first) for cursors `from..=to`
pub fn upstream_launches(from: i64, to: i64) -> Vec<Launch> {
    (from..=to).map(launch).collect()
}

/// The reference catalog: 25 launches, cursors "76" through "100"
pub fn reference_source() -> StaticLaunchSource {
    StaticLaunchSource::new(upstream_launches(FIRST_CURSOR, LAST_CURSOR))
}

/// Session with nobody logged in and nothing selected
pub fn anonymous_session() -> SessionState {
    SessionState::bootstrap(&StaticBootstrap::default())
}

/// Assembler over `source` with an anonymous session
pub fn assembler_for(source: &StaticLaunchSource) -> QueryResultAssembler {
    QueryResultAssembler::new(Arc::new(source.clone()), anonymous_session())
}

/// Cursor strings of `launches`, in order
pub fn cursors(launches: &[Launch]) -> Vec<String> {
    launches.iter().map(|l| l.cursor.to_string()).collect()
}

/// Expected cursor strings for `from` down to `to`
pub fn descending(from: i64, to: i64) -> Vec<String> {
    (to..=from).rev().map(|n| n.to_string()).collect()
}
