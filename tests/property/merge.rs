// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Connection Merging

use cim_launch_catalog::cache::{merge_connections, Connection};
use cim_launch_catalog::domain::{Cursor, Launch};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Strategies
// ============================================================================

/// A connection over a small id space so pages overlap often
fn connection() -> impl Strategy<Value = Connection<Launch>> {
    (
        prop::collection::vec(0u64..40, 0..20),
        any::<bool>(),
    )
        .prop_map(|(ids, has_more)| {
            let items: Vec<Launch> = ids.iter().map(|&n| Launch::new(n, n as i64)).collect();
            let cursor = items.last().map(|l| l.cursor.clone());
            Connection { items, cursor, has_more }
        })
}

fn maybe_connection() -> impl Strategy<Value = Option<Connection<Launch>>> {
    prop::option::of(connection())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: merge(merge(e, i), i) == merge(e, i)
    #[test]
    fn prop_merge_is_idempotent(existing in maybe_connection(), incoming in connection()) {
        let once = merge_connections(existing.as_ref(), incoming.clone());
        let twice = merge_connections(Some(&once), incoming);
        prop_assert_eq!(once, twice);
    }

    /// Property: merged ids are unique and equal the union of both sides
    #[test]
    fn prop_merge_is_union_without_duplicates(
        existing in maybe_connection(),
        incoming in connection(),
    ) {
        let merged = merge_connections(existing.as_ref(), incoming.clone());

        let ids: Vec<&str> = merged.ids();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());

        let mut union: HashSet<&str> = incoming.ids().into_iter().collect();
        if let Some(existing) = &existing {
            union.extend(existing.ids());
        }
        prop_assert_eq!(unique, union);
    }

    /// Property: the existing prefix is preserved (append-only growth)
    #[test]
    fn prop_merge_is_append_only(existing in connection(), incoming in connection()) {
        let merged = merge_connections(Some(&existing), incoming);

        let mut seen = HashSet::new();
        let deduped: Vec<&str> = existing.ids().into_iter().filter(|id| seen.insert(*id)).collect();
        let merged_ids = merged.ids();
        prop_assert_eq!(&merged_ids[..deduped.len()], &deduped[..]);
    }

    /// Property: the frontier always comes from the incoming page
    #[test]
    fn prop_incoming_frontier_wins(existing in maybe_connection(), incoming in connection()) {
        let expected_cursor: Option<Cursor> = incoming.cursor.clone();
        let expected_more = incoming.has_more;

        let merged = merge_connections(existing.as_ref(), incoming);

        prop_assert_eq!(merged.cursor, expected_cursor);
        prop_assert_eq!(merged.has_more, expected_more);
    }
}
