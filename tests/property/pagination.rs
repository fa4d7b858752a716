// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Page Slicing

use cim_launch_catalog::cache::{merge_connections, Connection};
use cim_launch_catalog::domain::{CatalogItem, Cursor, Launch};
use cim_launch_catalog::pagination::{slice, PageRequest};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

// ============================================================================
// Strategies
// ============================================================================

/// A canonical (strictly descending cursor) list of up to 60 launches
fn canonical_list() -> impl Strategy<Value = Vec<Launch>> {
    prop::collection::btree_set(1i64..10_000, 0..60).prop_map(|cursors: BTreeSet<i64>| {
        cursors
            .into_iter()
            .rev()
            .map(|n| Launch::new(n as u64, n))
            .collect()
    })
}

fn page_size() -> impl Strategy<Value = i64> {
    1i64..30
}

/// Walk every page from the head, returning (pages, merged)
fn walk(full: &[Launch], size: i64) -> (Vec<Connection<Launch>>, Connection<Launch>) {
    let mut pages = Vec::new();
    let mut merged: Option<Connection<Launch>> = None;
    let mut after: Option<Cursor> = None;

    loop {
        let request = PageRequest::new(size, after.clone()).unwrap();
        let page: Connection<Launch> = slice(full, &request).unwrap().into();
        merged = Some(merge_connections(merged.as_ref(), page.clone()));

        let done = !page.has_more;
        after = page.cursor.clone();
        pages.push(page);

        if done {
            break;
        }
    }

    (pages, merged.unwrap_or_default())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: paging to the end returns every item exactly once, in order
    #[test]
    fn prop_no_loss_no_duplication(full in canonical_list(), size in page_size()) {
        let (pages, merged) = walk(&full, size);

        let returned: Vec<&str> = pages.iter().flat_map(|p| p.items.iter().map(|l| l.id())).collect();
        let expected: Vec<&str> = full.iter().map(|l| l.id()).collect();
        prop_assert_eq!(&returned, &expected);

        let unique: HashSet<&str> = returned.iter().copied().collect();
        prop_assert_eq!(unique.len(), returned.len());

        prop_assert_eq!(merged.ids(), expected);
    }

    /// Property: successive page cursors strictly decrease
    #[test]
    fn prop_cursor_is_monotonic(full in canonical_list(), size in page_size()) {
        let (pages, _) = walk(&full, size);

        let cursors: Vec<&Cursor> = pages.iter().filter_map(|p| p.cursor.as_ref()).collect();
        for pair in cursors.windows(2) {
            prop_assert!(pair[1] < pair[0]);
        }
    }

    /// Property: has_more is false iff the page ends on the list's last item
    #[test]
    fn prop_has_more_matches_list_end(
        full in canonical_list(),
        size in page_size(),
        start in 0usize..60,
    ) {
        let after = if full.is_empty() { None } else { Some(full[start % full.len()].cursor().clone()) };
        let page = slice(&full, &PageRequest::new(size, after).unwrap()).unwrap();

        let ends_list = match (page.items.last(), full.last()) {
            (Some(page_last), Some(full_last)) => page_last.id() == full_last.id(),
            _ => true,
        };
        prop_assert_eq!(page.has_more, !ends_list);
        prop_assert!(page.items.len() <= size as usize);
    }

    /// Property: an after-cursor absent from the list always fails
    #[test]
    fn prop_unknown_cursor_fails(full in canonical_list(), size in page_size()) {
        // cursors in the strategy are < 10_000
        let request = PageRequest::new(size, Some(Cursor::new("10000"))).unwrap();
        prop_assert!(slice(&full, &request).is_err());
    }
}
