// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cursor Value Object
//!
//! A cursor is the opaque position key of an item in a paginated list. The
//! cursor of a page is the position key of the page's last item, and is handed
//! back as `after` to resume from there.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Opaque position key of a catalog item
///
/// Cursors are totally ordered. Two cursors that are integers (ASCII digits
/// with an optional leading `-`) compare by numeric value, so `"99" < "100"`
/// and `"-50" < "-5"`; anything else compares lexicographically. Canonical list order is *descending* cursor order, so a
/// later page always carries a strictly smaller cursor.
///
/// # Examples
///
/// ```rust
/// use cim_launch_catalog::domain::Cursor;
///
/// let newer = Cursor::new("100");
/// let older = Cursor::new("99");
/// assert!(older < newer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw position key
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the cursor as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the cursor and return the raw token
    pub fn into_inner(self) -> String {
        self.0
    }

    /// `(negative, magnitude without leading zeros)` for an optionally
    /// signed digit string
    fn numeric_parts(&self) -> Option<(bool, &str)> {
        let (negative, digits) = match self.0.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, self.0.as_str()),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude = digits.trim_start_matches('0');
        // "-0" is zero
        Some((negative && !magnitude.is_empty(), magnitude))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_parts(), other.numeric_parts()) {
            (Some((a_neg, a)), Some((b_neg, b))) => {
                let by_value = match (a_neg, b_neg) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (negative, _) => {
                        let magnitude = a.len().cmp(&b.len()).then_with(|| a.cmp(b));
                        if negative {
                            magnitude.reverse()
                        } else {
                            magnitude
                        }
                    }
                };
                // keep Ord consistent with Eq for "0100" vs "100"
                by_value.then_with(|| self.0.cmp(&other.0))
            }
            _ => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}
