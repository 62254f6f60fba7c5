use serde::{Deserialize, Serialize};
use std::slice::Iter;

/// Paginated list envelope used by recipe, user and subscription listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Page<T> {
    /// Total number of items across all pages
    #[serde(default)]
    pub count: u64,
    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page
    #[serde(default)]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if this page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns true if the server reported a following page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Number of pages needed to show `count` items `limit` at a time
    #[must_use]
    pub fn total_pages(&self, limit: u32) -> u64 {
        if limit == 0 {
            return 0;
        }
        self.count.div_ceil(u64::from(limit))
    }

    /// Iterates over the items on this page
    pub fn iter(&self) -> Iter<'_, T> {
        self.results.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
