//! Offset/limit pagination shared by every query mode.
//!
//! Tokens are plain decimal offsets, so a `next` or `previous` value can be
//! fed straight back in as the `offset` of the following call.

use serde::{Deserialize, Serialize};

/// One page of results out of `count` total matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// Total number of matches across all pages.
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PageResult<T> {
    /// Build a page whose results were already sliced, attaching tokens for
    /// the given window.
    pub fn new(count: usize, limit: usize, offset: usize, results: Vec<T>) -> Self {
        Self {
            count,
            next: next_token(count, limit, offset),
            previous: previous_token(limit, offset),
            results,
        }
    }

    /// Slice `limit` items starting at `offset` out of the full match list.
    ///
    /// `count` is the length of `all`, independent of the window.
    pub fn paginate(all: Vec<T>, limit: usize, offset: usize) -> Self {
        let count = all.len();
        let results = all.into_iter().skip(offset).take(limit).collect();
        Self::new(count, limit, offset, results)
    }

    /// Replace the results while keeping count and tokens.
    pub fn map_results<U>(self, results: Vec<U>) -> PageResult<U> {
        PageResult {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results,
        }
    }

    /// The `next` token decoded as an offset.
    pub fn next_offset(&self) -> Option<usize> {
        self.next.as_deref().and_then(parse_token)
    }

    /// The `previous` token decoded as an offset.
    pub fn previous_offset(&self) -> Option<usize> {
        self.previous.as_deref().and_then(parse_token)
    }

    /// One-based inclusive range of the items on this page, for
    /// "Showing a - b of n" style headers. `None` when the page is empty.
    pub fn display_range(&self, offset: usize) -> Option<(usize, usize)> {
        if self.results.is_empty() {
            None
        } else {
            Some((offset + 1, offset + self.results.len()))
        }
    }
}

/// Token for the page after `offset`, present only while matches remain.
pub fn next_token(count: usize, limit: usize, offset: usize) -> Option<String> {
    let end = offset.saturating_add(limit);
    (end < count).then(|| end.to_string())
}

/// Token for the page before `offset`, clamped at zero.
pub fn previous_token(limit: usize, offset: usize) -> Option<String> {
    (offset > 0).then(|| offset.saturating_sub(limit).to_string())
}

/// Decode a pagination token. Accepts both bare offsets (`"40"`) and the
/// `offset=40` form older clients produced.
pub fn parse_token(token: &str) -> Option<usize> {
    let token = token.trim();
    token
        .strip_prefix("offset=")
        .unwrap_or(token)
        .parse()
        .ok()
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
