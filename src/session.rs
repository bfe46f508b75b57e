//! Session records and key types for paginated result sets
//!
//! A session correlates one rendered chat message to the ordered result set
//! it displays and the cursor position within it. Records are owned
//! exclusively by the session store; callers work on clones or snapshots.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::errors::{PagerError, PagerResult};

/// Opaque session identifier
///
/// Bound 1:1 to the rendered message the session backs: the transport layer
/// supplies the rendered message's own ID as the key, so concurrent
/// independent searches in the same channel never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(String);

impl SessionKey {
    /// Wrap a transport-supplied identifier
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the underlying identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for SessionKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Single search result
///
/// Carries everything the rendering layer needs for one page: the title and
/// source link plus both image variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// Result title
    pub title: String,
    /// Page the result links to
    pub source_url: String,
    /// Full-size preview image
    pub image_url: String,
    /// Thumbnail variant
    pub thumbnail_url: String,
}

/// Cached pagination state for one rendered result set
///
/// `results` is fixed at creation and never mutated; only `index` moves.
/// `created_at` is monotonic and read solely for expiry comparison.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Session key (the rendered message's ID)
    pub key: SessionKey,
    /// Search text that produced the results
    pub query: String,
    /// Ordered result set; never empty
    pub results: Arc<[ResultItem]>,
    /// Current cursor; always in `0..results.len()`
    pub index: usize,
    /// Creation time, used solely for expiry comparison
    pub created_at: Instant,
    /// Channel containing the rendered message
    pub channel_id: String,
    /// Rendered message to update in place
    pub message_id: String,
}

impl SessionRecord {
    /// Build a record for a fresh search, cursor on the first result
    ///
    /// # Errors
    ///
    /// Returns `EmptyResultSet` if `results` is empty; an empty result set
    /// must never produce a session.
    pub fn new(
        key: SessionKey,
        query: impl Into<String>,
        results: Vec<ResultItem>,
        channel_id: impl Into<String>,
        message_id: impl Into<String>,
    ) -> PagerResult<Self> {
        if results.is_empty() {
            return Err(PagerError::EmptyResultSet);
        }
        Ok(Self {
            key,
            query: query.into(),
            results: results.into(),
            index: 0,
            created_at: Instant::now(),
            channel_id: channel_id.into(),
            message_id: message_id.into(),
        })
    }
}

/// Cursor state copied out of the store under its lock
///
/// Rendering happens on this owned value, never while the store is locked.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Cursor after the mutation
    pub index: usize,
    /// Total number of results
    pub total: usize,
    /// Result at `index`
    pub item: ResultItem,
}

#[cfg(test)]
mod tests {
    use super::{ResultItem, SessionKey, SessionRecord};
    use crate::errors::PagerError;

    fn item(n: usize) -> ResultItem {
        ResultItem {
            title: format!("result {n}"),
            source_url: format!("https://example.com/{n}"),
            image_url: format!("https://example.com/{n}/full.png"),
            thumbnail_url: format!("https://example.com/{n}/thumb.png"),
        }
    }

    #[test]
    fn record_starts_at_first_result() {
        let record = SessionRecord::new(
            SessionKey::from("msg-1"),
            "ferris",
            vec![item(0), item(1)],
            "chan-1",
            "msg-1",
        )
        .expect("non-empty results must build a record");
        assert_eq!(record.index, 0);
        assert_eq!(record.results.len(), 2);
        assert_eq!(record.key.as_str(), "msg-1");
    }

    #[test]
    fn record_refuses_empty_results() {
        let err = SessionRecord::new(SessionKey::from("msg-1"), "ferris", vec![], "chan-1", "msg-1")
            .expect_err("empty results must be refused");
        assert!(matches!(err, PagerError::EmptyResultSet));
    }
}
