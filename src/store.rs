//! Concurrent session storage
//!
//! Defines the injectable [`SessionStore`] abstraction the lifecycle
//! controller works against, plus the default in-memory implementation. The
//! store is the sole serialization point in the crate: each record is guarded
//! as a whole, so readers observe either the pre- or post-mutation state,
//! never a mix of new cursor and stale fields.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::errors::{PagerError, PagerResult};
use crate::session::{PageSnapshot, SessionKey, SessionRecord};

/// Concurrent key-value store for session records
///
/// Implementations must be safe under arbitrary concurrent invocation from
/// many independent callers. Mutations of a single key serialize against each
/// other and against deletion; across keys no ordering is guaranteed or
/// required. Operations may block briefly on an internal lock but never on
/// I/O: rendering values are cloned out and formatted by the caller.
pub trait SessionStore: Send + Sync + 'static {
    /// Insert a fresh record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if the key is already present. The caller is
    /// responsible for key uniqueness; a collision is deliberately signaled,
    /// never silently overwritten.
    fn create(&self, record: SessionRecord) -> PagerResult<()>;

    /// Clone the record for `key`, if present
    fn get(&self, key: &SessionKey) -> Option<SessionRecord>;

    /// Atomically replace the cursor of `key` with `next(index, total)`
    ///
    /// The callback runs under the store lock with the record's current
    /// cursor and result count; its return value becomes the new cursor, and
    /// a snapshot of the post-mutation state is handed back for rendering.
    /// The callback must return an index in `0..total`. Returns `None` if the
    /// key is absent.
    fn mutate_index(
        &self,
        key: &SessionKey,
        next: &dyn Fn(usize, usize) -> usize,
    ) -> Option<PageSnapshot>;

    /// Remove `key`
    ///
    /// Idempotent: deleting an absent key is not an error. Returns whether a
    /// record was actually removed.
    fn delete(&self, key: &SessionKey) -> bool;

    /// Keys whose records were created at least `ttl` before `now`
    ///
    /// Snapshot for the reaper: the store must not stay locked while the
    /// caller deletes the returned keys, so a bulk sweep never blocks
    /// concurrent lookups.
    fn keys_older_than(&self, ttl: Duration, now: Instant) -> Vec<SessionKey>;

    /// Number of live sessions
    fn len(&self) -> usize;

    /// Whether the store holds no sessions
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory session store
///
/// A single non-poisoning mutex guards the whole map; record-level atomicity
/// follows from every operation locking, acting, and releasing. Suited to a
/// single process; swap in another [`SessionStore`] implementation for
/// sharded or externally-backed storage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sessions: Mutex<HashMap<SessionKey, SessionRecord>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemoryStore {
    fn create(&self, record: SessionRecord) -> PagerResult<()> {
        let mut sessions = self.sessions.lock();
        match sessions.entry(record.key.clone()) {
            Entry::Occupied(_) => Err(PagerError::DuplicateKey(record.key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, key: &SessionKey) -> Option<SessionRecord> {
        self.sessions.lock().get(key).cloned()
    }

    fn mutate_index(
        &self,
        key: &SessionKey,
        next: &dyn Fn(usize, usize) -> usize,
    ) -> Option<PageSnapshot> {
        let mut sessions = self.sessions.lock();
        let record = sessions.get_mut(key)?;
        let total = record.results.len();
        // total >= 1 and the cursor stays in bounds whatever the callback returns
        let index = next(record.index, total) % total;
        record.index = index;
        Some(PageSnapshot {
            index,
            total,
            item: record.results[index].clone(),
        })
    }

    fn delete(&self, key: &SessionKey) -> bool {
        self.sessions.lock().remove(key).is_some()
    }

    fn keys_older_than(&self, ttl: Duration, now: Instant) -> Vec<SessionKey> {
        self.sessions
            .lock()
            .iter()
            .filter(|(_, record)| now.duration_since(record.created_at) >= ttl)
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.sessions.lock().len()
    }
}
