//! Session lifecycle orchestration
//!
//! [`PagerService`] composes the store, the pagination engine, and both
//! expiry paths. Creation inserts a record and arms a one-shot eviction at
//! the TTL horizon; a button press parses the direction token and advances
//! the cursor atomically; the periodic reaper sweeps for the lifetime of the
//! service. All background tasks carry cancellation handles so
//! [`PagerService::shutdown`] can drain them deterministically.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

use crate::config::PagerConfig;
use crate::errors::{PagerError, PagerResult};
use crate::models::{ButtonPress, NewSearch, PageView, SearchCreated};
use crate::pagination::{self, Direction};
use crate::reaper;
use crate::session::{SessionKey, SessionRecord};
use crate::store::{InMemoryStore, SessionStore};

/// Session lifecycle controller
///
/// Cheap to clone; every clone shares the same store and task handles, so one
/// instance can serve any number of concurrent event-handling invocations.
#[derive(Clone)]
pub struct PagerService {
    /// TTL and sweep settings
    config: PagerConfig,
    /// Shared session storage (the crate's only shared mutable state)
    store: Arc<dyn SessionStore>,
    /// Background tasks: the reaper plus one eviction timer per session
    tasks: TaskTracker,
    /// Root cancellation handle for all background tasks
    cancel: CancellationToken,
}

impl PagerService {
    /// Create a service backed by the in-memory store
    ///
    /// Must be called within a Tokio runtime: the reaper task is spawned
    /// immediately.
    pub fn new(config: PagerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryStore::new()))
    }

    /// Create a service backed by a caller-supplied store
    pub fn with_store(config: PagerConfig, store: Arc<dyn SessionStore>) -> Self {
        let tasks = TaskTracker::new();
        let cancel = CancellationToken::new();
        tasks.spawn(reaper::run(
            Arc::clone(&store),
            config.session_ttl(),
            config.sweep_interval(),
            cancel.child_token(),
        ));
        Self {
            config,
            store,
            tasks,
            cancel,
        }
    }

    /// Handle a "new search results" event
    ///
    /// Creates the session keyed by the rendered message's ID and arms its
    /// one-shot eviction. The cursor starts at the first result.
    ///
    /// # Errors
    ///
    /// - `EmptyResultSet` if the event carries zero results; no session is
    ///   created.
    /// - `DuplicateKey` if a session for this message already exists.
    pub fn new_search(&self, event: NewSearch) -> PagerResult<SearchCreated> {
        let key = SessionKey::new(event.message_id.clone());
        let record = SessionRecord::new(
            key.clone(),
            event.query,
            event.results,
            event.channel_id,
            event.message_id,
        )?;
        let total = record.results.len();

        if let Err(err) = self.store.create(record) {
            warn!(key = %key, error = %err, "refused to create session");
            return Err(err);
        }
        debug!(key = %key, total, "session created");
        self.arm_eviction(key.clone());

        Ok(SearchCreated {
            session_key: key,
            first_index: 0,
        })
    }

    /// Handle a "button pressed" event
    ///
    /// Parses the direction token, advances the cursor atomically under the
    /// store lock, and returns the page to render. The session's TTL is not
    /// extended by the press.
    ///
    /// # Errors
    ///
    /// - `InvalidDirection` if the token is unrecognized; the cursor is left
    ///   unchanged and nothing is rendered.
    /// - `SessionExpired` if the session is gone (TTL passed, or it never
    ///   existed); the chat layer should render an expiry notice instead of
    ///   failing silently.
    pub fn button_press(&self, event: ButtonPress) -> PagerResult<PageView> {
        let direction = Direction::parse(&event.direction)?;
        let snapshot = self
            .store
            .mutate_index(&event.session_key, &|index, len| {
                pagination::advance(index, len, direction)
            })
            .ok_or_else(|| PagerError::SessionExpired(event.session_key.to_string()))?;

        Ok(PageView {
            index: snapshot.index,
            total: snapshot.total,
            item: snapshot.item,
        })
    }

    /// Number of live sessions
    pub fn active_sessions(&self) -> usize {
        self.store.len()
    }

    /// Cancel the reaper and every armed eviction timer, then wait for them
    ///
    /// Records still in the store are left untouched; only the background
    /// tasks are drained.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        self.tasks.close();
        self.tasks.wait().await;
    }

    /// Arm the one-shot eviction for `key` at the TTL horizon
    ///
    /// The timer is never reset by later presses: TTL is measured from
    /// creation, so an endlessly-paged session still expires and worst-case
    /// memory stays bounded. The timer races with the reaper sweep; deletion
    /// is idempotent, so whichever fires second is a no-op.
    fn arm_eviction(&self, key: SessionKey) {
        let store = Arc::clone(&self.store);
        let ttl = self.config.session_ttl();
        let cancel = self.cancel.child_token();
        self.tasks.spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                () = tokio::time::sleep(ttl) => {
                    if store.delete(&key) {
                        debug!(key = %key, "session expired");
                    }
                }
            }
        });
    }
}
