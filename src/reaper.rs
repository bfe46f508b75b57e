//! Periodic eviction of expired sessions
//!
//! The reaper is the coarse safety net behind each session's one-shot
//! eviction timer: every tick it snapshots the keys older than the TTL and
//! deletes them one by one. Either eviction path may win the race; deletion
//! is idempotent, so the loser's pass is a no-op.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::store::SessionStore;

/// Run the sweep loop until cancelled
///
/// Ticks every `interval`, skipping the interval's immediate first tick. A
/// tick never aborts the loop: deleting an already-absent key is a no-op and
/// the sweep continues with the remaining keys.
pub(crate) async fn run(
    store: Arc<dyn SessionStore>,
    ttl: Duration,
    interval: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await;
    loop {
        tokio::select! {
            () = cancel.cancelled() => return,
            _ = ticker.tick() => {
                let evicted = sweep(store.as_ref(), ttl, Instant::now());
                if evicted > 0 {
                    debug!(evicted, "sweep removed expired sessions");
                }
            }
        }
    }
}

/// Evict every session older than `ttl` as of `now`
///
/// Returns how many sessions were actually removed. The key snapshot is taken
/// before any deletion, so the store is never held locked across the whole
/// sweep.
pub fn sweep(store: &dyn SessionStore, ttl: Duration, now: Instant) -> usize {
    let stale = store.keys_older_than(ttl, now);
    stale.into_iter().filter(|key| store.delete(key)).count()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use tokio_util::sync::CancellationToken;
    use tracing_subscriber::EnvFilter;

    use super::{run, sweep};
    use crate::session::{ResultItem, SessionKey, SessionRecord};
    use crate::store::{InMemoryStore, SessionStore};

    fn record(key: &str) -> SessionRecord {
        SessionRecord::new(
            SessionKey::from(key),
            "lighthouses",
            vec![ResultItem {
                title: "result 0".to_owned(),
                source_url: "https://example.com/0".to_owned(),
                image_url: "https://example.com/0/full.png".to_owned(),
                thumbnail_url: "https://example.com/0/thumb.png".to_owned(),
            }],
            "chan-1",
            key,
        )
        .expect("non-empty results must build a record")
    }

    #[test]
    fn sweep_removes_only_stale_sessions() {
        let store = InMemoryStore::new();
        store.create(record("msg-1")).expect("create must succeed");
        let ttl = Duration::from_secs(900);

        assert_eq!(sweep(&store, ttl, Instant::now()), 0);
        assert_eq!(store.len(), 1);

        let past_ttl = Instant::now() + ttl + Duration::from_secs(1);
        assert_eq!(sweep(&store, ttl, past_ttl), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn sweep_on_an_empty_store_is_a_no_op() {
        let store = InMemoryStore::new();
        let evicted = sweep(&store, Duration::from_secs(900), Instant::now());
        assert_eq!(evicted, 0);
    }

    #[tokio::test]
    async fn loop_evicts_expired_sessions_and_stops_on_cancel() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();

        let store: Arc<dyn SessionStore> = Arc::new(InMemoryStore::new());
        store.create(record("msg-1")).expect("create must succeed");

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(
            Arc::clone(&store),
            Duration::from_millis(50),
            Duration::from_millis(20),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(store.is_empty(), "reaper must evict the expired session");

        cancel.cancel();
        handle.await.expect("reaper task must stop cleanly");
    }
}
