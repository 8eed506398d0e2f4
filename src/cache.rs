//! Path data memoization.
//!
//! [`PathDataCache`] guarantees that the locate/read/extract chain runs at
//! most once per (icon, style) pair, even when many threads request the same
//! cold key at once. Successful results are retained for the remaining
//! process lifetime: the key space is the cross-product of two closed enums,
//! so it is structurally bounded and no eviction policy is needed. Extending
//! the crate to dynamic icon packs would invalidate that invariant and force
//! a revisit of the no-eviction policy.
//!
//! Failures are never cached. A lookup that fails (missing resource,
//! malformed document) is retried in full on the next call for that key;
//! callers already waiting on the in-flight computation observe the same
//! failure without re-running it themselves.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Condvar, Mutex};
use tracing::trace;

use crate::error::{IconError, IconResult};
use crate::icon::Icon;
use crate::style::IconStyle;
use crate::types::PathData;

/// Derive the cache key for an (icon, style) pair.
///
/// Collision-free: icon names never contain underscores and style tokens are
/// plain lowercase words, so the separator is unambiguous.
pub(crate) fn cache_key(icon: Icon, style: IconStyle) -> String {
    format!("{}_{}", icon.name(), style.as_str())
}

/// Outcome of an in-flight computation, published to its waiters.
struct Pending {
    outcome: Mutex<Option<IconResult<PathData>>>,
    done: Condvar,
}

impl Pending {
    fn new() -> Self {
        Self {
            outcome: Mutex::new(None),
            done: Condvar::new(),
        }
    }

    /// Block until the computing thread publishes an outcome.
    fn wait(&self) -> IconResult<PathData> {
        let mut outcome = self.outcome.lock();
        loop {
            if let Some(result) = outcome.as_ref() {
                return result.clone();
            }
            self.done.wait(&mut outcome);
        }
    }

    fn publish(&self, result: IconResult<PathData>) {
        let mut outcome = self.outcome.lock();
        *outcome = Some(result);
        self.done.notify_all();
    }
}

/// Unwind protection for the computing thread.
///
/// A panic in `compute` (a misbehaving foreign bundle) must not strand the
/// `InFlight` slot: waiters would block forever and the key could never be
/// retried. While armed, dropping the guard removes the slot and publishes
/// [`IconError::LookupPanicked`] to the waiters.
struct ComputeGuard<'a> {
    cache: &'a PathDataCache,
    pending: &'a Arc<Pending>,
    key: &'a str,
    icon: Icon,
    style: IconStyle,
    armed: bool,
}

impl Drop for ComputeGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.cache.slots.lock().remove(self.key);
        self.pending.publish(Err(IconError::LookupPanicked {
            icon: self.icon,
            style: self.style,
        }));
    }
}

enum Slot {
    /// Computation finished; serve from memory.
    Ready(PathData),
    /// Computation in flight on another thread.
    InFlight(Arc<Pending>),
}

/// A concurrent memoization cache for extracted path data.
///
/// Safe for shared use from multiple threads without external locking.
/// The map lock is held only for slot bookkeeping; the computation itself
/// runs unlocked, so unrelated keys never contend on a computing key and
/// concurrent first accesses to one key synchronize on that key's own
/// pending slot.
#[derive(Default)]
pub struct PathDataCache {
    slots: Mutex<HashMap<String, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PathDataCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the path data for `(icon, style)`, running `compute` on a
    /// cold key.
    ///
    /// At most one invocation of `compute` occurs per key regardless of how
    /// many threads race on the first access. On success every caller
    /// receives a clone of the same [`PathData`]; on failure the error is
    /// handed to the racing callers and the key is left cold. If `compute`
    /// panics, the panic propagates to its own caller while waiters receive
    /// [`IconError::LookupPanicked`] and the key is left cold.
    pub fn get_or_compute<F>(&self, icon: Icon, style: IconStyle, compute: F) -> IconResult<PathData>
    where
        F: FnOnce() -> IconResult<PathData>,
    {
        let key = cache_key(icon, style);

        // Claim the slot under the map lock, then act on the claim with the
        // lock released.
        enum Claim {
            Hit(PathData),
            Wait(Arc<Pending>),
            Compute(Arc<Pending>),
        }

        let claim = {
            let mut slots = self.slots.lock();
            match slots.get(&key) {
                Some(Slot::Ready(data)) => Claim::Hit(data.clone()),
                Some(Slot::InFlight(pending)) => Claim::Wait(Arc::clone(pending)),
                None => {
                    let pending = Arc::new(Pending::new());
                    slots.insert(key.clone(), Slot::InFlight(Arc::clone(&pending)));
                    Claim::Compute(pending)
                }
            }
        };

        let pending = match claim {
            Claim::Hit(data) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(icon = %icon, style = %style, "path data cache hit");
                return Ok(data);
            }
            // Another thread is computing this key; wait for its outcome
            // instead of running the chain again.
            Claim::Wait(pending) => return pending.wait(),
            Claim::Compute(pending) => pending,
        };

        self.misses.fetch_add(1, Ordering::Relaxed);
        let mut guard = ComputeGuard {
            cache: self,
            pending: &pending,
            key: key.as_str(),
            icon,
            style,
            armed: true,
        };
        let result = compute();
        guard.armed = false;
        drop(guard);

        {
            let mut slots = self.slots.lock();
            match &result {
                Ok(data) => {
                    slots.insert(key, Slot::Ready(data.clone()));
                }
                Err(_) => {
                    slots.remove(&key);
                }
            }
        }
        pending.publish(result.clone());

        result
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lookups served from memory.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that ran the computation.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for PathDataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathDataCache")
            .field("entries", &self.len())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
