//! Per-route departure snapshots.
//!
//! When a navigation leaves a named route, the tracker remembers the query
//! and path parameters that route had at departure. This module holds the
//! two pieces of that memory:
//!
//! - [`SavedSnapshot`] — the remembered query/params pair.
//! - [`SnapshotStore`] — a name-keyed map owned by the tracker. One snapshot
//!   per route name; a new write fully replaces the previous one. Snapshots
//!   are never expired or deleted — they live as long as the tracker.
//!
//! The store is an explicit map rather than metadata attached to the host's
//! route objects, so no fields are grafted onto externally owned types.
//!
//! # Example
//!
//! ```
//! use route_history::{RouteLocation, QueryParams, SavedSnapshot, SnapshotStore};
//!
//! let leaving = RouteLocation::new("/users")
//!     .with_name("list")
//!     .with_query(QueryParams::from_query_string("page=3"));
//!
//! let mut store = SnapshotStore::new();
//! store.record("list", SavedSnapshot::capture(&leaving));
//!
//! let saved = store.get("list").unwrap();
//! assert_eq!(saved.query.get("page"), Some(&"3".to_string()));
//! ```

use crate::location::RouteLocation;
use crate::params::{QueryParams, RouteParams};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to the store, held by both the facade and its observer.
pub(crate) type SharedSnapshots = Arc<Mutex<SnapshotStore>>;

// ============================================================================
// SavedSnapshot
// ============================================================================

/// The query/params pair remembered from the last departure of a route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedSnapshot {
    /// Query parameters at departure.
    pub query: QueryParams,

    /// Path parameters at departure.
    pub params: RouteParams,
}

impl SavedSnapshot {
    /// Capture the current query/params of a location.
    ///
    /// The values are cloned, so later mutation of the live route cannot
    /// retroactively alter the snapshot.
    pub fn capture(location: &RouteLocation) -> Self {
        Self {
            query: location.query.clone(),
            params: location.params.clone(),
        }
    }
}

// ============================================================================
// SnapshotStore
// ============================================================================

/// Name-keyed storage for departure snapshots.
///
/// At most one snapshot exists per route name at any time; recording a new
/// one overwrites the previous. There is no deletion API — a snapshot lives
/// until it is overwritten or the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshots: HashMap<String, SavedSnapshot>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot for a route name, replacing any previous one.
    pub fn record(&mut self, name: impl Into<String>, snapshot: SavedSnapshot) {
        self.snapshots.insert(name.into(), snapshot);
    }

    /// Get the snapshot for a route name, if one was recorded.
    pub fn get(&self, name: &str) -> Option<&SavedSnapshot> {
        self.snapshots.get(name)
    }

    /// Return `true` if a snapshot exists for the given route name.
    pub fn contains(&self, name: &str) -> bool {
        self.snapshots.contains_key(name)
    }

    /// Return the number of routes with a recorded snapshot.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Return `true` if no snapshots have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Wrap a fresh store in the shared handle used by the tracker.
    pub(crate) fn shared() -> SharedSnapshots {
        Arc::new(Mutex::new(Self::new()))
    }
}

/// Lock the shared store, absorbing poisoning.
///
/// The store holds plain data and every write is a whole-value replacement,
/// so a panicked writer cannot leave an entry half-updated.
pub(crate) fn lock(store: &SharedSnapshots) -> std::sync::MutexGuard<'_, SnapshotStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Tests
// ============================================================================
