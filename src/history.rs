//! The route history tracker.
//!
//! [`HistoryRouter`] wraps a host [`Router`] and remembers, per named route,
//! the query and path parameters that were active the last time the user
//! left that route. Two restore-aware operations consult that memory:
//!
//! - [`push_with_history`](HistoryRouter::push_with_history) — navigate to a
//!   named route, restoring its last-departure query/params if available.
//! - [`replace_with_history`](HistoryRouter::replace_with_history) — same,
//!   but replacing the current history entry.
//!
//! Capturing happens in a pre-navigation observer registered on the host at
//! construction time: whenever a navigation leaves a **named** route, the
//! route's current query/params are copied into the store, overwriting any
//! earlier snapshot for that name. The observer always lets the navigation
//! continue — it never blocks, redirects, or cancels.
//!
//! The facade wraps the host rather than mutating it; the host router's own
//! API stays reachable through `Deref`/`DerefMut`.
//!
//! # Example
//!
//! ```ignore
//! use route_history::HistoryRouter;
//!
//! let mut router = HistoryRouter::new(host_router);
//!
//! // User browses /users?page=3, then opens a detail page...
//! router.push(NavigationTarget::named("detail"));
//!
//! // ...and this brings them back to /users?page=3, not page 1.
//! router.push_with_history("list");
//! ```

use crate::error::NavigationOutcome;
use crate::location::{NavigationTarget, RouteLocation};
use crate::router::{NavigationObserver, Proceed, Router};
use crate::snapshot::{self, SavedSnapshot, SharedSnapshots, SnapshotStore};
use crate::{debug_log, trace_log, warn_log};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

// ============================================================================
// Capture observer
// ============================================================================

/// Observer that snapshots the route being left on every navigation.
struct CaptureObserver {
    snapshots: SharedSnapshots,
}

impl NavigationObserver for CaptureObserver {
    fn before_navigation(
        &self,
        _to: &RouteLocation,
        from: Option<&RouteLocation>,
        proceed: &Proceed,
    ) {
        if let Some(leaving) = from {
            if let Some(name) = leaving.resolved_name() {
                debug_log!(
                    "Captured departure state for '{}' (query: '{}')",
                    name,
                    leaving.query.to_query_string()
                );
                snapshot::lock(&self.snapshots).record(name, SavedSnapshot::capture(leaving));
            }
        }

        // Anonymous departures leave the store untouched; navigation always
        // continues either way.
        proceed.proceed();
    }

    fn name(&self) -> &'static str {
        "RouteHistoryObserver"
    }
}

// ============================================================================
// HistoryRouter
// ============================================================================

/// How the host should record the navigation in its history.
#[derive(Clone, Copy)]
enum Mode {
    Push,
    Replace,
}

/// A host router decorated with per-route query/params memory.
///
/// Construct one with [`new`](Self::new); the host's own API remains
/// available through deref. Wrapping the same host twice registers two
/// capture observers — harmless, since both record identical snapshots,
/// but the caller is responsible for installing only once.
pub struct HistoryRouter<R: Router> {
    inner: R,
    snapshots: SharedSnapshots,
}

impl<R: Router> HistoryRouter<R> {
    /// Wrap a host router, registering the capture observer on it.
    pub fn new(mut inner: R) -> Self {
        let snapshots = SnapshotStore::shared();
        inner.before_each(Arc::new(CaptureObserver {
            snapshots: Arc::clone(&snapshots),
        }));

        Self { inner, snapshots }
    }

    /// Navigate to a named route, pushing a new history entry and restoring
    /// the route's last-departure query/params if a snapshot exists.
    ///
    /// With no snapshot (first visit), a plain name-only navigation is
    /// triggered and the host's defaults apply. If `name` resolves to no
    /// route, a warning is logged and
    /// [`NavigationOutcome::NotFound`] is returned without navigating.
    pub fn push_with_history(&mut self, name: &str) -> NavigationOutcome {
        self.navigate_with_history(name, Mode::Push)
    }

    /// Like [`push_with_history`](Self::push_with_history), but replaces the
    /// current history entry instead of pushing a new one.
    pub fn replace_with_history(&mut self, name: &str) -> NavigationOutcome {
        self.navigate_with_history(name, Mode::Replace)
    }

    fn navigate_with_history(&mut self, name: &str, mode: Mode) -> NavigationOutcome {
        // Resolution goes against the static route table, not the active route.
        let resolved = match self.inner.resolve(name) {
            Some(location) if location.resolved_name().is_some() => location,
            _ => {
                warn_log!("Route \"{}\" not found", name);
                return NavigationOutcome::NotFound {
                    name: name.to_string(),
                };
            }
        };

        // The resolved name is authoritative for the snapshot lookup (it can
        // differ from the requested string for aliasing hosts).
        let resolved_name = resolved
            .resolved_name()
            .map(str::to_owned)
            .unwrap_or_else(|| name.to_string());

        // Release the store lock before delegating: the host re-enters the
        // capture observer during push/replace, and that takes the same lock.
        let saved = snapshot::lock(&self.snapshots).get(&resolved_name).cloned();

        let target = match saved {
            Some(snapshot) => {
                trace_log!(
                    "Restoring snapshot for '{}' (query: '{}')",
                    resolved_name,
                    snapshot.query.to_query_string()
                );
                NavigationTarget::named(resolved_name)
                    .with_query(snapshot.query)
                    .with_params(snapshot.params)
            }
            None => {
                trace_log!("No snapshot for '{}', navigating plain", resolved_name);
                NavigationTarget::named(resolved_name)
            }
        };

        match mode {
            Mode::Push => self.inner.push(target),
            Mode::Replace => self.inner.replace(target),
        }
    }

    /// Get a copy of the stored snapshot for a route name, if any.
    pub fn snapshot(&self, name: &str) -> Option<SavedSnapshot> {
        snapshot::lock(&self.snapshots).get(name).cloned()
    }

    /// Number of routes with a recorded snapshot.
    pub fn snapshot_count(&self) -> usize {
        snapshot::lock(&self.snapshots).len()
    }

    /// Reference to the wrapped host router.
    pub fn router(&self) -> &R {
        &self.inner
    }

    /// Mutable reference to the wrapped host router.
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the host router.
    ///
    /// The capture observer stays registered on the host and keeps
    /// recording, but its store is dropped along with the facade's handle
    /// once the observer itself goes away.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Router> Deref for HistoryRouter<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<R: Router> DerefMut for HistoryRouter<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

/// The facade is itself a [`Router`], so it can stand in for the host
/// anywhere one is expected (all calls delegate to the wrapped router).
impl<R: Router> Router for HistoryRouter<R> {
    fn resolve(&self, name: &str) -> Option<RouteLocation> {
        self.inner.resolve(name)
    }

    fn before_each(&mut self, observer: Arc<dyn NavigationObserver>) {
        self.inner.before_each(observer);
    }

    fn push(&mut self, target: NavigationTarget) -> NavigationOutcome {
        self.inner.push(target)
    }

    fn replace(&mut self, target: NavigationTarget) -> NavigationOutcome {
        self.inner.replace(target)
    }
}

// ============================================================================
// Tests
// ============================================================================
