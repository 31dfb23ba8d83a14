//! # route-history
//!
//! Per-route "memory" for client-side routers: remember the query string and
//! path parameters a named route had when the user left it, and restore them
//! automatically the next time code navigates there by name.
//!
//! - **Capture** - a pre-navigation observer snapshots the query/params of
//!   every named route being left (anonymous routes are skipped).
//! - **Restore** - [`HistoryRouter::push_with_history`] and
//!   [`HistoryRouter::replace_with_history`] look up the target's snapshot
//!   and navigate with it, falling back to a plain navigation on first visit.
//! - **Host-agnostic** - any router implementing the small [`Router`] trait
//!   can be wrapped; the host's own API stays reachable through deref.
//!
//! # Quick Start
//!
//! ```ignore
//! use route_history::{HistoryRouter, NavigationTarget, QueryParams};
//!
//! // Wrap the host router once at startup.
//! let mut router = HistoryRouter::new(host_router);
//!
//! // The user browses the list at page 3, then opens a detail page.
//! router.push(
//!     NavigationTarget::named("list")
//!         .with_query(QueryParams::from_query_string("page=3")),
//! );
//! router.push(NavigationTarget::named("detail"));
//!
//! // Later: back to the list, restored to page 3 rather than page 1.
//! router.push_with_history("list");
//! ```
//!
//! # Behavior notes
//!
//! - One snapshot per route name; every departure overwrites the previous
//!   one. Snapshots are never expired and survive being restored — repeated
//!   restores reuse the same last-departure state.
//! - Restoring an unknown name logs a warning and returns
//!   [`NavigationOutcome::NotFound`] without navigating.
//! - Host navigation failures (aborted, duplicated, cancelled) pass through
//!   to the caller untouched.
//!
//! # Features
//!
//! | Feature   | Description                              | Default |
//! |-----------|------------------------------------------|---------|
//! | `log`     | Diagnostics via the `log` crate          | yes     |
//! | `tracing` | Diagnostics via the `tracing` crate      | no      |
//!
//! The two logging features are mutually exclusive — enable at most one.

pub mod error;
pub mod history;
pub mod location;
pub mod logging;
pub mod params;
pub mod router;
pub mod snapshot;

pub use error::{NavigationFailure, NavigationOutcome};
pub use history::HistoryRouter;
pub use location::{NavigationTarget, RouteLocation};
pub use params::{QueryParams, RouteParams};
pub use router::{observer_fn, FnObserver, NavigationObserver, Proceed, Router};
pub use snapshot::{SavedSnapshot, SnapshotStore};
