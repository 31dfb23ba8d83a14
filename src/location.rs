//! Route locations and navigation targets.
//!
//! Two value types describe "where the router is" and "where it should go":
//!
//! - [`RouteLocation`] — a resolved or currently active route as reported by
//!   the host router: its name (if any), path, and the live query/params.
//! - [`NavigationTarget`] — the descriptor handed to the host's `push`/`replace`
//!   calls: a route name plus optional explicit query/params overriding the
//!   host's defaults for that destination.
//!
//! # Example
//!
//! ```
//! use route_history::{NavigationTarget, QueryParams};
//!
//! let target = NavigationTarget::named("list")
//!     .with_query(QueryParams::from_query_string("page=3"));
//!
//! assert_eq!(target.name, "list");
//! assert!(target.query.is_some());
//! assert!(target.params.is_none());
//! ```

use crate::params::{QueryParams, RouteParams};

// ============================================================================
// RouteLocation
// ============================================================================

/// A resolved or active route as seen at the host-router boundary.
///
/// Produced by [`Router::resolve`](crate::Router::resolve) and passed to
/// navigation observers as the `to`/`from` sides of a navigation. Anonymous
/// routes carry `name: None` and are never snapshotted.
///
/// # Example
///
/// ```
/// use route_history::{RouteLocation, QueryParams};
///
/// let location = RouteLocation::new("/users")
///     .with_name("list")
///     .with_query(QueryParams::from_query_string("page=3"));
///
/// assert_eq!(location.name.as_deref(), Some("list"));
/// assert_eq!(location.query.get("page"), Some(&"3".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteLocation {
    /// Route name, if the route definition carries one.
    pub name: Option<String>,

    /// The matched path (e.g. `/users/42`).
    pub path: String,

    /// Query parameters active at this location.
    pub query: QueryParams,

    /// Path parameters extracted by the host's matcher.
    pub params: RouteParams,
}

impl RouteLocation {
    /// Create an anonymous location for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
            query: QueryParams::new(),
            params: RouteParams::new(),
        }
    }

    /// Set the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the query parameters.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Set the path parameters.
    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }

    /// The route name, if present and non-empty.
    ///
    /// Hosts occasionally report unnamed routes as an empty string rather
    /// than `None`; both count as anonymous here.
    pub fn resolved_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

// ============================================================================
// NavigationTarget
// ============================================================================

/// Descriptor for a navigation the host router should perform.
///
/// `query`/`params` of `None` mean "use the host's defaults for this
/// destination"; `Some` overrides them.
///
/// # Example
///
/// ```
/// use route_history::NavigationTarget;
///
/// let plain = NavigationTarget::named("detail");
/// assert!(plain.query.is_none());
/// assert!(plain.params.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationTarget {
    /// Name of the destination route.
    pub name: String,

    /// Explicit query parameters, overriding the host's defaults.
    pub query: Option<QueryParams>,

    /// Explicit path parameters, overriding the host's defaults.
    pub params: Option<RouteParams>,
}

impl NavigationTarget {
    /// Create a name-only target (host defaults apply).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: None,
            params: None,
        }
    }

    /// Override the query parameters for this navigation.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Override the path parameters for this navigation.
    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = Some(params);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
