//! The host-router boundary.
//!
//! This crate does not ship a router — it decorates one. The host routing
//! library is abstracted behind two traits:
//!
//! - [`Router`] — the capabilities the tracker needs from the host: static
//!   name lookup ([`resolve`](Router::resolve)), pre-navigation observer
//!   registration ([`before_each`](Router::before_each)), and the two
//!   navigation triggers ([`push`](Router::push) / [`replace`](Router::replace)).
//! - [`NavigationObserver`] — a function invoked before every navigation with
//!   the destination, the route being left, and a [`Proceed`] continuation
//!   handle. The host must not complete the navigation unless
//!   [`Proceed::proceed`] was invoked.
//!
//! All methods are **synchronous** --- the target environment is a
//! single-threaded, event-loop-driven UI runtime and navigations are
//! serialized by the host, so there is no need for async plumbing.
//!
//! # Host contract
//!
//! When `push` or `replace` is called, the host must, in order:
//!
//! 1. Build the `to` location (applying the target's explicit query/params
//!    over its own defaults).
//! 2. Invoke every registered observer with `(to, from, proceed)`, where
//!    `from` is the currently active route, if any.
//! 3. Complete the navigation only if the observer allowed it, and return
//!    the settled [`NavigationOutcome`](crate::NavigationOutcome).
//!
//! # Example
//!
//! ```
//! use route_history::{observer_fn, Proceed};
//!
//! let observer = observer_fn(|_to, _from, proceed| {
//!     // inspect the transition, then let it continue
//!     proceed.proceed();
//! });
//! ```

use crate::error::NavigationOutcome;
use crate::location::{NavigationTarget, RouteLocation};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ============================================================================
// Proceed
// ============================================================================

/// Continuation handle passed to navigation observers.
///
/// Starts out disallowing the navigation; an observer calls
/// [`proceed`](Self::proceed) to let it continue. Hosts create one per
/// navigation and check [`is_allowed`](Self::is_allowed) after the observers
/// return.
///
/// # Example
///
/// ```
/// use route_history::Proceed;
///
/// let proceed = Proceed::new();
/// assert!(!proceed.is_allowed());
///
/// proceed.proceed();
/// assert!(proceed.is_allowed());
/// ```
#[derive(Debug, Default)]
pub struct Proceed {
    allowed: AtomicBool,
}

impl Proceed {
    /// Create a handle in the "not yet allowed" state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow the navigation to continue.
    pub fn proceed(&self) {
        self.allowed.store(true, Ordering::Relaxed);
    }

    /// Whether the navigation was allowed to continue.
    pub fn is_allowed(&self) -> bool {
        self.allowed.load(Ordering::Relaxed)
    }
}

// ============================================================================
// NavigationObserver trait
// ============================================================================

/// A function invoked by the host before every navigation.
///
/// Observers may inspect the transition and decide whether it continues by
/// invoking [`Proceed::proceed`]. An observer that returns without calling it
/// leaves the navigation suspended, subject to whatever cancellation policy
/// the host applies.
///
/// # Example
///
/// ```
/// use route_history::{NavigationObserver, Proceed, RouteLocation};
///
/// struct TransitionLogger;
///
/// impl NavigationObserver for TransitionLogger {
///     fn before_navigation(
///         &self,
///         to: &RouteLocation,
///         from: Option<&RouteLocation>,
///         proceed: &Proceed,
///     ) {
///         let from_path = from.map_or("(start)", |f| f.path.as_str());
///         println!("{} -> {}", from_path, to.path);
///         proceed.proceed();
///     }
/// }
/// ```
///
/// # For simple observers
///
/// Use [`observer_fn`] to create an observer from a closure.
pub trait NavigationObserver: Send + Sync + 'static {
    /// Called before each navigation with the destination and the route being
    /// left (`None` on the very first navigation).
    fn before_navigation(
        &self,
        to: &RouteLocation,
        from: Option<&RouteLocation>,
        proceed: &Proceed,
    );

    /// Observer name for debugging and diagnostics.
    fn name(&self) -> &'static str {
        "NavigationObserver"
    }
}

// ============================================================================
// observer_fn helper
// ============================================================================

/// Create an observer from a function or closure.
///
/// # Example
///
/// ```
/// use route_history::{observer_fn, Proceed};
///
/// let observer = observer_fn(|to, _from, proceed| {
///     println!("navigating to {}", to.path);
///     proceed.proceed();
/// });
/// ```
pub const fn observer_fn<F>(f: F) -> FnObserver<F>
where
    F: Fn(&RouteLocation, Option<&RouteLocation>, &Proceed) + Send + Sync + 'static,
{
    FnObserver { f }
}

/// Observer created from a function or closure via [`observer_fn`].
pub struct FnObserver<F> {
    f: F,
}

impl<F> NavigationObserver for FnObserver<F>
where
    F: Fn(&RouteLocation, Option<&RouteLocation>, &Proceed) + Send + Sync + 'static,
{
    fn before_navigation(
        &self,
        to: &RouteLocation,
        from: Option<&RouteLocation>,
        proceed: &Proceed,
    ) {
        (self.f)(to, from, proceed);
    }
}

// ============================================================================
// Router trait
// ============================================================================

/// The capabilities a host routing library must expose to be decorated by
/// [`HistoryRouter`](crate::HistoryRouter).
///
/// `resolve` is a **static** lookup against the configured route table — it
/// must not depend on navigation history or the currently active route.
pub trait Router {
    /// Look up a route definition by name without navigating.
    ///
    /// Returns `None` if no route with that name is configured.
    fn resolve(&self, name: &str) -> Option<RouteLocation>;

    /// Register a pre-navigation observer.
    ///
    /// Observers are invoked in registration order before every navigation;
    /// see the [host contract](self) for the required call sequence.
    fn before_each(&mut self, observer: Arc<dyn NavigationObserver>);

    /// Navigate to the target, pushing a new history entry.
    fn push(&mut self, target: NavigationTarget) -> NavigationOutcome;

    /// Navigate to the target, replacing the current history entry.
    fn replace(&mut self, target: NavigationTarget) -> NavigationOutcome;
}

// ============================================================================
// Tests
// ============================================================================
