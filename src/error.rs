//! Navigation outcomes and failure types.
//!
//! This module defines the types returned when a navigation attempt settles:
//!
//! - [`NavigationOutcome`] — the top-level result of any navigation call
//!   (`Complete`, `NotFound`, `Failure`).
//! - [`NavigationFailure`] — a handled navigation failure produced by the host
//!   router (aborted by an observer, duplicated, cancelled by a newer
//!   navigation, ...). Passed through this crate verbatim.
//!
//! `NotFound` is deliberately not a [`NavigationFailure`]: it is the "resolved,
//! value-less" result of asking for a route name the host does not know. The
//! caller gets a value back immediately, nothing panics, and no navigation is
//! attempted.
//!
//! # Examples
//!
//! ```
//! use route_history::NavigationOutcome;
//!
//! let outcome = NavigationOutcome::Complete { to: "list".into() };
//! assert!(outcome.is_complete());
//!
//! let missing = NavigationOutcome::NotFound { name: "nowhere".into() };
//! assert!(missing.is_not_found());
//! assert!(!missing.is_failure());
//! ```

use std::fmt;

// ============================================================================
// Navigation Outcome
// ============================================================================

/// Outcome of a navigation call at the host-router boundary.
///
/// Every [`Router::push`](crate::Router::push) /
/// [`Router::replace`](crate::Router::replace) call (and therefore every
/// restore-aware call on [`HistoryRouter`](crate::HistoryRouter)) returns this
/// enum synchronously once the navigation settles.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// Navigation completed.
    Complete {
        /// Name of the route navigated to.
        to: String,
    },
    /// The requested route name matched no route definition. No navigation
    /// was attempted.
    NotFound {
        /// The unresolvable name.
        name: String,
    },
    /// The host router started the navigation but it did not complete.
    Failure(NavigationFailure),
}

/// A handled navigation failure, as produced by the host router.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display) for
/// idiomatic error handling. This crate never constructs these itself — they
/// flow through from the host untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationFailure {
    /// An observer or guard did not allow the navigation to proceed.
    Aborted {
        /// Human-readable reason, if the host supplied one.
        reason: String,
    },

    /// Navigation to the route that is already active.
    Duplicated {
        /// Name of the already-active route.
        name: String,
    },

    /// Superseded by a newer navigation before completing.
    Cancelled {
        /// Name of the superseded destination.
        name: String,
    },

    /// Host-specific failure.
    Custom {
        /// Host-supplied message.
        message: String,
    },
}

impl fmt::Display for NavigationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationFailure::Aborted { reason } => {
                write!(f, "Navigation aborted: {}", reason)
            }
            NavigationFailure::Duplicated { name } => {
                write!(f, "Already at route: {}", name)
            }
            NavigationFailure::Cancelled { name } => {
                write!(f, "Navigation to {} cancelled", name)
            }
            NavigationFailure::Custom { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for NavigationFailure {}

impl NavigationOutcome {
    /// Check if the navigation completed.
    pub fn is_complete(&self) -> bool {
        matches!(self, NavigationOutcome::Complete { .. })
    }

    /// Check if the requested name matched no route.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationOutcome::NotFound { .. })
    }

    /// Check if the host reported a handled failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, NavigationOutcome::Failure(_))
    }

    /// Get the failure, if any.
    pub fn failure(&self) -> Option<&NavigationFailure> {
        match self {
            NavigationOutcome::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
