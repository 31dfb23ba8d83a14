//! Test utilities for route history tests
//!
//! Provides a scripted in-memory host router implementing the `Router`
//! boundary the way the host contract requires: resolve by name, run
//! observers before completing, apply target overrides over route defaults.

#![allow(dead_code)]

use route_history::*;
use std::sync::Arc;

/// Initialize env_logger once for a test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A statically configured route in the scripted host.
struct RouteDef {
    name: String,
    path: String,
    default_query: QueryParams,
    default_params: RouteParams,
}

/// How a navigation was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
}

/// One delegated navigation call, as the host saw it.
#[derive(Debug, Clone)]
pub struct NavigationCall {
    pub kind: NavigationKind,
    pub target: NavigationTarget,
}

/// Scripted host router: fixed route table, observer pipeline, call log.
pub struct ScriptedHost {
    routes: Vec<RouteDef>,
    observers: Vec<Arc<dyn NavigationObserver>>,
    current: Option<RouteLocation>,
    /// Every push/replace the host received, in order.
    pub calls: Vec<NavigationCall>,
    fail_next: Option<NavigationFailure>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            observers: Vec::new(),
            current: None,
            calls: Vec::new(),
            fail_next: None,
        }
    }

    /// Add a named route with no defaults.
    pub fn route(self, name: &str, path: &str) -> Self {
        self.route_with_defaults(name, path, QueryParams::new(), RouteParams::new())
    }

    /// Add a named route with default query/params applied to plain navigations.
    pub fn route_with_defaults(
        mut self,
        name: &str,
        path: &str,
        default_query: QueryParams,
        default_params: RouteParams,
    ) -> Self {
        self.routes.push(RouteDef {
            name: name.to_string(),
            path: path.to_string(),
            default_query,
            default_params,
        });
        self
    }

    /// Teleport to an arbitrary location without running observers.
    ///
    /// Used to start tests on anonymous routes, which cannot be reached
    /// through the name-based navigation API.
    pub fn set_current(&mut self, location: RouteLocation) {
        self.current = Some(location);
    }

    /// Make the next navigation settle as the given failure after the
    /// observer pipeline has run.
    pub fn fail_next(&mut self, failure: NavigationFailure) {
        self.fail_next = Some(failure);
    }

    pub fn current(&self) -> Option<&RouteLocation> {
        self.current.as_ref()
    }

    pub fn last_call(&self) -> Option<&NavigationCall> {
        self.calls.last()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn navigate(&mut self, kind: NavigationKind, target: NavigationTarget) -> NavigationOutcome {
        self.calls.push(NavigationCall {
            kind,
            target: target.clone(),
        });

        let Some(mut to) = self.resolve(&target.name) else {
            return NavigationOutcome::NotFound { name: target.name };
        };
        if let Some(query) = target.query {
            to.query = query;
        }
        if let Some(params) = target.params {
            to.params = params;
        }

        let proceed = Proceed::new();
        for observer in self.observers.clone() {
            observer.before_navigation(&to, self.current.as_ref(), &proceed);
        }
        if !proceed.is_allowed() {
            return NavigationOutcome::Failure(NavigationFailure::Aborted {
                reason: "observer did not proceed".to_string(),
            });
        }

        if let Some(failure) = self.fail_next.take() {
            return NavigationOutcome::Failure(failure);
        }

        let name = to.resolved_name().unwrap_or_default().to_string();
        self.current = Some(to);
        NavigationOutcome::Complete { to: name }
    }
}

impl Router for ScriptedHost {
    fn resolve(&self, name: &str) -> Option<RouteLocation> {
        self.routes.iter().find(|r| r.name == name).map(|r| {
            RouteLocation::new(r.path.clone())
                .with_name(r.name.clone())
                .with_query(r.default_query.clone())
                .with_params(r.default_params.clone())
        })
    }

    fn before_each(&mut self, observer: Arc<dyn NavigationObserver>) {
        self.observers.push(observer);
    }

    fn push(&mut self, target: NavigationTarget) -> NavigationOutcome {
        self.navigate(NavigationKind::Push, target)
    }

    fn replace(&mut self, target: NavigationTarget) -> NavigationOutcome {
        self.navigate(NavigationKind::Replace, target)
    }
}

/// A `list` + `detail` table mirroring a typical list/detail screen pair:
/// `list` defaults to `?page=1`, `detail` takes an `:id` path parameter.
pub fn list_detail_host() -> ScriptedHost {
    ScriptedHost::new()
        .route_with_defaults(
            "list",
            "/users",
            QueryParams::from_query_string("page=1"),
            RouteParams::new(),
        )
        .route("detail", "/users/:id")
}

/// Query params for `?page=<n>`.
pub fn page_query(page: &str) -> QueryParams {
    QueryParams::from_query_string(&format!("page={page}"))
}

/// Route params `{ id: <id> }`.
pub fn id_params(id: &str) -> RouteParams {
    let mut params = RouteParams::new();
    params.set("id".to_string(), id.to_string());
    params
}
