//! Integration tests for the route history tracker.
//!
//! Drives a `HistoryRouter` over the scripted host from `common` and checks
//! the capture/restore behavior end to end: departures from named routes are
//! remembered, restore-aware navigation replays them, anonymous routes and
//! unknown names are handled without side effects.

mod common;

use common::*;
use route_history::*;

// ---- capture ----

#[test]
fn departure_from_named_route_is_captured() {
    init_logging();
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(
        NavigationTarget::named("list")
            .with_query(page_query("3"))
            .with_params(RouteParams::new()),
    );
    router.push(NavigationTarget::named("detail").with_params(id_params("42")));

    let saved = router.snapshot("list").expect("list snapshot recorded");
    assert_eq!(
        saved,
        SavedSnapshot {
            query: page_query("3"),
            params: RouteParams::new(),
        }
    );
}

#[test]
fn capture_overwrites_previous_snapshot() {
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.push(NavigationTarget::named("detail"));

    // Back to the list at a different page, then away again.
    router.push(NavigationTarget::named("list").with_query(page_query("7")));
    router.push(NavigationTarget::named("detail"));

    let saved = router.snapshot("list").unwrap();
    assert_eq!(saved.query, page_query("7"));
    assert_eq!(router.snapshot_count(), 2); // list + detail
}

#[test]
fn departure_from_anonymous_route_is_not_captured() {
    let mut router = HistoryRouter::new(list_detail_host());

    // Start on a route with no name (e.g. a splash screen).
    router
        .router_mut()
        .set_current(RouteLocation::new("/splash").with_query(page_query("9")));

    let outcome = router.push(NavigationTarget::named("list"));
    assert!(outcome.is_complete());
    assert_eq!(router.snapshot_count(), 0);
}

#[test]
fn empty_string_name_counts_as_anonymous() {
    let mut router = HistoryRouter::new(list_detail_host());

    router
        .router_mut()
        .set_current(RouteLocation::new("/splash").with_name(""));

    router.push(NavigationTarget::named("list"));
    assert_eq!(router.snapshot_count(), 0);
}

#[test]
fn snapshot_survives_failed_navigation_away() {
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.router_mut().fail_next(NavigationFailure::Cancelled {
        name: "detail".to_string(),
    });

    let outcome = router.push(NavigationTarget::named("detail"));
    assert!(outcome.is_failure());

    // The pre-navigation step already ran, so the departure was recorded.
    assert_eq!(router.snapshot("list").unwrap().query, page_query("3"));
}

// ---- restore ----

#[test]
fn push_with_history_restores_saved_query_and_params() {
    init_logging();
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.push(NavigationTarget::named("detail").with_params(id_params("42")));

    let outcome = router.push_with_history("list");
    assert_eq!(
        outcome,
        NavigationOutcome::Complete {
            to: "list".to_string()
        }
    );

    // The host saw an explicit override, not its page=1 default.
    let call = router.router().last_call().unwrap();
    assert_eq!(call.kind, NavigationKind::Push);
    assert_eq!(call.target.query.as_ref().unwrap(), &page_query("3"));
    assert_eq!(call.target.params.as_ref().unwrap(), &RouteParams::new());

    let current = router.router().current().unwrap();
    assert_eq!(current.query.get("page"), Some(&"3".to_string()));
}

#[test]
fn replace_with_history_restores_via_replace() {
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(NavigationTarget::named("list").with_query(page_query("5")));
    router.push(NavigationTarget::named("detail"));

    let outcome = router.replace_with_history("list");
    assert!(outcome.is_complete());

    let call = router.router().last_call().unwrap();
    assert_eq!(call.kind, NavigationKind::Replace);
    assert_eq!(call.target.query.as_ref().unwrap(), &page_query("5"));
}

#[test]
fn first_visit_falls_back_to_plain_navigation() {
    let mut router = HistoryRouter::new(list_detail_host());

    let outcome = router.push_with_history("list");
    assert!(outcome.is_complete());

    // No overrides: the host's own defaults apply.
    let call = router.router().last_call().unwrap();
    assert!(call.target.query.is_none());
    assert!(call.target.params.is_none());
    assert_eq!(
        router.router().current().unwrap().query.get("page"),
        Some(&"1".to_string())
    );
}

#[test]
fn restore_itself_captures_the_route_being_left() {
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.push(NavigationTarget::named("detail").with_params(id_params("42")));

    router.push_with_history("list");

    // Leaving detail during the restore recorded detail's state too.
    let saved = router.snapshot("detail").expect("detail snapshot recorded");
    assert_eq!(saved.params, id_params("42"));
}

#[test]
fn repeated_restores_reuse_the_same_snapshot() {
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.push(NavigationTarget::named("detail"));

    for _ in 0..3 {
        router.push_with_history("list");
        assert_eq!(
            router.router().current().unwrap().query.get("page"),
            Some(&"3".to_string())
        );
        router.push(NavigationTarget::named("detail"));
    }
}

// ---- error handling ----

#[test]
fn unknown_route_name_resolves_without_navigating() {
    init_logging();
    let mut router = HistoryRouter::new(list_detail_host());

    let outcome = router.push_with_history("nowhere");
    assert_eq!(
        outcome,
        NavigationOutcome::NotFound {
            name: "nowhere".to_string()
        }
    );

    let outcome = router.replace_with_history("nowhere");
    assert!(outcome.is_not_found());

    // No navigation was attempted for either call.
    assert!(router.router().calls.is_empty());
    assert!(router.router().current().is_none());
}

#[test]
fn host_failure_passes_through_verbatim() {
    let mut router = HistoryRouter::new(list_detail_host());

    router.router_mut().fail_next(NavigationFailure::Duplicated {
        name: "list".to_string(),
    });

    let outcome = router.push_with_history("list");
    assert_eq!(
        outcome.failure(),
        Some(&NavigationFailure::Duplicated {
            name: "list".to_string()
        })
    );
}

// ---- isolation ----

#[test]
fn snapshots_are_keyed_per_route_name() {
    let mut router = HistoryRouter::new(
        list_detail_host().route_with_defaults(
            "archive",
            "/archive",
            QueryParams::from_query_string("year=2020"),
            RouteParams::new(),
        ),
    );

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.push(NavigationTarget::named("archive"));

    // Writing list's snapshot created nothing for the others.
    assert!(router.snapshot("list").is_some());
    assert!(router.snapshot("detail").is_none());
    assert!(router.snapshot("archive").is_none());

    router.push(NavigationTarget::named("list"));

    // Leaving archive did not disturb list's snapshot.
    assert_eq!(router.snapshot("list").unwrap().query, page_query("3"));
    assert_eq!(
        router.snapshot("archive").unwrap().query,
        QueryParams::from_query_string("year=2020")
    );
}

// ---- install semantics ----

#[test]
fn wrapping_registers_exactly_one_observer() {
    let router = HistoryRouter::new(list_detail_host());
    assert_eq!(router.router().observer_count(), 1);
}

#[test]
fn double_wrapping_is_benign() {
    // Wrapping a wrapped router registers a second observer; both record
    // the same snapshot, so behavior is unchanged.
    let mut router = HistoryRouter::new(HistoryRouter::new(list_detail_host()));
    assert_eq!(router.router().router().observer_count(), 2);

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.push(NavigationTarget::named("detail"));

    assert_eq!(router.snapshot("list").unwrap().query, page_query("3"));
    assert_eq!(
        router.router().snapshot("list").unwrap().query,
        page_query("3")
    );
}

// ---- worked example ----

#[test]
fn list_detail_scenario() {
    // User navigates from list?page=3 to detail/42, then code restores list.
    let mut router = HistoryRouter::new(list_detail_host());

    router.push(NavigationTarget::named("list").with_query(page_query("3")));
    router.push(NavigationTarget::named("detail").with_params(id_params("42")));

    assert_eq!(
        router.snapshot("list").unwrap(),
        SavedSnapshot {
            query: page_query("3"),
            params: RouteParams::new(),
        }
    );

    router.push_with_history("list");

    let current = router.router().current().unwrap();
    assert_eq!(current.resolved_name(), Some("list"));
    assert_eq!(current.query.get("page"), Some(&"3".to_string()));
}
