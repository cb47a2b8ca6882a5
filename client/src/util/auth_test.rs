use std::cell::RefCell;
use std::rc::Rc;

use fyp_supervisor::guard::Rendered;
use fyp_supervisor::session::Principal;

use super::*;

const LANDING: &str = "/login";

fn authenticated() -> SessionStatus {
    SessionStatus::Authenticated(Principal::new("u1"))
}

#[derive(Clone, Default)]
struct Visits(Rc<RefCell<Vec<String>>>);

impl Visits {
    fn navigate(&self) -> impl Fn(&str, NavigateOptions) + Clone + 'static {
        let visits = self.0.clone();
        move |path: &str, _: NavigateOptions| visits.borrow_mut().push(path.to_owned())
    }

    fn navigator(&self) -> impl Fn(&str) {
        let visits = self.0.clone();
        move |path: &str| visits.borrow_mut().push(path.to_owned())
    }

    fn all(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

// =============================================================================
// install
// =============================================================================

#[test]
fn install_with_pending_session_renders_loading_without_redirect() {
    Owner::new().with(|| {
        let visits = Visits::default();
        let session = RwSignal::new(SessionState::default());

        let route_guard = install_route_guard(session, LANDING.to_owned(), visits.navigate());

        assert_eq!(route_guard.with_untracked(|g| g.render(|p| p.uid.clone())), Rendered::Loading);
        assert!(visits.all().is_empty());
    });
}

#[test]
fn install_with_authenticated_session_admits_immediately() {
    Owner::new().with(|| {
        let visits = Visits::default();
        let session = RwSignal::new(SessionState { status: authenticated() });

        let route_guard = install_route_guard(session, LANDING.to_owned(), visits.navigate());

        assert_eq!(route_guard.with_untracked(|g| g.render(|p| p.uid.clone())), Rendered::View("u1".to_owned()));
        assert!(visits.all().is_empty());
    });
}

#[test]
fn install_defers_redirect_for_signed_out_session() {
    Owner::new().with(|| {
        let visits = Visits::default();
        let session = RwSignal::new(SessionState { status: SessionStatus::Unauthenticated });

        let route_guard = install_route_guard(session, LANDING.to_owned(), visits.navigate());

        assert_eq!(route_guard.with_untracked(|g| g.state().clone()), GuardState::Pending);
        assert!(visits.all().is_empty());
    });
}

// =============================================================================
// sync
// =============================================================================

#[test]
fn pending_status_never_redirects() {
    Owner::new().with(|| {
        let visits = Visits::default();
        let route_guard = RwSignal::new(RouteGuard::new(LANDING));

        sync_route_guard(route_guard, &SessionStatus::Pending, &visits.navigator());
        sync_route_guard(route_guard, &SessionStatus::Pending, &visits.navigator());

        assert!(visits.all().is_empty());
        assert_eq!(route_guard.with_untracked(|g| g.state().clone()), GuardState::Pending);
    });
}

#[test]
fn revocation_while_admitted_redirects_exactly_once() {
    Owner::new().with(|| {
        let visits = Visits::default();
        let route_guard = RwSignal::new(RouteGuard::new(LANDING));

        sync_route_guard(route_guard, &authenticated(), &visits.navigator());
        sync_route_guard(route_guard, &SessionStatus::Unauthenticated, &visits.navigator());
        sync_route_guard(route_guard, &SessionStatus::Unauthenticated, &visits.navigator());

        assert_eq!(visits.all(), vec![LANDING.to_owned()]);
        assert_eq!(
            route_guard.with_untracked(|g| g.render(|p| p.uid.clone())),
            Rendered::Redirecting(LANDING.to_owned())
        );
    });
}

#[test]
fn sync_after_disposal_is_ignored() {
    let owner = Owner::new();
    let route_guard = owner.with(|| RwSignal::new(RouteGuard::new(LANDING)));
    route_guard.dispose();
    let visits = Visits::default();

    sync_route_guard(route_guard, &SessionStatus::Unauthenticated, &visits.navigator());

    assert!(visits.all().is_empty());
}
