use contracts::system::auth::Role;
use contracts::system::navigation::LOGIN_PATH;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::{use_session, SessionPhase};

/// Observable states of a route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session still resolving: show a placeholder, never redirect.
    Checking,
    /// Anonymous, or authenticated without a required role.
    Denied,
    Allowed,
}

/// What a guard puts on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Placeholder,
    Children,
}

impl GuardState {
    /// Children mount only when `Allowed`; a denied guard keeps the
    /// placeholder up while its redirect is in flight.
    pub fn view(&self) -> GuardView {
        match self {
            GuardState::Allowed => GuardView::Children,
            GuardState::Checking | GuardState::Denied => GuardView::Placeholder,
        }
    }
}

/// `required == None` admits any authenticated role.
pub fn evaluate(phase: &SessionPhase, required: Option<&[Role]>) -> GuardState {
    match phase {
        SessionPhase::Resolving => GuardState::Checking,
        SessionPhase::Anonymous => GuardState::Denied,
        SessionPhase::Authenticated(record) => match required {
            None => GuardState::Allowed,
            Some(roles) if record.has_any_role(roles) => GuardState::Allowed,
            Some(_) => GuardState::Denied,
        },
    }
}

/// Fires once per entry into `Denied`, re-arms when the guard leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Returns true when a redirect must be issued now.
    pub fn observe(&mut self, state: GuardState) -> bool {
        match state {
            GuardState::Denied if self.fired => false,
            GuardState::Denied => {
                self.fired = true;
                true
            }
            GuardState::Checking | GuardState::Allowed => {
                self.fired = false;
                false
            }
        }
    }
}

#[component]
fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="auth-loading">
            <span>"Cargando..."</span>
        </div>
    }
}

fn guarded(required: Option<Vec<Role>>, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let required = StoredValue::new(required);

    let state = Memo::new(move |_| {
        // re-evaluate on every login/logout attempt, not only on phase changes
        session.revision();
        let phase = session.phase();
        required.with_value(|roles| evaluate(&phase, roles.as_deref()))
    });

    let navigate = use_navigate();
    Effect::new(move |latch: Option<RedirectLatch>| {
        let mut latch = latch.unwrap_or_default();
        let current = state.get();
        if latch.observe(current) {
            log::info!("access denied, redirecting to {}", LOGIN_PATH);
            navigate(
                LOGIN_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        latch
    });

    move || match state.get().view() {
        GuardView::Children => children(),
        GuardView::Placeholder => view! { <GuardPlaceholder /> }.into_any(),
    }
}

/// Renders children only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(None, children)
}

/// Renders children only when the session holds one of `roles`. A wrong
/// role is treated like no session at all.
#[component]
pub fn RequireRole(#[prop(into)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    guarded(Some(roles), children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::context::SessionContext;
    use crate::system::auth::credentials::CredentialStore;
    use crate::system::auth::service::SessionService;
    use crate::system::auth::storage::{MemoryStorage, SessionPersistence, SESSION_KEY};
    use contracts::system::auth::SessionRecord;
    use std::sync::Arc;

    const ADMIN_ONLY: &[Role] = &[Role::Admin];

    fn context_over(store: &MemoryStorage) -> SessionContext {
        SessionContext::new(SessionService::new(
            CredentialStore::builtin(),
            SessionPersistence::new(Arc::new(store.clone())),
        ))
    }

    fn guard(session: &SessionContext, required: Option<&[Role]>) -> GuardState {
        evaluate(&session.phase_untracked(), required)
    }

    #[test]
    fn test_never_allowed_while_resolving() {
        for required in [None, Some(ADMIN_ONLY), Some(&Role::ALL[..])] {
            assert_eq!(evaluate(&SessionPhase::Resolving, required), GuardState::Checking);
        }
    }

    #[test]
    fn test_evaluate_table() {
        let admin = SessionPhase::Authenticated(SessionRecord::new("admin", Role::Admin));
        let viewer =
            SessionPhase::Authenticated(SessionRecord::new("viewer@bpdata.com", Role::Viewer));
        assert_eq!(evaluate(&SessionPhase::Anonymous, None), GuardState::Denied);
        assert_eq!(evaluate(&viewer, None), GuardState::Allowed);
        assert_eq!(evaluate(&viewer, Some(ADMIN_ONLY)), GuardState::Denied);
        assert_eq!(evaluate(&admin, Some(ADMIN_ONLY)), GuardState::Allowed);
        assert_eq!(evaluate(&admin, Some(&[])), GuardState::Denied);
    }

    #[test]
    fn test_latch_redirects_once_per_denial() {
        let mut latch = RedirectLatch::default();
        assert!(!latch.observe(GuardState::Checking));
        assert!(latch.observe(GuardState::Denied));
        assert!(!latch.observe(GuardState::Denied));
        assert!(!latch.observe(GuardState::Denied));
        assert!(!latch.observe(GuardState::Allowed));
        assert!(latch.observe(GuardState::Denied));
    }

    #[test]
    fn test_view_per_state() {
        assert_eq!(GuardState::Checking.view(), GuardView::Placeholder);
        assert_eq!(GuardState::Denied.view(), GuardView::Placeholder);
        assert_eq!(GuardState::Allowed.view(), GuardView::Children);
    }

    /// One guard pass as the component runs it: what is rendered, and
    /// whether the redirect effect navigates.
    fn pass(latch: &mut RedirectLatch, state: GuardState) -> (GuardView, bool) {
        (state.view(), latch.observe(state))
    }

    #[test]
    fn test_guard_passes_over_a_session_lifetime() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        let mut latch = RedirectLatch::default();

        // resolving: placeholder, no navigation
        assert_eq!(
            pass(&mut latch, guard(&session, None)),
            (GuardView::Placeholder, false)
        );

        // anonymous: placeholder plus exactly one redirect
        session.resolve();
        assert_eq!(
            pass(&mut latch, guard(&session, None)),
            (GuardView::Placeholder, true)
        );
        assert_eq!(
            pass(&mut latch, guard(&session, None)),
            (GuardView::Placeholder, false)
        );

        // signed in: children, no navigation
        assert!(session.login("viewer@bpdata.com", "password123"));
        assert_eq!(
            pass(&mut latch, guard(&session, None)),
            (GuardView::Children, false)
        );

        // signed out again: back to placeholder and a fresh redirect
        session.logout();
        assert_eq!(
            pass(&mut latch, guard(&session, None)),
            (GuardView::Placeholder, true)
        );
    }

    #[test]
    fn test_children_never_mount_for_wrong_role() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        session.login("hr_manager@bpdata.com", "password123");
        let mut latch = RedirectLatch::default();
        assert_eq!(
            pass(&mut latch, guard(&session, Some(ADMIN_ONLY))),
            (GuardView::Placeholder, true)
        );
    }

    #[test]
    fn scenario_a_login_then_reload() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        let mut latch = RedirectLatch::default();

        assert!(!latch.observe(guard(&session, None)));
        session.resolve();
        assert!(latch.observe(guard(&session, None)), "anonymous visit must redirect");

        assert!(session.login("hr_manager@bpdata.com", "password123"));
        assert_eq!(guard(&session, None), GuardState::Allowed);

        // reload: a fresh context over the same storage
        let reloaded = context_over(&store);
        assert_eq!(guard(&reloaded, None), GuardState::Checking);
        reloaded.resolve();
        assert_eq!(guard(&reloaded, None), GuardState::Allowed);
        assert_eq!(
            reloaded.record(),
            Some(SessionRecord::new("hr_manager@bpdata.com", Role::HrManager))
        );
    }

    #[test]
    fn scenario_b_wrong_secret_matches_unknown_identifier() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        let wrong_secret = session.login("hr_manager@bpdata.com", "wrongpass");
        let unknown = session.login("someone@elsewhere.com", "wrongpass");
        assert!(!wrong_secret);
        assert_eq!(wrong_secret, unknown);
        assert_eq!(guard(&session, None), GuardState::Denied);
    }

    #[test]
    fn scenario_c_non_admin_kept_out_of_backoffice() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        for (identifier, secret) in [
            ("hr_manager@bpdata.com", "password123"),
            ("hr_analyst@bpdata.com", "password123"),
            ("viewer@bpdata.com", "password123"),
        ] {
            assert!(session.login(identifier, secret));
            assert_eq!(guard(&session, None), GuardState::Allowed);
            let mut latch = RedirectLatch::default();
            assert!(latch.observe(guard(&session, Some(ADMIN_ONLY))));
        }
        assert!(session.login("admin", "admin"));
        assert_eq!(guard(&session, Some(ADMIN_ONLY)), GuardState::Allowed);
    }

    #[test]
    fn scenario_d_logout_locks_everything() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        session.login("admin", "admin");
        session.logout();

        assert!(!store.contains(SESSION_KEY));
        assert_eq!(guard(&session, None), GuardState::Denied);
        assert_eq!(guard(&session, Some(ADMIN_ONLY)), GuardState::Denied);

        let reloaded = context_over(&store);
        reloaded.resolve();
        assert_eq!(guard(&reloaded, None), GuardState::Denied);
    }
}
