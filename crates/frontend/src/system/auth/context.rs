use contracts::system::auth::{Role, SessionRecord};
use leptos::prelude::*;

use super::service::SessionService;

/// Where the tab stands with respect to its session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Persisted state not read yet. Guards must neither render protected
    /// content nor redirect while here.
    #[default]
    Resolving,
    Authenticated(SessionRecord),
    Anonymous,
}

impl SessionPhase {
    pub fn is_resolving(&self) -> bool {
        matches!(self, SessionPhase::Resolving)
    }

    pub fn record(&self) -> Option<&SessionRecord> {
        match self {
            SessionPhase::Authenticated(record) => Some(record),
            SessionPhase::Resolving | SessionPhase::Anonymous => None,
        }
    }

    pub fn has_permission(&self, required: &[Role]) -> bool {
        self.record()
            .map(|record| record.has_any_role(required))
            .unwrap_or(false)
    }

    fn from_record(record: Option<SessionRecord>) -> Self {
        match record {
            Some(record) => SessionPhase::Authenticated(record),
            None => SessionPhase::Anonymous,
        }
    }
}

/// Reactive holder of the current session.
///
/// Built once in `App` and handed down through Leptos context; components
/// reach it with [`use_session`].
#[derive(Clone, Copy)]
pub struct SessionContext {
    phase: RwSignal<SessionPhase>,
    /// Bumped on every login/logout attempt so guards re-evaluate even when
    /// the phase itself did not change.
    revision: RwSignal<u64>,
    service: StoredValue<SessionService>,
}

impl SessionContext {
    pub fn new(service: SessionService) -> Self {
        Self {
            phase: RwSignal::new(SessionPhase::Resolving),
            revision: RwSignal::new(0),
            service: StoredValue::new(service),
        }
    }

    /// Reads the persisted session and leaves `Resolving`. Only the first
    /// call has an effect; it returns whether this call did the transition.
    pub fn resolve(&self) -> bool {
        if !self.phase.with_untracked(SessionPhase::is_resolving) {
            return false;
        }
        let next = SessionPhase::from_record(self.service.with_value(|s| s.current_session()));
        match &next {
            SessionPhase::Authenticated(record) => {
                log::debug!("restored session for {} ({})", record.identifier, record.role)
            }
            _ => log::debug!("no stored session"),
        }
        self.phase.set(next);
        true
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    #[cfg(test)]
    pub fn phase_untracked(&self) -> SessionPhase {
        self.phase.get_untracked()
    }

    pub fn is_resolving(&self) -> bool {
        self.phase.with(SessionPhase::is_resolving)
    }

    pub fn record(&self) -> Option<SessionRecord> {
        self.phase.with(|phase| phase.record().cloned())
    }

    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub fn login(&self, identifier: &str, secret: &str) -> bool {
        let result = self.service.with_value(|s| s.login(identifier, secret));
        self.revision.update(|r| *r += 1);
        match result {
            Ok(record) => {
                self.phase.set(SessionPhase::Authenticated(record));
                true
            }
            Err(e) => {
                log::info!("login rejected for {}: {}", identifier, e);
                self.sync_from_storage();
                false
            }
        }
    }

    pub fn logout(&self) {
        if let Some(record) = self.phase.with_untracked(|p| p.record().cloned()) {
            log::info!("logging out {}", record.identifier);
        }
        self.service.with_value(|s| s.logout());
        self.revision.update(|r| *r += 1);
        self.phase.set(SessionPhase::Anonymous);
    }

    /// False while resolving or anonymous, else any-of membership.
    pub fn has_permission(&self, required: &[Role]) -> bool {
        self.phase.with(|phase| phase.has_permission(required))
    }

    /// Re-reads persisted state after a mutation that did not itself decide
    /// the session (a rejected login).
    fn sync_from_storage(&self) {
        let stored = SessionPhase::from_record(self.service.with_value(|s| s.current_session()));
        if self.phase.with_untracked(|current| current != &stored) {
            self.phase.set(stored);
        }
    }
}

/// Provides `session` to the tree and resolves it once mounted.
#[component]
pub fn AuthProvider(session: SessionContext, children: Children) -> impl IntoView {
    provide_context(session);

    Effect::new(move |_| {
        session.resolve();
    });

    children()
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::credentials::CredentialStore;
    use crate::system::auth::storage::{MemoryStorage, SessionPersistence, SESSION_KEY};
    use std::sync::Arc;

    fn context_over(store: &MemoryStorage) -> SessionContext {
        SessionContext::new(SessionService::new(
            CredentialStore::builtin(),
            SessionPersistence::new(Arc::new(store.clone())),
        ))
    }

    #[test]
    fn test_starts_resolving_and_resolves_once() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        assert!(session.phase_untracked().is_resolving());
        assert!(!session.has_permission(&Role::ALL));

        assert!(session.resolve());
        assert_eq!(session.phase_untracked(), SessionPhase::Anonymous);
        assert!(!session.resolve());
    }

    #[test]
    fn test_second_resolve_does_not_reread_storage() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();

        // a session written behind the context's back is not picked up
        let other = context_over(&store);
        assert!(other.login("admin", "admin"));
        assert!(!session.resolve());
        assert_eq!(session.phase_untracked(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_resolve_restores_persisted_session() {
        let store = MemoryStorage::new();
        context_over(&store).login("hr_analyst@bpdata.com", "password123");

        let session = context_over(&store);
        session.resolve();
        assert_eq!(
            session.phase_untracked(),
            SessionPhase::Authenticated(SessionRecord::new("hr_analyst@bpdata.com", Role::HrAnalyst))
        );
    }

    #[test]
    fn test_has_permission() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        assert!(!session.has_permission(&[Role::Viewer]));

        session.login("viewer@bpdata.com", "password123");
        assert!(session.has_permission(&[Role::Viewer]));
        assert!(session.has_permission(&[Role::Admin, Role::Viewer]));
        assert!(!session.has_permission(&[Role::Admin]));
        assert!(!session.has_permission(&[]));
    }

    #[test]
    fn test_failed_login_bumps_revision_and_keeps_phase() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        let before = session.revision.get_untracked();

        assert!(!session.login("hr_manager@bpdata.com", "wrongpass"));
        assert_eq!(session.revision.get_untracked(), before + 1);
        assert_eq!(session.phase_untracked(), SessionPhase::Anonymous);
        assert!(!store.contains(SESSION_KEY));
    }

    #[test]
    fn test_failed_login_picks_up_logout_from_elsewhere() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        session.login("admin", "admin");

        // another tab cleared the stored record
        context_over(&store).logout();
        assert!(!session.login("admin", "nope"));
        assert_eq!(session.phase_untracked(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_logout_clears_state_and_storage() {
        let store = MemoryStorage::new();
        let session = context_over(&store);
        session.resolve();
        session.login("admin", "admin");
        session.logout();
        assert_eq!(session.phase_untracked(), SessionPhase::Anonymous);
        assert!(!store.contains(SESSION_KEY));
        session.logout();
        assert_eq!(session.phase_untracked(), SessionPhase::Anonymous);
    }
}
