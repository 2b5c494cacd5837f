use contracts::system::auth::SessionRecord;

use super::credentials::CredentialStore;
use super::error::AuthError;
use super::storage::SessionPersistence;

/// Checks credentials and owns the persisted session record.
#[derive(Clone)]
pub struct SessionService {
    credentials: CredentialStore,
    persistence: SessionPersistence,
}

impl SessionService {
    pub fn new(credentials: CredentialStore, persistence: SessionPersistence) -> Self {
        Self {
            credentials,
            persistence,
        }
    }

    /// Built-in accounts persisted in `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(CredentialStore::builtin(), SessionPersistence::browser())
    }

    /// Succeeds only for a known identifier with the exact secret. Nothing
    /// is persisted on failure.
    pub fn login(&self, identifier: &str, secret: &str) -> Result<SessionRecord, AuthError> {
        let credential = self
            .credentials
            .lookup(identifier)
            .filter(|c| c.verify(secret))
            .ok_or(AuthError::InvalidCredentials)?;

        let record = SessionRecord::new(identifier, credential.role);
        if let Err(e) = self.persistence.save(&record) {
            // the tab keeps its session, it just won't survive a reload
            log::error!("failed to persist session for {}: {}", identifier, e);
        }
        log::info!("login succeeded for {} ({})", record.identifier, record.role);
        Ok(record)
    }

    pub fn logout(&self) {
        self.persistence.clear();
    }

    pub fn current_session(&self) -> Option<SessionRecord> {
        self.persistence.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::{MemoryStorage, SESSION_KEY};
    use contracts::system::auth::Role;
    use std::sync::Arc;

    fn service() -> (MemoryStorage, SessionService) {
        let store = MemoryStorage::new();
        let service = SessionService::new(
            CredentialStore::builtin(),
            SessionPersistence::new(Arc::new(store.clone())),
        );
        (store, service)
    }

    #[test]
    fn test_login_succeeds_for_every_fixture_account() {
        let accounts = [
            ("hr_manager@bpdata.com", "password123", Role::HrManager),
            ("hr_analyst@bpdata.com", "password123", Role::HrAnalyst),
            ("viewer@bpdata.com", "password123", Role::Viewer),
            ("admin", "admin", Role::Admin),
        ];
        for (identifier, secret, role) in accounts {
            let (_, service) = service();
            let record = service.login(identifier, secret).unwrap();
            assert_eq!(record, SessionRecord::new(identifier, role));
            assert_eq!(service.current_session(), Some(record));
        }
    }

    #[test]
    fn test_failures_are_indistinguishable() {
        let (store, service) = service();
        let wrong_secret = service.login("hr_manager@bpdata.com", "wrongpass");
        let unknown = service.login("nobody@bpdata.com", "password123");
        let wrong_case = service.login("hr_manager@bpdata.com", "Password123");
        assert_eq!(wrong_secret, Err(AuthError::InvalidCredentials));
        assert_eq!(wrong_secret, unknown);
        assert_eq!(wrong_secret, wrong_case);
        assert_eq!(
            wrong_secret.unwrap_err().to_string(),
            unknown.unwrap_err().to_string()
        );
        assert!(!store.contains(SESSION_KEY));
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let (_, service) = service();
        let record = service.login("viewer@bpdata.com", "password123").unwrap();
        assert!(service.login("admin", "wrong").is_err());
        assert_eq!(service.current_session(), Some(record));
    }

    #[test]
    fn test_logout_twice_is_same_as_once() {
        let (store, service) = service();
        service.login("admin", "admin").unwrap();
        service.logout();
        let after_one = (service.current_session(), store.contains(SESSION_KEY));
        service.logout();
        let after_two = (service.current_session(), store.contains(SESSION_KEY));
        assert_eq!(after_one, (None, false));
        assert_eq!(after_one, after_two);
    }

    #[test]
    fn test_logout_without_session() {
        let (_, service) = service();
        service.logout();
        assert_eq!(service.current_session(), None);
    }
}
