use contracts::system::auth::Role;
use std::collections::HashMap;

/// One fixture account. The secret is plaintext: this store is a stand-in
/// for a real identity backend.
#[derive(Debug, Clone)]
pub struct Credential {
    secret: String,
    pub role: Role,
}

impl Credential {
    /// Exact, case-sensitive comparison.
    pub fn verify(&self, secret: &str) -> bool {
        self.secret == secret
    }
}

/// Static identifier → credential table. No enumeration is exposed.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: HashMap<String, Credential>,
}

impl CredentialStore {
    /// Accounts available in the demo build.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("hr_manager@bpdata.com", "password123", Role::HrManager),
            ("hr_analyst@bpdata.com", "password123", Role::HrAnalyst),
            ("viewer@bpdata.com", "password123", Role::Viewer),
            ("admin", "admin", Role::Admin),
        ])
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, Role)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(identifier, secret, role)| {
                (
                    identifier.to_string(),
                    Credential {
                        secret: secret.to_string(),
                        role,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, identifier: &str) -> Option<&Credential> {
        self.entries.get(identifier)
    }
}
