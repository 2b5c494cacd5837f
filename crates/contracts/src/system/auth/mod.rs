use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of roles controlling feature visibility.
///
/// Serialized with the display strings used by the stored session record
/// (`"HR Manager"`, `"HR Analyst"`, `"Viewer"`, `"Admin"`). An unknown string
/// fails to deserialize, which the session loader treats as "no session".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "HR Manager")]
    HrManager,
    #[serde(rename = "HR Analyst")]
    HrAnalyst,
    #[serde(rename = "Viewer")]
    Viewer,
    #[serde(rename = "Admin")]
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::HrManager, Role::HrAnalyst, Role::Viewer, Role::Admin];

    /// Wire/display string, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::HrManager => "HR Manager",
            Role::HrAnalyst => "HR Analyst",
            Role::Viewer => "Viewer",
            Role::Admin => "Admin",
        }
    }

    /// Localized name shown in greetings.
    pub fn label(&self) -> &'static str {
        match self {
            Role::HrManager => "Gerente de RRHH",
            Role::HrAnalyst => "Analista de RRHH",
            Role::Viewer => "Visualizador",
            Role::Admin => "Administrador",
        }
    }

    /// Whether report files may be downloaded by this role.
    pub fn can_download_reports(&self) -> bool {
        match self {
            Role::HrManager | Role::HrAnalyst => true,
            Role::Viewer | Role::Admin => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is currently logged in.
///
/// The identifier is stored under `username` to stay readable by sessions
/// written before the field was renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "username")]
    pub identifier: String,
    pub role: Role,
}

impl SessionRecord {
    pub fn new(identifier: impl Into<String>, role: Role) -> Self {
        Self {
            identifier: identifier.into(),
            role,
        }
    }

    /// A record read back from storage must name someone.
    pub fn is_well_formed(&self) -> bool {
        !self.identifier.trim().is_empty()
    }

    /// Handle shown in the sidebar footer: the part before `@`.
    pub fn display_name(&self) -> &str {
        self.identifier
            .split_once('@')
            .map(|(name, _)| name)
            .unwrap_or(&self.identifier)
    }

    /// Any-of membership test against a required role set.
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.contains(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_as_display_string() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let parsed: Result<Role, _> = serde_json::from_str("\"Superuser\"");
        assert!(parsed.is_err());
        let lower: Result<Role, _> = serde_json::from_str("\"admin\"");
        assert!(lower.is_err());
    }

    #[test]
    fn test_record_uses_username_field() {
        let record = SessionRecord::new("viewer@bpdata.com", Role::Viewer);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["username"], "viewer@bpdata.com");
        assert_eq!(value["role"], "Viewer");
    }

    #[test]
    fn test_display_name() {
        let record = SessionRecord::new("hr_manager@bpdata.com", Role::HrManager);
        assert_eq!(record.display_name(), "hr_manager");
        let admin = SessionRecord::new("admin", Role::Admin);
        assert_eq!(admin.display_name(), "admin");
    }

    #[test]
    fn test_has_any_role() {
        let record = SessionRecord::new("hr_analyst@bpdata.com", Role::HrAnalyst);
        assert!(record.has_any_role(&[Role::HrManager, Role::HrAnalyst]));
        assert!(!record.has_any_role(&[Role::Admin]));
        assert!(!record.has_any_role(&[]));
    }

    #[test]
    fn test_download_permission() {
        assert!(Role::HrManager.can_download_reports());
        assert!(Role::HrAnalyst.can_download_reports());
        assert!(!Role::Viewer.can_download_reports());
        assert!(!Role::Admin.can_download_reports());
    }

    #[test]
    fn test_blank_identifier_is_not_well_formed() {
        assert!(!SessionRecord::new("  ", Role::Viewer).is_well_formed());
        assert!(SessionRecord::new("viewer@bpdata.com", Role::Viewer).is_well_formed());
    }
}
