/// Type definitions for the sidebar widget
///
/// Session, profile, and role types shared across the widget.

use serde::{Deserialize, Serialize};

/// Closed set of account roles known to the platform.
///
/// Unknown role strings coming back from the backend deserialize to
/// `Student`, the least-privileged view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Instructor,
    Admin,
    #[serde(other)]
    Student,
}

impl Role {
    /// Dashboard path segment for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

/// The account embedded in the session token, including the fast but
/// potentially stale role hint from the user metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub role: Option<Role>,
}

/// Snapshot of the authenticated session as persisted by the auth pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub access_token: String,
    /// Unix timestamp in seconds.
    pub expires_at: i64,
    pub user: UserAccount,
}

impl SessionSnapshot {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    pub fn role_hint(&self) -> Option<Role> {
        self.user.user_metadata.role
    }
}

/// Authoritative per-account record from the `profiles` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub role: Role,
    pub full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserializes_lowercase() {
        let role: Role = serde_json::from_str("\"instructor\"").unwrap();
        assert_eq!(role, Role::Instructor);
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_unknown_role_falls_back_to_student() {
        let role: Role = serde_json::from_str("\"superuser\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_role_dashboard_segment() {
        assert_eq!(Role::Student.as_str(), "student");
        assert_eq!(Role::Instructor.as_str(), "instructor");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_session_expiry() {
        let session = SessionSnapshot {
            access_token: "tok".into(),
            expires_at: 1_000,
            user: UserAccount {
                id: "u1".into(),
                email: "a@b.c".into(),
                user_metadata: UserMetadata::default(),
            },
        };
        assert!(!session.is_expired(999));
        assert!(session.is_expired(1_000));
        assert!(session.is_expired(1_001));
    }
}
