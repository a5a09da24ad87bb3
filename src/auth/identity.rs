use serde::{Deserialize, Serialize};

/// Role value that unlocks the document upload affordance.
pub const ADMIN_ROLE: &str = "admin";

/// Identity established by the login flow.
///
/// Both fields are opaque strings supplied by the backend; the client
/// reads them but never rewrites them. The only value with meaning on
/// this side is the `admin` role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub username: String,
    pub role: String,
}

impl SessionIdentity {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }

    /// Whether this identity may see and use the upload affordance.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_is_admin() {
        let identity = SessionIdentity::new("alice", "admin");
        assert!(identity.is_admin());
    }

    #[test]
    fn test_other_roles_are_not_admin() {
        assert!(!SessionIdentity::new("bob", "user").is_admin());
        assert!(!SessionIdentity::new("bob", "Admin").is_admin());
        assert!(!SessionIdentity::new("bob", "").is_admin());
    }
}
