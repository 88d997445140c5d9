use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted administrator record. Provisioned out-of-band (see the
/// `provision` binary); the system assumes a single active admin.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub github_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: String,
        github_username: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash,
            github_username,
            created_at: Utc::now(),
        }
    }
}

/// What clients get to see of an administrator. The hash never leaves the
/// store layer; this struct is the enforced boundary.
#[derive(Debug, Clone, Serialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(rename = "githubUsername")]
    pub github_username: Option<String>,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
            email: admin.email.clone(),
            github_username: admin.github_username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_never_serializes_the_hash() {
        let admin = Admin::new("admin", "admin@example.com", "$2b$12$hash".into(), None);

        let profile = serde_json::to_value(AdminProfile::from(&admin)).expect("serialize");
        assert!(profile.get("password_hash").is_none());
        assert!(profile.get("passwordHash").is_none());
        assert_eq!(profile["username"], "admin");

        // The record itself also skips the hash if it ever hits a serializer
        let record = serde_json::to_value(&admin).expect("serialize");
        assert!(record.get("password_hash").is_none());
    }
}
