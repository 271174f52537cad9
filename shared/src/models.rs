//! Data models for the marketplace

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role chosen at registration
///
/// There is deliberately no owner/admin role: business ownership is
/// expressed by the `Business::owner_id` reference, not by a role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Freelancer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Freelancer => "freelancer",
        }
    }

    /// Parse a role from its wire representation
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "client" => Some(Role::Client),
            "freelancer" => Some(Role::Freelancer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Business profile, at most one per owning user
///
/// `owner_id` carries the uniqueness constraint that makes the
/// one-business-per-user invariant authoritative at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub contact: String,
    pub address: String,
    /// Relative path under the public upload directory, empty when no
    /// image was supplied.
    pub image_path: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_form() {
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse("freelancer"), Some(Role::Freelancer));
        assert_eq!(Role::Client.as_str(), "client");
        assert_eq!(Role::Freelancer.as_str(), "freelancer");
    }

    #[test]
    fn role_rejects_unknown_values() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Client"), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
        assert_eq!(
            serde_json::to_string(&Role::Freelancer).unwrap(),
            "\"freelancer\""
        );
    }

    #[test]
    fn user_never_serializes_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            role: Role::Client,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$10$"));
    }
}
