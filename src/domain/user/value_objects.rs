// src/domain/user/value_objects.rs
use crate::domain::content::ids::record_id;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use utoipa::ToSchema;

record_id!(UserId, "user");

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

/// Collections an editor can write to.
const CONTENT_RESOURCES: [&str; 5] = ["blog", "team", "testimonials", "footer_links", "showcase"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Editor,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
        }
    }

    pub fn default_capabilities(self) -> HashSet<Capability> {
        use Capability as Cap;

        let mut caps = HashSet::new();
        for resource in CONTENT_RESOURCES {
            caps.insert(Cap::new(resource, "create"));
            caps.insert(Cap::new(resource, "update"));
            caps.insert(Cap::new(resource, "view:hidden"));
            if self == Self::Admin {
                caps.insert(Cap::new(resource, "delete"));
            }
        }
        caps.insert(Cap::new("blog", "view:drafts"));
        caps.insert(Cap::new("dashboard", "read"));
        if self == Self::Admin {
            caps.insert(Cap::new("blog", "publish"));
        }
        caps
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if trimmed.len() < 3 {
            return Err(DomainError::Validation(
                "username must be at least 3 characters long".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// PHC-formatted argon2 hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(role: Role, resource: &str, action: &str) -> bool {
        role.default_capabilities()
            .iter()
            .any(|c| c.matches(resource, action))
    }

    #[test]
    fn editors_cannot_delete_or_publish() {
        assert!(has(Role::Editor, "blog", "create"));
        assert!(has(Role::Editor, "showcase", "update"));
        assert!(has(Role::Editor, "blog", "view:drafts"));
        assert!(has(Role::Editor, "dashboard", "read"));
        assert!(!has(Role::Editor, "blog", "publish"));
        assert!(!has(Role::Editor, "team", "delete"));
    }

    #[test]
    fn admins_hold_every_capability() {
        for resource in CONTENT_RESOURCES {
            for action in ["create", "update", "delete", "view:hidden"] {
                assert!(has(Role::Admin, resource, action), "{resource}:{action}");
            }
        }
        assert!(has(Role::Admin, "blog", "publish"));
    }

    #[test]
    fn username_is_trimmed() {
        assert_eq!(Username::new("  admin ").unwrap().as_str(), "admin");
        assert!(Username::new("ab").is_err());
    }
}
