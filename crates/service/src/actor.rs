use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of the requesting identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superuser,
    #[serde(alias = "user", alias = "client", alias = "manager")]
    RegularUser,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superuser => "superuser",
            Role::RegularUser => "regular_user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "superuser" => Ok(Role::Superuser),
            "regular_user" | "user" | "client" | "manager" => Ok(Role::RegularUser),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Identity performing a request, built from the authentication context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: i64,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: i64, role: Role) -> Self { Self { user_id, role } }
    pub fn superuser(user_id: i64) -> Self { Self::new(user_id, Role::Superuser) }
    pub fn regular(user_id: i64) -> Self { Self::new(user_id, Role::RegularUser) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("superuser".parse::<Role>(), Ok(Role::Superuser));
        assert_eq!(" Client ".parse::<Role>(), Ok(Role::RegularUser));
        assert_eq!("manager".parse::<Role>(), Ok(Role::RegularUser));
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::RegularUser).unwrap();
        assert_eq!(json, "\"regular_user\"");
        let back: Role = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(back, Role::RegularUser);
    }
}
