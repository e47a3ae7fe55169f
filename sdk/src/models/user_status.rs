use crate::error::GatehouseError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// `UserStatus` represents the status of the user, derived from its `is_active` flag.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// The user is active.
    #[default]
    Active,
    /// The user is inactive.
    Inactive,
}

impl FromStr for UserStatus {
    type Err = GatehouseError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(GatehouseError::InvalidFormat),
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl From<bool> for UserStatus {
    fn from(is_active: bool) -> Self {
        match is_active {
            true => UserStatus::Active,
            false => UserStatus::Inactive,
        }
    }
}

impl UserStatus {
    pub fn is_active(&self) -> bool {
        *self == UserStatus::Active
    }

    /// Label shown in the status column of the users table.
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Online",
            UserStatus::Inactive => "Inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_parsed_from_string() {
        assert_eq!("active".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!(
            "inactive".parse::<UserStatus>().unwrap(),
            UserStatus::Inactive
        );
        assert!("online".parse::<UserStatus>().is_err());
    }

    #[test]
    fn should_follow_active_flag() {
        assert_eq!(UserStatus::from(true), UserStatus::Active);
        assert_eq!(UserStatus::from(false).label(), "Inactive");
    }
}
