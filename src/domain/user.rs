use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of roles. Capability checks go through [`Role::can_administer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }

    /// Product and order-status mutations.
    pub fn can_administer(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Display name given to a freshly logged-in user of this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Customer => "Rahim Ahmed",
            Self::Admin => "Admin User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

pub const PLACEHOLDER_PHONE: &str = "01700000000";
pub const PLACEHOLDER_ADDRESS: &str = "Dhaka, Bangladesh";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    /// Synthesizes the session user. There is no credential check here.
    pub fn synthesize(id: String, identifier: &str, role: Role) -> Self {
        Self {
            id,
            name: role.display_name().to_string(),
            email: identifier.to_string(),
            phone: PLACEHOLDER_PHONE.to_string(),
            role,
            address: Some(PLACEHOLDER_ADDRESS.to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.can_administer()
    }
}
