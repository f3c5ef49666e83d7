use serde::{Deserialize, Serialize};

/// Name of the built-in role every member implicitly holds.
pub const EVERYONE_ROLE_NAME: &str = "@everyone";

/// A role as listed by the API, ascending by hierarchy position.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub mentionable: bool,
    #[serde(default)]
    pub permissions: String,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub position: i64,
}

impl Role {
    /// Managed roles belong to an integration and `@everyone` is built in;
    /// neither is ever deleted or recreated.
    pub fn is_clonable(&self) -> bool {
        !self.managed && self.name != EVERYONE_ROLE_NAME
    }
}

/// Role creation payload.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateRole {
    pub name: String,
    pub color: u32,
    pub hoist: bool,
    pub mentionable: bool,
    pub permissions: String,
}

impl CreateRole {
    pub fn from_source(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            color: role.color,
            hoist: role.hoist,
            mentionable: role.mentionable,
            permissions: role.permissions.clone(),
        }
    }
}
