/// User record and creation draft
use super::EntityId;
use serde::{Deserialize, Serialize};

/// A confirmed user record as stored by the remote collection.
///
/// Entities are immutable once created; identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, minted by the client at creation time
    pub id: EntityId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Login handle
    pub username: String,
}

/// User-entered fields for an entity that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Display name as typed
    pub name: String,
    /// Email as typed
    pub email: String,
    /// Login handle as typed
    pub username: String,
}

impl Draft {
    /// Create a draft from the three form fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: username.into(),
        }
    }

    /// Attach an identifier, producing the payload sent to the remote side
    pub fn with_id(&self, id: EntityId) -> Entity {
        Entity {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}
