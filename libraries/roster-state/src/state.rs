//! In-memory list state
//!
//! The ordered sequence of confirmed entities plus the transient status
//! message shown after a create or delete.

use roster_client::Operation;
use roster_core::{Entity, EntityId};
use std::collections::HashSet;
use std::fmt;

/// Transient confirmation shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// A user was created
    Created,
    /// A user was deleted
    Deleted,
    /// A remote call failed (only when failure surfacing is enabled)
    Failed(Operation),
}

impl StatusMessage {
    /// Text displayed by the rendering layer
    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::Created => "User created successfully",
            StatusMessage::Deleted => "User deleted",
            StatusMessage::Failed(Operation::List) => "Could not load users",
            StatusMessage::Failed(Operation::Create) => "Could not create user",
            StatusMessage::Failed(Operation::Delete) => "Could not delete user",
        }
    }

    /// Whether this reports a failed remote call
    pub fn is_failure(&self) -> bool {
        matches!(self, StatusMessage::Failed(_))
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Confirmed entities in display order plus an optional status message.
///
/// Every entity in the sequence has a unique id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    entities: Vec<Entity>,
    status: Option<StatusMessage>,
}

impl ListState {
    /// Empty state, as at controller startup
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities in display order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Current status message, if any
    pub fn status(&self) -> Option<StatusMessage> {
        self.status
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity by id
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// Whether an entity with this id is listed
    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole sequence.
    ///
    /// Keeps the first occurrence of each id and returns how many repeated
    /// entries were dropped.
    pub(crate) fn replace_all(&mut self, entities: Vec<Entity>) -> usize {
        let total = entities.len();
        let mut seen = HashSet::with_capacity(total);
        self.entities = entities
            .into_iter()
            .filter(|e| seen.insert(e.id.clone()))
            .collect();
        total - self.entities.len()
    }

    /// Append a confirmed entity, or replace the entry that already has its id.
    ///
    /// Returns `true` if the entity was appended.
    pub(crate) fn upsert(&mut self, entity: Entity) -> bool {
        match self.entities.iter_mut().find(|e| e.id == entity.id) {
            Some(existing) => {
                *existing = entity;
                false
            }
            None => {
                self.entities.push(entity);
                true
            }
        }
    }

    /// Remove the entity with `id`, if present
    pub(crate) fn remove(&mut self, id: &EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| &e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Clear the status; returns whether anything changed
    pub(crate) fn clear_status(&mut self) -> bool {
        self.status.take().is_some()
    }
}
