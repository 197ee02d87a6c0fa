//! Domain types for Roster

mod entity;
mod ids;

pub use entity::{Draft, Entity};
pub use ids::EntityId;
