use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a board, column, or card.
///
/// Generated once at entity creation and immutable afterwards. Generation
/// is global, so ids are unique across entity kinds, not just within
/// their owning sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A task on a kanban board, owned by exactly one column at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card with the given title and optional description.
    pub fn new(title: String, description: Option<String>) -> Self {
        Self {
            id: EntityId::generate(),
            title,
            description,
            created_at: Utc::now(),
        }
    }
}
