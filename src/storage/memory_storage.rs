use crate::{
    domain::{Board, EntityId},
    error::Result,
    storage::Storage,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// In-memory storage implementation.
///
/// Holds the persisted documents as JSON strings keyed the way the
/// original browser storage was (`boards`, `currentBoardId`), so values
/// still go through a full serialize/deserialize round trip. Useful as a
/// test backend and for embedding without a filesystem.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<&'static str, String>>,
}

impl MemoryStorage {
    const BOARDS_KEY: &'static str = "boards";
    const CURRENT_BOARD_KEY: &'static str = "currentBoardId";

    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &'static str, value: String) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_boards(&self) -> Result<Option<Vec<Board>>> {
        match self.read(Self::BOARDS_KEY) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        self.write(Self::BOARDS_KEY, serde_json::to_string(boards)?);
        Ok(())
    }

    async fn load_current_board(&self) -> Result<Option<EntityId>> {
        match self.read(Self::CURRENT_BOARD_KEY) {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(None),
        }
    }

    async fn save_current_board(&self, id: Option<&EntityId>) -> Result<()> {
        self.write(Self::CURRENT_BOARD_KEY, serde_json::to_string(&id)?);
        Ok(())
    }
}
