use crate::{
    domain::{Board, EntityId},
    error::Result,
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation.
///
/// Keeps the two persisted documents as JSON files under a `.flowboard`
/// directory: `boards.json` (the full board tree) and
/// `current_board.json` (the selected board id, or `null`).
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const FLOWBOARD_DIR: &'static str = ".flowboard";
    const BOARDS_FILE: &'static str = "boards.json";
    const CURRENT_BOARD_FILE: &'static str = "current_board.json";

    /// Creates a new FileStorage rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::FLOWBOARD_DIR),
        }
    }

    fn boards_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARDS_FILE)
    }

    fn current_board_file(&self) -> PathBuf {
        self.root_path.join(Self::CURRENT_BOARD_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load_boards(&self) -> Result<Option<Vec<Board>>> {
        let path = self.boards_file();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        let boards: Vec<Board> = serde_json::from_str(&contents)?;
        Ok(Some(boards))
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(boards)?;
        fs::write(self.boards_file(), json).await?;
        Ok(())
    }

    async fn load_current_board(&self) -> Result<Option<EntityId>> {
        let path = self.current_board_file();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        let id: Option<EntityId> = serde_json::from_str(&contents)?;
        Ok(id)
    }

    async fn save_current_board(&self, id: Option<&EntityId>) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string(&id)?;
        fs::write(self.current_board_file(), json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_before_first_write_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(storage.load_boards().await.unwrap().is_none());
        assert!(storage.load_current_board().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_boards_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let boards = vec![Board::new("Alpha".to_string()), Board::new("Beta".to_string())];
        storage.save_boards(&boards).await.unwrap();

        let loaded = storage.load_boards().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, boards[0].id);
        assert_eq!(loaded[0].name, "Alpha");
        assert_eq!(loaded[1].columns.len(), 3);
    }

    #[tokio::test]
    async fn test_save_boards_replaces_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage
            .save_boards(&[Board::new("Old".to_string())])
            .await
            .unwrap();
        storage.save_boards(&[]).await.unwrap();

        let loaded = storage.load_boards().await.unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_current_board_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let id = EntityId::generate();
        storage.save_current_board(Some(&id)).await.unwrap();
        assert_eq!(storage.load_current_board().await.unwrap(), Some(id));

        storage.save_current_board(None).await.unwrap();
        assert_eq!(storage.load_current_board().await.unwrap(), None);
    }
}
