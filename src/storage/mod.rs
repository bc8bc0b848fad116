use crate::{
    domain::{Board, EntityId},
    error::Result,
};
use async_trait::async_trait;

pub mod file_storage;
pub mod memory_storage;

/// Persistence layer for the two pieces of board state.
///
/// The board list and the current-board id are independent keys: they are
/// written separately and are not atomic with respect to each other. The
/// store re-validates the current-board id against the board list on
/// load, so a torn pair is recoverable.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the full board list. `None` if never written.
    async fn load_boards(&self) -> Result<Option<Vec<Board>>>;

    /// Saves the full board list, replacing any previous value.
    async fn save_boards(&self, boards: &[Board]) -> Result<()>;

    /// Loads the current-board id. `None` if never written or cleared.
    async fn load_current_board(&self) -> Result<Option<EntityId>>;

    /// Saves (or clears, with `None`) the current-board id.
    async fn save_current_board(&self, id: Option<&EntityId>) -> Result<()>;
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    async fn load_boards(&self) -> Result<Option<Vec<Board>>> {
        (**self).load_boards().await
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        (**self).save_boards(boards).await
    }

    async fn load_current_board(&self) -> Result<Option<EntityId>> {
        (**self).load_current_board().await
    }

    async fn save_current_board(&self, id: Option<&EntityId>) -> Result<()> {
        (**self).save_current_board(id).await
    }
}
