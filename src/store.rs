//! The state store and mutation API.
//!
//! [`BoardStore`] owns the full board tree plus the current-board
//! selection, and flushes the affected persisted keys after every
//! mutation. Flush failures are logged and swallowed: the in-memory
//! state stays authoritative and the next mutation rewrites the full
//! state, so a transient write failure never aborts the interaction.

use crate::{
    domain::{Board, Card, CardMove, Column, EntityId},
    error::{FlowBoardError, Result},
    storage::Storage,
};

/// In-memory board state with an injected persistence backend.
///
/// Mutations that require user-entered text validate it and return a
/// user-facing error without touching state; mutations that reference an
/// entity by id tolerate stale ids as silent no-ops. Deleting a board or
/// column is irreversible, so callers are expected to confirm with the
/// user before calling the corresponding methods.
pub struct BoardStore<S: Storage> {
    storage: S,
    boards: Vec<Board>,
    current_board_id: Option<EntityId>,
}

impl<S: Storage> BoardStore<S> {
    /// Rehydrates the store from the persistence backend.
    ///
    /// A persisted current-board id that matches no board (or was never
    /// written) falls back to the first board in store order, or to no
    /// selection when there are no boards.
    pub async fn load(storage: S) -> Result<Self> {
        let boards = storage.load_boards().await?.unwrap_or_default();
        let current_board_id = match storage.load_current_board().await? {
            Some(id) if boards.iter().any(|b| b.id == id) => Some(id),
            _ => boards.first().map(|b| b.id.clone()),
        };

        Ok(Self {
            storage,
            boards,
            current_board_id,
        })
    }

    /// All boards in store order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn current_board_id(&self) -> Option<&EntityId> {
        self.current_board_id.as_ref()
    }

    /// The currently selected board, if any.
    pub fn current_board(&self) -> Option<&Board> {
        let id = self.current_board_id.as_ref()?;
        self.boards.iter().find(|b| &b.id == id)
    }

    fn current_board_mut(&mut self) -> Option<&mut Board> {
        let id = self.current_board_id.clone()?;
        self.boards.iter_mut().find(|b| b.id == id)
    }

    /// Creates a board with the three default columns and selects it.
    pub async fn create_board(&mut self, name: &str) -> Result<EntityId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FlowBoardError::EmptyBoardName);
        }

        let board = Board::new(name.to_string());
        let id = board.id.clone();
        self.boards.push(board);
        self.current_board_id = Some(id.clone());

        self.flush_boards().await;
        self.flush_current_board().await;
        Ok(id)
    }

    /// Deletes the currently selected board and everything it owns.
    ///
    /// Selection moves to the first remaining board, or clears when none
    /// are left. No-op when no board is selected.
    pub async fn delete_board(&mut self) {
        let Some(id) = self.current_board_id.take() else {
            return;
        };

        self.boards.retain(|b| b.id != id);
        self.current_board_id = self.boards.first().map(|b| b.id.clone());

        self.flush_boards().await;
        self.flush_current_board().await;
    }

    /// Selects a board by id. No-op when the id matches no board.
    pub async fn select_board(&mut self, id: &EntityId) {
        if self.boards.iter().any(|b| &b.id == id) {
            self.current_board_id = Some(id.clone());
            self.flush_current_board().await;
        }
    }

    /// Appends an empty column to the current board.
    ///
    /// Returns the new column's id, or `None` when no board is selected.
    pub async fn create_column(&mut self, name: &str) -> Result<Option<EntityId>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FlowBoardError::EmptyColumnName);
        }

        let Some(board) = self.current_board_mut() else {
            return Ok(None);
        };

        let column = Column::new(name.to_string());
        let id = column.id.clone();
        board.columns.push(column);

        self.flush_boards().await;
        Ok(Some(id))
    }

    /// Deletes a column and all its cards from the current board.
    /// Silent no-op on a stale column id.
    pub async fn delete_column(&mut self, column_id: &EntityId) {
        let Some(board) = self.current_board_mut() else {
            return;
        };

        if board.remove_column(column_id) {
            self.flush_boards().await;
        }
    }

    /// Appends a card to a column of the current board.
    ///
    /// The description is trimmed and an empty one is dropped. Returns
    /// the new card's id, or `None` when the board or column is missing.
    pub async fn create_card(
        &mut self,
        column_id: &EntityId,
        title: &str,
        description: &str,
    ) -> Result<Option<EntityId>> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FlowBoardError::EmptyCardTitle);
        }

        let description = description.trim();
        let description = (!description.is_empty()).then(|| description.to_string());

        let Some(column) = self
            .current_board_mut()
            .and_then(|b| b.column_mut(column_id))
        else {
            return Ok(None);
        };

        let card = Card::new(title.to_string(), description);
        let id = card.id.clone();
        column.cards.push(card);

        self.flush_boards().await;
        Ok(Some(id))
    }

    /// Deletes a card from whichever column of the current board owns it.
    /// Idempotent: a second call with the same id is a no-op.
    pub async fn delete_card(&mut self, card_id: &EntityId) {
        let Some(board) = self.current_board_mut() else {
            return;
        };

        if board.remove_card(card_id) {
            self.flush_boards().await;
        }
    }

    /// Applies a drop event to the current board and persists the new
    /// order.
    ///
    /// Only the board list is flushed; no re-render is implied, since the
    /// drag interaction has already put the view in its final shape.
    pub async fn move_card(&mut self, mv: &CardMove) {
        let Some(board) = self.current_board_mut() else {
            return;
        };

        if board.move_card(mv) {
            self.flush_boards().await;
        }
    }

    async fn flush_boards(&self) {
        if let Err(err) = self.storage.save_boards(&self.boards).await {
            tracing::warn!(error = %err, "failed to persist board list");
        }
    }

    async fn flush_current_board(&self) {
        if let Err(err) = self
            .storage
            .save_current_board(self.current_board_id.as_ref())
            .await
        {
            tracing::warn!(error = %err, "failed to persist current board id");
        }
    }
}
