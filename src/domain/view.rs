//! View-model projections for UI bindings.
//!
//! Rendering is always a full rebuild from the in-memory tree: each
//! projection here is a pure, total function of the domain state, so a
//! binding never patches an earlier view incrementally.

use crate::domain::board::Board;
use crate::domain::card::EntityId;
use serde::Serialize;

/// One card as displayed inside a column.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: EntityId,
    pub title: String,
    /// Present only when the card has a non-empty description.
    pub description: Option<String>,
}

/// One column with its cards in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub id: EntityId,
    pub name: String,
    pub card_count: usize,
    pub cards: Vec<CardView>,
}

/// The currently displayed board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub name: String,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Projects a board into its view model.
    pub fn project(board: &Board) -> Self {
        Self {
            name: board.name.clone(),
            columns: board
                .columns
                .iter()
                .map(|column| ColumnView {
                    id: column.id.clone(),
                    name: column.name.clone(),
                    card_count: column.cards.len(),
                    cards: column
                        .cards
                        .iter()
                        .map(|card| CardView {
                            id: card.id.clone(),
                            title: card.title.clone(),
                            description: card
                                .description
                                .as_ref()
                                .filter(|d| !d.is_empty())
                                .cloned(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// One entry in the board-switcher strip.
#[derive(Debug, Clone, Serialize)]
pub struct BoardTab {
    pub id: EntityId,
    pub name: String,
    pub active: bool,
}

/// Projects the board list into switcher tabs, in store order.
pub fn board_tabs(boards: &[Board], current: Option<&EntityId>) -> Vec<BoardTab> {
    boards
        .iter()
        .map(|board| BoardTab {
            id: board.id.clone(),
            name: board.name.clone(),
            active: Some(&board.id) == current,
        })
        .collect()
}
