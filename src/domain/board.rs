use crate::domain::card::{Card, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workflow stage within a board, holding an ordered list of cards.
///
/// Card order is meaningful: it is the top-to-bottom display order and
/// the priority order within the stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: EntityId,
    pub name: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            cards: Vec::new(),
        }
    }

    /// Position of a card within this column, if present.
    pub fn card_position(&self, card_id: &EntityId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card_id)
    }
}

/// A drop event emitted by a drag-and-drop binding.
///
/// `to_index` is the zero-based position within the destination column at
/// which the card should land, as observed after the drop; when source and
/// destination are the same column it already accounts for the removal of
/// the card from its old position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardMove {
    pub card_id: EntityId,
    pub from_column: EntityId,
    pub to_column: EntityId,
    pub to_index: usize,
}

/// A kanban board: a named, ordered list of columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: EntityId,
    pub name: String,
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Columns every new board starts with, in display order.
    pub const DEFAULT_COLUMNS: [&'static str; 3] = ["To Do", "In Progress", "Done"];

    /// Creates a board seeded with the three default columns, each empty.
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            columns: Self::DEFAULT_COLUMNS
                .iter()
                .map(|n| Column::new(n.to_string()))
                .collect(),
            created_at: Utc::now(),
        }
    }

    pub fn column(&self, column_id: &EntityId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &EntityId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == column_id)
    }

    /// Removes a column and all its cards. Returns false if no column
    /// with this id exists.
    pub fn remove_column(&mut self, column_id: &EntityId) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| &c.id != column_id);
        self.columns.len() < before
    }

    /// Removes a card from whichever column owns it. Returns false if the
    /// id matches nothing; a second call with the same id is a no-op.
    pub fn remove_card(&mut self, card_id: &EntityId) -> bool {
        for column in &mut self.columns {
            if let Some(pos) = column.card_position(card_id) {
                column.cards.remove(pos);
                return true;
            }
        }
        false
    }

    /// Total number of cards across all columns.
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Splices a card out of its source column and into the destination
    /// column at the requested index.
    ///
    /// The card is located by id, never by index, since the drop event may
    /// carry a stale position. The destination index is clamped to the
    /// destination length so a transiently out-of-range drop still lands
    /// at the end. Returns false (state untouched) when the source column,
    /// destination column, or card cannot be found.
    pub fn move_card(&mut self, mv: &CardMove) -> bool {
        if self.column(&mv.from_column).is_none() || self.column(&mv.to_column).is_none() {
            return false;
        }

        let card = {
            // column presence checked above; card lookup can still miss
            let Some(from) = self.column_mut(&mv.from_column) else {
                return false;
            };
            let Some(pos) = from.card_position(&mv.card_id) else {
                return false;
            };
            from.cards.remove(pos)
        };

        let Some(to) = self.column_mut(&mv.to_column) else {
            return false;
        };
        let index = mv.to_index.min(to.cards.len());
        to.cards.insert(index, card);
        true
    }
}
