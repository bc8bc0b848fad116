//! # FlowBoard Core
//!
//! Core state management and domain models for FlowBoard kanban boards.
//!
//! This crate provides the board/column/card tree, the mutation API that
//! keeps it mirrored to a persistence backend, the drag-and-drop move
//! semantics, view-model projections for UI bindings, and CSV export —
//! without any dependency on a specific UI toolkit or rendering layer.

pub mod domain;
pub mod error;
pub mod export;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, CardMove, Column},
    card::{Card, EntityId},
    view::{board_tabs, BoardTab, BoardView, CardView, ColumnView},
};
pub use error::{FlowBoardError, Result};
pub use export::{export_csv, export_file_name, export_to_file, EXPORT_MIME};
pub use storage::{file_storage::FileStorage, memory_storage::MemoryStorage, Storage};
pub use store::BoardStore;
