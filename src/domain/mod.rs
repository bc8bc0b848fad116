pub mod board;
pub mod card;
pub mod view;

pub use board::{Board, CardMove, Column};
pub use card::{Card, EntityId};
pub use view::{board_tabs, BoardTab, BoardView, CardView, ColumnView};
