//! Pure view models
//!
//! Every panel is a function of controller state. The GUI and the CLI only
//! draw these; they never look at API payloads directly.

mod board;
mod profile;

pub use board::{BoardRow, BoardView, HistoryView, NameCase, Podium, board_rows};
pub use profile::{LabelKind, ProfileView};
