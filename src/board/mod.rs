//! Shared table state and phase ownership.

pub mod table;
pub mod view;

pub use table::Board;
pub use view::{BoardView, TeamArea};
