//! Game rules for the grid game.
//!
//! Pure functions over a [`Board`](crate::Board). Status is never cached;
//! callers evaluate the board whenever they need it.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::evaluate;
pub use win::{LINES, Line, check_winner, winning_line};
