//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the session so the controller and the renderer can share them.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
