//! Two-player tic-tac-toe: the game engine, a presenter contract for any front end
//! and a terminal implementation of it.

pub mod game;
pub mod presenter;
pub mod terminal;
