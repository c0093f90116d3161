//! settle core crate - fundamental types for piece placement search.

mod board;
mod moves;
mod piece;
mod state;

pub use board::{Board, BoardError};
pub use moves::{Move, Placement, Solution};
pub use piece::{ParsePieceError, Piece, Rotation};
pub use state::GameState;
