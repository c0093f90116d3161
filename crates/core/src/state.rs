//! Live game state representation.

use crate::{Board, Placement};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current: Option<Placement>,
    pub lines_cleared: u32,
    pub pieces_placed: u32,
    pub game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }
}
