//! Move tokens, piece placements and move sequences.

use crate::{Piece, Rotation};
use serde::{Deserialize, Serialize};

/// One discrete input applied to the falling piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Move {
    ShiftLeft,
    ShiftRight,
    StepDown,
    Rotate,
}

impl Move {
    /// Expansion order used by move generation.
    pub const ALL: [Move; 4] = [Move::ShiftLeft, Move::ShiftRight, Move::StepDown, Move::Rotate];

    pub fn as_char(self) -> char {
        match self {
            Move::ShiftLeft => '<',
            Move::ShiftRight => '>',
            Move::StepDown => 'v',
            Move::Rotate => '@',
        }
    }
}

/// A piece in a specific orientation at a specific board offset.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub piece: Piece,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Placement {
    pub fn new(piece: Piece, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            piece,
            rotation,
            x,
            y,
        }
    }

    /// Spawn placement for `piece` on a board `board_width` columns wide.
    pub fn spawn(piece: Piece, board_width: usize) -> Self {
        Self::new(
            piece,
            Rotation::North,
            piece.spawn_x(board_width),
            piece.spawn_y(),
        )
    }

    pub fn shifted(self, dx: i8) -> Self {
        Self {
            x: self.x + dx,
            ..self
        }
    }

    pub fn stepped(self) -> Self {
        Self {
            y: self.y + 1,
            ..self
        }
    }

    pub fn rotated(self) -> Self {
        Self {
            rotation: self.piece.next_rotation(self.rotation),
            ..self
        }
    }

    /// Candidate placement after `mv`, before any fit check.
    pub fn moved(self, mv: Move) -> Self {
        match mv {
            Move::ShiftLeft => self.shifted(-1),
            Move::ShiftRight => self.shifted(1),
            Move::StepDown => self.stepped(),
            Move::Rotate => self.rotated(),
        }
    }

    /// Absolute board coordinates of the four cells.
    pub fn cells(self) -> impl Iterator<Item = (i8, i8)> {
        self.piece
            .cells(self.rotation)
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Moves taken from the root to some node, oldest first.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    moves: Vec<Move>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this solution with `mv` appended.
    pub fn then(&self, mv: Move) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(mv);
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replay stack: the moves reversed, so that popping from the end yields
    /// them in the order they were taken.
    pub fn into_replay_stack(self) -> Vec<Move> {
        let mut stack = self.moves;
        stack.reverse();
        stack
    }
}

impl From<Vec<Move>> for Solution {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mv in &self.moves {
            write!(f, "{}", mv.as_char())?;
        }
        Ok(())
    }
}
