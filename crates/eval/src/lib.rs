//! settle eval crate - heuristics for rating a locked placement.
//!
//! Every heuristic is "lower is better". [`SENTINEL`] is the worst score and
//! the score given to an absent placement.

use serde::{Deserialize, Serialize};
use settle_core::{Board, Placement};
use settle_engine::write_piece;
use thiserror::Error;

pub const SENTINEL: i32 = 100;

/// Rates the board after the piece has been written into it.
pub type Scorer = fn(&Board, &Placement) -> i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Tower height of the locked board.
    #[default]
    Height,
    /// Deeper landing row scores better.
    FillWells,
    /// More completed rows score better.
    ClearLines,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown heuristic {0:?}, expected one of height, fill-wells, clear-lines")]
pub struct ParseHeuristicError(pub String);

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Height,
        Heuristic::FillWells,
        Heuristic::ClearLines,
    ];

    /// Resolve to the concrete scoring function.
    pub fn scorer(self) -> Scorer {
        match self {
            Heuristic::Height => height,
            Heuristic::FillWells => fill_wells,
            Heuristic::ClearLines => clear_lines,
        }
    }

    /// Virtually lock `placement` into a copy of `board` and score the result.
    pub fn score(self, board: &Board, placement: &Placement) -> i32 {
        locked_score(self.scorer(), board, placement)
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Height => "height",
            Heuristic::FillWells => "fill-wells",
            Heuristic::ClearLines => "clear-lines",
        }
    }
}

/// Score of `placement` locked into a copy of `board`.
pub fn locked_score(scorer: Scorer, board: &Board, placement: &Placement) -> i32 {
    let locked = write_piece(board, placement);
    scorer(&locked, placement)
}

fn height(locked: &Board, _placement: &Placement) -> i32 {
    locked.tower_height() as i32
}

fn fill_wells(_locked: &Board, placement: &Placement) -> i32 {
    SENTINEL - placement.y as i32
}

fn clear_lines(locked: &Board, _placement: &Placement) -> i32 {
    SENTINEL - locked.filled_row_indices().len() as i32
}

impl std::str::FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, ParseHeuristicError> {
        match s.trim() {
            "height" => Ok(Heuristic::Height),
            "fill-wells" => Ok(Heuristic::FillWells),
            "clear-lines" => Ok(Heuristic::ClearLines),
            other => Err(ParseHeuristicError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
