//! Search nodes: a placement plus the moves that reached it.

use settle_core::{Board, Move, Placement, Solution};
use settle_engine::{is_resting, piece_fits, try_apply};

/// A reachable state of the falling piece.
///
/// Every node borrows the board the search started from; the board is never
/// mutated while searching. A node without a placement is invalid: the move
/// that produced it pushed the piece into a wall or a filled cell.
#[derive(Clone, Debug)]
pub struct Node<'b> {
    board: &'b Board,
    placement: Option<Placement>,
    locked: bool,
    solution: Solution,
}

impl<'b> Node<'b> {
    /// Root node at `spawn`. Invalid if the spawn cells are blocked.
    pub fn root(board: &'b Board, spawn: Placement) -> Self {
        Self {
            board,
            placement: piece_fits(board, &spawn).then_some(spawn),
            locked: false,
            solution: Solution::new(),
        }
    }

    pub fn board(&self) -> &'b Board {
        self.board
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Identity used for the visited set. Invalid nodes have none.
    pub fn key(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_valid(&self) -> bool {
        self.placement.is_some()
    }

    /// A step-down was attempted and blocked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn into_solution(self) -> Solution {
        self.solution
    }

    /// Whether one more step down would lock this piece.
    pub fn is_resting(&self) -> bool {
        match self.placement {
            Some(p) => is_resting(self.board, &p),
            None => false,
        }
    }

    /// Child reached by applying `mv`.
    ///
    /// A blocked shift or rotate gives an invalid child. A blocked step-down
    /// gives a locked child at the same placement.
    pub fn step(&self, mv: Move) -> Node<'b> {
        let solution = self.solution.then(mv);
        let (placement, locked) = match self.placement {
            None => (None, false),
            Some(current) => match (mv, try_apply(self.board, &current, mv)) {
                (_, Some(next)) => (Some(next), false),
                (Move::StepDown, None) => (Some(current), true),
                (_, None) => (None, false),
            },
        };
        Node {
            board: self.board,
            placement,
            locked,
            solution,
        }
    }
}
