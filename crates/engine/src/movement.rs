//! Single-step movement and rotation, without wall kicks.

use crate::collision::piece_fits;
use settle_core::{Board, Move, Placement};

/// Try to move piece horizontally by `dx` columns
pub fn try_shift(board: &Board, placement: &Placement, dx: i8) -> Option<Placement> {
    let next = placement.shifted(dx);
    piece_fits(board, &next).then_some(next)
}

/// Try to move piece down one row (soft drop)
pub fn try_step_down(board: &Board, placement: &Placement) -> Option<Placement> {
    let next = placement.stepped();
    piece_fits(board, &next).then_some(next)
}

/// Try to rotate the piece in place. Returns None if the new orientation
/// overlaps anything.
pub fn try_rotate(board: &Board, placement: &Placement) -> Option<Placement> {
    let next = placement.rotated();
    piece_fits(board, &next).then_some(next)
}

/// Dispatch a move token to the matching attempt.
pub fn try_apply(board: &Board, placement: &Placement, mv: Move) -> Option<Placement> {
    match mv {
        Move::ShiftLeft => try_shift(board, placement, -1),
        Move::ShiftRight => try_shift(board, placement, 1),
        Move::StepDown => try_step_down(board, placement),
        Move::Rotate => try_rotate(board, placement),
    }
}
