//! Mutations of the live game state, one input at a time.

use crate::apply::lock_piece;
use crate::collision::piece_fits;
use crate::movement::try_apply;
use settle_core::{GameState, Move, Piece, Placement};

/// Put `piece` at its spawn placement. Returns `false` when the spawn cells
/// are already occupied; the piece is still made current so the caller can
/// lock it where it stands.
pub fn spawn(state: &mut GameState, piece: Piece) -> bool {
    let placement = Placement::spawn(piece, state.board.width());
    state.current = Some(placement);
    piece_fits(&state.board, &placement)
}

/// Apply one move to the current piece. Returns `false` if there is no
/// current piece or the move does not fit.
pub fn apply_move(state: &mut GameState, mv: Move) -> bool {
    let Some(current) = state.current else {
        return false;
    };
    match try_apply(&state.board, &current, mv) {
        Some(next) => {
            state.current = Some(next);
            true
        }
        None => false,
    }
}

/// One gravity step. Returns `false` once the piece rests on something.
pub fn gravity_step(state: &mut GameState) -> bool {
    apply_move(state, Move::StepDown)
}

/// Lock the current piece where it is and collapse completed rows.
/// Returns the locked placement and the number of rows cleared.
pub fn lock(state: &mut GameState) -> Option<(Placement, u8)> {
    let placement = state.current.take()?;
    let cleared = lock_piece(&mut state.board, &placement);
    state.lines_cleared += cleared as u32;
    state.pieces_placed += 1;
    Some((placement, cleared))
}
