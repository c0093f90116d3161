//! Writing pieces into boards, with and without row collapse.

use settle_core::{Board, Placement};

/// Write the piece's cells into `board` in place. Cells outside the board are
/// ignored.
pub fn write_piece_mut(board: &mut Board, placement: &Placement) {
    let (width, height) = (board.width() as i8, board.height() as i8);
    for (x, y) in placement.cells() {
        // blocked spawns can be locked in place
        if x >= 0 && y >= 0 && x < width && y < height {
            board.set(x as usize, y as usize, true);
        }
    }
}

/// Copy-on-write: a new board with the piece written in, `board` untouched.
pub fn write_piece(board: &Board, placement: &Placement) -> Board {
    let mut next = board.clone();
    write_piece_mut(&mut next, placement);
    next
}

/// Lock the piece into `board` and collapse any rows it completes.
/// Returns the number of rows removed.
pub fn lock_piece(board: &mut Board, placement: &Placement) -> u8 {
    write_piece_mut(board, placement);
    board.collapse_rows()
}
