//! collision detection - walls, floor, other blocks

use settle_core::{Board, Placement};

/// does the placement overlap a wall, the floor or a filled cell?
#[inline]
pub fn collides(board: &Board, placement: &Placement) -> bool {
    let (width, height) = (board.width() as i8, board.height() as i8);
    placement.cells().any(|(x, y)| {
        x < 0 || y < 0 || x >= width || y >= height || board.get(x as usize, y as usize)
    })
}

/// can the piece sit here? (just !collides)
#[inline]
pub fn piece_fits(board: &Board, placement: &Placement) -> bool {
    !collides(board, placement)
}

/// Row the piece would land on if dropped straight down from `placement`.
pub fn hard_drop_y(board: &Board, placement: &Placement) -> i8 {
    let mut landing = *placement;
    while piece_fits(board, &landing.stepped()) {
        landing = landing.stepped();
    }
    landing.y
}

/// true when the piece fits here but one more step down would not.
pub fn is_resting(board: &Board, placement: &Placement) -> bool {
    piece_fits(board, placement) && !piece_fits(board, &placement.stepped())
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::{Piece, Rotation};

    #[test]
    fn test_no_collision_empty_board() {
        let board = Board::new();
        assert!(piece_fits(&board, &Placement::spawn(Piece::T, 10)));
    }

    #[test]
    fn test_collision_with_walls() {
        let board = Board::new();
        assert!(collides(&board, &Placement::new(Piece::T, Rotation::North, -1, 0)));
        // T North spans three columns, so x = 7 is the rightmost fit
        assert!(piece_fits(&board, &Placement::new(Piece::T, Rotation::North, 7, 0)));
        assert!(collides(&board, &Placement::new(Piece::T, Rotation::North, 8, 0)));
    }

    #[test]
    fn test_collision_with_floor() {
        let board = Board::new();
        // T North occupies rows y and y+1
        assert!(piece_fits(&board, &Placement::new(Piece::T, Rotation::North, 3, 18)));
        assert!(collides(&board, &Placement::new(Piece::T, Rotation::North, 3, 19)));
    }

    #[test]
    fn test_collision_with_filled_cell() {
        let mut board = Board::new();
        board.set(4, 1, true);
        // T North at (3, 0) covers (4, 1)
        assert!(collides(&board, &Placement::new(Piece::T, Rotation::North, 3, 0)));
    }

    #[test]
    fn test_hard_drop() {
        let board = Board::new();
        let y = hard_drop_y(&board, &Placement::spawn(Piece::T, 10));
        assert_eq!(y, 18);
    }

    #[test]
    fn test_hard_drop_with_obstacle() {
        let mut board = Board::new();
        board.fill_row(15);
        let y = hard_drop_y(&board, &Placement::spawn(Piece::T, 10));
        assert_eq!(y, 13); // lands with its bottom row on row 14
    }

    #[test]
    fn test_is_resting() {
        let board = Board::new();
        assert!(is_resting(&board, &Placement::new(Piece::O, Rotation::North, 4, 18)));
        assert!(!is_resting(&board, &Placement::new(Piece::O, Rotation::North, 4, 17)));
        assert!(!is_resting(&board, &Placement::new(Piece::O, Rotation::North, 4, 19)));
    }
}
