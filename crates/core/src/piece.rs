//! Piece types and cell definitions for the seven tetrominoes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Piece {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Error)]
#[error("unknown piece {0:?}, expected one of I O T S Z J L")]
pub struct ParsePieceError(String);

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::O,
        Piece::T,
        Piece::S,
        Piece::Z,
        Piece::J,
        Piece::L,
    ];

    /// Number of distinct orientations this piece cycles through.
    pub fn rotation_count(self) -> usize {
        match self {
            Piece::O => 1,
            Piece::I | Piece::S | Piece::Z => 2,
            Piece::T | Piece::J | Piece::L => 4,
        }
    }

    /// Orientation reached by one rotation from `rot`. Wraps back to `North`
    /// after the piece's last distinct orientation.
    pub fn next_rotation(self, rot: Rotation) -> Rotation {
        if rot.index() + 1 >= self.rotation_count() {
            Rotation::North
        } else {
            rot.cw()
        }
    }

    /// Cell offsets `(dx, dy)` from the piece origin at rotation `rot`.
    /// `dy` grows downward and every offset is non-negative, so the origin is the
    /// top-left corner of the piece's bounding box.
    pub fn cells(self, rot: Rotation) -> [(i8, i8); 4] {
        let idx = rot.index() % self.rotation_count();
        match self {
            Piece::I => [
                [(0, 0), (1, 0), (2, 0), (3, 0)],
                [(2, 0), (2, 1), (2, 2), (2, 3)],
            ][idx],
            Piece::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
            Piece::T => [
                [(1, 0), (0, 1), (1, 1), (2, 1)],
                [(1, 0), (1, 1), (2, 1), (1, 2)],
                [(0, 1), (1, 1), (2, 1), (1, 2)],
                [(1, 0), (0, 1), (1, 1), (1, 2)],
            ][idx],
            Piece::S => [
                [(1, 0), (2, 0), (0, 1), (1, 1)],
                [(1, 0), (1, 1), (2, 1), (2, 2)],
            ][idx],
            Piece::Z => [
                [(0, 0), (1, 0), (1, 1), (2, 1)],
                [(2, 0), (1, 1), (2, 1), (1, 2)],
            ][idx],
            Piece::J => [
                [(0, 0), (0, 1), (1, 1), (2, 1)],
                [(1, 0), (2, 0), (1, 1), (1, 2)],
                [(0, 1), (1, 1), (2, 1), (2, 2)],
                [(1, 0), (1, 1), (0, 2), (1, 2)],
            ][idx],
            Piece::L => [
                [(2, 0), (0, 1), (1, 1), (2, 1)],
                [(1, 0), (1, 1), (1, 2), (2, 2)],
                [(0, 1), (1, 1), (2, 1), (0, 2)],
                [(0, 0), (1, 0), (1, 1), (1, 2)],
            ][idx],
        }
    }

    /// Width of the square box the piece rotates in.
    pub fn box_width(self) -> i8 {
        match self {
            Piece::I => 4,
            Piece::O => 2,
            _ => 3,
        }
    }

    /// Spawn x position (box centred on a board of `board_width` columns)
    pub fn spawn_x(self, board_width: usize) -> i8 {
        ((board_width as i8) - self.box_width()) / 2
    }

    /// Spawn y position
    pub fn spawn_y(self) -> i8 {
        0
    }

    pub fn as_char(self) -> char {
        match self {
            Piece::I => 'I',
            Piece::O => 'O',
            Piece::T => 'T',
            Piece::S => 'S',
            Piece::Z => 'Z',
            Piece::J => 'J',
            Piece::L => 'L',
        }
    }
}

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, ParsePieceError> {
        let upper = s.trim().to_ascii_uppercase();
        Piece::ALL
            .iter()
            .copied()
            .find(|p| upper.len() == 1 && upper.starts_with(p.as_char()))
            .ok_or_else(|| ParsePieceError(s.to_string()))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_north_cells() {
        let m = Piece::T.cells(Rotation::North);
        assert!(m.contains(&(1, 0))); // nub of T
        assert!(m.contains(&(0, 1)));
        assert!(m.contains(&(1, 1)));
        assert!(m.contains(&(2, 1)));
    }

    #[test]
    fn test_rotation_cw() {
        assert_eq!(Rotation::North.cw(), Rotation::East);
        assert_eq!(Rotation::East.cw(), Rotation::South);
        assert_eq!(Rotation::South.cw(), Rotation::West);
        assert_eq!(Rotation::West.cw(), Rotation::North);
    }

    #[test]
    fn test_next_rotation_wraps_per_piece() {
        assert_eq!(Piece::O.next_rotation(Rotation::North), Rotation::North);
        assert_eq!(Piece::I.next_rotation(Rotation::North), Rotation::East);
        assert_eq!(Piece::I.next_rotation(Rotation::East), Rotation::North);
        assert_eq!(Piece::T.next_rotation(Rotation::South), Rotation::West);
        assert_eq!(Piece::T.next_rotation(Rotation::West), Rotation::North);
    }

    #[test]
    fn test_cells_stay_inside_box() {
        for piece in Piece::ALL {
            let mut rot = Rotation::North;
            for _ in 0..piece.rotation_count() {
                for (dx, dy) in piece.cells(rot) {
                    assert!((0..piece.box_width()).contains(&dx), "{piece} {rot:?}");
                    assert!((0..piece.box_width()).contains(&dy), "{piece} {rot:?}");
                }
                rot = piece.next_rotation(rot);
            }
        }
    }

    #[test]
    fn test_spawn_x_centred() {
        assert_eq!(Piece::I.spawn_x(10), 3);
        assert_eq!(Piece::O.spawn_x(10), 4);
        assert_eq!(Piece::T.spawn_x(10), 3);
    }

    #[test]
    fn test_parse_piece() {
        assert_eq!("t".parse::<Piece>().unwrap(), Piece::T);
        assert_eq!("L".parse::<Piece>().unwrap(), Piece::L);
        assert!("X".parse::<Piece>().is_err());
        assert!("TT".parse::<Piece>().is_err());
    }
}
