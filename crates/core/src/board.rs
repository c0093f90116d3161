//! board representation - one u16 bitmask per row
//! row 0 is the top of the well, y grows downward

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {width}x{height} out of range (width 4..=16, height 4..=64)")]
    Size { width: usize, height: usize },
    #[error("invalid cell {ch:?} at row {row}, column {col}")]
    Cell { ch: char, row: usize, col: usize },
    #[error("row {row} has {len} cells, expected {width}")]
    Ragged { row: usize, len: usize, width: usize },
    #[error("board has no rows")]
    Empty,
}

/// Fixed-size well. Bit `x` of `rows[y]` is set when cell `(x, y)` is filled.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    rows: Vec<u16>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: Board::WIDTH as u8,
            height: Board::HEIGHT as u8,
            rows: vec![0; Board::HEIGHT],
        }
    }
}

impl Board {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        if !(4..=16).contains(&width) || !(4..=64).contains(&height) {
            return Err(BoardError::Size { width, height });
        }
        Ok(Self {
            width: width as u8,
            height: height as u8,
            rows: vec![0; height],
        })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    #[inline]
    fn full_mask(&self) -> u16 {
        (((1u32) << self.width) - 1) as u16
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        (self.rows[y] >> x) & 1 == 1
    }

    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if filled {
            self.rows[y] |= 1 << x;
        } else {
            self.rows[y] &= !(1 << x);
        }
    }

    pub fn fill_row(&mut self, y: usize) {
        self.rows[y] = self.full_mask();
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows[y] == self.full_mask()
    }

    /// Indices of every completely filled row, top to bottom.
    pub fn filled_row_indices(&self) -> Vec<usize> {
        (0..self.height()).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Number of rows between the floor and the topmost filled cell, inclusive.
    /// Zero for an empty board.
    pub fn tower_height(&self) -> usize {
        self.rows
            .iter()
            .position(|&row| row != 0)
            .map(|top| self.height() - top)
            .unwrap_or(0)
    }

    pub fn filled_cells(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Removes every full row, shifting the rows above it down and inserting
    /// empty rows at the top. Returns how many rows were removed.
    pub fn collapse_rows(&mut self) -> u8 {
        let full = self.full_mask();
        let before = self.rows.len();
        self.rows.retain(|&row| row != full);
        let cleared = before - self.rows.len();
        let mut rows = vec![0; cleared];
        rows.append(&mut self.rows);
        self.rows = rows;
        cleared as u8
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", if self.get(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    /// Parses one row per non-blank line, `#` or `x` for filled, `.` for empty.
    fn from_str(s: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = lines.first().ok_or(BoardError::Empty)?.chars().count();
        let mut board = Board::with_size(width, lines.len())?;
        for (y, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(BoardError::Ragged { row: y, len, width });
            }
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    '#' | 'x' | 'X' => board.set(x, y, true),
                    '.' => {}
                    _ => return Err(BoardError::Cell { ch, row: y, col: x }),
                }
            }
        }
        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<String> = self
            .to_string()
            .lines()
            .map(str::to_string)
            .collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        rows.join("\n").parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut b = Board::new();
        b.set(5, 10, true);
        assert!(b.get(5, 10));
        assert!(!b.get(4, 10));
        b.set(5, 10, false);
        assert!(!b.get(5, 10));
    }

    #[test]
    fn test_size_bounds() {
        assert!(Board::with_size(4, 4).is_ok());
        assert!(Board::with_size(16, 64).is_ok());
        assert_eq!(
            Board::with_size(17, 20),
            Err(BoardError::Size {
                width: 17,
                height: 20
            })
        );
        assert!(Board::with_size(10, 3).is_err());
    }

    #[test]
    fn test_row_full() {
        let mut b = Board::new();
        for x in 0..Board::WIDTH {
            b.set(x, 5, true);
        }
        assert!(b.is_row_full(5));
        assert!(!b.is_row_full(4));
        assert_eq!(b.filled_row_indices(), vec![5]);
    }

    #[test]
    fn test_tower_height() {
        let mut b = Board::new();
        assert_eq!(b.tower_height(), 0);
        b.set(3, 19, true);
        assert_eq!(b.tower_height(), 1);
        b.set(7, 12, true);
        assert_eq!(b.tower_height(), 8);
    }

    #[test]
    fn test_collapse_single_row() {
        let mut b = Board::new();
        b.fill_row(19);
        b.set(5, 18, true);
        assert_eq!(b.collapse_rows(), 1);
        assert!(b.get(5, 19)); // row 18 shifted down into row 19
        assert_eq!(b.filled_cells(), 1);
        assert_eq!(b.height(), Board::HEIGHT);
    }

    #[test]
    fn test_collapse_non_adjacent_rows() {
        let mut b = Board::new();
        b.fill_row(19);
        b.fill_row(17);
        b.set(2, 18, true);
        b.set(3, 16, true);
        assert_eq!(b.collapse_rows(), 2);
        assert!(b.get(2, 19));
        assert!(b.get(3, 18));
        assert_eq!(b.filled_cells(), 2);
    }

    #[test]
    fn test_parse_and_display() {
        let text = "....\n....\n.#..\n##x#\n";
        let b: Board = text.parse().unwrap();
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 4);
        assert!(b.get(1, 2));
        assert!(b.is_row_full(3));
        assert_eq!(b.to_string(), "....\n....\n.#..\n####\n");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Board>(), Err(BoardError::Empty));
        assert_eq!(
            "....\n...\n....\n....".parse::<Board>(),
            Err(BoardError::Ragged {
                row: 1,
                len: 3,
                width: 4
            })
        );
        assert!(matches!(
            "....\n..o.\n....\n....".parse::<Board>(),
            Err(BoardError::Cell { ch: 'o', .. })
        ));
    }

    #[test]
    fn test_serde_rows() {
        let mut b = Board::with_size(4, 4).unwrap();
        b.set(0, 3, true);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r##"["....","....","....","#..."]"##);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
