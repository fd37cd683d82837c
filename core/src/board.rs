use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Three cells that win when they all hold the same mark.
pub type Triple = [CellIndex; 3];

/// Rows, then columns, then diagonals. The scan order is fixed so the first
/// complete line is always the same one for a given board.
pub const LINES: [Triple; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub winner: Mark,
    pub line: Triple,
}

impl WinningLine {
    pub fn contains(&self, index: CellIndex) -> bool {
        self.line.contains(&index)
    }
}

/// 3×3 grid of cells, indexed row-major by [`CellIndex`] or by [`Coord2`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cells: Array2<Cell>,
}

#[derive(Deserialize)]
struct BoardRepr {
    cells: Array2<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(BoardRepr { cells }: BoardRepr) -> Result<Self> {
        let side = usize::from(BOARD_SIZE);
        if cells.dim() != (side, side) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT as usize]) -> Self {
        let mut board = Self::new();
        for (index, cell) in (0..CELL_COUNT).zip(cells) {
            board.cells[index.to_nd_index()] = cell;
        }
        board
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < CELL_COUNT {
            Ok(index)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index.to_nd_index()).copied()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn is_full(&self) -> bool {
        self.iter().all(|cell| !cell.is_empty())
    }

    pub fn winner(&self) -> Option<WinningLine> {
        LINES.into_iter().find_map(|line| {
            let [a, b, c] = line;
            let winner = self[a].mark()?;
            let owned = Cell::Marked(winner);
            (self[b] == owned && self[c] == owned).then_some(WinningLine { winner, line })
        })
    }

    pub(crate) fn place(&mut self, index: CellIndex, mark: Mark) {
        self.cells[index.to_nd_index()] = Cell::Marked(mark);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index.to_nd_index()]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use serde_json::json;

    /// Parses rows such as `"XO.|.X.|..O"`, `.` meaning empty.
    fn board(layout: &str) -> Board {
        let mut cells = [Cell::Empty; CELL_COUNT as usize];
        let marks = layout.chars().filter(|&ch| ch != '|');
        for (cell, ch) in cells.iter_mut().zip(marks) {
            *cell = match ch {
                'X' => Cell::Marked(Mark::X),
                'O' => Cell::Marked(Mark::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.iter().count(), 9);
        assert!(board.iter().all(Cell::is_empty));
        assert_eq!(board.winner(), None);
        assert!(!board.is_full());
    }

    #[test]
    fn index_and_coords_address_the_same_cell() {
        let board = board("...|..X|...");

        assert_eq!(board[5], Cell::Marked(Mark::X));
        assert_eq!(board[(1, 2)], Cell::Marked(Mark::X));
        assert_eq!(board.get(5), Some(Cell::Marked(Mark::X)));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn validate_index_rejects_out_of_range() {
        let board = Board::new();

        assert_eq!(board.validate_index(8), Ok(8));
        assert_eq!(board.validate_index(9), Err(GameError::InvalidCell));
    }

    #[test]
    fn winner_found_on_every_line() {
        for line in LINES {
            let mut cells = [Cell::Empty; CELL_COUNT as usize];
            for index in line {
                cells[usize::from(index)] = Cell::Marked(Mark::O);
            }

            let winning = Board::from_cells(cells).winner();

            assert_eq!(
                winning,
                Some(WinningLine {
                    winner: Mark::O,
                    line
                })
            );
        }
    }

    #[test]
    fn winner_reports_first_line_in_scan_order() {
        // Not reachable in legal play, but the result must still be deterministic.
        let board = board("XXX|XOO|XOO");

        assert_eq!(board.winner().map(|w| w.line), Some([0, 1, 2]));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board("XXO|OOX|XOX");

        assert_eq!(board.winner(), None);
        assert!(board.is_full());
    }

    #[test]
    fn winning_line_contains_its_cells_only() {
        let winning = board("..X|.X.|X..").winner().unwrap();

        assert_eq!(winning.line, [2, 4, 6]);
        assert!(winning.contains(4));
        assert!(!winning.contains(0));
    }

    #[test]
    fn deserialize_keeps_a_3x3_board() {
        let board = board("X..|.O.|..X");

        let json = serde_json::to_value(&board).unwrap();
        let back: Board = serde_json::from_value(json).unwrap();

        assert_eq!(back, board);
        assert_eq!(back[8], Cell::Marked(Mark::X));
    }

    #[test]
    fn deserialize_rejects_other_shapes() {
        let tiny = json!({ "cells": { "v": 1, "dim": [1, 1], "data": ["Empty"] } });
        let wide = json!({
            "cells": {
                "v": 1,
                "dim": [1, 9],
                "data": ["Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"]
            }
        });

        let err = serde_json::from_value::<Board>(tiny).unwrap_err();
        assert!(err.to_string().contains("Board shape is not 3x3"));
        assert!(serde_json::from_value::<Board>(wide).is_err());
    }
}
