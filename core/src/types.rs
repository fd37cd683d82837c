use serde::{Deserialize, Serialize};

use crate::GameError;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Index of a cell on the board, row-major in `0..CELL_COUNT`.
pub type CellIndex = u8;

/// Zero-based grid coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Position of a history record, `0` being the empty board.
pub type Step = usize;

/// Cells on one side of the board.
pub const BOARD_SIZE: Coord = 3;

/// Total cells on the board.
pub const CELL_COUNT: CellIndex = BOARD_SIZE * BOARD_SIZE;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

impl ToNdIndex for CellIndex {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        index_to_coords(self).to_nd_index()
    }
}

pub const fn index_to_coords(index: CellIndex) -> Coord2 {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

pub const fn coords_to_index((row, col): Coord2) -> CellIndex {
    row * BOARD_SIZE + col
}

/// One-based `(row, col)` of a played cell, as recorded in the history.
///
/// Both axes are in `1..=BOARD_SIZE`; deserializing anything else fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocationRepr")]
pub struct Location {
    pub row: Coord,
    pub col: Coord,
}

#[derive(Deserialize)]
struct LocationRepr {
    row: Coord,
    col: Coord,
}

impl TryFrom<LocationRepr> for Location {
    type Error = GameError;

    fn try_from(LocationRepr { row, col }: LocationRepr) -> Result<Self, Self::Error> {
        let axis = 1..=BOARD_SIZE;
        if axis.contains(&row) && axis.contains(&col) {
            Ok(Self { row, col })
        } else {
            Err(GameError::InvalidLocation)
        }
    }
}

impl Location {
    pub const fn from_index(index: CellIndex) -> Self {
        let (row, col) = index_to_coords(index);
        Self {
            row: row + 1,
            col: col + 1,
        }
    }

    pub const fn to_index(self) -> CellIndex {
        coords_to_index(self.to_coords())
    }

    /// Zero-based coordinates, the form shown in the move list.
    pub const fn to_coords(self) -> Coord2 {
        (self.row - 1, self.col - 1)
    }
}
