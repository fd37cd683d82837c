use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }

    pub const fn winner(self) -> Option<Mark> {
        match self {
            Self::Won(mark) => Some(mark),
            Self::InProgress | Self::Draw => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Board snapshot plus the move that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MoveRecordRepr")]
pub struct MoveRecord {
    board: Board,
    location: Option<Location>,
}

#[derive(Deserialize)]
struct MoveRecordRepr {
    board: Board,
    location: Option<Location>,
}

impl TryFrom<MoveRecordRepr> for MoveRecord {
    type Error = GameError;

    /// The location, when present, must point at a marked cell.
    fn try_from(MoveRecordRepr { board, location }: MoveRecordRepr) -> Result<Self> {
        match location {
            Some(played) if board[played.to_index()].is_empty() => Err(GameError::InvalidLocation),
            _ => Ok(Self { board, location }),
        }
    }
}

impl MoveRecord {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the last mark went, `None` for the starting record.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn player(&self) -> Option<Mark> {
        self.location
            .and_then(|location| self.board[location.to_index()].mark())
    }

    pub fn is_initial(&self) -> bool {
        self.location.is_none()
    }
}

/// Tic-tac-toe game kept as a list of board snapshots with a cursor.
///
/// Only the snapshots and the cursor are stored. Turn, winner and draw are
/// computed from the current snapshot on every read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameHistoryRepr")]
pub struct GameHistory {
    records: Vec<MoveRecord>,
    step: Step,
}

#[derive(Deserialize)]
struct GameHistoryRepr {
    records: Vec<MoveRecord>,
    step: Step,
}

impl TryFrom<GameHistoryRepr> for GameHistory {
    type Error = GameError;

    /// Exactly one starting record, first, and a cursor inside the records.
    fn try_from(GameHistoryRepr { records, step }: GameHistoryRepr) -> Result<Self> {
        match records.split_first() {
            Some((first, rest)) if *first == MoveRecord::initial() => {
                if rest.iter().any(MoveRecord::is_initial) {
                    return Err(GameError::InvalidHistory);
                }
            }
            _ => return Err(GameError::InvalidHistory),
        }
        if step >= records.len() {
            return Err(GameError::InvalidStep);
        }
        Ok(Self { records, step })
    }
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::initial()],
            step: 0,
        }
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Number of records, including the starting one.
    pub fn step_count(&self) -> usize {
        self.records.len()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_current(&self, step: Step) -> bool {
        self.step == step
    }

    pub fn current(&self) -> &MoveRecord {
        &self.records[self.step]
    }

    pub fn board(&self) -> &Board {
        self.current().board()
    }

    pub fn is_x_next(&self) -> bool {
        self.step % 2 == 0
    }

    pub fn next_mark(&self) -> Mark {
        if self.is_x_next() { Mark::X } else { Mark::O }
    }

    pub fn winner(&self) -> Option<WinningLine> {
        self.board().winner()
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.board().is_full()
    }

    pub fn state(&self) -> GameState {
        match self.winner() {
            Some(WinningLine { winner, .. }) => GameState::Won(winner),
            None if self.board().is_full() => GameState::Draw,
            None => GameState::InProgress,
        }
    }

    pub fn can_play_at(&self, index: CellIndex) -> bool {
        self.winner().is_none() && self.board().get(index).is_some_and(Cell::is_empty)
    }

    /// Puts the next mark on `index`, dropping any records after the cursor.
    ///
    /// Playing after a win or on an occupied cell is ignored and reported as
    /// [`PlayOutcome::NoChange`].
    pub fn play(&mut self, index: CellIndex) -> Result<PlayOutcome> {
        let index = self.board().validate_index(index)?;

        if let Some(WinningLine { winner, .. }) = self.winner() {
            log::trace!("play at {} ignored, {} already won", index, winner);
            return Ok(PlayOutcome::NoChange);
        }

        if !self.board()[index].is_empty() {
            log::trace!("play at {} ignored, cell occupied", index);
            return Ok(PlayOutcome::NoChange);
        }

        let mark = self.next_mark();
        let mut board = self.board().clone();
        board.place(index, mark);

        let dropped = self.records.len() - (self.step + 1);
        if dropped > 0 {
            log::debug!("discarding {} records after step {}", dropped, self.step);
        }
        self.records.truncate(self.step + 1);
        self.records.push(MoveRecord {
            board,
            location: Some(Location::from_index(index)),
        });
        self.step = self.records.len() - 1;

        Ok(match self.state() {
            GameState::InProgress => PlayOutcome::Played,
            GameState::Won(_) => PlayOutcome::Won,
            GameState::Draw => PlayOutcome::Drew,
        })
    }

    /// Moves the cursor without touching the records.
    pub fn jump_to(&mut self, step: Step) -> Result<JumpOutcome> {
        if step >= self.records.len() {
            return Err(GameError::InvalidStep);
        }

        if step == self.step {
            return Ok(JumpOutcome::NoChange);
        }

        self.step = step;
        Ok(JumpOutcome::Jumped)
    }

    /// Back to a single empty board with X to move. Returns whether anything
    /// was discarded.
    pub fn reset(&mut self) -> bool {
        let changed = self.records.len() > 1;
        *self = Self::new();
        changed
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
