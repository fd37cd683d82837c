#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use counter::*;
pub use engine::*;
pub use error::*;
pub use order::*;
pub use types::*;

mod board;
mod cell;
mod counter;
mod engine;
mod error;
mod order;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    NoChange,
    Played,
    Won,
    Drew,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            NoChange => false,
            Played => true,
            Won => true,
            Drew => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    NoChange,
    Jumped,
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Jumped => true,
        }
    }
}
