use serde::{Deserialize, Serialize};

/// Sign of the counter, shown as its status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    pub const fn of(value: i64) -> Self {
        match value {
            ..0 => Self::Negative,
            0 => Self::Zero,
            1.. => Self::Positive,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Zero => "Zero",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    pub const fn count(&self) -> i64 {
        self.count
    }

    pub const fn sign(&self) -> Sign {
        Sign::of(self.count)
    }

    pub const fn magnitude(&self) -> u64 {
        self.count.unsigned_abs()
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn apply(&mut self, action: CounterAction) {
        use CounterAction::*;
        match action {
            Increment => self.increment(),
            Decrement => self.decrement(),
            Reset => self.reset(),
        }
    }
}
