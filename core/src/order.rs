use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Order in which the move list is shown. Never affects the history itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryOrder {
    Ascending,
    Descending,
}

impl HistoryOrder {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Reorders items built in history order.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if let Self::Descending = self {
            items.reverse();
        }
        items
    }
}

impl Default for HistoryOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn toggle_flips_and_restores() {
        let mut order = HistoryOrder::default();

        order.toggle();
        assert_eq!(order, HistoryOrder::Descending);
        order.toggle();
        assert_eq!(order, HistoryOrder::Ascending);
    }

    #[test]
    fn arrange_reverses_only_when_descending() {
        assert_eq!(HistoryOrder::Ascending.arrange(vec![0, 1, 2]), vec![0, 1, 2]);
        assert_eq!(HistoryOrder::Descending.arrange(vec![0, 1, 2]), vec![2, 1, 0]);
    }
}
