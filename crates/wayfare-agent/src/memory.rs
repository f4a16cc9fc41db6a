//! Bounded conversation memory window.
//!
//! The window keeps the trailing N exchanges (a user turn plus the ai turn
//! that answers it) of the caller-supplied history. It is rebuilt from
//! scratch on every request; eviction is oldest-first.

use std::collections::VecDeque;

use crate::types::Turn;

/// Default number of exchanges kept in context.
pub const DEFAULT_WINDOW_EXCHANGES: usize = 9;

/// Trailing window over role-tagged turns, capacity counted in exchanges.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    turns: VecDeque<Turn>,
    max_turns: usize,
}

impl MemoryWindow {
    pub fn new(exchanges: usize) -> Self {
        Self {
            turns: VecDeque::new(),
            // One exchange is a user turn plus an ai turn.
            max_turns: exchanges.saturating_mul(2).max(2),
        }
    }

    /// Rebuild the window from a full history, keeping only the tail.
    pub fn from_history(history: &[Turn], exchanges: usize) -> Self {
        let mut window = Self::new(exchanges);
        for turn in history {
            window.push(turn.clone());
        }
        window
    }

    /// Append a turn, evicting the oldest when over capacity.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.max_turns {
            self.turns.pop_front();
        }
    }

    /// Turns currently in context, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
