//! Per-puzzle progress records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{FlagValue, RoomId};

/// Solved/attempt state and solve effects for a single puzzle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PuzzleState {
    /// One-way: once true, never reset.
    pub is_solved: bool,

    pub attempts: u32,

    /// Attempt cap. 0 means unlimited.
    pub max_attempts: u32,

    /// Scratch values the puzzle logic keeps between turns.
    #[serde(default)]
    pub current_state: HashMap<String, FlagValue>,

    /// Shown to the player when the puzzle is solved. Empty = nothing shown.
    #[serde(default)]
    pub on_solve_message: String,

    /// Quest flag set on the player when the puzzle is solved.
    pub on_solve_quest_flag: Option<String>,

    pub room_id: Option<RoomId>,

    /// Exit directions the puzzle opens once solved.
    #[serde(default)]
    pub unlock_exits: Vec<String>,
}

impl PuzzleState {
    /// Create a fresh, unsolved puzzle with unlimited attempts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.on_solve_message = message.into();
        self
    }

    pub fn with_quest_flag(mut self, flag: impl Into<String>) -> Self {
        self.on_solve_quest_flag = Some(flag.into());
        self
    }

    pub fn in_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Add an exit direction to unlock on solve.
    pub fn with_unlock_exit(mut self, direction: impl Into<String>) -> Self {
        self.unlock_exits.push(direction.into());
        self
    }

    /// Check whether the attempt cap has been reached.
    pub fn attempts_exhausted(&self) -> bool {
        self.max_attempts > 0 && self.attempts >= self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_builder() {
        let puzzle = PuzzleState::new()
            .with_max_attempts(3)
            .with_message("The altar glows.")
            .with_quest_flag("altar_lit")
            .in_room(RoomId(7))
            .with_unlock_exit("north");

        assert!(!puzzle.is_solved);
        assert_eq!(puzzle.max_attempts, 3);
        assert_eq!(puzzle.on_solve_quest_flag.as_deref(), Some("altar_lit"));
        assert_eq!(puzzle.room_id, Some(RoomId(7)));
        assert_eq!(puzzle.unlock_exits, vec!["north".to_string()]);
    }

    #[test]
    fn test_attempts_exhausted() {
        let mut capped = PuzzleState::new().with_max_attempts(2);
        assert!(!capped.attempts_exhausted());
        capped.attempts = 2;
        assert!(capped.attempts_exhausted());

        let mut unlimited = PuzzleState::new();
        unlimited.attempts = 1_000;
        assert!(!unlimited.attempts_exhausted());
    }
}
