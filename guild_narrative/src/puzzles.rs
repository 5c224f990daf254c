//! Puzzle tracking - solved flags, attempt counts and solve effects.
//!
//! Puzzles move one way, from unsolved to solved. Attempt counting is a
//! two-step protocol: callers check [`PuzzleManager::can_attempt_puzzle`]
//! before [`PuzzleManager::increment_attempts`], which does not enforce the
//! cap itself. [`PuzzleManager::try_attempt`] does both.

use guild_state::{FlagValue, GameContext, PuzzleState, ResolveEffects, RoomId};
use tracing::{debug, info, warn};

use crate::notify::TextSink;

/// Result of asking for a puzzle's exits to be unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitUnlock {
    /// The puzzle has no exits to unlock.
    NothingToUnlock,
    /// Exit unlocking is not supported yet; these exits were left as they were.
    Unsupported(Vec<String>),
}

/// What a call to [`PuzzleManager::solve_puzzle`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// No puzzle with that ID exists. Nothing was created.
    Unknown,
    /// The puzzle went from unsolved to solved and its effects were applied.
    Solved(ExitUnlock),
    /// The puzzle was already solved; its effects were applied again.
    SolvedAgain(ExitUnlock),
    /// The puzzle was already solved; nothing happened.
    AlreadySolved,
}

/// Tracks puzzle progress stored in the game context.
pub struct PuzzleManager<'a> {
    ctx: &'a mut GameContext,
    output: Option<&'a mut dyn TextSink>,
    resolve_effects: ResolveEffects,
}

impl<'a> PuzzleManager<'a> {
    pub fn new(ctx: &'a mut GameContext) -> Self {
        Self {
            ctx,
            output: None,
            resolve_effects: ResolveEffects::default(),
        }
    }

    /// Send solve messages to `output`. Without one, messages are dropped.
    pub fn with_output(mut self, output: &'a mut dyn TextSink) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_resolve_effects(mut self, resolve_effects: ResolveEffects) -> Self {
        self.resolve_effects = resolve_effects;
        self
    }

    /// State of a puzzle, or `None` if it has not been defined.
    pub fn get_puzzle_state(&self, puzzle_id: &str) -> Option<&PuzzleState> {
        self.ctx.puzzle_states.get(puzzle_id)
    }

    pub fn is_puzzle_solved(&self, puzzle_id: &str) -> bool {
        self.get_puzzle_state(puzzle_id)
            .map(|state| state.is_solved)
            .unwrap_or(false)
    }

    /// Mark a puzzle solved and apply its effects: show its message, set its
    /// quest flag, and request its exits be unlocked.
    pub fn solve_puzzle(&mut self, puzzle_id: &str) -> SolveOutcome {
        let Some(state) = self.ctx.puzzle_states.get_mut(puzzle_id) else {
            debug!("Solve requested for unknown puzzle {}", puzzle_id);
            return SolveOutcome::Unknown;
        };

        let first_solve = !state.is_solved;
        if !first_solve && self.resolve_effects == ResolveEffects::FirstSolveOnly {
            return SolveOutcome::AlreadySolved;
        }
        state.is_solved = true;

        let message = state.on_solve_message.clone();
        let quest_flag = state.on_solve_quest_flag.clone();
        let room_id = state.room_id;
        let exits = state.unlock_exits.clone();

        if !message.is_empty() {
            match self.output.as_mut() {
                Some(output) => output.write_line(&message),
                None => debug!("No output for puzzle {} message", puzzle_id),
            }
        }

        if let Some(flag) = quest_flag {
            if let Some(player) = self.ctx.player_mut() {
                player.set_quest_flag(flag);
            }
        }

        let unlock = unlock_exits(puzzle_id, room_id, exits);

        if first_solve {
            info!("Puzzle {} solved", puzzle_id);
            SolveOutcome::Solved(unlock)
        } else {
            debug!("Puzzle {} solved again", puzzle_id);
            SolveOutcome::SolvedAgain(unlock)
        }
    }

    /// Whether the player may make another attempt at a puzzle.
    ///
    /// False for unknown or solved puzzles, and once a non-zero attempt cap is reached.
    pub fn can_attempt_puzzle(&self, puzzle_id: &str) -> bool {
        self.get_puzzle_state(puzzle_id)
            .map(|state| !state.is_solved && !state.attempts_exhausted())
            .unwrap_or(false)
    }

    /// Count one attempt. Does not check the attempt cap; see [`Self::can_attempt_puzzle`].
    pub fn increment_attempts(&mut self, puzzle_id: &str) {
        if let Some(state) = self.ctx.puzzle_states.get_mut(puzzle_id) {
            state.attempts = state.attempts.saturating_add(1);
            debug!(
                "Puzzle {} attempt {}/{}",
                puzzle_id, state.attempts, state.max_attempts
            );
        }
    }

    /// Check the gate and count the attempt in one step. Returns false if the
    /// attempt was not allowed.
    pub fn try_attempt(&mut self, puzzle_id: &str) -> bool {
        if !self.can_attempt_puzzle(puzzle_id) {
            return false;
        }
        self.increment_attempts(puzzle_id);
        true
    }

    /// Store a scratch value on a puzzle. Ignored for unknown puzzles.
    pub fn set_puzzle_state_value(
        &mut self,
        puzzle_id: &str,
        key: impl Into<String>,
        value: impl Into<FlagValue>,
    ) {
        if let Some(state) = self.ctx.puzzle_states.get_mut(puzzle_id) {
            state.current_state.insert(key.into(), value.into());
        }
    }

    pub fn get_puzzle_state_value(&self, puzzle_id: &str, key: &str) -> Option<&FlagValue> {
        self.get_puzzle_state(puzzle_id)
            .and_then(|state| state.current_state.get(key))
    }
}

// TODO: open the exits once rooms track locked exits by direction; until then
// callers receive the exits back untouched.
fn unlock_exits(puzzle_id: &str, room_id: Option<RoomId>, exits: Vec<String>) -> ExitUnlock {
    if exits.is_empty() {
        return ExitUnlock::NothingToUnlock;
    }
    match room_id {
        Some(room) => warn!(
            "Puzzle {} wants exits {:?} in {} unlocked, which is not supported",
            puzzle_id, exits, room
        ),
        None => warn!(
            "Puzzle {} wants exits {:?} unlocked, which is not supported",
            puzzle_id, exits
        ),
    }
    ExitUnlock::Unsupported(exits)
}
