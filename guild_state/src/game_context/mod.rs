//! Game context - the session-wide state every manager reads and mutates.

mod puzzle;

pub use puzzle::*;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::entities::{Player, Recruit};

/// Room state reported for rooms without an override.
pub const DEFAULT_ROOM_STATE: &str = "default";

/// Identifier for rooms of the guildhall and the surrounding map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room-{}", self.0)
    }
}

/// A passage from one room to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    pub direction: String,
    pub target: RoomId,
    pub locked: bool,
}

/// A room in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub exits: Vec<Exit>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            exits: Vec::new(),
        }
    }
}

/// Loosely typed scratch values, used by puzzles to remember their progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        FlagValue::Float(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::String(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::String(value)
    }
}

/// The complete state of one game session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameContext {
    /// The guild master. Managers treat a missing player as "nothing yet".
    pub player: Option<Player>,

    pub rooms: HashMap<RoomId, Room>,

    /// Milestones already reached. Entries are never removed.
    pub completed_milestones: BTreeSet<String>,

    /// Highest recruit count seen during the session.
    pub total_recruits_ever: usize,

    /// Per-room state overrides. Rooms absent here are in `DEFAULT_ROOM_STATE`.
    pub room_states: HashMap<RoomId, String>,

    /// Puzzle ID -> puzzle state.
    pub puzzle_states: HashMap<String, PuzzleState>,
}

impl GameContext {
    /// Create a new empty context with no player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context for the given player.
    pub fn with_player(player: Player) -> Self {
        Self {
            player: Some(player),
            ..Default::default()
        }
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// Add a recruit to the player's guild. Returns false if there is no player.
    pub fn add_recruit(&mut self, recruit: Recruit) -> bool {
        match self.player.as_mut() {
            Some(player) => {
                player.recruits.push(recruit);
                true
            }
            None => false,
        }
    }

    /// Add a room to the world.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id;
        self.rooms.insert(id, room);
        id
    }

    /// Register a puzzle definition, replacing any previous state for the same ID.
    pub fn add_puzzle(&mut self, id: impl Into<String>, state: PuzzleState) {
        self.puzzle_states.insert(id.into(), state);
    }
}
