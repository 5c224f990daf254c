//! The player record and the recruits who join the guild.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::EntityId;

/// A member recruited into the player's guild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recruit {
    pub id: EntityId,
    pub name: String,
}

impl Recruit {
    /// Create a new recruit with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
        }
    }
}

/// The guild master. One per game session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Player {
    pub name: String,

    /// Faction IDs in the order alliances were formed. Never holds duplicates.
    #[serde(default)]
    pub allied_factions: Vec<String>,

    /// Quest flag name -> set/unset.
    #[serde(default)]
    pub quest_flags: HashMap<String, bool>,

    #[serde(default)]
    pub recruits: Vec<Recruit>,
}

impl Player {
    /// Create a new player with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check whether a quest flag is set.
    pub fn has_quest_flag(&self, flag: &str) -> bool {
        self.quest_flags.get(flag).copied().unwrap_or(false)
    }

    /// Set a quest flag.
    pub fn set_quest_flag(&mut self, flag: impl Into<String>) {
        self.quest_flags.insert(flag.into(), true);
    }

    pub fn recruit_count(&self) -> usize {
        self.recruits.len()
    }
}
