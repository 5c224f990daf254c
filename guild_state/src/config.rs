//! Tuning tables for crises, milestones and puzzles, loadable from TOML.
//!
//! Every table has a `Default` that matches the shipped game balance, so a
//! config file only needs to name the values it overrides:
//!
//! ```toml
//! [crisis]
//! max_spawn_chance = 0.6
//!
//! [[milestones.rules]]
//! id = "guild_expansion_1"
//! trigger = { recruits_at_least = 3 }
//!
//! [puzzles]
//! resolve_effects = "first_solve_only"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{GuildError, Result};

/// Constants behind crisis difficulty and spawn pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrisisTuning {
    /// Difficulty of a crisis spawned on turn 0, before jitter.
    pub base_difficulty: i32,
    pub difficulty_per_turn: i32,
    /// Difficulty is shifted by a uniform draw in `-jitter..=jitter`.
    pub difficulty_jitter: i32,

    pub min_turns_remaining: u32,
    pub max_turns_remaining: u32,

    pub base_seal_damage: u32,
    pub min_damage_bonus: u32,
    pub max_damage_bonus: u32,

    /// Active crises allowed on turn 0.
    pub base_active_cap: usize,
    /// The active cap grows by one every this many turns. 0 behaves as 1.
    pub cap_growth_period: u32,

    pub base_spawn_chance: f64,
    pub spawn_chance_per_turn: f64,
    pub max_spawn_chance: f64,
}

impl Default for CrisisTuning {
    fn default() -> Self {
        Self {
            base_difficulty: 40,
            difficulty_per_turn: 5,
            difficulty_jitter: 10,
            min_turns_remaining: 2,
            max_turns_remaining: 3,
            base_seal_damage: 15,
            min_damage_bonus: 5,
            max_damage_bonus: 15,
            base_active_cap: 2,
            cap_growth_period: 5,
            base_spawn_chance: 0.4,
            spawn_chance_per_turn: 0.02,
            max_spawn_chance: 0.8,
        }
    }
}

impl CrisisTuning {
    /// Difficulty before jitter for a crisis spawned on `turn`.
    pub fn scaled_difficulty(&self, turn: u32) -> i32 {
        let turn = i32::try_from(turn).unwrap_or(i32::MAX);
        self.base_difficulty
            .saturating_add(self.difficulty_per_turn.saturating_mul(turn))
    }

    /// How many crises may be active at once on `turn`.
    pub fn max_active_crises(&self, turn: u32) -> usize {
        self.base_active_cap + (turn / self.cap_growth_period.max(1)) as usize
    }

    /// Probability that a new crisis spawns on `turn`, when below the active cap.
    pub fn spawn_chance(&self, turn: u32) -> f64 {
        (self.base_spawn_chance + self.spawn_chance_per_turn * f64::from(turn))
            .min(self.max_spawn_chance)
    }

    /// Check that every range can be sampled and every chance is a probability.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("base_spawn_chance", self.base_spawn_chance),
            ("spawn_chance_per_turn", self.spawn_chance_per_turn),
            ("max_spawn_chance", self.max_spawn_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(GuildError::InvalidConfig(format!(
                    "crisis.{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.difficulty_jitter < 0 {
            return Err(GuildError::InvalidConfig(format!(
                "crisis.difficulty_jitter must not be negative, got {}",
                self.difficulty_jitter
            )));
        }
        if self.min_turns_remaining == 0 || self.min_turns_remaining > self.max_turns_remaining {
            return Err(GuildError::InvalidConfig(format!(
                "crisis turns remaining range {}..={} is empty or starts at zero",
                self.min_turns_remaining, self.max_turns_remaining
            )));
        }
        if self.min_damage_bonus > self.max_damage_bonus {
            return Err(GuildError::InvalidConfig(format!(
                "crisis damage bonus range {}..={} is empty",
                self.min_damage_bonus, self.max_damage_bonus
            )));
        }
        Ok(())
    }
}

/// Condition that completes a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneTrigger {
    /// The guild currently has at least this many recruits.
    RecruitsAtLeast(usize),
    /// The player has this quest flag set.
    QuestFlagSet(String),
}

/// A milestone and the condition that completes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRule {
    pub id: String,
    pub trigger: MilestoneTrigger,
}

impl MilestoneRule {
    pub fn new(id: impl Into<String>, trigger: MilestoneTrigger) -> Self {
        Self {
            id: id.into(),
            trigger,
        }
    }
}

/// Ordered milestone rules. Evaluated front to back every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneTable {
    pub rules: Vec<MilestoneRule>,
}

impl Default for MilestoneTable {
    fn default() -> Self {
        Self {
            rules: vec![
                MilestoneRule::new("guild_expansion_1", MilestoneTrigger::RecruitsAtLeast(3)),
                MilestoneRule::new("imperial_visitor", MilestoneTrigger::RecruitsAtLeast(5)),
            ],
        }
    }
}

impl MilestoneTable {
    /// Append a rule to the end of the table.
    pub fn with_rule(mut self, rule: MilestoneRule) -> Self {
        self.rules.push(rule);
        self
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.id.is_empty() {
                return Err(GuildError::InvalidConfig(
                    "milestone id must not be empty".to_string(),
                ));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(GuildError::InvalidConfig(format!(
                    "duplicate milestone id: {}",
                    rule.id
                )));
            }
        }
        Ok(())
    }
}

/// What happens when an already-solved puzzle is solved again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolveEffects {
    /// Message and quest flag are applied on every solve call.
    #[default]
    EveryCall,
    /// Message and quest flag are applied on the first solve only.
    FirstSolveOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PuzzleRules {
    pub resolve_effects: ResolveEffects,
}

/// All tunable rules for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuildConfig {
    pub crisis: CrisisTuning,
    pub milestones: MilestoneTable,
    pub puzzles: PuzzleRules,
}

impl GuildConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GuildConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GuildError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.crisis.validate()?;
        self.milestones.validate()
    }
}
