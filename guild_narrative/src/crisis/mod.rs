//! Crisis generation - spawns timed threats against the guild's seals.
//!
//! Difficulty and spawn pacing both grow linearly with the turn number and are
//! capped, so early turns are gentle and late turns stay survivable:
//!
//! - difficulty: `base + per_turn * turn`, shifted by a uniform jitter
//! - active cap: `base_cap + turn / cap_growth_period`
//! - spawn chance: `min(max_chance, base_chance + chance_per_turn * turn)`

mod names;

pub use names::*;

use guild_state::{CrisisEvent, CrisisId, CrisisTuning, CrisisType, GuildError, Result, Seal};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Produces crisis events and decides when a new one should spawn.
pub struct CrisisGenerator<R: Rng = StdRng> {
    rng: R,
    next_id: u32,
    tuning: CrisisTuning,
}

impl CrisisGenerator<StdRng> {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed, for reproducible sessions.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CrisisGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CrisisGenerator<R> {
    /// Create a generator drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            next_id: 1,
            tuning: CrisisTuning::default(),
        }
    }

    /// Replace the default tuning. Rejects tuning that fails validation.
    pub fn with_tuning(mut self, tuning: CrisisTuning) -> Result<Self> {
        tuning.validate()?;
        self.tuning = tuning;
        Ok(self)
    }

    /// The ID the next generated crisis will receive.
    pub fn next_id(&self) -> CrisisId {
        CrisisId(self.next_id)
    }

    /// Generate a crisis against a random seal.
    ///
    /// Fails with [`GuildError::InvalidInput`] when `seals` is empty.
    pub fn generate_crisis(&mut self, seals: &[Seal], turn: u32) -> Result<CrisisEvent> {
        let seal = seals.choose(&mut self.rng).ok_or_else(|| {
            GuildError::InvalidInput("cannot generate a crisis without any seals".to_string())
        })?;

        let crisis_type = *CrisisType::ALL
            .choose(&mut self.rng)
            .unwrap_or(&CrisisType::DemonIncursion);

        let jitter = self.tuning.difficulty_jitter;
        let difficulty = self
            .tuning
            .scaled_difficulty(turn)
            .saturating_add(self.rng.gen_range(-jitter..=jitter));

        let turns_remaining = self
            .rng
            .gen_range(self.tuning.min_turns_remaining..=self.tuning.max_turns_remaining);
        let seal_damage = self.tuning.base_seal_damage.saturating_add(
            self.rng
                .gen_range(self.tuning.min_damage_bonus..=self.tuning.max_damage_bonus),
        );

        let table = name_table(crisis_type);
        let name = table.names.choose(&mut self.rng).copied().unwrap_or_default();
        let template = table
            .descriptions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();

        let id = CrisisId(self.next_id);
        self.next_id += 1;

        let crisis = CrisisEvent {
            id,
            name: name.to_string(),
            description: render_description(template, &seal.name),
            target_seal: seal.id,
            crisis_type,
            turns_remaining,
            difficulty,
            seal_damage,
        };

        info!(
            "Crisis {} ({}) spawned against {} on turn {}: difficulty {}, {} turns",
            crisis.id, crisis.crisis_type, seal.name, turn, difficulty, turns_remaining
        );

        Ok(crisis)
    }

    /// Roll whether a new crisis spawns this turn.
    ///
    /// Always false once `active_crises` has reached the cap for this turn.
    pub fn should_generate_crisis(&mut self, turn: u32, active_crises: usize) -> bool {
        let cap = self.tuning.max_active_crises(turn);
        if active_crises >= cap {
            debug!("Crisis cap reached on turn {}: {}/{}", turn, active_crises, cap);
            return false;
        }

        let chance = self.tuning.spawn_chance(turn);
        let roll: f64 = self.rng.gen();
        let spawn = roll < chance;
        debug!(
            "Crisis spawn roll on turn {}: {:.3} against {:.2} -> {}",
            turn, roll, chance, spawn
        );
        spawn
    }

    /// How many crises may be active at once on `turn`.
    pub fn max_active_crises(&self, turn: u32) -> usize {
        self.tuning.max_active_crises(turn)
    }

    /// Probability that a crisis spawns on `turn` when below the cap.
    pub fn spawn_chance(&self, turn: u32) -> f64 {
        self.tuning.spawn_chance(turn)
    }
}
