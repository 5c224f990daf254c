//! Crisis mechanics: seals, crisis categories and the crisis events that threaten them.

use serde::{Deserialize, Serialize};

/// Identifier for a seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SealId(pub u32);

impl std::fmt::Display for SealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seal-{}", self.0)
    }
}

/// A seal the guild must protect. Crises always target one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seal {
    pub id: SealId,
    pub name: String,
}

impl Seal {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: SealId(id),
            name: name.into(),
        }
    }
}

/// Categories of crisis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrisisType {
    DemonIncursion,
    CultistRitual,
    MonsterHorde,
    Sabotage,
    NaturalDisaster,
    Corruption,
}

impl CrisisType {
    /// Every crisis category, in declaration order.
    pub const ALL: [CrisisType; 6] = [
        CrisisType::DemonIncursion,
        CrisisType::CultistRitual,
        CrisisType::MonsterHorde,
        CrisisType::Sabotage,
        CrisisType::NaturalDisaster,
        CrisisType::Corruption,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CrisisType::DemonIncursion => "Demon Incursion",
            CrisisType::CultistRitual => "Cultist Ritual",
            CrisisType::MonsterHorde => "Monster Horde",
            CrisisType::Sabotage => "Sabotage",
            CrisisType::NaturalDisaster => "Natural Disaster",
            CrisisType::Corruption => "Corruption",
        }
    }
}

impl std::fmt::Display for CrisisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier for a crisis. Issued in increasing order by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrisisId(pub u32);

impl std::fmt::Display for CrisisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "crisis-{}", self.0)
    }
}

/// A timed threat against a seal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisEvent {
    pub id: CrisisId,
    pub name: String,
    pub description: String,
    pub target_seal: SealId,
    pub crisis_type: CrisisType,
    /// Turns left before the crisis lands its damage.
    pub turns_remaining: u32,
    pub difficulty: i32,
    /// Integrity the target seal loses if the crisis is not resolved in time.
    pub seal_damage: u32,
}

impl CrisisEvent {
    /// Count down one turn. Returns true once the crisis has run out of time.
    pub fn tick(&mut self) -> bool {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.turns_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_crisis(turns_remaining: u32) -> CrisisEvent {
        CrisisEvent {
            id: CrisisId(1),
            name: "Test".to_string(),
            description: String::new(),
            target_seal: SealId(1),
            crisis_type: CrisisType::Sabotage,
            turns_remaining,
            difficulty: 45,
            seal_damage: 20,
        }
    }

    #[test]
    fn test_crisis_tick_expires() {
        let mut crisis = sample_crisis(2);
        assert!(!crisis.tick());
        assert_eq!(crisis.turns_remaining, 1);
        assert!(crisis.tick());
        assert!(crisis.is_expired());

        // Saturates instead of wrapping
        assert!(crisis.tick());
        assert_eq!(crisis.turns_remaining, 0);
    }

    #[test]
    fn test_crisis_type_labels() {
        assert_eq!(CrisisType::ALL.len(), 6);
        assert_eq!(CrisisType::DemonIncursion.to_string(), "Demon Incursion");
        assert_eq!(CrisisType::NaturalDisaster.label(), "Natural Disaster");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(SealId(3).to_string(), "seal-3");
        assert_eq!(CrisisId(12).to_string(), "crisis-12");
        assert!(CrisisId(2) > CrisisId(1));
    }
}
