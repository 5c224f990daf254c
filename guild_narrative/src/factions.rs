//! Faction alliances held by the player.
//!
//! A missing player reads as "no alliances" and ignores mutations.

use guild_state::GameContext;
use tracing::{debug, info};

use crate::notify::TextSink;

/// Query/mutation facade over the player's allied factions.
pub struct FactionManager<'a> {
    ctx: &'a mut GameContext,
}

impl<'a> FactionManager<'a> {
    pub fn new(ctx: &'a mut GameContext) -> Self {
        Self { ctx }
    }

    fn allied(&self) -> &[String] {
        self.ctx
            .player()
            .map(|player| player.allied_factions.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_allied_with(&self, faction_id: &str) -> bool {
        self.allied().iter().any(|id| id == faction_id)
    }

    /// Ally with a faction. Allying twice has no further effect.
    pub fn ally_with_faction(&mut self, faction_id: &str) {
        let Some(player) = self.ctx.player_mut() else {
            debug!("No player to ally with {}", faction_id);
            return;
        };
        if player.allied_factions.iter().any(|id| id == faction_id) {
            return;
        }
        player.allied_factions.push(faction_id.to_string());
        info!("Alliance formed with {}", faction_id);
    }

    /// Break an alliance. Breaking one that does not exist has no effect.
    pub fn break_alliance(&mut self, faction_id: &str) {
        let Some(player) = self.ctx.player_mut() else {
            return;
        };
        let before = player.allied_factions.len();
        player.allied_factions.retain(|id| id != faction_id);
        if player.allied_factions.len() != before {
            info!("Alliance with {} broken", faction_id);
        }
    }

    /// Snapshot of allied faction IDs, in the order the alliances were formed.
    pub fn allied_factions(&self) -> Vec<String> {
        self.allied().to_vec()
    }

    pub fn allied_faction_count(&self) -> usize {
        self.allied().len()
    }

    /// True if allied with every listed faction. Trivially true for an empty list.
    pub fn is_allied_with_all(&self, faction_ids: &[&str]) -> bool {
        faction_ids.iter().all(|id| self.is_allied_with(id))
    }

    /// True if allied with at least one listed faction. False for an empty list.
    pub fn is_allied_with_any(&self, faction_ids: &[&str]) -> bool {
        faction_ids.iter().any(|id| self.is_allied_with(id))
    }

    /// Lines describing current alliances, ready for display.
    pub fn allied_faction_lines(&self) -> Vec<String> {
        let allied = self.allied();
        if allied.is_empty() {
            return vec!["You have no allied factions.".to_string()];
        }

        let mut lines = Vec::with_capacity(allied.len() + 1);
        lines.push(format!("Allied factions ({}):", allied.len()));
        lines.extend(allied.iter().map(|id| format!("  - {}", id)));
        lines
    }

    /// Write the alliance summary to a text sink.
    pub fn display_allied_factions(&self, out: &mut dyn TextSink) {
        for line in self.allied_faction_lines() {
            out.write_line(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guild_state::Player;

    fn context() -> GameContext {
        GameContext::with_player(Player::new("Aldric"))
    }

    #[test]
    fn test_ally_then_query() {
        let mut ctx = context();
        let mut factions = FactionManager::new(&mut ctx);

        assert!(!factions.is_allied_with("iron_legion"));
        factions.ally_with_faction("iron_legion");
        assert!(factions.is_allied_with("iron_legion"));
        assert_eq!(factions.allied_faction_count(), 1);
    }

    #[test]
    fn test_ally_is_idempotent() {
        let mut ctx = context();
        let mut factions = FactionManager::new(&mut ctx);

        factions.ally_with_faction("iron_legion");
        factions.ally_with_faction("iron_legion");
        assert_eq!(factions.allied_faction_count(), 1);
    }

    #[test]
    fn test_break_alliance() {
        let mut ctx = context();
        let mut factions = FactionManager::new(&mut ctx);

        factions.ally_with_faction("iron_legion");
        factions.ally_with_faction("silver_hand");
        factions.break_alliance("iron_legion");
        factions.break_alliance("iron_legion");
        factions.break_alliance("never_allied");

        assert!(!factions.is_allied_with("iron_legion"));
        assert_eq!(factions.allied_factions(), vec!["silver_hand".to_string()]);
    }

    #[test]
    fn test_snapshot_keeps_order_and_is_detached() {
        let mut ctx = context();
        let mut factions = FactionManager::new(&mut ctx);

        factions.ally_with_faction("b");
        factions.ally_with_faction("a");
        let snapshot = factions.allied_factions();
        factions.ally_with_faction("c");

        assert_eq!(snapshot, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(factions.allied_faction_count(), 3);
    }

    #[test]
    fn test_all_and_any() {
        let mut ctx = context();
        let mut factions = FactionManager::new(&mut ctx);
        factions.ally_with_faction("a");
        factions.ally_with_faction("b");

        assert!(factions.is_allied_with_all(&["a", "b"]));
        assert!(!factions.is_allied_with_all(&["a", "c"]));
        assert!(factions.is_allied_with_any(&["c", "b"]));
        assert!(!factions.is_allied_with_any(&["c", "d"]));

        assert!(factions.is_allied_with_all(&[]));
        assert!(!factions.is_allied_with_any(&[]));
    }

    #[test]
    fn test_missing_player_is_no_alliances() {
        let mut ctx = GameContext::new();
        let mut factions = FactionManager::new(&mut ctx);

        factions.ally_with_faction("iron_legion");
        factions.break_alliance("iron_legion");

        assert!(!factions.is_allied_with("iron_legion"));
        assert_eq!(factions.allied_faction_count(), 0);
        assert!(factions.allied_factions().is_empty());
        assert!(factions.is_allied_with_all(&[]));
        assert!(!factions.is_allied_with_any(&["iron_legion"]));
    }

    #[test]
    fn test_display_lines() {
        let mut ctx = context();
        let mut factions = FactionManager::new(&mut ctx);

        let mut out: Vec<String> = Vec::new();
        factions.display_allied_factions(&mut out);
        assert_eq!(out, vec!["You have no allied factions.".to_string()]);

        factions.ally_with_faction("iron_legion");
        factions.ally_with_faction("silver_hand");
        let lines = factions.allied_faction_lines();
        assert_eq!(
            lines,
            vec![
                "Allied factions (2):".to_string(),
                "  - iron_legion".to_string(),
                "  - silver_hand".to_string(),
            ]
        );
    }
}
