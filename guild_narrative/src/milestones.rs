//! One-shot progress milestones and room state overrides.

use guild_state::{
    GameContext, MilestoneTable, MilestoneTrigger, Player, RoomId, DEFAULT_ROOM_STATE,
};
use tracing::info;

use crate::notify::MilestoneNotifier;

/// Checks milestone rules against the session and records completions.
pub struct MilestoneManager<'a> {
    ctx: &'a mut GameContext,
    table: MilestoneTable,
    notifier: Option<&'a mut dyn MilestoneNotifier>,
}

impl<'a> MilestoneManager<'a> {
    /// Create a manager using the default milestone table and no notifier.
    pub fn new(ctx: &'a mut GameContext) -> Self {
        Self {
            ctx,
            table: MilestoneTable::default(),
            notifier: None,
        }
    }

    pub fn with_table(mut self, table: MilestoneTable) -> Self {
        self.table = table;
        self
    }

    /// Report each newly completed milestone to `notifier`.
    pub fn with_notifier(mut self, notifier: &'a mut dyn MilestoneNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Evaluate every rule once. Call once per turn.
    ///
    /// Returns the milestones completed by this call, in table order. A
    /// milestone already completed is never reported again.
    pub fn check_milestones(&mut self) -> Vec<String> {
        let player = self.ctx.player.as_ref();
        let total_recruits = player.map(Player::recruit_count).unwrap_or(0);

        let mut reached = Vec::new();
        for rule in &self.table.rules {
            if self.ctx.completed_milestones.contains(&rule.id) {
                continue;
            }
            let triggered = match &rule.trigger {
                MilestoneTrigger::RecruitsAtLeast(count) => total_recruits >= *count,
                MilestoneTrigger::QuestFlagSet(flag) => {
                    player.is_some_and(|player| player.has_quest_flag(flag))
                }
            };
            if triggered {
                reached.push(rule.id.clone());
            }
        }

        for id in &reached {
            self.ctx.completed_milestones.insert(id.clone());
            info!("Milestone reached: {}", id);
            if let Some(notifier) = self.notifier.as_mut() {
                notifier.notify_milestone(id);
            }
        }

        self.ctx.total_recruits_ever = self.ctx.total_recruits_ever.max(total_recruits);
        reached
    }

    pub fn is_milestone_completed(&self, milestone_id: &str) -> bool {
        self.ctx.completed_milestones.contains(milestone_id)
    }

    /// Current state of a room, or `"default"` when never overridden.
    pub fn get_room_state(&self, room_id: RoomId) -> &str {
        self.ctx
            .room_states
            .get(&room_id)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ROOM_STATE)
    }

    pub fn set_room_state(&mut self, room_id: RoomId, state: impl Into<String>) {
        self.ctx.room_states.insert(room_id, state.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guild_state::{MilestoneRule, Recruit};

    fn context_with_recruits(count: usize) -> GameContext {
        let mut ctx = GameContext::with_player(Player::new("Aldric"));
        for i in 0..count {
            ctx.add_recruit(Recruit::new(format!("Recruit {i}")));
        }
        ctx
    }

    #[test]
    fn test_no_milestones_below_threshold() {
        let mut ctx = context_with_recruits(2);
        let reached = MilestoneManager::new(&mut ctx).check_milestones();

        assert!(reached.is_empty());
        assert!(ctx.completed_milestones.is_empty());
        assert_eq!(ctx.total_recruits_ever, 2);
    }

    #[test]
    fn test_first_expansion_fires_once() {
        let mut ctx = context_with_recruits(3);
        let mut notified: Vec<String> = Vec::new();

        {
            let mut milestones = MilestoneManager::new(&mut ctx).with_notifier(&mut notified);
            assert_eq!(milestones.check_milestones(), vec!["guild_expansion_1".to_string()]);
            assert!(milestones.check_milestones().is_empty());
            assert!(milestones.check_milestones().is_empty());
            assert!(milestones.is_milestone_completed("guild_expansion_1"));
            assert!(!milestones.is_milestone_completed("imperial_visitor"));
        }

        assert_eq!(notified, vec!["guild_expansion_1".to_string()]);
        assert_eq!(
            ctx.completed_milestones
                .iter()
                .filter(|id| *id == "guild_expansion_1")
                .count(),
            1
        );
    }

    #[test]
    fn test_both_thresholds_in_order() {
        let mut ctx = context_with_recruits(5);
        let mut notified: Vec<String> = Vec::new();

        let reached = MilestoneManager::new(&mut ctx)
            .with_notifier(&mut notified)
            .check_milestones();

        let expected = vec!["guild_expansion_1".to_string(), "imperial_visitor".to_string()];
        assert_eq!(reached, expected);
        assert_eq!(notified, expected);
    }

    #[test]
    fn test_milestone_survives_losing_recruits() {
        let mut ctx = context_with_recruits(4);
        MilestoneManager::new(&mut ctx).check_milestones();

        ctx.player_mut().unwrap().recruits.truncate(1);
        let reached = MilestoneManager::new(&mut ctx).check_milestones();

        assert!(reached.is_empty());
        assert!(ctx.completed_milestones.contains("guild_expansion_1"));
        assert_eq!(ctx.total_recruits_ever, 4);
    }

    #[test]
    fn test_missing_player_counts_as_zero() {
        let mut ctx = GameContext::new();
        let reached = MilestoneManager::new(&mut ctx).check_milestones();

        assert!(reached.is_empty());
        assert_eq!(ctx.total_recruits_ever, 0);
    }

    #[test]
    fn test_quest_flag_trigger() {
        let mut ctx = context_with_recruits(0);
        let table = MilestoneTable::default().with_rule(MilestoneRule::new(
            "sealkeeper",
            MilestoneTrigger::QuestFlagSet("seal_restored".to_string()),
        ));

        let reached = MilestoneManager::new(&mut ctx)
            .with_table(table.clone())
            .check_milestones();
        assert!(reached.is_empty());

        ctx.player_mut().unwrap().set_quest_flag("seal_restored");
        let reached = MilestoneManager::new(&mut ctx)
            .with_table(table)
            .check_milestones();
        assert_eq!(reached, vec!["sealkeeper".to_string()]);
    }

    #[test]
    fn test_room_state_defaults_and_overrides() {
        let mut ctx = GameContext::new();
        let mut milestones = MilestoneManager::new(&mut ctx);

        assert_eq!(milestones.get_room_state(RoomId(5)), "default");

        milestones.set_room_state(RoomId(5), "expanded");
        assert_eq!(milestones.get_room_state(RoomId(5)), "expanded");
        assert_eq!(milestones.get_room_state(RoomId(6)), "default");

        milestones.set_room_state(RoomId(5), "ruined");
        assert_eq!(milestones.get_room_state(RoomId(5)), "ruined");
    }
}
