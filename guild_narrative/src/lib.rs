//! # Guild Narrative
//!
//! The managers that drive the guildhall's story from turn to turn. Each one
//! borrows the shared [`GameContext`](guild_state::GameContext), reads or
//! mutates it, and hands back plain values or text for the UI layer.
//!
//! ## Core Components
//!
//! - **crisis**: Spawns timed crises against seals on an escalating difficulty curve
//! - **factions**: Tracks the player's faction alliances
//! - **milestones**: One-shot progress milestones and room state overrides
//! - **puzzles**: Per-puzzle solve/attempt tracking and solve effects
//! - **notify**: Sinks the managers report to (milestone notifier, text output)

pub mod crisis;
pub mod factions;
pub mod milestones;
pub mod notify;
pub mod puzzles;

pub use crisis::*;
pub use factions::*;
pub use milestones::*;
pub use notify::*;
pub use puzzles::*;
