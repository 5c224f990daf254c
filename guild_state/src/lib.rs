//! # Guild State
//!
//! The rules crate for the guildhall - entity definitions, the shared game context,
//! crisis and seal types, and the tuning tables that drive the narrative managers.
//! This crate holds state only; the managers that mutate it live in `guild_narrative`.

pub mod config;
pub mod entities;
pub mod error;
pub mod game_context;
pub mod mechanics;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use game_context::*;
pub use mechanics::*;
