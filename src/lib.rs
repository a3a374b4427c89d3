#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Redoubt: a heuristic decision core for two-player grid tower-defense
//! matches.
//!
//! The match engine owns the simulation (pathfinding, combat, resource
//! accrual) and drives this crate once per turn plus once per simulation
//! frame. The crate owns only the decisions:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Session Driver               │
//! ├─────────────────────────────────────┤
//! │   Policy (defense / threat /        │
//! │    offense / threat tracker)        │
//! ├─────────────────────────────────────┤
//! │   Arena mirror + wire payloads      │
//! └─────────────────────────────────────┘
//! ```
//!
//! Cross-turn memory (breach locations, observed rush sizes, the one-shot
//! perimeter migration flag) lives in [`Policy`]; board occupancy and
//! resource pools are re-read from the engine every turn and never cached.

pub mod arena;
pub mod config;
pub mod error;
pub mod grid;
pub mod policy;
pub mod session;
pub mod wire;

pub use arena::{Arena, PathOracle, TurnState, UnitRecord};
pub use config::{GameConfig, PoolKind, UnitCatalog, UnitCategory, UnitKind};
pub use error::{ConfigError, SessionError};
pub use grid::{Coord, Flank};
pub use policy::{assess_flank, least_damage_spawn, Policy, PolicyConfig, ThreatTracker};
pub use wire::{ActionBatch, FramePayload, Message, PlayerId, PLAYER_THEM, PLAYER_US};

#[cfg(test)]
pub(crate) mod test_support;
