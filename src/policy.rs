//! The per-turn decision policy.
//!
//! [`Policy`] is the turn orchestrator: it owns every piece of state that
//! survives across turns (the threat tracker and the defense migration
//! flag) and threads it through the planners each turn. The state is an
//! explicit dependency constructed once at game start; there are no
//! process globals.
//!
//! Turn sequence: static defense (including the one-shot migration), then
//! optional reactive hardening, then stall-or-rush keyed on the mobile
//! pool gate.

mod defense;
mod offense;
mod threat;
mod tracker;

use log::{debug, info};

use crate::arena::Arena;
use crate::config::PoolKind;
use crate::wire::{FramePayload, PLAYER_US};

pub use defense::DefenseState;
pub use offense::least_damage_spawn;
pub use threat::assess_flank;
pub use tracker::ThreatTracker;

/// Tunable knobs of the policy. Read once at game start.
#[derive(Debug, Clone, Copy)]
pub struct PolicyConfig {
    /// Structural amount that triggers the one-shot perimeter migration.
    pub migration_threshold: f64,
    /// Structural amount that, after migration, funds the shield upgrade
    /// along the vacated wall line.
    pub shield_upgrade_threshold: f64,
    /// Mobile amount below which the turn stalls instead of rushing.
    pub rush_gate: f64,
    /// Whether to rebuild turrets behind previously breached cells.
    pub reactive_defense: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            migration_threshold: 24.0,
            shield_upgrade_threshold: 8.0,
            rush_gate: 12.0,
            reactive_defense: false,
        }
    }
}

/// The stateful decision policy for one match.
#[derive(Debug, Clone)]
pub struct Policy {
    config: PolicyConfig,
    tracker: ThreatTracker,
    defense: DefenseState,
}

impl Policy {
    /// Create a policy with the given configuration.
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config,
            tracker: ThreatTracker::new(),
            defense: DefenseState::default(),
        }
    }

    /// Play one turn against the given arena.
    ///
    /// Issues all placement and removal attempts for the turn; the caller
    /// submits whatever batch the arena accumulated. Rejected attempts are
    /// observable counts inside the planners, never errors, and nothing is
    /// retried within the turn.
    pub fn play_turn(&mut self, arena: &mut impl Arena) {
        info!("playing turn {}", arena.turn_number());

        defense::build_perimeter(arena, &mut self.defense, &self.config);

        if self.config.reactive_defense {
            defense::harden_breaches(arena, &self.tracker);
        }

        let mobile = arena.resource(PLAYER_US, PoolKind::Mobile);
        if mobile < self.config.rush_gate {
            debug!("mobile pool {mobile:.1} below gate, stalling");
            offense::stall_with_disruptors(arena);
        } else {
            let fortified = threat::assess_flank(arena);
            debug!("mobile pool {mobile:.1} at gate, rushing past {fortified:?} fortification");
            offense::rush(arena, fortified);
        }
    }

    /// Ingest one intra-turn simulation frame.
    pub fn ingest_frame(&mut self, frame: &FramePayload) {
        self.tracker.ingest_frame(frame);
    }

    /// The accumulated cross-turn threat memory.
    #[must_use]
    pub fn tracker(&self) -> &ThreatTracker {
        &self.tracker
    }

    /// Whether the perimeter migration has already happened.
    #[must_use]
    pub fn migrated(&self) -> bool {
        self.defense.migrated
    }
}
