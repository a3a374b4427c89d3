//! The oracle seam between the policy and the match engine.
//!
//! The policy never simulates combat or movement. It talks to two
//! collaborators: an [`Arena`] that answers resource and occupancy queries
//! and accepts placement attempts, and a [`PathOracle`] that predicts the
//! path a mobile unit would take and who could shoot at it along the way.
//!
//! [`TurnState`] is the wire-backed `Arena` used in a live match: a
//! client-side mirror of the engine's bookkeeping. It deducts spent
//! resources, mirrors accepted stationary placements into occupancy so
//! re-issued batches become no-ops, and accumulates the action batch that
//! is submitted at end of turn. Board state is rebuilt from the payload
//! every turn; nothing here is cached across turns.

use std::collections::HashMap;

use log::warn;

use crate::config::{PoolKind, UnitCatalog, UnitCategory, UnitKind};
use crate::grid::Coord;
use crate::wire::{ActionBatch, Placement, PlayerId, TurnPayload, PLAYER_US};

/// One unit occupying (or traversing) a cell.
///
/// Classification is a pure function over this record: stationary vs mobile
/// comes from the kind, friend vs foe from the owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRecord {
    /// Unit kind.
    pub kind: UnitKind,
    /// Owning player.
    pub owner: PlayerId,
    /// Remaining health as reported by the engine.
    pub health: f64,
}

/// Resource and occupancy oracle for one turn.
///
/// Placement attempts are requests: the oracle may accept fewer copies than
/// asked for, and a rejected attempt is an observable count of zero, never
/// an error. Callers that loop on placements must stop on the first
/// rejection rather than relying on affordability alone.
pub trait Arena {
    /// Current turn number, starting at zero.
    fn turn_number(&self) -> u32;

    /// Current amount in one of a player's resource pools.
    fn resource(&self, player: PlayerId, pool: PoolKind) -> f64;

    /// Engine-projected mobile-pool amount for the opponent next turn.
    fn projected_enemy_mobile(&self) -> f64;

    /// Placement cost of a kind.
    fn cost(&self, kind: UnitKind) -> f64;

    /// Per-hit damage of a kind.
    fn damage(&self, kind: UnitKind) -> f64;

    /// Units currently at a cell.
    fn occupants(&self, at: Coord) -> &[UnitRecord];

    /// Check whether any stationary unit occupies a cell.
    fn has_stationary(&self, at: Coord) -> bool {
        self.occupants(at)
            .iter()
            .any(|unit| unit.kind.category() == UnitCategory::Stationary)
    }

    /// Attempt to place up to `count` copies of a kind at a cell.
    ///
    /// Returns how many were accepted; stops at the first rejection.
    fn attempt_place(&mut self, kind: UnitKind, at: Coord, count: u32) -> u32;

    /// Attempt to place one copy of a kind at each listed cell.
    ///
    /// Returns how many were accepted. Rejections are skipped, not fatal,
    /// so the same batch can be re-issued every turn.
    fn attempt_place_batch(&mut self, kind: UnitKind, cells: &[Coord]) -> u32 {
        cells
            .iter()
            .map(|&cell| self.attempt_place(kind, cell, 1))
            .sum()
    }

    /// Attempt to remove our stationary units at the listed cells.
    ///
    /// Returns how many removal intents were accepted.
    fn attempt_remove(&mut self, cells: &[Coord]) -> u32;
}

/// Pathfinding oracle, answered by the external simulation.
pub trait PathOracle {
    /// Predicted path a mobile unit spawned at `from` would take towards
    /// the opposite edge.
    fn path_to_edge(&self, from: Coord) -> Vec<Coord>;

    /// Number of opponent stationary attackers able to hit a cell.
    fn attackers_at(&self, cell: Coord) -> usize;
}

/// Wire-backed [`Arena`] for a single turn.
#[derive(Debug)]
pub struct TurnState<'a> {
    catalog: &'a UnitCatalog,
    turn: u32,
    structural: f64,
    mobile: f64,
    enemy_structural: f64,
    enemy_mobile: f64,
    enemy_projected_mobile: f64,
    occupancy: HashMap<Coord, Vec<UnitRecord>>,
    batch: ActionBatch,
}

impl<'a> TurnState<'a> {
    /// Build the turn mirror from a parsed turn payload.
    ///
    /// Units reported off the arena are dropped with a warning; a corrupt
    /// record must not poison the rest of the turn.
    #[must_use]
    pub fn new(catalog: &'a UnitCatalog, payload: &TurnPayload) -> Self {
        let mut occupancy: HashMap<Coord, Vec<UnitRecord>> = HashMap::new();
        for unit in &payload.units {
            if !unit.location.in_arena() {
                warn!(
                    "ignoring unit reported off the arena at ({}, {})",
                    unit.location.x, unit.location.y
                );
                continue;
            }
            occupancy.entry(unit.location).or_default().push(UnitRecord {
                kind: unit.kind,
                owner: unit.owner,
                health: unit.health,
            });
        }

        Self {
            catalog,
            turn: payload.turn,
            structural: payload.us.structural,
            mobile: payload.us.mobile,
            enemy_structural: payload.them.structural,
            enemy_mobile: payload.them.mobile,
            enemy_projected_mobile: payload.them.projected_mobile,
            occupancy,
            batch: ActionBatch::default(),
        }
    }

    /// Finish the turn and hand back the accumulated action batch.
    #[must_use]
    pub fn into_actions(self) -> ActionBatch {
        self.batch
    }

    fn pool_mut(&mut self, pool: PoolKind) -> &mut f64 {
        match pool {
            PoolKind::Structural => &mut self.structural,
            PoolKind::Mobile => &mut self.mobile,
        }
    }

    /// A placement is legal when the cell is on the arena, on our half, and
    /// not blocked by a stationary unit. Mobile units may stack with other
    /// mobile units.
    fn placement_legal(&self, at: Coord) -> bool {
        at.in_arena() && at.on_own_half() && !self.has_stationary(at)
    }

    fn record_placement(&mut self, kind: UnitKind, at: Coord, placed: u32) {
        // Coalesce with the previous intent when a loop spawns unit by unit
        // at the same cell.
        if let Some(last) = self.batch.placements.last_mut() {
            if last.location == at && last.unit == self.catalog.shorthand(kind) {
                last.count += placed;
                return;
            }
        }
        self.batch.placements.push(Placement {
            unit: self.catalog.shorthand(kind).to_string(),
            location: at,
            count: placed,
        });
    }
}

impl Arena for TurnState<'_> {
    fn turn_number(&self) -> u32 {
        self.turn
    }

    fn resource(&self, player: PlayerId, pool: PoolKind) -> f64 {
        match (player, pool) {
            (PLAYER_US, PoolKind::Structural) => self.structural,
            (PLAYER_US, PoolKind::Mobile) => self.mobile,
            (_, PoolKind::Structural) => self.enemy_structural,
            (_, PoolKind::Mobile) => self.enemy_mobile,
        }
    }

    fn projected_enemy_mobile(&self) -> f64 {
        self.enemy_projected_mobile
    }

    fn cost(&self, kind: UnitKind) -> f64 {
        self.catalog.cost(kind)
    }

    fn damage(&self, kind: UnitKind) -> f64 {
        self.catalog.damage(kind)
    }

    fn occupants(&self, at: Coord) -> &[UnitRecord] {
        self.occupancy.get(&at).map_or(&[], Vec::as_slice)
    }

    fn attempt_place(&mut self, kind: UnitKind, at: Coord, count: u32) -> u32 {
        let cost = self.catalog.cost(kind);
        let mut placed = 0;

        for _ in 0..count {
            if !self.placement_legal(at) {
                break;
            }
            if *self.pool_mut(kind.pool()) < cost {
                break;
            }
            *self.pool_mut(kind.pool()) -= cost;

            if kind.category() == UnitCategory::Stationary {
                // Mirror the accepted placement so re-issuing the same batch
                // later this turn is a no-op. Health is assigned by the
                // engine when the unit materializes.
                self.occupancy.entry(at).or_default().push(UnitRecord {
                    kind,
                    owner: PLAYER_US,
                    health: 0.0,
                });
            }
            placed += 1;
        }

        if placed > 0 {
            self.record_placement(kind, at, placed);
        }
        placed
    }

    fn attempt_remove(&mut self, cells: &[Coord]) -> u32 {
        let mut removed = 0;
        for &cell in cells {
            let Some(units) = self.occupancy.get_mut(&cell) else {
                continue;
            };
            let ours = |unit: &UnitRecord| {
                unit.owner == PLAYER_US && unit.kind.category() == UnitCategory::Stationary
            };
            if units.iter().any(|unit| ours(unit)) {
                units.retain(|unit| !ours(unit));
                self.batch.removals.push(cell);
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
impl TurnState<'_> {
    /// Total copies across all accumulated placement intents.
    pub(crate) fn batch_placement_total(&self) -> usize {
        self.batch
            .placements
            .iter()
            .map(|p| p.count as usize)
            .sum()
    }
}
