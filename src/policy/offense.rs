//! Offense planner: disruptor stalling, the fast-unit rush, and the
//! least-damage lane estimator.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use log::debug;

use crate::arena::{Arena, PathOracle};
use crate::config::{PoolKind, UnitKind};
use crate::grid::{Coord, Flank};
use crate::wire::PLAYER_US;

/// Launch cell used when rushing the left lane.
const LEFT_LAUNCH: Coord = Coord::new(5, 8);

/// Launch cell used when rushing the right lane.
const RIGHT_LAUNCH: Coord = Coord::new(22, 8);

/// Disruptor anchor placed on every early stall turn.
const STALL_ANCHOR: Coord = Coord::new(11, 2);

/// Disruptor schedule for later stall turns; a prefix of this list is
/// placed depending on how flush the opponent's mobile pool projects.
/// Repeated cells stack multiple disruptors on the same lane.
const STALL_SCHEDULE: [Coord; 5] = [
    Coord::new(11, 2),
    Coord::new(16, 2),
    Coord::new(16, 2),
    Coord::new(11, 12),
    Coord::new(16, 2),
];

/// Turns during which the stall places only the single anchor disruptor.
const STALL_OPENING_TURNS: u32 = 5;

/// Deploy disruptors to blunt an expected rush while our own mobile pool
/// is too thin to attack.
///
/// Turns 0-4 place one anchor disruptor. From turn 5 on, the opponent's
/// *projected* mobile amount sizes the screen: <=5 places nothing, then 2,
/// 3, 4 and finally 5 disruptors as the projection climbs. A tunable
/// anti-rush heuristic, not a guarantee.
pub(crate) fn stall_with_disruptors(arena: &mut impl Arena) {
    if arena.turn_number() < STALL_OPENING_TURNS {
        arena.attempt_place(UnitKind::Disruptor, STALL_ANCHOR, 1);
        return;
    }

    let projected = arena.projected_enemy_mobile();
    let screen_size = if projected <= 5.0 {
        0
    } else if projected <= 7.0 {
        2
    } else if projected <= 10.0 {
        3
    } else if projected <= 12.0 {
        4
    } else {
        5
    };
    debug!("stalling with {screen_size} disruptors against projected {projected:.1}");

    for &cell in &STALL_SCHEDULE[..screen_size] {
        arena.attempt_place(UnitKind::Disruptor, cell, 1);
    }
}

/// Dump the entire mobile pool into fast units down one lane.
///
/// The lane is the flank *opposite* the fortified one. The loop is bounded
/// by how many units the pool can pay for, and stops at the first rejected
/// attempt so a blocked launch cell can never spin it forever.
pub(crate) fn rush(arena: &mut impl Arena, fortified: Flank) {
    let launch = match fortified.opposite() {
        Flank::Left => LEFT_LAUNCH,
        Flank::Right => RIGHT_LAUNCH,
    };

    let cost = arena.cost(UnitKind::Fast);
    if cost <= 0.0 {
        return;
    }
    let budget = (arena.resource(PLAYER_US, PoolKind::Mobile) / cost).floor();
    // The pool bound keeps the loop finite even if the oracle keeps
    // accepting; the per-attempt check covers blockage and rounding.
    let budget = if budget < 0.0 { 0 } else { budget as u32 };

    let mut launched = 0;
    for _ in 0..budget {
        if arena.attempt_place(UnitKind::Fast, launch, 1) == 0 {
            break;
        }
        launched += 1;
    }
    debug!(
        "rushed {launched} fast units at ({}, {})",
        launch.x, launch.y
    );
}

/// Estimate which candidate launch cell exposes a unit to the least turret
/// fire, by walking each predicted path and summing attacker exposure.
///
/// Ties resolve to the earliest candidate in input order; an empty slate
/// yields `None`. This is a static single-path estimate: it knows nothing
/// about mobile-unit interactions or multi-turn dynamics.
#[must_use]
pub fn least_damage_spawn(
    arena: &impl Arena,
    paths: &impl PathOracle,
    options: &[Coord],
) -> Option<Coord> {
    let per_hit = arena.damage(UnitKind::Turret);
    let mut best: Option<(Coord, f64)> = None;

    for &option in options {
        let exposure: f64 = paths
            .path_to_edge(option)
            .iter()
            .map(|&cell| paths.attackers_at(cell) as f64 * per_hit)
            .sum();
        let better = best.is_none_or(|(_, least)| exposure < least);
        if better {
            best = Some((option, exposure));
        }
    }

    best.map(|(cell, _)| cell)
}
