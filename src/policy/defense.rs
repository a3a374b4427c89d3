//! Defense planner: the static perimeter, the one-shot wall migration, and
//! reactive hardening of breached cells.
//!
//! Every batch below is issued every turn. Placements at occupied cells are
//! no-ops, so the planner never tracks what already stands; the arena's
//! occupancy is the single source of truth.

use log::{debug, info};

use crate::arena::Arena;
use crate::config::{PoolKind, UnitKind};
use crate::grid::Coord;
use crate::policy::tracker::ThreatTracker;
use crate::policy::PolicyConfig;
use crate::wire::PLAYER_US;

const fn at(x: u16, y: u16) -> Coord {
    Coord::new(x, y)
}

/// Turrets anchoring the center channel.
const ANCHOR_TURRETS: [Coord; 2] = [at(11, 7), at(16, 7)];

/// Walls sealing both board corners along the midline.
const CORNER_WALLS: [Coord; 10] = [
    at(0, 13),
    at(1, 13),
    at(2, 13),
    at(25, 13),
    at(26, 13),
    at(27, 13),
    at(3, 12),
    at(4, 11),
    at(24, 12),
    at(23, 11),
];

/// The early forward wall diagonals. Abandoned once the perimeter migrates.
const FORWARD_WALLS: [Coord; 8] = [
    at(22, 10),
    at(5, 10),
    at(6, 9),
    at(21, 9),
    at(20, 8),
    at(7, 8),
    at(8, 7),
    at(19, 7),
];

/// Rear turret pair behind the center channel.
const REAR_TURRETS: [Coord; 2] = [at(12, 5), at(15, 5)];

/// Turrets thickening the body of the perimeter.
const BODY_TURRETS: [Coord; 7] = [
    at(10, 7),
    at(17, 7),
    at(12, 6),
    at(16, 7),
    at(15, 6),
    at(25, 12),
    at(2, 12),
];

/// Mid-layer walls shielding the body turrets.
const MID_WALLS: [Coord; 8] = [
    at(9, 7),
    at(18, 7),
    at(12, 7),
    at(15, 7),
    at(11, 8),
    at(16, 8),
    at(17, 8),
    at(10, 8),
];

/// Second turret thickening pass, including the corner slopes.
const FLANK_TURRETS: [Coord; 6] = [
    at(11, 6),
    at(16, 6),
    at(12, 5),
    at(15, 5),
    at(4, 10),
    at(23, 10),
];

/// Shield cluster boosting units funneled through the center.
const SHIELD_CLUSTER: [Coord; 6] = [
    at(9, 6),
    at(10, 6),
    at(10, 5),
    at(17, 6),
    at(18, 6),
    at(17, 5),
];

/// Rear shield field, filled only once the structural pool allows.
const REAR_SHIELDS: [Coord; 12] = [
    at(11, 5),
    at(11, 4),
    at(12, 4),
    at(15, 4),
    at(16, 4),
    at(16, 5),
    at(12, 2),
    at(13, 2),
    at(14, 2),
    at(15, 2),
    at(11, 11),
    at(16, 11),
];

/// Walls covering the randomized turret pockets.
const TURRET_COVER_WALLS: [Coord; 8] = [
    at(11, 12),
    at(10, 11),
    at(12, 11),
    at(11, 10),
    at(16, 12),
    at(15, 11),
    at(17, 11),
    at(16, 10),
];

/// Left-flank forward diagonal traded away by the migration.
const LEFT_FRONT_WALLS: [Coord; 4] = [at(8, 7), at(7, 8), at(6, 9), at(5, 10)];

/// Left-flank pulled-back diagonal built by the migration.
const LEFT_BACK_WALLS: [Coord; 4] = [at(5, 11), at(6, 10), at(7, 9), at(8, 8)];

/// Right-flank forward diagonal traded away by the migration.
const RIGHT_FRONT_WALLS: [Coord; 4] = [at(19, 7), at(20, 8), at(21, 9), at(22, 10)];

/// Right-flank pulled-back diagonal built by the migration.
const RIGHT_BACK_WALLS: [Coord; 4] = [at(19, 8), at(20, 9), at(21, 10), at(22, 11)];

/// Defense planner state that survives across turns.
///
/// The migration flag is monotonic: it flips false -> true at most once per
/// match and never reverts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefenseState {
    /// Whether the forward wall diagonals have been traded for the
    /// pulled-back line.
    pub migrated: bool,
}

/// Issue the full static perimeter for this turn, then run the structural
/// migration and its follow-up shield upgrade when the economy allows.
pub(crate) fn build_perimeter(
    arena: &mut impl Arena,
    state: &mut DefenseState,
    config: &PolicyConfig,
) {
    arena.attempt_place_batch(UnitKind::Turret, &ANCHOR_TURRETS);
    arena.attempt_place_batch(UnitKind::Wall, &CORNER_WALLS);

    // The forward diagonals are cheap early protection; once migrated we
    // let whatever survives decay and never rebuild it.
    if !state.migrated {
        arena.attempt_place_batch(UnitKind::Wall, &FORWARD_WALLS);
    }

    arena.attempt_place_batch(UnitKind::Turret, &REAR_TURRETS);
    arena.attempt_place_batch(UnitKind::Turret, &BODY_TURRETS);
    arena.attempt_place_batch(UnitKind::Wall, &MID_WALLS);
    arena.attempt_place_batch(UnitKind::Turret, &FLANK_TURRETS);
    arena.attempt_place_batch(UnitKind::Shield, &SHIELD_CLUSTER);
    arena.attempt_place_batch(UnitKind::Shield, &REAR_SHIELDS);
    arena.attempt_place_batch(UnitKind::Wall, &TURRET_COVER_WALLS);

    let structural = arena.resource(PLAYER_US, PoolKind::Structural);

    if !state.migrated && structural >= config.migration_threshold {
        info!(
            "migrating perimeter at {structural:.1} structural (turn {})",
            arena.turn_number()
        );
        migrate_flank(arena, &RIGHT_FRONT_WALLS, &RIGHT_BACK_WALLS);
        migrate_flank(arena, &LEFT_FRONT_WALLS, &LEFT_BACK_WALLS);
        state.migrated = true;
    }

    if state.migrated && structural >= config.shield_upgrade_threshold {
        arena.attempt_place_batch(UnitKind::Shield, &RIGHT_FRONT_WALLS);
        arena.attempt_place_batch(UnitKind::Shield, &LEFT_FRONT_WALLS);
    }
}

/// Trade one flank's forward wall diagonal for the pulled-back line.
///
/// Removal and rebuild are issued within the same turn; the engine applies
/// both in the submitted order.
fn migrate_flank(arena: &mut impl Arena, front: &[Coord], back: &[Coord]) {
    let removed = arena.attempt_remove(front);
    let built = arena.attempt_place_batch(UnitKind::Wall, back);
    debug!("flank migration removed {removed}, rebuilt {built}");
}

/// Place a turret one row inward of every breach recorded so far.
///
/// One row up keeps our own edge spawn cells clear. Off by default; enable
/// via [`PolicyConfig::reactive_defense`].
pub(crate) fn harden_breaches(arena: &mut impl Arena, tracker: &ThreatTracker) {
    for breach in tracker.breaches() {
        let inward = Coord::new(breach.x, breach.y + 1);
        arena.attempt_place(UnitKind::Turret, inward, 1);
    }
}
