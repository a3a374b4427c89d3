//! Threat assessment: which flank has the opponent fortified?

use crate::arena::Arena;
use crate::config::UnitKind;
use crate::grid::{arena_coords, Flank, HALF_ARENA};
use crate::wire::PLAYER_THEM;

/// Rows at or above this are deep enough in the opponent's half to count
/// as fortification rather than front-line skirmishing.
const ENEMY_BODY_ROW: u16 = HALF_ARENA;

/// Classify which lateral half of the arena the opponent has fortified
/// more heavily, by counting their turrets deep in their own half.
///
/// Returns the *more fortified* flank; an attack lane should be chosen on
/// the opposite one. Ties resolve to [`Flank::Right`]. Deterministic for a
/// fixed board occupancy.
#[must_use]
pub fn assess_flank(arena: &impl Arena) -> Flank {
    let mut left = 0u32;
    let mut right = 0u32;

    for coord in arena_coords().filter(|coord| coord.y >= ENEMY_BODY_ROW) {
        for unit in arena.occupants(coord) {
            if unit.owner == PLAYER_THEM && unit.kind == UnitKind::Turret {
                match coord.flank() {
                    Flank::Left => left += 1,
                    Flank::Right => right += 1,
                }
            }
        }
    }

    if left > right {
        Flank::Left
    } else {
        Flank::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::TurnState;
    use crate::grid::Coord;
    use crate::test_support::{catalog, enemy_turret, turn_payload};

    #[test]
    fn test_left_heavy_fortification() {
        let catalog = catalog();
        let units: Vec<_> = [3, 5, 7, 3, 5, 7]
            .iter()
            .zip([15, 15, 15, 16, 16, 16])
            .map(|(&x, y)| enemy_turret(Coord::new(x, y)))
            .chain([
                enemy_turret(Coord::new(20, 15)),
                enemy_turret(Coord::new(22, 15)),
            ])
            .collect();
        let state = TurnState::new(&catalog, &turn_payload(0, 0.0, 0.0, &units));

        assert_eq!(assess_flank(&state), Flank::Left);
    }

    #[test]
    fn test_tie_resolves_right() {
        let catalog = catalog();
        let units = [
            enemy_turret(Coord::new(5, 15)),
            enemy_turret(Coord::new(22, 15)),
        ];
        let state = TurnState::new(&catalog, &turn_payload(0, 0.0, 0.0, &units));

        assert_eq!(assess_flank(&state), Flank::Right);
    }

    #[test]
    fn test_only_turrets_deep_in_enemy_half_count() {
        let catalog = catalog();
        // Walls deep left, a lone turret right: walls do not count.
        let mut units = vec![enemy_turret(Coord::new(22, 15))];
        for x in [3, 5, 7] {
            let mut wall = enemy_turret(Coord::new(x, 15));
            wall.kind = UnitKind::Wall;
            units.push(wall);
        }
        // Our own turret on the left half must not count either.
        let mut ours = enemy_turret(Coord::new(5, 15));
        ours.owner = crate::wire::PLAYER_US;
        units.push(ours);

        let state = TurnState::new(&catalog, &turn_payload(0, 0.0, 0.0, &units));
        assert_eq!(assess_flank(&state), Flank::Right);
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let catalog = catalog();
        let units = [
            enemy_turret(Coord::new(4, 16)),
            enemy_turret(Coord::new(6, 17)),
            enemy_turret(Coord::new(21, 16)),
        ];
        let state = TurnState::new(&catalog, &turn_payload(0, 0.0, 0.0, &units));

        assert_eq!(assess_flank(&state), assess_flank(&state));
    }
}
