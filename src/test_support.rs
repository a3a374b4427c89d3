//! Shared fixtures for unit tests.

use std::collections::HashMap;

use crate::arena::PathOracle;
use crate::config::{GameConfig, UnitCatalog, UnitInfo, UnitKind, UNIT_KIND_COUNT};
use crate::grid::Coord;
use crate::wire::{
    BreachEvent, FramePayload, PlayerId, ResourceState, TurnPayload, UnitCounts, UnitOnBoard,
    PLAYER_THEM,
};

const SHORTHANDS: [&str; UNIT_KIND_COUNT] = ["FF", "EF", "DF", "PI", "EI", "SI"];
const COSTS: [f64; UNIT_KIND_COUNT] = [1.0, 4.0, 3.0, 1.0, 3.0, 1.0];
const DAMAGES: [f64; UNIT_KIND_COUNT] = [0.0, 0.0, 4.0, 1.0, 3.0, 10.0];

/// A catalog with starter-game shorthands, costs and damage values.
pub(crate) fn catalog() -> UnitCatalog {
    let config = GameConfig {
        unit_information: (0..UNIT_KIND_COUNT)
            .map(|i| UnitInfo {
                shorthand: SHORTHANDS[i].to_string(),
                display: String::new(),
                cost: COSTS[i],
                damage: DAMAGES[i],
            })
            .collect(),
    };
    UnitCatalog::from_config(&config).expect("fixture config is valid")
}

/// The same catalog as [`catalog`], as a config message line.
pub(crate) fn config_json() -> String {
    let units: Vec<String> = (0..UNIT_KIND_COUNT)
        .map(|i| {
            format!(
                r#"{{"shorthand":"{}","cost":{},"damage":{}}}"#,
                SHORTHANDS[i], COSTS[i], DAMAGES[i]
            )
        })
        .collect();
    format!(
        r#"{{"type":"config","unitInformation":[{}]}}"#,
        units.join(",")
    )
}

/// A turn payload with the given own pools and board units; the opponent's
/// pools are zeroed.
pub(crate) fn turn_payload(
    turn: u32,
    structural: f64,
    mobile: f64,
    units: &[UnitOnBoard],
) -> TurnPayload {
    turn_payload_vs(turn, structural, mobile, 0.0, units)
}

/// A turn payload that also sets the opponent's projected mobile amount.
pub(crate) fn turn_payload_vs(
    turn: u32,
    structural: f64,
    mobile: f64,
    projected_enemy_mobile: f64,
    units: &[UnitOnBoard],
) -> TurnPayload {
    TurnPayload {
        turn,
        us: ResourceState {
            structural,
            mobile,
            projected_mobile: 0.0,
        },
        them: ResourceState {
            structural: 0.0,
            mobile: 0.0,
            projected_mobile: projected_enemy_mobile,
        },
        units: units.to_vec(),
    }
}

/// An opponent turret at full health.
pub(crate) fn enemy_turret(location: Coord) -> UnitOnBoard {
    UnitOnBoard {
        kind: UnitKind::Turret,
        owner: PLAYER_THEM,
        location,
        health: 75.0,
    }
}

/// A frame carrying a single breach event.
pub(crate) fn breach_frame(frame: u32, location: Coord, owner: PlayerId) -> FramePayload {
    FramePayload {
        frame,
        breaches: vec![BreachEvent {
            location,
            damage: 1.0,
            unit_id: "42".to_string(),
            owner,
        }],
        unit_counts: None,
    }
}

/// A frame carrying per-kind unit counts with the given opponent fast-unit
/// count.
pub(crate) fn count_frame(frame: u32, enemy_fast: u32) -> FramePayload {
    let mut them = [0u32; UNIT_KIND_COUNT];
    them[UnitKind::Fast.index()] = enemy_fast;
    FramePayload {
        frame,
        breaches: Vec::new(),
        unit_counts: Some(UnitCounts {
            us: [0; UNIT_KIND_COUNT],
            them,
        }),
    }
}

/// Path oracle stub: units walk straight up their own column to the
/// midline; attacker exposure is whatever the test registered per cell.
#[derive(Debug, Default)]
pub(crate) struct StubPaths {
    attackers: HashMap<Coord, usize>,
}

impl StubPaths {
    pub(crate) fn straight_up() -> Self {
        Self::default()
    }

    pub(crate) fn with_attackers(mut self, cell: Coord, count: usize) -> Self {
        self.attackers.insert(cell, count);
        self
    }
}

impl PathOracle for StubPaths {
    fn path_to_edge(&self, from: Coord) -> Vec<Coord> {
        (from.y..=13).map(|y| Coord::new(from.x, y)).collect()
    }

    fn attackers_at(&self, cell: Coord) -> usize {
        self.attackers.get(&cell).copied().unwrap_or(0)
    }
}
