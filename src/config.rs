//! Unit kinds and the game-start unit catalog.
//!
//! The engine describes the six unit kinds in its configuration payload at
//! game start. The catalog resolves that free-form list into a closed
//! enumeration with an immutable kind -> (shorthand, cost, damage) table;
//! after construction nothing in the core touches the raw configuration
//! again.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of unit kinds in a standard match.
pub const UNIT_KIND_COUNT: usize = 6;

/// The closed set of unit kinds, in wire index order.
///
/// The first three are stationary (they occupy a cell until destroyed or
/// removed), the last three are mobile (spawned, then driven by the engine
/// and no longer owned by the core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UnitKind {
    /// Cheap blocking wall.
    Wall,
    /// Shield projector that boosts nearby friendly mobile units.
    Shield,
    /// Stationary turret that fires on enemy mobile units.
    Turret,
    /// Fast, fragile rush unit.
    Fast,
    /// Slow siege unit with long-range structure damage.
    Siege,
    /// Disruptor that intercepts enemy mobile units.
    Disruptor,
}

/// Whether a unit kind occupies a cell or moves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Occupies a cell until destroyed or removed.
    Stationary,
    /// Spawned and then driven by the engine.
    Mobile,
}

/// The two independently replenishing resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// Slow-regenerating pool, spent on stationary kinds.
    Structural,
    /// Fast-regenerating pool, spent on mobile kinds.
    Mobile,
}

impl UnitKind {
    /// All kinds, in wire index order.
    pub const ALL: [UnitKind; UNIT_KIND_COUNT] = [
        UnitKind::Wall,
        UnitKind::Shield,
        UnitKind::Turret,
        UnitKind::Fast,
        UnitKind::Siege,
        UnitKind::Disruptor,
    ];

    /// Wire index of this kind (position in the configuration unit list).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Classify this kind as stationary or mobile.
    #[must_use]
    pub const fn category(self) -> UnitCategory {
        match self {
            UnitKind::Wall | UnitKind::Shield | UnitKind::Turret => UnitCategory::Stationary,
            UnitKind::Fast | UnitKind::Siege | UnitKind::Disruptor => UnitCategory::Mobile,
        }
    }

    /// Which resource pool pays for placements of this kind.
    #[must_use]
    pub const fn pool(self) -> PoolKind {
        match self.category() {
            UnitCategory::Stationary => PoolKind::Structural,
            UnitCategory::Mobile => PoolKind::Mobile,
        }
    }
}

impl TryFrom<u8> for UnitKind {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        UnitKind::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(ConfigError::UnknownKind(index))
    }
}

impl From<UnitKind> for u8 {
    #[allow(clippy::cast_possible_truncation)]
    fn from(kind: UnitKind) -> Self {
        // Index always fits: there are six kinds.
        kind.index() as u8
    }
}

/// One unit entry from the game-start configuration payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInfo {
    /// Engine shorthand used when submitting placements.
    pub shorthand: String,
    /// Display name, unused by the policy but kept for diagnostics.
    #[serde(default)]
    pub display: String,
    /// Placement cost in the kind's resource pool.
    pub cost: f64,
    /// Per-hit damage dealt by this kind (zero for non-attacking kinds).
    #[serde(default)]
    pub damage: f64,
}

/// The game-start configuration payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Unit entries in wire index order.
    pub unit_information: Vec<UnitInfo>,
}

/// Immutable kind -> (shorthand, cost, damage) lookup table.
///
/// Built once from the configuration and treated as static for the match.
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    units: [UnitInfo; UNIT_KIND_COUNT],
}

impl UnitCatalog {
    /// Resolve a catalog from the game-start configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnitCount`] when the payload does not describe
    /// exactly one entry per kind, or [`ConfigError::EmptyShorthand`] when an
    /// entry cannot be used to submit placements.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let units: [UnitInfo; UNIT_KIND_COUNT] = config
            .unit_information
            .clone()
            .try_into()
            .map_err(|entries: Vec<UnitInfo>| ConfigError::UnitCount(entries.len()))?;

        for (index, unit) in units.iter().enumerate() {
            if unit.shorthand.is_empty() {
                return Err(ConfigError::EmptyShorthand(index));
            }
        }

        Ok(Self { units })
    }

    /// Engine shorthand for a kind.
    #[must_use]
    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.units[kind.index()].shorthand
    }

    /// Placement cost for a kind.
    #[must_use]
    pub fn cost(&self, kind: UnitKind) -> f64 {
        self.units[kind.index()].cost
    }

    /// Per-hit damage for a kind.
    #[must_use]
    pub fn damage(&self, kind: UnitKind) -> f64 {
        self.units[kind.index()].damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GameConfig {
        let shorthands = ["FF", "EF", "DF", "PI", "EI", "SI"];
        let costs = [1.0, 4.0, 3.0, 1.0, 3.0, 1.0];
        let damages = [0.0, 0.0, 4.0, 1.0, 3.0, 10.0];

        GameConfig {
            unit_information: (0..UNIT_KIND_COUNT)
                .map(|i| UnitInfo {
                    shorthand: shorthands[i].to_string(),
                    display: String::new(),
                    cost: costs[i],
                    damage: damages[i],
                })
                .collect(),
        }
    }

    #[test]
    fn test_catalog_from_config() {
        let catalog = UnitCatalog::from_config(&sample_config()).unwrap();
        assert_eq!(catalog.shorthand(UnitKind::Fast), "PI");
        assert!((catalog.cost(UnitKind::Shield) - 4.0).abs() < f64::EPSILON);
        assert!((catalog.damage(UnitKind::Turret) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_rejects_wrong_entry_count() {
        let mut config = sample_config();
        config.unit_information.pop();
        assert_eq!(
            UnitCatalog::from_config(&config).unwrap_err(),
            ConfigError::UnitCount(5)
        );
    }

    #[test]
    fn test_catalog_rejects_empty_shorthand() {
        let mut config = sample_config();
        config.unit_information[2].shorthand.clear();
        assert_eq!(
            UnitCatalog::from_config(&config).unwrap_err(),
            ConfigError::EmptyShorthand(2)
        );
    }

    #[test]
    fn test_kind_wire_index_round_trip() {
        for kind in UnitKind::ALL {
            let index = u8::from(kind);
            assert_eq!(UnitKind::try_from(index).unwrap(), kind);
        }
        assert_eq!(
            UnitKind::try_from(6),
            Err(ConfigError::UnknownKind(6))
        );
    }

    #[test]
    fn test_category_partition() {
        let stationary: Vec<_> = UnitKind::ALL
            .iter()
            .filter(|k| k.category() == UnitCategory::Stationary)
            .collect();
        assert_eq!(
            stationary,
            [&UnitKind::Wall, &UnitKind::Shield, &UnitKind::Turret]
        );
        assert_eq!(UnitKind::Fast.pool(), PoolKind::Mobile);
        assert_eq!(UnitKind::Wall.pool(), PoolKind::Structural);
    }
}
