//! Arena geometry: coordinates, the diamond board, and flanks.

use serde::{Deserialize, Serialize};

/// Side length of the square bounding the diamond arena.
pub const ARENA_SIZE: u16 = 28;

/// First row of the opponent's half. Rows below it belong to us.
pub const HALF_ARENA: u16 = ARENA_SIZE / 2;

/// A coordinate on the arena.
///
/// Serialized as a `[x, y]` pair, matching the engine's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u16; 2]", into = "[u16; 2]")]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Check whether this coordinate lies on the diamond arena.
    ///
    /// Row `y` on the lower half spans columns `13 - y ..= 14 + y`; the upper
    /// half mirrors it.
    #[must_use]
    pub const fn in_arena(self) -> bool {
        if self.x >= ARENA_SIZE || self.y >= ARENA_SIZE {
            return false;
        }
        let depth = if self.y < HALF_ARENA {
            self.y
        } else {
            ARENA_SIZE - 1 - self.y
        };
        self.x >= HALF_ARENA - 1 - depth && self.x <= HALF_ARENA + depth
    }

    /// Check whether this coordinate is on our half of the arena.
    #[must_use]
    pub const fn on_own_half(self) -> bool {
        self.y < HALF_ARENA
    }

    /// Which lateral half of the arena this coordinate falls on.
    #[must_use]
    pub const fn flank(self) -> Flank {
        if self.x < HALF_ARENA {
            Flank::Left
        } else {
            Flank::Right
        }
    }
}

impl From<[u16; 2]> for Coord {
    fn from(pair: [u16; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Coord> for [u16; 2] {
    fn from(coord: Coord) -> Self {
        [coord.x, coord.y]
    }
}

/// Iterate over every valid coordinate on the diamond arena.
pub fn arena_coords() -> impl Iterator<Item = Coord> {
    (0..ARENA_SIZE).flat_map(|y| {
        (0..ARENA_SIZE)
            .map(move |x| Coord::new(x, y))
            .filter(|coord| coord.in_arena())
    })
}

/// One lateral half of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flank {
    /// Columns left of the centerline.
    Left,
    /// Columns right of the centerline (also the tie-break winner).
    Right,
}

impl Flank {
    /// The other flank.
    #[must_use]
    pub const fn opposite(self) -> Flank {
        match self {
            Flank::Left => Flank::Right,
            Flank::Right => Flank::Left,
        }
    }
}
