//! Serde types for the payloads the core exchanges with the match engine.
//!
//! The transport itself (sockets, framing, timeouts) belongs to the engine;
//! these types describe only the interface the core consumes: the game-start
//! configuration, one state payload per turn, zero or more event payloads
//! per simulation frame, and the action batch submitted at end of turn.

use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, UnitKind, UNIT_KIND_COUNT};
use crate::grid::Coord;

/// Player identifier in frame data: `1` is us, `2` the opponent.
pub type PlayerId = u8;

/// Our own player id.
pub const PLAYER_US: PlayerId = 1;

/// The opponent's player id.
pub const PLAYER_THEM: PlayerId = 2;

/// One inbound message from the engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// Game-start configuration, sent once before the first turn.
    Config(GameConfig),
    /// Per-turn state snapshot; the core must answer with an action batch.
    Turn(TurnPayload),
    /// Intra-turn simulation frame events.
    Frame(FramePayload),
    /// The match is over; no further messages follow.
    End,
}

/// Current amounts of one player's two resource pools.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ResourceState {
    /// Slow-regenerating structural pool.
    pub structural: f64,
    /// Fast-regenerating mobile pool.
    pub mobile: f64,
    /// Engine-projected mobile amount for next turn.
    ///
    /// Only populated for the opponent; the core never projects its own
    /// pools and only reads current amounts for itself.
    #[serde(default)]
    pub projected_mobile: f64,
}

/// A unit standing on the board at the start of a turn.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UnitOnBoard {
    /// Kind, by wire index.
    pub kind: UnitKind,
    /// Owning player.
    pub owner: PlayerId,
    /// Board location.
    pub location: Coord,
    /// Remaining health.
    #[serde(default)]
    pub health: f64,
}

/// Per-turn state snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnPayload {
    /// Current turn number, starting at zero.
    pub turn: u32,
    /// Our resource pools.
    pub us: ResourceState,
    /// The opponent's resource pools, including the projected mobile amount.
    pub them: ResourceState,
    /// Every unit currently on the board.
    #[serde(default)]
    pub units: Vec<UnitOnBoard>,
}

/// A breach: a mobile unit reached the defending player's edge.
#[derive(Debug, Clone, Deserialize)]
pub struct BreachEvent {
    /// Edge cell where the breach happened.
    pub location: Coord,
    /// Damage scored by the breach.
    #[serde(default)]
    pub damage: f64,
    /// Engine id of the breaching unit.
    #[serde(default)]
    pub unit_id: String,
    /// Player who owns the breaching unit. A breach owned by the opponent
    /// means *we* were scored on.
    pub owner: PlayerId,
}

/// Counts of units on the board per kind, in wire index order.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UnitCounts {
    /// Our units.
    pub us: [u32; UNIT_KIND_COUNT],
    /// The opponent's units.
    pub them: [u32; UNIT_KIND_COUNT],
}

/// Intra-turn simulation frame events.
#[derive(Debug, Clone, Deserialize)]
pub struct FramePayload {
    /// Sub-frame index within the turn, starting at zero.
    pub frame: u32,
    /// Breach events that occurred during this frame.
    #[serde(default)]
    pub breaches: Vec<BreachEvent>,
    /// Per-kind unit counts; the engine sends these on the first sub-frame
    /// of each turn only.
    #[serde(default)]
    pub unit_counts: Option<UnitCounts>,
}

/// One placement intent: place `count` copies of a kind at a location.
///
/// The engine may place fewer than requested when resources or occupancy
/// run out; the submitted count is a request, never a guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Engine shorthand of the unit kind.
    pub unit: String,
    /// Target cell.
    pub location: Coord,
    /// Requested number of copies.
    pub count: u32,
}

/// The ordered action batch submitted at end of turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionBatch {
    /// Placement intents, in issue order.
    pub placements: Vec<Placement>,
    /// Stationary units to remove, in issue order.
    pub removals: Vec<Coord>,
}

impl ActionBatch {
    /// Check whether the batch contains no actions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty() && self.removals.is_empty()
    }
}
