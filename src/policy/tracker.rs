//! Cross-turn memory of adversary behavior.
//!
//! The tracker is the only part of the core fed per-frame rather than
//! per-turn. It accumulates two append-only sequences for the lifetime of
//! the match: the cells where we were breached, and one opponent fast-unit
//! count per turn. Nothing is ever pruned or deduplicated; repeated
//! breaches at the same cell accumulate.

use log::{debug, warn};

use crate::grid::Coord;
use crate::wire::{FramePayload, PLAYER_US};
use crate::UnitKind;

/// Process-lifetime record of where and how hard the opponent has hit us.
#[derive(Debug, Clone, Default)]
pub struct ThreatTracker {
    breaches: Vec<Coord>,
    rush_counts: Vec<u32>,
}

impl ThreatTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one simulation-frame event payload.
    ///
    /// On the first sub-frame of a turn the opponent's current fast-unit
    /// count is appended as a proxy for how many rush units they committed.
    /// Every breach scored by a unit we do not own is recorded; breaches by
    /// our own units are the opponent's problem. A breach reported off the
    /// arena is dropped with a warning; recorded locations must stay safe
    /// to build around.
    pub fn ingest_frame(&mut self, frame: &FramePayload) {
        if frame.frame == 0 {
            if let Some(counts) = &frame.unit_counts {
                self.rush_counts.push(counts.them[UnitKind::Fast.index()]);
            }
        }

        for breach in &frame.breaches {
            if !breach.location.in_arena() {
                warn!(
                    "ignoring breach reported off the arena at ({}, {})",
                    breach.location.x, breach.location.y
                );
                continue;
            }
            if breach.owner != PLAYER_US {
                debug!(
                    "scored on at ({}, {})",
                    breach.location.x, breach.location.y
                );
                self.breaches.push(breach.location);
            }
        }
    }

    /// Cells where the opponent has breached us, in event order.
    #[must_use]
    pub fn breaches(&self) -> &[Coord] {
        &self.breaches
    }

    /// Observed opponent fast-unit counts, one entry per turn.
    #[must_use]
    pub fn rush_counts(&self) -> &[u32] {
        &self.rush_counts
    }

    /// Whether the opponent committed more rush units last turn than the
    /// turn before. Needs at least two observations.
    #[must_use]
    pub fn enemy_rushed_last_turn(&self) -> bool {
        match self.rush_counts.as_slice() {
            [.., previous, latest] => latest > previous,
            _ => false,
        }
    }
}
