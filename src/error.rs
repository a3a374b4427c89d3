//! Error types for the decision core.

use thiserror::Error;

use crate::config::UNIT_KIND_COUNT;

/// Errors raised while resolving the game-start configuration.
///
/// Everything else the core does degrades to a no-op on bad input; the
/// configuration is the one payload it cannot play without, because unit
/// kinds, costs and damage values are all resolved from it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration did not describe exactly one entry per unit kind.
    #[error("expected {UNIT_KIND_COUNT} unit entries, got {0}")]
    UnitCount(usize),
    /// A wire payload referenced a unit-kind index outside the catalog.
    #[error("unknown unit kind index {0}")]
    UnknownKind(u8),
    /// A unit entry carried a shorthand the engine would reject.
    #[error("unit entry {0} has an empty shorthand")]
    EmptyShorthand(usize),
}

/// Errors that abort a match session.
///
/// Malformed turn and frame payloads are deliberately *not* represented
/// here: they are logged and skipped so a single bad line never forfeits
/// the rest of the match.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The message stream could not be read or the action batch written.
    #[error("protocol stream error: {0}")]
    Io(#[from] std::io::Error),
    /// The game-start configuration was unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// An outbound action batch failed to serialize.
    #[error("action encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
