//! Stderr logging setup for the agent binary.
//!
//! Stdout carries the match protocol, so every diagnostic line goes to
//! stderr where the engine's harness collects it.

use log::LevelFilter;

/// Install the global logger at the given verbosity.
pub(crate) fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {message}",
                record.level(),
                record.target()
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}
