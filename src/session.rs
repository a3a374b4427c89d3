//! Line-oriented match session driver.
//!
//! The engine delivers one JSON message per line: the configuration first,
//! then for each turn zero or more frame payloads followed by the turn
//! snapshot. The driver answers every turn snapshot with one action batch
//! line. A malformed line is logged and skipped; forfeiting a whole match
//! over one bad payload would be worse than playing on with stale memory.

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::arena::TurnState;
use crate::config::UnitCatalog;
use crate::error::SessionError;
use crate::policy::{Policy, PolicyConfig};
use crate::wire::Message;

/// Drive a full match session over a message stream.
///
/// Returns when the engine sends an end message or the stream closes.
///
/// # Errors
///
/// Fails on stream I/O errors, on an unusable game-start configuration,
/// and on action batches that cannot be encoded. Malformed turn and frame
/// lines are logged and skipped instead.
pub fn run<R, W>(input: R, output: &mut W, config: PolicyConfig) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut policy = Policy::new(config);
    let mut catalog: Option<UnitCatalog> = None;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let message = match serde_json::from_str::<Message>(&line) {
            Ok(message) => message,
            Err(err) => {
                warn!("skipping malformed message: {err}");
                continue;
            }
        };

        match message {
            Message::Config(game_config) => {
                catalog = Some(UnitCatalog::from_config(&game_config)?);
                info!("unit catalog resolved");
            }
            Message::Frame(frame) => policy.ingest_frame(&frame),
            Message::Turn(payload) => {
                let Some(catalog) = catalog.as_ref() else {
                    warn!("turn payload before configuration, skipping");
                    continue;
                };
                let mut arena = TurnState::new(catalog, &payload);
                policy.play_turn(&mut arena);
                let batch = arena.into_actions();
                serde_json::to_writer(&mut *output, &batch)?;
                output.write_all(b"\n")?;
                output.flush()?;
            }
            Message::End => {
                info!("match over");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::config_json;
    use crate::wire::ActionBatch;

    fn turn_line(turn: u32, structural: f64, mobile: f64) -> String {
        format!(
            r#"{{"type":"turn","turn":{turn},"us":{{"structural":{structural},"mobile":{mobile}}},"them":{{"structural":0.0,"mobile":0.0}}}}"#
        )
    }

    fn run_session(script: &str) -> Vec<ActionBatch> {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, PolicyConfig::default()).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_one_batch_per_turn() {
        let script = format!(
            "{}\n{}\n{}\n{{\"type\":\"end\"}}\n",
            config_json(),
            turn_line(0, 10.0, 3.0),
            turn_line(1, 10.0, 3.0),
        );
        let batches = run_session(&script);
        assert_eq!(batches.len(), 2);
        assert!(!batches[0].is_empty());
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let script = format!(
            "{}\nnot json at all\n{}\n",
            config_json(),
            turn_line(0, 10.0, 3.0),
        );
        let batches = run_session(&script);
        assert_eq!(batches.len(), 1);
    }

    #[test]
    fn test_turn_before_config_is_skipped() {
        let script = format!("{}\n{}\n", turn_line(0, 10.0, 3.0), config_json());
        let batches = run_session(&script);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_no_messages_after_end() {
        let script = format!(
            "{}\n{{\"type\":\"end\"}}\n{}\n",
            config_json(),
            turn_line(0, 10.0, 3.0),
        );
        let batches = run_session(&script);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_bad_config_is_fatal() {
        let script = "{\"type\":\"config\",\"unitInformation\":[]}\n";
        let mut out = Vec::new();
        let result = run(script.as_bytes(), &mut out, PolicyConfig::default());
        assert!(result.is_err());
    }
}
