use std::error::Error;
use std::fmt;

use tracing::debug;

use crate::game::Game;
use crate::journal::{InputJournal, InputPayload};
use crate::progress::Progress;
use crate::types::{GameError, NightOutcome, PhaseKind};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    /// The journal's records are not numbered 0, 1, 2, ...
    SequenceGap { expected: u64, found: u64 },
    /// The session refused an input it accepted when the journal was recorded.
    Rejected { seq: u64, error: GameError },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SequenceGap { expected, found } => {
                write!(f, "journal record {found} found where {expected} was expected")
            }
            Self::Rejected { seq, error } => write!(f, "journal record {seq} rejected: {error}"),
        }
    }
}

impl Error for ReplayError {}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_phase: PhaseKind,
    pub final_outcome: Option<NightOutcome>,
    pub final_snapshot_hash: u64,
    pub final_tick: u64,
    pub progress: Progress,
}

/// Feeds one recorded input to the session.
pub fn apply_input(game: &mut Game, payload: &InputPayload) -> Result<(), GameError> {
    match payload {
        InputPayload::StartNight { mode } => game.start_night(*mode),
        InputPayload::SetCustomLevel { agent, level } => {
            game.set_custom_level(*agent, *level);
            Ok(())
        }
        InputPayload::Frame { dt_ms, signals } => {
            game.advance(signals, *dt_ms);
            Ok(())
        }
        InputPayload::AnimationFinished => {
            game.animation_finished();
            Ok(())
        }
        InputPayload::Acknowledge => game.acknowledge(),
    }
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed, journal.progress.clone());
    for (expected, record) in (0u64..).zip(&journal.inputs) {
        if record.seq != expected {
            return Err(ReplayError::SequenceGap { expected, found: record.seq });
        }
        apply_input(&mut game, &record.payload)
            .map_err(|error| ReplayError::Rejected { seq: record.seq, error })?;
    }
    debug!(records = journal.inputs.len(), tick = game.current_tick(), "replay finished");

    Ok(ReplayResult {
        final_phase: game.phase(),
        final_outcome: game.outcome(),
        final_snapshot_hash: game.snapshot_hash(),
        final_tick: game.current_tick(),
        progress: game.progress().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::InputRecord;
    use crate::types::{AgentId, NightMode, PlayerSignals};

    fn recorded_night(seed: u64, frames: usize) -> (Game, InputJournal) {
        let progress = Progress { current_night: 3, ..Progress::default() };
        let mut game = Game::new(seed, progress.clone());
        let mut journal = InputJournal::new(seed, progress);

        journal.append_start(NightMode::Continue);
        game.start_night(NightMode::Continue).expect("menu can start a night");
        for frame in 0..frames {
            let signals = PlayerSignals {
                watching_hall: frame % 7 == 0,
                disguise_active: frame % 11 < 4,
                ..PlayerSignals::default()
            };
            journal.append_frame(33, signals);
            game.advance(&signals, 33);
        }
        (game, journal)
    }

    #[test]
    fn replay_matches_the_recorded_session() {
        let (game, journal) = recorded_night(2024, 900);
        let result = replay_to_end(&journal).expect("recorded journal replays");
        assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
        assert_eq!(result.final_tick, 900);
        assert_eq!(result.final_phase, game.phase());
    }

    #[test]
    fn rejected_input_reports_its_record() {
        let mut journal = InputJournal::new(1, Progress::default());
        journal.append_start(NightMode::Custom);
        assert_eq!(
            replay_to_end(&journal),
            Err(ReplayError::Rejected { seq: 0, error: GameError::CustomNightLocked })
        );
    }

    #[test]
    fn out_of_order_records_are_refused() {
        let mut journal = InputJournal::new(1, Progress::default());
        journal.inputs.push(InputRecord {
            seq: 3,
            payload: InputPayload::SetCustomLevel { agent: AgentId::ToyChica, level: 4 },
        });
        assert_eq!(
            replay_to_end(&journal),
            Err(ReplayError::SequenceGap { expected: 0, found: 3 })
        );
    }

    #[test]
    fn replayed_custom_edits_reach_the_night() {
        let progress = Progress { custom_unlocked: true, ..Progress::default() };
        let mut journal = InputJournal::new(9, progress);
        journal.append(InputPayload::SetCustomLevel { agent: AgentId::ToyFreddy, level: 20 });
        journal.append_start(NightMode::Custom);
        let result = replay_to_end(&journal).expect("custom journal replays");
        assert_eq!(result.final_phase, PhaseKind::Playing);
        assert_eq!(result.final_tick, 0);
    }
}
