//! Input journal: the seed, the starting save and every input the session
//! consumed, in order. Replaying it reproduces the session exactly.

use serde::{Deserialize, Serialize};

use crate::progress::Progress;
use crate::types::{AgentId, NightMode, PlayerSignals};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub seed: u64,
    pub progress: Progress,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    StartNight { mode: NightMode },
    SetCustomLevel { agent: AgentId, level: u8 },
    Frame { dt_ms: u64, signals: PlayerSignals },
    AnimationFinished,
    Acknowledge,
}

impl InputJournal {
    pub fn new(seed: u64, progress: Progress) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: env!("CARGO_PKG_VERSION").to_string(),
            seed,
            progress,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }

    pub fn append_start(&mut self, mode: NightMode) {
        self.append(InputPayload::StartNight { mode });
    }

    pub fn append_frame(&mut self, dt_ms: u64, signals: PlayerSignals) {
        self.append(InputPayload::Frame { dt_ms, signals });
    }

    pub fn append_acknowledge(&mut self) {
        self.append(InputPayload::Acknowledge);
    }

    pub fn frame_count(&self) -> usize {
        self.inputs
            .iter()
            .filter(|record| matches!(record.payload, InputPayload::Frame { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_numbered_in_append_order() {
        let mut journal = InputJournal::new(5, Progress::default());
        journal.append_start(NightMode::Continue);
        journal.append_frame(33, PlayerSignals::default());
        journal.append_acknowledge();
        let seqs: Vec<u64> = journal.inputs.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(journal.frame_count(), 1);
    }

    #[test]
    fn journal_survives_json() {
        let mut journal = InputJournal::new(5, Progress::default());
        journal.append(InputPayload::SetCustomLevel { agent: AgentId::Puppet, level: 12 });
        journal.append_frame(16, PlayerSignals { disguise_active: true, ..Default::default() });
        let text = serde_json::to_string(&journal).expect("journal serializes");
        let back: InputJournal = serde_json::from_str(&text).expect("journal parses");
        assert_eq!(back, journal);
    }
}
