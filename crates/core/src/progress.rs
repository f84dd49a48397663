//! Persisted player progress: saved night, custom-night unlock, report
//! cooldown and the installed extension record.
//! This module exists to define the save record and its fallback rules.
//! It does not own file paths or disk writes; the app crate does.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::difficulty::{FIRST_NIGHT, LAST_NIGHT};

pub const REPORT_COOLDOWN_S: u64 = 600;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRecord {
    pub name: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub current_night: u8,
    pub custom_unlocked: bool,
    pub last_report_unix_s: u64,
    pub installed_extension: Option<ExtensionRecord>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_night: FIRST_NIGHT,
            custom_unlocked: false,
            last_report_unix_s: 0,
            installed_extension: None,
        }
    }
}

impl Progress {
    /// Parses a saved record. Anything unreadable falls back to a fresh save;
    /// an out-of-range night is clamped.
    pub fn parse_or_default(text: &str) -> Self {
        match serde_json::from_str::<Progress>(text) {
            Ok(mut progress) => {
                progress.current_night = progress.current_night.clamp(FIRST_NIGHT, LAST_NIGHT);
                progress
            }
            Err(error) => {
                warn!(%error, "save record unreadable, starting from night 1");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of plain fields cannot fail to serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Moves to the night after `completed`. The custom night unlocks once
    /// the final night becomes reachable.
    pub fn record_night_won(&mut self, completed: u8) {
        self.current_night = completed.saturating_add(1).min(LAST_NIGHT);
        if self.current_night == LAST_NIGHT {
            self.custom_unlocked = true;
        }
    }

    pub fn report_cooldown_remaining(&self, now_unix_s: u64) -> u64 {
        let elapsed = now_unix_s.saturating_sub(self.last_report_unix_s);
        REPORT_COOLDOWN_S.saturating_sub(elapsed)
    }

    pub fn record_report(&mut self, now_unix_s: u64) {
        self.last_report_unix_s = now_unix_s;
    }
}
