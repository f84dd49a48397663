//! Night session orchestration: menu, night start, the per-tick pass and
//! the endings.
//! This module exists to own the single `SessionState` and the roster, and
//! to expose the narrow API the app and tools drive.
//! It does not own agent rules or persistence I/O.

use tracing::info;

use crate::content::ContentTimings;
use crate::dice::{Dice, SeededDice};
use crate::difficulty::{FIRST_NIGHT, NightConfig};
use crate::extension::{ExtensionContext, NightExtension};
use crate::progress::Progress;
use crate::roster::Roster;
use crate::state::{Phase, SessionState};
use crate::types::*;

mod engine;
mod hash;
mod sequences;
mod snapshot;
mod threat;

#[cfg(test)]
mod test_support;

pub use snapshot::{AgentView, Snapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvanceResult {
    pub tick: u64,
    pub phase: PhaseKind,
    /// Events emitted during this call, in order.
    pub events: Vec<LogEvent>,
}

pub struct Game {
    seed: u64,
    tick: u64,
    dice: Box<dyn Dice>,
    session: SessionState,
    roster: Roster,
    custom_table: NightConfig,
    timings: ContentTimings,
    extension: Option<Box<dyn NightExtension>>,
    log: Vec<LogEvent>,
    progress_dirty: bool,
}

impl Game {
    pub fn new(seed: u64, progress: Progress) -> Self {
        Self::with_dice(seed, progress, Box::new(SeededDice::new(seed)))
    }

    pub(crate) fn with_dice(seed: u64, progress: Progress, dice: Box<dyn Dice>) -> Self {
        Self {
            seed,
            tick: 0,
            dice,
            session: SessionState::new(progress),
            roster: Roster::new(),
            custom_table: NightConfig::custom_defaults(),
            timings: ContentTimings::default(),
            extension: None,
            log: Vec::new(),
            progress_dirty: false,
        }
    }

    pub fn with_timings(mut self, timings: ContentTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_extension(mut self, extension: Box<dyn NightExtension>) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn start_night(&mut self, mode: NightMode) -> Result<(), GameError> {
        if self.session.phase != Phase::Menu {
            return Err(GameError::NotInMenu);
        }
        let progress = &mut self.session.progress;
        let (night, custom, mut config) = match mode {
            NightMode::NewGame => {
                progress.current_night = FIRST_NIGHT;
                self.progress_dirty = true;
                (FIRST_NIGHT, false, NightConfig::preset(FIRST_NIGHT))
            }
            NightMode::Continue => {
                (progress.current_night, false, NightConfig::preset(progress.current_night))
            }
            NightMode::Custom => {
                if !progress.custom_unlocked {
                    return Err(GameError::CustomNightLocked);
                }
                (progress.current_night, true, self.custom_table.clone())
            }
        };

        if let Some(extension) = self.extension.as_mut() {
            extension.on_night_start(&mut ExtensionContext::new(night, custom, &mut config));
            info!(extension = extension.name(), night, "extension applied");
        }

        self.roster.reset(&config);
        self.session.begin_night(night, custom, config);
        self.log.push(LogEvent::NightStarted { night, custom });
        info!(night, custom, seed = self.seed, "night started");
        Ok(())
    }

    pub fn custom_table(&self) -> &NightConfig {
        &self.custom_table
    }

    /// Edits take effect the next time a custom night starts.
    pub fn set_custom_level(&mut self, agent: AgentId, level: u8) {
        self.custom_table.set(agent, level);
    }

    pub fn adjust_custom_level(&mut self, agent: AgentId, delta: i8) {
        self.custom_table.adjust(agent, delta);
    }

    /// Returns the progress record once after each change, for the caller
    /// to persist.
    pub fn take_progress_update(&mut self) -> Option<Progress> {
        if !self.progress_dirty {
            return None;
        }
        self.progress_dirty = false;
        Some(self.session.progress.clone())
    }

    /// Gates the bug-report channel on the saved cooldown. A granted report
    /// is stamped into the progress record.
    pub fn request_report(&mut self, now_unix_s: u64) -> Result<(), GameError> {
        let remaining_s = self.session.progress.report_cooldown_remaining(now_unix_s);
        if remaining_s > 0 {
            return Err(GameError::ReportCooldown { remaining_s });
        }
        self.session.progress.record_report(now_unix_s);
        self.progress_dirty = true;
        info!(now_unix_s, "report accepted");
        Ok(())
    }

    pub fn progress(&self) -> &Progress {
        &self.session.progress
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn phase(&self) -> PhaseKind {
        self.session.phase.kind()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// How the last night ended, once it has.
    pub fn outcome(&self) -> Option<NightOutcome> {
        match self.session.phase {
            Phase::SixAm { .. } => Some(NightOutcome::Survived),
            Phase::Jumpscare { agent, .. } | Phase::GameOver { agent } => {
                Some(NightOutcome::Killed(agent))
            }
            Phase::FoxySequence { .. } => Some(NightOutcome::Killed(AgentId::WitheredFoxy)),
            Phase::PuppetDance { .. } => Some(NightOutcome::Killed(AgentId::Puppet)),
            _ => None,
        }
    }
}
