//! Scripted beats outside active play: jumpscare, Foxy fade, Puppet dance
//! and the 6 AM card, plus the player acknowledgment that leaves them.
//! This module exists to keep ending flow separate from the tick pass.
//! It does not touch agents or the night clock.

use super::*;
use crate::content::rules;

impl Game {
    pub(super) fn advance_sequence(&mut self, dt_ms: u64) {
        match self.session.phase {
            Phase::Jumpscare { agent, elapsed_ms } => {
                let elapsed_ms = elapsed_ms + dt_ms;
                if elapsed_ms >= self.timings.jumpscare_ms {
                    self.complete_jumpscare(agent);
                } else {
                    self.session.phase = Phase::Jumpscare { agent, elapsed_ms };
                }
            }
            Phase::PuppetDance { elapsed_ms } => {
                let elapsed_ms = elapsed_ms + dt_ms;
                if elapsed_ms >= self.timings.puppet_dance_ms {
                    self.begin_jumpscare(AgentId::Puppet);
                } else {
                    self.session.phase = Phase::PuppetDance { elapsed_ms };
                }
            }
            Phase::SixAm { elapsed_ms } => {
                let elapsed_ms = elapsed_ms + dt_ms;
                if elapsed_ms >= self.timings.six_am_ms {
                    self.finish_night();
                } else {
                    self.session.phase = Phase::SixAm { elapsed_ms };
                }
            }
            Phase::FoxySequence { elapsed_ms, mut line_played } => {
                let elapsed_ms = (elapsed_ms + dt_ms).min(self.timings.foxy_sequence_ms());
                if !line_played && elapsed_ms >= rules::FOXY_LINE_AT_MS {
                    line_played = true;
                    self.log.push(LogEvent::FoxyLine);
                }
                self.session.phase = Phase::FoxySequence { elapsed_ms, line_played };
            }
            Phase::Menu | Phase::Playing | Phase::Checking(_) | Phase::GameOver { .. } => {}
        }
    }

    /// Signal from the renderer that the current animation ended early.
    /// Without it, sequences run on their fallback durations.
    pub fn animation_finished(&mut self) {
        match self.session.phase {
            Phase::Jumpscare { agent, .. } => self.complete_jumpscare(agent),
            Phase::PuppetDance { .. } => self.begin_jumpscare(AgentId::Puppet),
            Phase::SixAm { .. } => self.finish_night(),
            Phase::FoxySequence { .. } => {
                let elapsed_ms = self.timings.foxy_sequence_ms();
                self.session.phase = Phase::FoxySequence { elapsed_ms, line_played: true };
            }
            Phase::Menu | Phase::Playing | Phase::Checking(_) | Phase::GameOver { .. } => {}
        }
    }

    /// The player dismissed an ending screen.
    pub fn acknowledge(&mut self) -> Result<(), GameError> {
        match self.session.phase {
            Phase::SixAm { .. } => self.finish_night(),
            Phase::GameOver { .. } | Phase::FoxySequence { .. } => self.return_to_menu(),
            _ => return Err(GameError::NothingToAcknowledge),
        }
        Ok(())
    }

    fn complete_jumpscare(&mut self, agent: AgentId) {
        let next = if agent == AgentId::WitheredFoxy {
            Phase::FoxySequence { elapsed_ms: 0, line_played: false }
        } else {
            Phase::GameOver { agent }
        };
        self.session.enter(next);
        self.log.push(LogEvent::NightLost { agent });
        info!(agent = %agent, night = self.session.night, "night lost");
    }

    /// Banks a won night. Custom nights never advance progress.
    fn finish_night(&mut self) {
        if !self.session.custom {
            self.session.progress.record_night_won(self.session.night);
            self.progress_dirty = true;
            info!(
                next_night = self.session.progress.current_night,
                custom_unlocked = self.session.progress.custom_unlocked,
                "progress advanced"
            );
        }
        self.return_to_menu();
    }

    fn return_to_menu(&mut self) {
        self.session.enter(Phase::Menu);
        self.log.push(LogEvent::ReturnedToMenu);
    }
}
