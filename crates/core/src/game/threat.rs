//! Office arrivals and the disguise check window.
//! This module exists to turn agent positions into session transitions:
//! straight to a jumpscare, into a check, or back to play.
//! It does not move agents except to send a checked agent home.

use super::*;
use crate::content::rules;
use crate::state::{AgentStatus, CheckStage, CheckWindow};

impl Game {
    pub(super) fn resolve_intruders(&mut self, signals: &PlayerSignals, now: u64) {
        let Some(agent) = self.roster.first_intruder() else {
            return;
        };
        if agent.breaches_unconditionally() || signals.observation_active {
            if signals.observation_active {
                self.log.push(LogEvent::ObservationForcedClosed);
            }
            self.begin_jumpscare(agent);
            return;
        }

        self.roster.agent_mut(agent).state.status = AgentStatus::Checking;
        self.session.enter(Phase::Checking(CheckWindow {
            agent,
            started_at: now,
            stage: CheckStage::Failing,
        }));
        self.log.push(LogEvent::CheckStarted { agent });
        info!(agent = %agent, now, "office check started");
    }

    pub(super) fn run_check_window(
        &mut self,
        window: CheckWindow,
        signals: &PlayerSignals,
        now: u64,
    ) {
        match window.stage {
            CheckStage::Failing if signals.disguise_active => {
                let stage = CheckStage::Holding { since: now };
                self.session.phase = Phase::Checking(CheckWindow { stage, ..window });
                self.log.push(LogEvent::CheckDisguised { agent: window.agent });
            }
            CheckStage::Failing => {
                if now.saturating_sub(window.started_at) >= rules::CHECK_FAIL_MS {
                    self.begin_jumpscare(window.agent);
                }
            }
            CheckStage::Holding { .. } if !signals.disguise_active => {
                self.begin_jumpscare(window.agent);
            }
            CheckStage::Holding { since } => {
                if now.saturating_sub(since) < rules::CHECK_HOLD_MS {
                    return;
                }
                if !self.roster.send_home(window.agent, now) {
                    return;
                }
                self.session.enter(Phase::Playing);
                self.log.push(LogEvent::CheckPassed { agent: window.agent });
                info!(agent = %window.agent, now, "office check passed");
            }
        }
    }

    /// Watching the music-box feed with the light on after the Puppet has
    /// left its box (or run dry) can start the dance.
    pub(super) fn roll_puppet_dance(&mut self, signals: &PlayerSignals) {
        if !(signals.observing(Camera::MUSIC_BOX) && signals.camera_light) {
            return;
        }
        let puppet = &self.roster.agent(AgentId::Puppet).state;
        let boxed = puppet.position == Location::Box && puppet.charge().unwrap_or(0) > 0;
        if boxed || !self.dice.chance(rules::PUPPET_DANCE_PERCENT) {
            return;
        }
        self.session.enter(Phase::PuppetDance { elapsed_ms: 0 });
        self.log.push(LogEvent::PuppetDanceStarted);
        info!("puppet dance started");
    }

    pub(super) fn begin_jumpscare(&mut self, agent: AgentId) {
        self.session.enter(Phase::Jumpscare { agent, elapsed_ms: 0 });
        self.log.push(LogEvent::JumpscareStarted { agent });
        info!(agent = %agent, night = self.session.night, "jumpscare");
    }
}
