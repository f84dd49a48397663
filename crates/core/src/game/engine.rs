//! Per-tick simulation pass for active play.
//! This module exists to order one tick: clock, signal masking, agent pass,
//! threat resolution, then ambient effects.
//! It does not own the rules for what an office arrival means.

use super::*;
use crate::agent::Decision;

impl Game {
    /// Advances the session by one tick of `dt_ms`. Outside active play only
    /// the current sequence timer moves; agents and the night clock stay put.
    pub fn advance(&mut self, signals: &PlayerSignals, dt_ms: u64) -> AdvanceResult {
        let log_start = self.log.len();
        self.tick += 1;
        if self.session.phase.kind().is_active() {
            self.advance_active(signals, dt_ms);
        } else {
            self.advance_sequence(dt_ms);
        }
        AdvanceResult {
            tick: self.tick,
            phase: self.session.phase.kind(),
            events: self.log[log_start..].to_vec(),
        }
    }

    fn advance_active(&mut self, raw: &PlayerSignals, dt_ms: u64) {
        if let Some(hour) = self.session.clock.advance(dt_ms) {
            self.log.push(LogEvent::HourChanged { hour });
            info!(hour, night = self.session.night, "hour changed");
            if self.session.clock.is_dawn() {
                self.begin_six_am();
                return;
            }
        }

        let signals = self.effective_signals(raw);
        let now = self.session.clock.now();
        let mut ctx = Decision {
            now,
            dt_ms,
            signals: &signals,
            dice: self.dice.as_mut(),
            timings: &self.timings,
            events: &mut self.log,
        };
        self.roster.update_all(&mut ctx);
        self.note_balloon_boy_arrival();

        if self.session.phase == Phase::Playing {
            self.resolve_intruders(&signals, now);
        }
        if self.session.phase.kind().is_active() {
            self.roll_puppet_dance(&signals);
        }
        if let Phase::Checking(window) = self.session.phase {
            self.run_check_window(window, &signals, now);
        }
        if self.session.phase.kind().is_active() {
            self.session.ambient = self.ambient_for(&signals);
        }
    }

    /// Applies everything that overrides raw input: the disguise and the
    /// monitor both block the lights, Balloon Boy in the office jams them,
    /// and camera-only actions need the monitor up.
    fn effective_signals(&mut self, raw: &PlayerSignals) -> PlayerSignals {
        let jammed = self.session.balloon_boy_in_office;
        let blind = raw.disguise_active || raw.observation_active || jammed;

        let trying_light = raw.any_light() && !raw.disguise_active && !raw.observation_active;
        if jammed && trying_light {
            if !self.session.lights_jam_latch {
                self.session.lights_jam_latch = true;
                self.log.push(LogEvent::LightsJammed);
            }
        } else {
            self.session.lights_jam_latch = false;
        }

        PlayerSignals {
            watching_hall: raw.watching_hall && !blind,
            light_left_vent: raw.light_left_vent && !blind,
            light_right_vent: raw.light_right_vent && !blind,
            recharge_requested: raw.recharge_requested && raw.observation_active,
            camera_light: raw.camera_light && raw.observation_active,
            ..*raw
        }
    }

    fn note_balloon_boy_arrival(&mut self) {
        if self.session.balloon_boy_in_office
            || !self.roster.is_in(AgentId::BalloonBoy, Location::Office)
        {
            return;
        }
        self.session.balloon_boy_in_office = true;
        self.log.push(LogEvent::BalloonBoyInOffice);
        info!("balloon boy reached the office, lights jammed");
    }

    fn ambient_for(&self, signals: &PlayerSignals) -> AmbientState {
        let puppet = &self.roster.agent(AgentId::Puppet).state;
        let charge = puppet.charge().unwrap_or(0);
        let on_music_box = signals.observing(Camera::MUSIC_BOX);
        AmbientState {
            hall_ambience: self.roster.is_in(AgentId::WitheredFoxy, Location::Hall),
            vent_light: signals.light_left_vent || signals.light_right_vent,
            music_box: on_music_box && charge > 0,
            recharging: on_music_box
                && signals.recharge_requested
                && puppet.position == Location::Box
                && charge > 0,
            balloon_boy_laugh: self.session.balloon_boy_in_office,
            check_alarm: matches!(self.session.phase, Phase::Checking(_)),
        }
    }

    fn begin_six_am(&mut self) {
        self.roster.zero_levels();
        self.session.enter(Phase::SixAm { elapsed_ms: 0 });
        self.log.push(LogEvent::NightWon);
        info!(night = self.session.night, custom = self.session.custom, "6 AM reached");
    }
}
