//! One xxh3 digest over everything a night's future depends on, so a
//! replayed journal can be compared against the live session in one number.

use std::hash::Hasher;

use super::*;
use crate::state::{CheckStage, Timers};
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u8(self.session.night);
        hasher.write_u8(u8::from(self.session.custom));
        hasher.write_u64(self.session.clock.now());
        hasher.write_u8(self.session.clock.hour());
        hasher.write_u64(self.session.clock.hour_elapsed_ms());
        hasher.write_u8(u8::from(self.session.balloon_boy_in_office));
        write_phase(&mut hasher, self.session.phase);

        for agent in self.roster.agents() {
            let state = &agent.state;
            hasher.write_u8(state.position as u8);
            hasher.write_u8(state.difficulty);
            hasher.write_u64(state.think_deadline);
            hasher.write_u64(state.vent_arrived_at);
            match state.timers {
                Timers::None => hasher.write_u8(0),
                Timers::Foxy { unwatched_ms, watched_ms } => {
                    hasher.write_u8(1);
                    hasher.write_u64(unwatched_ms);
                    hasher.write_u64(watched_ms);
                }
                Timers::Puppet(puppet) => {
                    hasher.write_u8(2);
                    hasher.write_u8(puppet.charge);
                    hasher.write_u64(puppet.last_discharge);
                    hasher.write_u64(puppet.woke_at);
                    hasher.write_u64(puppet.recharge_since.unwrap_or(u64::MAX));
                }
                Timers::BalloonBoy(timers) => {
                    hasher.write_u8(3);
                    hasher.write_u64(timers.idle_since);
                    hasher.write_u64(timers.last_chatter);
                    hasher.write_u64(timers.chatter_interval.unwrap_or(u64::MAX));
                    hasher.write_u8(timers.chatter_count);
                    hasher.write_u64(timers.move_at.unwrap_or(u64::MAX));
                    hasher.write_u64(timers.disguise_since.unwrap_or(u64::MAX));
                }
            }
        }
        hasher.finish()
    }
}

fn write_phase(hasher: &mut Xxh3, phase: Phase) {
    hasher.write_u8(phase.kind() as u8);
    match phase {
        Phase::Checking(window) => {
            hasher.write_u8(window.agent.index() as u8);
            hasher.write_u64(window.started_at);
            match window.stage {
                CheckStage::Failing => hasher.write_u64(u64::MAX),
                CheckStage::Holding { since } => hasher.write_u64(since),
            }
        }
        Phase::Jumpscare { agent, elapsed_ms } => {
            hasher.write_u8(agent.index() as u8);
            hasher.write_u64(elapsed_ms);
        }
        Phase::GameOver { agent } => hasher.write_u8(agent.index() as u8),
        Phase::FoxySequence { elapsed_ms, line_played } => {
            hasher.write_u64(elapsed_ms);
            hasher.write_u8(u8::from(line_played));
        }
        Phase::PuppetDance { elapsed_ms } | Phase::SixAm { elapsed_ms } => {
            hasher.write_u64(elapsed_ms)
        }
        Phase::Menu | Phase::Playing => {}
    }
}
