use super::{Behavior, Decision, Transition, route_step};
use crate::content::{AgentDef, Route, rules};
use crate::dice::Dice;
use crate::state::{AgentState, AgentStatus, BalloonBoyTimers, Timers};
use crate::types::{Location, LogEvent};

/// Chatters in the Game Area until every fourth line sends him into the
/// left vent. From the office vent he either gets turned away by a held
/// disguise or climbs into the office and jams the lights.
#[derive(Debug)]
pub struct BalloonBoy {
    route: Route,
    think_interval_ms: u64,
}

impl BalloonBoy {
    pub fn new(def: &AgentDef) -> Self {
        Self { route: def.route, think_interval_ms: def.think_interval_ms }
    }

    fn chatter(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition {
        let level = state.difficulty;
        let Timers::BalloonBoy(timers) = &mut state.timers else {
            return Transition::Stay;
        };

        if let Some(move_at) = timers.move_at {
            if ctx.now >= move_at {
                return Transition::Advance(Location::LeftAirVent);
            }
            return Transition::Stay;
        }
        if ctx.now.saturating_sub(timers.idle_since) < rules::BALLOON_BOY_IDLE_MS {
            state.status = AgentStatus::Idle;
            return Transition::Stay;
        }

        let interval = match timers.chatter_interval {
            Some(interval) => interval,
            None => {
                let interval = chatter_interval(level, ctx.dice);
                timers.chatter_interval = Some(interval);
                interval
            }
        };
        if ctx.now.saturating_sub(timers.last_chatter) >= interval {
            timers.last_chatter = ctx.now;
            timers.chatter_interval = None;
            timers.chatter_count += 1;
            ctx.events.push(LogEvent::BalloonBoyChatter { count: timers.chatter_count });
            if timers.chatter_count >= rules::BALLOON_BOY_CHATTERS_PER_MOVE {
                timers.move_at = Some(ctx.now + rules::BALLOON_BOY_MOVE_DELAY_MS);
            }
        }
        state.status = AgentStatus::Chatter { count: timers.chatter_count };
        Transition::Stay
    }

    fn lurk_in_vent(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition {
        let Timers::BalloonBoy(timers) = &mut state.timers else {
            return Transition::Stay;
        };
        if ctx.signals.disguise_active {
            let since = *timers.disguise_since.get_or_insert(ctx.now);
            if ctx.now - since >= rules::BALLOON_BOY_DISGUISE_HOLD_MS {
                return Transition::Retreat;
            }
        } else {
            timers.disguise_since = None;
        }

        let waited = ctx.now.saturating_sub(state.vent_arrived_at);
        if waited >= rules::BALLOON_BOY_VENT_BREACH_MS {
            return Transition::Breach;
        }
        let remaining_ms = rules::BALLOON_BOY_VENT_BREACH_MS - waited;
        state.status = AgentStatus::AttackIn { remaining_ms };
        Transition::Stay
    }
}

/// Faster chatter at higher levels; the top band is re-rolled per line.
fn chatter_interval(level: u8, dice: &mut dyn Dice) -> u64 {
    match level {
        0..=6 => 12_000,
        7..=12 => 8_000,
        _ => {
            let options = rules::BALLOON_BOY_FAST_CHATTER_MS;
            options[dice.pick(options.len())]
        }
    }
}

impl Behavior for BalloonBoy {
    fn initial_timers(&self) -> Timers {
        Timers::BalloonBoy(BalloonBoyTimers {
            idle_since: 0,
            last_chatter: 0,
            chatter_interval: None,
            chatter_count: 0,
            move_at: None,
            disguise_since: None,
        })
    }

    fn decide(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition {
        if state.difficulty < rules::BALLOON_BOY_MIN_LEVEL {
            state.status = AgentStatus::Idle;
            return Transition::Stay;
        }
        match state.position {
            Location::GameArea => self.chatter(state, ctx),
            Location::LeftAirVent => route_step(state, &self.route, self.think_interval_ms, ctx),
            Location::OfficeVentLeft => self.lurk_in_vent(state, ctx),
            _ => Transition::Stay,
        }
    }

    fn arrived(&self, state: &mut AgentState, to: Location, now: u64) {
        if let Timers::BalloonBoy(timers) = &mut state.timers {
            match to {
                Location::LeftAirVent => {
                    timers.move_at = None;
                    timers.chatter_count = 0;
                }
                Location::OfficeVentLeft => timers.disguise_since = None,
                Location::GameArea => {
                    timers.idle_since = now;
                    timers.disguise_since = None;
                }
                _ => {}
            }
        }
        if to == Location::Office {
            state.status = AgentStatus::InOffice;
        }
    }
}
