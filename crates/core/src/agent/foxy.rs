use super::{Behavior, Decision, Transition, route_step};
use crate::content::{AgentDef, Route, rules};
use crate::state::{AgentState, AgentStatus, Timers};
use crate::types::Location;

/// Leaves Parts Service on a think roll, then plays a staring contest in the
/// Hall: unwatched time builds toward an attack, watched time both eats into
/// it and builds toward a full retreat.
#[derive(Debug)]
pub struct Foxy {
    route: Route,
    think_interval_ms: u64,
}

impl Foxy {
    pub fn new(def: &AgentDef) -> Self {
        Self { route: def.route, think_interval_ms: def.think_interval_ms }
    }
}

impl Behavior for Foxy {
    fn initial_timers(&self) -> Timers {
        Timers::Foxy { unwatched_ms: 0, watched_ms: 0 }
    }

    fn decide(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition {
        if state.position != Location::Hall {
            return route_step(state, &self.route, self.think_interval_ms, ctx);
        }
        let Timers::Foxy { unwatched_ms, watched_ms } = &mut state.timers else {
            return Transition::Stay;
        };

        if ctx.signals.watching_hall {
            *watched_ms += ctx.dt_ms;
            *unwatched_ms = unwatched_ms.saturating_sub(ctx.dt_ms);
            if *watched_ms >= rules::FOXY_RETREAT_MS {
                *watched_ms = 0;
                *unwatched_ms = 0;
                state.think_deadline = ctx.now + self.think_interval_ms;
                return Transition::Retreat;
            }
            let remaining_ms = rules::FOXY_RETREAT_MS - *watched_ms;
            state.status = AgentStatus::Blinding { remaining_ms };
        } else {
            *unwatched_ms += ctx.dt_ms;
            if *unwatched_ms >= rules::FOXY_ATTACK_MS {
                return Transition::Breach;
            }
            let remaining_ms = rules::FOXY_ATTACK_MS - *unwatched_ms;
            state.status = AgentStatus::AttackIn { remaining_ms };
        }
        Transition::Stay
    }

    fn arrived(&self, state: &mut AgentState, to: Location, _now: u64) {
        if to == Location::Hall {
            state.timers = self.initial_timers();
        }
    }
}
