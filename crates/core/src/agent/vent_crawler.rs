use super::{Behavior, Decision, Transition, route_step};
use crate::content::{AgentDef, Route, rules};
use crate::state::{AgentState, AgentStatus};

/// Crawls toward an office vent, waits out the prep window, then rolls for a
/// breach every tick at fixed odds.
#[derive(Debug)]
pub struct VentCrawler {
    route: Route,
    think_interval_ms: u64,
}

impl VentCrawler {
    pub fn new(def: &AgentDef) -> Self {
        Self { route: def.route, think_interval_ms: def.think_interval_ms }
    }
}

impl Behavior for VentCrawler {
    fn decide(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition {
        if !state.position.is_office_vent() {
            return route_step(state, &self.route, self.think_interval_ms, ctx);
        }

        let waited = ctx.now.saturating_sub(state.vent_arrived_at);
        if waited < rules::VENT_PREP_MS {
            state.status = AgentStatus::Preparing { remaining_ms: rules::VENT_PREP_MS - waited };
            return Transition::Stay;
        }
        let roll = ctx.dice.d20();
        if roll <= rules::VENT_BREACH_MAX_ROLL {
            return Transition::Breach;
        }
        state.status = AgentStatus::VentWait { roll };
        Transition::Stay
    }
}
