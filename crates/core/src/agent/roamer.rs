use super::{Behavior, Decision, Transition, route_step};
use crate::content::{AgentDef, Route};
use crate::state::AgentState;

/// Walks its route one think at a time, ending with a walk into the office.
#[derive(Debug)]
pub struct Roamer {
    route: Route,
    think_interval_ms: u64,
}

impl Roamer {
    pub fn new(def: &AgentDef) -> Self {
        Self { route: def.route, think_interval_ms: def.think_interval_ms }
    }
}

impl Behavior for Roamer {
    fn decide(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition {
        route_step(state, &self.route, self.think_interval_ms, ctx)
    }
}
