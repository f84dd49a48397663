//! One animatronic: its fixed definition, its mutable state and the
//! archetype behavior that decides its next transition.
//! This module exists to apply a decided transition through the occupancy
//! gate so every archetype moves by the same rules.
//! It does not own threat resolution; the game reads positions afterwards.

mod balloon_boy;
mod foxy;
mod puppet;
mod roamer;
mod vent_crawler;

use std::fmt;

use tracing::debug;

use crate::content::{AgentDef, ContentTimings, Route, agent_def, rules};
use crate::dice::Dice;
use crate::occupancy::Occupancy;
use crate::state::{AgentState, AgentStatus, Timers};
use crate::types::{AgentId, Archetype, Location, LogEvent, PlayerSignals};

pub use balloon_boy::BalloonBoy;
pub use foxy::Foxy;
pub use puppet::Puppet;
pub use roamer::Roamer;
pub use vent_crawler::VentCrawler;

/// What an agent wants to do this tick. Only `Agent::apply` mutates position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    /// Claim the given location; refused if another agent holds it.
    Advance(Location),
    /// Enter the office unconditionally.
    Breach,
    /// Return to the start location.
    Retreat,
}

/// Everything an agent may consult while deciding. Other agents are only
/// reachable through the occupancy view handed to `Agent::update`.
pub struct Decision<'a> {
    pub now: u64,
    pub dt_ms: u64,
    pub signals: &'a PlayerSignals,
    pub dice: &'a mut dyn Dice,
    pub timings: &'a ContentTimings,
    pub events: &'a mut Vec<LogEvent>,
}

pub trait Behavior: fmt::Debug {
    fn initial_timers(&self) -> Timers {
        Timers::None
    }

    fn decide(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition;

    /// Hook run after a granted move, once `state.position` is `to`.
    fn arrived(&self, _state: &mut AgentState, _to: Location, _now: u64) {}
}

pub fn behavior_for(def: &AgentDef) -> Box<dyn Behavior> {
    match def.archetype {
        Archetype::Roamer => Box::new(Roamer::new(def)),
        Archetype::VentCrawler => Box::new(VentCrawler::new(def)),
        Archetype::Foxy => Box::new(Foxy::new(def)),
        Archetype::Puppet => Box::new(Puppet),
        Archetype::BalloonBoy => Box::new(BalloonBoy::new(def)),
    }
}

#[derive(Debug)]
pub struct Agent {
    pub def: AgentDef,
    pub state: AgentState,
    behavior: Box<dyn Behavior>,
}

impl Agent {
    pub fn new(def: AgentDef) -> Self {
        let behavior = behavior_for(&def);
        let state = AgentState {
            id: def.id,
            position: def.start,
            difficulty: 0,
            think_deadline: def.think_interval_ms,
            vent_arrived_at: 0,
            status: AgentStatus::Waiting,
            timers: behavior.initial_timers(),
        };
        Self { def, state, behavior }
    }

    pub fn from_id(id: AgentId) -> Self {
        Self::new(agent_def(id))
    }

    /// Back to the start of a night: start location, fresh timers, new level.
    pub fn reset(&mut self, difficulty: u8) {
        self.state = AgentState {
            id: self.def.id,
            position: self.def.start,
            difficulty,
            think_deadline: self.def.think_interval_ms,
            vent_arrived_at: 0,
            status: if difficulty == 0 { AgentStatus::Waiting } else { AgentStatus::Idle },
            timers: self.behavior.initial_timers(),
        };
    }

    /// After a passed office check: back to the start room with fresh timers
    /// and a late first think. Returns false if the room is held.
    pub fn send_home(&mut self, occupancy: &Occupancy<'_>, now: u64) -> bool {
        if !occupancy.try_claim(&mut self.state, self.def.start) {
            return false;
        }
        self.state.think_deadline =
            now + self.def.think_interval_ms + rules::CHECK_RETURN_DELAY_MS;
        self.state.vent_arrived_at = 0;
        self.state.status = AgentStatus::Returning;
        self.state.timers = self.behavior.initial_timers();
        true
    }

    pub fn update(&mut self, occupancy: &Occupancy<'_>, ctx: &mut Decision<'_>) {
        if self.state.difficulty == 0 || self.state.position == Location::Office {
            return;
        }
        let transition = self.behavior.decide(&mut self.state, ctx);
        self.apply(transition, occupancy, ctx);
    }

    fn apply(&mut self, transition: Transition, occupancy: &Occupancy<'_>, ctx: &mut Decision<'_>) {
        let from = self.state.position;
        let target = match transition {
            Transition::Stay => return,
            Transition::Advance(to) => to,
            Transition::Breach => Location::Office,
            Transition::Retreat => self.def.start,
        };

        if !occupancy.try_claim(&mut self.state, target) {
            debug!(agent = %self.def.id, %target, "claim refused");
            self.state.status = AgentStatus::Blocked(target);
            ctx.events.push(LogEvent::AgentBlocked { agent: self.def.id, target });
            return;
        }

        debug!(agent = %self.def.id, %from, to = %target, ?transition, "agent moved");
        ctx.events.push(LogEvent::AgentMoved { agent: self.def.id, from, to: target });
        if target.is_vent() {
            ctx.events.push(LogEvent::VentCrawl { agent: self.def.id, vent: target });
        }
        if target.is_office_vent() {
            self.state.vent_arrived_at = ctx.now;
        }
        self.state.status = match transition {
            Transition::Retreat => {
                ctx.events.push(LogEvent::AgentRetreated { agent: self.def.id });
                AgentStatus::Returning
            }
            _ if target == Location::Office => AgentStatus::Attacking,
            _ => AgentStatus::Moving(target),
        };
        self.behavior.arrived(&mut self.state, target, ctx.now);
    }
}

/// Consumes the think deadline if it has passed.
pub(crate) fn think_due(state: &mut AgentState, now: u64, interval_ms: u64) -> bool {
    if now < state.think_deadline {
        return false;
    }
    state.think_deadline = now + interval_ms;
    true
}

/// The general movement rule: on each think, roll a d20 against the level
/// and, on success, pick the next hop of the route.
pub(crate) fn route_step(
    state: &mut AgentState,
    route: &Route,
    interval_ms: u64,
    ctx: &mut Decision<'_>,
) -> Transition {
    if !think_due(state, ctx.now, interval_ms) {
        return Transition::Stay;
    }
    let Some(candidates) = route.next_from(state.position) else {
        state.status = AgentStatus::Idle;
        return Transition::Stay;
    };
    let roll = ctx.dice.d20();
    if roll > state.difficulty || candidates.is_empty() {
        state.status = AgentStatus::Idle;
        return Transition::Stay;
    }
    let target = match candidates {
        [only] => *only,
        _ => candidates[ctx.dice.pick(candidates.len())],
    };
    Transition::Advance(target)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    /// Runs one update of `agent` alone, with no other agents in the way.
    pub(crate) fn tick(
        agent: &mut Agent,
        now: u64,
        dt_ms: u64,
        signals: &PlayerSignals,
        dice: &mut dyn Dice,
    ) -> Vec<LogEvent> {
        let timings = ContentTimings::default();
        let mut events = Vec::new();
        let mut ctx = Decision { now, dt_ms, signals, dice, timings: &timings, events: &mut events };
        agent.update(&Occupancy::new(&[], &[]), &mut ctx);
        events
    }

    #[test]
    fn level_zero_never_leaves_start() {
        let mut agent = Agent::from_id(AgentId::ToyFreddy);
        agent.reset(0);
        let mut dice = ScriptedDice::d20s(&[1]);
        let signals = PlayerSignals::default();
        for step in 0..2_000 {
            tick(&mut agent, step * 33, 33, &signals, &mut dice);
        }
        assert_eq!(agent.state.position, Location::Stage);
        assert_eq!(agent.state.status, AgentStatus::Waiting);
    }

    #[test]
    fn roll_at_level_advances_and_roll_above_idles() {
        let mut agent = Agent::from_id(AgentId::ToyFreddy);
        agent.reset(10);
        let signals = PlayerSignals::default();

        let events = tick(&mut agent, 8_000, 33, &signals, &mut ScriptedDice::d20s(&[11]));
        assert!(events.is_empty());
        assert_eq!(agent.state.status, AgentStatus::Idle);
        assert_eq!(agent.state.think_deadline, 16_000);

        tick(&mut agent, 12_000, 33, &signals, &mut ScriptedDice::d20s(&[1]));
        assert_eq!(agent.state.position, Location::Stage, "no think before the deadline");

        let events = tick(&mut agent, 16_000, 33, &signals, &mut ScriptedDice::d20s(&[10]));
        assert_eq!(agent.state.position, Location::GameArea);
        assert_eq!(
            events,
            vec![LogEvent::AgentMoved {
                agent: AgentId::ToyFreddy,
                from: Location::Stage,
                to: Location::GameArea
            }]
        );
    }

    #[test]
    fn blocked_claim_reports_occupied_and_retries_next_think() {
        let mut roster = crate::roster::Roster::new();
        roster.agent_mut(AgentId::BalloonBoy).state.position = Location::GameArea;
        let agents = roster.agents_mut();
        let (before, rest) = agents.split_at_mut(AgentId::ToyFreddy.index());
        let (freddy, after) = rest.split_first_mut().expect("toy freddy in roster");
        freddy.reset(20);
        let occupancy = Occupancy::new(before, after);

        let timings = ContentTimings::default();
        let mut events = Vec::new();
        let mut dice = ScriptedDice::d20s(&[1]);
        let signals = PlayerSignals::default();
        let mut ctx = Decision {
            now: 8_000,
            dt_ms: 33,
            signals: &signals,
            dice: &mut dice,
            timings: &timings,
            events: &mut events,
        };
        freddy.update(&occupancy, &mut ctx);

        assert_eq!(freddy.state.position, Location::Stage);
        assert_eq!(freddy.state.status, AgentStatus::Blocked(Location::GameArea));
        assert_eq!(freddy.state.think_deadline, 16_000);
        assert_eq!(
            events,
            vec![LogEvent::AgentBlocked { agent: AgentId::ToyFreddy, target: Location::GameArea }]
        );
    }
}
