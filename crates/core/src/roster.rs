//! The fixed cast, stored in registration order.
//! This module exists to run the per-tick agent pass in that order, handing
//! each agent an occupancy view of everyone else.
//! It does not decide what an office arrival means.

use crate::agent::{Agent, Decision};
use crate::difficulty::NightConfig;
use crate::occupancy::Occupancy;
use crate::types::{AgentId, Location};

#[derive(Debug)]
pub struct Roster {
    agents: Vec<Agent>,
}

impl Roster {
    pub fn new() -> Self {
        Self { agents: AgentId::ALL.into_iter().map(Agent::from_id).collect() }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    pub fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    /// Full reset for a new night. Nothing carries over from the last one.
    pub fn reset(&mut self, config: &NightConfig) {
        for agent in &mut self.agents {
            agent.reset(config.level(agent.def.id));
        }
    }

    /// Dawn: everyone stops where they stand.
    pub fn zero_levels(&mut self) {
        for agent in &mut self.agents {
            agent.state.difficulty = 0;
        }
    }

    /// One agent pass. Earlier agents claim rooms first.
    pub fn update_all(&mut self, ctx: &mut Decision<'_>) {
        for index in 0..self.agents.len() {
            let (before, rest) = self.agents.split_at_mut(index);
            let Some((agent, after)) = rest.split_first_mut() else {
                continue;
            };
            agent.update(&Occupancy::new(before, after), ctx);
        }
    }

    pub fn send_home(&mut self, id: AgentId, now: u64) -> bool {
        let (before, rest) = self.agents.split_at_mut(id.index());
        let Some((agent, after)) = rest.split_first_mut() else {
            return false;
        };
        agent.send_home(&Occupancy::new(before, after), now)
    }

    /// First agent in registration order standing in the office. Balloon
    /// Boy never counts; his arrival is a hazard, not an attack.
    pub fn first_intruder(&self) -> Option<AgentId> {
        self.agents
            .iter()
            .filter(|agent| agent.def.id != AgentId::BalloonBoy)
            .find(|agent| agent.state.position == Location::Office)
            .map(|agent| agent.def.id)
    }

    pub fn is_in(&self, id: AgentId, location: Location) -> bool {
        self.agent(id).state.position == location
    }

    pub fn occupancy(&self) -> Occupancy<'_> {
        Occupancy::of(&self.agents)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentTimings;
    use crate::dice::ScriptedDice;
    use crate::types::{LogEvent, PlayerSignals};

    #[test]
    fn earlier_agent_wins_a_same_tick_race() {
        let mut roster = Roster::new();
        let mut config = NightConfig::zeroed();
        config.set(AgentId::ToyChica, 20);
        config.set(AgentId::WitheredBonny, 20);
        roster.reset(&config);
        roster.agent_mut(AgentId::ToyChica).state.position = Location::MainHall;
        roster.agent_mut(AgentId::WitheredBonny).state.position = Location::PartyRoom1;

        let timings = ContentTimings::default();
        let signals = PlayerSignals::default();
        let mut dice = ScriptedDice::d20s(&[1]);
        let mut events = Vec::new();
        let mut ctx = Decision {
            now: 7_000,
            dt_ms: 33,
            signals: &signals,
            dice: &mut dice,
            timings: &timings,
            events: &mut events,
        };
        roster.update_all(&mut ctx);

        assert_eq!(roster.agent(AgentId::ToyChica).state.position, Location::LeftAirVent);
        assert_eq!(roster.agent(AgentId::WitheredBonny).state.position, Location::PartyRoom1);
        assert!(events.contains(&LogEvent::AgentBlocked {
            agent: AgentId::WitheredBonny,
            target: Location::LeftAirVent
        }));
        assert!(roster.occupancy().conflicts().is_empty());
    }

    #[test]
    fn reset_restores_start_rooms_and_levels() {
        let mut roster = Roster::new();
        roster.agent_mut(AgentId::ToyFreddy).state.position = Location::Hall;
        roster.reset(&NightConfig::preset(6));
        assert_eq!(roster.agent(AgentId::ToyFreddy).state.position, Location::Stage);
        assert_eq!(roster.agent(AgentId::ToyFreddy).state.difficulty, 10);
        assert_eq!(roster.agent(AgentId::Puppet).state.charge(), Some(100));

        roster.zero_levels();
        assert!(roster.agents().iter().all(|agent| agent.state.difficulty == 0));
    }
}
