//! Who holds which location, derived on demand from agent positions.
//! This module exists to give one agent a read-only view of every other
//! agent while it is being updated, and to gate moves into exclusive rooms.
//! It does not cache anything; each query scans the live positions.

use crate::agent::Agent;
use crate::state::AgentState;
use crate::types::{AgentId, Location};

/// The roster with the agent being updated cut out. Built from the two
/// halves of a `split_at_mut` so the claimant can be borrowed mutably.
#[derive(Clone, Copy)]
pub struct Occupancy<'a> {
    before: &'a [Agent],
    after: &'a [Agent],
}

impl<'a> Occupancy<'a> {
    pub fn new(before: &'a [Agent], after: &'a [Agent]) -> Self {
        Self { before, after }
    }

    /// View over a whole roster, with nobody cut out.
    pub fn of(agents: &'a [Agent]) -> Self {
        Self { before: agents, after: &[] }
    }

    fn others(self) -> impl Iterator<Item = &'a AgentState> {
        self.before.iter().chain(self.after.iter()).map(|agent| &agent.state)
    }

    pub fn holder(&self, location: Location) -> Option<AgentId> {
        self.others().find(|state| state.position == location).map(|state| state.id)
    }

    pub fn is_free(&self, location: Location) -> bool {
        !location.is_exclusive() || self.holder(location).is_none()
    }

    /// Moves `claimant` into `location` if nobody else holds it. A refused
    /// claim leaves the claimant untouched.
    pub fn try_claim(&self, claimant: &mut AgentState, location: Location) -> bool {
        if !self.is_free(location) {
            return false;
        }
        claimant.position = location;
        true
    }

    /// Exclusive locations currently held by more than one agent.
    pub fn conflicts(&self) -> Vec<(Location, Vec<AgentId>)> {
        let mut held: Vec<(Location, Vec<AgentId>)> = Vec::new();
        for state in self.others().filter(|state| state.position.is_exclusive()) {
            match held.iter_mut().find(|(location, _)| *location == state.position) {
                Some((_, ids)) => ids.push(state.id),
                None => held.push((state.position, vec![state.id])),
            }
        }
        held.retain(|(_, ids)| ids.len() > 1);
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    fn roster_at(positions: &[(AgentId, Location)]) -> Roster {
        let mut roster = Roster::new();
        for (id, location) in positions {
            roster.agent_mut(*id).state.position = *location;
        }
        roster
    }

    #[test]
    fn exclusive_room_refuses_second_claimant() {
        let mut roster = roster_at(&[(AgentId::ToyChica, Location::MainHall)]);
        let agents = roster.agents_mut();
        let (before, rest) = agents.split_at_mut(AgentId::WitheredBonny.index());
        let (bonny, after) = rest.split_first_mut().expect("bonny in roster");
        let occupancy = Occupancy::new(before, after);

        assert_eq!(occupancy.holder(Location::MainHall), Some(AgentId::ToyChica));
        assert!(!occupancy.try_claim(&mut bonny.state, Location::MainHall));
        assert_eq!(bonny.state.position, Location::PartsService);
        assert!(occupancy.try_claim(&mut bonny.state, Location::PartyRoom1));
        assert_eq!(bonny.state.position, Location::PartyRoom1);
    }

    #[test]
    fn shared_rooms_always_grant() {
        let mut roster = Roster::new();
        let agents = roster.agents_mut();
        let (before, rest) = agents.split_at_mut(AgentId::WitheredChica.index());
        let (chica, after) = rest.split_first_mut().expect("chica in roster");
        let occupancy = Occupancy::new(before, after);

        assert_eq!(occupancy.holder(Location::PartsService), Some(AgentId::WitheredFoxy));
        assert!(occupancy.try_claim(&mut chica.state, Location::PartsService));
        assert!(occupancy.try_claim(&mut chica.state, Location::Office));
    }

    #[test]
    fn conflicts_report_only_exclusive_rooms() {
        let roster = roster_at(&[
            (AgentId::ToyChica, Location::Hall),
            (AgentId::ToyFreddy, Location::Hall),
            (AgentId::ToyBonnie, Location::Office),
            (AgentId::WitheredFreddy, Location::Office),
        ]);
        let conflicts = Occupancy::of(roster.agents()).conflicts();
        assert_eq!(conflicts, vec![(Location::Hall, vec![AgentId::ToyChica, AgentId::ToyFreddy])]);
    }
}
