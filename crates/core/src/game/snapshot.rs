//! Read-only view handed to the renderer and audio layer each frame.

use super::*;
use crate::state::AgentStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Location,
    pub status: AgentStatus,
    pub difficulty: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: PhaseKind,
    pub night: u8,
    pub custom: bool,
    pub hour: u8,
    pub night_ms: u64,
    pub agents: Vec<AgentView>,
    pub music_box_charge: u8,
    pub music_box_alert: MusicBoxAlert,
    pub ambient: AmbientState,
    pub balloon_boy_in_office: bool,
    /// Black overlay alpha during the Foxy sequence, 0 otherwise.
    pub fade_alpha: u8,
    pub jumpscare_agent: Option<AgentId>,
    pub checking_agent: Option<AgentId>,
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        let session = &self.session;
        let agents = self
            .roster
            .agents()
            .iter()
            .map(|agent| AgentView {
                id: agent.def.id,
                position: agent.state.position,
                status: agent.state.status,
                difficulty: agent.state.difficulty,
            })
            .collect();
        let music_box_charge =
            self.roster.agent(AgentId::Puppet).state.charge().unwrap_or_default();
        let (fade_alpha, jumpscare_agent, checking_agent) = match session.phase {
            Phase::FoxySequence { elapsed_ms, .. } => {
                (self.timings.foxy_fade_alpha(elapsed_ms), None, None)
            }
            Phase::Jumpscare { agent, .. } | Phase::GameOver { agent } => (0, Some(agent), None),
            Phase::Checking(window) => (0, None, Some(window.agent)),
            _ => (0, None, None),
        };

        Snapshot {
            tick: self.tick,
            phase: session.phase.kind(),
            night: session.night,
            custom: session.custom,
            hour: session.clock.hour(),
            night_ms: session.clock.now(),
            agents,
            music_box_charge,
            music_box_alert: MusicBoxAlert::for_charge(music_box_charge),
            ambient: session.ambient,
            balloon_boy_in_office: session.balloon_boy_in_office,
            fade_alpha,
            jumpscare_agent,
            checking_agent,
        }
    }
}
