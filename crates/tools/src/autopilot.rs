//! A scripted player for headless nights. It reacts only to what the
//! snapshot shows, the same view the renderer gets.

use night_core::{AgentId, Camera, Location, PhaseKind, PlayerSignals, Snapshot};

/// Wind the box below this charge.
const WIND_BELOW: u8 = 60;

pub fn autopilot(snapshot: &Snapshot) -> PlayerSignals {
    let near = |location: Location| snapshot.agents.iter().any(|agent| agent.position == location);
    let is_at = |id: AgentId, location: Location| {
        snapshot.agents.iter().any(|agent| agent.id == id && agent.position == location)
    };

    if snapshot.phase == PhaseKind::Checking {
        return PlayerSignals { disguise_active: true, ..PlayerSignals::default() };
    }

    let vent_threat = near(Location::OfficeVentLeft) || near(Location::OfficeVentRight);
    let foxy_waiting = is_at(AgentId::WitheredFoxy, Location::Hall);
    let needs_wind = snapshot.music_box_charge < WIND_BELOW
        && is_at(AgentId::Puppet, Location::Box)
        && !vent_threat
        && !near(Location::Hall);

    if needs_wind {
        return PlayerSignals {
            observation_active: true,
            observation_target: Camera::MUSIC_BOX,
            recharge_requested: true,
            ..PlayerSignals::default()
        };
    }
    PlayerSignals {
        watching_hall: foxy_waiting,
        disguise_active: is_at(AgentId::BalloonBoy, Location::OfficeVentLeft),
        light_left_vent: near(Location::OfficeVentLeft),
        light_right_vent: near(Location::OfficeVentRight),
        ..PlayerSignals::default()
    }
}
