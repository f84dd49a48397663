use serde::{Deserialize, Serialize};

use crate::types::Location::*;
use crate::types::{AgentId, Archetype, Location};

/// Fixed rule constants. None of these scale with difficulty.
pub mod rules {
    pub const VENT_PREP_MS: u64 = 3_000;
    pub const VENT_BREACH_MAX_ROLL: u8 = 5;

    pub const FOXY_ATTACK_MS: u64 = 7_500;
    pub const FOXY_RETREAT_MS: u64 = 6_000;

    pub const PUPPET_FULL_CHARGE: u8 = 100;
    pub const PUPPET_DRAIN: u8 = 6;
    pub const PUPPET_DRAIN_INTERVAL_MS: u64 = 1_000;
    pub const PUPPET_RECHARGE: u8 = 20;
    pub const PUPPET_AWAKE_MS: u64 = 3_000;
    pub const PUPPET_DANCE_PERCENT: u32 = 8;

    pub const BALLOON_BOY_MIN_LEVEL: u8 = 3;
    pub const BALLOON_BOY_IDLE_MS: u64 = 15_000;
    pub const BALLOON_BOY_CHATTERS_PER_MOVE: u8 = 4;
    pub const BALLOON_BOY_MOVE_DELAY_MS: u64 = 1_000;
    pub const BALLOON_BOY_VENT_BREACH_MS: u64 = 10_000;
    pub const BALLOON_BOY_DISGUISE_HOLD_MS: u64 = 5_000;
    pub const BALLOON_BOY_FAST_CHATTER_MS: [u64; 4] = [5_000, 6_000, 7_000, 7_500];

    pub const CHECK_FAIL_MS: u64 = 1_300;
    pub const CHECK_HOLD_MS: u64 = 3_000;
    pub const CHECK_RETURN_DELAY_MS: u64 = 3_000;

    pub const FOXY_FADE_MS: u64 = 600;
    pub const FOXY_LINE_AT_MS: u64 = 1_600;
    pub const FOXY_LINE_TAIL_MS: u64 = 300;
}

/// Durations that belong to audio or animation assets. The core only uses
/// them as fallbacks and pacing, so a missing asset never stalls a timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTimings {
    /// Length of the music-box charge cue; one recharge step per cue.
    pub recharge_cue_ms: u64,
    pub foxy_line_ms: u64,
    pub jumpscare_ms: u64,
    pub puppet_dance_ms: u64,
    pub six_am_ms: u64,
}

impl Default for ContentTimings {
    fn default() -> Self {
        Self {
            recharge_cue_ms: 1_500,
            foxy_line_ms: 2_000,
            jumpscare_ms: 1_000,
            puppet_dance_ms: 2_000,
            six_am_ms: 3_000,
        }
    }
}

impl ContentTimings {
    /// End of the Foxy fade-back; after this the sequence only waits for
    /// acknowledgment.
    pub fn foxy_sequence_ms(&self) -> u64 {
        self.foxy_fade_back_at() + rules::FOXY_FADE_MS
    }

    fn foxy_fade_back_at(&self) -> u64 {
        rules::FOXY_LINE_AT_MS + self.foxy_line_ms + rules::FOXY_LINE_TAIL_MS
    }

    /// Black-screen alpha for the Foxy sequence at `elapsed_ms`.
    pub fn foxy_fade_alpha(&self, elapsed_ms: u64) -> u8 {
        let fade = rules::FOXY_FADE_MS;
        let back_at = self.foxy_fade_back_at();
        let scaled = |ms: u64| (ms.min(fade) * 255 / fade) as u8;
        if elapsed_ms < fade {
            scaled(elapsed_ms)
        } else if elapsed_ms < back_at {
            255
        } else {
            255 - scaled(elapsed_ms - back_at)
        }
    }
}

/// One hop of a route: from `from`, the agent may advance to any of `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteStep {
    pub from: Location,
    pub to: &'static [Location],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route(pub &'static [RouteStep]);

impl Route {
    pub fn next_from(&self, position: Location) -> Option<&'static [Location]> {
        self.0.iter().find(|step| step.from == position).map(|step| step.to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentDef {
    pub id: AgentId,
    pub archetype: Archetype,
    pub start: Location,
    pub think_interval_ms: u64,
    pub route: Route,
}

const fn step(from: Location, to: &'static [Location]) -> RouteStep {
    RouteStep { from, to }
}

const TOY_BONNIE_ROUTE: Route = Route(&[step(Stage, &[PartyRoom2]), step(PartyRoom2, &[OfficeVentRight])]);

const TOY_CHICA_ROUTE: Route = Route(&[
    step(Stage, &[MainHall]),
    step(MainHall, &[LeftAirVent]),
    step(LeftAirVent, &[OfficeVentLeft]),
]);

const FOXY_ROUTE: Route = Route(&[step(PartsService, &[Hall])]);

const PUPPET_ROUTE: Route = Route(&[step(Box, &[Awake]), step(Awake, &[Office])]);

const BALLOON_BOY_ROUTE: Route = Route(&[
    step(GameArea, &[LeftAirVent]),
    step(LeftAirVent, &[OfficeVentLeft]),
    step(OfficeVentLeft, &[Office]),
]);

const WITHERED_FREDDY_ROUTE: Route = Route(&[
    step(PartsService, &[PartyRoom3, MainHall]),
    step(PartyRoom3, &[Hall]),
    step(MainHall, &[Hall]),
    step(Hall, &[Office]),
]);

const WITHERED_CHICA_ROUTE: Route = Route(&[
    step(PartsService, &[PartyRoom2, PartyRoom4]),
    step(PartyRoom2, &[RightAirVent]),
    step(PartyRoom4, &[RightAirVent]),
    step(RightAirVent, &[OfficeVentRight]),
]);

const WITHERED_BONNY_ROUTE: Route = Route(&[
    step(PartsService, &[PartyRoom1, MainHall]),
    step(PartyRoom1, &[LeftAirVent]),
    step(MainHall, &[LeftAirVent]),
    step(LeftAirVent, &[OfficeVentLeft]),
]);

const TOY_FREDDY_ROUTE: Route =
    Route(&[step(Stage, &[GameArea]), step(GameArea, &[Hall]), step(Hall, &[Office])]);

pub fn agent_def(id: AgentId) -> AgentDef {
    let (archetype, start, think_interval_ms, route) = match id {
        AgentId::ToyBonnie => (Archetype::VentCrawler, Stage, 5_000, TOY_BONNIE_ROUTE),
        AgentId::ToyChica => (Archetype::VentCrawler, Stage, 6_000, TOY_CHICA_ROUTE),
        AgentId::WitheredFoxy => (Archetype::Foxy, PartsService, 8_000, FOXY_ROUTE),
        AgentId::Puppet => {
            (Archetype::Puppet, Box, rules::PUPPET_DRAIN_INTERVAL_MS, PUPPET_ROUTE)
        }
        AgentId::BalloonBoy => (Archetype::BalloonBoy, GameArea, 5_000, BALLOON_BOY_ROUTE),
        AgentId::WitheredFreddy => (Archetype::Roamer, PartsService, 7_000, WITHERED_FREDDY_ROUTE),
        AgentId::WitheredChica => {
            (Archetype::VentCrawler, PartsService, 7_000, WITHERED_CHICA_ROUTE)
        }
        AgentId::WitheredBonny => {
            (Archetype::VentCrawler, PartsService, 7_000, WITHERED_BONNY_ROUTE)
        }
        AgentId::ToyFreddy => (Archetype::Roamer, Stage, 8_000, TOY_FREDDY_ROUTE),
    };
    AgentDef { id, archetype, start, think_interval_ms, route }
}
