use std::fmt;

use crate::clock::Clock;
use crate::difficulty::NightConfig;
use crate::progress::Progress;
use crate::types::*;

/// What an agent reports about its last decision. Render-only; no rule reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    Waiting,
    Idle,
    Moving(Location),
    Blocked(Location),
    Preparing { remaining_ms: u64 },
    VentWait { roll: u8 },
    AttackIn { remaining_ms: u64 },
    Blinding { remaining_ms: u64 },
    Attacking,
    Draining { charge: u8 },
    Awake { remaining_ms: u64 },
    Chatter { count: u8 },
    Returning,
    InOffice,
    Checking,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = |ms: u64| ms as f64 / 1000.0;
        match self {
            Self::Waiting => f.write_str("Waiting"),
            Self::Idle => f.write_str("Idle"),
            Self::Moving(to) => write!(f, "Moving to {to}"),
            Self::Blocked(to) => write!(f, "{to} occupied"),
            Self::Preparing { remaining_ms } => {
                write!(f, "Preparing: {:.1}s", seconds(*remaining_ms))
            }
            Self::VentWait { roll } => write!(f, "Vent wait (roll {roll}>5)"),
            Self::AttackIn { remaining_ms } => write!(f, "Attack in: {:.1}s", seconds(*remaining_ms)),
            Self::Blinding { remaining_ms } => write!(f, "Blinding: {:.1}s", seconds(*remaining_ms)),
            Self::Attacking => f.write_str("ATTACKING!"),
            Self::Draining { charge } => write!(f, "Music box {charge}%"),
            Self::Awake { remaining_ms } => write!(f, "Awake: {:.1}s", seconds(*remaining_ms)),
            Self::Chatter { count } => write!(f, "Chatter {count}/4"),
            Self::Returning => f.write_str("Returning"),
            Self::InOffice => f.write_str("In office"),
            Self::Checking => f.write_str("Checking office..."),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuppetTimers {
    pub charge: u8,
    pub last_discharge: u64,
    pub woke_at: u64,
    pub recharge_since: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalloonBoyTimers {
    pub idle_since: u64,
    pub last_chatter: u64,
    pub chatter_interval: Option<u64>,
    pub chatter_count: u8,
    pub move_at: Option<u64>,
    pub disguise_since: Option<u64>,
}

/// Character-specific timers. All timestamps are night-clock milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timers {
    None,
    Foxy { unwatched_ms: u64, watched_ms: u64 },
    Puppet(PuppetTimers),
    BalloonBoy(BalloonBoyTimers),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentState {
    pub id: AgentId,
    pub position: Location,
    pub difficulty: u8,
    pub think_deadline: u64,
    pub vent_arrived_at: u64,
    pub status: AgentStatus,
    pub timers: Timers,
}

impl AgentState {
    pub fn charge(&self) -> Option<u8> {
        match self.timers {
            Timers::Puppet(puppet) => Some(puppet.charge),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStage {
    /// Disguise not yet seen; the fail timer is running.
    Failing,
    /// Disguise went on at `since` and must stay on.
    Holding { since: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckWindow {
    pub agent: AgentId,
    pub started_at: u64,
    pub stage: CheckStage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Checking(CheckWindow),
    Jumpscare { agent: AgentId, elapsed_ms: u64 },
    FoxySequence { elapsed_ms: u64, line_played: bool },
    PuppetDance { elapsed_ms: u64 },
    SixAm { elapsed_ms: u64 },
    GameOver { agent: AgentId },
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Menu => PhaseKind::Menu,
            Self::Playing => PhaseKind::Playing,
            Self::Checking(_) => PhaseKind::Checking,
            Self::Jumpscare { .. } => PhaseKind::Jumpscare,
            Self::FoxySequence { .. } => PhaseKind::FoxySequence,
            Self::PuppetDance { .. } => PhaseKind::PuppetDance,
            Self::SixAm { .. } => PhaseKind::SixAm,
            Self::GameOver { .. } => PhaseKind::GameOver,
        }
    }
}

pub struct SessionState {
    pub phase: Phase,
    pub clock: Clock,
    pub progress: Progress,
    /// Night being played; frozen at night start.
    pub night: u8,
    pub custom: bool,
    pub config: NightConfig,
    pub ambient: AmbientState,
    pub balloon_boy_in_office: bool,
    pub(crate) lights_jam_latch: bool,
}

impl SessionState {
    pub fn new(progress: Progress) -> Self {
        Self {
            phase: Phase::Menu,
            clock: Clock::new(),
            night: progress.current_night,
            progress,
            custom: false,
            config: NightConfig::zeroed(),
            ambient: AmbientState::default(),
            balloon_boy_in_office: false,
            lights_jam_latch: false,
        }
    }

    /// Fresh clock and flags for a night about to be played.
    pub(crate) fn begin_night(&mut self, night: u8, custom: bool, config: NightConfig) {
        self.phase = Phase::Playing;
        self.clock = Clock::new();
        self.night = night;
        self.custom = custom;
        self.config = config;
        self.ambient = AmbientState::default();
        self.balloon_boy_in_office = false;
        self.lights_jam_latch = false;
    }

    /// Leaving active play drops every looping effect at once.
    pub(crate) fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        if !phase.kind().is_active() {
            self.ambient = AmbientState::default();
        }
    }
}
