use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one animatronic. Declaration order is registration order,
/// which is also the fixed per-tick update order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentId {
    ToyBonnie,
    ToyChica,
    WitheredFoxy,
    Puppet,
    BalloonBoy,
    WitheredFreddy,
    WitheredChica,
    WitheredBonny,
    ToyFreddy,
}

impl AgentId {
    pub const ALL: [AgentId; 9] = [
        AgentId::ToyBonnie,
        AgentId::ToyChica,
        AgentId::WitheredFoxy,
        AgentId::Puppet,
        AgentId::BalloonBoy,
        AgentId::WitheredFreddy,
        AgentId::WitheredChica,
        AgentId::WitheredBonny,
        AgentId::ToyFreddy,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ToyBonnie => "Toy Bonnie",
            Self::ToyChica => "Toy Chica",
            Self::WitheredFoxy => "Withered Foxy",
            Self::Puppet => "Puppet",
            Self::BalloonBoy => "Balloon Boy",
            Self::WitheredFreddy => "Withered Freddy",
            Self::WitheredChica => "Withered Chica",
            Self::WitheredBonny => "Withered Bonny",
            Self::ToyFreddy => "Toy Freddy",
        }
    }

    /// Stable snake_case key used by custom-night files.
    pub fn key(self) -> &'static str {
        match self {
            Self::ToyBonnie => "toy_bonnie",
            Self::ToyChica => "toy_chica",
            Self::WitheredFoxy => "withered_foxy",
            Self::Puppet => "puppet",
            Self::BalloonBoy => "balloon_boy",
            Self::WitheredFreddy => "withered_freddy",
            Self::WitheredChica => "withered_chica",
            Self::WitheredBonny => "withered_bonny",
            Self::ToyFreddy => "toy_freddy",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Agents whose office arrival skips the disguise check entirely.
    pub fn breaches_unconditionally(self) -> bool {
        matches!(self, Self::Puppet | Self::WitheredFoxy)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Stage,
    PartsService,
    GameArea,
    MainHall,
    PartyRoom1,
    PartyRoom2,
    PartyRoom3,
    PartyRoom4,
    Hall,
    LeftAirVent,
    RightAirVent,
    OfficeVentLeft,
    OfficeVentRight,
    Office,
    Box,
    Awake,
}

impl Location {
    /// Shared start rooms, the office itself and the Puppet's private states
    /// may hold any number of agents. Everything else is one-at-a-time.
    pub fn is_exclusive(self) -> bool {
        !matches!(self, Self::Stage | Self::PartsService | Self::Office | Self::Box | Self::Awake)
    }

    pub fn is_vent(self) -> bool {
        matches!(
            self,
            Self::LeftAirVent | Self::RightAirVent | Self::OfficeVentLeft | Self::OfficeVentRight
        )
    }

    pub fn is_office_vent(self) -> bool {
        matches!(self, Self::OfficeVentLeft | Self::OfficeVentRight)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Stage => "Stage",
            Self::PartsService => "Parts Service",
            Self::GameArea => "Game Area",
            Self::MainHall => "Main Hall",
            Self::PartyRoom1 => "Party Room 1",
            Self::PartyRoom2 => "Party Room 2",
            Self::PartyRoom3 => "Party Room 3",
            Self::PartyRoom4 => "Party Room 4",
            Self::Hall => "Hall",
            Self::LeftAirVent => "Left Air Vent",
            Self::RightAirVent => "Right Air Vent",
            Self::OfficeVentLeft => "Office Vent Left",
            Self::OfficeVentRight => "Office Vent Right",
            Self::Office => "Office",
            Self::Box => "Box",
            Self::Awake => "Awake",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    Roamer,
    VentCrawler,
    Foxy,
    Puppet,
    BalloonBoy,
}

/// A security camera feed, numbered 1 through 12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Camera(pub u8);

impl Camera {
    pub const MUSIC_BOX: Camera = Camera(11);
    pub const COUNT: u8 = 12;
}

impl Default for Camera {
    fn default() -> Self {
        Self::MUSIC_BOX
    }
}

/// Player input sampled once per tick. These are held states, not events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSignals {
    pub watching_hall: bool,
    pub light_left_vent: bool,
    pub light_right_vent: bool,
    pub disguise_active: bool,
    pub observation_active: bool,
    pub observation_target: Camera,
    pub recharge_requested: bool,
    pub camera_light: bool,
}

impl PlayerSignals {
    pub fn observing(&self, camera: Camera) -> bool {
        self.observation_active && self.observation_target == camera
    }

    pub fn any_light(&self) -> bool {
        self.watching_hall || self.light_left_vent || self.light_right_vent
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NightMode {
    /// Resets progress to night 1 before starting.
    NewGame,
    /// Plays the saved night from the preset table.
    Continue,
    /// Plays the custom table. Requires the unlock.
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Menu,
    Playing,
    Checking,
    Jumpscare,
    FoxySequence,
    PuppetDance,
    SixAm,
    GameOver,
}

impl PhaseKind {
    /// Phases in which the night clock runs and agents think.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Checking)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NightOutcome {
    Survived,
    Killed(AgentId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicBoxAlert {
    None,
    Warning,
    Critical,
}

impl MusicBoxAlert {
    pub fn for_charge(charge: u8) -> Self {
        match charge {
            0 => Self::None,
            1..=19 => Self::Critical,
            20..=49 => Self::Warning,
            _ => Self::None,
        }
    }
}

/// Looping effects the audio collaborator should have running right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmbientState {
    pub hall_ambience: bool,
    pub vent_light: bool,
    pub music_box: bool,
    pub recharging: bool,
    pub balloon_boy_laugh: bool,
    pub check_alarm: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    NightStarted { night: u8, custom: bool },
    HourChanged { hour: u8 },
    AgentMoved { agent: AgentId, from: Location, to: Location },
    AgentBlocked { agent: AgentId, target: Location },
    VentCrawl { agent: AgentId, vent: Location },
    AgentRetreated { agent: AgentId },
    BalloonBoyChatter { count: u8 },
    BalloonBoyInOffice,
    LightsJammed,
    PuppetWoke,
    MusicBoxRecharged { charge: u8 },
    CheckStarted { agent: AgentId },
    CheckDisguised { agent: AgentId },
    CheckPassed { agent: AgentId },
    ObservationForcedClosed,
    PuppetDanceStarted,
    JumpscareStarted { agent: AgentId },
    FoxyLine,
    NightWon,
    NightLost { agent: AgentId },
    ReturnedToMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    NotInMenu,
    CustomNightLocked,
    NothingToAcknowledge,
    ReportCooldown { remaining_s: u64 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInMenu => f.write_str("a night can only be started from the menu"),
            Self::CustomNightLocked => f.write_str("custom night is still locked"),
            Self::NothingToAcknowledge => f.write_str("current phase does not await acknowledgment"),
            Self::ReportCooldown { remaining_s } => {
                write!(f, "a report was sent recently, try again in {remaining_s}s")
            }
        }
    }
}

impl Error for GameError {}
