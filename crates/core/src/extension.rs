//! Night-start hook for externally supplied extensions.
//! This module exists to give an extension exactly one mutation point: the
//! difficulty table of the night about to start.
//! It does not load extensions or expose agent timers.

use crate::difficulty::NightConfig;
use crate::types::AgentId;

pub trait NightExtension {
    fn name(&self) -> &str;

    /// Called once per night, before any agent is reset.
    fn on_night_start(&mut self, ctx: &mut ExtensionContext<'_>);
}

pub struct ExtensionContext<'a> {
    night: u8,
    custom: bool,
    config: &'a mut NightConfig,
}

impl<'a> ExtensionContext<'a> {
    pub(crate) fn new(night: u8, custom: bool, config: &'a mut NightConfig) -> Self {
        Self { night, custom, config }
    }

    pub fn night(&self) -> u8 {
        self.night
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn agents(&self) -> [AgentId; 9] {
        AgentId::ALL
    }

    pub fn level(&self, agent: AgentId) -> u8 {
        self.config.level(agent)
    }

    /// Clamped to 0..=20 like every other table edit.
    pub fn set_level(&mut self, agent: AgentId, level: u8) {
        self.config.set(agent, level);
    }
}
