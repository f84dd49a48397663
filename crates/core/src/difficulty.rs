//! Per-night difficulty levels: the fixed six-night preset table and the
//! user-editable custom table share one shape.

use serde::{Deserialize, Serialize};

use crate::types::AgentId;

pub const MAX_LEVEL: u8 = 20;
pub const FIRST_NIGHT: u8 = 1;
pub const LAST_NIGHT: u8 = 6;

// Columns follow `AgentId::ALL`.
const PRESETS: [[u8; 9]; 6] = [
    [2, 1, 0, 2, 0, 0, 0, 0, 0],
    [3, 3, 2, 3, 3, 2, 2, 2, 1],
    [6, 4, 4, 6, 5, 4, 4, 3, 3],
    [8, 7, 7, 8, 7, 6, 6, 5, 5],
    [15, 14, 8, 11, 7, 10, 10, 9, 8],
    [15, 14, 11, 11, 11, 12, 12, 11, 10],
];

const CUSTOM_DEFAULTS: [u8; 9] = [2, 1, 0, 1, 0, 0, 0, 0, 0];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightConfig {
    levels: [u8; 9],
}

impl NightConfig {
    pub fn zeroed() -> Self {
        Self { levels: [0; 9] }
    }

    /// Preset for `night`; out-of-range nights are clamped into 1..=6.
    pub fn preset(night: u8) -> Self {
        let index = night.clamp(FIRST_NIGHT, LAST_NIGHT) - FIRST_NIGHT;
        Self { levels: PRESETS[index as usize] }
    }

    pub fn custom_defaults() -> Self {
        Self { levels: CUSTOM_DEFAULTS }
    }

    /// Builds a table from `(key, level)` pairs such as a parsed custom-night
    /// file. Unknown keys are returned so the caller can report them; agents
    /// that are not mentioned stay at 0.
    pub fn from_keyed<'a>(
        entries: impl IntoIterator<Item = (&'a str, u8)>,
    ) -> (Self, Vec<String>) {
        let mut config = Self::zeroed();
        let mut unknown = Vec::new();
        for (key, level) in entries {
            match AgentId::from_key(key) {
                Some(agent) => config.set(agent, level),
                None => unknown.push(key.to_string()),
            }
        }
        (config, unknown)
    }

    pub fn level(&self, agent: AgentId) -> u8 {
        self.levels[agent.index()]
    }

    pub fn set(&mut self, agent: AgentId, level: u8) {
        self.levels[agent.index()] = level.min(MAX_LEVEL);
    }

    /// Steps one level up or down, saturating at 0 and 20.
    pub fn adjust(&mut self, agent: AgentId, delta: i8) {
        let next = i16::from(self.level(agent)) + i16::from(delta);
        self.set(agent, next.clamp(0, i16::from(MAX_LEVEL)) as u8);
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, u8)> + '_ {
        AgentId::ALL.into_iter().map(|agent| (agent, self.level(agent)))
    }

    pub fn is_all_zero(&self) -> bool {
        self.levels.iter().all(|level| *level == 0)
    }
}

impl Default for NightConfig {
    fn default() -> Self {
        Self::custom_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_night_table_spot_checks() {
        assert_eq!(NightConfig::preset(1).level(AgentId::ToyBonnie), 2);
        assert_eq!(NightConfig::preset(1).level(AgentId::WitheredFoxy), 0);
        assert_eq!(NightConfig::preset(3).level(AgentId::Puppet), 6);
        assert_eq!(NightConfig::preset(5).level(AgentId::ToyChica), 14);
        assert_eq!(NightConfig::preset(6).level(AgentId::ToyFreddy), 10);
    }

    #[test]
    fn out_of_range_nights_clamp() {
        assert_eq!(NightConfig::preset(0), NightConfig::preset(1));
        assert_eq!(NightConfig::preset(9), NightConfig::preset(6));
    }

    #[test]
    fn levels_are_clamped_to_twenty() {
        let mut config = NightConfig::zeroed();
        config.set(AgentId::Puppet, 45);
        assert_eq!(config.level(AgentId::Puppet), 20);
        config.adjust(AgentId::Puppet, 1);
        assert_eq!(config.level(AgentId::Puppet), 20);
        config.adjust(AgentId::ToyChica, -1);
        assert_eq!(config.level(AgentId::ToyChica), 0);
    }

    #[test]
    fn keyed_entries_report_unknown_names() {
        let (config, unknown) =
            NightConfig::from_keyed([("toy_freddy", 7), ("golden_freddy", 20), ("puppet", 30)]);
        assert_eq!(config.level(AgentId::ToyFreddy), 7);
        assert_eq!(config.level(AgentId::Puppet), 20);
        assert_eq!(config.level(AgentId::ToyBonnie), 0);
        assert_eq!(unknown, vec!["golden_freddy".to_string()]);
    }
}
