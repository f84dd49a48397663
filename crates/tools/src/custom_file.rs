//! Custom-night difficulty files.
//!
//! ```toml
//! [levels]
//! toy_bonnie = 5
//! withered_foxy = 20
//! ```
//!
//! Agents left out play at 0; levels are clamped to 0..=20.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use night_core::NightConfig;
use night_core::difficulty::MAX_LEVEL;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct CustomNightFile {
    #[serde(default)]
    levels: BTreeMap<String, i64>,
}

pub fn parse_custom_night(text: &str) -> Result<NightConfig> {
    let file: CustomNightFile =
        toml::from_str(text).context("custom night file is not valid TOML")?;
    let entries = file
        .levels
        .iter()
        .map(|(key, level)| (key.as_str(), (*level).clamp(0, i64::from(MAX_LEVEL)) as u8));
    let (config, unknown) = NightConfig::from_keyed(entries);
    for key in unknown {
        warn!(%key, "unknown agent in custom night file, ignored");
    }
    Ok(config)
}

pub fn load_custom_night(path: &Path) -> Result<NightConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read custom night file: {}", path.display()))?;
    parse_custom_night(&text).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use night_core::AgentId;

    #[test]
    fn missing_agents_are_zero_and_levels_clamp() {
        let text = "[levels]\ntoy_bonnie = 5\npuppet = 99\nballoon_boy = -3\n";
        let config = parse_custom_night(text).unwrap();
        assert_eq!(config.level(AgentId::ToyBonnie), 5);
        assert_eq!(config.level(AgentId::Puppet), 20);
        assert_eq!(config.level(AgentId::BalloonBoy), 0);
        assert_eq!(config.level(AgentId::ToyChica), 0);
    }

    #[test]
    fn unknown_agents_are_ignored_and_empty_file_is_all_zero() {
        let config = parse_custom_night("[levels]\ngolden_freddy = 20\n").unwrap();
        assert!(config.is_all_zero());
        assert!(parse_custom_night("").unwrap().is_all_zero());
    }

    #[test]
    fn broken_toml_is_an_error() {
        assert!(parse_custom_night("[levels\n").is_err());
    }
}
