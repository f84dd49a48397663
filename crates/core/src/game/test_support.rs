//! Night fixtures: a custom night with a hand-picked cast and scripted
//! dice, a seeded story night, and helpers to park agents and pump ticks.

use super::*;
use crate::dice::ScriptedDice;

/// A custom night already in `Playing` with only the given agents active.
pub(super) fn playing_game(levels: &[(AgentId, u8)], dice: ScriptedDice) -> Game {
    let progress = Progress { custom_unlocked: true, ..Progress::default() };
    let mut game = Game::with_dice(7, progress, Box::new(dice));
    game.custom_table = NightConfig::zeroed();
    for (agent, level) in levels {
        game.set_custom_level(*agent, *level);
    }
    game.start_night(NightMode::Custom).expect("custom night should start");
    game
}

/// A story night on the given save, with seeded dice.
pub(super) fn story_game(night: u8) -> Game {
    let progress = Progress { current_night: night, ..Progress::default() };
    let mut game = Game::new(11, progress);
    game.start_night(NightMode::Continue).expect("story night should start");
    game
}

pub(super) fn place(game: &mut Game, agent: AgentId, location: Location) {
    game.roster.agent_mut(agent).state.position = location;
}

/// Advances `ticks` times with the same held input and collects every event.
pub(super) fn run(
    game: &mut Game,
    signals: &PlayerSignals,
    dt_ms: u64,
    ticks: usize,
) -> Vec<LogEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend(game.advance(signals, dt_ms).events);
    }
    events
}

pub(super) fn disguised() -> PlayerSignals {
    PlayerSignals { disguise_active: true, ..PlayerSignals::default() }
}

pub(super) fn on_music_box() -> PlayerSignals {
    PlayerSignals {
        observation_active: true,
        observation_target: Camera::MUSIC_BOX,
        ..PlayerSignals::default()
    }
}
