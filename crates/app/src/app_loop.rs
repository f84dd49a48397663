//! Frame-level front-end state: which screen is up, the monitor and camera
//! the player holds, and the fixed-step pump into the core.
//! This module exists to turn key state into `PlayerSignals` and session
//! calls, recording every accepted input.
//! It does not draw anything or touch the disk.

use macroquad::prelude::KeyCode;
use night_core::journal::InputPayload;
use night_core::{AgentId, Camera, Game, GameError, NightMode, PhaseKind, PlayerSignals};
use tracing::{debug, info, warn};

/// Fixed simulation step, about thirty ticks per second.
pub const TICK_MS: u64 = 33;
/// Longest real-time gap caught up in one frame; a stalled window never
/// fast-forwards the night.
const MAX_CATCH_UP_MS: u64 = 250;

pub const KEY_HALL_LIGHT: KeyCode = KeyCode::F;
pub const KEY_LEFT_LIGHT: KeyCode = KeyCode::A;
pub const KEY_RIGHT_LIGHT: KeyCode = KeyCode::D;
pub const KEY_DISGUISE: KeyCode = KeyCode::W;
pub const KEY_MONITOR: KeyCode = KeyCode::S;
pub const KEY_WIND: KeyCode = KeyCode::Z;
pub const KEY_CAMERA_LIGHT: KeyCode = KeyCode::X;
pub const KEY_PREV_CAMERA: KeyCode = KeyCode::Q;
pub const KEY_NEXT_CAMERA: KeyCode = KeyCode::E;
pub const KEY_CONFIRM: KeyCode = KeyCode::Enter;
pub const KEY_BACK: KeyCode = KeyCode::Escape;
pub const KEY_OVERLAY: KeyCode = KeyCode::Tab;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    CustomEditor {
        cursor: usize,
    },
    Night,
}

/// Keys seen this frame: `pressed` are fresh presses, `down` are held.
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    pub pressed: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
}

impl KeyState {
    pub fn pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }
}

#[derive(Default)]
pub struct AppState {
    pub screen: Screen,
    pub monitor_open: bool,
    pub camera: Camera,
    pub dev_overlay: bool,
    /// Last refusal from the core, shown on the menu.
    pub notice: Option<GameError>,
    /// Unix seconds, set by the caller each frame; only the report cooldown
    /// reads it.
    pub wall_clock_s: u64,
    accumulator_ms: u64,
    /// Inputs accepted during the current frame's `tick()` call.
    /// Drained by the caller after each tick to extend the journal.
    pub accepted_inputs: Vec<InputPayload>,
}

impl AppState {
    pub fn new(dev_overlay: bool) -> Self {
        Self { dev_overlay, ..Self::default() }
    }

    pub fn tick(&mut self, game: &mut Game, keys: &KeyState, frame_ms: u64) {
        self.accepted_inputs.clear();
        if keys.pressed(KEY_OVERLAY) {
            self.dev_overlay = !self.dev_overlay;
        }

        match self.screen {
            Screen::Menu => self.tick_menu(game, keys),
            Screen::CustomEditor { cursor } => self.tick_editor(game, keys, cursor),
            Screen::Night => self.tick_night(game, keys, frame_ms),
        }
    }

    fn tick_menu(&mut self, game: &mut Game, keys: &KeyState) {
        if keys.pressed(KeyCode::Key1) {
            self.start(game, NightMode::NewGame);
        } else if keys.pressed(KeyCode::Key2) {
            self.start(game, NightMode::Continue);
        } else if keys.pressed(KeyCode::Key3) {
            if game.progress().custom_unlocked {
                self.screen = Screen::CustomEditor { cursor: 0 };
            } else {
                self.notice = Some(GameError::CustomNightLocked);
            }
        } else if keys.pressed(KeyCode::Key4) {
            match game.request_report(self.wall_clock_s) {
                Ok(()) => {
                    info!(seed = game.seed(), "bug report requested");
                    self.notice = None;
                }
                Err(error) => self.notice = Some(error),
            }
        }
    }

    fn tick_editor(&mut self, game: &mut Game, keys: &KeyState, cursor: usize) {
        let count = AgentId::ALL.len();
        let agent = AgentId::ALL[cursor];
        if keys.pressed(KeyCode::Down) {
            self.screen = Screen::CustomEditor { cursor: (cursor + 1) % count };
        } else if keys.pressed(KeyCode::Up) {
            self.screen = Screen::CustomEditor { cursor: (cursor + count - 1) % count };
        } else if keys.pressed(KeyCode::Right) || keys.pressed(KeyCode::Left) {
            let delta = if keys.pressed(KeyCode::Right) { 1 } else { -1 };
            game.adjust_custom_level(agent, delta);
            let level = game.custom_table().level(agent);
            self.accepted_inputs.push(InputPayload::SetCustomLevel { agent, level });
        } else if keys.pressed(KEY_CONFIRM) {
            self.start(game, NightMode::Custom);
        } else if keys.pressed(KEY_BACK) {
            self.screen = Screen::Menu;
        }
    }

    fn start(&mut self, game: &mut Game, mode: NightMode) {
        match game.start_night(mode) {
            Ok(()) => {
                self.accepted_inputs.push(InputPayload::StartNight { mode });
                self.screen = Screen::Night;
                self.monitor_open = false;
                self.camera = Camera::MUSIC_BOX;
                self.accumulator_ms = 0;
                self.notice = None;
            }
            Err(error) => {
                warn!(%error, ?mode, "night refused");
                self.notice = Some(error);
            }
        }
    }

    fn tick_night(&mut self, game: &mut Game, keys: &KeyState, frame_ms: u64) {
        let awaiting_ack =
            matches!(game.phase(), PhaseKind::GameOver | PhaseKind::SixAm | PhaseKind::FoxySequence);
        if awaiting_ack && keys.pressed(KEY_CONFIRM) && game.acknowledge().is_ok() {
            self.accepted_inputs.push(InputPayload::Acknowledge);
        }
        if game.phase() == PhaseKind::Menu {
            self.screen = Screen::Menu;
            return;
        }

        if game.phase().is_active() {
            self.handle_monitor_keys(keys);
        } else {
            self.monitor_open = false;
        }

        self.accumulator_ms += frame_ms.min(MAX_CATCH_UP_MS);
        while self.accumulator_ms >= TICK_MS {
            self.accumulator_ms -= TICK_MS;
            let signals = self.signals(keys);
            let result = game.advance(&signals, TICK_MS);
            self.accepted_inputs.push(InputPayload::Frame { dt_ms: TICK_MS, signals });
            if !result.events.is_empty() {
                debug!(tick = result.tick, events = ?result.events, "tick events");
            }
            if result.phase == PhaseKind::Menu {
                self.screen = Screen::Menu;
                break;
            }
        }
    }

    fn handle_monitor_keys(&mut self, keys: &KeyState) {
        if keys.pressed(KEY_MONITOR) {
            self.monitor_open = !self.monitor_open;
        }
        if !self.monitor_open {
            return;
        }
        let Camera(current) = self.camera;
        if keys.pressed(KEY_NEXT_CAMERA) {
            self.camera = Camera(current % Camera::COUNT + 1);
        } else if keys.pressed(KEY_PREV_CAMERA) {
            self.camera = Camera((current + Camera::COUNT - 2) % Camera::COUNT + 1);
        }
    }

    /// Held keys plus monitor state as the core samples them. A player
    /// closing the monitor mid-frame is seen on the next frame.
    pub fn signals(&self, keys: &KeyState) -> PlayerSignals {
        PlayerSignals {
            watching_hall: keys.down(KEY_HALL_LIGHT),
            light_left_vent: keys.down(KEY_LEFT_LIGHT),
            light_right_vent: keys.down(KEY_RIGHT_LIGHT),
            disguise_active: keys.down(KEY_DISGUISE),
            observation_active: self.monitor_open,
            observation_target: self.camera,
            recharge_requested: keys.down(KEY_WIND),
            camera_light: keys.down(KEY_CAMERA_LIGHT),
        }
    }
}
