//! Samples the menu, camera and office keys once per rendered frame.

use app::app_loop::{
    KEY_BACK, KEY_CAMERA_LIGHT, KEY_CONFIRM, KEY_DISGUISE, KEY_HALL_LIGHT, KEY_LEFT_LIGHT,
    KEY_MONITOR, KEY_NEXT_CAMERA, KEY_OVERLAY, KEY_PREV_CAMERA, KEY_RIGHT_LIGHT, KEY_WIND,
    KeyState,
};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const PRESS_KEYS: [KeyCode; 14] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KEY_CONFIRM,
    KEY_BACK,
    KEY_MONITOR,
    KEY_PREV_CAMERA,
    KEY_NEXT_CAMERA,
    KEY_OVERLAY,
];

const HOLD_KEYS: [KeyCode; 6] =
    [KEY_HALL_LIGHT, KEY_LEFT_LIGHT, KEY_RIGHT_LIGHT, KEY_DISGUISE, KEY_WIND, KEY_CAMERA_LIGHT];

pub fn capture_frame_input() -> KeyState {
    KeyState {
        pressed: PRESS_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect(),
        down: HOLD_KEYS.into_iter().filter(|key| is_key_down(*key)).collect(),
    }
}
