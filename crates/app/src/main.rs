mod frame_input;
mod hud;

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use app::app_loop::AppState;
use app::save_file::{self, default_journal_path, default_save_path};
use app::seed::{generate_runtime_seed, parse_launch_args};
use macroquad::prelude::*;
use night_core::{Game, InputJournal, PhaseKind};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[macroquad::main("Night Shift")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            error!(%message, "bad launch arguments");
            return;
        }
    };
    let seed = options.seed.value();
    let save_path = default_save_path();
    let progress = save_path.as_deref().map(save_file::load_or_default).unwrap_or_default();
    info!(seed, night = progress.current_night, "starting");

    let mut journal = InputJournal::new(seed, progress.clone());
    let mut game = Game::new(seed, progress);
    let mut app = AppState::new(options.dev_overlay);

    loop {
        let keys = frame_input::capture_frame_input();
        let frame_ms = (get_frame_time() * 1000.0) as u64;
        let was_playing = game.phase() != PhaseKind::Menu;
        app.wall_clock_s =
            SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |since| since.as_secs());
        app.tick(&mut game, &keys, frame_ms);
        for payload in app.accepted_inputs.drain(..) {
            journal.append(payload);
        }

        if let (Some(progress), Some(path)) = (game.take_progress_update(), save_path.as_deref())
            && let Err(error) = save_file::save_progress(path, &progress)
        {
            warn!(%error, "could not write save record");
        }
        // The journal covers the whole session so it replays from the launch seed.
        if was_playing
            && game.phase() == PhaseKind::Menu
            && let Some(path) = default_journal_path()
            && let Err(error) = save_file::save_journal(&path, &journal)
        {
            warn!(%error, "could not write night journal");
        }

        hud::draw_frame(&app, &game);
        next_frame().await
    }
}
