//! Text rendering of the core snapshot. Placeholder art: every screen is
//! drawn as lines of text over flat colour.

use app::app_loop::{AppState, Screen};
use app::{alert_label, end_card, format_hour, format_seed, report_label};
use macroquad::prelude::*;
use night_core::{AgentId, Game, PhaseKind, Snapshot};

const FONT: f32 = 24.0;
const LINE: f32 = 28.0;
const MARGIN: f32 = 20.0;

struct Lines {
    y: f32,
}

impl Lines {
    fn new() -> Self {
        Self { y: MARGIN + FONT }
    }

    fn draw(&mut self, text: &str, color: Color) {
        draw_text(text, MARGIN, self.y, FONT, color);
        self.y += LINE;
    }
}

pub fn draw_frame(app: &AppState, game: &Game) {
    clear_background(BLACK);
    match app.screen {
        Screen::Menu => draw_menu(app, game),
        Screen::CustomEditor { cursor } => draw_editor(game, cursor),
        Screen::Night => draw_night(app, game),
    }
}

fn draw_menu(app: &AppState, game: &Game) {
    let progress = game.progress();
    let mut lines = Lines::new();
    lines.draw("NIGHT SHIFT", WHITE);
    lines.draw("1  New game", LIGHTGRAY);
    lines.draw(&format!("2  Continue (night {})", progress.current_night), LIGHTGRAY);
    let custom = if progress.custom_unlocked { WHITE } else { DARKGRAY };
    lines.draw("3  Custom night", custom);
    let cooldown = progress.report_cooldown_remaining(app.wall_clock_s);
    lines.draw(&report_label(cooldown), if cooldown == 0 { LIGHTGRAY } else { DARKGRAY });
    if let Some(notice) = app.notice {
        lines.draw(&notice.to_string(), RED);
    }
    lines.draw(&format!("seed {}", format_seed(game.seed())), DARKGRAY);
}

fn draw_editor(game: &Game, cursor: usize) {
    let mut lines = Lines::new();
    lines.draw("CUSTOM NIGHT  (arrows edit, Enter starts, Esc back)", WHITE);
    for (index, (agent, level)) in game.custom_table().iter().enumerate() {
        let marker = if index == cursor { ">" } else { " " };
        let color = if index == cursor { YELLOW } else { LIGHTGRAY };
        lines.draw(&format!("{marker} {:<16} {level:>2}", agent.name()), color);
    }
}

fn draw_night(app: &AppState, game: &Game) {
    let snapshot = &game.snapshot();
    let mut lines = Lines::new();
    lines.draw(&format!("Night {}  {}", snapshot.night, format_hour(snapshot.hour)), WHITE);

    match snapshot.phase {
        PhaseKind::Playing | PhaseKind::Checking => {
            if app.monitor_open {
                let alert = alert_label(snapshot.music_box_alert).unwrap_or("");
                lines.draw(&format!("CAM {}", app.camera.0), GREEN);
                lines.draw(&format!("Music box {}% {alert}", snapshot.music_box_charge), GREEN);
            } else {
                lines.draw("Office", LIGHTGRAY);
            }
            if let Some(agent) = snapshot.checking_agent {
                lines.draw(&format!("Something is in the office... ({agent})"), RED);
            }
            if snapshot.balloon_boy_in_office {
                lines.draw("Hi! Hello! (lights jammed)", ORANGE);
            }
        }
        PhaseKind::Jumpscare | PhaseKind::PuppetDance => {
            let agent = snapshot.jumpscare_agent.unwrap_or(AgentId::Puppet);
            lines.draw(&format!("{}!", agent.name().to_uppercase()), RED);
        }
        PhaseKind::FoxySequence => {
            let alpha = f32::from(snapshot.fade_alpha) / 255.0;
            let veil = Color::new(0.0, 0.0, 0.0, alpha);
            draw_rectangle(0.0, 0.0, screen_width(), screen_height(), veil);
            lines.draw("Enter to continue", DARKGRAY);
        }
        PhaseKind::GameOver | PhaseKind::SixAm => {
            let (title, color) = match snapshot.phase {
                PhaseKind::SixAm => ("6 AM  (Enter)", YELLOW),
                _ => ("GAME OVER  (Enter)", RED),
            };
            lines.draw(title, color);
            if let Some(outcome) = game.outcome() {
                lines.draw(&end_card(&outcome, game.snapshot_hash()), DARKGRAY);
            }
        }
        PhaseKind::Menu => {}
    }

    if app.dev_overlay {
        draw_overlay(snapshot, lines);
    }
}

fn draw_overlay(snapshot: &Snapshot, mut lines: Lines) {
    lines.y += LINE;
    lines.draw(&format!("tick {}  {} ms", snapshot.tick, snapshot.night_ms), DARKGRAY);
    for agent in &snapshot.agents {
        lines.draw(
            &format!(
                "{:<16} L{:>2}  {:<18} {}",
                agent.id.name(),
                agent.difficulty,
                agent.position.name(),
                agent.status
            ),
            GRAY,
        );
    }
}
