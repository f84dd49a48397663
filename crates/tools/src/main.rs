mod autopilot;
mod custom_file;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use night_core::difficulty::{FIRST_NIGHT, LAST_NIGHT};
use night_core::{Game, InputJournal, InputPayload, NightMode, Progress, replay::replay_to_end};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::autopilot::autopilot;
use crate::custom_file::load_custom_night;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one night headless with the scripted autopilot
    Simulate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Story night to play (1-6)
        #[arg(short, long, default_value_t = 1)]
        night: u8,
        /// TOML file with custom-night levels; plays a custom night instead
        #[arg(short, long)]
        custom: Option<PathBuf>,
        /// Give up after this many ticks
        #[arg(short, long, default_value_t = 12_000)]
        ticks: u64,
        /// Milliseconds per tick
        #[arg(long, default_value_t = 33)]
        dt_ms: u64,
        /// Where to write the input journal JSON
        #[arg(short, long)]
        journal_out: Option<PathBuf>,
    },
    /// Replay a journal JSON file and print the final state
    Replay {
        #[arg(short, long)]
        journal: PathBuf,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match Args::parse().command {
        Command::Simulate { seed, night, custom, ticks, dt_ms, journal_out } => {
            simulate(seed, night, custom, ticks, dt_ms, journal_out)
        }
        Command::Replay { journal } => replay(&journal),
    }
}

fn simulate(
    seed: u64,
    night: u8,
    custom: Option<PathBuf>,
    max_ticks: u64,
    dt_ms: u64,
    journal_out: Option<PathBuf>,
) -> Result<()> {
    if !(FIRST_NIGHT..=LAST_NIGHT).contains(&night) {
        bail!("night must be between {FIRST_NIGHT} and {LAST_NIGHT}, got {night}");
    }
    let custom = custom.as_deref().map(load_custom_night).transpose()?;
    if custom.as_ref().is_some_and(|config| config.is_all_zero()) {
        warn!("custom night has every agent at level 0; it will run to 6 AM untouched");
    }
    let progress =
        Progress { current_night: night, custom_unlocked: custom.is_some(), ..Progress::default() };
    let mut game = Game::new(seed, progress.clone());
    let mut journal = InputJournal::new(seed, progress);

    let mode = match custom {
        Some(config) => {
            for (agent, level) in config.iter() {
                game.set_custom_level(agent, level);
                journal.append(InputPayload::SetCustomLevel { agent, level });
            }
            NightMode::Custom
        }
        None => NightMode::Continue,
    };
    game.start_night(mode).context("night refused to start")?;
    journal.append_start(mode);

    while game.phase().is_active() && game.current_tick() < max_ticks {
        let signals = autopilot(&game.snapshot());
        game.advance(&signals, dt_ms);
        journal.append_frame(dt_ms, signals);
    }

    let snapshot = game.snapshot();
    info!(tick = snapshot.tick, phase = ?snapshot.phase, "simulation stopped");
    println!("Simulation complete.");
    println!("Night: {}{}", snapshot.night, if snapshot.custom { " (custom)" } else { "" });
    println!("Final Tick: {}", snapshot.tick);
    println!("Clock: {} AM, {} ms", snapshot.hour, snapshot.night_ms);
    println!("Outcome: {:?}", game.outcome());
    println!("Snapshot Hash: 0x{:016x}", game.snapshot_hash());

    if let Some(path) = journal_out {
        let json = serde_json::to_string_pretty(&journal).context("failed to encode journal")?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write journal file: {}", path.display()))?;
        println!("Journal: {} ({} frames)", path.display(), journal.frame_count());
    }
    Ok(())
}

fn replay(path: &Path) -> Result<()> {
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("failed to read journal file: {}", path.display()))?;
    let journal: InputJournal =
        serde_json::from_str(&journal_data).context("failed to deserialize journal JSON")?;

    let result = replay_to_end(&journal).context("replay failed")?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("Phase: {:?}", result.final_phase);
    println!("Outcome: {:?}", result.final_outcome);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);
    println!("Saved Night: {}", result.progress.current_night);
    Ok(())
}
