use anyhow::{Result, ensure};
use clap::Parser;
use night_core::{Camera, Game, NightMode, PhaseKind, PlayerSignals, Progress};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Nights to play, cycling through nights 1-6
    #[arg(short, long, default_value_t = 12)]
    nights: u32,
    #[arg(short, long, default_value_t = 12_000)]
    ticks: u32,
}

fn random_signals(rng: &mut ChaCha8Rng) -> PlayerSignals {
    let bits = rng.next_u32();
    PlayerSignals {
        watching_hall: bits & 1 != 0,
        light_left_vent: bits & 2 != 0,
        light_right_vent: bits & 4 != 0,
        disguise_active: bits & 8 != 0,
        observation_active: bits & 16 != 0,
        observation_target: Camera((bits >> 8) as u8 % Camera::COUNT + 1),
        recharge_requested: bits & 32 != 0,
        camera_light: bits & 64 != 0,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Starting fuzz harness on seed {} for {} nights...", args.seed, args.nights);

    for index in 0..args.nights {
        let night = (index % 6) as u8 + 1;
        let seed = args.seed.wrapping_add(u64::from(index));
        let progress = Progress { current_night: night, ..Progress::default() };
        let mut game = Game::new(seed, progress);
        game.start_night(NightMode::Continue)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for _ in 0..args.ticks {
            let dt_ms = 16 + u64::from(rng.next_u32() % 34);
            let result = game.advance(&random_signals(&mut rng), dt_ms);

            let conflicts = game.roster().occupancy().conflicts();
            ensure!(conflicts.is_empty(), "seed {seed}: exclusive rooms shared: {conflicts:?}");
            ensure!(result.phase != PhaseKind::Menu, "seed {seed}: night ended with no outcome");
            if !result.phase.is_active() {
                break;
            }
        }
        println!(
            "night {night} seed {seed}: {:?} at tick {}",
            game.outcome(),
            game.current_tick()
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
