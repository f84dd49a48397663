use night_core::{Camera, Game, NightMode, PhaseKind, PlayerSignals, Progress};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const MAX_TICKS: u32 = 12_000;

fn random_signals(rng: &mut ChaCha8Rng) -> PlayerSignals {
    let bits = rng.next_u32();
    PlayerSignals {
        watching_hall: bits & 0b1 != 0,
        light_left_vent: bits & 0b10 != 0,
        light_right_vent: bits & 0b100 != 0,
        disguise_active: bits & 0b1000 != 0,
        observation_active: bits & 0b1_0000 != 0,
        observation_target: Camera(((bits >> 8) % u32::from(Camera::COUNT)) as u8 + 1),
        recharge_requested: bits & 0b10_0000 != 0,
        camera_light: bits & 0b100_0000 != 0,
    }
}

fn run_fuzz_night(seed: u64, input_seed: u64, night: u8) -> Result<(), String> {
    let progress = Progress { current_night: night, ..Progress::default() };
    let mut game = Game::new(seed, progress);
    game.start_night(NightMode::Continue).map_err(|error| error.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);
    let mut last_ms = 0;

    for _ in 0..MAX_TICKS {
        let dt_ms = 16 + u64::from(rng.next_u32() % 34);
        let result = game.advance(&random_signals(&mut rng), dt_ms);

        let conflicts = game.roster().occupancy().conflicts();
        if !conflicts.is_empty() {
            return Err(format!("seed {seed}: shared exclusive rooms {conflicts:?}"));
        }
        let snapshot = game.snapshot();
        if snapshot.night_ms < last_ms {
            return Err(format!("seed {seed}: night clock ran backwards"));
        }
        last_ms = snapshot.night_ms;
        if !result.phase.is_active() {
            if result.phase == PhaseKind::Menu {
                return Err(format!("seed {seed}: night ended without an outcome"));
            }
            return Ok(());
        }
    }
    Ok(())
}

#[test]
fn occupancy_stays_exclusive_under_random_input() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(48));
    let strategy = (any::<u64>(), any::<u64>(), 1u8..=6);
    runner
        .run(&strategy, |(seed, input_seed, night)| {
            run_fuzz_night(seed, input_seed, night).map_err(TestCaseError::fail)
        })
        .expect("fuzzed nights keep every invariant");
}
