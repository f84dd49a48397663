//! Injected randomness for every decision an agent or the session makes.
//! Production code rolls a seeded ChaCha8 stream so a night is reproducible
//! from its seed; tests can script exact rolls.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait Dice {
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `1..=20`.
    fn d20(&mut self) -> u8 {
        (self.next_u32() % 20) as u8 + 1
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        self.next_u32() as usize % len
    }

    /// True with probability `percent / 100`.
    fn chance(&mut self, percent: u32) -> bool {
        self.next_u32() % 100 < percent
    }
}

pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Dice for SeededDice {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

/// Replays a fixed list of raw values, then repeats the last one.
#[cfg(test)]
pub(crate) struct ScriptedDice {
    values: Vec<u32>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedDice {
    /// Builds dice whose `d20` calls return the given rolls in order.
    pub(crate) fn d20s(rolls: &[u8]) -> Self {
        Self { values: rolls.iter().map(|roll| u32::from(roll - 1)).collect(), cursor: 0 }
    }

    pub(crate) fn raw(values: &[u32]) -> Self {
        Self { values: values.to_vec(), cursor: 0 }
    }
}

#[cfg(test)]
impl Dice for ScriptedDice {
    fn next_u32(&mut self) -> u32 {
        let value = self.values.get(self.cursor).or(self.values.last()).copied().unwrap_or(0);
        self.cursor += 1;
        value
    }
}
