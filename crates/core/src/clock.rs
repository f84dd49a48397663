//! Night clock: total active time plus the 12 AM → 6 AM hour hand.

pub const HOUR_DURATION_MS: u64 = 60_000;
pub const FIRST_HOUR: u8 = 12;
pub const DAWN_HOUR: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    night_ms: u64,
    hour_elapsed_ms: u64,
    hour: u8,
}

impl Clock {
    pub fn new() -> Self {
        Self { night_ms: 0, hour_elapsed_ms: 0, hour: FIRST_HOUR }
    }

    /// Advances by `dt_ms` and returns the new hour when the hand moves.
    /// At most one hour passes per call.
    pub fn advance(&mut self, dt_ms: u64) -> Option<u8> {
        self.night_ms += dt_ms;
        self.hour_elapsed_ms += dt_ms;
        if self.hour_elapsed_ms < HOUR_DURATION_MS {
            return None;
        }
        self.hour_elapsed_ms -= HOUR_DURATION_MS;
        self.hour = if self.hour == FIRST_HOUR { 1 } else { self.hour + 1 };
        Some(self.hour)
    }

    /// Milliseconds of active play since the night started. Every agent timer
    /// is measured against this value.
    pub fn now(&self) -> u64 {
        self.night_ms
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn hour_elapsed_ms(&self) -> u64 {
        self.hour_elapsed_ms
    }

    pub fn is_dawn(&self) -> bool {
        self.hour == DAWN_HOUR
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_run_twelve_then_one_through_six() {
        let mut clock = Clock::new();
        let mut hours = Vec::new();
        for _ in 0..6 {
            hours.push(clock.advance(HOUR_DURATION_MS).expect("hour should tick"));
        }
        assert_eq!(hours, vec![1, 2, 3, 4, 5, 6]);
        assert!(clock.is_dawn());
        assert_eq!(clock.now(), 6 * HOUR_DURATION_MS);
    }

    #[test]
    fn remainder_carries_into_next_hour() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(59_990), None);
        assert_eq!(clock.advance(33), Some(1));
        assert_eq!(clock.hour_elapsed_ms(), 23);
    }
}
