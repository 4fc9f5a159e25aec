use rand::{rngs::ThreadRng, Rng};

/// Source of the chance rolls and reply picks used by the matcher.
pub trait RandomSource {
    /// Uniform integer in `1..=100`.
    fn roll_percent(&mut self) -> u8;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG. Not `Send`, so create it after the last `.await`.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for ThreadRandom {
    fn roll_percent(&mut self) -> u8 {
        self.rng.random_range(1..=100)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Replays fixed rolls and picks; once exhausted it rolls 1 and picks 0.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedRandom {
    rolls: std::collections::VecDeque<u8>,
    picks: std::collections::VecDeque<usize>,
    pub rolls_taken: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(rolls: &[u8], picks: &[usize]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            picks: picks.iter().copied().collect(),
            rolls_taken: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn roll_percent(&mut self) -> u8 {
        self.rolls_taken += 1;
        self.rolls.pop_front().unwrap_or(1)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}
