use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Source of uniform samples in `[0, 1)`.
///
/// Every randomized visual parameter goes through this trait so tests can
/// replay an exact sequence.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform in `[min, max)`.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    fn int(&mut self, min: i32, max: i32) -> i32 {
        self.range(min as f64, max as f64 + 1.0).floor() as i32
    }
}

pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        // keep the half-open contract even if a script says 1.0
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
