//! Multi-octave fractal noise field normalized to `[0, 1]`.
//!
//! Composites octaves of simplex noise (fractal Brownian motion) and maps
//! the signed result into the unit interval that every terrain threshold in
//! this crate is expressed in.

use noise::{NoiseFn, Simplex};

/// Frequency multiplier between successive octaves.
const LACUNARITY: f64 = 2.0;

/// Amplitude multiplier between successive octaves.
const PERSISTENCE: f64 = 0.5;

/// A deterministic 2-D coherent noise function.
///
/// The same `(seed, octaves)` pair always yields the same value at the same
/// coordinate, across instances and across runs. Coordinates are used as
/// given; callers apply their own scale.
#[derive(Clone)]
pub struct NoiseField {
    noise: Simplex,
    octaves: u32,
    max_amplitude: f64,
}

impl NoiseField {
    /// Create a field with the given seed and octave count.
    ///
    /// A zero octave count is treated as one octave.
    pub fn new(seed: u64, octaves: u32) -> Self {
        let octaves = octaves.max(1);
        let max_amplitude = (0..octaves).map(|i| PERSISTENCE.powi(i as i32)).sum();
        Self {
            noise: Simplex::new(fold_seed(seed)),
            octaves,
            max_amplitude,
        }
    }

    /// Sample the signed fBm value at `(x, y)`, in `[-1, 1]`.
    pub fn sample_raw(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..self.octaves {
            total += self.noise.get([x * frequency, y * frequency]) * amplitude;
            frequency *= LACUNARITY;
            amplitude *= PERSISTENCE;
        }

        (total / self.max_amplitude).clamp(-1.0, 1.0)
    }

    /// Sample the normalized value at `(x, y)`, in `[0, 1]`.
    ///
    /// The signed value is shifted by one half and clamped, so the central
    /// band of the noise spreads across the whole unit interval.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        (self.sample_raw(x, y) + 0.5).clamp(0.0, 1.0)
    }

    /// Number of octaves composited per sample.
    pub fn octaves(&self) -> u32 {
        self.octaves
    }
}

/// Fold a 64-bit seed into the 32-bit seed simplex noise accepts.
fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}
