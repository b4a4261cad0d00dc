//! Biome kinds and the noise bands that select them.

/// Large-scale terrain category governing how a chunk is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Open wilderness: water, bushes, and rock from elevation noise.
    Outlands,
    /// Paved ground with stamped structures.
    Urban,
}

impl Biome {
    /// Every biome, in ascending noise-band order.
    pub const ALL: [Biome; 2] = [Biome::Outlands, Biome::Urban];

    /// Maps a normalized biome-noise value to a biome.
    ///
    /// Values below `0.5` are outlands; everything else is urban.
    pub fn from_noise(value: f64) -> Self {
        if value < 0.5 {
            Biome::Outlands
        } else {
            Biome::Urban
        }
    }

    /// Lower-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Biome::Outlands => "outlands",
            Biome::Urban => "urban",
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(Biome::from_noise(0.0), Biome::Outlands);
        assert_eq!(Biome::from_noise(0.499_999), Biome::Outlands);
        assert_eq!(Biome::from_noise(0.5), Biome::Urban);
        assert_eq!(Biome::from_noise(1.0), Biome::Urban);
    }

    #[test]
    fn test_bands_ascend_in_declared_order() {
        let samples: Vec<_> = (0..=10).map(|i| Biome::from_noise(i as f64 / 10.0)).collect();
        let first_urban = samples.iter().position(|&b| b == Biome::Urban);
        assert_eq!(first_urban, Some(5));
        assert!(samples[5..].iter().all(|&b| b == Biome::ALL[1]));
    }
}
