use serde::{Deserialize, Serialize};

/// Training configuration.
///
/// The two target dimensions were fixed constants in the original design;
/// they are configuration here so the numeric contract stays testable
/// under other choices. The defaults are the production values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Intermediate PCA target for the denoising reconstruction pass.
    pub noise_dim: usize,
    /// Final reduced dimensionality of training and test vectors.
    pub final_dim: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            noise_dim: 50,
            final_dim: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions() {
        let config = TrainConfig::default();
        assert_eq!(config.noise_dim, 50);
        assert_eq!(config.final_dim, 10);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = TrainConfig {
            noise_dim: 30,
            final_dim: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TrainConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.noise_dim, 30);
        assert_eq!(back.final_dim, 5);
    }
}
