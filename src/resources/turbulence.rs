//! Seeded gust generator.
//!
//! Each body axis carries a first-order Gauss-Markov process
//!
//! ```text
//! g[k+1] = a · g[k] + σ · √(1 − a²) · n[k],   a = exp(−dt / τ)
//! ```
//!
//! with `n` standard-normal draws from a caller-owned `ChaCha8Rng`. The
//! stationary standard deviation is `σ` for any `dt`.

use nalgebra::Vector3;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::RngManager;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbulenceConfig {
    /// Stationary gust standard deviation per body axis [m/s]
    pub intensity: Vector3<f64>,
    /// Correlation time [s]
    pub correlation_time: f64,
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            intensity: Vector3::new(0.5, 0.5, 0.3),
            correlation_time: 1.0,
        }
    }
}

impl TurbulenceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.correlation_time.is_finite() && self.correlation_time > 0.0) {
            return Err(ConfigError::ValidationError(
                "turbulence correlation_time must be positive".into(),
            ));
        }
        if self.intensity.iter().any(|s| !(s.is_finite() && *s >= 0.0)) {
            return Err(ConfigError::ValidationError(
                "turbulence intensity must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Turbulence {
    config: TurbulenceConfig,
    rng: ChaCha8Rng,
    gust: Vector3<f64>,
}

impl Turbulence {
    /// Uses its own named stream of the run's RNG manager.
    pub fn new(config: TurbulenceConfig, rng: &RngManager) -> Self {
        Self::with_rng(config, rng.get_rng("turbulence"))
    }

    pub fn with_rng(config: TurbulenceConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            rng,
            gust: Vector3::zeros(),
        }
    }

    /// Current gust in body axes [m/s].
    pub fn gust(&self) -> Vector3<f64> {
        self.gust
    }

    /// Advances the process by `dt` and returns the new gust.
    pub fn step(&mut self, dt: f64) -> Vector3<f64> {
        let a = (-dt / self.config.correlation_time).exp();
        let drive = (1.0 - a * a).sqrt();
        for i in 0..3 {
            let n: f64 = StandardNormal.sample(&mut self.rng);
            self.gust[i] = a * self.gust[i] + self.config.intensity[i] * drive * n;
        }
        self.gust
    }

    pub fn reset(&mut self, rng: ChaCha8Rng) {
        self.rng = rng;
        self.gust = Vector3::zeros();
    }
}
