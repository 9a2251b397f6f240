use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// How to build the random input sequence of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceSpec {
    /// Number of values.
    pub count: usize,
    /// Smallest value that may be drawn (inclusive).
    pub min: i64,
    /// Largest value that may be drawn (inclusive).
    pub max: i64,
}

impl Default for SequenceSpec {
    fn default() -> Self {
        Self {
            count: 40,
            min: 10,
            max: 500,
        }
    }
}

impl SequenceSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyCount);
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Draw `count` whole numbers uniformly from `min..=max`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>, ConfigError> {
        self.validate()?;
        Ok((0..self.count)
            .map(|_| rng.gen_range(self.min..=self.max) as f64)
            .collect())
    }
}
