//! Hyperparameters handed to an external embedding trainer.
//!
//! Nothing here trains a model. The record only carries the numbers a
//! trainer needs alongside the record stream, with validation and the
//! linear learning-rate decay most word2vec-style trainers use.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wbcorpus_core::{CorpusError, Result};

/// Output format of the trained vector file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorFormat {
    Text,
    #[default]
    Binary,
}

/// Configuration for an embedding trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Vector dimensionality
    pub vector_size: usize,
    /// Context window size
    pub window: usize,
    /// Minimum token count for a token to get a vector
    pub min_count: u64,
    /// Downsampling threshold for frequent tokens
    pub sample: f64,
    /// Negative samples per positive example
    pub negative: usize,
    /// Starting learning rate
    pub alpha: f64,
    /// Floor of the learning rate
    pub min_alpha: f64,
    /// Passes over the corpus
    pub epochs: usize,
    /// Parallelism hint
    pub workers: usize,
    /// Vector file format
    pub format: VectorFormat,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            vector_size: 200,
            window: 5,
            min_count: 5,
            sample: 1e-3,
            negative: 5,
            alpha: 0.025,
            min_alpha: 0.0001,
            epochs: 5,
            workers: 4,
            format: VectorFormat::Binary,
        }
    }
}

impl TrainerConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> TrainerConfigBuilder {
        TrainerConfigBuilder::default()
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        let config: TrainerConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(CorpusError::InvalidConfig(msg.to_string()));

        if self.vector_size == 0 {
            return invalid("vector_size must be positive");
        }
        if self.window == 0 {
            return invalid("window must be positive");
        }
        if self.epochs == 0 {
            return invalid("epochs must be positive");
        }
        if self.workers == 0 {
            return invalid("workers must be positive");
        }
        if !(self.sample >= 0.0) {
            return invalid("sample must be non-negative");
        }
        if !(self.alpha > 0.0) {
            return invalid("alpha must be positive");
        }
        if !(self.min_alpha >= 0.0 && self.min_alpha <= self.alpha) {
            return invalid("min_alpha must be between 0 and alpha");
        }
        Ok(())
    }

    /// Learning rate after `processed` of `total` tokens.
    ///
    /// Decays linearly from `alpha` and never drops below `min_alpha`.
    pub fn alpha_at(&self, processed: u64, total: u64) -> f64 {
        let progress = processed as f64 / (total as f64 + 1.0);
        (self.alpha * (1.0 - progress)).max(self.min_alpha)
    }
}

/// Builder for [`TrainerConfig`].
#[derive(Debug, Clone, Default)]
pub struct TrainerConfigBuilder {
    config: TrainerConfig,
}

impl TrainerConfigBuilder {
    pub fn vector_size(mut self, size: usize) -> Self {
        self.config.vector_size = size;
        self
    }

    pub fn window(mut self, window: usize) -> Self {
        self.config.window = window;
        self
    }

    pub fn min_count(mut self, min_count: u64) -> Self {
        self.config.min_count = min_count;
        self
    }

    pub fn sample(mut self, sample: f64) -> Self {
        self.config.sample = sample;
        self
    }

    pub fn negative(mut self, negative: usize) -> Self {
        self.config.negative = negative;
        self
    }

    /// Set the starting and final learning rate.
    pub fn learning_rate(mut self, alpha: f64, min_alpha: f64) -> Self {
        self.config.alpha = alpha;
        self.config.min_alpha = min_alpha;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.config.epochs = epochs;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn format(mut self, format: VectorFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<TrainerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = TrainerConfig::builder()
            .vector_size(100)
            .window(8)
            .min_count(2)
            .epochs(10)
            .build()
            .unwrap();
        assert_eq!(config.vector_size, 100);
        assert_eq!(config.window, 8);
        assert_eq!(config.min_count, 2);
        assert_eq!(config.negative, 5);
    }

    #[test]
    fn test_invalid_values() {
        assert!(TrainerConfig::builder().vector_size(0).build().is_err());
        assert!(TrainerConfig::builder().learning_rate(0.01, 0.1).build().is_err());
        assert!(TrainerConfig::builder().sample(f64::NAN).build().is_err());
    }

    #[test]
    fn test_alpha_schedule() {
        let config = TrainerConfig::default();
        assert!((config.alpha_at(0, 1000) - 0.025).abs() < 1e-12);

        let halfway = config.alpha_at(500, 999);
        assert!((halfway - 0.0125).abs() < 1e-9);

        assert_eq!(config.alpha_at(5000, 1000), config.min_alpha);
    }

    #[test]
    fn test_json() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"vector_size": 50, "format": "text"}}"#).unwrap();

        let config = TrainerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.vector_size, 50);
        assert_eq!(config.format, VectorFormat::Text);
        assert_eq!(config.window, 5);
    }
}
