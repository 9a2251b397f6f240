use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use sortanim_protocol::FrameId;
use thiserror::Error;

use crate::algorithm::SortAlgorithm;
use crate::renderers::Timeline;
use crate::sequence::SequenceSpec;
use crate::views::bars::BarLayout;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sequence must contain at least one value")]
    EmptyCount,
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("frames_per_image must be at least 1")]
    ZeroFramesPerImage,
    #[error("at least one algorithm must be selected")]
    NoAlgorithms,
    #[error("layout leaves no room for bars: {0}")]
    Layout(String),
    #[error("reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to produce one animation, loadable from JSON.
///
/// Every field has a default, so `{}` is a valid config: forty values in
/// `10..=500` sorted by merge sort on a 1920×1080 canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub sequence: SequenceSpec,
    /// Runs are chained in this order and share one frame counter.
    pub algorithms: Vec<SortAlgorithm>,
    pub layout: BarLayout,
    /// Output keyframes between two consecutive animation frames.
    pub frames_per_image: u32,
    /// Fixed seed for reproducible input; random when absent.
    pub seed: Option<u64>,
    /// Dark SVG palette.
    pub dark: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            sequence: SequenceSpec::default(),
            algorithms: vec![SortAlgorithm::Merge],
            layout: BarLayout::default(),
            frames_per_image: 1,
            seed: None,
            dark: false,
        }
    }
}

impl AnimationConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded animation config");
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sequence.validate()?;
        if self.frames_per_image == 0 {
            return Err(ConfigError::ZeroFramesPerImage);
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }
        if self.layout.bar_width(self.sequence.count) <= 0.0 {
            return Err(ConfigError::Layout(format!(
                "{} bars do not fit in width {}",
                self.sequence.count, self.layout.width
            )));
        }
        Ok(())
    }

    pub fn timeline(&self) -> Timeline {
        Timeline::new(self.frames_per_image)
    }

    /// Highest keyframe the configured runs can reach, assuming ids start at
    /// [`FrameId::FIRST`].
    pub fn last_keyframe_bound(&self) -> u64 {
        let frames: u64 = self
            .algorithms
            .iter()
            .map(|algorithm| algorithm.max_frames(self.sequence.count))
            .sum();
        self.timeline().keyframe(FrameId(frames.max(1)))
    }

    /// Build the input sequence, seeded when `seed` is set.
    pub fn generate_values(&self) -> Result<Vec<f64>, ConfigError> {
        match self.seed {
            Some(seed) => self.sequence.generate(&mut StdRng::seed_from_u64(seed)),
            None => self.sequence.generate(&mut rand::thread_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = AnimationConfig::from_json("{}").unwrap();
        assert_eq!(config, AnimationConfig::default());
        assert_eq!(config.sequence.count, 40);
        assert_eq!(config.algorithms, vec![SortAlgorithm::Merge]);
    }

    #[test]
    fn partial_config_overrides_fields() {
        let config = AnimationConfig::from_json(
            r#"{
                "sequence": { "count": 8, "max": 20 },
                "algorithms": ["bubble", "selection"],
                "frames_per_image": 3,
                "seed": 5
            }"#,
        )
        .unwrap();
        assert_eq!(config.sequence.count, 8);
        assert_eq!(config.sequence.min, 10);
        assert_eq!(config.sequence.max, 20);
        assert_eq!(
            config.algorithms,
            vec![SortAlgorithm::Bubble, SortAlgorithm::Selection]
        );
        assert_eq!(config.timeline().frames_per_image(), 3);
    }

    #[test]
    fn seeded_values_are_reproducible() {
        let config = AnimationConfig {
            seed: Some(11),
            ..AnimationConfig::default()
        };
        assert_eq!(
            config.generate_values().unwrap(),
            config.generate_values().unwrap()
        );
    }

    #[test]
    fn keyframe_bound_covers_all_runs() {
        let config = AnimationConfig {
            sequence: SequenceSpec {
                count: 3,
                ..SequenceSpec::default()
            },
            algorithms: vec![SortAlgorithm::Bubble, SortAlgorithm::Selection],
            frames_per_image: 2,
            ..AnimationConfig::default()
        };
        // 5 bubble frames + 10 selection frames, two keyframes apart.
        assert_eq!(config.last_keyframe_bound(), 1 + 14 * 2);
    }

    #[test]
    fn rejects_zero_frames_per_image() {
        let err = AnimationConfig::from_json(r#"{"frames_per_image": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroFramesPerImage));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let err = AnimationConfig::from_json(r#"{"algorithms": ["quick"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_overcrowded_layout() {
        let err = AnimationConfig::from_json(
            r#"{"sequence": {"count": 500}, "layout": {"width": 200}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Layout(_)));
    }
}
