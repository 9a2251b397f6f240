//! Sorting-algorithm animations as a stream of declarative frames.
//!
//! A [`Generator`] runs one of the [`SortAlgorithm`]s over a sequence and
//! hands a [`FrameState`](sortanim_protocol::FrameState) to a
//! [`FrameRenderer`] after every comparison, swap or placement. Renderers
//! decide what a frame becomes: an SVG file, a JSON line, or a record kept
//! in memory.

pub mod algorithm;
pub mod config;
pub mod generator;
pub mod renderers;
pub mod sequence;
mod sorts;
pub mod svg;
pub mod views;

pub use algorithm::{ParseAlgorithmError, SortAlgorithm};
pub use config::{AnimationConfig, ConfigError};
pub use generator::{Generator, RunOutcome, SortError};
pub use renderers::{FrameRenderer, RenderError};
pub use sequence::SequenceSpec;
