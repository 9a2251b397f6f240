use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of one emitted animation frame.
///
/// Ids start at 1 and grow by exactly one per emitted frame. A generator
/// that chains several runs keeps counting instead of restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub u64);

impl FrameId {
    pub const FIRST: FrameId = FrameId(1);

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> FrameId {
        FrameId(self.0 + 1)
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of a sequence mid-sort, handed to a frame renderer.
///
/// This is the single intermediate representation between the sorting
/// algorithms and every output backend:
///
/// ```text
///   selection ─┐
///   bubble    ├─▶ FrameState ──▶ bar view ──▶ RenderCommand[] ──▶ SVG / terminal
///   insertion ─┤    (this)  └─────────────▶ JSON lines
///   merge     ─┘
/// ```
///
/// A fresh value is built for every render call and is not retained by the
/// generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    /// Sequence contents after the step that triggered this frame.
    pub values: Vec<f64>,
    /// Indices being compared, swapped or written.
    #[serde(default)]
    pub highlight: BTreeSet<usize>,
    /// Indices whose final sorted position is established.
    #[serde(default)]
    pub done: BTreeSet<usize>,
    /// Auxiliary cursor, e.g. the current minimum candidate.
    #[serde(default)]
    pub pointer: Option<usize>,
    /// Scaling reference for bar heights, constant across one run.
    pub max_value: f64,
}

/// Visual class of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarStatus {
    Normal,
    Highlighted,
    Sorted,
}

impl FrameState {
    pub fn new(values: &[f64], max_value: f64) -> Self {
        Self {
            values: values.to_vec(),
            highlight: BTreeSet::new(),
            done: BTreeSet::new(),
            pointer: None,
            max_value,
        }
    }

    pub fn with_highlight(mut self, highlight: impl IntoIterator<Item = usize>) -> Self {
        self.highlight = highlight.into_iter().collect();
        self
    }

    pub fn with_done(mut self, done: &BTreeSet<usize>) -> Self {
        self.done = done.clone();
        self
    }

    /// Like [`with_done`](Self::with_done) but leaves `index` out.
    pub fn with_done_except(mut self, done: &BTreeSet<usize>, index: usize) -> Self {
        self.done = done.iter().copied().filter(|&i| i != index).collect();
        self
    }

    pub fn with_pointer(mut self, pointer: usize) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted takes precedence over highlighted.
    pub fn status(&self, index: usize) -> BarStatus {
        if self.done.contains(&index) {
            BarStatus::Sorted
        } else if self.highlight.contains(&index) {
            BarStatus::Highlighted
        } else {
            BarStatus::Normal
        }
    }

    /// Whether every annotation points inside `values`.
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.values.len();
        self.highlight.iter().chain(&self.done).all(|&i| i < n)
            && self.pointer.is_none_or(|p| p < n)
    }
}
