use sortanim_protocol::{FrameId, FrameState};
use thiserror::Error;
use tracing::{debug, trace};

use crate::algorithm::SortAlgorithm;
use crate::renderers::{FrameRenderer, RenderError};
use crate::sorts;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("cannot animate an empty sequence")]
    EmptySequence,
    #[error("value {value} at index {index} is not a finite number")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("renderer failed: {0}")]
    Render(#[from] RenderError),
}

/// Result of one completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The input, sorted ascending.
    pub sorted: Vec<f64>,
    /// Frames emitted by this run.
    pub frames: u64,
    pub first_frame: FrameId,
    pub last_frame: FrameId,
}

/// Drives sort runs and owns the frame counter.
///
/// The counter is not reset between runs, so chaining several runs on one
/// generator yields one continuous animation.
#[derive(Debug, Clone)]
pub struct Generator {
    first: FrameId,
    next: FrameId,
}

impl Generator {
    pub fn new() -> Self {
        Self::starting_at(FrameId::FIRST)
    }

    pub fn starting_at(first: FrameId) -> Self {
        Self { first, next: first }
    }

    /// Id the next emitted frame will get.
    pub fn next_frame(&self) -> FrameId {
        self.next
    }

    /// Frames emitted across every run so far.
    pub fn frames_emitted(&self) -> u64 {
        self.next.get() - self.first.get()
    }

    /// Sort `values` with `algorithm`, sending one frame to `renderer` per
    /// step, and return the sorted sequence.
    ///
    /// The first frame of every run shows the untouched input. Bar scaling
    /// (`max_value`) is taken from the input once and reused for every frame.
    pub fn run<R: FrameRenderer>(
        &mut self,
        mut values: Vec<f64>,
        algorithm: SortAlgorithm,
        renderer: &mut R,
    ) -> Result<RunOutcome, SortError> {
        if values.is_empty() {
            return Err(SortError::EmptySequence);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SortError::NonFiniteValue { index, value });
        }

        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let first_frame = self.next;
        debug!(
            %algorithm,
            len = values.len(),
            max_value,
            first_frame = %first_frame,
            "starting sort run"
        );

        let mut out = FrameEmitter {
            renderer: &mut *renderer,
            next: &mut self.next,
            max_value,
            emitted: 0,
        };
        out.emit(out.frame(&values))?;
        match algorithm {
            SortAlgorithm::Selection => sorts::selection::sort(&mut values, &mut out)?,
            SortAlgorithm::Bubble => sorts::bubble::sort(&mut values, &mut out)?,
            SortAlgorithm::Insertion => sorts::insertion::sort(&mut values, &mut out)?,
            SortAlgorithm::Merge => sorts::merge::sort(&mut values, &mut out)?,
        }
        let frames = out.emitted;
        renderer.finish()?;

        debug!(%algorithm, frames, next_frame = %self.next, "finished sort run");
        Ok(RunOutcome {
            sorted: values,
            frames,
            first_frame,
            last_frame: FrameId(self.next.get() - 1),
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands frames to the renderer and advances the counter.
pub(crate) struct FrameEmitter<'a> {
    renderer: &'a mut dyn FrameRenderer,
    next: &'a mut FrameId,
    max_value: f64,
    emitted: u64,
}

impl FrameEmitter<'_> {
    /// A bare frame of the current values, carrying the run's `max_value`.
    pub(crate) fn frame(&self, values: &[f64]) -> FrameState {
        FrameState::new(values, self.max_value)
    }

    pub(crate) fn emit(&mut self, frame: FrameState) -> Result<(), RenderError> {
        let id = *self.next;
        trace!(
            frame = %id,
            highlight = ?frame.highlight,
            done = frame.done.len(),
            pointer = ?frame.pointer,
            "emit"
        );
        self.renderer.render(id, &frame)?;
        *self.next = id.next();
        self.emitted += 1;
        Ok(())
    }
}
