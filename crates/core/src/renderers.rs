//! Frame renderers: sinks that receive every frame a run emits.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sortanim_protocol::{FrameId, FrameState};
use thiserror::Error;

use crate::svg::render_svg;
use crate::views::bars::{BarLayout, render_bars};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives frames in emission order.
///
/// The generator only needs `render` to succeed; what the frame turns into
/// is up to the implementation.
pub trait FrameRenderer {
    fn render(&mut self, id: FrameId, frame: &FrameState) -> Result<(), RenderError>;

    /// Called once after the last frame of a run.
    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<R: FrameRenderer + ?Sized> FrameRenderer for &mut R {
    fn render(&mut self, id: FrameId, frame: &FrameState) -> Result<(), RenderError> {
        (**self).render(id, frame)
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        (**self).finish()
    }
}

impl<R: FrameRenderer + ?Sized> FrameRenderer for Box<R> {
    fn render(&mut self, id: FrameId, frame: &FrameState) -> Result<(), RenderError> {
        (**self).render(id, frame)
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        (**self).finish()
    }
}

/// Maps animation frames to output keyframe numbers.
///
/// With `frames_per_image = n`, frame 1 lands on keyframe 1, frame 2 on
/// keyframe `1 + n`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    frames_per_image: u32,
}

impl Timeline {
    pub fn new(frames_per_image: u32) -> Self {
        Self {
            frames_per_image: frames_per_image.max(1),
        }
    }

    pub fn frames_per_image(&self) -> u32 {
        self.frames_per_image
    }

    pub fn keyframe(&self, id: FrameId) -> u64 {
        1 + id.get().saturating_sub(1) * u64::from(self.frames_per_image)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One frame as it was handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub id: FrameId,
    pub frame: FrameState,
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<RecordedFrame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<RecordedFrame> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameRenderer for FrameRecorder {
    fn render(&mut self, id: FrameId, frame: &FrameState) -> Result<(), RenderError> {
        self.frames.push(RecordedFrame {
            id,
            frame: frame.clone(),
        });
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    id: FrameId,
    keyframe: u64,
    frame: &'a FrameState,
}

/// Writes one JSON object per frame, one per line.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    timeline: Timeline,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W, timeline: Timeline) -> Self {
        Self { out, timeline }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameRenderer for JsonLinesRenderer<W> {
    fn render(&mut self, id: FrameId, frame: &FrameState) -> Result<(), RenderError> {
        let line = JsonLine {
            id,
            keyframe: self.timeline.keyframe(id),
            frame,
        };
        serde_json::to_writer(&mut self.out, &line)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Minimum width of the zero-padded keyframe number in SVG file names.
const MIN_NAME_DIGITS: usize = 5;

/// Writes each frame as a standalone SVG document named after its keyframe
/// (`frame_00001.svg`, ...).
///
/// Names sort in frame order as long as no keyframe is wider than the
/// padding. Use [`SvgFrameWriter::with_last_keyframe`] when more than
/// 99999 keyframes are possible.
pub struct SvgFrameWriter {
    dir: PathBuf,
    layout: BarLayout,
    timeline: Timeline,
    dark: bool,
    digits: usize,
    written: usize,
}

impl SvgFrameWriter {
    /// Creates `dir` if it does not exist yet.
    pub fn new(
        dir: impl Into<PathBuf>,
        layout: BarLayout,
        timeline: Timeline,
        dark: bool,
    ) -> Result<Self, RenderError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::info!(dir = %dir.display(), "writing SVG frames");
        Ok(Self {
            dir,
            layout,
            timeline,
            dark,
            digits: MIN_NAME_DIGITS,
            written: 0,
        })
    }

    /// Widens the file name padding to fit keyframes up to `last`.
    pub fn with_last_keyframe(mut self, last: u64) -> Self {
        let digits = last.checked_ilog10().map_or(1, |d| d as usize + 1);
        self.digits = digits.max(MIN_NAME_DIGITS);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn file_name(&self, id: FrameId) -> String {
        format!(
            "frame_{:0width$}.svg",
            self.timeline.keyframe(id),
            width = self.digits
        )
    }
}

impl FrameRenderer for SvgFrameWriter {
    fn render(&mut self, id: FrameId, frame: &FrameState) -> Result<(), RenderError> {
        let commands = render_bars(id, frame, &self.layout);
        let svg = render_svg(&commands, self.layout.width, self.layout.height, self.dark);
        std::fs::write(self.dir.join(self.file_name(id)), svg)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        tracing::info!(
            dir = %self.dir.display(),
            files = self.written,
            "finished writing SVG frames"
        );
        Ok(())
    }
}

/// Forwards every frame to several renderers, in order.
#[derive(Default)]
pub struct FrameFanout<'a> {
    sinks: Vec<&'a mut dyn FrameRenderer>,
}

impl<'a> FrameFanout<'a> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(&mut self, sink: &'a mut dyn FrameRenderer) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl FrameRenderer for FrameFanout<'_> {
    fn render(&mut self, id: FrameId, frame: &FrameState) -> Result<(), RenderError> {
        for sink in &mut self.sinks {
            sink.render(id, frame)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        for sink in &mut self.sinks {
            sink.finish()?;
        }
        Ok(())
    }
}
