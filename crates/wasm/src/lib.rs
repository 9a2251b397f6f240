use serde::Serialize;
use sortanim_core::renderers::{FrameRecorder, RecordedFrame};
use sortanim_core::svg::render_svg;
use sortanim_core::views::bars::{BarLayout, render_bars};
use sortanim_core::{Generator, SortAlgorithm};
use sortanim_protocol::{FrameId, FrameState};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct RunResult {
    sorted: Vec<f64>,
    frames: Vec<RecordedFrame>,
}

fn layout(width: f64, height: f64) -> BarLayout {
    BarLayout {
        width,
        height,
        ..BarLayout::default()
    }
}

fn run_sort_json(algorithm: &str, values_json: &str) -> Result<String, String> {
    let algorithm: SortAlgorithm = algorithm.parse().map_err(|e| format!("{e}"))?;
    let values: Vec<f64> =
        serde_json::from_str(values_json).map_err(|e| format!("invalid values: {e}"))?;
    let mut recorder = FrameRecorder::new();
    let outcome = Generator::new()
        .run(values, algorithm, &mut recorder)
        .map_err(|e| e.to_string())?;
    let result = RunResult {
        sorted: outcome.sorted,
        frames: recorder.into_frames(),
    };
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

fn parse_frame(frame_json: &str) -> Result<FrameState, String> {
    serde_json::from_str(frame_json).map_err(|e| format!("invalid frame: {e}"))
}

/// Run one sort over a JSON array of numbers. Returns
/// `{"sorted": [...], "frames": [{"id": 1, "frame": {...}}, ...]}`.
#[wasm_bindgen]
pub fn run_sort(algorithm: &str, values_json: &str) -> Result<String, JsError> {
    run_sort_json(algorithm, values_json).map_err(|e| JsError::new(&e))
}

/// Render frame `id` (as produced by `run_sort`) to render commands as JSON.
#[wasm_bindgen]
pub fn render_frame(id: u64, frame_json: &str, width: f64, height: f64) -> Result<String, JsError> {
    let frame = parse_frame(frame_json).map_err(|e| JsError::new(&e))?;
    let commands = render_bars(FrameId(id), &frame, &layout(width, height));
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a frame straight to an SVG document.
#[wasm_bindgen]
pub fn render_frame_svg(
    id: u64,
    frame_json: &str,
    width: f64,
    height: f64,
    dark: bool,
) -> Result<String, JsError> {
    let frame = parse_frame(frame_json).map_err(|e| JsError::new(&e))?;
    let commands = render_bars(FrameId(id), &frame, &layout(width, height));
    Ok(render_svg(&commands, width, height, dark))
}
