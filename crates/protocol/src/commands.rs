use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core turns each animation frame into a `Vec<RenderCommand>`.
/// Renderers consume this list sequentially, and each command carries all
/// the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderCommand {
    /// Draw a filled rectangle. `index` is the sequence slot a bar stands
    /// for, if any. `label` is shown as a tooltip where the renderer can.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        label: Option<String>,
        index: Option<usize>,
    },

    /// Draw a closed, filled polygon through `points`.
    DrawPolygon {
        points: Vec<Point>,
        color: ThemeToken,
    },

    /// Begin a logical group (one animation frame). Renderers may use this
    /// for layer separation.
    BeginGroup { id: String },

    /// End the current group.
    EndGroup,
}
