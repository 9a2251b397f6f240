use serde::{Deserialize, Serialize};
use sortanim_protocol::{BarStatus, FrameId, FrameState, Point, Rect, RenderCommand, ThemeToken};

/// Headroom above the tallest bar, as a factor of `max_value`.
const HEADROOM: f64 = 1.3;
/// Half-height of the pointer triangle.
const POINTER_SIZE: f64 = 10.0;

/// Canvas geometry for the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarLayout {
    pub width: f64,
    pub height: f64,
    /// Margin on every side of the chart.
    pub padding: f64,
    /// Gap between two neighbouring bars.
    pub bar_spacing: f64,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            padding: 20.0,
            bar_spacing: 10.0,
        }
    }
}

impl BarLayout {
    /// Width of one bar when `count` bars share the canvas.
    pub fn bar_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let gaps = (count - 1) as f64 * self.bar_spacing;
        (self.width - self.padding * 2.0 - gaps) / count as f64
    }

    /// Pixels per unit of value. Zero when `max_value` gives nothing to
    /// scale against.
    pub fn height_unit(&self, max_value: f64) -> f64 {
        if max_value <= 0.0 {
            return 0.0;
        }
        (self.height - self.padding * 2.0) / (max_value * HEADROOM)
    }

    /// Left edge of bar `index`.
    pub fn bar_x(&self, index: usize, bar_width: f64) -> f64 {
        self.padding + index as f64 * (bar_width + self.bar_spacing)
    }

    /// Screen-space y of the line all bars stand on.
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

/// Render frame `id` as a bar chart, grouped under `frame-<id>`.
///
/// Bars stand on a common baseline, scaled by the frame's `max_value` so
/// heights stay stable for a whole run. Sorted bars win over highlighted
/// ones. A pointer, if present, is drawn as a triangle under its bar.
pub fn render_bars(id: FrameId, frame: &FrameState, layout: &BarLayout) -> Vec<RenderCommand> {
    if frame.is_empty() {
        return Vec::new();
    }

    let bar_width = layout.bar_width(frame.len()).max(0.0);
    let unit = layout.height_unit(frame.max_value);
    let baseline = layout.baseline();

    let mut commands = Vec::with_capacity(frame.len() + 4);
    commands.push(RenderCommand::BeginGroup {
        id: format!("frame-{id}"),
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, layout.width, layout.height),
        color: ThemeToken::Background,
        label: None,
        index: None,
    });

    for (i, &value) in frame.values.iter().enumerate() {
        let h = (value * unit).max(0.0);
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(layout.bar_x(i, bar_width), baseline - h, bar_width, h),
            color: bar_color(frame.status(i)),
            label: Some(format_value(value)),
            index: Some(i),
        });
    }

    if let Some(pointer) = frame.pointer {
        let x = layout.bar_x(pointer, bar_width);
        commands.push(RenderCommand::DrawPolygon {
            points: vec![
                Point::new(x, baseline + POINTER_SIZE),
                Point::new(x + bar_width, baseline + POINTER_SIZE),
                Point::new(x + bar_width / 2.0, baseline - POINTER_SIZE),
            ],
            color: ThemeToken::BarHighlight,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

fn bar_color(status: BarStatus) -> ThemeToken {
    match status {
        BarStatus::Sorted => ThemeToken::BarSorted,
        BarStatus::Highlighted => ThemeToken::BarHighlight,
        BarStatus::Normal => ThemeToken::Bar,
    }
}

/// Whole numbers print without a fractional part.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
