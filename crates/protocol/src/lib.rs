pub mod commands;
pub mod frame;
pub mod theme;
pub mod types;

pub use commands::RenderCommand;
pub use frame::{BarStatus, FrameId, FrameState};
pub use theme::ThemeToken;
pub use types::{Color, Point, Rect};
