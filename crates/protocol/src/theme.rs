use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,

    // Bars
    Bar,
    BarHighlight,
    BarSorted,
}
