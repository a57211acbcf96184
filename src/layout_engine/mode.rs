use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// How open windows are arranged on screen.
#[derive(
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LayoutMode {
    /// Windows position themselves; no automatic geometry.
    #[default]
    Floating,
    /// Side by side, one column per window.
    HorizontalSplit,
    /// Stacked top to bottom, one row per window.
    VerticalSplit,
    Grid,
    /// One large master window on the left, the rest stacked on the right.
    MasterDetail,
}

impl LayoutMode {
    pub fn is_tiling(self) -> bool { self != LayoutMode::Floating }

    /// The mode after this one, wrapping back to floating.
    pub fn next(self) -> LayoutMode {
        let modes: Vec<LayoutMode> = LayoutMode::iter().collect();
        let idx = modes.iter().position(|m| *m == self).unwrap_or(0);
        modes[(idx + 1) % modes.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Floating => "Floating",
            LayoutMode::HorizontalSplit => "Horizontal Split",
            LayoutMode::VerticalSplit => "Vertical Split",
            LayoutMode::Grid => "Grid Layout",
            LayoutMode::MasterDetail => "Master Detail",
        }
    }
}
