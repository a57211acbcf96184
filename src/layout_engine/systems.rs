use enum_dispatch::enum_dispatch;

use super::LayoutMode;
use super::engine::{Gaps, LayoutError, Placement};
use crate::sys::geometry::Size;

/// A tiling strategy for one layout mode.
#[enum_dispatch]
pub trait LayoutSystem {
    fn mode(&self) -> LayoutMode;

    /// Returns one placement per window, in window order.
    ///
    /// Every size is validated against the minimum window size before any
    /// placement is produced.
    fn arrange(
        &self,
        count: usize,
        container: Size,
        gaps: Gaps,
    ) -> Result<Vec<Placement>, LayoutError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[enum_dispatch(LayoutSystem)]
pub enum LayoutSystemKind {
    HorizontalSplit(HorizontalSplitLayout),
    VerticalSplit(VerticalSplitLayout),
    Grid(GridLayout),
    MasterDetail(MasterDetailLayout),
}

impl TryFrom<LayoutMode> for LayoutSystemKind {
    type Error = LayoutError;

    fn try_from(mode: LayoutMode) -> Result<Self, Self::Error> {
        Ok(match mode {
            LayoutMode::HorizontalSplit => HorizontalSplitLayout.into(),
            LayoutMode::VerticalSplit => VerticalSplitLayout.into(),
            LayoutMode::Grid => GridLayout.into(),
            LayoutMode::MasterDetail => MasterDetailLayout.into(),
            LayoutMode::Floating => return Err(LayoutError::UnsupportedLayout(mode)),
        })
    }
}

mod grid;
mod master_detail;
mod split;

pub use grid::GridLayout;
pub use master_detail::MasterDetailLayout;
pub use split::{HorizontalSplitLayout, VerticalSplitLayout};
