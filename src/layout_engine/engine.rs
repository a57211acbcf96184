use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use super::LayoutMode;
use super::systems::{LayoutSystem, LayoutSystemKind};
use crate::common::collections::HashMap;
use crate::sys::geometry::{Offset, Size};
use crate::sys::host::WindowId;

/// Smallest usable tiled window width, in cells.
pub const MIN_WINDOW_WIDTH: i64 = 12;
/// Smallest usable tiled window height, in cells.
pub const MIN_WINDOW_HEIGHT: i64 = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid container size: {0}")]
    InvalidContainer(Size),
    #[error("window gap must be >= 0, got {0}")]
    InvalidGap(i32),
    #[error("{mode} layout is too cramped: windows would be {width}x{height}")]
    LayoutTooCramped { mode: LayoutMode, width: i64, height: i64 },
    #[error("unsupported tiling layout: {0}")]
    UnsupportedLayout(LayoutMode),
}

/// Spacing around and between tiled windows.
///
/// Terminal cells are roughly twice as tall as they are wide, so the
/// horizontal gap is always double the vertical one.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Gaps {
    vertical: i32,
}

impl Gaps {
    pub fn new(vertical: i32) -> Result<Gaps, LayoutError> {
        if vertical < 0 {
            return Err(LayoutError::InvalidGap(vertical));
        }
        Ok(Gaps { vertical })
    }

    pub fn vertical(&self) -> i32 { self.vertical }

    pub fn horizontal(&self) -> i64 { 2 * i64::from(self.vertical) }

    pub(crate) fn v(&self) -> i64 { i64::from(self.vertical) }

    pub(crate) fn h(&self) -> i64 { self.horizontal() }
}

impl TryFrom<i32> for Gaps {
    type Error = LayoutError;

    fn try_from(value: i32) -> Result<Self, Self::Error> { Gaps::new(value) }
}

impl From<Gaps> for i32 {
    fn from(gaps: Gaps) -> i32 { gaps.vertical }
}

/// Where a single tiled window goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Offset,
    pub size: Size,
}

impl Placement {
    /// Builds a placement from already validated cell values.
    pub(crate) fn from_cells(x: i64, y: i64, width: i64, height: i64) -> Placement {
        Placement {
            position: Offset::new(cell(x), cell(y)),
            size: Size::new(cell(width), cell(height)),
        }
    }
}

fn cell(value: i64) -> i32 { value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32 }

pub type Placements = HashMap<WindowId, Placement>;

pub(crate) fn ensure_fits(mode: LayoutMode, width: i64, height: i64) -> Result<(), LayoutError> {
    if width < MIN_WINDOW_WIDTH || height < MIN_WINDOW_HEIGHT {
        return Err(LayoutError::LayoutTooCramped { mode, width, height });
    }
    Ok(())
}

/// Computes where every window goes under `mode`.
///
/// The order of `windows` alone decides the arrangement: the first window is
/// leftmost/topmost, and in master-detail it is the master. The result is
/// either complete or an error; a partial mapping is never returned.
///
/// Floating mode and an empty window list both produce an empty mapping.
pub fn calculate_tiling_positions(
    windows: &[WindowId],
    mode: LayoutMode,
    container: Size,
    gap: i32,
) -> Result<Placements, LayoutError> {
    if windows.is_empty() || mode == LayoutMode::Floating {
        return Ok(Placements::default());
    }
    if !container.is_positive() {
        return Err(LayoutError::InvalidContainer(container));
    }
    let gaps = Gaps::new(gap)?;
    let system = LayoutSystemKind::try_from(mode)?;

    let placements = system.arrange(windows.len(), container, gaps)?;
    debug_assert_eq!(placements.len(), windows.len());

    trace!(%mode, %container, gap, count = windows.len(), "calculated tiling positions");
    Ok(windows.iter().cloned().zip(placements).collect())
}
