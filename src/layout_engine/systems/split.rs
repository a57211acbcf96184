use super::LayoutSystem;
use crate::layout_engine::LayoutMode;
use crate::layout_engine::engine::{Gaps, LayoutError, Placement, ensure_fits};
use crate::sys::geometry::Size;

/// Equal-width columns spanning the full height.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HorizontalSplitLayout;

/// Equal-height rows spanning the full width.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerticalSplitLayout;

impl LayoutSystem for HorizontalSplitLayout {
    fn mode(&self) -> LayoutMode { LayoutMode::HorizontalSplit }

    fn arrange(
        &self,
        count: usize,
        container: Size,
        gaps: Gaps,
    ) -> Result<Vec<Placement>, LayoutError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let n = count as i64;
        let (v, h) = (gaps.v(), gaps.h());

        let width = (i64::from(container.width) - (n + 1).saturating_mul(h)) / n;
        let height = i64::from(container.height) - 2 * v;
        ensure_fits(self.mode(), width, height)?;

        Ok((0..n).map(|i| Placement::from_cells(h + i * (width + h), v, width, height)).collect())
    }
}

impl LayoutSystem for VerticalSplitLayout {
    fn mode(&self) -> LayoutMode { LayoutMode::VerticalSplit }

    fn arrange(
        &self,
        count: usize,
        container: Size,
        gaps: Gaps,
    ) -> Result<Vec<Placement>, LayoutError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let n = count as i64;
        let (v, h) = (gaps.v(), gaps.h());

        let width = i64::from(container.width) - 2 * h;
        let height = (i64::from(container.height) - (n + 1).saturating_mul(v)) / n;
        ensure_fits(self.mode(), width, height)?;

        Ok((0..n).map(|i| Placement::from_cells(h, v + i * (height + v), width, height)).collect())
    }
}
