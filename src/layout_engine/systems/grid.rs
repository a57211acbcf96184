use super::LayoutSystem;
use crate::layout_engine::LayoutMode;
use crate::layout_engine::engine::{Gaps, LayoutError, Placement, ensure_fits};
use crate::sys::geometry::Size;

/// Near-square grid filled row by row.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout;

impl GridLayout {
    /// `(cols, rows)` for `count` windows: `cols = ceil(sqrt(count))`.
    pub fn dimensions(count: usize) -> (usize, usize) {
        if count == 0 {
            return (0, 0);
        }
        let mut cols = 1;
        while cols * cols < count {
            cols += 1;
        }
        let rows = count.div_ceil(cols);
        (cols, rows)
    }
}

impl LayoutSystem for GridLayout {
    fn mode(&self) -> LayoutMode { LayoutMode::Grid }

    fn arrange(
        &self,
        count: usize,
        container: Size,
        gaps: Gaps,
    ) -> Result<Vec<Placement>, LayoutError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let (cols, rows) = Self::dimensions(count);
        let (c, r) = (cols as i64, rows as i64);
        let (v, h) = (gaps.v(), gaps.h());

        let width = (i64::from(container.width) - (c + 1).saturating_mul(h)) / c;
        let height = (i64::from(container.height) - (r + 1).saturating_mul(v)) / r;
        ensure_fits(self.mode(), width, height)?;

        Ok((0..count)
            .map(|i| {
                let col = (i % cols) as i64;
                let row = (i / cols) as i64;
                Placement::from_cells(h + col * (width + h), v + row * (height + v), width, height)
            })
            .collect())
    }
}
