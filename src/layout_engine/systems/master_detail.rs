use super::LayoutSystem;
use crate::layout_engine::LayoutMode;
use crate::layout_engine::engine::{Gaps, LayoutError, Placement, ensure_fits};
use crate::sys::geometry::Size;

/// Share of the usable width given to the master window, in percent.
const MASTER_RATIO_PERCENT: i64 = 60;

/// First window is the master on the left; the others stack on the right.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterDetailLayout;

impl LayoutSystem for MasterDetailLayout {
    fn mode(&self) -> LayoutMode { LayoutMode::MasterDetail }

    fn arrange(
        &self,
        count: usize,
        container: Size,
        gaps: Gaps,
    ) -> Result<Vec<Placement>, LayoutError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let (v, h) = (gaps.v(), gaps.h());
        let total_width = i64::from(container.width) - 2 * h;
        let total_height = i64::from(container.height) - 2 * v;

        if count == 1 {
            ensure_fits(self.mode(), total_width, total_height)?;
            return Ok(vec![Placement::from_cells(h, v, total_width, total_height)]);
        }

        let details = count as i64 - 1;
        let master_width = total_width * MASTER_RATIO_PERCENT / 100;
        let detail_width = total_width - master_width - h;
        // one gap above each detail window plus one below the last
        let detail_height = (i64::from(container.height) - (details + 1).saturating_mul(v)) / details;

        ensure_fits(self.mode(), master_width, total_height)?;
        ensure_fits(self.mode(), detail_width, detail_height)?;

        let detail_x = h + master_width + h;
        let mut placements = Vec::with_capacity(count);
        placements.push(Placement::from_cells(h, v, master_width, total_height));
        placements.extend(
            (0..details).map(|i| {
                Placement::from_cells(detail_x, v + i * (detail_height + v), detail_width, detail_height)
            }),
        );
        Ok(placements)
    }
}
