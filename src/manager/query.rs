use super::{ManagerError, WindowManager};
use crate::layout_engine::{Placement, calculate_tiling_positions};
use crate::sys::geometry::{Offset, Size};
use crate::sys::host::{HostWindow, WindowId};

impl<W: HostWindow> WindowManager<W> {
    /// Where `id` is placed by the current layout, in screen coordinates.
    pub fn position_for(&mut self, id: &WindowId) -> Result<Offset, ManagerError> {
        Ok(self.placement_for(id)?.position)
    }

    pub fn size_for(&mut self, id: &WindowId) -> Result<Size, ManagerError> {
        Ok(self.placement_for(id)?.size)
    }

    /// Computes the placement of one window from the current state. A layout
    /// that no longer fits switches the manager to floating, like a retile.
    pub fn placement_for(&mut self, id: &WindowId) -> Result<Placement, ManagerError> {
        if !self.mode.is_tiling() {
            return Err(ManagerError::NotTiling);
        }
        if !self.registry.is_open(id) {
            return Err(ManagerError::WindowNotFound(id.clone()));
        }
        let open = self.registry.open_order();
        let placements =
            match calculate_tiling_positions(&open, self.mode, self.container.size, self.gap()) {
                Ok(placements) => placements,
                Err(err) => {
                    self.fall_back_to_floating(&err);
                    return Err(err.into());
                }
            };
        let placement = placements
            .get(id)
            .ok_or_else(|| ManagerError::WindowNotFound(id.clone()))?;
        Ok(Placement {
            position: placement.position + self.container.origin,
            size: placement.size,
        })
    }

    pub fn window(&self, id: &WindowId) -> Option<&W> { self.registry.get(id) }

    pub fn window_mut(&mut self, id: &WindowId) -> Option<&mut W> { self.registry.get_mut(id) }

    /// All windows in tiling order.
    pub fn windows(&self) -> impl Iterator<Item = (&WindowId, &W)> { self.registry.iter() }

    pub fn tiling_order(&self) -> &[WindowId] { self.registry.order() }

    /// Open windows in tiling order.
    pub fn open_windows(&self) -> Vec<WindowId> { self.registry.open_order() }

    pub fn is_registered(&self, id: &WindowId) -> bool { self.registry.contains(id) }
}
