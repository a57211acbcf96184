use tracing::trace;

use super::{ManagerError, WindowManager};
use crate::layout_engine::{DragMotion, ResizeMotion};
use crate::sys::host::{HostWindow, WindowId};

// Tiled geometry is owned by the manager, so pointer motion is dropped while
// a tiling layout is active.
impl<W: HostWindow> WindowManager<W> {
    /// Applies a coalesced drag to `id`. Returns whether the window moved.
    pub fn apply_drag(&mut self, id: &WindowId, drag: &mut DragMotion) -> Result<bool, ManagerError> {
        if self.mode.is_tiling() {
            trace!(%id, "drag ignored while tiling");
            drag.discard();
            return Ok(false);
        }
        let container = self.container;
        let window = self
            .registry
            .get_mut(id)
            .ok_or_else(|| ManagerError::NotRegistered(id.clone()))?;
        Ok(drag.apply(window, container))
    }

    /// Applies a coalesced resize to `id`. Returns whether the window changed.
    pub fn apply_resize(
        &mut self,
        id: &WindowId,
        resize: &mut ResizeMotion,
    ) -> Result<bool, ManagerError> {
        if self.mode.is_tiling() {
            trace!(%id, "resize ignored while tiling");
            resize.discard();
            return Ok(false);
        }
        let container = self.container;
        let window = self
            .registry
            .get_mut(id)
            .ok_or_else(|| ManagerError::NotRegistered(id.clone()))?;
        Ok(resize.apply(window, container))
    }

    pub fn finish_resize(&mut self, id: &WindowId, resize: ResizeMotion) -> Result<(), ManagerError> {
        if self.mode.is_tiling() {
            return Ok(());
        }
        let container = self.container;
        let window = self
            .registry
            .get_mut(id)
            .ok_or_else(|| ManagerError::NotRegistered(id.clone()))?;
        resize.finish(window, container);
        Ok(())
    }
}
