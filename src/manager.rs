//! The retiling orchestrator.
//!
//! [`WindowManager`] owns the registry, the focus order and the tiling state,
//! and recomputes every open window's geometry whenever any of them change.
//! All operations run synchronously on the caller's thread; the only deferred
//! work is flushed by the host through [`WindowManager::after_refresh`].

mod bulk;
mod command;
mod error;
mod motion;
mod query;
#[cfg(test)]
pub(crate) mod testing;

pub use command::ManagerCommand;
pub use error::ManagerError;
use tracing::{debug, info, trace, warn};

use crate::common::config::TilingSettings;
use crate::layout_engine::{Gaps, LayoutError, LayoutMode, calculate_tiling_positions};
use crate::model::{Cycle, FocusOrder, MountCallback, MountCallbacks, MountTarget, WindowRegistry};
use crate::sys::geometry::Rect;
use crate::sys::host::{HostWindow, WindowBar, WindowId, WindowKind};

/// Bookkeeping for an in-flight "close all".
#[derive(Default, Debug, Clone, PartialEq, Eq)]
struct CloseAll {
    in_progress: bool,
    temporary: usize,
    checked_in: usize,
    clear_after_refresh: bool,
}

pub struct WindowManager<W: HostWindow> {
    registry: WindowRegistry<W>,
    focus: FocusOrder,
    window_bar: Option<Box<dyn WindowBar>>,
    mount_callbacks: MountCallbacks<W>,
    mode: LayoutMode,
    gaps: Gaps,
    container: Rect,
    closing: CloseAll,
    toggle_layout: LayoutMode,
    gap_step: i32,
}

impl<W: HostWindow> WindowManager<W> {
    pub fn new(settings: &TilingSettings, container: Rect) -> Self {
        let gaps = Gaps::new(settings.gap).unwrap_or_else(|err| {
            warn!(%err, "ignoring configured gap");
            Gaps::default()
        });
        let toggle_layout = if settings.toggle_layout.is_tiling() {
            settings.toggle_layout
        } else {
            LayoutMode::HorizontalSplit
        };
        let gap_step = if settings.gap_step > 0 {
            settings.gap_step
        } else {
            warn!(gap_step = settings.gap_step, "ignoring non-positive gap step");
            1
        };
        WindowManager {
            registry: WindowRegistry::new(),
            focus: FocusOrder::new(),
            window_bar: None,
            mount_callbacks: MountCallbacks::default(),
            mode: settings.default_layout,
            gaps,
            container,
            closing: CloseAll::default(),
            toggle_layout,
            gap_step,
        }
    }

    // Registration

    /// Starts tracking a window. It goes to the end of both the tiling order
    /// and the focus order. Re-registering an identifier replaces the handle
    /// and keeps its slots.
    pub fn register(&mut self, window: W) -> Result<WindowId, ManagerError> {
        let id = window.id().ok_or(ManagerError::MissingIdentifier)?;
        if self.registry.insert(id.clone(), window).is_some() {
            debug!(%id, "replaced window handle");
        }
        self.focus.push(id.clone());
        debug!(%id, "registered window");
        Ok(id)
    }

    /// Stops tracking a window and hands its handle back.
    pub fn unregister(&mut self, id: &WindowId) -> Result<W, ManagerError> {
        let window = self
            .registry
            .remove(id)
            .ok_or_else(|| ManagerError::NotRegistered(id.clone()))?;
        self.focus.remove(id);
        if let Some(bar) = &mut self.window_bar {
            bar.remove_window_button(id);
        }
        debug!(%id, "unregistered window");

        if self.closing.in_progress {
            if window.kind() == WindowKind::Temporary {
                self.closing.checked_in += 1;
            }
            if self.closing.checked_in >= self.closing.temporary {
                debug!("all temporary windows closed");
                self.closing.checked_in = 0;
                self.closing.temporary = 0;
                self.closing.clear_after_refresh = true;
            }
        }

        self.retile_all();
        Ok(window)
    }

    /// The host finished building the window. Adds its window-bar control and
    /// retiles. Returns whether a control was added.
    pub fn window_ready(&mut self, id: &WindowId) -> Result<bool, ManagerError> {
        self.ensure_registered(id)?;
        let added = match &mut self.window_bar {
            Some(bar) => {
                bar.add_window_button(id);
                true
            }
            None => false,
        };
        self.retile_all();
        Ok(added)
    }

    /// A window was opened or minimized.
    pub fn signal_window_state(&mut self, id: &WindowId, open: bool) -> Result<(), ManagerError> {
        self.ensure_registered(id)?;
        if let Some(bar) = &mut self.window_bar {
            bar.update_window_button_state(id, open);
        }
        self.retile_all();
        Ok(())
    }

    /// Runs deferred state flips. The host calls this once a render pass has
    /// completed.
    pub fn after_refresh(&mut self) {
        if self.closing.clear_after_refresh {
            self.closing = CloseAll::default();
            debug!("close all finished");
        }
    }

    pub fn is_closing(&self) -> bool { self.closing.in_progress }

    fn ensure_registered(&self, id: &WindowId) -> Result<(), ManagerError> {
        if !self.registry.contains(id) {
            return Err(ManagerError::NotRegistered(id.clone()));
        }
        Ok(())
    }

    // Window bar

    pub fn register_window_bar(&mut self, bar: Box<dyn WindowBar>) -> Result<(), ManagerError> {
        if self.window_bar.is_some() {
            return Err(ManagerError::DuplicateWindowBar);
        }
        debug!("registered window bar");
        self.window_bar = Some(bar);
        Ok(())
    }

    pub fn unregister_window_bar(&mut self) -> Result<Box<dyn WindowBar>, ManagerError> {
        let bar = self.window_bar.take().ok_or(ManagerError::NoWindowBarRegistered)?;
        debug!("unregistered window bar");
        Ok(bar)
    }

    pub fn has_window_bar(&self) -> bool { self.window_bar.is_some() }

    // Mounting

    pub fn register_mount_callback(&mut self, target: MountTarget, callback: MountCallback<W>) {
        self.mount_callbacks.register(target, callback);
    }

    /// Passes `window` to the callback registered for `target`.
    pub fn mount_window(&mut self, target: &MountTarget, window: W) -> Result<(), ManagerError> {
        debug!(%target, id = ?window.id(), "mounting window");
        self.mount_callbacks.mount(target, window).map_err(|window| {
            warn!(%target, id = ?window.id(), "window was not mounted");
            ManagerError::MountTargetNotFound(target.clone())
        })
    }

    // Focus

    /// Records that `id` received focus.
    ///
    /// An empty focus order is tolerated while "close all" is running, since
    /// windows unregister one by one during it.
    pub fn change_focus(&mut self, id: &WindowId) -> Result<(), ManagerError> {
        if self.focus.is_empty() {
            if self.closing.in_progress {
                return Ok(());
            }
            return Err(ManagerError::EmptyFocusOrder);
        }
        self.ensure_registered(id)?;
        self.focus.focus(id.clone());
        trace!(%id, "focus changed");
        Ok(())
    }

    pub fn focus_next(&mut self) -> Option<WindowId> { self.cycle_focus(Cycle::Next) }

    pub fn focus_previous(&mut self) -> Option<WindowId> { self.cycle_focus(Cycle::Previous) }

    fn cycle_focus(&mut self, direction: Cycle) -> Option<WindowId> {
        let registry = &self.registry;
        let target = self.focus.cycle(direction, |id| registry.is_open(id))?;
        if let Some(window) = self.registry.get_mut(&target) {
            window.focus();
        }
        self.focus.focus(target.clone());
        debug!(%target, ?direction, "cycled focus");
        Some(target)
    }

    pub fn last_focused(&self) -> Option<&WindowId> { self.focus.last_focused() }

    /// Most recently focused first.
    pub fn recent_focus_order(&self) -> &[WindowId] { self.focus.recent() }

    // Tiling state

    pub fn layout_mode(&self) -> LayoutMode { self.mode }

    /// Switches layout. Entering a tiling mode un-maximizes windows and
    /// retiles; returning to floating leaves every window where it is.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        let previous = std::mem::replace(&mut self.mode, mode);
        info!(%previous, %mode, "layout mode changed");
        if !mode.is_tiling() {
            return;
        }
        for window in self.registry.windows_mut() {
            if window.is_maximized() {
                window.set_maximized(false);
            }
        }
        if !self.registry.is_empty() {
            self.retile_all();
        }
    }

    pub fn enable_tiling(&mut self, mode: LayoutMode) -> Result<(), ManagerError> {
        if !mode.is_tiling() {
            return Err(ManagerError::TilingModeRequired);
        }
        self.set_layout_mode(mode);
        Ok(())
    }

    pub fn disable_tiling(&mut self) { self.set_layout_mode(LayoutMode::Floating); }

    /// Floating goes to the configured tiling layout; any tiling layout goes
    /// back to floating. Returns the new mode.
    pub fn toggle_tiling(&mut self) -> LayoutMode {
        let mode = if self.mode.is_tiling() {
            LayoutMode::Floating
        } else {
            self.toggle_layout
        };
        self.set_layout_mode(mode);
        self.mode
    }

    pub fn cycle_layout_mode(&mut self) -> LayoutMode {
        self.set_layout_mode(self.mode.next());
        self.mode
    }

    pub fn gap(&self) -> i32 { self.gaps.vertical() }

    /// Sets the vertical gap. While tiling, a gap that would make the current
    /// open windows too small is rejected and the old gap kept.
    pub fn set_gap(&mut self, gap: i32) -> Result<(), ManagerError> {
        let gaps = Gaps::new(gap).map_err(|_| ManagerError::InvalidGap(gap))?;
        if self.mode.is_tiling() {
            let open = self.registry.open_order();
            if let Err(source) =
                calculate_tiling_positions(&open, self.mode, self.container.size, gap)
            {
                debug!(gap, %source, "rejected gap");
                return Err(ManagerError::GapTooLarge { gap, source });
            }
        }
        self.gaps = gaps;
        info!(gap, "window gap changed");
        if !self.registry.is_empty() {
            self.retile_all();
        }
        Ok(())
    }

    /// Nudges the gap by `delta`, never below zero. A gap that does not fit
    /// is ignored. Returns the resulting gap.
    pub fn adjust_gap(&mut self, delta: i32) -> i32 {
        let gap = self.gap().saturating_add(delta).max(0);
        if let Err(err) = self.set_gap(gap) {
            debug!(%err, "gap adjustment ignored");
        }
        self.gap()
    }

    /// The area windows are tiled into: the visible screen minus docked bars.
    pub fn container(&self) -> Rect { self.container }

    pub fn set_container(&mut self, container: Rect) {
        if self.container == container {
            return;
        }
        debug!(?container, "container changed");
        self.container = container;
        self.retile_all();
    }

    // Retiling

    /// Recomputes and applies the geometry of every open window, in tiling
    /// order. Does nothing while floating. If the layout does not fit, the
    /// manager falls back to floating. Returns whether geometry was applied.
    pub fn retile_all(&mut self) -> bool {
        if !self.mode.is_tiling() {
            return false;
        }
        let open = self.registry.open_order();
        self.apply_layout(&open)
    }

    /// Makes `ordered` the front of the tiling order, then retiles.
    pub fn retile_with_order(&mut self, ordered: &[WindowId]) -> bool {
        if !self.mode.is_tiling() {
            return false;
        }
        self.registry.reorder(ordered);
        self.retile_all()
    }

    fn apply_layout(&mut self, open: &[WindowId]) -> bool {
        if open.is_empty() {
            return false;
        }
        let placements =
            match calculate_tiling_positions(open, self.mode, self.container.size, self.gap()) {
                Ok(placements) => placements,
                Err(err) => {
                    self.fall_back_to_floating(&err);
                    return false;
                }
            };
        let origin = self.container.origin;
        for id in open {
            let (Some(placement), Some(window)) = (placements.get(id), self.registry.get_mut(id))
            else {
                continue;
            };
            let position = placement.position + origin;
            trace!(%id, ?position, size = %placement.size, "placing window");
            window.set_geometry(position, placement.size);
        }
        true
    }

    fn fall_back_to_floating(&mut self, err: &LayoutError) {
        warn!(%err, mode = %self.mode, "tiling failed, falling back to floating");
        self.mode = LayoutMode::Floating;
    }

    // Reordering

    pub fn move_focused_prev(&mut self) -> bool {
        self.move_focused(|open, idx| {
            let id = open.remove(idx);
            // The first window wraps to the very end rather than to the slot before last.
            if idx == 0 {
                open.push(id);
            } else {
                open.insert(idx - 1, id);
            }
        })
    }

    pub fn move_focused_next(&mut self) -> bool {
        self.move_focused(|open, idx| {
            let other = if idx + 1 == open.len() { 0 } else { idx + 1 };
            open.swap(idx, other);
        })
    }

    fn move_focused(&mut self, reorder: impl FnOnce(&mut Vec<WindowId>, usize)) -> bool {
        if !self.mode.is_tiling() {
            return false;
        }
        let Some(focused) = self.focus.last_focused() else {
            return false;
        };
        let mut open = self.registry.open_order();
        if open.len() < 2 {
            return false;
        }
        let Some(idx) = open.iter().position(|id| id == focused) else {
            return false;
        };
        reorder(&mut open, idx);
        self.retile_with_order(&open)
    }

    pub fn rotate_order_left(&mut self) -> bool { self.rotate_order(|open| open.rotate_left(1)) }

    pub fn rotate_order_right(&mut self) -> bool { self.rotate_order(|open| open.rotate_right(1)) }

    fn rotate_order(&mut self, rotate: impl FnOnce(&mut [WindowId])) -> bool {
        if !self.mode.is_tiling() {
            return false;
        }
        let mut open = self.registry.open_order();
        if open.len() < 2 {
            return false;
        }
        rotate(&mut open);
        self.retile_with_order(&open)
    }
}
