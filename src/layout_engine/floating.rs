//! Pointer-driven motion of floating windows.
//!
//! Mouse-move events arrive much faster than the screen refreshes. Instead of
//! recomputing geometry per event, the latest input is accumulated in a single
//! slot and applied once after the next refresh. A newer event never cancels
//! the scheduled flush; it only updates what the flush will apply.

use crate::sys::geometry::{Offset, Rect, Size};
use crate::sys::host::HostWindow;

/// Single-slot accumulator of pointer deltas.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PendingMotion {
    accumulated: Offset,
    pending: bool,
}

impl PendingMotion {
    /// Adds `delta` to the slot. Returns `true` when the caller must schedule a
    /// flush, which only happens for the first push after a flush.
    #[must_use]
    pub fn push(&mut self, delta: Offset) -> bool {
        self.accumulated += delta;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool { self.pending }

    /// Empties the slot. Returns `None` when nothing moved since the last flush.
    pub fn flush(&mut self) -> Option<Offset> {
        self.pending = false;
        let delta = std::mem::take(&mut self.accumulated);
        (!delta.is_zero()).then_some(delta)
    }
}

/// Title-bar drag of a floating window.
#[derive(Default, Debug, Clone)]
pub struct DragMotion {
    motion: PendingMotion,
}

impl DragMotion {
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn on_pointer_move(&mut self, delta: Offset) -> bool { self.motion.push(delta) }

    /// Drops accumulated motion without applying it.
    pub fn discard(&mut self) { let _ = self.motion.flush(); }

    /// Applies everything accumulated since the last flush. Snapped windows are
    /// clamped back inside `container`.
    pub fn apply<W: HostWindow + ?Sized>(&mut self, window: &mut W, container: Rect) -> bool {
        let Some(delta) = self.motion.flush() else {
            return false;
        };
        let size = window.size();
        let mut position = window.position() + delta;
        if window.is_snapped() {
            position = container.clamp_position(position, size);
        }
        window.set_geometry(position, size);
        true
    }
}

/// Corner-grip resize of a floating window.
///
/// The size is always derived from the total pointer travel since the grip
/// was pressed, so dropped intermediate events cannot accumulate error.
#[derive(Debug, Clone)]
pub struct ResizeMotion {
    pointer_on_down: Offset,
    size_on_down: Size,
    latest_pointer: Offset,
    pending: bool,
}

impl ResizeMotion {
    pub fn begin(pointer: Offset, size: Size) -> Self {
        ResizeMotion {
            pointer_on_down: pointer,
            size_on_down: size,
            latest_pointer: pointer,
            pending: false,
        }
    }

    /// Records the latest pointer position. Returns `true` when a flush must be
    /// scheduled.
    #[must_use]
    pub fn on_pointer_move(&mut self, pointer: Offset) -> bool {
        self.latest_pointer = pointer;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool { self.pending }

    pub fn discard(&mut self) { self.pending = false; }

    pub fn target_size<W: HostWindow + ?Sized>(&self, window: &W, container: Rect) -> Size {
        let travel = self.latest_pointer - self.pointer_on_down;
        window.size_bounds().clamp(self.size_on_down.grow(travel), container.size)
    }

    pub fn apply<W: HostWindow + ?Sized>(&mut self, window: &mut W, container: Rect) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        let size = self.target_size(window, container);
        window.set_geometry(window.position(), size);
        true
    }

    /// Pointer released: keep the resized window inside the container.
    pub fn finish<W: HostWindow + ?Sized>(self, window: &mut W, container: Rect) {
        let size = window.size();
        let position = container.clamp_position(window.position(), size);
        if position != window.position() {
            window.set_geometry(position, size);
        }
    }
}
