//! Most-recently-focused ordering of windows.
//!
//! This order feeds focus cycling and the window switcher. It is independent of
//! the tiling order: focusing a window never changes where it is tiled.

use crate::sys::host::WindowId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Next,
    Previous,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FocusOrder {
    recent: Vec<WindowId>,
    last_focused: Option<WindowId>,
}

impl FocusOrder {
    pub fn new() -> Self { Self::default() }

    /// Adds a newly registered window at the back.
    pub fn push(&mut self, id: WindowId) {
        if !self.recent.contains(&id) {
            self.recent.push(id);
        }
    }

    /// Forgets a window. If it was the last focused one, the most recent
    /// remaining window takes its place.
    pub fn remove(&mut self, id: &WindowId) -> bool {
        let Some(idx) = self.recent.iter().position(|other| other == id) else {
            return false;
        };
        self.recent.remove(idx);
        if self.last_focused.as_ref() == Some(id) {
            self.last_focused = self.recent.first().cloned();
        }
        true
    }

    /// Moves `id` to the front and records it as last focused.
    pub fn focus(&mut self, id: WindowId) {
        self.recent.retain(|other| *other != id);
        self.recent.insert(0, id.clone());
        self.last_focused = Some(id);
    }

    pub fn recent(&self) -> &[WindowId] { &self.recent }

    pub fn last_focused(&self) -> Option<&WindowId> { self.last_focused.as_ref() }

    pub fn contains(&self, id: &WindowId) -> bool { self.recent.contains(id) }

    pub fn is_empty(&self) -> bool { self.recent.is_empty() }

    pub fn len(&self) -> usize { self.recent.len() }

    /// Picks the window a focus cycle lands on, without focusing it.
    ///
    /// The search starts next to the last focused window and wraps around,
    /// skipping windows for which `is_open` is false. Without a last focused
    /// window it starts from the front (`Next`) or the back (`Previous`).
    /// Returns `None` when no other open window exists.
    pub fn cycle(&self, direction: Cycle, is_open: impl Fn(&WindowId) -> bool) -> Option<WindowId> {
        let len = self.recent.len();
        let current = self
            .last_focused
            .as_ref()
            .and_then(|id| self.recent.iter().position(|other| other == id));

        let candidates: Box<dyn Iterator<Item = usize>> = match (current, direction) {
            (Some(idx), Cycle::Next) => Box::new((1..len).map(move |k| (idx + k) % len)),
            (Some(idx), Cycle::Previous) => Box::new((1..len).map(move |k| (idx + len - k) % len)),
            (None, Cycle::Next) => Box::new(0..len),
            (None, Cycle::Previous) => Box::new((0..len).rev()),
        };

        candidates.map(|idx| &self.recent[idx]).find(|id| is_open(id)).cloned()
    }
}
