use tracing::debug;

use crate::common::collections::HashMap;
use crate::sys::host::{HostWindow, WindowId};

/// Every registered window plus the order they are tiled in.
///
/// The tiling order and the key set of the window map always hold exactly the
/// same identifiers, each once.
pub struct WindowRegistry<W> {
    windows: HashMap<WindowId, W>,
    order: Vec<WindowId>,
}

impl<W> Default for WindowRegistry<W> {
    fn default() -> Self {
        WindowRegistry {
            windows: HashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<W> WindowRegistry<W> {
    pub fn new() -> Self { Self::default() }

    /// Adds or replaces a window. A new window is appended to the tiling order;
    /// a replaced one keeps its slot. Returns the previous handle, if any.
    pub fn insert(&mut self, id: WindowId, window: W) -> Option<W> {
        let previous = self.windows.insert(id.clone(), window);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn remove(&mut self, id: &WindowId) -> Option<W> {
        let window = self.windows.remove(id)?;
        self.order.retain(|other| other != id);
        Some(window)
    }

    pub fn get(&self, id: &WindowId) -> Option<&W> { self.windows.get(id) }

    pub fn get_mut(&mut self, id: &WindowId) -> Option<&mut W> { self.windows.get_mut(id) }

    pub fn contains(&self, id: &WindowId) -> bool { self.windows.contains_key(id) }

    pub fn len(&self) -> usize { self.windows.len() }

    pub fn is_empty(&self) -> bool { self.windows.is_empty() }

    /// All identifiers in tiling order, open or not.
    pub fn order(&self) -> &[WindowId] { &self.order }

    /// Windows in tiling order.
    pub fn iter(&self) -> impl Iterator<Item = (&WindowId, &W)> {
        self.order.iter().filter_map(|id| self.windows.get_key_value(id))
    }

    /// Windows in no particular order, for operations that touch all of them.
    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut W> { self.windows.values_mut() }

    /// Rewrites the tiling order so that `front` comes first.
    ///
    /// Identifiers in `front` that are not registered are ignored, as are
    /// repeats. Registered windows missing from `front` follow it, keeping
    /// their previous relative order.
    pub fn reorder(&mut self, front: &[WindowId]) {
        let mut order = Vec::with_capacity(self.order.len());
        for id in front {
            if self.windows.contains_key(id) && !order.contains(id) {
                order.push(id.clone());
            }
        }
        for id in &self.order {
            if !order.contains(id) {
                order.push(id.clone());
            }
        }
        debug!(?order, "tiling order rewritten");
        self.order = order;
    }
}

impl<W: HostWindow> WindowRegistry<W> {
    /// Identifiers of open windows, in tiling order.
    pub fn open_order(&self) -> Vec<WindowId> {
        self.iter().filter(|(_, w)| w.is_open()).map(|(id, _)| id.clone()).collect()
    }

    pub fn is_open(&self, id: &WindowId) -> bool { self.get(id).is_some_and(|w| w.is_open()) }
}
