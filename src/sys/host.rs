//! The surface the host UI framework exposes to the window manager.
//!
//! The manager never owns a window widget. The host hands it a handle type
//! implementing [`HostWindow`], and all geometry and state changes flow back
//! through that handle.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Offset, Size, SizeBounds};

/// Unique, non-empty identifier of a window.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WindowId(String);

impl WindowId {
    /// Returns `None` for an empty identifier.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() { None } else { Some(WindowId(id)) }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for WindowId {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WindowId::new(value).ok_or("window id must not be empty")
    }
}

impl From<WindowId> for String {
    fn from(id: WindowId) -> String { id.0 }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// How a window reacts to "close all".
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// Minimized, never destroyed.
    #[default]
    Permanent,
    /// Removed from the app entirely.
    Temporary,
}

pub trait HostWindow {
    fn id(&self) -> Option<WindowId>;

    fn kind(&self) -> WindowKind { WindowKind::Permanent }

    fn is_open(&self) -> bool;
    fn set_open(&mut self, open: bool);

    fn is_maximized(&self) -> bool;
    fn set_maximized(&mut self, maximized: bool);

    fn position(&self) -> Offset;
    fn size(&self) -> Size;

    /// Applies a new geometry. Hosts that remember a "starting" geometry for
    /// [`HostWindow::reset_geometry`] should update it here as well, so tiled
    /// windows reset to their tile.
    fn set_geometry(&mut self, position: Offset, size: Size);

    fn size_bounds(&self) -> SizeBounds { SizeBounds::default() }

    /// Snapped windows are locked inside the container area.
    fn is_snapped(&self) -> bool { false }
    fn set_snapped(&mut self, _snapped: bool) {}

    fn reset_geometry(&mut self) {}

    /// Asks the host to tear the window down. The host is expected to call
    /// `WindowManager::unregister` once the window is actually gone.
    fn request_removal(&mut self) {}

    fn focus(&mut self) {}
}

/// Optional bar showing one control per window.
pub trait WindowBar {
    fn add_window_button(&mut self, id: &WindowId);
    fn remove_window_button(&mut self, id: &WindowId);
    fn update_window_button_state(&mut self, id: &WindowId, open: bool);
}
