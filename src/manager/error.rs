use thiserror::Error;

use crate::layout_engine::LayoutError;
use crate::model::MountTarget;
use crate::sys::host::WindowId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("window gap must be >= 0, got {0}")]
    InvalidGap(i32),
    #[error("gap {gap} does not fit the open windows: {source}")]
    GapTooLarge { gap: i32, source: LayoutError },
    #[error("window has no identifier; set one before registering it")]
    MissingIdentifier,
    #[error("window {0} is not registered")]
    NotRegistered(WindowId),
    #[error("focus order is empty")]
    EmptyFocusOrder,
    #[error("no tiling layout is active")]
    NotTiling,
    #[error("window {0} has no tiled placement")]
    WindowNotFound(WindowId),
    #[error("a window bar is already registered")]
    DuplicateWindowBar,
    #[error("no window bar is registered")]
    NoWindowBarRegistered,
    #[error("enabling tiling requires a tiling layout; use disable_tiling for floating")]
    TilingModeRequired,
    #[error("no mount callback registered for {0}")]
    MountTargetNotFound(MountTarget),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
