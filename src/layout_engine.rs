pub mod engine;
pub mod floating;
mod mode;
pub mod systems;

pub use engine::{
    Gaps, LayoutError, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, Placement, Placements,
    calculate_tiling_positions,
};
pub use floating::{DragMotion, PendingMotion, ResizeMotion};
pub use mode::LayoutMode;
pub use systems::{LayoutSystem, LayoutSystemKind};
