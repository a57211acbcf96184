pub mod focus;
pub mod mount;
pub mod registry;

pub use focus::{Cycle, FocusOrder};
pub use mount::{MountCallback, MountCallbacks, MountTarget};
pub use registry::WindowRegistry;
