use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::collections::HashMap;

/// Names a place the host can mount windows into, such as a specific screen
/// or container widget.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountTarget(String);

impl MountTarget {
    pub fn new(name: impl Into<String>) -> Self { MountTarget(name.into()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

pub type MountCallback<W> = Box<dyn FnMut(W)>;

/// Host callbacks that place a window into its destination.
///
/// This lets a process that creates windows hand them to the manager without
/// knowing where they end up on screen.
pub struct MountCallbacks<W> {
    callbacks: HashMap<MountTarget, MountCallback<W>>,
}

impl<W> Default for MountCallbacks<W> {
    fn default() -> Self {
        MountCallbacks { callbacks: HashMap::default() }
    }
}

impl<W> MountCallbacks<W> {
    /// Registers `callback` for `target`, replacing any existing one.
    pub fn register(&mut self, target: MountTarget, callback: MountCallback<W>) {
        if self.callbacks.contains_key(&target) {
            warn!(%target, "mount callback already registered, overwriting");
        }
        debug!(%target, "registered mount callback");
        self.callbacks.insert(target, callback);
    }

    pub fn unregister(&mut self, target: &MountTarget) -> bool {
        self.callbacks.remove(target).is_some()
    }

    pub fn contains(&self, target: &MountTarget) -> bool { self.callbacks.contains_key(target) }

    /// Runs the callback registered for `target`. Returns the window back if
    /// there is none.
    pub fn mount(&mut self, target: &MountTarget, window: W) -> Result<(), W> {
        match self.callbacks.get_mut(target) {
            Some(callback) => {
                callback(window);
                Ok(())
            }
            None => Err(window),
        }
    }
}
