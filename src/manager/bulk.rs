use tracing::{debug, info};

use super::{CloseAll, WindowManager};
use crate::sys::host::{HostWindow, WindowKind};

impl<W: HostWindow> WindowManager<W> {
    pub fn open_all(&mut self) {
        for window in self.registry.windows_mut() {
            window.set_open(true);
        }
        self.retile_all();
    }

    /// Removes temporary windows and minimizes permanent ones.
    ///
    /// Temporary windows only ask the host to remove them; the close counts as
    /// finished once each of them has been unregistered and a refresh has run.
    pub fn close_all(&mut self) {
        let temporary = self
            .registry
            .iter()
            .filter(|(_, w)| w.kind() == WindowKind::Temporary)
            .count();
        info!(temporary, total = self.registry.len(), "closing all windows");
        self.closing = CloseAll {
            in_progress: true,
            temporary,
            checked_in: 0,
            clear_after_refresh: temporary == 0,
        };
        for window in self.registry.windows_mut() {
            match window.kind() {
                WindowKind::Temporary => window.request_removal(),
                WindowKind::Permanent => window.set_open(false),
            }
        }
        self.retile_all();
    }

    pub fn minimize_all(&mut self) {
        for window in self.registry.windows_mut() {
            window.set_open(false);
        }
        self.retile_all();
    }

    /// Locks every window inside the container.
    pub fn snap_all(&mut self) {
        for window in self.registry.windows_mut() {
            window.set_snapped(true);
        }
    }

    pub fn unsnap_all(&mut self) {
        for window in self.registry.windows_mut() {
            window.set_snapped(false);
        }
    }

    /// Restores every window's starting geometry.
    pub fn reset_all(&mut self) {
        debug!(count = self.registry.len(), "resetting all windows");
        for window in self.registry.windows_mut() {
            window.reset_geometry();
        }
    }
}
