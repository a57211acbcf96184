use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ManagerError, WindowManager};
use crate::layout_engine::LayoutMode;
use crate::sys::host::HostWindow;

/// User-facing operations, bindable to keys or buttons from configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ManagerCommand {
    SetLayout(LayoutMode),
    EnableTiling(LayoutMode),
    DisableTiling,
    ToggleTiling,
    CycleLayout,

    SetGap(i32),
    IncreaseGap,
    DecreaseGap,

    FocusNext,
    FocusPrevious,

    MoveFocusedPrev,
    MoveFocusedNext,
    RotateLeft,
    RotateRight,

    OpenAll,
    CloseAll,
    MinimizeAll,
    SnapAll,
    UnsnapAll,
    ResetAll,

    Retile,
}

impl<W: HostWindow> WindowManager<W> {
    pub fn handle_command(&mut self, cmd: ManagerCommand) -> Result<(), ManagerError> {
        info!(?cmd);
        match cmd {
            ManagerCommand::SetLayout(mode) => self.set_layout_mode(mode),
            ManagerCommand::EnableTiling(mode) => self.enable_tiling(mode)?,
            ManagerCommand::DisableTiling => self.disable_tiling(),
            ManagerCommand::ToggleTiling => {
                self.toggle_tiling();
            }
            ManagerCommand::CycleLayout => {
                self.cycle_layout_mode();
            }
            ManagerCommand::SetGap(gap) => self.set_gap(gap)?,
            ManagerCommand::IncreaseGap => {
                self.adjust_gap(self.gap_step);
            }
            ManagerCommand::DecreaseGap => {
                self.adjust_gap(self.gap_step.saturating_neg());
            }
            ManagerCommand::FocusNext => {
                self.focus_next();
            }
            ManagerCommand::FocusPrevious => {
                self.focus_previous();
            }
            ManagerCommand::MoveFocusedPrev => {
                self.move_focused_prev();
            }
            ManagerCommand::MoveFocusedNext => {
                self.move_focused_next();
            }
            ManagerCommand::RotateLeft => {
                self.rotate_order_left();
            }
            ManagerCommand::RotateRight => {
                self.rotate_order_right();
            }
            ManagerCommand::OpenAll => self.open_all(),
            ManagerCommand::CloseAll => self.close_all(),
            ManagerCommand::MinimizeAll => self.minimize_all(),
            ManagerCommand::SnapAll => self.snap_all(),
            ManagerCommand::UnsnapAll => self.unsnap_all(),
            ManagerCommand::ResetAll => self.reset_all(),
            ManagerCommand::Retile => {
                self.retile_all();
            }
        }
        Ok(())
    }
}
